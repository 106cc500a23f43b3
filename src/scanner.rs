use crate::{
    error::{Error, Result},
    token::{Keyword, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use std::{iter::FusedIterator, mem, str::Chars};

const QUOTE: char = '\'';

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
    finished: bool,
}

/// Yields every token before `EndOfInput`, then stops. Also stops after
/// yielding the first error.
impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.finished { return None }

        match self.next_token() {
            Ok(token) if token.kind() == TokenKind::EndOfInput => {
                self.finished = true;
                None
            },
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
            token => Some(token),
        }
    }
}

impl <'a> FusedIterator for Scanner<'a> {}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
            finished: false,
        }
    }

    /// Scans the whole source, including the trailing `EndOfInput` token.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind() == TokenKind::EndOfInput;
            tokens.push(token);
            if done { return Ok(tokens) }
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Produces the next token. Once the source is exhausted every call
    /// returns `EndOfInput` stamped with the final line.
    pub fn next_token(&mut self) -> Result<Token> {
        self.lexeme_buffer.clear();

        while self.skip_whitespace() || self.skip_comment()? {}

        let c = match self.current() {
            Some(c) => c,
            None => return Ok(Token::end_of_input(self.line)),
        };

        let line = self.line;
        let kind = if c.is_ascii_alphabetic() {
            self.extract_identifier()
        } else if c.is_ascii_digit() {
            self.extract_number()?
        } else if c == QUOTE {
            self.extract_literal()?
        } else {
            self.extract_operator(c)?
        };

        let lexeme = mem::take(&mut self.lexeme_buffer);
        Ok(Token::new(kind, lexeme, line))
    }

    fn current(&mut self) -> Option<char> {
        self.src.peek().copied()
    }

    fn peek(&mut self) -> Option<char> {
        self.src.peek_nth(1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.src.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn bump(&mut self) {
        if let Some(c) = self.advance() {
            self.lexeme_buffer.push(c);
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while matches!(self.current(), Some(' ') | Some('\t') | Some('\n')) {
            self.advance();
            skipped = true;
        }
        skipped
    }

    fn skip_comment(&mut self) -> Result<bool> {
        match (self.current(), self.peek()) {
            (Some('{'), _) => {
                self.advance();
                loop {
                    match self.advance() {
                        Some('}') => return Ok(true),
                        Some(_) => {},
                        None => return Err(Error::unterminated_comment(
                            self.line,
                            "Unterminated '{' comment.",
                        )),
                    }
                }
            },
            (Some('('), Some('*')) => {
                self.advance();
                self.advance();
                loop {
                    match (self.current(), self.peek()) {
                        (Some('*'), Some(')')) => {
                            self.advance();
                            self.advance();
                            return Ok(true);
                        },
                        (Some(_), _) => { self.advance(); },
                        (None, _) => return Err(Error::unterminated_comment(
                            self.line,
                            "Unterminated '(*' comment.",
                        )),
                    }
                }
            },
            _ => Ok(false),
        }
    }

    fn extract_identifier(&mut self) -> TokenKind {
        while matches!(self.current(), Some(c) if c.is_ascii_alphanumeric()) {
            self.bump();
        }

        match Keyword::from_word(&self.lexeme_buffer) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        }
    }

    fn extract_number(&mut self) -> Result<TokenKind> {
        let mut state = NumberState::Integer;
        loop {
            match state.transition(self.current(), self.peek()) {
                Transition::Consume(next) => {
                    self.bump();
                    state = next;
                },
                Transition::Accept => return Ok(TokenKind::Number),
                Transition::Reject(reason) => return Err(Error::malformed_number(
                    self.line,
                    format!("Malformed number '{}': {}.", self.lexeme_buffer, reason),
                )),
            }
        }
    }

    // The buffer collects decoded content only: no delimiters, and a doubled
    // quote collapses to one.
    fn extract_literal(&mut self) -> Result<TokenKind> {
        self.advance();
        loop {
            match (self.current(), self.peek()) {
                (Some(QUOTE), Some(QUOTE)) => {
                    self.advance();
                    self.bump();
                },
                (Some(QUOTE), _) => {
                    self.advance();
                    break;
                },
                (Some(_), _) => self.bump(),
                (None, _) => return Err(Error::unterminated_literal(self.line)),
            }
        }

        if self.lexeme_buffer.chars().count() == 1 {
            Ok(TokenKind::CharLiteral)
        } else {
            Ok(TokenKind::StringLiteral)
        }
    }

    fn extract_operator(&mut self, c: char) -> Result<TokenKind> {
        use TokenKind::*;
        let (kind, width) = match (c, self.peek()) {
            (':', Some('=')) => (AssignOp, 2),
            ('<', Some('>')) | ('<', Some('=')) | ('>', Some('=')) => (RelOp, 2),
            ('<', _) | ('>', _) | ('=', _) => (RelOp, 1),
            ('+', _) | ('-', _) => (AddOp, 1),
            ('*', _) | ('/', _) => (MulOp, 1),
            (';', _) => (Semicolon, 1),
            (',', _) => (Comma, 1),
            ('.', _) => (Period, 1),
            (':', _) => (Colon, 1),
            ('(', _) => (LParen, 1),
            (')', _) => (RParen, 1),
            ('[', _) => (LBracket, 1),
            (']', _) => (RBracket, 1),
            _ => return Err(Error::unexpected_character(self.line, c)),
        };

        for _ in 0..width {
            self.bump();
        }
        Ok(kind)
    }
}

/// States of the numeric literal recogniser. Only `Integer`, `Fraction` and
/// `Exponent` accept.
#[derive(Clone, Copy, Debug, PartialEq)]
enum NumberState {
    Integer,
    Point,
    Fraction,
    ExponentMarker,
    ExponentSign,
    Exponent,
}

#[derive(Debug, PartialEq)]
enum Transition {
    Consume(NumberState),
    Accept,
    Reject(&'static str),
}

impl NumberState {
    fn transition(self, c: Option<char>, next: Option<char>) -> Transition {
        use NumberState::*;
        use Transition::*;

        let is_digit = matches!(c, Some(d) if d.is_ascii_digit());
        let is_exponent_marker = matches!(c, Some('e') | Some('E'));

        match self {
            Integer if is_digit => Consume(Integer),
            // `1..5` is a range: the dots belong to the next tokens.
            Integer if c == Some('.') => {
                if next == Some('.') { Accept } else { Consume(Point) }
            },
            Integer | Fraction if is_exponent_marker => Consume(ExponentMarker),
            Integer => Accept,

            Point if is_digit => Consume(Fraction),
            Point => Reject("digit expected after '.'"),

            Fraction if is_digit => Consume(Fraction),
            Fraction => Accept,

            ExponentMarker if matches!(c, Some('+') | Some('-')) => Consume(ExponentSign),
            ExponentMarker if is_digit => Consume(Exponent),
            ExponentMarker => Reject("sign or digit expected after exponent marker"),

            ExponentSign if is_digit => Consume(Exponent),
            ExponentSign => Reject("digit expected after exponent sign"),

            Exponent if is_digit => Consume(Exponent),
            Exponent => Accept,
        }
    }
}
