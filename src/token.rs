use phf::phf_map;
use std::fmt::{self, Display};

static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "PROGRAM" => Keyword::Program,
    "VAR" => Keyword::Var,
    "BEGIN" => Keyword::Begin,
    "END" => Keyword::End,
    "IF" => Keyword::If,
    "THEN" => Keyword::Then,
    "ELSE" => Keyword::Else,
    "WHILE" => Keyword::While,
    "DO" => Keyword::Do,
};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Identifier, Number, StringLiteral, CharLiteral,

    Keyword(Keyword),

    AssignOp, RelOp, AddOp, MulOp,

    Period, Semicolon, Comma, Colon,
    LParen, RParen, LBracket, RBracket,

    EndOfInput,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Program, Var, Begin, End, If, Then, Else, While, Do,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, line: usize) -> Token {
        Token { kind, lexeme: lexeme.into(), line }
    }

    pub(crate) fn end_of_input(line: usize) -> Token {
        Token::new(TokenKind::EndOfInput, "EOF", line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text. Quoted literals hold their decoded content.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based line of the token's first character.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }
}

impl Keyword {
    /// Reserved words are matched ignoring ASCII case.
    pub fn from_word(word: &str) -> Option<Keyword> {
        KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
    }

    pub fn as_str(&self) -> &'static str {
        use Keyword::*;
        match self {
            Program => "PROGRAM",
            Var => "VAR",
            Begin => "BEGIN",
            End => "END",
            If => "IF",
            Then => "THEN",
            Else => "ELSE",
            While => "WHILE",
            Do => "DO",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        let name = match self {
            Keyword(k) => return write!(f, "Keyword({})", k),
            Identifier => "Identifier",
            Number => "Number",
            StringLiteral => "StringLiteral",
            CharLiteral => "CharLiteral",
            AssignOp => "AssignOp",
            RelOp => "RelOp",
            AddOp => "AddOp",
            MulOp => "MulOp",
            Period => "Period",
            Semicolon => "Semicolon",
            Comma => "Comma",
            Colon => "Colon",
            LParen => "LParen",
            RParen => "RParen",
            LBracket => "LBracket",
            RBracket => "RBracket",
            EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.lexeme, self.line)
    }
}
