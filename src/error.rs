use std::result;
use std::fmt::{self, Display};

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    UnterminatedComment,
    UnterminatedLiteral,
    MalformedNumber,
    UnexpectedCharacter(char),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    line: usize,
    message: String,
}

impl Error {
    pub fn unterminated_comment<S: Into<String>>(line: usize, message: S) -> Error {
        Error { kind: ErrorKind::UnterminatedComment, line, message: message.into() }
    }

    pub fn unterminated_literal(line: usize) -> Error {
        let message = "Unterminated string literal.";
        Error { kind: ErrorKind::UnterminatedLiteral, line, message: message.into() }
    }

    pub fn malformed_number<S: Into<String>>(line: usize, message: S) -> Error {
        Error { kind: ErrorKind::MalformedNumber, line, message: message.into() }
    }

    pub fn unexpected_character(line: usize, c: char) -> Error {
        let message = format!("Unexpected character '{}'.", c);
        Error { kind: ErrorKind::UnexpectedCharacter(c), line, message }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(InvalidData, e)
    }
}
