pub mod error;
pub mod scanner;
pub mod token;

pub use crate::{
    error::{Error, ErrorKind, Result},
    scanner::Scanner,
    token::{Keyword, Token, TokenKind},
};
