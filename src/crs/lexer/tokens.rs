//! Token definitions for realm strings
//!
//! The tokens are defined using the logos derive macro.
use logos::Logos;
use std::fmt;

/// All tokens that can appear in a realm string
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // One uppercase letter, optionally followed by one lowercase letter
    #[regex(r"[A-Z][a-z]?", |lex| lex.slice().to_owned())]
    Code(String),

    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Code(code) => write!(f, "{code}"),
            Token::OpenBracket => write!(f, "["),
            Token::CloseBracket => write!(f, "]"),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}
