//! Lexer for realm strings
//!
//! Tokenization is handled entirely by logos. The lenient parser does not use it: it reads
//! characters directly so it can skip anything. The strict parser runs on these tokens,
//! which keeps the chumsky grammar free of character-level concerns.
//!
//! ASCII whitespace between tokens is skipped. Every other character outside the token set
//! (a lone lowercase letter, a digit, `;`) comes back as a lex error with its span.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::ops::Range;

/// A token or lex error with its byte range in the source
pub type LexedToken = (Result<Token, ()>, Range<usize>);

/// Tokenize a string, keeping lex errors in place
pub fn tokenize_with_spans(source: &str) -> Vec<LexedToken> {
    Token::lexer(source).spanned().collect()
}
