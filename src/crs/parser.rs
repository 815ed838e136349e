//! Parsers for realm strings
//!
//! Two parsers share the grammar below and produce the same graph for well-formed input:
//!
//!     code          = UPPER [ LOWER ]
//!     realm_string  = { code [ embedding ] [ coupling ] }
//!     embedding     = '[' code [ embedding ] [ coupling ] ']'
//!     coupling      = '(' code { [','] code } ')'
//!
//! Lenient (the default):
//!     A hand-written descent parser over the raw characters. It never fails: characters
//!     that cannot start a code are skipped, unterminated `[` and `(` groups end where the
//!     input ends, and a realm coupled with itself is dropped. This is the contract existing
//!     realm strings were written against. See [parse].
//!
//!     The parse is split the same way the grammar is: [reader] reads one code, [embedding]
//!     consumes a bracketed chain, [coupling] consumes a parenthesized list and
//!     [orchestrator] drives them over the input. All of them work on one [ParserState].
//!
//! Strict:
//!     Tokenizes with the logos lexer and runs a chumsky grammar over the tokens. Any
//!     character outside the grammar, unbalanced group or self coupling is reported with its
//!     position, and the resulting graph is validated. See [parse_strict].

pub mod coupling;
pub mod embedding;
pub mod error;
pub mod orchestrator;
pub mod reader;
pub mod state;
pub mod strict;

pub use error::{ParseError, ParseErrorKind};
pub use orchestrator::parse;
pub use reader::read_code;
pub use state::ParserState;
pub use strict::parse_strict;
