//! Main module for crs library functionality

pub mod config;
pub mod formats;
pub mod generator;
pub mod graph;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod position;
pub mod vocab;

pub use generator::generate;
pub use graph::{CodeError, CouplingPair, EmbeddingEdge, GraphError, RealmCode, RealmGraph};
pub use parser::{parse, parse_strict, ParseError, ParseErrorKind};
