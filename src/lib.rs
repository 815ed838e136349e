//! # crs
//!
//! Parser and generator for canonical realm strings: compact descriptions of which
//! realms of a coupled model are nested inside which (`A[Ac]`) and which exchange
//! data (`A(L,O)`).
//!
//! ```text
//! A[Ac[Ae]](L,O)O[Si]
//! ```
//!
//! [parse] never fails and skips what it cannot read; [parse_strict] reports every
//! problem with its position. [generate] (or `RealmGraph::to_canonical`) renders the one
//! string that describes a graph, so parsing then generating normalizes a realm string.
//!
//! ```text
//! let graph = crs::parse("O[Si]A(O,L)");
//! assert_eq!(graph.to_canonical(), "A(L,O)O[Si]");
//! ```

pub mod crs;

pub use crs::{
    generate, parse, parse_strict, CodeError, CouplingPair, EmbeddingEdge, GraphError,
    ParseError, ParseErrorKind, RealmCode, RealmGraph,
};
