//! Embedding parser
//!
//! `[` code [embedding] [coupling] `]` after a realm records that the bracketed realm is
//! nested in it. Chains nest to any depth (`A[B[C[D]]]`), and a nested realm may list its
//! own couplings before the closing bracket (`A[B(O)]`). A missing `]` is tolerated.
//!
//! Open groups are kept on a stack rather than the call stack, so nesting depth is limited
//! by memory only.

use super::ParserState;
use crate::crs::graph::RealmCode;

impl ParserState<'_> {
    /// Consume an embedding group following `parent`, if there is one
    pub fn parse_embedding(&mut self, parent: &RealmCode) {
        // One entry per `[` consumed, innermost last. `None` marks a group with no code.
        let mut open: Vec<Option<RealmCode>> = Vec::new();
        let mut owner = parent.clone();

        while self.eat(b'[') {
            match self.read_code() {
                Some(child) => {
                    self.record_edge(child.clone(), owner);
                    owner = child.clone();
                    open.push(Some(child));
                }
                None => {
                    open.push(None);
                    break;
                }
            }
        }

        while let Some(child) = open.pop() {
            if let Some(child) = &child {
                self.parse_coupling(child);
            }
            if !self.eat(b']') {
                tracing::trace!(offset = self.cursor(), depth = open.len(), "embedding not closed");
            }
        }
    }
}
