//! Parser state threaded through the lenient parser

use crate::crs::graph::{CouplingPair, EmbeddingEdge, RealmCode, RealmGraph};
use std::collections::BTreeSet;

/// Cursor plus the edges and pairs accumulated so far.
///
/// The cursor is a byte offset into the source and always sits on a char boundary.
#[derive(Debug)]
pub struct ParserState<'a> {
    source: &'a str,
    cursor: usize,
    edges: Vec<EmbeddingEdge>,
    pairs: BTreeSet<CouplingPair>,
}

impl<'a> ParserState<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: 0,
            edges: Vec::new(),
            pairs: BTreeSet::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// The byte under the cursor
    pub(crate) fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.cursor).copied()
    }

    /// Consume `expected` if it is the next byte
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Skip one character of unrecognized input
    pub(crate) fn skip_char(&mut self) {
        if let Some(ch) = self.source[self.cursor..].chars().next() {
            tracing::trace!(offset = self.cursor, skipped = %ch, "skipping unrecognized input");
            self.cursor += ch.len_utf8();
        }
    }

    pub(crate) fn advance_to(&mut self, cursor: usize) {
        debug_assert!(cursor >= self.cursor && self.source.is_char_boundary(cursor));
        self.cursor = cursor;
    }

    pub(crate) fn record_edge(&mut self, child: RealmCode, parent: RealmCode) {
        self.edges.push(EmbeddingEdge::new(child, parent));
    }

    pub(crate) fn record_pair(&mut self, reference: &RealmCode, partner: RealmCode) {
        match CouplingPair::new(reference.clone(), partner) {
            Some(pair) => {
                self.pairs.insert(pair);
            }
            None => {
                tracing::trace!(realm = %reference, "dropping self coupling");
            }
        }
    }

    /// Hand over the accumulated graph
    pub fn finish(self) -> RealmGraph {
        RealmGraph {
            edges: self.edges,
            pairs: self.pairs,
        }
    }
}
