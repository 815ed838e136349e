//! Top-level lenient parse loop

use super::ParserState;
use crate::crs::graph::RealmGraph;

/// Parse a realm string into a graph.
///
/// Never fails. At every position a code is attempted; a code is followed by its optional
/// embedding and coupling groups, anything else is skipped one character at a time. Codes
/// that carry neither group add nothing to the graph.
///
/// A coupling group written inside brackets belongs to the nested realm it follows, not to
/// the top-level realm: `A[B(D)]` couples B with D. A reader that attaches every group to
/// the top-level realm would couple A with D instead.
pub fn parse(source: &str) -> RealmGraph {
    let mut state = ParserState::new(source);

    while !state.at_end() {
        match state.read_code() {
            Some(code) => {
                state.parse_embedding(&code);
                state.parse_coupling(&code);
            }
            None => state.skip_char(),
        }
    }

    let graph = state.finish();
    tracing::debug!(
        edges = graph.edges.len(),
        pairs = graph.pairs.len(),
        "parsed realm string"
    );
    graph
}
