//! Canonical realm string generator
//!
//! Renders a graph as the one realm string that describes it, independent of the order
//! edges and pairs are supplied in.
//!
//! Rendering
//!
//!     Realms are visited in canonical order. Each root renders its embedding chain,
//!     `A[Ac[Ae]]`, and every realm in the output that owns couplings lists its partners
//!     right after its own chain: `A[Ac[Ae](O)](L)`. A pair is owned by its member that
//!     sorts first, so every coupling is written exactly once.
//!
//!     Roots with no child left to render and no owned couplings are left out. They add
//!     nothing the parser would read back: such a realm either appears as a partner
//!     elsewhere in the string, or not in the graph at all.
//!
//! Malformed Graphs
//!
//!     No validation happens here (see [RealmGraph::validate]). A parent with several
//!     children follows only its smallest child, realms on an embedding cycle are only
//!     reached through a root, and no realm is rendered twice.
//!
//! [RealmGraph::validate]: crate::crs::graph::RealmGraph::validate

use crate::crs::graph::{CouplingPair, EmbeddingEdge, RealmCode};
use std::collections::{BTreeMap, BTreeSet};

/// Render the canonical string for a set of edges and pairs
pub fn generate<'a, E, P>(edges: E, pairs: P) -> String
where
    E: IntoIterator<Item = &'a EmbeddingEdge>,
    P: IntoIterator<Item = &'a CouplingPair>,
{
    let mut realms: BTreeSet<&RealmCode> = BTreeSet::new();
    let mut children: BTreeMap<&RealmCode, BTreeSet<&RealmCode>> = BTreeMap::new();
    let mut embedded: BTreeSet<&RealmCode> = BTreeSet::new();
    let mut owned: BTreeMap<&RealmCode, BTreeSet<&RealmCode>> = BTreeMap::new();

    for edge in edges {
        realms.insert(&edge.child);
        realms.insert(&edge.parent);
        children.entry(&edge.parent).or_default().insert(&edge.child);
        embedded.insert(&edge.child);
    }

    for pair in pairs {
        realms.insert(pair.first());
        realms.insert(pair.second());
        owned.entry(pair.first()).or_default().insert(pair.second());
    }

    let mut renderer = Renderer {
        children,
        owned,
        visited: BTreeSet::new(),
        output: String::new(),
    };

    for root in realms.into_iter().filter(|r| !embedded.contains(r)) {
        if renderer.carries_information(root) {
            renderer.render(root);
        }
    }

    tracing::debug!(output = %renderer.output, "generated canonical realm string");
    renderer.output
}

struct Renderer<'a> {
    children: BTreeMap<&'a RealmCode, BTreeSet<&'a RealmCode>>,
    owned: BTreeMap<&'a RealmCode, BTreeSet<&'a RealmCode>>,
    visited: BTreeSet<&'a RealmCode>,
    output: String,
}

impl<'a> Renderer<'a> {
    fn carries_information(&self, code: &RealmCode) -> bool {
        self.owned.contains_key(code) || self.next_child(code).is_some()
    }

    /// The smallest child of `code` not rendered yet
    fn next_child(&self, code: &RealmCode) -> Option<&'a RealmCode> {
        self.children.get(code).and_then(|children| {
            children
                .iter()
                .copied()
                .find(|child| !self.visited.contains(child))
        })
    }

    /// `Code`, then `[child]` for the smallest unvisited child, then `(partners)`
    ///
    /// The chain is walked down first and closed on the way back up.
    fn render(&mut self, root: &'a RealmCode) {
        let mut chain = vec![root];
        let mut code = root;
        loop {
            self.visited.insert(code);
            self.output.push_str(code.as_str());
            match self.next_child(code) {
                Some(child) => {
                    self.output.push('[');
                    chain.push(child);
                    code = child;
                }
                None => break,
            }
        }

        for (depth, code) in chain.iter().enumerate().rev() {
            if let Some(partners) = self.owned.get(code) {
                let partners: Vec<&str> = partners.iter().map(|p| p.as_str()).collect();
                self.output.push('(');
                self.output.push_str(&partners.join(","));
                self.output.push(')');
            }
            if depth > 0 {
                self.output.push(']');
            }
        }
    }
}
