//! Structural checks for realm graphs
//!
//! The generator accepts any graph and renders it best-effort. Validation is the opt-in
//! way to find out whether a graph has the shape a realm string can represent faithfully:
//! a forest of single-child chains with irreflexive couplings.

use super::{RealmCode, RealmGraph};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Ways a realm graph can break the embedding-forest and coupling invariants
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GraphError {
    /// A realm coupled with itself
    SelfCoupling(RealmCode),
    /// A realm embedded in itself
    SelfEmbedding(RealmCode),
    /// A realm embedded in more than one parent
    MultipleParents {
        child: RealmCode,
        parents: Vec<RealmCode>,
    },
    /// A realm with more than one embedded child. Realm strings render a single child per
    /// parent, so the generator follows only the smallest child.
    MultipleChildren {
        parent: RealmCode,
        children: Vec<RealmCode>,
    },
    /// Realms embedded in each other, listed from child to ancestor
    EmbeddingCycle(Vec<RealmCode>),
}

fn join(codes: &[RealmCode], separator: &str) -> String {
    codes
        .iter()
        .map(RealmCode::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::SelfCoupling(code) => write!(f, "Realm {code} is coupled with itself"),
            GraphError::SelfEmbedding(code) => write!(f, "Realm {code} is embedded in itself"),
            GraphError::MultipleParents { child, parents } => write!(
                f,
                "Realm {child} is embedded in more than one realm: {}",
                join(parents, ", ")
            ),
            GraphError::MultipleChildren { parent, children } => write!(
                f,
                "Realm {parent} embeds more than one realm: {}",
                join(children, ", ")
            ),
            GraphError::EmbeddingCycle(cycle) => {
                let first = cycle.first().map(RealmCode::as_str).unwrap_or_default();
                write!(f, "Embedding cycle: {} -> {first}", join(cycle, " -> "))
            }
        }
    }
}

impl std::error::Error for GraphError {}

type Adjacency<'g> = BTreeMap<&'g RealmCode, BTreeSet<&'g RealmCode>>;

impl RealmGraph {
    /// Check the graph against the invariants a realm string can represent.
    ///
    /// All problems are reported, in a stable order.
    pub fn validate(&self) -> Result<(), Vec<GraphError>> {
        let mut errors = Vec::new();
        let mut parents: Adjacency = BTreeMap::new();
        let mut children: Adjacency = BTreeMap::new();

        for edge in &self.edges {
            if edge.child == edge.parent {
                errors.push(GraphError::SelfEmbedding(edge.child.clone()));
                continue;
            }
            parents.entry(&edge.child).or_default().insert(&edge.parent);
            children.entry(&edge.parent).or_default().insert(&edge.child);
        }

        for (child, ps) in &parents {
            if ps.len() > 1 {
                errors.push(GraphError::MultipleParents {
                    child: (*child).clone(),
                    parents: ps.iter().map(|p| (*p).clone()).collect(),
                });
            }
        }

        for (parent, cs) in &children {
            if cs.len() > 1 {
                errors.push(GraphError::MultipleChildren {
                    parent: (*parent).clone(),
                    children: cs.iter().map(|c| (*c).clone()).collect(),
                });
            }
        }

        errors.extend(find_cycles(&parents).into_iter().map(GraphError::EmbeddingCycle));

        if errors.is_empty() {
            Ok(())
        } else {
            errors.sort();
            errors.dedup();
            Err(errors)
        }
    }
}

/// Depth-first search along child -> parent links. Each cycle is rotated so that its
/// smallest realm comes first, which makes the same cycle found from different starting
/// points compare equal.
fn find_cycles(parents: &Adjacency<'_>) -> BTreeSet<Vec<RealmCode>> {
    let mut cycles = BTreeSet::new();
    let mut finished = BTreeSet::new();

    for start in parents.keys() {
        let mut path = Vec::new();
        visit(start, parents, &mut path, &mut finished, &mut cycles);
    }

    cycles
}

fn visit<'g>(
    code: &'g RealmCode,
    parents: &Adjacency<'g>,
    path: &mut Vec<&'g RealmCode>,
    finished: &mut BTreeSet<&'g RealmCode>,
    cycles: &mut BTreeSet<Vec<RealmCode>>,
) {
    if let Some(pos) = path.iter().position(|c| *c == code) {
        cycles.insert(rotate_to_smallest(&path[pos..]));
        return;
    }
    if finished.contains(code) {
        return;
    }

    path.push(code);
    if let Some(ps) = parents.get(code) {
        for parent in ps {
            visit(parent, parents, path, finished, cycles);
        }
    }
    path.pop();
    finished.insert(code);
}

fn rotate_to_smallest(cycle: &[&RealmCode]) -> Vec<RealmCode> {
    let start = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, code)| **code)
        .map(|(i, _)| i)
        .unwrap_or(0);
    cycle[start..]
        .iter()
        .chain(cycle[..start].iter())
        .map(|code| (*code).clone())
        .collect()
}
