//! Realm graph data model
//!
//! A realm graph is the interchange type between parsing and generation. It holds two
//! relations over realm codes:
//!
//!     Embedding:
//!         A directed child -> parent edge. `A[Ac]` records that `Ac` is nested inside `A`.
//!         Edges keep their insertion order, which is the order the parser met them.
//!
//!     Coupling:
//!         An undirected pair. `A(O)` and `O(A)` record the same coupling. Pairs are kept in
//!         an ordered set, so iteration order is canonical and duplicates collapse.
//!
//! Roots are the realms that never appear as the child of an edge.
//!
//! Canonical Ordering
//!
//!     Realm codes compare lexicographically on their characters (`A < Ac < Ae < B`). This
//!     is the single ordering used by the generator, the pair constructor and every query
//!     below that returns a sorted collection.

pub mod validation;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub use validation::GraphError;

/// Errors produced when building a realm code from arbitrary text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    /// The first character is not an uppercase ASCII letter
    InvalidLead(char),
    /// The second character is not a lowercase ASCII letter
    InvalidTail(char),
    TooLong(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::Empty => write!(f, "Realm code is empty"),
            CodeError::InvalidLead(c) => {
                write!(f, "Realm code must start with an uppercase letter, found '{c}'")
            }
            CodeError::InvalidTail(c) => write!(
                f,
                "Second character of a realm code must be a lowercase letter, found '{c}'"
            ),
            CodeError::TooLong(text) => {
                write!(f, "Realm code '{text}' is longer than two characters")
            }
        }
    }
}

impl std::error::Error for CodeError {}

/// Identifier of a realm: one uppercase ASCII letter, optionally followed by one
/// lowercase ASCII letter (`A`, `Ac`, `Si`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RealmCode(String);

impl RealmCode {
    /// Build a code from text, checking the code shape
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let mut chars = text.chars();
        let lead = chars.next().ok_or(CodeError::Empty)?;
        if !lead.is_ascii_uppercase() {
            return Err(CodeError::InvalidLead(lead));
        }
        if let Some(tail) = chars.next() {
            if !tail.is_ascii_lowercase() {
                return Err(CodeError::InvalidTail(tail));
            }
        }
        if chars.next().is_some() {
            return Err(CodeError::TooLong(text.to_string()));
        }
        Ok(RealmCode(text.to_string()))
    }

    /// Wrap text the caller has already matched against the code shape
    pub(crate) fn from_validated(text: &str) -> Self {
        debug_assert!(RealmCode::new(text).is_ok(), "invalid realm code {text:?}");
        RealmCode(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RealmCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RealmCode::new(s)
    }
}

impl TryFrom<String> for RealmCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RealmCode::new(&value)
    }
}

impl From<RealmCode> for String {
    fn from(code: RealmCode) -> Self {
        code.0
    }
}

/// `child` is nested directly inside `parent`.
///
/// Serialized as a `[child, parent]` array.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(RealmCode, RealmCode)", into = "(RealmCode, RealmCode)")]
pub struct EmbeddingEdge {
    pub child: RealmCode,
    pub parent: RealmCode,
}

impl EmbeddingEdge {
    pub fn new(child: RealmCode, parent: RealmCode) -> Self {
        Self { child, parent }
    }
}

impl From<(RealmCode, RealmCode)> for EmbeddingEdge {
    fn from((child, parent): (RealmCode, RealmCode)) -> Self {
        Self::new(child, parent)
    }
}

impl From<EmbeddingEdge> for (RealmCode, RealmCode) {
    fn from(edge: EmbeddingEdge) -> Self {
        (edge.child, edge.parent)
    }
}

/// Symmetric coupling between two distinct realms.
///
/// The members are stored in canonical order, so `{A, O}` and `{O, A}` are the same value.
/// The first member is the pair's owner: the realm whose rendering lists the other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(RealmCode, RealmCode)", into = "(RealmCode, RealmCode)")]
pub struct CouplingPair {
    first: RealmCode,
    second: RealmCode,
}

impl CouplingPair {
    /// Returns `None` when both members are the same realm.
    pub fn new(a: RealmCode, b: RealmCode) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The member that sorts first, which owns the pair when rendering
    pub fn first(&self) -> &RealmCode {
        &self.first
    }

    pub fn second(&self) -> &RealmCode {
        &self.second
    }

    /// The member that is not `code`, if `code` is part of this pair
    pub fn other(&self, code: &RealmCode) -> Option<&RealmCode> {
        if &self.first == code {
            Some(&self.second)
        } else if &self.second == code {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl TryFrom<(RealmCode, RealmCode)> for CouplingPair {
    type Error = GraphError;

    fn try_from((a, b): (RealmCode, RealmCode)) -> Result<Self, Self::Error> {
        let code = a.clone();
        CouplingPair::new(a, b).ok_or(GraphError::SelfCoupling(code))
    }
}

impl From<CouplingPair> for (RealmCode, RealmCode) {
    fn from(pair: CouplingPair) -> Self {
        (pair.first, pair.second)
    }
}

/// Edges and pairs describing how a set of realms is nested and coupled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmGraph {
    #[serde(default)]
    pub edges: Vec<EmbeddingEdge>,
    #[serde(default)]
    pub pairs: BTreeSet<CouplingPair>,
}

impl RealmGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(
        edges: Vec<EmbeddingEdge>,
        pairs: impl IntoIterator<Item = CouplingPair>,
    ) -> Self {
        Self {
            edges,
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Record that `child` is nested inside `parent`
    pub fn add_edge(&mut self, child: RealmCode, parent: RealmCode) {
        self.edges.push(EmbeddingEdge::new(child, parent));
    }

    /// Record a coupling. Returns false for self couplings and pairs already present.
    pub fn add_pair(&mut self, a: RealmCode, b: RealmCode) -> bool {
        match CouplingPair::new(a, b) {
            Some(pair) => self.pairs.insert(pair),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.pairs.is_empty()
    }

    /// Every realm mentioned by an edge or a pair, in canonical order
    pub fn realms(&self) -> BTreeSet<&RealmCode> {
        let mut realms = BTreeSet::new();
        for edge in &self.edges {
            realms.insert(&edge.child);
            realms.insert(&edge.parent);
        }
        for pair in &self.pairs {
            realms.insert(pair.first());
            realms.insert(pair.second());
        }
        realms
    }

    /// Realms that are never embedded in another realm, in canonical order
    pub fn roots(&self) -> Vec<&RealmCode> {
        let children: BTreeSet<&RealmCode> = self.edges.iter().map(|e| &e.child).collect();
        self.realms()
            .into_iter()
            .filter(|code| !children.contains(code))
            .collect()
    }

    /// The first recorded parent of `code`
    pub fn parent_of(&self, code: &RealmCode) -> Option<&RealmCode> {
        self.edges
            .iter()
            .find(|edge| &edge.child == code)
            .map(|edge| &edge.parent)
    }

    /// Realms nested directly inside `code`, in canonical order
    pub fn children_of(&self, code: &RealmCode) -> Vec<&RealmCode> {
        let children: BTreeSet<&RealmCode> = self
            .edges
            .iter()
            .filter(|edge| &edge.parent == code)
            .map(|edge| &edge.child)
            .collect();
        children.into_iter().collect()
    }

    /// Realms coupled with `code`, in canonical order
    pub fn partners_of(&self, code: &RealmCode) -> Vec<&RealmCode> {
        let partners: BTreeSet<&RealmCode> =
            self.pairs.iter().filter_map(|pair| pair.other(code)).collect();
        partners.into_iter().collect()
    }

    /// Set equality: same edges and pairs, regardless of edge order or repetition
    pub fn same_as(&self, other: &RealmGraph) -> bool {
        let ours: BTreeSet<&EmbeddingEdge> = self.edges.iter().collect();
        let theirs: BTreeSet<&EmbeddingEdge> = other.edges.iter().collect();
        ours == theirs && self.pairs == other.pairs
    }

    /// Render the canonical realm string for this graph
    pub fn to_canonical(&self) -> String {
        crate::crs::generator::generate(&self.edges, &self.pairs)
    }
}

impl fmt::Display for RealmGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl FromStr for RealmGraph {
    type Err = Infallible;

    /// Lenient parse; see [`crate::crs::parser::parse`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::crs::parser::parse(s))
    }
}
