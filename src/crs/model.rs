//! Model description converter
//!
//! Turns the component structure published for a coupled model into a realm graph:
//!
//!     {
//!       "embedded_components": [["aerosol", "atmosphere"], ["sea-ice", "ocean"]],
//!       "coupling_groups": [["atmosphere", "land-surface", "ocean"]]
//!     }
//!
//! Each `embedded_components` entry is a `[child, parent]` pair of realm names. Every
//! member of a coupling group is coupled with every other member. Names are looked up in
//! a [Vocabulary]; names it does not know are dropped with a warning. Other keys in the
//! document are ignored.

use crate::crs::graph::RealmGraph;
use crate::crs::vocab::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error reading a model description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    Io(String),
    Json(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io(msg) => write!(f, "Cannot read model description: {msg}"),
            ModelError::Json(msg) => write!(f, "Invalid model description: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

/// Component structure of a coupled model, by realm name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescription {
    #[serde(default)]
    pub embedded_components: Vec<(String, String)>,
    #[serde(default)]
    pub coupling_groups: Vec<Vec<String>>,
}

impl ModelDescription {
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        serde_json::from_str(text).map_err(|e| ModelError::Json(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ModelError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Build the realm graph, resolving names through `vocabulary`
    pub fn to_graph(&self, vocabulary: &Vocabulary) -> RealmGraph {
        let lookup = |name: &str| {
            let code = vocabulary.code_for(name).cloned();
            if code.is_none() {
                tracing::warn!(realm = name, "unknown realm name, skipped");
            }
            code
        };

        let mut graph = RealmGraph::new();

        for (child, parent) in &self.embedded_components {
            let child = lookup(child.as_str());
            let parent = lookup(parent.as_str());
            if let (Some(child), Some(parent)) = (child, parent) {
                graph.add_edge(child, parent);
            }
        }

        for group in &self.coupling_groups {
            let codes: Vec<_> = group
                .iter()
                .filter_map(|name| lookup(name.as_str()))
                .collect();
            for (i, a) in codes.iter().enumerate() {
                for b in &codes[i + 1..] {
                    graph.add_pair(a.clone(), b.clone());
                }
            }
        }

        tracing::debug!(
            edges = graph.edges.len(),
            pairs = graph.pairs.len(),
            "converted model description"
        );
        graph
    }
}
