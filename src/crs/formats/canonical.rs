use super::registry::{FormatError, Formatter};
use crate::crs::graph::RealmGraph;

/// The canonical realm string
pub struct CrsFormatter;

impl Formatter for CrsFormatter {
    fn name(&self) -> &str {
        "crs"
    }

    fn serialize(&self, graph: &RealmGraph) -> Result<String, FormatError> {
        Ok(graph.to_canonical())
    }

    fn description(&self) -> &str {
        "Canonical realm string"
    }
}
