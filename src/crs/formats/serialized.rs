//! Structured output through serde
//!
//! Both formats write the graph as its two lists: `edges` holds `[child, parent]` pairs in
//! source order, `pairs` holds `[first, second]` couplings in canonical order. The same
//! JSON is accepted by `crs generate`.

use super::registry::{FormatError, Formatter};
use crate::crs::graph::RealmGraph;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, graph: &RealmGraph) -> Result<String, FormatError> {
        serde_json::to_string_pretty(graph)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Edges and couplings as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, graph: &RealmGraph) -> Result<String, FormatError> {
        serde_yaml::to_string(graph).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Edges and couplings as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::parser::parse;

    #[test]
    fn test_json_shape() {
        let graph = parse("A[Ac](O)");
        let output = JsonFormatter.serialize(&graph).unwrap();
        insta::assert_snapshot!(output, @r###"
        {
          "edges": [
            [
              "Ac",
              "A"
            ]
          ],
          "pairs": [
            [
              "A",
              "O"
            ]
          ]
        }
        "###);
    }

    #[test]
    fn test_json_reads_back() {
        let graph = parse("A[Ac[Ae]](L,O)O[Si]");
        let output = JsonFormatter.serialize(&graph).unwrap();
        let back: RealmGraph = serde_json::from_str(&output).unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn test_yaml_reads_back() {
        let graph = parse("A[Ac[Ae]](L,O)O[Si]");
        let output = YamlFormatter.serialize(&graph).unwrap();
        assert!(output.starts_with("edges:"));
        let back: RealmGraph = serde_yaml::from_str(&output).unwrap();
        assert_eq!(back, graph);
    }
}
