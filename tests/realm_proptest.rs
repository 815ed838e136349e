//! Property-based tests for parsing and generating realm strings
//!
//! Graphs are drawn so that they are representable: embedding forms disjoint chains
//! (one parent and at most one child per realm, no cycles) over a fixed pool of codes.

use crs::{generate, parse, parse_strict, CouplingPair, EmbeddingEdge, RealmCode, RealmGraph};
use proptest::prelude::*;

const POOL: &[&str] = &["A", "Ac", "Ae", "B", "L", "Li", "O", "Ob", "Si", "Zz"];

fn code(text: &str) -> RealmCode {
    RealmCode::new(text).unwrap()
}

/// Disjoint embedding chains plus arbitrary couplings
fn graph_strategy() -> impl Strategy<Value = RealmGraph> {
    let chains = prop::sample::subsequence(POOL.to_vec(), 0..=POOL.len())
        .prop_shuffle()
        .prop_flat_map(|codes| {
            let links = codes.len().saturating_sub(1);
            (Just(codes), prop::collection::vec(any::<bool>(), links))
        });
    let couplings = prop::collection::vec((0..POOL.len(), 0..POOL.len()), 0..8);

    (chains, couplings).prop_map(|((codes, links), couplings)| {
        let mut graph = RealmGraph::new();
        for (i, linked) in links.iter().enumerate() {
            if *linked {
                graph.add_edge(code(codes[i + 1]), code(codes[i]));
            }
        }
        for (a, b) in couplings {
            graph.add_pair(code(POOL[a]), code(POOL[b]));
        }
        graph
    })
}

/// Strings over the realm string alphabet, without whitespace
fn realm_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Z][a-z]?",
            Just("[".to_string()),
            Just("]".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just(",".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn canonical_string_reparses_to_same_graph(graph in graph_strategy()) {
        let canonical = graph.to_canonical();
        prop_assert!(parse(&canonical).same_as(&graph), "canonical: {}", canonical);
    }

    #[test]
    fn canonical_form_is_a_fixed_point(graph in graph_strategy()) {
        let canonical = graph.to_canonical();
        prop_assert_eq!(parse(&canonical).to_canonical(), canonical);
    }

    #[test]
    fn canonical_strings_pass_the_strict_parser(graph in graph_strategy()) {
        let canonical = graph.to_canonical();
        let strict = parse_strict(&canonical);
        prop_assert!(strict.is_ok(), "canonical: {}, errors: {:?}", canonical, strict);
    }

    #[test]
    fn generate_ignores_input_order(graph in graph_strategy()) {
        let reversed_edges: Vec<EmbeddingEdge> = graph.edges.iter().rev().cloned().collect();
        let reversed_pairs: Vec<CouplingPair> = graph.pairs.iter().rev().cloned().collect();
        prop_assert_eq!(
            generate(&graph.edges, &graph.pairs),
            generate(&reversed_edges, &reversed_pairs)
        );
    }

    #[test]
    fn lenient_parse_never_panics(input in "\\PC*") {
        let graph = parse(&input);
        let _ = graph.to_canonical();
    }

    #[test]
    fn strict_parse_never_panics(input in "\\PC*") {
        let _ = parse_strict(&input);
    }

    #[test]
    fn strict_parse_agrees_with_lenient_parse(input in realm_text_strategy()) {
        if let Ok(graph) = parse_strict(&input) {
            prop_assert!(graph.same_as(&parse(&input)), "input: {}", input);
        }
    }
}
