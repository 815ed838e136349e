//! End-to-end behavior of parse and generate on realm strings

use crs::{generate, parse, parse_strict, CouplingPair, EmbeddingEdge, RealmCode, RealmGraph};
use rstest::rstest;

fn code(text: &str) -> RealmCode {
    RealmCode::new(text).unwrap()
}

fn edges(items: &[(&str, &str)]) -> Vec<EmbeddingEdge> {
    items
        .iter()
        .map(|(child, parent)| EmbeddingEdge::new(code(child), code(parent)))
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<CouplingPair> {
    items
        .iter()
        .map(|(a, b)| CouplingPair::new(code(a), code(b)).unwrap())
        .collect()
}

#[test]
fn parse_embedding() {
    let graph = parse("Aa[Bb]");
    assert_eq!(graph.edges, edges(&[("Bb", "Aa")]));
    assert!(graph.pairs.is_empty());
}

#[test]
fn parse_coupling_group() {
    let graph = parse("Aa(Bb,Cc)");
    assert!(graph.edges.is_empty());
    assert_eq!(
        graph.pairs.iter().cloned().collect::<Vec<_>>(),
        pairs(&[("Aa", "Bb"), ("Aa", "Cc")])
    );
}

#[test]
fn generate_embedding() {
    assert_eq!(generate(&edges(&[("Bb", "Aa")]), &pairs(&[])), "Aa[Bb]");
}

#[test]
fn generate_coupling_owned_by_smaller_code() {
    assert_eq!(generate(&edges(&[]), &pairs(&[("Bb", "Aa")])), "Aa(Bb)");
}

#[test]
fn empty_input() {
    assert!(parse("").is_empty());
    assert_eq!(generate(&edges(&[]), &pairs(&[])), "");
}

#[rstest]
#[case::canonical("A[Ac[Ae]](L,O)O[Si]", "A[Ac[Ae]](L,O)O[Si]")]
#[case::roots_reordered("O[Si]A[Ac[Ae]](O,L)", "A[Ac[Ae]](L,O)O[Si]")]
#[case::coupling_split_over_groups("A(O)L(A)", "A(L,O)")]
#[case::repeated_coupling("A(O,O)O(A)", "A(O)")]
#[case::partner_without_comma("A(LO)", "A(L,O)")]
#[case::space_in_coupling("A(O, L)", "A(L,O)")]
#[case::space_before_group_breaks_it("A (O)", "")]
#[case::noise_before_code("?A[Ac]", "A[Ac]")]
#[case::noise_in_coupling("A(x,O)", "A(O)")]
#[case::unclosed_embedding("A[Ac", "A[Ac]")]
#[case::unclosed_coupling("A(O", "A(O)")]
#[case::self_coupling_dropped("A(A,O)", "A(O)")]
#[case::bare_codes("A O Si", "")]
#[case::nested_coupling("A[B(D)]", "A[B(D)]")]
#[case::nested_owner_after_chain("A[B[C](O)](L)", "A[B[C](O)](L)")]
fn normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input).to_canonical(), expected);
}

#[test]
fn canonical_string_describes_the_same_graph() {
    let graph = RealmGraph::with_parts(
        edges(&[("Si", "O"), ("Ae", "Ac"), ("Ac", "A")]),
        pairs(&[("O", "A"), ("L", "A"), ("Si", "L")]),
    );
    let canonical = graph.to_canonical();
    assert_eq!(canonical, "A[Ac[Ae]](L,O)L(Si)O[Si]");
    assert!(parse(&canonical).same_as(&graph));
}

#[test]
fn display_and_from_str() {
    let graph: RealmGraph = "O[Ob](A)".parse().unwrap();
    assert_eq!(graph.to_string(), "A(O)O[Ob]");
    assert_eq!(graph.partners_of(&code("O")), vec![&code("A")]);
    assert_eq!(graph.parent_of(&code("Ob")), Some(&code("O")));
}

#[test]
fn nested_realm_owns_the_coupling_after_it() {
    let graph = parse("A[B(D)]");
    assert_eq!(graph.edges, edges(&[("B", "A")]));
    assert_eq!(graph.pairs.into_iter().collect::<Vec<_>>(), pairs(&[("B", "D")]));
}

/// Every code there is, `A`, `Aa` .. `Az`, `B` .. `Zz`
fn every_code() -> Vec<RealmCode> {
    ('A'..='Z')
        .flat_map(|upper| {
            std::iter::once(upper.to_string())
                .chain(('a'..='z').map(move |lower| format!("{upper}{lower}")))
        })
        .map(|text| code(&text))
        .collect()
}

#[test]
fn longest_representable_chain() {
    let codes = every_code();
    assert_eq!(codes.len(), 702);
    let chain: Vec<EmbeddingEdge> = codes
        .windows(2)
        .map(|link| EmbeddingEdge::new(link[1].clone(), link[0].clone()))
        .collect();
    let graph = RealmGraph::with_parts(chain.clone(), pairs(&[("Zz", "A")]));

    let canonical = graph.to_canonical();
    assert!(canonical.starts_with("A[Aa[Ab["));
    assert!(canonical.ends_with(&format!("Zz{}(Zz)", "]".repeat(701))));
    assert_eq!(parse(&canonical).edges, chain);
    assert_eq!(parse_strict(&canonical), Ok(parse(&canonical)));
}

#[test]
fn deeply_nested_input_does_not_exhaust_the_stack() {
    let source = "A[B[".repeat(10_000);

    let graph = parse(&source);
    assert_eq!(graph.edges.len(), 19_999);
    assert!(graph.pairs.is_empty());
    // A and B embed each other, so nothing is a root.
    assert_eq!(graph.to_canonical(), "");
    assert!(parse_strict(&source).is_err());

    let rooted = parse(&format!("Z[{source}"));
    assert_eq!(rooted.to_canonical(), "Z[A[B]]");
}
