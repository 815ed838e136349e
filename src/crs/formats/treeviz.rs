//! Treeviz formatter for realm graphs
//!
//! One line per realm, with embedding shown as nesting and couplings listed after `⇄`.
//! The first line carries the canonical string. Realms the vocabulary knows are followed by
//! their name.
//!
//!     ⧉ A[Ac[Ae]](L,O)
//!     ├─ A · atmosphere ⇄ L, O
//!     │ └─ Ac · atmospheric-chemistry
//!     │   └─ Ae · aerosol
//!     ├─ L · land-surface ⇄ A
//!     └─ O · ocean ⇄ A
//!
//! Top-level entries are the roots in canonical order. Unlike the canonical string this
//! shows every realm: a child with two parents appears under both, and realms only
//! reachable through an embedding cycle are listed after the roots, starting from the
//! smallest. A cycle is cut where it would revisit a realm already on the current branch.

use super::registry::{FormatError, Formatter};
use crate::crs::graph::{RealmCode, RealmGraph};
use crate::crs::vocab::Vocabulary;
use std::collections::BTreeSet;

/// Treeviz output labelled with names from a vocabulary
pub struct TreevizFormatter {
    vocabulary: Vocabulary,
}

impl TreevizFormatter {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(Vocabulary::builtin().clone())
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, graph: &RealmGraph) -> Result<String, FormatError> {
        Ok(to_treeviz_str(graph, &self.vocabulary))
    }

    fn description(&self) -> &str {
        "Realm tree with couplings, one line per realm"
    }
}

pub fn to_treeviz_str(graph: &RealmGraph, vocabulary: &Vocabulary) -> String {
    let mut result = String::new();
    let canonical = graph.to_canonical();
    if canonical.is_empty() {
        result.push_str("⧉\n");
    } else {
        result.push_str(&format!("⧉ {canonical}\n"));
    }

    let tops = top_level(graph);
    let mut branch = Vec::new();
    for (i, &code) in tops.iter().enumerate() {
        let is_last = i == tops.len() - 1;
        append_realm(&mut result, graph, vocabulary, code, "", is_last, &mut branch);
    }
    result
}

/// Roots first, then one entry per embedding cycle not reachable from a root
fn top_level(graph: &RealmGraph) -> Vec<&RealmCode> {
    let mut tops = graph.roots();
    let mut reached = BTreeSet::new();
    for &root in &tops {
        mark_reachable(graph, root, &mut reached);
    }
    for code in graph.realms() {
        if !reached.contains(code) {
            mark_reachable(graph, code, &mut reached);
            tops.push(code);
        }
    }
    tops
}

fn mark_reachable<'a>(
    graph: &'a RealmGraph,
    code: &'a RealmCode,
    reached: &mut BTreeSet<&'a RealmCode>,
) {
    if !reached.insert(code) {
        return;
    }
    for child in graph.children_of(code) {
        mark_reachable(graph, child, reached);
    }
}

fn append_realm<'a>(
    result: &mut String,
    graph: &'a RealmGraph,
    vocabulary: &Vocabulary,
    code: &'a RealmCode,
    prefix: &str,
    is_last: bool,
    branch: &mut Vec<&'a RealmCode>,
) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{prefix}{connector} {code}"));
    if let Some(name) = vocabulary.name_for(code) {
        result.push_str(&format!(" · {name}"));
    }

    let partners = graph.partners_of(code);
    if !partners.is_empty() {
        let partners: Vec<&str> = partners.iter().map(|p| p.as_str()).collect();
        result.push_str(&format!(" ⇄ {}", partners.join(", ")));
    }
    result.push('\n');

    branch.push(code);
    let children: Vec<&RealmCode> = graph
        .children_of(code)
        .into_iter()
        .filter(|child| !branch.contains(child))
        .collect();
    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    for (i, &child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_realm(result, graph, vocabulary, child, &new_prefix, is_last, branch);
    }
    branch.pop();
}
