//! Coupling parser
//!
//! `(` code { [`,`] code } `)` after a realm couples it with every listed realm. Commas are
//! optional separators, other stray characters inside the group are skipped, and the group
//! ends at `)` or at the end of input.

use super::ParserState;
use crate::crs::graph::RealmCode;

impl ParserState<'_> {
    /// Consume a coupling group following `reference`, if there is one
    pub fn parse_coupling(&mut self, reference: &RealmCode) {
        if !self.eat(b'(') {
            return;
        }

        loop {
            match self.peek() {
                None => {
                    tracing::trace!(realm = %reference, "coupling not closed");
                    break;
                }
                Some(b')') => {
                    self.eat(b')');
                    break;
                }
                Some(b',') => {
                    self.eat(b',');
                }
                Some(_) => match self.read_code() {
                    Some(partner) => self.record_pair(reference, partner),
                    None => self.skip_char(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, reference: &str) -> (Vec<(String, String)>, usize) {
        let mut state = ParserState::new(source);
        state.parse_coupling(&RealmCode::new(reference).unwrap());
        let cursor = state.cursor();
        let pairs = state
            .finish()
            .pairs
            .into_iter()
            .map(|p| (p.first().to_string(), p.second().to_string()))
            .collect();
        (pairs, cursor)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_no_paren_is_noop() {
        assert_eq!(run("[B]", "A"), (vec![], 0));
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            run("(Bb,Cc)", "Aa"),
            (pairs(&[("Aa", "Bb"), ("Aa", "Cc")]), 7)
        );
    }

    #[test]
    fn test_commas_are_optional() {
        assert_eq!(run("(LO)", "A"), (pairs(&[("A", "L"), ("A", "O")]), 4));
    }

    #[test]
    fn test_pairs_are_stored_sorted() {
        assert_eq!(run("(A)", "O"), (pairs(&[("A", "O")]), 3));
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(run("(O,O,O)", "A"), (pairs(&[("A", "O")]), 7));
    }

    #[test]
    fn test_noise_inside_group_is_skipped() {
        assert_eq!(run("( L ; o O )", "A"), (pairs(&[("A", "L"), ("A", "O")]), 11));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(run("(L,O", "A"), (pairs(&[("A", "L"), ("A", "O")]), 4));
    }

    #[test]
    fn test_self_coupling_dropped() {
        assert_eq!(run("(A,O)", "A"), (pairs(&[("A", "O")]), 5));
    }
}
