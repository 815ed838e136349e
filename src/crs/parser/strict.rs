//! Strict parser built on chumsky
//!
//! Runs the realm string grammar over the logos token stream. Unlike the lenient parser it
//! rejects input instead of skipping it:
//!
//!     - characters outside the token set (`A(b)`, `A;O`)
//!     - groups that are empty, unbalanced or unterminated (`A[]`, `A(O`, `A[B`)
//!     - a realm coupled with itself (`A(A)`)
//!     - graphs a realm string cannot represent faithfully (`A[C]B[C]`, `O[Si]O[Ob]`)
//!
//! Whitespace between tokens is allowed. For input it accepts, the graph is identical to
//! what [parse](super::parse) returns, edge order included.

use chumsky::prelude::*;
use std::ops::Range;

use super::error::{ParseError, ParseErrorKind};
use crate::crs::graph::{RealmCode, RealmGraph};
use crate::crs::lexer::{tokenize_with_spans, Token};
use crate::crs::position::SourceLocation;

/// Type alias for token with span
type TokenSpan = (Token, Range<usize>);

/// Type alias for parser error
type ParserError = Simple<TokenSpan>;

type SpannedCode = (RealmCode, Range<usize>);

/// A top-level realm as written, with its embedding chain unrolled.
///
/// `A[B[C](O)](L)` is `code` A, `embedded` B then C, `partners` empty (the group right
/// after C would go here), and `closing` holding `](O)` then `](L)`. A well-formed realm
/// closes every bracket it opens.
#[derive(Debug, Clone, PartialEq)]
struct RealmNode {
    code: SpannedCode,
    /// `[` span and the code after it, outermost first
    embedded: Vec<(Range<usize>, SpannedCode)>,
    partners: Vec<SpannedCode>,
    /// `]` span and the coupling group after it, innermost first
    closing: Vec<(Range<usize>, Vec<SpannedCode>)>,
}

/// Match a specific token, keeping its span
fn token(t: Token) -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).map(|(_, range)| range)
}

fn code() -> impl Parser<TokenSpan, SpannedCode, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenSpan| match tok {
        Token::Code(text) => Ok((RealmCode::from_validated(&text), range)),
        other => Err(Simple::expected_input_found(
            span,
            Vec::<Option<TokenSpan>>::new(),
            Some((other, range)),
        )),
    })
}

/// `(` code { [`,`] code } `)`
fn coupling() -> impl Parser<TokenSpan, Vec<SpannedCode>, Error = ParserError> + Clone {
    token(Token::OpenParen)
        .ignore_then(code())
        .then(token(Token::Comma).or_not().ignore_then(code()).repeated())
        .then_ignore(token(Token::CloseParen))
        .map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}

/// code { `[` code } [ coupling ] { `]` [ coupling ] }
///
/// The nested form, code [ `[` realm `]` ] [ coupling ], unrolled so parsing does not
/// recurse once per level. Bracket balance is checked when the node is collected.
fn realm() -> impl Parser<TokenSpan, RealmNode, Error = ParserError> + Clone {
    let embedded = token(Token::OpenBracket).then(code()).repeated();
    let closing = token(Token::CloseBracket)
        .then(coupling().or_not().map(Option::unwrap_or_default))
        .repeated();

    code()
        .then(embedded)
        .then(coupling().or_not())
        .then(closing)
        .map(|(((code, embedded), partners), closing)| RealmNode {
            code,
            embedded,
            partners: partners.unwrap_or_default(),
            closing,
        })
}

fn realm_string() -> impl Parser<TokenSpan, Vec<RealmNode>, Error = ParserError> {
    realm().repeated().then_ignore(end())
}

/// Parse a realm string, reporting every problem instead of skipping it
pub fn parse_strict(source: &str) -> Result<RealmGraph, Vec<ParseError>> {
    let location = SourceLocation::new(source);
    let end = source.len();

    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for (result, range) in tokenize_with_spans(source) {
        match result {
            Ok(tok) => tokens.push((tok, range)),
            Err(()) => {
                let found = source[range.clone()].chars().next().unwrap_or_default();
                errors.push(ParseError::new(
                    ParseErrorKind::UnexpectedCharacter(found),
                    range,
                    &location,
                ));
            }
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let nodes = realm_string().parse(tokens).map_err(|errs| {
        errs.into_iter()
            .map(|err| syntax_error(err, end, &location))
            .collect::<Vec<_>>()
    })?;

    let mut graph = RealmGraph::new();
    for node in &nodes {
        collect(node, &mut graph, &mut errors, &location);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    if let Err(problems) = graph.validate() {
        return Err(problems
            .into_iter()
            .map(|problem| {
                ParseError::new(ParseErrorKind::InvalidGraph(problem), 0..end, &location)
            })
            .collect());
    }

    tracing::debug!(
        edges = graph.edges.len(),
        pairs = graph.pairs.len(),
        "strictly parsed realm string"
    );
    Ok(graph)
}

fn syntax_error(error: ParserError, end: usize, location: &SourceLocation) -> ParseError {
    match error.found() {
        Some((tok, range)) => ParseError::new(
            ParseErrorKind::UnexpectedToken(tok.to_string()),
            range.clone(),
            location,
        ),
        None => ParseError::new(ParseErrorKind::UnexpectedEnd, end..end, location),
    }
}

/// Flatten a realm node into the graph in the order the lenient parser records it:
/// the edges down the chain, then the couplings.
fn collect(
    node: &RealmNode,
    graph: &mut RealmGraph,
    errors: &mut Vec<ParseError>,
    location: &SourceLocation,
) {
    let depth = node.embedded.len();
    if node.closing.len() > depth {
        let (range, _) = &node.closing[depth];
        errors.push(ParseError::new(
            ParseErrorKind::UnexpectedToken(Token::CloseBracket.to_string()),
            range.clone(),
            location,
        ));
        return;
    }
    if node.closing.len() < depth {
        let (range, _) = &node.embedded[depth - node.closing.len() - 1];
        errors.push(ParseError::new(
            ParseErrorKind::UnclosedBracket,
            range.clone(),
            location,
        ));
        return;
    }

    let chain: Vec<&RealmCode> = std::iter::once(&node.code.0)
        .chain(node.embedded.iter().map(|(_, (code, _))| code))
        .collect();
    for link in chain.windows(2) {
        graph.add_edge(link[1].clone(), link[0].clone());
    }

    // The group before the first `]` belongs to the innermost realm, each later one to the
    // realm one level further out.
    let groups = std::iter::once(&node.partners).chain(node.closing.iter().map(|(_, g)| g));
    for (owner, group) in chain.iter().rev().zip(groups) {
        for (partner, range) in group {
            if partner == *owner {
                errors.push(ParseError::new(
                    ParseErrorKind::SelfCoupling((*owner).clone()),
                    range.clone(),
                    location,
                ));
            } else {
                graph.add_pair((*owner).clone(), partner.clone());
            }
        }
    }
}
