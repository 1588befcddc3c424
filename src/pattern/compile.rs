use super::ast::{Pattern, Quantifier};
use super::error::PatternError;
use super::lexer::lex;
use super::parser::parse;
use super::{Atom, Record};
use crate::and::AndExt;
use crate::compose::MapExt;
use crate::cursors::IterCursor;
use crate::error::{MatchResult, StreamEnd};
use crate::matcher::{BoxedExt, BoxedMatcher, Matcher, Scan};
use crate::or::or;
use crate::peek::peek_boundary;
use crate::quantify::quantify;
use crate::satisfy::{elem, item, satisfy};
use crate::seq::seq;
use log::debug;
use std::ops::Bound;

/// Cursor over an in-memory record stream
pub type RecordCursor = IterCursor<std::vec::IntoIter<Record>>;

/// Repetition step that fails when the inner match consumed nothing
///
/// A failed step consumes nothing either, so the surrounding repetition ends
/// where the last productive iteration left the cursor.
struct Advancing<M> {
    matcher: M,
}

impl<M: Matcher> Matcher for Advancing<M> {
    type Cursor = M::Cursor;
    type Output = M::Output;

    fn matches(&self, scan: &mut Scan<M::Cursor>) -> MatchResult<M::Output> {
        let start = scan.position();
        let output = self.matcher.matches(scan)?;
        Ok(output.filter(|_| scan.position() > start))
    }
}

/// Repeat a pattern that can match without consuming
///
/// Iterations continue while they consume, so `(B?)*` takes every `B`. An
/// iteration that matches empty ends the loop instead of repeating forever.
fn repeat_nullable(
    pattern: &Pattern,
    quantifier: Quantifier,
) -> BoxedMatcher<'static, RecordCursor, Vec<Record>> {
    let rest = || quantify(Advancing { matcher: compile(pattern) }, 0..);
    match quantifier {
        Quantifier::ZeroOrOne => quantify(compile(pattern), 0..=1)
            .map(|parts: Vec<Vec<Record>>| parts.concat())
            .boxed(),
        Quantifier::ZeroOrMore => rest()
            .map(|parts: Vec<Vec<Record>>| parts.concat())
            .boxed(),
        // The first iteration may match empty; only the rest must advance
        Quantifier::OneOrMore => compile(pattern)
            .and(rest())
            .map(|(first, parts): (Vec<Record>, Vec<Vec<Record>>)| -> Vec<Record> {
                std::iter::once(first).chain(parts).flatten().collect()
            })
            .boxed(),
    }
}

/// Translate a pattern into a matcher producing the records it consumed
pub fn compile(pattern: &Pattern) -> BoxedMatcher<'static, RecordCursor, Vec<Record>> {
    match pattern {
        Pattern::Atom(atom) => item(Some(*atom)).map(|record: Record| vec![record]).boxed(),
        Pattern::Any => satisfy(|record: &Record| record.is_some())
            .map(|record: Record| vec![record])
            .boxed(),
        Pattern::Nil => item(None).map(|record: Record| vec![record]).boxed(),
        Pattern::Boundary => peek_boundary()
            .map(|_: Record| Vec::new())
            .boxed(),
        Pattern::Class(atoms) => elem(atoms.iter().copied().map(Some).collect::<Vec<Record>>())
            .map(|record: Record| vec![record])
            .boxed(),
        Pattern::Sequence(items) => seq(items.iter().map(compile))
            .map(|parts: Vec<Vec<Record>>| parts.concat())
            .boxed(),
        Pattern::Alternation(alternatives) => or(alternatives.iter().map(compile)).boxed(),
        Pattern::Repeat {
            pattern,
            quantifier,
        } if pattern.is_nullable() => repeat_nullable(pattern, *quantifier),
        Pattern::Repeat {
            pattern,
            quantifier,
        } => {
            let range = match quantifier {
                Quantifier::ZeroOrOne => (Bound::Included(0), Bound::Included(1)),
                Quantifier::ZeroOrMore => (Bound::Included(0), Bound::Unbounded),
                Quantifier::OneOrMore => (Bound::Included(1), Bound::Unbounded),
            };
            quantify(compile(pattern), range)
                .map(|parts: Vec<Vec<Record>>| parts.concat())
                .boxed()
        }
    }
}

/// A parsed pattern, ready to run against record streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regcx {
    pattern: Pattern,
}

impl Regcx {
    /// Tokenize and parse `source`
    ///
    /// Error positions are character offsets into `source`.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let spanned = lex(source)?;
        let tokens: Vec<_> = spanned.iter().map(|(token, _)| *token).collect();
        let pattern = parse(&tokens).map_err(|err| match err {
            PatternError::UnexpectedToken { position, found } => PatternError::UnexpectedToken {
                position: spanned
                    .get(position)
                    .map_or(position, |(_, span)| span.start),
                found,
            },
            other => other,
        })?;
        debug!("parsed pattern {}", pattern);
        Ok(Regcx { pattern })
    }

    pub fn from_pattern(pattern: Pattern) -> Self {
        Regcx { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Compile the pattern into a matcher
    pub fn matcher(&self) -> BoxedMatcher<'static, RecordCursor, Vec<Record>> {
        compile(&self.pattern)
    }

    /// Match the pattern once, anchored at the first record
    ///
    /// Succeeds with the records the pattern consumed, which need not be all of
    /// them. A repetition that runs into the end of the records reports
    /// [`StreamEnd`], like any other read past the end.
    pub fn matches(&self, records: &[Record]) -> Result<Option<Vec<Record>>, StreamEnd> {
        let mut scan = Scan::new(RecordCursor::new(records.to_vec()));
        self.matcher().matches(&mut scan)
    }

    /// Check if the pattern matches a prefix of `records`
    pub fn is_match(&self, records: &[Record]) -> bool {
        matches!(self.matches(records), Ok(Some(_)))
    }
}

impl std::str::FromStr for Regcx {
    type Err = PatternError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Regcx::new(source)
    }
}

impl From<Atom> for Regcx {
    fn from(atom: Atom) -> Self {
        Regcx::from_pattern(Pattern::Atom(atom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_records;

    fn records(text: &str) -> Vec<Record> {
        parse_records(text).unwrap()
    }

    fn run(pattern: &str, input: &str) -> Result<Option<String>, StreamEnd> {
        let regcx = Regcx::new(pattern).unwrap();
        let matched = regcx.matches(&records(input))?;
        Ok(matched.map(|records| crate::pattern::format_records(&records)))
    }

    #[test]
    fn test_sequence_matches_prefix() {
        assert_eq!(run("BW", "BWH"), Ok(Some("BW".to_string())));
        assert_eq!(run("BW", "BHW"), Ok(None));
    }

    #[test]
    fn test_any_and_nil() {
        assert_eq!(run(". ✖", "H_L"), Ok(Some("H_".to_string())));
        assert_eq!(run(".", "_B"), Ok(None));
    }

    #[test]
    fn test_final_record_can_be_consumed() {
        assert_eq!(run("B✖", "B_"), Ok(Some("B_".to_string())));
    }

    #[test]
    fn test_class() {
        assert_eq!(run("[WH]+L", "HWHL"), Ok(Some("HWHL".to_string())));
        assert_eq!(run("[WH]", "B"), Ok(None));
    }

    #[test]
    fn test_boundary_is_zero_width() {
        assert_eq!(run("Bx", "BW"), Ok(Some("B".to_string())));
        assert_eq!(run("x*B", "BW"), Ok(Some("B".to_string())));
    }

    #[test]
    fn test_repeat_stops_before_end() {
        assert_eq!(run("B*W", "BBBW_"), Ok(Some("BBBW".to_string())));
        assert_eq!(run("B?W", "W_"), Ok(Some("W".to_string())));
    }

    #[test]
    fn test_repeat_running_into_end_is_an_error() {
        // The final B is still the lookahead and the loop tries to take it twice
        assert!(run("B+", "BB").is_err());
        assert_eq!(run("B+", "BB_"), Ok(Some("BB".to_string())));
    }

    #[test]
    fn test_mismatch_at_end_of_records() {
        assert_eq!(run("BW?", "B"), Ok(Some("B".to_string())));
        assert_eq!(run("BW", "B"), Ok(None));
        assert_eq!(run("B[WH]", "B"), Ok(None));
    }

    #[test]
    fn test_alternation_first_match_wins() {
        assert_eq!(run("B|BW", "BW"), Ok(Some("B".to_string())));
        assert_eq!(run("W|B", "BW"), Ok(Some("B".to_string())));
    }

    #[test]
    fn test_alternation_does_not_backtrack() {
        // `BW` consumes the B before failing, so `BH` starts at the H
        assert_eq!(run("BW|BH", "BH"), Ok(None));
        assert_eq!(run("BW|H", "BH"), Ok(Some("H".to_string())));
    }

    #[test]
    fn test_nullable_repeat_terminates() {
        assert_eq!(run("(B*)*W", "BBW"), Ok(Some("BBW".to_string())));
        assert_eq!(run("x+B", "BW"), Ok(Some("B".to_string())));
    }

    #[test]
    fn test_nullable_repeat_takes_every_iteration() {
        assert_eq!(run("(B?)*W", "BBW_"), Ok(Some("BBW".to_string())));
        assert_eq!(run("(B?)+W", "BBW_"), Ok(Some("BBW".to_string())));
        assert_eq!(run("(B?)+W", "W_"), Ok(Some("W".to_string())));
        assert_eq!(run("(B|x)*W", "BBW_"), Ok(Some("BBW".to_string())));
    }

    #[test]
    fn test_new_reports_character_offsets() {
        assert_eq!(
            Regcx::new("B  )"),
            Err(PatternError::UnexpectedToken {
                position: 3,
                found: crate::pattern::Token::RightParen,
            })
        );
        assert_eq!(
            Regcx::new("B?q"),
            Err(PatternError::UnknownSymbol {
                position: 2,
                found: 'q',
            })
        );
    }

    #[test]
    fn test_from_str_and_from_atom() {
        let parsed: Regcx = "H".parse().unwrap();
        assert_eq!(parsed, Regcx::from(Atom::H));
        assert!(parsed.is_match(&records("HB")));
        assert!(!parsed.is_match(&records("BH")));
    }
}
