use crate::error::{MatchResult, StreamEnd};
use crate::matcher::{Matcher, PositiveMatcher, Scan};
use crate::maybe::Maybe;

/// Matcher combinator that never fails, tagging whether the inner matcher matched
///
/// Failure transparency only holds when the inner matcher does not consume on
/// failure: a half-matched sequence stays consumed.
pub struct Optional<M> {
    matcher: M,
}

impl<M> Optional<M> {
    pub fn new(matcher: M) -> Self {
        Optional { matcher }
    }
}

impl<M> Matcher for Optional<M>
where
    M: Matcher,
{
    type Cursor = M::Cursor;
    type Output = Maybe<M::Output>;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        self.matches_always(scan).map(Some)
    }
}

impl<M> PositiveMatcher for Optional<M>
where
    M: Matcher,
{
    fn matches_always(
        &self,
        scan: &mut Scan<Self::Cursor>,
    ) -> Result<Self::Output, StreamEnd> {
        Ok(self.matcher.matches(scan)?.into())
    }
}

/// Convenience function to create an Optional matcher
pub fn optional<M>(matcher: M) -> Optional<M>
where
    M: Matcher,
{
    Optional::new(matcher)
}

/// Extension trait to add .optional() method support for matchers
pub trait OptionalExt: Matcher + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<M> OptionalExt for M where M: Matcher {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::CharCursor;
    use crate::satisfy::item;

    fn scan(text: &str) -> Scan<CharCursor<'_>> {
        Scan::new(CharCursor::from_text(text))
    }

    #[test]
    fn test_optional_present() {
        let mut scan = scan("ab");
        let matcher = optional(item('a'));

        assert_eq!(matcher.matches(&mut scan), Ok(Some(Maybe::Present('a'))));
        assert_eq!(scan.peek(), Ok(&'b'));
    }

    #[test]
    fn test_optional_absent_restores_nothing_needed() {
        let mut scan = scan("b");
        let matcher = item('a').optional();

        assert_eq!(matcher.matches_always(&mut scan), Ok(Maybe::Absent));
        assert_eq!(scan.position(), 0);
    }

    #[test]
    fn test_optional_then_required() {
        let mut scan = scan("-5");
        let matcher = item('-').optional().and(item('5'));

        assert_eq!(
            matcher.matches(&mut scan),
            Ok(Some((Maybe::Present('-'), '5')))
        );
    }

    #[test]
    fn test_optional_over_partial_sequence_keeps_consumption() {
        let mut scan = scan("ax");
        let matcher = item('a').and(item('b')).optional();

        assert_eq!(matcher.matches(&mut scan), Ok(Some(Maybe::Absent)));
        assert_eq!(scan.position(), 1);
    }

    #[test]
    fn test_optional_absent_at_end_of_input() {
        let mut scan = scan("a");
        let matcher = item('a').and(item('b').optional());

        assert_eq!(matcher.matches(&mut scan), Ok(Some(('a', Maybe::Absent))));
        assert!(scan.is_at_end());
    }
}
