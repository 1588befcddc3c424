use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};
use std::fmt;

/// Range of cursor positions covered by a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A matcher combinator that captures the position span of a successful match
pub struct Spanned<M> {
    matcher: M,
}

impl<M> Spanned<M> {
    pub fn new(matcher: M) -> Self {
        Spanned { matcher }
    }
}

impl<M> Matcher for Spanned<M>
where
    M: Matcher,
{
    type Cursor = M::Cursor;
    type Output = (M::Output, Span);

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        let start = scan.position();
        let output = self.matcher.matches(scan)?;
        Ok(output.map(|value| (value, Span::new(start, scan.position()))))
    }
}

/// Extension trait to add position tracking to any matcher
pub trait SpannedExt: Matcher + Sized {
    /// Wrap this matcher to capture its position span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<M> SpannedExt for M where M: Matcher {}

/// Convenience function to create a Spanned combinator
pub fn spanned<M>(matcher: M) -> Spanned<M>
where
    M: Matcher,
{
    Spanned::new(matcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::CharCursor;
    use crate::peek::peek_boundary;
    use crate::quantify::some;
    use crate::satisfy::item;

    fn scan(text: &str) -> Scan<CharCursor<'_>> {
        Scan::new(CharCursor::from_text(text))
    }

    #[test]
    fn test_span_of_single_element() {
        let mut scan = scan("ab");
        let matcher = item('a').spanned();

        assert_eq!(matcher.matches(&mut scan), Ok(Some(('a', Span::new(0, 1)))));
    }

    #[test]
    fn test_span_after_offset() {
        let mut scan = scan("xxyyy;");
        assert_eq!(some(item('x')).matches(&mut scan), Ok(Some(vec!['x', 'x'])));

        let (ys, span) = spanned(some(item('y')))
            .matches(&mut scan)
            .unwrap()
            .unwrap();
        assert_eq!(ys.len(), 3);
        assert_eq!(span, Span::new(2, 5));
        assert_eq!(span.len(), 3);
        assert_eq!(span.to_string(), "2..5");
    }

    #[test]
    fn test_zero_width_span_is_empty() {
        let mut scan = scan("q");
        let (_, span) = peek_boundary().spanned().matches(&mut scan).unwrap().unwrap();

        assert!(span.is_empty());
    }

    #[test]
    fn test_failure_has_no_span() {
        let mut scan = scan("b");
        assert_eq!(item('a').spanned().matches(&mut scan), Ok(None));
    }
}
