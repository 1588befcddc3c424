use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};

/// Matcher combinator that applies each sub-matcher in order and collects the results
///
/// Succeeds only if every sub-matcher succeeds. There is no rollback: when a later
/// sub-matcher fails, whatever the earlier ones consumed stays consumed, so a failed
/// `Seq` can leave the cursor partially advanced. Inside an [`Or`](crate::Or), give
/// alternatives distinct first elements (or guard them with a lookahead) so that a
/// half-matched alternative cannot swallow input meant for the next one.
pub struct Seq<M> {
    items: Vec<M>,
}

impl<M> Seq<M> {
    pub fn new(items: Vec<M>) -> Self {
        Seq { items }
    }
}

impl<M> Matcher for Seq<M>
where
    M: Matcher,
{
    type Cursor = M::Cursor;
    type Output = Vec<M::Output>;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        let mut results = Vec::with_capacity(self.items.len());

        for item in &self.items {
            match item.matches(scan)? {
                Some(value) => results.push(value),
                None => return Ok(None),
            }
        }

        Ok(Some(results))
    }
}

/// Convenience function to create a Seq matcher
pub fn seq<M>(items: impl IntoIterator<Item = M>) -> Seq<M>
where
    M: Matcher,
{
    Seq::new(items.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::CharCursor;
    use crate::matcher::{BoxedExt, BoxedMatcher};
    use crate::satisfy::{elem, item};

    fn scan(text: &str) -> Scan<CharCursor<'_>> {
        Scan::new(CharCursor::from_text(text))
    }

    #[test]
    fn test_seq_all_succeed() {
        let mut scan = scan("abc");
        let matcher = seq("ab".chars().map(item));

        assert_eq!(matcher.matches(&mut scan), Ok(Some(vec!['a', 'b'])));
        assert_eq!(scan.peek(), Ok(&'c'));
    }

    #[test]
    fn test_seq_first_fails_without_consuming() {
        let mut scan = scan("xbc");
        let matcher = seq("ab".chars().map(item));

        assert_eq!(matcher.matches(&mut scan), Ok(None));
        assert_eq!(scan.position(), 0);
    }

    #[test]
    fn test_seq_later_failure_keeps_consumption() {
        let mut scan = scan("axc");
        let matcher = seq("ab".chars().map(item));

        assert_eq!(matcher.matches(&mut scan), Ok(None));
        // 'a' was consumed before 'b' failed; nothing is rolled back
        assert_eq!(scan.position(), 1);
        assert_eq!(scan.peek(), Ok(&'x'));
    }

    #[test]
    fn test_seq_empty_succeeds() {
        let mut scan = scan("a");
        let matcher: Seq<BoxedMatcher<'_, CharCursor<'_>, char>> = seq(Vec::new());

        assert_eq!(matcher.matches(&mut scan), Ok(Some(vec![])));
        assert_eq!(scan.position(), 0);
    }

    #[test]
    fn test_seq_mixed_matchers_boxed() {
        let mut scan = scan("a1");
        let matcher = seq([item('a').boxed(), elem('0'..='9').boxed()]);

        assert_eq!(matcher.matches(&mut scan), Ok(Some(vec!['a', '1'])));
        assert!(scan.is_at_end());
    }
}
