use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};
use std::ops::{Bound, RangeBounds};

/// Matcher combinator that repeats a matcher greedily within inclusive bounds
///
/// Repetition stops when the sub-matcher fails or the upper bound is reached. The
/// match succeeds iff the final count lies within the bounds. `0..=1`, `0..` and `1..`
/// give the usual `?`, `*` and `+`. An empty range never matches.
///
/// A sub-matcher that succeeds without consuming loops forever under an unbounded
/// upper limit.
pub struct Quantify<M> {
    matcher: M,
    min: usize,
    max: Option<usize>,
}

impl<M> Quantify<M> {
    pub fn new(matcher: M, bounds: impl RangeBounds<usize>) -> Self {
        let mut min = match bounds.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let max = match bounds.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&0) => {
                // `..0` contains no count at all
                min = 1;
                Some(0)
            }
            Bound::Excluded(&n) => Some(n - 1),
            Bound::Unbounded => None,
        };
        Quantify { matcher, min, max }
    }

    fn admits(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    fn has_room(&self, count: usize) -> bool {
        self.max.is_none_or(|max| count < max)
    }
}

impl<M> Matcher for Quantify<M>
where
    M: Matcher,
{
    type Cursor = M::Cursor;
    type Output = Vec<M::Output>;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        let mut results = Vec::new();

        while self.has_room(results.len()) {
            match self.matcher.matches(scan)? {
                Some(value) => results.push(value),
                None => break,
            }
        }

        if self.admits(results.len()) {
            Ok(Some(results))
        } else {
            Ok(None)
        }
    }
}

/// Convenience function to create a Quantify matcher
pub fn quantify<M>(matcher: M, bounds: impl RangeBounds<usize>) -> Quantify<M>
where
    M: Matcher,
{
    Quantify::new(matcher, bounds)
}

/// Zero or more repetitions
pub fn many<M>(matcher: M) -> Quantify<M>
where
    M: Matcher,
{
    Quantify::new(matcher, 0..)
}

/// One or more repetitions
pub fn some<M>(matcher: M) -> Quantify<M>
where
    M: Matcher,
{
    Quantify::new(matcher, 1..)
}

/// At most `n` repetitions
pub fn at_most<M>(matcher: M, n: usize) -> Quantify<M>
where
    M: Matcher,
{
    Quantify::new(matcher, 0..=n)
}

/// Extension trait to add .repeat() method support for matchers
pub trait QuantifyExt: Matcher + Sized {
    fn repeat(self, bounds: impl RangeBounds<usize>) -> Quantify<Self> {
        Quantify::new(self, bounds)
    }
}

impl<M> QuantifyExt for M where M: Matcher {}
