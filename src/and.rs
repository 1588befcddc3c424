use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};

/// Matcher combinator that sequences two matchers and returns both results as a tuple
///
/// This is the two-element form of [`Seq`](crate::Seq) for matchers with different
/// output types. Chaining `.and()` produces nested tuples like `((a, b), c)`.
/// Like `Seq`, a failure of the second matcher does not undo the first.
pub struct And<M1, M2> {
    first: M1,
    second: M2,
}

impl<M1, M2> And<M1, M2> {
    pub fn new(first: M1, second: M2) -> Self {
        And { first, second }
    }
}

impl<M1, M2> Matcher for And<M1, M2>
where
    M1: Matcher,
    M2: Matcher<Cursor = M1::Cursor>,
{
    type Cursor = M1::Cursor;
    type Output = (M1::Output, M2::Output);

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        let Some(first) = self.first.matches(scan)? else {
            return Ok(None);
        };
        let Some(second) = self.second.matches(scan)? else {
            return Ok(None);
        };
        Ok(Some((first, second)))
    }
}

/// Convenience function to create an And matcher
pub fn and<M1, M2>(first: M1, second: M2) -> And<M1, M2>
where
    M1: Matcher,
    M2: Matcher<Cursor = M1::Cursor>,
{
    And::new(first, second)
}

/// Extension trait to add .and() method support for matchers
pub trait AndExt: Matcher + Sized {
    fn and<M>(self, other: M) -> And<Self, M>
    where
        M: Matcher<Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all matchers
impl<M> AndExt for M where M: Matcher {}
