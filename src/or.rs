use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};

/// Matcher combinator that tries alternatives in order and returns the first success
///
/// First match wins, not longest match. Input consumed by a failed alternative is
/// not restored before the next one is tried. An empty `Or` never matches.
pub struct Or<M> {
    alternatives: Vec<M>,
}

impl<M> Or<M> {
    pub fn new(alternatives: Vec<M>) -> Self {
        Or { alternatives }
    }
}

impl<M> Matcher for Or<M>
where
    M: Matcher,
{
    type Cursor = M::Cursor;
    type Output = M::Output;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        for alternative in &self.alternatives {
            if let Some(value) = alternative.matches(scan)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// Convenience function to create an Or matcher
pub fn or<M>(alternatives: impl IntoIterator<Item = M>) -> Or<M>
where
    M: Matcher,
{
    Or::new(alternatives.into_iter().collect())
}

/// Matcher combinator that tries the first matcher, and if it fails, tries the second
///
/// The two-alternative form of [`Or`] for matchers of different types.
pub struct Either<M1, M2> {
    first: M1,
    second: M2,
}

impl<M1, M2> Either<M1, M2> {
    pub fn new(first: M1, second: M2) -> Self {
        Either { first, second }
    }
}

impl<M1, M2> Matcher for Either<M1, M2>
where
    M1: Matcher,
    M2: Matcher<Cursor = M1::Cursor, Output = M1::Output>,
{
    type Cursor = M1::Cursor;
    type Output = M1::Output;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        match self.first.matches(scan)? {
            Some(value) => Ok(Some(value)),
            None => self.second.matches(scan),
        }
    }
}

/// Extension trait to add .or() method support for matchers
pub trait OrExt: Matcher + Sized {
    fn or<M>(self, other: M) -> Either<Self, M>
    where
        M: Matcher<Cursor = Self::Cursor, Output = Self::Output>,
    {
        Either::new(self, other)
    }
}

/// Implement OrExt for all matchers
impl<M> OrExt for M where M: Matcher {}
