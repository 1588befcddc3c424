use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};

/// Matcher combinator that transforms the output of a matcher using a mapping function
///
/// Only the shape of the result changes; success and failure are those of the
/// inner matcher.
pub struct Compose<M, F> {
    matcher: M,
    transform: F,
}

impl<M, F> Compose<M, F> {
    pub fn new(matcher: M, transform: F) -> Self {
        Compose { matcher, transform }
    }
}

impl<M, F, U> Matcher for Compose<M, F>
where
    M: Matcher,
    F: Fn(M::Output) -> U,
{
    type Cursor = M::Cursor;
    type Output = U;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<U> {
        Ok(self.matcher.matches(scan)?.map(&self.transform))
    }
}

/// Convenience function to create a Compose matcher
pub fn compose<M, F, U>(matcher: M, transform: F) -> Compose<M, F>
where
    M: Matcher,
    F: Fn(M::Output) -> U,
{
    Compose::new(matcher, transform)
}

/// Matcher combinator with a partial transform that can reject the inner result
///
/// Whatever the inner matcher consumed stays consumed when the transform rejects.
pub struct FilterMap<M, F> {
    matcher: M,
    transform: F,
}

impl<M, F> FilterMap<M, F> {
    pub fn new(matcher: M, transform: F) -> Self {
        FilterMap { matcher, transform }
    }
}

impl<M, F, U> Matcher for FilterMap<M, F>
where
    M: Matcher,
    F: Fn(M::Output) -> Option<U>,
{
    type Cursor = M::Cursor;
    type Output = U;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<U> {
        Ok(self.matcher.matches(scan)?.and_then(&self.transform))
    }
}

/// Extension trait to add .map() and .filter_map() method support for matchers
pub trait MapExt: Matcher + Sized {
    fn map<F, U>(self, transform: F) -> Compose<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Compose::new(self, transform)
    }

    fn filter_map<F, U>(self, transform: F) -> FilterMap<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        FilterMap::new(self, transform)
    }
}

/// Implement MapExt for all matchers
impl<M> MapExt for M where M: Matcher {}
