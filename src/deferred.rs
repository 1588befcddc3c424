use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};

/// A matcher that defers the construction of the actual matcher until match time.
///
/// The factory runs afresh on every attempt, which lets a rule mention itself
/// (directly or through other rules) without recursing at construction time.
pub struct Deferred<F> {
    factory: F,
}

impl<F> Deferred<F> {
    /// Create a new deferred matcher with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, M> Matcher for Deferred<F>
where
    F: Fn() -> M,
    M: Matcher,
{
    type Cursor = M::Cursor;
    type Output = M::Output;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        (self.factory)().matches(scan)
    }
}

/// Create a deferred matcher from a factory function
pub fn deferred<F, M>(factory: F) -> Deferred<F>
where
    F: Fn() -> M,
    M: Matcher,
{
    Deferred::new(factory)
}
