use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};

/// Matcher combinator whose continuation is built from the first match's value
///
/// Matches `matcher`, passes its value to `continuation` to obtain the next matcher,
/// and runs that one on the advanced cursor. Fails if either step fails.
pub struct Contextual<M, F> {
    matcher: M,
    continuation: F,
}

impl<M, F> Contextual<M, F> {
    pub fn new(matcher: M, continuation: F) -> Self {
        Contextual {
            matcher,
            continuation,
        }
    }
}

impl<M, F, N> Matcher for Contextual<M, F>
where
    M: Matcher,
    F: Fn(M::Output) -> N,
    N: Matcher<Cursor = M::Cursor>,
{
    type Cursor = M::Cursor;
    type Output = N::Output;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        match self.matcher.matches(scan)? {
            Some(value) => (self.continuation)(value).matches(scan),
            None => Ok(None),
        }
    }
}

/// Convenience function to create a Contextual matcher
pub fn contextual<M, F, N>(matcher: M, continuation: F) -> Contextual<M, F>
where
    M: Matcher,
    F: Fn(M::Output) -> N,
    N: Matcher<Cursor = M::Cursor>,
{
    Contextual::new(matcher, continuation)
}

/// Extension trait to add .and_then() method support for matchers
pub trait ContextualExt: Matcher + Sized {
    fn and_then<F, N>(self, continuation: F) -> Contextual<Self, F>
    where
        F: Fn(Self::Output) -> N,
        N: Matcher<Cursor = Self::Cursor>,
    {
        Contextual::new(self, continuation)
    }
}

impl<M> ContextualExt for M where M: Matcher {}
