use crate::cursor::Cursor;
use crate::error::{MatchResult, StreamEnd};
use crate::matcher::{Matcher, PositiveMatcher, Scan};
use std::marker::PhantomData;

/// Zero-width matcher returning the lookahead element without consuming it
///
/// Used for lookahead assertions. After the final element has been consumed it
/// still returns that element. It reports [`StreamEnd`] on empty input, or once
/// a read has run past the end.
pub struct PeekBoundary<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> PeekBoundary<C> {
    pub fn new() -> Self {
        PeekBoundary {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for PeekBoundary<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Matcher for PeekBoundary<C>
where
    C: Cursor,
    C::Element: Clone,
{
    type Cursor = C;
    type Output = C::Element;

    fn matches(&self, scan: &mut Scan<C>) -> MatchResult<C::Element> {
        self.matches_always(scan).map(Some)
    }
}

impl<C> PositiveMatcher for PeekBoundary<C>
where
    C: Cursor,
    C::Element: Clone,
{
    fn matches_always(&self, scan: &mut Scan<C>) -> Result<C::Element, StreamEnd> {
        scan.peek().cloned()
    }
}

/// Convenience function to create a PeekBoundary matcher
pub fn peek_boundary<C>() -> PeekBoundary<C>
where
    C: Cursor,
    C::Element: Clone,
{
    PeekBoundary::new()
}

/// Zero-width matcher that always succeeds with a fixed value
///
/// Never reads the cursor, so it also succeeds at end of input. This is the
/// empty alternative of recursive rules like `R := '(' R ')' | ε`.
pub struct Pure<C, T> {
    value: T,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, T> Pure<C, T> {
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<C, T> Matcher for Pure<C, T>
where
    C: Cursor,
    T: Clone,
{
    type Cursor = C;
    type Output = T;

    fn matches(&self, scan: &mut Scan<C>) -> MatchResult<T> {
        self.matches_always(scan).map(Some)
    }
}

impl<C, T> PositiveMatcher for Pure<C, T>
where
    C: Cursor,
    T: Clone,
{
    fn matches_always(&self, _scan: &mut Scan<C>) -> Result<T, StreamEnd> {
        Ok(self.value.clone())
    }
}

/// Convenience function to create a Pure matcher
pub fn pure<C, T>(value: T) -> Pure<C, T>
where
    C: Cursor,
    T: Clone,
{
    Pure::new(value)
}
