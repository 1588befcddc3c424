use crate::binding::Binding;
use crate::cursor::Cursor;
use crate::error::{MatchResult, StreamEnd};

/// Explicit state of one top-level match: the cursor and its capture binding
pub struct Scan<C: Cursor> {
    cursor: C,
    binding: Binding<C::Element>,
}

impl<C: Cursor> Scan<C> {
    /// Start a match pass over `cursor` with an empty binding
    pub fn new(cursor: C) -> Self {
        Scan {
            cursor,
            binding: Binding::new(),
        }
    }

    pub fn peek(&self) -> Result<&C::Element, StreamEnd> {
        self.cursor.peek()
    }

    pub fn consume(&mut self) -> Result<C::Element, StreamEnd> {
        self.cursor.consume()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_exhausted()
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    pub fn binding(&self) -> &Binding<C::Element> {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut Binding<C::Element> {
        &mut self.binding
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

/// Core matcher trait for matcher combinators
///
/// A matcher owns no input state. The same matcher value can be run against any
/// number of independent scans.
pub trait Matcher {
    type Cursor: Cursor;
    type Output;

    /// Attempt one recognition at the current cursor position
    ///
    /// Returns `Ok(Some(value))` on success and `Ok(None)` when the grammar does not
    /// match. Primitive matchers never consume on failure; combinators built from
    /// sequences may (see [`Seq`](crate::Seq)).
    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output>;
}

/// A matcher that cannot fail as a grammar; only the cursor can refuse it
pub trait PositiveMatcher: Matcher {
    fn matches_always(&self, scan: &mut Scan<Self::Cursor>) -> Result<Self::Output, StreamEnd>;
}

/// Type-erased matcher, used for recursive rules and mixed alternatives
pub type BoxedMatcher<'a, C, O> = Box<dyn Matcher<Cursor = C, Output = O> + 'a>;

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    type Cursor = M::Cursor;
    type Output = M::Output;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        (**self).matches(scan)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    type Cursor = M::Cursor;
    type Output = M::Output;

    fn matches(&self, scan: &mut Scan<Self::Cursor>) -> MatchResult<Self::Output> {
        (**self).matches(scan)
    }
}

/// Extension trait to add .boxed() method support for matchers
pub trait BoxedExt: Matcher + Sized {
    fn boxed<'a>(self) -> BoxedMatcher<'a, Self::Cursor, Self::Output>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<M> BoxedExt for M where M: Matcher {}
