use crate::cursor::Cursor;
use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};
use log::trace;
use std::marker::PhantomData;

/// Matcher combinator that records its match under a name in the scan's binding
///
/// On success the value overwrites any earlier capture of the same name. On
/// failure the binding is left untouched.
pub struct Group<M> {
    name: String,
    matcher: M,
}

impl<M> Group<M> {
    pub fn new(name: impl Into<String>, matcher: M) -> Self {
        Group {
            name: name.into(),
            matcher,
        }
    }
}

impl<C, M> Matcher for Group<M>
where
    C: Cursor,
    C::Element: Clone,
    M: Matcher<Cursor = C, Output = C::Element>,
{
    type Cursor = C;
    type Output = C::Element;

    fn matches(&self, scan: &mut Scan<C>) -> MatchResult<C::Element> {
        let Some(value) = self.matcher.matches(scan)? else {
            return Ok(None);
        };
        trace!("capture `{}` bound at position {}", self.name, scan.position());
        scan.binding_mut().bind(self.name.as_str(), value.clone());
        Ok(Some(value))
    }
}

/// Convenience function to create a Group matcher
pub fn group<C, M>(name: impl Into<String>, matcher: M) -> Group<M>
where
    C: Cursor,
    C::Element: Clone,
    M: Matcher<Cursor = C, Output = C::Element>,
{
    Group::new(name, matcher)
}

/// Extension trait to add .group() method support for matchers
pub trait GroupExt: Matcher + Sized {
    fn group(self, name: impl Into<String>) -> Group<Self> {
        Group::new(name, self)
    }
}

impl<M> GroupExt for M where M: Matcher {}

/// Matcher that consumes one element equal to the value captured under a name
///
/// A name that has not been bound in this scan never matches.
pub struct Backref<C> {
    name: String,
    _cursor: PhantomData<fn() -> C>,
}

impl<C> Backref<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Backref {
            name: name.into(),
            _cursor: PhantomData,
        }
    }
}

impl<C> Matcher for Backref<C>
where
    C: Cursor,
    C::Element: PartialEq,
{
    type Cursor = C;
    type Output = C::Element;

    fn matches(&self, scan: &mut Scan<C>) -> MatchResult<C::Element> {
        let Some(bound) = scan.binding().get(&self.name) else {
            trace!("backreference to unbound capture `{}`", self.name);
            return Ok(None);
        };
        if scan.peek()? == bound {
            scan.consume().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Convenience function to create a Backref matcher
pub fn backref<C>(name: impl Into<String>) -> Backref<C>
where
    C: Cursor,
    C::Element: PartialEq,
{
    Backref::new(name)
}
