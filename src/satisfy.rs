use crate::cursor::Cursor;
use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

/// Matcher that consumes and returns one element if it satisfies a predicate
///
/// On failure the cursor is left untouched.
pub struct Satisfy<C, F> {
    predicate: F,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, F> Satisfy<C, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _cursor: PhantomData,
        }
    }
}

impl<C, F> Matcher for Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    type Cursor = C;
    type Output = C::Element;

    fn matches(&self, scan: &mut Scan<C>) -> MatchResult<C::Element> {
        if (self.predicate)(scan.peek()?) {
            scan.consume().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Convenience function to create a Satisfy matcher
pub fn satisfy<C, F>(predicate: F) -> Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    Satisfy::new(predicate)
}

/// Match one element equal to `expected`
pub fn item<C>(expected: C::Element) -> Satisfy<C, impl Fn(&C::Element) -> bool>
where
    C: Cursor,
    C::Element: PartialEq,
{
    satisfy(move |element: &C::Element| *element == expected)
}

/// Match one element contained in `set`
pub fn elem<C, S>(set: S) -> Satisfy<C, impl Fn(&C::Element) -> bool>
where
    C: Cursor,
    C::Element: Eq + Hash,
    S: IntoIterator<Item = C::Element>,
{
    let set: HashSet<C::Element> = set.into_iter().collect();
    satisfy(move |element: &C::Element| set.contains(element))
}

/// Match one element not contained in `set`
pub fn not_elem<C, S>(set: S) -> Satisfy<C, impl Fn(&C::Element) -> bool>
where
    C: Cursor,
    C::Element: Eq + Hash,
    S: IntoIterator<Item = C::Element>,
{
    let set: HashSet<C::Element> = set.into_iter().collect();
    satisfy(move |element: &C::Element| !set.contains(element))
}

/// Match any single element
pub fn any<C>() -> Satisfy<C, impl Fn(&C::Element) -> bool>
where
    C: Cursor,
{
    satisfy(|_: &C::Element| true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{CharCursor, IterCursor};

    fn scan(text: &str) -> Scan<CharCursor<'_>> {
        Scan::new(CharCursor::from_text(text))
    }

    #[test]
    fn test_satisfy_success() {
        let mut scan = scan("7x");
        let matcher = satisfy(|c: &char| c.is_ascii_digit());

        assert_eq!(matcher.matches(&mut scan), Ok(Some('7')));
        assert_eq!(scan.peek(), Ok(&'x'));
    }

    #[test]
    fn test_satisfy_failure_does_not_consume() {
        let mut scan = scan("x7");
        let matcher = satisfy(|c: &char| c.is_ascii_digit());

        assert_eq!(matcher.matches(&mut scan), Ok(None));
        assert_eq!(scan.position(), 0);
        assert_eq!(scan.peek(), Ok(&'x'));
    }

    #[test]
    fn test_item() {
        let mut scan = scan("ab");
        assert_eq!(item('b').matches(&mut scan), Ok(None));
        assert_eq!(item('a').matches(&mut scan), Ok(Some('a')));
        assert_eq!(item('b').matches(&mut scan), Ok(Some('b')));
    }

    #[test]
    fn test_elem_and_not_elem() {
        let mut scan = scan("a;");
        let letters = elem(['a', 'b']);
        let not_letters = not_elem(['a', 'b']);

        assert_eq!(not_letters.matches(&mut scan), Ok(None));
        assert_eq!(letters.matches(&mut scan), Ok(Some('a')));
        assert_eq!(letters.matches(&mut scan), Ok(None));
        assert_eq!(not_letters.matches(&mut scan), Ok(Some(';')));
    }

    #[test]
    fn test_any_accepts_everything() {
        let mut scan = Scan::new(IterCursor::new(vec![3u8, 0, 255]));
        let matcher = any();

        assert_eq!(matcher.matches(&mut scan), Ok(Some(3)));
        assert_eq!(matcher.matches(&mut scan), Ok(Some(0)));
        assert_eq!(matcher.matches(&mut scan), Ok(Some(255)));
    }

    #[test]
    fn test_read_past_end_is_an_error() {
        let mut scan = scan("a");
        let matcher = any();

        assert_eq!(matcher.matches(&mut scan), Ok(Some('a')));
        assert!(matcher.matches(&mut scan).is_err());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let mut scan = scan("");
        assert!(item('a').matches(&mut scan).is_err());
    }

    #[test]
    fn test_matches_over_tokens() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Tok {
            Open,
            Close,
        }

        let mut scan = Scan::new(IterCursor::new(vec![Tok::Open, Tok::Close]));
        assert_eq!(item(Tok::Close).matches(&mut scan), Ok(None));
        assert_eq!(item(Tok::Open).matches(&mut scan), Ok(Some(Tok::Open)));
        assert_eq!(elem([Tok::Close]).matches(&mut scan), Ok(Some(Tok::Close)));
    }
}
