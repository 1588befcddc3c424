use crate::error::StreamEnd;

/// One-element lookahead reader over an input sequence
///
/// A cursor is mutated in place by every `consume` and is owned by exactly one
/// in-flight match. Once the final element has been consumed the cursor is
/// exhausted but still pending: `peek` keeps returning that last element, and
/// only the next `consume` reports [`StreamEnd`]. From then on every read fails.
/// A cursor over empty input fails every read from the start.
pub trait Cursor {
    /// The type of elements this cursor reads
    type Element;

    /// Look at the current element without advancing
    ///
    /// Returns an error only after a `consume` has run past the end, or on
    /// empty input
    fn peek(&self) -> Result<&Self::Element, StreamEnd>;

    /// Return the current element and advance to the next one
    ///
    /// Returns an error if called after the final element has been consumed
    fn consume(&mut self) -> Result<Self::Element, StreamEnd>;

    /// Number of elements consumed so far
    fn position(&self) -> usize;

    /// Check if every element has been consumed
    ///
    /// True while pending, even though `peek` still succeeds
    fn is_exhausted(&self) -> bool;

    /// Consume elements while `predicate` holds, stopping cleanly at end of input
    fn take_while<P>(&mut self, mut predicate: P) -> Vec<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        let mut taken = Vec::new();
        while !self.is_exhausted() && self.peek().is_ok_and(&mut predicate) {
            match self.consume() {
                Ok(element) => taken.push(element),
                Err(_) => break,
            }
        }
        taken
    }

    /// Skip elements while `predicate` holds, returning how many were skipped
    fn skip_while<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        let mut skipped = 0;
        while !self.is_exhausted() && self.peek().is_ok_and(&mut predicate) {
            if self.consume().is_err() {
                break;
            }
            skipped += 1;
        }
        skipped
    }
}
