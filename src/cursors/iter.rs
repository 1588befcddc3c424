use crate::cursor::Cursor;
use crate::error::StreamEnd;
use std::fmt;

/// Cursor over any iterator, holding one element of lookahead
///
/// The final element stays visible to `peek` after it is consumed, so a
/// matcher that only inspects it at the end of input fails cleanly. Consuming
/// it a second time reports [`StreamEnd`].
pub struct IterCursor<I: Iterator> {
    source: I,
    lookahead: Lookahead<I::Item>,
    position: usize,
}

#[derive(Debug)]
enum Lookahead<T> {
    /// Not yet consumed
    Ready(T),
    /// The final element, already consumed
    Pending(T),
    Done,
}

/// Cursor over the characters of a string slice
pub type CharCursor<'a> = IterCursor<std::str::Chars<'a>>;

impl<I: Iterator> IterCursor<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let mut source = source.into_iter();
        let lookahead = source.next().map_or(Lookahead::Done, Lookahead::Ready);
        IterCursor {
            source,
            lookahead,
            position: 0,
        }
    }
}

impl<'a> IterCursor<std::str::Chars<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        IterCursor::new(text.chars())
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Element = I::Item;

    fn peek(&self) -> Result<&Self::Element, StreamEnd> {
        match &self.lookahead {
            Lookahead::Ready(element) | Lookahead::Pending(element) => Ok(element),
            Lookahead::Done => Err(StreamEnd::new(self.position)),
        }
    }

    fn consume(&mut self) -> Result<Self::Element, StreamEnd> {
        match std::mem::replace(&mut self.lookahead, Lookahead::Done) {
            Lookahead::Ready(current) => {
                self.position += 1;
                self.lookahead = match self.source.next() {
                    Some(next) => Lookahead::Ready(next),
                    None => Lookahead::Pending(current.clone()),
                };
                Ok(current)
            }
            Lookahead::Pending(_) | Lookahead::Done => Err(StreamEnd::new(self.position)),
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&self) -> bool {
        !matches!(self.lookahead, Lookahead::Ready(_))
    }
}

impl<I> fmt::Debug for IterCursor<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("lookahead", &self.lookahead)
            .field("position", &self.position)
            .finish()
    }
}
