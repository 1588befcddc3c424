use crate::cursor::Cursor;
use crate::cursors::CharCursor;
use crate::matcher::{Matcher, Scan};
use log::{debug, trace};

/// Drives a token matcher repeatedly over a cursor to produce tokens
///
/// Every call to [`Lexer::next_token`] is one top-level match with a fresh binding.
/// The first failed match, or the first read past the end of input, halts the lexer
/// for good. The two cases are not told apart: clean end of input and malformed
/// trailing input both just end the token sequence.
pub struct Lexer<M: Matcher> {
    scan: Scan<M::Cursor>,
    token: M,
    halted: bool,
}

impl<M: Matcher> Lexer<M> {
    pub fn new(cursor: M::Cursor, token: M) -> Self {
        Lexer {
            scan: Scan::new(cursor),
            token,
            halted: false,
        }
    }

    /// Attempt the token matcher once
    pub fn next_token(&mut self) -> Option<M::Output> {
        if self.halted {
            return None;
        }

        self.scan.binding_mut().clear();
        let start = self.scan.position();
        match self.token.matches(&mut self.scan) {
            Ok(Some(token)) => {
                trace!("token at {}..{}", start, self.scan.position());
                Some(token)
            }
            Ok(None) => {
                debug!("no token matches at position {}, lexer halted", start);
                self.halted = true;
                None
            }
            Err(end) => {
                debug!("{}, lexer halted", end);
                self.halted = true;
                None
            }
        }
    }

    /// Lazily produce tokens until the first position where none matches
    pub fn tokens(&mut self) -> Tokens<'_, M> {
        Tokens { lexer: self }
    }

    /// Number of input elements consumed so far
    pub fn position(&self) -> usize {
        self.scan.position()
    }

    /// Check if the lexer has stopped producing tokens
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Check if every input element has been consumed
    pub fn is_at_end(&self) -> bool {
        self.scan.cursor().is_exhausted()
    }

    /// Position and element where tokenizing stopped short of the end of input
    ///
    /// `None` if every input element was consumed.
    pub fn stopped_at(&self) -> Option<(usize, &<M::Cursor as Cursor>::Element)> {
        if self.is_at_end() {
            return None;
        }
        let element = self.scan.peek().ok()?;
        Some((self.scan.position(), element))
    }
}

impl<'a, M> Lexer<M>
where
    M: Matcher<Cursor = CharCursor<'a>>,
{
    /// Create a lexer over the characters of `input`
    pub fn from_text(input: &'a str, token: M) -> Self {
        Lexer::new(CharCursor::from_text(input), token)
    }
}

/// Iterator over the tokens of a [`Lexer`]
pub struct Tokens<'l, M: Matcher> {
    lexer: &'l mut Lexer<M>,
}

impl<M: Matcher> Iterator for Tokens<'_, M> {
    type Item = M::Output;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_token()
    }
}

impl<M: Matcher> std::iter::FusedIterator for Tokens<'_, M> {}
