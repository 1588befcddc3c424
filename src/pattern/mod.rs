//! A small pattern language over streams of records
//!
//! A record is either one of four atoms (`B`, `W`, `H`, `L`) or nil. Patterns are
//! tokenized with [`lexer`], parsed into a [`Pattern`] with [`parse`], and run
//! through a [`Regcx`], which compiles them into matchers from this crate.
//!
//! ```text
//! alternation := sequence ('|' sequence)*
//! sequence    := quantified*
//! quantified  := factor ('+' | '*' | '?')?
//! factor      := atom | '.' | '✖' | 'x' | '[' atom+ ']' | '(' alternation ')'
//! ```

mod ast;
mod compile;
mod error;
mod lexer;
mod parser;
mod token;

pub use ast::{Pattern, Quantifier};
pub use compile::{RecordCursor, Regcx, compile};
pub use error::PatternError;
pub use lexer::{lex, lexer, tokenize, tokenize_spanned};
pub use parser::parse;
pub use token::{SYMBOLS, Token};

use crate::lexer::Lexer;
use crate::symbol::symbol;
use phf::phf_map;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    B,
    W,
    H,
    L,
}

/// One element of a record stream: an atom, or `None` for the nil record
pub type Record = Option<Atom>;

static RECORDS: phf::Map<char, Record> = phf_map! {
    'B' => Some(Atom::B),
    'W' => Some(Atom::W),
    'H' => Some(Atom::H),
    'L' => Some(Atom::L),
    '_' => None,
};

impl Atom {
    pub fn from_char(c: char) -> Option<Atom> {
        match c {
            'B' => Some(Atom::B),
            'W' => Some(Atom::W),
            'H' => Some(Atom::H),
            'L' => Some(Atom::L),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Atom::B => 'B',
            Atom::W => 'W',
            Atom::H => 'H',
            Atom::L => 'L',
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Read a record string, one character per record, with `_` as the nil record
pub fn parse_records(text: &str) -> Result<Vec<Record>, PatternError> {
    let mut driver = Lexer::from_text(text, symbol(&RECORDS));
    let records: Vec<Record> = driver.tokens().collect();
    match driver.stopped_at() {
        Some((position, &found)) => Err(PatternError::UnknownRecord { position, found }),
        None => Ok(records),
    }
}

/// Write records back in the notation [`parse_records`] reads
pub fn format_records(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| record.map_or('_', Atom::as_char))
        .collect()
}
