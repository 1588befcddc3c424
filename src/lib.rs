//! # MatchComb - Matcher Combinator Library
//!
//! Composable matchers over peekable element streams, plus a lexer driver that
//! runs a token matcher repeatedly over an input.
//!
//! A matcher either recognises a prefix of the remaining input and produces a
//! value, or fails. Matchers are built from primitives (single-element predicates,
//! lookahead, epsilon) with combinators (sequence, alternation, bounded repetition,
//! optional, transformation, context-dependent continuation, deferred recursion,
//! named captures and backreferences).
//!
//! - **Committed choice**: combinators never rewind the cursor. A sequence that fails
//!   halfway leaves its prefix consumed, and alternatives are tried from there.
//! - **Explicit end of stream**: reading past the end of input is a [`StreamEnd`]
//!   error, distinct from an ordinary failed match.
//! - **Explicit context**: capture groups live in a per-match [`Binding`] carried by
//!   [`Scan`], never in the matchers themselves.

pub mod and;
pub mod binding;
pub mod capture;
pub mod chars;
pub mod compose;
pub mod contextual;
pub mod cursor;
pub mod cursors;
pub mod deferred;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod maybe;
pub mod optional;
pub mod or;
pub mod pattern;
pub mod peek;
pub mod position;
pub mod quantify;
pub mod satisfy;
pub mod seq;
pub mod symbol;

pub use and::{And, AndExt, and};
pub use binding::Binding;
pub use capture::{Backref, Group, GroupExt, backref, group};
pub use compose::{Compose, FilterMap, MapExt, compose};
pub use contextual::{Contextual, ContextualExt, contextual};
pub use cursor::Cursor;
pub use cursors::{CharCursor, IterCursor};
pub use deferred::{Deferred, deferred};
pub use error::{MatchResult, StreamEnd};
pub use lexer::{Lexer, Tokens};
pub use matcher::{BoxedExt, BoxedMatcher, Matcher, PositiveMatcher, Scan};
pub use maybe::Maybe;
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Either, Or, OrExt, or};
pub use peek::{PeekBoundary, Pure, peek_boundary, pure};
pub use position::{Span, Spanned, SpannedExt, spanned};
pub use quantify::{Quantify, QuantifyExt, at_most, many, quantify, some};
pub use satisfy::{Satisfy, any, elem, item, not_elem, satisfy};
pub use seq::{Seq, seq};
pub use symbol::{Symbol, SymbolTable, symbol};
