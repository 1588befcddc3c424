use super::token::Token;
use thiserror::Error;

/// Errors reading a pattern or a record string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown symbol '{found}' at position {position}")]
    UnknownSymbol { position: usize, found: char },

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { position: usize, found: Token },

    #[error("pattern ends before it is complete")]
    Incomplete,

    #[error("unknown record '{found}' at position {position}")]
    UnknownRecord { position: usize, found: char },
}
