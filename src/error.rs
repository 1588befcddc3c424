use thiserror::Error;

/// Raised by a cursor when a read is attempted past confirmed end of input
///
/// Ordinary grammar failure is not an error: matchers report it as `Ok(None)`.
/// `StreamEnd` means a matcher tried to look at or consume an element after the
/// final one had already been consumed, and it propagates through every combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("read past end of stream at position {position}")]
pub struct StreamEnd {
    /// Number of elements consumed before the failing read
    pub position: usize,
}

impl StreamEnd {
    pub fn new(position: usize) -> Self {
        StreamEnd { position }
    }
}

/// Outcome of a single match attempt
///
/// - `Ok(Some(value))`: the matcher succeeded
/// - `Ok(None)`: the grammar did not match here
/// - `Err(StreamEnd)`: the matcher read past the end of the input
pub type MatchResult<T> = Result<Option<T>, StreamEnd>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_position() {
        let error = StreamEnd::new(7);
        let display_str = format!("{}", error);
        assert!(display_str.contains("end of stream"));
        assert!(display_str.contains('7'));
    }

    #[test]
    fn test_errors_compare_by_position() {
        assert_eq!(StreamEnd::new(3), StreamEnd { position: 3 });
        assert_ne!(StreamEnd::new(3), StreamEnd::new(4));
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(StreamEnd::new(0));
        assert!(boxed.to_string().starts_with("read past end"));
    }
}
