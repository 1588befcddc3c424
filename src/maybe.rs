/// Result of a matcher that is allowed to match nothing
///
/// `Absent` means "matched an absence" and is distinct from a failed match,
/// which is `Ok(None)` at the [`Matcher`](crate::Matcher) level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn map<U, F>(self, op: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(item) => Maybe::Present(op(item)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn and_then<U, F>(self, op: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(item) => op(item),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(item) => Maybe::Present(item),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(item) => item,
            Maybe::Absent => default,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Maybe::Present(item),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(item) => Some(item),
            Maybe::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_present_and_absent() {
        assert_eq!(Maybe::Present(2).map(|x| x * 10), Maybe::Present(20));
        assert_eq!(Maybe::<i32>::Absent.map(|x| x * 10), Maybe::Absent);
    }

    #[test]
    fn test_and_then_can_turn_absent() {
        let halve = |x: i32| {
            if x % 2 == 0 {
                Maybe::Present(x / 2)
            } else {
                Maybe::Absent
            }
        };
        assert_eq!(Maybe::Present(4).and_then(halve), Maybe::Present(2));
        assert_eq!(Maybe::Present(3).and_then(halve), Maybe::Absent);
    }

    #[test]
    fn test_absent_wrapping_none_is_still_present() {
        // An optional value that matched `None` is a presence, not an absence
        let nested: Maybe<Option<u8>> = Maybe::Present(None);
        assert!(nested.is_present());
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Maybe::from(Some('a')), Maybe::Present('a'));
        assert_eq!(Maybe::<char>::from(None), Maybe::Absent);
        assert_eq!(Maybe::Present(1).into_option(), Some(1));
        assert_eq!(Maybe::<u8>::Absent.unwrap_or(9), 9);
    }
}
