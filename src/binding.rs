use std::collections::HashMap;

/// Capture name to value map shared by groups and backreferences in one match pass
///
/// Each name holds the last value bound under it. A binding is not reentrant:
/// nested or concurrent matches against the same instance overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<E> {
    captures: HashMap<String, E>,
}

impl<E> Binding<E> {
    pub fn new() -> Self {
        Binding {
            captures: HashMap::new(),
        }
    }

    /// Record `value` under `name`, replacing any earlier capture
    pub fn bind(&mut self, name: impl Into<String>, value: E) -> Option<E> {
        self.captures.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.captures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.captures.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.captures.clear();
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

impl<E> Default for Binding<E> {
    fn default() -> Self {
        Self::new()
    }
}
