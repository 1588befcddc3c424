use crate::cursor::Cursor;
use crate::error::MatchResult;
use crate::matcher::{Matcher, Scan};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Keyed lookup from input elements to produced values
pub trait SymbolTable {
    type Key;
    type Value;

    fn lookup(&self, key: &Self::Key) -> Option<Self::Value>;

    fn contains(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }
}

impl<V: Clone> SymbolTable for phf::Map<char, V> {
    type Key = char;
    type Value = V;

    fn lookup(&self, key: &char) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<K: Eq + Hash, V: Clone> SymbolTable for HashMap<K, V> {
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<T: SymbolTable + ?Sized> SymbolTable for &T {
    type Key = T::Key;
    type Value = T::Value;

    fn lookup(&self, key: &T::Key) -> Option<T::Value> {
        (**self).lookup(key)
    }
}

/// Matcher that consumes a table key and produces its value
///
/// Fails without consuming when the lookahead is not a key of the table.
pub struct Symbol<C, T> {
    table: T,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, T> Symbol<C, T> {
    pub fn new(table: T) -> Self {
        Symbol {
            table,
            _cursor: PhantomData,
        }
    }
}

impl<C, T> Matcher for Symbol<C, T>
where
    C: Cursor,
    T: SymbolTable<Key = C::Element>,
{
    type Cursor = C;
    type Output = T::Value;

    fn matches(&self, scan: &mut Scan<C>) -> MatchResult<T::Value> {
        let Some(value) = self.table.lookup(scan.peek()?) else {
            return Ok(None);
        };
        scan.consume()?;
        Ok(Some(value))
    }
}

/// Convenience function to create a Symbol matcher
pub fn symbol<C, T>(table: T) -> Symbol<C, T>
where
    C: Cursor,
    T: SymbolTable<Key = C::Element>,
{
    Symbol::new(table)
}
