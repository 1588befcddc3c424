//! Character-level matchers for any cursor over `char`

use crate::compose::{Compose, MapExt};
use crate::cursor::Cursor;
use crate::satisfy::{Satisfy, item, satisfy};
use crate::seq::{Seq, seq};

/// Match one Unicode whitespace character
pub fn whitespace<C>() -> Satisfy<C, impl Fn(&char) -> bool>
where
    C: Cursor<Element = char>,
{
    satisfy(|c: &char| c.is_whitespace())
}

/// Match one ASCII digit
pub fn digit<C>() -> Satisfy<C, impl Fn(&char) -> bool>
where
    C: Cursor<Element = char>,
{
    satisfy(|c: &char| c.is_ascii_digit())
}

/// Match one alphabetic character
pub fn letter<C>() -> Satisfy<C, impl Fn(&char) -> bool>
where
    C: Cursor<Element = char>,
{
    satisfy(|c: &char| c.is_alphabetic())
}

/// Match one alphanumeric character
pub fn alphanumeric<C>() -> Satisfy<C, impl Fn(&char) -> bool>
where
    C: Cursor<Element = char>,
{
    satisfy(|c: &char| c.is_alphanumeric())
}

/// Match one character from `chars`
pub fn one_of<C>(chars: &str) -> Satisfy<C, impl Fn(&char) -> bool + use<C>>
where
    C: Cursor<Element = char>,
{
    let chars: Vec<char> = chars.chars().collect();
    satisfy(move |c: &char| chars.contains(c))
}

/// Match the exact character sequence `text`
///
/// Built on [`Seq`], so a partial match leaves its prefix consumed.
pub fn literal<C>(
    text: &str,
) -> Compose<Seq<Satisfy<C, impl Fn(&char) -> bool + use<C>>>, impl Fn(Vec<char>) -> String + use<C>>
where
    C: Cursor<Element = char>,
{
    seq(text.chars().map(item::<C>)).map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}
