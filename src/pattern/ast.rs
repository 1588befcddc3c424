use super::Atom;
use std::fmt;

/// Repetition suffix of a pattern factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `+`
    OneOrMore,
    /// `*`
    ZeroOrMore,
    /// `?`
    ZeroOrOne,
}

impl Quantifier {
    pub fn symbol(self) -> char {
        match self {
            Quantifier::OneOrMore => '+',
            Quantifier::ZeroOrMore => '*',
            Quantifier::ZeroOrOne => '?',
        }
    }
}

/// Parsed pattern over record streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// One record holding this atom
    Atom(Atom),
    /// Any non-nil record
    Any,
    /// The nil record
    Nil,
    /// Zero-width lookahead at the next record
    Boundary,
    /// One record holding any of these atoms
    Class(Vec<Atom>),
    Sequence(Vec<Pattern>),
    /// Committed choice: the first alternative to match wins
    Alternation(Vec<Pattern>),
    Repeat {
        pattern: Box<Pattern>,
        quantifier: Quantifier,
    },
}

impl Pattern {
    /// Collapse a one-element sequence into its element
    pub fn from_sequence(items: Vec<Pattern>) -> Self {
        match <[Pattern; 1]>::try_from(items) {
            Ok([only]) => only,
            Err(items) => Pattern::Sequence(items),
        }
    }

    /// Check if this pattern can succeed without consuming a record
    pub fn is_nullable(&self) -> bool {
        match self {
            Pattern::Atom(_) | Pattern::Any | Pattern::Nil | Pattern::Class(_) => false,
            Pattern::Boundary => true,
            Pattern::Sequence(items) => items.iter().all(Pattern::is_nullable),
            Pattern::Alternation(alternatives) => alternatives.iter().any(Pattern::is_nullable),
            Pattern::Repeat {
                pattern,
                quantifier,
            } => match quantifier {
                Quantifier::OneOrMore => pattern.is_nullable(),
                Quantifier::ZeroOrMore | Quantifier::ZeroOrOne => true,
            },
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Atom(atom) => write!(f, "{}", atom),
            Pattern::Any => write!(f, "."),
            Pattern::Nil => write!(f, "✖"),
            Pattern::Boundary => write!(f, "x"),
            Pattern::Class(atoms) => {
                write!(f, "[")?;
                for atom in atoms {
                    write!(f, "{}", atom)?;
                }
                write!(f, "]")
            }
            Pattern::Sequence(items) => {
                for item in items {
                    match item {
                        Pattern::Alternation(_) => write!(f, "({})", item)?,
                        _ => write!(f, "{}", item)?,
                    }
                }
                Ok(())
            }
            Pattern::Alternation(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", alternative)?;
                }
                Ok(())
            }
            Pattern::Repeat {
                pattern,
                quantifier,
            } => match pattern.as_ref() {
                Pattern::Sequence(_) | Pattern::Alternation(_) | Pattern::Repeat { .. } => {
                    write!(f, "({}){}", pattern, quantifier.symbol())
                }
                _ => write!(f, "{}{}", pattern, quantifier.symbol()),
            },
        }
    }
}
