//! Pattern grammar, written with the crate's own matchers over tokens
//!
//! Every choice point looks at the next token first and commits to exactly one
//! rule. Combinators never rewind, so a rule that failed after consuming input
//! must not be retried or skipped: failure anywhere fails the whole parse, with
//! the cursor resting on the offending token.

use super::Atom;
use super::ast::{Pattern, Quantifier};
use super::error::PatternError;
use super::token::Token;
use crate::and::AndExt;
use crate::compose::MapExt;
use crate::contextual::ContextualExt;
use crate::cursors::IterCursor;
use crate::deferred::deferred;
use crate::matcher::{BoxedExt, BoxedMatcher, Matcher, Scan};
use crate::maybe::Maybe;
use crate::optional::OptionalExt;
use crate::peek::{peek_boundary, pure};
use crate::quantify::some;
use crate::satisfy::item;
use crate::symbol::{SymbolTable, symbol};
use log::debug;

/// Token stream with spaces removed and a trailing `None` marking the end
type TokenCursor = IterCursor<std::vec::IntoIter<Option<Token>>>;

type Rule<T> = BoxedMatcher<'static, TokenCursor, T>;

/// Tokens that form a complete factor on their own
struct SimpleFactors;

impl SymbolTable for SimpleFactors {
    type Key = Option<Token>;
    type Value = Pattern;

    fn lookup(&self, key: &Option<Token>) -> Option<Pattern> {
        match (*key)? {
            Token::Dot => Some(Pattern::Any),
            Token::Nil => Some(Pattern::Nil),
            Token::Peek => Some(Pattern::Boundary),
            token => AtomTokens.lookup(&Some(token)).map(Pattern::Atom),
        }
    }
}

struct AtomTokens;

impl SymbolTable for AtomTokens {
    type Key = Option<Token>;
    type Value = Atom;

    fn lookup(&self, key: &Option<Token>) -> Option<Atom> {
        match (*key)? {
            Token::B => Some(Atom::B),
            Token::W => Some(Atom::W),
            Token::H => Some(Atom::H),
            Token::L => Some(Atom::L),
            _ => None,
        }
    }
}

struct Quantifiers;

impl SymbolTable for Quantifiers {
    type Key = Option<Token>;
    type Value = Quantifier;

    fn lookup(&self, key: &Option<Token>) -> Option<Quantifier> {
        match (*key)? {
            Token::Plus => Some(Quantifier::OneOrMore),
            Token::Star => Some(Quantifier::ZeroOrMore),
            Token::Question => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }
}

fn starts_factor(next: &Option<Token>) -> bool {
    matches!(next, Some(Token::LeftSquare | Token::LeftParen)) || SimpleFactors.contains(next)
}

/// Prepend `head` to the list produced by the rest of a recursive rule
fn cons<T>((head, mut tail): (T, Vec<T>)) -> Vec<T> {
    tail.insert(0, head);
    tail
}

fn class() -> Rule<Pattern> {
    item(Some(Token::LeftSquare))
        .and(some(symbol(AtomTokens)))
        .and(item(Some(Token::RightSquare)))
        .map(|((_, atoms), _): ((Option<Token>, Vec<Atom>), Option<Token>)| Pattern::Class(atoms))
        .boxed()
}

fn parenthesized() -> Rule<Pattern> {
    item(Some(Token::LeftParen))
        .and(deferred(alternation))
        .and(item(Some(Token::RightParen)))
        .map(|((_, inner), _): ((Option<Token>, Pattern), Option<Token>)| inner)
        .boxed()
}

fn factor() -> Rule<Pattern> {
    peek_boundary::<TokenCursor>()
        .and_then(|next: Option<Token>| -> Rule<Pattern> {
            match next {
                Some(Token::LeftSquare) => class(),
                Some(Token::LeftParen) => parenthesized(),
                _ => symbol(SimpleFactors).boxed(),
            }
        })
        .boxed()
}

fn quantified() -> Rule<Pattern> {
    factor()
        .and(symbol(Quantifiers).optional())
        .map(|(pattern, quantifier): (Pattern, Maybe<Quantifier>)| match quantifier {
            Maybe::Present(quantifier) => Pattern::Repeat {
                pattern: Box::new(pattern),
                quantifier,
            },
            Maybe::Absent => pattern,
        })
        .boxed()
}

fn sequence() -> Rule<Vec<Pattern>> {
    peek_boundary::<TokenCursor>()
        .and_then(|next: Option<Token>| -> Rule<Vec<Pattern>> {
            if starts_factor(&next) {
                quantified().and(deferred(sequence)).map(cons).boxed()
            } else {
                pure(Vec::new()).boxed()
            }
        })
        .boxed()
}

/// `('|' sequence)*`
fn alternatives() -> Rule<Vec<Vec<Pattern>>> {
    peek_boundary::<TokenCursor>()
        .and_then(|next: Option<Token>| -> Rule<Vec<Vec<Pattern>>> {
            match next {
                Some(Token::Pipe) => item(Some(Token::Pipe))
                    .and(sequence())
                    .map(|(_, branch): (Option<Token>, Vec<Pattern>)| branch)
                    .and(deferred(alternatives))
                    .map(cons)
                    .boxed(),
                _ => pure(Vec::new()).boxed(),
            }
        })
        .boxed()
}

fn alternation() -> Rule<Pattern> {
    sequence()
        .and(alternatives())
        .map(|(first, rest): (Vec<Pattern>, Vec<Vec<Pattern>>)| {
            if rest.is_empty() {
                return Pattern::from_sequence(first);
            }
            let branches = std::iter::once(first).chain(rest);
            Pattern::Alternation(branches.map(Pattern::from_sequence).collect())
        })
        .boxed()
}

fn pattern() -> Rule<Pattern> {
    alternation()
        .and(item(None))
        .map(|(pattern, _): (Pattern, Option<Token>)| pattern)
        .boxed()
}

/// Parse a token sequence into a [`Pattern`]
///
/// [`Token::Space`] tokens are ignored. Positions in errors index into `tokens`.
/// Braces, commas, `^` and `$` are symbols of the language without a rule, and
/// are reported as unexpected wherever they appear.
pub fn parse(tokens: &[Token]) -> Result<Pattern, PatternError> {
    let (positions, mut stream): (Vec<usize>, Vec<Option<Token>>) = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| **token != Token::Space)
        .map(|(position, token)| (position, Some(*token)))
        .unzip();
    stream.push(None);

    let mut scan = Scan::new(TokenCursor::new(stream));
    match pattern().matches(&mut scan) {
        Ok(Some(pattern)) => Ok(pattern),
        Ok(None) => {
            let index = scan.position();
            let found = scan.peek().ok().copied().flatten();
            debug!("pattern rejected at token {}", index);
            match (found, positions.get(index)) {
                (Some(found), Some(&position)) => {
                    Err(PatternError::UnexpectedToken { position, found })
                }
                _ => Err(PatternError::Incomplete),
            }
        }
        Err(end) => {
            debug!("pattern parse {}", end);
            Err(PatternError::Incomplete)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::lexer::tokenize;

    fn parse_str(source: &str) -> Result<Pattern, PatternError> {
        parse(&tokenize(source))
    }

    fn repeat(pattern: Pattern, quantifier: Quantifier) -> Pattern {
        Pattern::Repeat {
            pattern: Box::new(pattern),
            quantifier,
        }
    }

    #[test]
    fn test_single_atom() {
        assert_eq!(parse_str("B"), Ok(Pattern::Atom(Atom::B)));
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(parse_str(""), Ok(Pattern::Sequence(Vec::new())));
        assert_eq!(parse_str("   "), Ok(Pattern::Sequence(Vec::new())));
    }

    #[test]
    fn test_sequence_ignores_spaces() {
        assert_eq!(
            parse_str("B . ✖ x"),
            Ok(Pattern::Sequence(vec![
                Pattern::Atom(Atom::B),
                Pattern::Any,
                Pattern::Nil,
                Pattern::Boundary,
            ]))
        );
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(
            parse_str("B+W*H?"),
            Ok(Pattern::Sequence(vec![
                repeat(Pattern::Atom(Atom::B), Quantifier::OneOrMore),
                repeat(Pattern::Atom(Atom::W), Quantifier::ZeroOrMore),
                repeat(Pattern::Atom(Atom::H), Quantifier::ZeroOrOne),
            ]))
        );
    }

    #[test]
    fn test_class() {
        assert_eq!(
            parse_str("[BWL]"),
            Ok(Pattern::Class(vec![Atom::B, Atom::W, Atom::L]))
        );
    }

    #[test]
    fn test_alternation_and_groups() {
        assert_eq!(
            parse_str("B(W|H)+|L"),
            Ok(Pattern::Alternation(vec![
                Pattern::Sequence(vec![
                    Pattern::Atom(Atom::B),
                    repeat(
                        Pattern::Alternation(vec![
                            Pattern::Atom(Atom::W),
                            Pattern::Atom(Atom::H),
                        ]),
                        Quantifier::OneOrMore,
                    ),
                ]),
                Pattern::Atom(Atom::L),
            ]))
        );
    }

    #[test]
    fn test_empty_branch() {
        assert_eq!(
            parse_str("B|"),
            Ok(Pattern::Alternation(vec![
                Pattern::Atom(Atom::B),
                Pattern::Sequence(Vec::new()),
            ]))
        );
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(parse_str("((B))"), Ok(Pattern::Atom(Atom::B)));
    }

    #[test]
    fn test_unsupported_token_is_unexpected() {
        assert_eq!(
            parse_str("B{2}"),
            Err(PatternError::UnexpectedToken {
                position: 1,
                found: Token::LeftBrace,
            })
        );
        assert_eq!(
            parse_str("^B"),
            Err(PatternError::UnexpectedToken {
                position: 0,
                found: Token::Caret,
            })
        );
    }

    #[test]
    fn test_stray_closing_paren() {
        assert_eq!(
            parse_str("B )"),
            Err(PatternError::UnexpectedToken {
                position: 2,
                found: Token::RightParen,
            })
        );
    }

    #[test]
    fn test_empty_class_is_unexpected() {
        assert_eq!(
            parse_str("[]"),
            Err(PatternError::UnexpectedToken {
                position: 1,
                found: Token::RightSquare,
            })
        );
    }

    #[test]
    fn test_failure_inside_group_is_not_skipped() {
        // The broken class must fail the parse rather than end the sequence early
        assert_eq!(
            parse_str("B[.]"),
            Err(PatternError::UnexpectedToken {
                position: 2,
                found: Token::Dot,
            })
        );
        assert_eq!(parse_str("B|(W"), Err(PatternError::Incomplete));
        assert_eq!(parse_str("[B"), Err(PatternError::Incomplete));
    }

    #[test]
    fn test_double_quantifier() {
        assert_eq!(
            parse_str("B+*"),
            Err(PatternError::UnexpectedToken {
                position: 2,
                found: Token::Star,
            })
        );
    }
}
