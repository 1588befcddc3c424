use super::error::PatternError;
use super::token::{SYMBOLS, Token};
use crate::chars::one_of;
use crate::compose::MapExt;
use crate::cursors::CharCursor;
use crate::lexer::Lexer;
use crate::matcher::Matcher;
use crate::or::OrExt;
use crate::position::{Span, SpannedExt};
use crate::quantify::some;
use crate::symbol::symbol;

/// Matches one token: a whitespace run or a single symbol
fn token<'a>() -> impl Matcher<Cursor = CharCursor<'a>, Output = Token> {
    some(one_of::<CharCursor<'a>>(" \t\n\r"))
        .map(|_: Vec<char>| Token::Space)
        .or(symbol(&SYMBOLS))
}

/// Create a lexer over the pattern source `input`
pub fn lexer(input: &str) -> Lexer<impl Matcher<Cursor = CharCursor<'_>, Output = Token>> {
    Lexer::from_text(input, token())
}

/// Collect the tokens of `input` up to the first character that is not a symbol
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut driver = lexer(input);
    driver.tokens().collect()
}

/// Like [`tokenize`], keeping the character span of each token
pub fn tokenize_spanned(input: &str) -> Vec<(Token, Span)> {
    let mut driver = Lexer::from_text(input, token().spanned());
    driver.tokens().collect()
}

/// Tokenize all of `input`, failing on the first character that is not a symbol
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, PatternError> {
    let mut driver = Lexer::from_text(input, token().spanned());
    let tokens: Vec<(Token, Span)> = driver.tokens().collect();
    match driver.stopped_at() {
        Some((position, &found)) => Err(PatternError::UnknownSymbol { position, found }),
        None => Ok(tokens),
    }
}
