use phf::phf_map;
use std::fmt;

/// Symbols of the pattern language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    B,
    W,
    H,
    L,
    LeftBrace,
    RightBrace,
    LeftSquare,
    RightSquare,
    LeftParen,
    RightParen,
    Pipe,
    Comma,
    Plus,
    Star,
    Question,
    /// `.`, any non-nil record
    Dot,
    /// `✖`, the nil record
    Nil,
    /// `x`, lookahead without consuming
    Peek,
    Caret,
    Dollar,
    /// A run of whitespace
    Space,
}

/// Every single-character symbol of the language
pub static SYMBOLS: phf::Map<char, Token> = phf_map! {
    'B' => Token::B,
    'W' => Token::W,
    'H' => Token::H,
    'L' => Token::L,
    '{' => Token::LeftBrace,
    '}' => Token::RightBrace,
    '[' => Token::LeftSquare,
    ']' => Token::RightSquare,
    '(' => Token::LeftParen,
    ')' => Token::RightParen,
    '|' => Token::Pipe,
    ',' => Token::Comma,
    '+' => Token::Plus,
    '*' => Token::Star,
    '?' => Token::Question,
    '.' => Token::Dot,
    '✖' => Token::Nil,
    'x' => Token::Peek,
    '^' => Token::Caret,
    '$' => Token::Dollar,
};

impl Token {
    /// The character this token is written as, if it has exactly one
    pub fn symbol(self) -> Option<char> {
        let c = match self {
            Token::B => 'B',
            Token::W => 'W',
            Token::H => 'H',
            Token::L => 'L',
            Token::LeftBrace => '{',
            Token::RightBrace => '}',
            Token::LeftSquare => '[',
            Token::RightSquare => ']',
            Token::LeftParen => '(',
            Token::RightParen => ')',
            Token::Pipe => '|',
            Token::Comma => ',',
            Token::Plus => '+',
            Token::Star => '*',
            Token::Question => '?',
            Token::Dot => '.',
            Token::Nil => '✖',
            Token::Peek => 'x',
            Token::Caret => '^',
            Token::Dollar => '$',
            Token::Space => return None,
        };
        Some(c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "'{}'", c),
            None => write!(f, "whitespace"),
        }
    }
}
