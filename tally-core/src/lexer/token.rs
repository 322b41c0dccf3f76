use super::position::SourcePosition;
use std::fmt;

/// Single-character operator or punctuation mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

/// Every character the lexer turns into a [`Symbol`]
pub static SYMBOL_TABLE: &[(char, Symbol)] = &[
    ('+', Symbol::Plus),
    ('-', Symbol::Minus),
    ('*', Symbol::Star),
    ('/', Symbol::Slash),
    ('(', Symbol::LeftParen),
    (')', Symbol::RightParen),
];

/// Operators of `Expr`; also the unary signs of `Factor`
pub static ADDITIVE: &[Symbol] = &[Symbol::Plus, Symbol::Minus];

/// Operators of `Term`
pub static MULTIPLICATIVE: &[Symbol] = &[Symbol::Star, Symbol::Slash];

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        SYMBOL_TABLE
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, symbol)| *symbol)
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Plus => '+',
            Symbol::Minus => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::LeftParen => '(',
            Symbol::RightParen => ')',
        }
    }

    pub fn is_additive(self) -> bool {
        ADDITIVE.contains(&self)
    }

    pub fn is_multiplicative(self) -> bool {
        MULTIPLICATIVE.contains(&self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// What a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer literal; only negative under `OverflowPolicy::Wrap`
    Integer(i64),
    Symbol(Symbol),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(value) => write!(f, "{value}"),
            TokenKind::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Token together with the position of its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            TokenKind::Symbol(symbol) => Some(symbol),
            TokenKind::Integer(_) => None,
        }
    }

    /// Check whether this token is the given symbol
    pub fn is(&self, symbol: Symbol) -> bool {
        self.symbol() == Some(symbol)
    }
}
