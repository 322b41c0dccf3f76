//! Lexer main entry
//!
//! Scans one line into tokens on demand. Whitespace and `{...}` comments
//! produce no tokens. The cursor only ever moves forward.
//!
//! # Example
//!
//! ```rust
//! use tally_core::{Lexer, Symbol, TokenKind};
//!
//! let mut lexer = Lexer::new("12 {twelve} + 3");
//! let first = lexer.next_token().unwrap().unwrap();
//! assert_eq!(first.kind, TokenKind::Integer(12));
//! let second = lexer.next_token().unwrap().unwrap();
//! assert_eq!(second.kind, TokenKind::Symbol(Symbol::Plus));
//! ```

use super::error::{LexErrorKind, LexerError};
use super::position::SourcePosition;
use super::token::{Symbol, Token, TokenKind};
use crate::arith;
use tally_config::OverflowPolicy;
use tracing::{debug, trace};

const TARGET: &str = "tally::lexer";

const OPEN_COMMENT: char = '{';
const CLOSE_COMMENT: char = '}';

pub struct Lexer<'a> {
    src: &'a str,
    position: SourcePosition,
    in_comment: bool,
    current: Option<Token>,
    policy: OverflowPolicy,
    /// Set once the iterator has yielded an error
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer that fails on oversized literals
    pub fn new(src: &'a str) -> Self {
        Self::with_policy(src, OverflowPolicy::default())
    }

    /// Create a lexer with an explicit literal overflow policy
    pub fn with_policy(src: &'a str, policy: OverflowPolicy) -> Self {
        trace!(target: TARGET, len = src.len(), ?policy, "Creating new Lexer");
        Self {
            src,
            position: SourcePosition::start(),
            in_comment: false,
            current: None,
            policy,
            failed: false,
        }
    }

    /// Position of the next unconsumed character
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Most recently produced token; `None` before the first read and at end of input
    pub fn current(&self) -> Option<Token> {
        self.current
    }

    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Get the next token, or `None` at end of input.
    ///
    /// On error the cursor stays on the offending character.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        let token = self.scan()?;
        match &token {
            Some(token) => trace!(
                target: TARGET,
                kind = %token.kind,
                column = token.position.column(),
                "Produced token"
            ),
            None => trace!(target: TARGET, "Reached end of input"),
        }
        self.current = token;
        Ok(token)
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.position.byte_offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.position.advance(c);
        Some(c)
    }

    fn scan(&mut self) -> Result<Option<Token>, LexerError> {
        while let Some(c) = self.peek_char() {
            if self.in_comment {
                self.bump();
                if c == CLOSE_COMMENT {
                    self.in_comment = false;
                }
                continue;
            }

            let start = self.position;
            if c.is_whitespace() {
                self.bump();
            } else if c == OPEN_COMMENT {
                self.bump();
                self.in_comment = true;
            } else if c.is_ascii_digit() {
                return self.scan_integer(start).map(Some);
            } else if let Some(symbol) = Symbol::from_char(c) {
                self.bump();
                return Ok(Some(Token::new(TokenKind::Symbol(symbol), start)));
            } else {
                return Err(LexerError::at(LexErrorKind::UnexpectedCharacter(c), start));
            }
        }

        // An unclosed comment silently swallows the rest of the line
        if self.in_comment {
            debug!(
                target: TARGET,
                column = self.position.column(),
                "Unterminated comment at end of line"
            );
        }
        Ok(None)
    }

    fn scan_integer(&mut self, start: SourcePosition) -> Result<Token, LexerError> {
        let mut value = Some(0i64);
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }
            let digit = i64::from(c as u8 - b'0');
            value = value.and_then(|acc| arith::push_digit(self.policy, acc, digit));
            self.bump();
        }

        match value {
            Some(value) => Ok(Token::new(TokenKind::Integer(value), start)),
            None => {
                let text = &self.src[start.byte_offset..self.position.byte_offset];
                Err(LexerError::at(
                    LexErrorKind::LiteralOverflow(text.to_string()),
                    start,
                ))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .map(|token| token.unwrap().kind)
            .collect()
    }

    fn sym(symbol: Symbol) -> TokenKind {
        TokenKind::Symbol(symbol)
    }

    #[test]
    fn test_basic_tokens() {
        let tokens = lex_all("1+2*(3-4)/5");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Integer(1),
                sym(Symbol::Plus),
                TokenKind::Integer(2),
                sym(Symbol::Star),
                sym(Symbol::LeftParen),
                TokenKind::Integer(3),
                sym(Symbol::Minus),
                TokenKind::Integer(4),
                sym(Symbol::RightParen),
                sym(Symbol::Slash),
                TokenKind::Integer(5),
            ]
        );
    }

    #[test]
    fn test_multi_digit_literal() {
        assert_eq!(lex_all("123"), vec![TokenKind::Integer(123)]);
        assert_eq!(lex_all("007"), vec![TokenKind::Integer(7)]);
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(
            lex_all(" \t12 \t + 3 "),
            vec![TokenKind::Integer(12), sym(Symbol::Plus), TokenKind::Integer(3)]
        );
        assert!(lex_all("   ").is_empty());
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_separates_literals() {
        assert_eq!(
            lex_all("1 2"),
            vec![TokenKind::Integer(1), TokenKind::Integer(2)]
        );
    }

    #[test]
    fn test_comment_elided() {
        assert_eq!(
            lex_all("2{this is ignored}+3"),
            vec![TokenKind::Integer(2), sym(Symbol::Plus), TokenKind::Integer(3)]
        );
    }

    #[test]
    fn test_comment_content_not_lexed() {
        // '#' and '{' inside a comment are skipped like anything else
        assert_eq!(lex_all("{ # { 1 }4"), vec![TokenKind::Integer(4)]);
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        let mut lexer = Lexer::new("1 {2 + 3");
        assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Integer(1));
        assert_eq!(lexer.next_token().unwrap(), None);
        assert!(lexer.in_comment());
    }

    #[test]
    fn test_close_comment_outside_comment_is_error() {
        let err = Lexer::new("1}").nth(1).unwrap().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('}'));
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn test_unexpected_character_position() {
        let mut lexer = Lexer::new("2#3");
        assert!(lexer.next_token().unwrap().is_some());
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('#'));
        assert_eq!(err.position, SourcePosition::new(1, 1));
    }

    #[test]
    fn test_position_counts_characters() {
        let err = Lexer::new("{é}x").next().unwrap().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('x'));
        assert_eq!(err.position.index, 3);
        assert_eq!(err.position.byte_offset, 4);
    }

    #[test]
    fn test_non_ascii_digit_rejected() {
        let err = Lexer::new("٣").next().unwrap().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('٣'));
    }

    #[test]
    fn test_token_positions() {
        let tokens: Vec<Token> = Lexer::new(" 12 + 3").map(Result::unwrap).collect();
        assert_eq!(tokens[0].position.index, 1);
        assert_eq!(tokens[1].position.index, 4);
        assert_eq!(tokens[2].position.index, 6);
    }

    #[test]
    fn test_current_tracks_last_token() {
        let mut lexer = Lexer::new("7 -");
        assert_eq!(lexer.current(), None);

        lexer.next_token().unwrap();
        assert_eq!(lexer.current().map(|t| t.kind), Some(TokenKind::Integer(7)));

        lexer.next_token().unwrap();
        assert!(lexer.current().unwrap().is(Symbol::Minus));

        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.current(), None);
    }

    #[test]
    fn test_end_of_input_is_repeatable() {
        let mut lexer = Lexer::new("1");
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let items: Vec<_> = Lexer::new("1 $ 2").collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_literal_overflow_by_policy() {
        let big = "99999999999999999999";

        let err = Lexer::new(big).next().unwrap().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::LiteralOverflow(big.to_string()));
        assert_eq!(err.index(), 0);

        let token = Lexer::with_policy(big, OverflowPolicy::Saturate)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(token.kind, TokenKind::Integer(i64::MAX));
    }

    #[test]
    fn test_literal_max_fits() {
        assert_eq!(
            lex_all("9223372036854775807"),
            vec![TokenKind::Integer(i64::MAX)]
        );
    }

    #[test]
    fn test_cursor_monotonic() {
        let mut lexer = Lexer::new("1 + {c} 22 * 3");
        let mut last = lexer.position();
        while lexer.next_token().unwrap().is_some() {
            assert!(lexer.position() > last);
            last = lexer.position();
        }
        assert_eq!(lexer.position().byte_offset, "1 + {c} 22 * 3".len());
    }
}
