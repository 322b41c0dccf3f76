//! Recursive-descent evaluator
//!
//! Computes the value directly while parsing; no tree is built. Each grammar
//! rule leaves the lexer's current token on the first token it did not use.

use super::error::{EvalError, EvalResult, Found};
use crate::arith::{self, Operation};
use crate::lexer::{Lexer, SourcePosition, Symbol, Token, TokenKind};
use tally_config::{EvalConfig, TrailingTokens};
use tracing::{debug, trace};

const TARGET: &str = "tally::eval";

pub struct Evaluator<'a> {
    lexer: Lexer<'a>,
    config: EvalConfig,
    /// Current factor nesting
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(line: &'a str) -> Self {
        Self::with_config(line, &EvalConfig::default())
    }

    pub fn with_config(line: &'a str, config: &EvalConfig) -> Self {
        trace!(target: TARGET, line, ?config, "Creating new Evaluator");
        Self {
            lexer: Lexer::with_policy(line, config.overflow),
            config: *config,
            depth: 0,
        }
    }

    /// Evaluate the whole line: one `Expr`, then the trailing-token policy
    pub fn evaluate(&mut self) -> EvalResult<i64> {
        let value = self.evaluate_expr()?;

        if let Some(token) = self.lexer.current() {
            match self.config.trailing_tokens {
                TrailingTokens::Ignore => debug!(
                    target: TARGET,
                    token = %token.kind,
                    column = token.position.column(),
                    "Ignoring trailing token"
                ),
                TrailingTokens::Reject => {
                    return Err(EvalError::UnexpectedTrailingToken { token });
                }
            }
        }

        debug!(target: TARGET, value, "Evaluated line");
        Ok(value)
    }

    /// `Expr := Term (('+' | '-') Term)*`
    pub fn evaluate_expr(&mut self) -> EvalResult<i64> {
        let mut value = self.evaluate_term()?;

        while let Some(token) = self.lexer.current() {
            let Some(operation) = binary_operation(&token, Symbol::is_additive) else {
                break;
            };
            let rhs = self.evaluate_term()?;
            value = self.combine(operation, value, rhs, token.position)?;
        }

        Ok(value)
    }

    /// `Term := Factor (('*' | '/') Factor)*`
    pub fn evaluate_term(&mut self) -> EvalResult<i64> {
        let mut value = self.evaluate_factor()?;
        self.advance()?;

        while let Some(token) = self.lexer.current() {
            let Some(operation) = binary_operation(&token, Symbol::is_multiplicative) else {
                break;
            };
            let rhs = self.evaluate_factor()?;
            if operation == Operation::Divide && rhs == 0 {
                return Err(EvalError::DivisionByZero {
                    position: token.position,
                });
            }
            value = self.combine(operation, value, rhs, token.position)?;
            self.advance()?;
        }

        Ok(value)
    }

    /// `Factor := INTEGER | '(' Expr ')' | ('+' | '-') Factor`
    pub fn evaluate_factor(&mut self) -> EvalResult<i64> {
        let Some(token) = self.advance()? else {
            return Err(EvalError::ExpectedFactor {
                found: Found::EndOfInput,
            });
        };

        match token.kind {
            TokenKind::Integer(value) => Ok(value),
            TokenKind::Symbol(Symbol::LeftParen) => self.nested(&token, |this| {
                let value = this.evaluate_expr()?;
                match this.lexer.current() {
                    Some(close) if close.is(Symbol::RightParen) => Ok(value),
                    other => Err(EvalError::ExpectedClosingParenthesis {
                        found: Found::from(other),
                    }),
                }
            }),
            TokenKind::Symbol(Symbol::Plus) => self.nested(&token, Self::evaluate_factor),
            TokenKind::Symbol(Symbol::Minus) => {
                let value = self.nested(&token, Self::evaluate_factor)?;
                arith::negate(self.config.overflow, value).ok_or(EvalError::Overflow {
                    operation: Operation::Negate,
                    position: token.position,
                })
            }
            TokenKind::Symbol(_) => Err(EvalError::ExpectedFactor {
                found: Found::Token(token),
            }),
        }
    }

    fn advance(&mut self) -> EvalResult<Option<Token>> {
        Ok(self.lexer.next_token()?)
    }

    /// Run `f` one factor level deeper, bounded by `max_depth`
    fn nested<F>(&mut self, token: &Token, f: F) -> EvalResult<i64>
    where
        F: FnOnce(&mut Self) -> EvalResult<i64>,
    {
        if self.depth >= self.config.max_depth {
            return Err(EvalError::NestingTooDeep {
                limit: self.config.max_depth,
                position: token.position,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn combine(
        &self,
        operation: Operation,
        lhs: i64,
        rhs: i64,
        position: SourcePosition,
    ) -> EvalResult<i64> {
        arith::apply(self.config.overflow, operation, lhs, rhs)
            .ok_or(EvalError::Overflow { operation, position })
    }
}

fn binary_operation(token: &Token, class: fn(Symbol) -> bool) -> Option<Operation> {
    token
        .symbol()
        .filter(|symbol| class(*symbol))
        .and_then(Operation::binary)
}
