//! Recursive-descent parser, one method per precedence level. No error
//! recovery: the first [`SyntaxError`] aborts parsing entirely.

use std::fmt;

use crate::ast::{Expr, Stmt};
use crate::token::{Token, TokenKind};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.message)
    }
}

impl std::error::Error for SyntaxError {}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses a single expression, requiring no trailing `;`. Used by the
    /// `evaluate` subcommand.
    pub fn parse_expression(mut self) -> Result<Expr, SyntaxError> {
        self.expression()
    }

    /// Parses a full statement list. Used by the `parse` and `run`
    /// subcommands.
    pub fn parse_program(mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        if self.match_kind(&[TokenKind::Print]) {
            let value = self.expression()?;
            self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
            Ok(Stmt::Print(value))
        } else {
            let expr = self.expression()?;
            self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
            Ok(Stmt::Expr(expr))
        }
    }

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.comparison()?;
        while self.match_kind(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.term()?;
        while self.match_kind(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.factor()?;
        while self.match_kind(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.unary()?;
        while self.match_kind(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }
        Ok(expr)
    }

    /// Only `!` and `-` are unary prefix operators in this grammar; unlike
    /// the evaluator, the parser never produces a unary `+` node.
    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_kind(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary(operator, Box::new(right)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_kind(&[TokenKind::False]) {
            return Ok(Expr::Literal(Value::Bool(false)));
        }
        if self.match_kind(&[TokenKind::True]) {
            return Ok(Expr::Literal(Value::Bool(true)));
        }
        if self.match_kind(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Value::Nil));
        }
        if self.match_kind(&[TokenKind::Number]) {
            let Some(crate::token::TokenLiteral::Number(n)) = self.previous().literal.clone()
            else {
                unreachable!("the scanner always attaches a numeric literal to a NUMBER token");
            };
            return Ok(Expr::Literal(Value::Number(n)));
        }
        if self.match_kind(&[TokenKind::String]) {
            let Some(crate::token::TokenLiteral::Str(s)) = self.previous().literal.clone() else {
                unreachable!("the scanner always attaches a string literal to a STRING token");
            };
            return Ok(Expr::Literal(Value::Str(s)));
        }
        if self.match_kind(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(self.error_at_current("Expect expression."))
    }

    fn match_kind(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<(), SyntaxError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(message))
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn error_at_current(&self, message: &str) -> SyntaxError {
        let token = self.peek();
        let location = if token.kind == TokenKind::Eof {
            "end".to_string()
        } else {
            format!("'{}'", token.lexeme)
        };
        SyntaxError {
            line: token.line,
            message: format!("Error at {location}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::AstPrinter;
    use crate::scanner::Scanner;

    fn tokenize(src: &str) -> Vec<Token> {
        Scanner::new(src.as_bytes().to_vec()).scan().0
    }

    #[test]
    fn left_associative_arithmetic() {
        let expr = Parser::new(tokenize("16 * 38 / 58")).parse_expression().unwrap();
        assert_eq!(AstPrinter::print_expr(&expr), "(/ (* 16.0 38.0) 58.0)");
    }

    #[test]
    fn comparison_binds_looser_than_term() {
        let expr = Parser::new(tokenize("1 + 2 < 3 * 4")).parse_expression().unwrap();
        assert_eq!(AstPrinter::print_expr(&expr), "(< (+ 1.0 2.0) (* 3.0 4.0))");
    }

    #[test]
    fn missing_closing_paren_after_an_invalid_primary_is_a_syntax_error() {
        let err = Parser::new(tokenize("(72+)")).parse_expression().unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(
            err.to_string(),
            "[line 1] Error at ')': Expect expression."
        );
    }

    #[test]
    fn an_unstartable_primary_reports_the_offending_token() {
        let err = Parser::new(tokenize("+1")).parse_expression().unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error at '+': Expect expression.");
    }

    #[test]
    fn a_program_of_n_statements_parses_to_n_statements() {
        let statements = Parser::new(tokenize("1; 2; print 3;"))
            .parse_program()
            .unwrap();
        assert_eq!(statements.len(), 3);
    }

    #[test]
    fn missing_semicolon_after_print_value() {
        let err = Parser::new(tokenize("print 1")).parse_program().unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error at end: Expect ';' after value.");
    }

    proptest::proptest! {
        #[test]
        fn n_semicolon_terminated_statements_parse_to_n_statements(n in 0usize..20) {
            let source: String = (0..n).map(|_| "1;").collect();
            let statements = Parser::new(tokenize(&source)).parse_program().unwrap();
            proptest::prop_assert_eq!(statements.len(), n);
        }
    }
}
