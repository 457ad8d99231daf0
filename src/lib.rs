//! Core front end and evaluator for a small Lox-like scripting language.
//!
//! The crate exposes four pure operations used by the `lox` binary's
//! subcommands — [`tokenize`], [`parse_expression`]/[`parse_program`],
//! [`evaluate`] and [`run`] — none of which touch the filesystem or
//! standard streams directly. That adapter work lives in `src/bin/lox`.

pub mod ast;
pub mod interpreter;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod token;
pub mod value;

pub use ast::{Expr, Stmt};
pub use interpreter::{Interpreter, RuntimeError};
pub use parser::{Parser, SyntaxError};
pub use scanner::{LexError, Scanner};
pub use token::{Token, TokenKind, TokenLiteral};
pub use value::Value;

use std::fmt;
use std::io::Read;

/// Either of the two user-facing error categories `parse`/`evaluate`/`run`
/// must distinguish for exit-code mapping. Lexical errors are not part of
/// this type: those three subcommands tokenize internally and, like the
/// reference implementation, silently proceed on whatever tokens came
/// out rather than surfacing the scanner's error list.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Syntax(e) => write!(f, "{e}"),
            EvalError::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Scans a byte source into a token stream plus any lexical errors.
pub fn tokenize<R: Read>(mut source: R) -> std::io::Result<(Vec<Token>, Vec<LexError>)> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    Ok(Scanner::new(bytes).scan())
}

/// Tokenizes and parses a single expression, requiring no trailing `;`.
pub fn parse_expression<R: Read>(source: R) -> std::io::Result<Result<Expr, SyntaxError>> {
    let (tokens, _lexical_errors) = tokenize(source)?;
    Ok(Parser::new(tokens).parse_expression())
}

/// Tokenizes and parses a full statement list.
pub fn parse_program<R: Read>(source: R) -> std::io::Result<Result<Vec<Stmt>, SyntaxError>> {
    let (tokens, _lexical_errors) = tokenize(source)?;
    Ok(Parser::new(tokens).parse_program())
}

/// Parses and evaluates a single expression.
pub fn evaluate<R: Read>(source: R) -> std::io::Result<Result<Value, EvalError>> {
    match parse_expression(source)? {
        Ok(expr) => {
            Ok(Interpreter::new().evaluate(&expr).map_err(EvalError::Runtime))
        }
        Err(e) => Ok(Err(EvalError::Syntax(e))),
    }
}

/// Parses and runs a full program, writing `print` output to `sink`.
pub fn run<R: Read, W: std::io::Write>(
    source: R,
    sink: &mut W,
) -> std::io::Result<Result<(), EvalError>> {
    match parse_program(source)? {
        Ok(statements) => {
            Ok(Interpreter::new()
                .run(&statements, sink)?
                .map_err(EvalError::Runtime))
        }
        Err(e) => Ok(Err(EvalError::Syntax(e))),
    }
}
