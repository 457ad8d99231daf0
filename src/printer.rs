//! Renders an [`Expr`]/[`Stmt`] tree into the canonical S-expression form
//! used by the `parse` subcommand.

use crate::ast::{Expr, Stmt};
use crate::value::{format_number_with_fraction, Value};

pub struct AstPrinter;

impl AstPrinter {
    pub fn print_expr(expr: &Expr) -> String {
        match expr {
            Expr::Literal(value) => Self::print_literal(value),
            Expr::Grouping(inner) => format!("(group {})", Self::print_expr(inner)),
            Expr::Unary(op, right) => format!("({} {})", op.lexeme, Self::print_expr(right)),
            Expr::Binary(left, op, right) => format!(
                "({} {} {})",
                op.lexeme,
                Self::print_expr(left),
                Self::print_expr(right)
            ),
        }
    }

    /// Statements concatenate with no separator between them.
    pub fn print_program(statements: &[Stmt]) -> String {
        statements.iter().map(Self::print_stmt).collect()
    }

    fn print_stmt(stmt: &Stmt) -> String {
        let expr = match stmt {
            Stmt::Expr(expr) | Stmt::Print(expr) => expr,
        };
        format!("(; {})", Self::print_expr(expr))
    }

    fn print_literal(value: &Value) -> String {
        match value {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number_with_fraction(*n),
            Value::Str(s) => s.clone(),
        }
    }
}
