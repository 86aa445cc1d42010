//! Expression AST - the core of SQL expression building.
//!
//! A strongly-typed AST with exhaustive pattern matching enforced by the
//! compiler. Construction goes through the free functions (`col`, `lit_str`,
//! `sum`, ...) and the [`ExprExt`] combinators.

use super::token::{Token, TokenStream};

// =============================================================================
// Expression AST
// =============================================================================

/// A SQL expression.
///
/// Every variant must be handled in `to_tokens()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column reference: optional_table.column
    Column {
        table: Option<String>,
        column: String,
    },

    /// Literal values
    Literal(Literal),

    /// Binary operation: left op right
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },

    /// Unary operation: op expr
    UnaryOp { op: UnaryOperator, expr: Box<Expr> },

    /// Function call: name(args...)
    Function {
        name: String,
        args: Vec<Expr>,
        distinct: bool,
    },

    /// CASE WHEN... THEN... ELSE... END
    Case {
        operand: Option<Box<Expr>>,
        when_clauses: Vec<(Expr, Expr)>,
        else_clause: Option<Box<Expr>>,
    },

    /// IN: expr IN (values...)
    In {
        expr: Box<Expr>,
        values: Vec<Expr>,
        negated: bool,
    },

    /// BETWEEN: expr BETWEEN low AND high
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },

    /// IS NULL / IS NOT NULL
    IsNull { expr: Box<Expr>, negated: bool },

    /// Wildcard: * or table.*
    Star { table: Option<String> },

    /// Parenthesized expression
    Paren(Box<Expr>),
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
    Plus,
    Minus,
    Mul,
    Div,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
}

// =============================================================================
// Expression to tokens
// =============================================================================

impl Expr {
    /// Convert this expression to a token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        match self {
            Expr::Column { table, column } => {
                if let Some(t) = table {
                    ts.push(Token::Ident(t.clone()));
                    ts.push(Token::Dot);
                }
                ts.push(Token::Ident(column.clone()));
            }

            Expr::Literal(lit) => {
                ts.push(match lit {
                    Literal::Int(n) => Token::LitInt(*n),
                    Literal::Float(f) => Token::LitFloat(*f),
                    Literal::String(s) => Token::LitString(s.clone()),
                    Literal::Bool(b) => Token::LitBool(*b),
                    Literal::Null => Token::LitNull,
                });
            }

            Expr::BinaryOp { left, op, right } => {
                ts.append(&left.to_tokens());
                ts.space();
                ts.push(binary_op_to_token(*op));
                ts.space();
                ts.append(&right.to_tokens());
            }

            Expr::UnaryOp { op, expr } => {
                ts.push(match op {
                    UnaryOperator::Not => Token::Not,
                    UnaryOperator::Minus => Token::Minus,
                });
                ts.space();
                ts.append(&expr.to_tokens());
            }

            Expr::Function {
                name,
                args,
                distinct,
            } => {
                ts.push(Token::FunctionName(name.clone()));
                ts.lparen();
                if *distinct {
                    ts.push(Token::Distinct).space();
                }
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.append(&arg.to_tokens());
                }
                ts.rparen();
            }

            Expr::Case {
                operand,
                when_clauses,
                else_clause,
            } => {
                ts.push(Token::Case);
                if let Some(op) = operand {
                    ts.space().append(&op.to_tokens());
                }
                for (when, then) in when_clauses {
                    ts.space().push(Token::When).space();
                    ts.append(&when.to_tokens());
                    ts.space().push(Token::Then).space();
                    ts.append(&then.to_tokens());
                }
                if let Some(else_expr) = else_clause {
                    ts.space().push(Token::Else).space();
                    ts.append(&else_expr.to_tokens());
                }
                ts.space().push(Token::End);
            }

            Expr::In {
                expr,
                values,
                negated,
            } => {
                // Empty IN lists are a contradiction / tautology.
                if values.is_empty() {
                    ts.push(Token::LitBool(*negated));
                    return ts;
                }
                ts.append(&expr.to_tokens());
                ts.space();
                if *negated {
                    ts.push(Token::Not).space();
                }
                ts.push(Token::In).space().lparen();
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.append(&value.to_tokens());
                }
                ts.rparen();
            }

            Expr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                ts.append(&expr.to_tokens());
                ts.space();
                if *negated {
                    ts.push(Token::Not).space();
                }
                ts.push(Token::Between).space();
                ts.append(&low.to_tokens());
                ts.space().push(Token::And).space();
                ts.append(&high.to_tokens());
            }

            Expr::IsNull { expr, negated } => {
                ts.append(&expr.to_tokens());
                ts.space();
                ts.push(if *negated {
                    Token::IsNotNull
                } else {
                    Token::IsNull
                });
            }

            Expr::Star { table } => {
                if let Some(t) = table {
                    ts.push(Token::Ident(t.clone()));
                    ts.push(Token::Dot);
                }
                ts.push(Token::Star);
            }

            Expr::Paren(inner) => {
                ts.lparen();
                ts.append(&inner.to_tokens());
                ts.rparen();
            }
        }

        ts
    }
}

fn binary_op_to_token(op: BinaryOperator) -> Token {
    match op {
        BinaryOperator::Eq => Token::Eq,
        BinaryOperator::Ne => Token::Ne,
        BinaryOperator::Lt => Token::Lt,
        BinaryOperator::Gt => Token::Gt,
        BinaryOperator::Lte => Token::Lte,
        BinaryOperator::Gte => Token::Gte,
        BinaryOperator::And => Token::And,
        BinaryOperator::Or => Token::Or,
        BinaryOperator::Plus => Token::Plus,
        BinaryOperator::Minus => Token::Minus,
        BinaryOperator::Mul => Token::Mul,
        BinaryOperator::Div => Token::Div,
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Column reference: `col("region")`.
pub fn col(name: &str) -> Expr {
    Expr::Column {
        table: None,
        column: name.into(),
    }
}

/// Qualified column reference: `table_col("f", "region")`.
pub fn table_col(table: &str, column: &str) -> Expr {
    Expr::Column {
        table: Some(table.into()),
        column: column.into(),
    }
}

/// Wildcard: `*`.
pub fn star() -> Expr {
    Expr::Star { table: None }
}

pub fn lit_int(n: i64) -> Expr {
    Expr::Literal(Literal::Int(n))
}

pub fn lit_float(f: f64) -> Expr {
    Expr::Literal(Literal::Float(f))
}

pub fn lit_str(s: &str) -> Expr {
    Expr::Literal(Literal::String(s.into()))
}

pub fn lit_bool(b: bool) -> Expr {
    Expr::Literal(Literal::Bool(b))
}

pub fn lit_null() -> Expr {
    Expr::Literal(Literal::Null)
}

/// Arbitrary function call.
pub fn func(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Function {
        name: name.into(),
        args,
        distinct: false,
    }
}

pub fn sum(expr: Expr) -> Expr {
    func("sum", vec![expr])
}

pub fn avg(expr: Expr) -> Expr {
    func("avg", vec![expr])
}

pub fn count(expr: Expr) -> Expr {
    func("count", vec![expr])
}

/// `COUNT(*)`
pub fn count_star() -> Expr {
    func("count", vec![star()])
}

/// `COUNT(DISTINCT expr)`
pub fn count_distinct(expr: Expr) -> Expr {
    Expr::Function {
        name: "count".into(),
        args: vec![expr],
        distinct: true,
    }
}

pub fn coalesce(args: Vec<Expr>) -> Expr {
    func("coalesce", args)
}

pub fn abs(expr: Expr) -> Expr {
    func("abs", vec![expr])
}

// =============================================================================
// Combinators
// =============================================================================

/// Fluent combinators available on every expression.
pub trait ExprExt: Sized {
    fn into_expr(self) -> Expr;

    fn binary(self, op: BinaryOperator, right: impl Into<Expr>) -> Expr {
        Expr::BinaryOp {
            left: Box::new(self.into_expr()),
            op,
            right: Box::new(right.into()),
        }
    }

    fn eq(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Eq, right)
    }

    fn ne(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Ne, right)
    }

    fn lt(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Lt, right)
    }

    fn gt(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Gt, right)
    }

    fn lte(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Lte, right)
    }

    fn gte(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Gte, right)
    }

    fn and(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::And, right)
    }

    fn or(self, right: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Or, right)
    }

    fn in_list(self, values: Vec<Expr>) -> Expr {
        Expr::In {
            expr: Box::new(self.into_expr()),
            values,
            negated: false,
        }
    }

    fn not_in_list(self, values: Vec<Expr>) -> Expr {
        Expr::In {
            expr: Box::new(self.into_expr()),
            values,
            negated: true,
        }
    }

    fn between(self, low: impl Into<Expr>, high: impl Into<Expr>) -> Expr {
        Expr::Between {
            expr: Box::new(self.into_expr()),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
            negated: false,
        }
    }

    fn is_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self.into_expr()),
            negated: false,
        }
    }

    fn is_not_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self.into_expr()),
            negated: true,
        }
    }

    fn paren(self) -> Expr {
        Expr::Paren(Box::new(self.into_expr()))
    }

    /// Alias this expression (for SELECT lists).
    fn alias(self, name: &str) -> crate::sql::query::SelectExpr {
        crate::sql::query::SelectExpr {
            expr: self.into_expr(),
            alias: Some(name.into()),
        }
    }
}

impl ExprExt for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        lit_int(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        lit_int(n as i64)
    }
}

impl From<f64> for Expr {
    fn from(f: f64) -> Self {
        lit_float(f)
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        lit_str(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Literal(Literal::String(s))
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        lit_bool(b)
    }
}
