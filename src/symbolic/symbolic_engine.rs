//! # Symbolic Engine Module
//!
//! The expression model of the differentiation engine: a closed tree of constants,
//! variables, elementary functions and binary operators, together with its canonical
//! prefix rendering.
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! - **Constants**: `Const(f64)` - integer or floating point literals
//! - **Variables**: `Var(String)` - free symbols like "x"
//! - **Functions**: `Unary(Func, arg)` - `sin`, `cos`, `tan`, `exp`, `ln`
//! - **Operations**: `Binary(Op, lhs, rhs)` - `+`, `-`, `*`, `/`, `^`
//!
//! ### `Func` and `Op`
//! Fixed sets of tags. Their textual names come from `strum` so the parser and the
//! renderer share one table, and every tag maps to a closed-form numeric function
//! used for constant folding and evaluation.
//!
//! ## Rendering
//! `Display` writes the same fully parenthesized prefix notation the parser reads:
//! `Const` as its numeral, `Var` as its name, `(f a)` and `(op a b)`.
//! Rendering inverts parsing for canonically formatted input.
//!
//! Trees are immutable values: every transformation builds a new tree and equality
//! is structural.

use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Elementary functions of one argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
}

/// Binary arithmetic operators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum Op {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = "^")]
    Pow,
}

impl Func {
    /// numeric counterpart of the function
    pub fn closed_form(self) -> fn(f64) -> f64 {
        match self {
            Func::Sin => f64::sin,
            Func::Cos => f64::cos,
            Func::Tan => f64::tan,
            Func::Exp => f64::exp,
            Func::Ln => f64::ln,
        }
    }
}

impl Op {
    /// numeric counterpart of the operator; division by zero is checked by the caller
    pub fn closed_form(self) -> fn(f64, f64) -> f64 {
        match self {
            Op::Add => |a: f64, b: f64| a + b,
            Op::Sub => |a: f64, b: f64| a - b,
            Op::Mul => |a: f64, b: f64| a * b,
            Op::Div => |a: f64, b: f64| a / b,
            Op::Pow => f64::powf,
        }
    }
}

/// Core symbolic expression enum representing an expression tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedDiff::symbolic::symbolic_engine::{Expr, Op};
/// // (+ x 2)
/// let expr = Expr::binary(Op::Add, Expr::var("x"), Expr::Const(2.0));
/// assert_eq!(expr.to_string(), "(+ x 2)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Symbolic variable with a name
    Var(String),
    /// Elementary function applied to an argument: (f arg)
    Unary(Func, Box<Expr>),
    /// Binary operation: (op lhs rhs)
    Binary(Op, Box<Expr>, Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // -0 renders as 0
            Expr::Const(val) if *val == 0.0 => write!(f, "0"),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Unary(func, arg) => write!(f, "({} {})", func, arg),
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", op, lhs, rhs),
        }
    }
}

impl Expr {
    /// BASIC FEATURES

    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// Raw function node, no simplification.
    pub fn unary(func: Func, arg: Expr) -> Expr {
        Expr::Unary(func, Box::new(arg))
    }

    /// Raw binary node, no simplification. Reserved for the parser and for
    /// derivative bodies that must keep the original structure of a node.
    pub fn binary(op: Op, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Returns the value of a constant leaf.
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(val) => Some(*val),
            _ => None,
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// true for a constant equal to `value`
    pub fn is_const_eq(&self, value: f64) -> bool {
        matches!(self, Expr::Const(val) if *val == value)
    }

    /// Sorted, deduplicated names of all variables in the expression.
    pub fn extract_variables(&self) -> Vec<String> {
        fn collect(expr: &Expr, acc: &mut Vec<String>) {
            match expr {
                Expr::Const(_) => {}
                Expr::Var(name) => acc.push(name.clone()),
                Expr::Unary(_, arg) => collect(arg, acc),
                Expr::Binary(_, lhs, rhs) => {
                    collect(lhs, acc);
                    collect(rhs, acc);
                }
            }
        }
        let mut vars = Vec::new();
        collect(self, &mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    /// Evaluates the expression with every variable bound to `x`.
    ///
    /// Follows the single implicit variable convention. Plain IEEE
    /// arithmetic is used, so poles evaluate to infinities or NaN.
    ///
    /// # Arguments
    /// * `x` - value substituted for every variable
    ///
    /// # Returns
    /// Numerical value of the expression
    pub fn eval1D(&self, x: f64) -> f64 {
        match self {
            Expr::Const(val) => *val,
            Expr::Var(_) => x,
            Expr::Unary(func, arg) => func.closed_form()(arg.eval1D(x)),
            Expr::Binary(op, lhs, rhs) => op.closed_form()(lhs.eval1D(x), rhs.eval1D(x)),
        }
    }

    /// Evaluates the expression on every point of `x`.
    pub fn calc_vector_lambdified1D(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.eval1D(xi)).collect()
    }
}
