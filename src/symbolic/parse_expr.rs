//! a module turns a prefix-notation String into a symbolic expression
//!# Example
//! ```
//! use RustedDiff::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression("(* 2 (sin x))").unwrap();
//! assert_eq!(parsed_expression.to_string(), "(* 2 (sin x))");
//! ```
use crate::symbolic::symbolic_engine::{Expr, Func, Op};
use crate::symbolic::symbolic_error::DiffError;
use crate::symbolic::utils::{
    brackets_are_balanced, find_pair_to_this_bracket, split_at_space_outside_brackets,
};
use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::{all_consuming, map, map_res, recognize},
    number::complete::recognize_float,
    sequence::pair,
};
use std::str::FromStr;
//                  search recursion diagram
//                "(+ (sin x) (^ x 2))"               |
//                |  strip outer brackets             |
//                |___________________________________|
//                |  head '+' | args "(sin x) (^ x 2)"|
//                |___________|_______________________|
//                |  split at first space outside     |
//                |  brackets                         |
//                |___________________________________|
//                |   (sin x)   |     (^ x 2)         |
//                |      |      |        |            |
//                |_____\|/_____|_______\|/___________|
//                |  head 'sin' | head '^'            |
//                |  args 'x'   | args 'x 2' -> x, 2  |
//                |_____Ok______|_______Ok____________|

// finite number literal; accepts everything the renderer can print (-2, 0.5, 1e-3)
fn number(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, |s: &str| match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(()),
    })
    .parse(input)
}

// a letter or '_' followed by letters, digits or '_'
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

fn leaf(input: &str) -> IResult<&str, Expr> {
    alt((map(number, Expr::Const), map(identifier, Expr::var))).parse(input)
}

/// Parses a bare token into a constant or a variable.
pub fn parse_leaf(token: &str) -> Result<Expr, DiffError> {
    all_consuming(leaf)
        .parse(token)
        .map(|(_, expr)| expr)
        .map_err(|_| {
            DiffError::malformed(format!("'{}' is neither a number nor a variable", token))
        })
}

/// Parses fully parenthesized prefix notation into a raw (unsimplified) expression tree.
///
/// Grammar:
/// ```text
/// expr      := number | identifier | "(" unary-op " " expr ")" | "(" binary-op " " expr " " expr ")"
/// unary-op  := "sin" | "cos" | "tan" | "exp" | "ln"
/// binary-op := "+" | "-" | "*" | "/" | "^"
/// ```
/// A single space separates tokens. Bare numbers and identifiers appear without brackets.
///
/// # Arguments
/// * `input` - expression text, e.g. `"(/ 2 (+ 1 x))"`
///
/// # Returns
/// The parsed tree or `DiffError::MalformedExpression`
pub fn parse_expression_func(input: &str) -> Result<Expr, DiffError> {
    if !brackets_are_balanced(input) {
        return Err(DiffError::malformed(format!(
            "'{}' does not have matching parentheses",
            input
        )));
    }
    parse_node(input)
}

// recursive part; `input` is known to have balanced brackets
fn parse_node(input: &str) -> Result<Expr, DiffError> {
    trace!("parsing '{}'", input);
    if input.is_empty() {
        return Err(DiffError::malformed("empty expression"));
    }
    if !input.starts_with('(') {
        return parse_leaf(input);
    }

    // Prefix expressions starting with '(' must end with the matching ')'
    if find_pair_to_this_bracket(input, 0) != Some(input.len() - 1) {
        return Err(DiffError::malformed(format!(
            "'{}' has content after its closing parenthesis",
            input
        )));
    }
    let inner = &input[1..input.len() - 1];

    // split `+ 1 2` or `sin x` into (operator, arguments)
    let (head, args) = inner
        .split_once(' ')
        .ok_or_else(|| DiffError::malformed(format!("'{}' has no arguments", input)))?;
    if args.is_empty() {
        return Err(DiffError::malformed(format!("'{}' has no arguments", input)));
    }

    if let Ok(func) = Func::from_str(head) {
        let arg = parse_node(args)?;
        return Ok(Expr::unary(func, arg));
    }
    if let Ok(op) = Op::from_str(head) {
        let (lhs, rhs) = split_at_space_outside_brackets(args).ok_or_else(|| {
            DiffError::malformed(format!("failed to separate operands of '{}'", input))
        })?;
        let lhs = parse_node(lhs)?;
        let rhs = parse_node(rhs)?;
        return Ok(Expr::binary(op, lhs, rhs));
    }
    Err(DiffError::malformed(format!(
        "'{}' is not a known function or operator",
        head
    )))
}

impl Expr {
    /// Parses prefix notation, see [`parse_expression_func`].
    pub fn parse_expression(input: &str) -> Result<Expr, DiffError> {
        parse_expression_func(input)
    }
}

impl FromStr for Expr {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression_func(s)
    }
}
