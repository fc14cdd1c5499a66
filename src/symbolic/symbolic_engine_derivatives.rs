//! # Symbolic Engine Derivatives Module
//!
//! Structural differentiation of expression trees. Every node kind has its own
//! rule; results are assembled through the smart constructors of the
//! simplification module, so derivatives come out in the local canonical form.
//!
//! ## Key Methods
//!
//! - `Differentiator::differentiate()` - derivative of a tree under the chosen settings
//! - `Expr::differentiate()` - every symbol is the variable
//! - `Expr::diff(var)` - derivative with respect to one named variable
//! - `Expr::n_th_derivative1D()` - higher-order derivatives
//! - `Expr::compare_num1D()` - check a derivative against finite differences
//! - `differentiate_text()` - string in, string out
//!
//! ## Rules
//!
//! | node | derivative |
//! |---|---|
//! | `c` | `0` |
//! | `x` | `1` |
//! | `a ± b` | `a' ± b'` |
//! | `a * b` | `a'*b + a*b'` |
//! | `a / b` | `(a'*b - a*b') / b^2` |
//! | `c ^ u` | `(c^u) * ln(c)`, chained with `u` |
//! | `u ^ c` | `c * u^(c-1)`, chained with `u` |
//! | `sin u` | `cos u`, chained |
//! | `cos u` | `-1 * sin u`, chained |
//! | `tan u` | `1 / (cos u)^2`, chained |
//! | `exp u` | `exp u`, chained |
//! | `ln u` | `1 / u`, chained |
//!
//! Chaining multiplies by `u'` unless `u` is the bare variable. A function or
//! operator whose arguments do not depend on the variable has derivative `0`
//! right away; with a named variable, other symbols count as constants `c`.

use crate::Utils::config::DiffConfig;
use crate::symbolic::parse_expr::parse_expression_func;
use crate::symbolic::symbolic_engine::{Expr, Func, Op};
use crate::symbolic::symbolic_error::DiffError;
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::{debug, info, warn};
use strum_macros::{Display, EnumIter, EnumString};

/// Treatment of `f(x)^g(x)` when neither base nor exponent is a constant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PowerRule {
    /// the node is returned as it is
    #[default]
    Unchanged,
    /// logarithmic differentiation: f^g * (g' * ln f + g * f' / f)
    Logarithmic,
}

/// Settings of one differentiation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Differentiator {
    /// `None`: every symbol is the variable;
    /// otherwise other symbols are constants
    pub variable: Option<String>,
    pub power_rule: PowerRule,
}

impl Differentiator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_respect_to(var: &str) -> Self {
        Differentiator {
            variable: Some(var.to_string()),
            ..Self::default()
        }
    }

    pub fn with_power_rule(mut self, power_rule: PowerRule) -> Self {
        self.power_rule = power_rule;
        self
    }

    pub fn from_config(config: &DiffConfig) -> Self {
        Differentiator {
            variable: config.variable.clone(),
            power_rule: config.power_rule,
        }
    }

    fn is_variable(&self, name: &str) -> bool {
        self.variable.as_deref().is_none_or(|var| var == name)
    }

    /// true when `expr` does not depend on the differentiation variable
    pub fn is_constant(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Const(_) => true,
            Expr::Var(name) => !self.is_variable(name),
            Expr::Unary(_, arg) => self.is_constant(arg),
            Expr::Binary(_, lhs, rhs) => self.is_constant(lhs) && self.is_constant(rhs),
        }
    }

    //___________________________________DIFFERENTIATION____________________________________

    /// Computes the symbolic derivative of `expr`.
    ///
    /// # Arguments
    /// * `expr` - expression tree, simplified or raw
    ///
    /// # Returns
    /// Derivative in local canonical form, or `DiffError::DivisionByZero`
    /// propagated from the smart constructors
    pub fn differentiate(&self, expr: &Expr) -> Result<Expr, DiffError> {
        match expr {
            Expr::Const(_) => Ok(Expr::Const(0.0)),
            Expr::Var(name) if self.is_variable(name) => Ok(Expr::Const(1.0)),
            Expr::Var(_) => Ok(Expr::Const(0.0)),
            Expr::Unary(func, arg) => self.diff_unary(*func, arg),
            Expr::Binary(op, lhs, rhs) => self.diff_binary(expr, *op, lhs, rhs),
        }
    }

    // generalized chain rule: `outer` is the derivative of the outer function at `inner`
    fn chain(&self, outer: Expr, inner: &Expr) -> Result<Expr, DiffError> {
        match inner {
            Expr::Const(_) => Ok(outer),
            Expr::Var(name) if self.is_variable(name) => Ok(outer),
            _ => Expr::make_binary(Op::Mul, self.differentiate(inner)?, outer),
        }
    }

    fn diff_unary(&self, func: Func, arg: &Expr) -> Result<Expr, DiffError> {
        if self.is_constant(arg) {
            return Ok(Expr::Const(0.0));
        }
        let u = arg.clone();
        let outer = match func {
            Func::Sin => Expr::make_unary(Func::Cos, u),
            Func::Cos => Expr::make_binary(
                Op::Mul,
                Expr::Const(-1.0),
                Expr::make_unary(Func::Sin, u),
            )?,
            Func::Tan => {
                let cos_squared =
                    Expr::make_binary(Op::Pow, Expr::make_unary(Func::Cos, u), Expr::Const(2.0))?;
                Expr::make_binary(Op::Div, Expr::Const(1.0), cos_squared)?
            }
            Func::Exp => Expr::make_unary(Func::Exp, u),
            Func::Ln => Expr::make_binary(Op::Div, Expr::Const(1.0), u)?,
        };
        self.chain(outer, arg)
    }

    fn diff_binary(&self, node: &Expr, op: Op, lhs: &Expr, rhs: &Expr) -> Result<Expr, DiffError> {
        if self.is_constant(lhs) && self.is_constant(rhs) {
            return Ok(Expr::Const(0.0));
        }
        match op {
            Op::Add | Op::Sub => {
                Expr::make_binary(op, self.differentiate(lhs)?, self.differentiate(rhs)?)
            }
            Op::Mul => {
                let left = Expr::make_binary(Op::Mul, self.differentiate(lhs)?, rhs.clone())?;
                let right = Expr::make_binary(Op::Mul, lhs.clone(), self.differentiate(rhs)?)?;
                Expr::make_binary(Op::Add, left, right)
            }
            Op::Div => {
                let left = Expr::make_binary(Op::Mul, self.differentiate(lhs)?, rhs.clone())?;
                let right = Expr::make_binary(Op::Mul, lhs.clone(), self.differentiate(rhs)?)?;
                let numerator = Expr::make_binary(Op::Sub, left, right)?;
                let denominator = Expr::make_binary(Op::Pow, rhs.clone(), Expr::Const(2.0))?;
                Expr::make_binary(Op::Div, numerator, denominator)
            }
            Op::Pow => self.diff_power(node, lhs, rhs),
        }
    }

    fn diff_power(&self, node: &Expr, base: &Expr, exponent: &Expr) -> Result<Expr, DiffError> {
        match (self.is_constant(base), self.is_constant(exponent)) {
            // c^u
            (true, _) => {
                let outer = Expr::make_binary(
                    Op::Mul,
                    node.clone(),
                    Expr::make_unary(Func::Ln, base.clone()),
                )?;
                self.chain(outer, exponent)
            }
            // u^c
            (_, true) => {
                let lowered_exponent =
                    Expr::make_binary(Op::Sub, exponent.clone(), Expr::Const(1.0))?;
                let lowered = Expr::make_binary(Op::Pow, base.clone(), lowered_exponent)?;
                let outer = Expr::make_binary(Op::Mul, exponent.clone(), lowered)?;
                self.chain(outer, base)
            }
            _ => match self.power_rule {
                PowerRule::Unchanged => {
                    warn!("'{}' has no constant side, returned unchanged", node);
                    Ok(node.clone())
                }
                PowerRule::Logarithmic => {
                    let log_term = Expr::make_binary(
                        Op::Mul,
                        self.differentiate(exponent)?,
                        Expr::make_unary(Func::Ln, base.clone()),
                    )?;
                    let scaled = Expr::make_binary(
                        Op::Mul,
                        exponent.clone(),
                        self.differentiate(base)?,
                    )?;
                    let ratio_term = Expr::make_binary(Op::Div, scaled, base.clone())?;
                    let sum = Expr::make_binary(Op::Add, log_term, ratio_term)?;
                    Expr::make_binary(Op::Mul, node.clone(), sum)
                }
            },
        }
    }
}

impl Expr {
    /// Derivative with every symbol treated as the variable.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("(^ x 2)")?;
    /// assert_eq!(f.differentiate()?.to_string(), "(* 2 x)");
    /// ```
    pub fn differentiate(&self) -> Result<Expr, DiffError> {
        Differentiator::new().differentiate(self)
    }

    /// Partial derivative with respect to `var`; other symbols are constants.
    pub fn diff(&self, var: &str) -> Result<Expr, DiffError> {
        Differentiator::with_respect_to(var).differentiate(self)
    }

    /// Computes the nth derivative of a single-variable expression.
    ///
    /// # Arguments
    /// * `n` - Order of derivative (0 = original function, 1 = first derivative, etc.)
    ///
    /// # Returns
    /// Symbolic expression representing the nth derivative
    pub fn n_th_derivative1D(&self, n: usize) -> Result<Expr, DiffError> {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.differentiate()?;
        }
        Ok(expr)
    }

    /// Validates the analytical derivative against a numerical approximation.
    ///
    /// Computes both derivatives over a domain and compares the norm of their
    /// difference.
    ///
    /// # Arguments
    /// * `start` - Domain start
    /// * `end` - Domain end
    /// * `num_values` - Number of test points
    /// * `max_norm` - Maximum acceptable norm difference
    ///
    /// # Returns
    /// Tuple of (actual_norm, is_within_tolerance)
    pub fn compare_num1D(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), DiffError> {
        let domain = linspace(start, end, num_values);
        let analytical = self.differentiate()?.calc_vector_lambdified1D(&domain);
        let step = (1.0 / 1e4) * (end - start) / (num_values as f64 - 1.0).max(1.0);
        let numerical = numerical_derivative(|x| self.eval1D(x), &domain, step);
        let norma_val = norm(&analytical, &numerical);
        Ok((norma_val, norma_val < max_norm))
    }
}

/// Differentiates a prefix-notation expression and renders the result.
///
/// # Examples
/// ```
/// use RustedDiff::differentiate_text;
/// assert_eq!(differentiate_text("(^ x 2)").unwrap(), "(* 2 x)");
/// assert_eq!(differentiate_text("(cos x)").unwrap(), "(* -1 (sin x))");
/// ```
pub fn differentiate_text(input: &str) -> Result<String, DiffError> {
    differentiate_text_with(&Differentiator::new(), input)
}

/// Parses `input`, brings it to canonical form, differentiates it with the given
/// settings and renders the result in the same prefix notation.
///
/// Canonicalising the input first means a divisor that folds to zero is
/// reported as `DivisionByZero` before any derivative is built.
pub fn differentiate_text_with(
    differentiator: &Differentiator,
    input: &str,
) -> Result<String, DiffError> {
    let parsed = parse_expression_func(input)?;
    let canonical = parsed.simplify()?;
    debug!("canonical input: {}", canonical);
    let derivative = differentiator.differentiate(&canonical)?;
    let rendered = derivative.to_string();
    info!("derivative of {} is {}", input, rendered);
    Ok(rendered)
}
