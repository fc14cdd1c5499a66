//! # Symbolic Expression Simplification Module
//!
//! Smart constructors that keep expression trees in a local canonical form.
//! Every non-leaf node built during differentiation goes through
//! [`Expr::make_binary`] or [`Expr::make_unary`]; the raw constructors
//! `Expr::binary`/`Expr::unary` are left to the parser and to derivative bodies
//! that must keep a node exactly as it was written.
//!
//! ## Rules, in priority order
//!
//! 1. **Constant Folding**: `c1 op c2` is evaluated at once (`+ - * / ^`); a result
//!    that is not a finite number is an error, so every `Const` renders as a numeral
//! 2. **Additive Identities**: `a + 0 = a`, `0 + a = a`, `a - 0 = a`
//! 3. **Multiplicative Identities**: `1 * a = a`, `a * 1 = a`, `0 * a = 0`, `a * 0 = 0`
//! 4. **Quotient Folding**: `k * (c / d) = (k*c) / d` and `(c / d) * k = (c*k) / d`
//! 5. **Division Identities**: `0 / a = 0`, `a / 0` is an error
//! 6. **Power Identities**: `a ^ 0 = 1`, `a ^ 1 = a`
//!
//! Nothing else is rewritten: no polynomial collection, no `x - x = 0`, no
//! trigonometric identities. Function applications are never folded, so `(ln 2)`
//! stays symbolic.

use crate::symbolic::symbolic_engine::{Expr, Func, Op};
use crate::symbolic::symbolic_error::DiffError;

fn division_by_zero(op: Op, lhs: &Expr, rhs: &Expr) -> DiffError {
    DiffError::DivisionByZero(format!("({} {} {})", op, lhs, rhs))
}

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Builds a binary node, folding constants and removing identity elements.
    ///
    /// # Arguments
    /// * `op` - operator of the node
    /// * `lhs`, `rhs` - operands, assumed to be simplified already
    ///
    /// # Returns
    /// The simplest equivalent expression under the local rule set, or
    /// `DiffError::DivisionByZero` when the divisor is the constant zero
    /// (`0 ^ negative` included), `DiffError::NonFiniteConstant` when folding
    /// overflows or yields NaN
    ///
    /// # Examples
    /// ```rust, ignore
    /// let e = Expr::make_binary(Op::Mul, Expr::Const(1.0), Expr::var("x"))?; // x
    /// let e = Expr::make_binary(Op::Div, Expr::Const(2.0), Expr::Const(4.0))?; // 0.5
    /// ```
    pub fn make_binary(op: Op, lhs: Expr, rhs: Expr) -> Result<Expr, DiffError> {
        if let (Some(a), Some(b)) = (lhs.as_const(), rhs.as_const()) {
            if (op == Op::Div && b == 0.0) || (op == Op::Pow && a == 0.0 && b < 0.0) {
                return Err(division_by_zero(op, &lhs, &rhs));
            }
            let folded = op.closed_form()(a, b); // (a) op (b) = (a op b)
            if !folded.is_finite() {
                return Err(DiffError::NonFiniteConstant(format!("({} {} {})", op, lhs, rhs)));
            }
            return Ok(Expr::Const(folded));
        }

        let simplified = match op {
            Op::Add | Op::Sub if rhs.is_const_eq(0.0) => lhs, // x ± 0 = x
            Op::Add if lhs.is_const_eq(0.0) => rhs,           // 0 + x = x
            Op::Mul if lhs.is_const_eq(1.0) => rhs,           // 1 * x = x
            Op::Mul if rhs.is_const_eq(1.0) => lhs,           // x * 1 = x
            Op::Mul if lhs.is_const_eq(0.0) || rhs.is_const_eq(0.0) => Expr::Const(0.0),
            Op::Mul => return Self::fold_into_quotient(lhs, rhs),
            Op::Div if lhs.is_const_eq(0.0) => Expr::Const(0.0), // 0 / x = 0
            Op::Div if rhs.is_const_eq(0.0) => return Err(division_by_zero(op, &lhs, &rhs)),
            Op::Pow if rhs.is_const_eq(0.0) => Expr::Const(1.0), // x^0 = 1
            Op::Pow if rhs.is_const_eq(1.0) => lhs,              // x^1 = x
            _ => Expr::binary(op, lhs, rhs),
        };
        Ok(simplified)
    }

    // k * (c / d) = (k*c) / d, keeps constant factors in the numerator
    fn fold_into_quotient(lhs: Expr, rhs: Expr) -> Result<Expr, DiffError> {
        match (lhs, rhs) {
            (Expr::Const(k), Expr::Binary(Op::Div, num, den))
            | (Expr::Binary(Op::Div, num, den), Expr::Const(k))
                if num.is_const() =>
            {
                let numerator = Expr::make_binary(Op::Mul, Expr::Const(k), *num)?;
                Expr::make_binary(Op::Div, numerator, *den)
            }
            (lhs, rhs) => Ok(Expr::binary(Op::Mul, lhs, rhs)),
        }
    }

    /// Builds a function node. Function applications are kept symbolic,
    /// even for constant arguments.
    pub fn make_unary(func: Func, arg: Expr) -> Expr {
        Expr::unary(func, arg)
    }

    /// Rebuilds the whole tree bottom-up through the smart constructors.
    ///
    /// A tree produced by the smart constructors is a fixed point of this method.
    pub fn simplify(&self) -> Result<Expr, DiffError> {
        match self {
            Expr::Const(_) | Expr::Var(_) => Ok(self.clone()),
            Expr::Unary(func, arg) => Ok(Expr::make_unary(*func, arg.simplify()?)),
            Expr::Binary(op, lhs, rhs) => Expr::make_binary(*op, lhs.simplify()?, rhs.simplify()?),
        }
    }
}
