//! Property-based tests for parsing, simplification and differentiation.

#[cfg(test)]
mod tests {
    use approx::relative_eq;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    use crate::symbolic::symbolic_engine::{Expr, Func, Op};
    use crate::symbolic::symbolic_engine_derivatives::Differentiator;

    // small non-negative integers, so constants render as plain numerals
    fn leaf_over(names: Vec<&'static str>) -> impl Strategy<Value = Expr> {
        prop_oneof![
            (0u8..10).prop_map(|n| Expr::Const(n as f64)),
            prop::sample::select(names).prop_map(Expr::var),
        ]
    }

    fn func() -> impl Strategy<Value = Func> {
        prop::sample::select(Func::iter().collect::<Vec<_>>())
    }

    fn op() -> impl Strategy<Value = Op> {
        prop::sample::select(Op::iter().collect::<Vec<_>>())
    }

    // raw trees, as the parser builds them
    fn expr_over(names: Vec<&'static str>) -> impl Strategy<Value = Expr> {
        leaf_over(names).prop_recursive(4, 32, 2, |inner| {
            prop_oneof![
                (func(), inner.clone()).prop_map(|(f, arg)| Expr::unary(f, arg)),
                (op(), inner.clone(), inner).prop_map(|(o, lhs, rhs)| Expr::binary(o, lhs, rhs)),
            ]
        })
    }

    fn expr() -> impl Strategy<Value = Expr> {
        expr_over(vec!["x", "y"])
    }

    proptest! {
        #[test]
        fn render_inverts_parse(e in expr()) {
            let text = e.to_string();
            let reparsed = Expr::parse_expression(&text).unwrap();
            prop_assert_eq!(reparsed.to_string(), text);
            prop_assert_eq!(reparsed, e);
        }

        #[test]
        fn constant_has_zero_derivative(c in any::<f64>()) {
            prop_assert_eq!(Expr::Const(c).differentiate().unwrap(), Expr::Const(0.0));
        }

        #[test]
        fn variable_has_unit_derivative(name in "[a-z][a-z0-9_]{0,5}") {
            let var = Expr::var(&name);
            prop_assert_eq!(var.differentiate().unwrap(), Expr::Const(1.0));
            prop_assert_eq!(var.diff(&name).unwrap(), Expr::Const(1.0));
        }

        #[test]
        fn tree_without_the_variable_has_zero_derivative(e in expr_over(vec!["y", "t"])) {
            prop_assert_eq!(e.diff("x"), Ok(Expr::Const(0.0)));
        }

        #[test]
        fn named_variable_matches_default_mode(e in expr_over(vec!["x"])) {
            prop_assert_eq!(e.diff("x"), e.differentiate());
        }

        #[test]
        fn differentiation_is_linear(a in expr(), b in expr()) {
            let wrt_x = Differentiator::with_respect_to("x");
            let derivatives = (
                wrt_x.differentiate(&Expr::binary(Op::Add, a.clone(), b.clone())),
                wrt_x.differentiate(&a),
                wrt_x.differentiate(&b),
            );
            let (Ok(d_sum), Ok(da), Ok(db)) = derivatives else {
                return Ok(());
            };
            for v in [0.3, 0.7, 1.3] {
                let lhs = d_sum.eval1D(v);
                let rhs = da.eval1D(v) + db.eval1D(v);
                if !lhs.is_finite() || !rhs.is_finite() {
                    continue;
                }
                prop_assert!(
                    relative_eq!(lhs, rhs, epsilon = 1e-9, max_relative = 1e-9),
                    "d({} + {}) at {}: {} != {}", a, b, v, lhs, rhs
                );
            }
        }

        #[test]
        fn simplification_is_idempotent(e in expr()) {
            let Ok(once) = e.simplify() else {
                return Ok(());
            };
            prop_assert_eq!(once.simplify(), Ok(once.clone()));
        }
    }
}
