//___________________________________TESTS____________________________________
// end-to-end fixtures: prefix text in, prefix text out

#[cfg(test)]
mod tests {
    use crate::differentiate_text;
    use crate::symbolic::symbolic_engine::Expr;
    use crate::symbolic::symbolic_error::DiffError;

    fn check(input: &str, expected: &str) {
        assert_eq!(
            differentiate_text(input).unwrap(),
            expected,
            "derivative of {}",
            input
        );
    }

    #[test]
    fn test_leaves() {
        check("5", "0");
        check("x", "1");
        check("-2", "0");
    }

    #[test]
    fn test_simple_expressions() {
        check("(+ x x)", "2");
        check("(- x x)", "0");
        check("(* x 2)", "2");
        check("(/ x 2)", "0.5");
        check("(^ x 2)", "(* 2 x)");
        check("(cos x)", "(* -1 (sin x))");
        check("(sin x)", "(cos x)");
        check("(tan x)", "(/ 1 (^ (cos x) 2))");
        check("(exp x)", "(exp x)");
        check("(ln x)", "(/ 1 x)");
    }

    #[test]
    fn test_nested_expressions() {
        check("(+ x (+ x x))", "3");
        check("(- (+ x x) x)", "1");
        check("(* 2 (+ x 2))", "2");
        check("(/ 2 (+ 1 x))", "(/ -2 (^ (+ 1 x) 2))");
        check("(cos (+ x 1))", "(* -1 (sin (+ x 1)))");
        check("(sin (+ x 1))", "(cos (+ x 1))");
        check("(sin (* 2 x))", "(* 2 (cos (* 2 x)))");
        check("(tan (* 2 x))", "(/ 2 (^ (cos (* 2 x)) 2))");
        check("(exp (* 2 x))", "(* 2 (exp (* 2 x)))");
        check("(cos (* 2 x))", "(* 2 (* -1 (sin (* 2 x))))");
    }

    // a few results have more than one acceptable form;
    // the engine must land on one of them
    #[test]
    fn test_equivalent_forms() {
        let cases: [(&str, &[&str]); 3] = [
            (
                "(cos (* 2 x))",
                &["(* 2 (* -1 (sin (* 2 x))))", "(* -2 (sin (* 2 x)))"],
            ),
            ("(tan (* 2 x))", &["(/ 2 (^ (cos (* 2 x)) 2))", "(* 2 (/ 1 (^ (cos (* 2 x)) 2)))"]),
            ("(ln (* 2 x))", &["(* 2 (/ 1 (* 2 x)))", "(/ 2 (* 2 x))"]),
        ];
        for (input, options) in cases {
            let result = differentiate_text(input).unwrap();
            assert!(
                options.contains(&result.as_str()),
                "{} gave {}, expected one of {:?}",
                input,
                result,
                options
            );
        }
    }

    #[test]
    fn test_second_derivatives() {
        let second = |input: &str| {
            let first = differentiate_text(input).unwrap();
            differentiate_text(&first).unwrap()
        };
        assert_eq!(second("(sin x)"), "(* -1 (sin x))");
        assert_eq!(second("(exp x)"), "(exp x)");
        assert_eq!(second("(^ x 3)"), "(* 3 (* 2 x))");
        // same result through the tree API
        let f = Expr::parse_expression("(^ x 3)").unwrap();
        assert_eq!(f.n_th_derivative1D(2).unwrap().to_string(), "(* 3 (* 2 x))");
    }

    #[test]
    fn test_rendered_result_reparses() {
        for input in ["(/ x 2)", "(/ 2 (+ 1 x))", "(* x (ln x))", "(^ 2.5 x)"] {
            let result = differentiate_text(input).unwrap();
            let reparsed = Expr::parse_expression(&result).unwrap();
            assert_eq!(reparsed.to_string(), result);
        }
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            differentiate_text("(exp (+ x 1)"),
            Err(DiffError::MalformedExpression(_))
        ));
        assert!(matches!(
            differentiate_text("(log x)"),
            Err(DiffError::MalformedExpression(_))
        ));
        assert_eq!(
            differentiate_text("(/ (exp (* 1 x)) (- 3 3))"),
            Err(DiffError::DivisionByZero("(/ (exp x) 0)".to_string()))
        );
        // x - x is not collected, so the divisor never folds to zero
        assert_eq!(
            differentiate_text("(/ x (- x x))").unwrap(),
            "(/ (- x x) (^ (- x x) 2))"
        );
    }
}
