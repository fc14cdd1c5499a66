/// a module turns a prefix-notation String into a symbolic expression
///
///# Example
/// ```
/// use RustedDiff::symbolic::symbolic_engine::Expr;
/// let input = "(/ 2 (+ 1 x))";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // the parser keeps the tree exactly as written
/// assert_eq!(parsed_expression.to_string(), input);
/// let variables = parsed_expression.extract_variables();
/// assert_eq!(variables, vec!["x".to_string()]);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) defines the expression tree and its prefix rendering
/// 2) evaluates a symbolic expression for a value of its variable
/// 3) differentiates it symbolically
///# Example#
/// ```
/// use RustedDiff::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("(* x (sin x))").unwrap();
/// let df_dx = f.differentiate().unwrap();
/// assert_eq!(df_dx.to_string(), "(+ (sin x) (* x (cos x)))");
/// // evaluate the derivative
/// let value = df_dx.eval1D(0.0);
/// assert_eq!(value, 0.0);
/// // second derivative
/// let d2f = f.n_th_derivative1D(2).unwrap();
/// println!("d2f/dx2 = {}", d2f);
/// ```
/// Example2#
/// ```
/// use RustedDiff::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("(ln (+ 2 (cos x)))").unwrap();
/// let (start, end, num_values, max_norm) = (0.0, 1.0, 100, 1e-6);
/// // compare numerical and analytical derivatives on a linspace defined by start, end values and number of values.
/// // a norm of the difference between the two of them is returned, and the answer is true if the norm is below max_norm
/// let (norm, res) = f.compare_num1D(start, end, num_values, max_norm).unwrap();
/// assert!(res, "norm = {}", norm);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
///________________________________________________________________________________________________________________________________________________
/// derivative rules, settings of a differentiation run and the text entry points
/// Example#
/// ```
/// use RustedDiff::symbolic::symbolic_engine_derivatives::{
///     Differentiator, PowerRule, differentiate_text, differentiate_text_with,
/// };
/// assert_eq!(differentiate_text("(tan x)").unwrap(), "(/ 1 (^ (cos x) 2))");
/// // f(x)^g(x) needs the logarithmic rule
/// let differentiator = Differentiator::new().with_power_rule(PowerRule::Logarithmic);
/// let res = differentiate_text_with(&differentiator, "(^ x x)").unwrap();
/// assert_eq!(res, "(* (^ x x) (+ (ln x) (/ x x)))");
/// // partial derivative
/// let differentiator = Differentiator::with_respect_to("y");
/// assert_eq!(differentiate_text_with(&differentiator, "(* x y)").unwrap(), "x");
/// ```
pub mod symbolic_engine_derivatives;
/// error type shared by the parser, the simplifier and the differentiator
pub mod symbolic_error;
/// local simplification rules applied while trees are built
///# Example
/// ```
/// use RustedDiff::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse_expression("(* 1 (+ x (- 3 3)))").unwrap();
/// assert_eq!(expr.simplify().unwrap().to_string(), "x");
/// ```
pub mod symbolic_simplify;
pub mod utils;

mod proptests;
mod symbolic_engine_tests;
