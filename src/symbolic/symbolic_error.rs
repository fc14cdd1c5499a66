use std::fmt;

/// Error types for parsing, simplification and differentiation
#[derive(Debug, Clone, PartialEq)]
pub enum DiffError {
    /// input text does not follow the prefix grammar
    MalformedExpression(String),
    /// a divisor folded to the constant zero; carries the rendered node
    DivisionByZero(String),
    /// constant folding overflowed or left the real numbers; carries the rendered node
    NonFiniteConstant(String),
    /// configuration could not be read or has invalid values
    Config(String),
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiffError::MalformedExpression(msg) => write!(f, "Malformed expression: {}", msg),
            DiffError::DivisionByZero(node) => write!(f, "Division by zero in '{}'", node),
            DiffError::NonFiniteConstant(node) => {
                write!(f, "'{}' does not fold to a finite number", node)
            }
            DiffError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for DiffError {}

impl DiffError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        DiffError::MalformedExpression(msg.into())
    }
}
