use std::fmt;

/// Error types for optimizers
#[derive(Debug, Clone, PartialEq)]
pub enum MinimizerError {
    FunctionEvaluationError,
    InvalidDimension,
    InvalidParameters(String),
    InvalidStepSize,
    InvalidTolerance,
}

impl fmt::Display for MinimizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MinimizerError::FunctionEvaluationError => {
                write!(f, "Function evaluation returned invalid value")
            }
            MinimizerError::InvalidDimension => write!(f, "Invalid dimension or empty vector"),
            MinimizerError::InvalidParameters(msg) => {
                write!(f, "Invalid parameters: {}", msg)
            }
            MinimizerError::InvalidStepSize => {
                write!(f, "Step size must be nonzero and finite")
            }
            MinimizerError::InvalidTolerance => write!(f, "Tolerance must be positive"),
        }
    }
}

impl std::error::Error for MinimizerError {}
