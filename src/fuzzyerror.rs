use thiserror::Error;

use crate::aggregation::parametricfactory::ParameterSpec;
use crate::sets::point::Point;

pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Reason a set of control points was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum PointsViolation {
    Empty,
    NotIncreasing {
        index: usize,
        left: Point,
        right: Point,
    },
    SlopeAtInfinity {
        index: usize,
        left: Point,
        right: Point,
    },
}

impl std::fmt::Display for PointsViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointsViolation::Empty => write!(f, "at least one point is required"),
            PointsViolation::NotIncreasing { index, left, right } => {
                write!(f, "x must strictly increase, but points {} and {} at index {} do not", left, right, index)
            }
            PointsViolation::SlopeAtInfinity { index, left, right } => {
                write!(f, "segment {} -> {} at index {} has an infinite x and differing y", left, right, index)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum FuzzyError {
    #[error("{operator} expects {expected}, got {found:?}")]
    InvalidParameter {
        operator: String,
        expected: ParameterSpec,
        found: Vec<f64>,
    },

    #[error("{operator} takes exactly {expected} operands, got {found}")]
    InvalidArity {
        operator: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid points: {0}")]
    InvalidPoints(PointsViolation),

    #[error("norm '{0}' not found")]
    UnknownNorm(String),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
}

impl FuzzyError {
    pub fn invalid_parameter(operator: &str, expected: ParameterSpec, found: &[f64]) -> FuzzyError {
        FuzzyError::InvalidParameter {
            operator: operator.to_owned(),
            expected,
            found: found.to_vec(),
        }
    }

    pub fn invalid_arity(operator: &str, expected: usize, found: usize) -> FuzzyError {
        FuzzyError::InvalidArity {
            operator: operator.to_owned(),
            expected,
            found,
        }
    }
}
