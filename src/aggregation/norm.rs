use std::sync::Arc;

use crate::fuzzyerror::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormType {
    TNorm,
    TConorm,
}

impl NormType {
    /// The tag of the De Morgan dual.
    pub fn opposite(self) -> NormType {
        match self {
            NormType::TNorm => NormType::TConorm,
            NormType::TConorm => NormType::TNorm,
        }
    }
}

impl std::fmt::Display for NormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormType::TNorm => write!(f, "T_NORM"),
            NormType::TConorm => write!(f, "T_CONORM"),
        }
    }
}

/// A binary aggregation operator on truth values in `[0, 1]`.
///
/// Implementations are immutable once built, so `apply` can be called
/// concurrently on a shared instance.
pub trait Norm: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Combines exactly two operands; any other count is an
    /// [`InvalidArity`](crate::fuzzyerror::FuzzyError::InvalidArity) error.
    fn apply(&self, values: &[f64]) -> Result<f64>;

    fn norm_type(&self) -> NormType;

    /// The De Morgan dual `1 - n(1 - a, 1 - b)` of this operator.
    fn duality(&self) -> Arc<dyn Norm>;
}
