use crate::fuzzyerror::{
    FuzzyError,
    Result
};

/// Unpacks the operand pair of a binary operator, rejecting any other arity.
pub fn two_operands(operator: &str, values: &[f64]) -> Result<(f64, f64)> {
    match values {
        [a, b] => Ok((*a, *b)),
        _ => Err(FuzzyError::invalid_arity(operator, 2, values.len())),
    }
}
