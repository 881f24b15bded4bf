use std::sync::Arc;

use crate::aggregation::norm::{
    Norm,
    NormType
};
use crate::fuzzyerror::Result;
use crate::util::parameters::two_operands;

/// Standard-complement dual of a wrapped norm: `1 - n(1 - a, 1 - b)`.
#[derive(Debug, Clone)]
pub struct DeMorganDuality {
    norm: Arc<dyn Norm>
}

impl DeMorganDuality {
    pub fn new(norm: Arc<dyn Norm>) -> DeMorganDuality {
        DeMorganDuality { norm }
    }

    pub fn norm(&self) -> &Arc<dyn Norm> {
        &self.norm
    }
}

impl Norm for DeMorganDuality {
    fn apply(&self, values: &[f64]) -> Result<f64> {
        let (a, b) = two_operands("de_morgan_duality", values)?;
        Ok(1.0 - self.norm.apply(&[1.0 - a, 1.0 - b])?)
    }

    fn norm_type(&self) -> NormType {
        self.norm.norm_type().opposite()
    }

    fn duality(&self) -> Arc<dyn Norm> {
        Arc::clone(&self.norm)
    }
}

impl std::fmt::Display for DeMorganDuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dual({})", self.norm)
    }
}
