use std::sync::Arc;

use crate::aggregation::norm::{
    Norm,
    NormType
};
use crate::fuzzyerror::Result;
use crate::util::parameters::two_operands;

/// The classical non-parametric t-norms and their De Morgan duals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardNorm {
    Minimum,
    Product,
    /// Bounded difference, `max(0, a + b - 1)`.
    Lukasiewicz,
    Drastic,
    Maximum,
    ProbabilisticSum,
    BoundedSum,
    DrasticSum,
}

impl StandardNorm {
    pub fn dual_variant(self) -> StandardNorm {
        match self {
            StandardNorm::Minimum => StandardNorm::Maximum,
            StandardNorm::Product => StandardNorm::ProbabilisticSum,
            StandardNorm::Lukasiewicz => StandardNorm::BoundedSum,
            StandardNorm::Drastic => StandardNorm::DrasticSum,
            StandardNorm::Maximum => StandardNorm::Minimum,
            StandardNorm::ProbabilisticSum => StandardNorm::Product,
            StandardNorm::BoundedSum => StandardNorm::Lukasiewicz,
            StandardNorm::DrasticSum => StandardNorm::Drastic,
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            StandardNorm::Minimum => "min",
            StandardNorm::Product => "prod",
            StandardNorm::Lukasiewicz => "luk",
            StandardNorm::Drastic => "drastic",
            StandardNorm::Maximum => "max",
            StandardNorm::ProbabilisticSum => "probsum",
            StandardNorm::BoundedSum => "boundedsum",
            StandardNorm::DrasticSum => "drasticsum",
        }
    }

    fn call(self, a: f64, b: f64) -> f64 {
        match self {
            StandardNorm::Minimum => a.min(b),
            StandardNorm::Product => a * b,
            StandardNorm::Lukasiewicz => (a + b - 1.0).max(0.0),
            StandardNorm::Drastic => {
                if a == 1.0 {
                    b
                } else if b == 1.0 {
                    a
                } else {
                    0.0
                }
            },
            StandardNorm::Maximum => a.max(b),
            StandardNorm::ProbabilisticSum => a + b - a * b,
            StandardNorm::BoundedSum => (a + b).min(1.0),
            StandardNorm::DrasticSum => {
                if a == 0.0 {
                    b
                } else if b == 0.0 {
                    a
                } else {
                    1.0
                }
            },
        }
    }
}

impl Norm for StandardNorm {
    fn apply(&self, values: &[f64]) -> Result<f64> {
        let (a, b) = two_operands(self.short_name(), values)?;
        Ok(self.call(a, b))
    }

    fn norm_type(&self) -> NormType {
        match self {
            StandardNorm::Minimum
            | StandardNorm::Product
            | StandardNorm::Lukasiewicz
            | StandardNorm::Drastic => NormType::TNorm,
            StandardNorm::Maximum
            | StandardNorm::ProbabilisticSum
            | StandardNorm::BoundedSum
            | StandardNorm::DrasticSum => NormType::TConorm,
        }
    }

    fn duality(&self) -> Arc<dyn Norm> {
        Arc::new(self.dual_variant())
    }
}

impl std::fmt::Display for StandardNorm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.norm_type(), self.short_name())
    }
}
