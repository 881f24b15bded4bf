use std::sync::Arc;

use crate::aggregation::demorganduality::DeMorganDuality;
use crate::aggregation::norm::{
    Norm,
    NormType
};
use crate::aggregation::parametricfactory::{
    ParameterSpec,
    ParametricFactory
};
use crate::fuzzyerror::Result;
use crate::util::parameters::two_operands;
use crate::util::simpleinterval::SimpleInterval;

const OPERATOR: &str = "dubois_prade";

/// Dubois-Prade intersection, `t(a, b) = (a * b) / max(a, b, p)` with `p` in `[0, 1]`.
///
/// `p = 1` is the product t-norm; `p = 0` gives `a * b / max(a, b)`, which
/// is taken to be `0` at `a = b = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuboisPradeIntersection {
    p: f64
}

impl DuboisPradeIntersection {
    pub const FACTORY: DuboisPradeFactory = DuboisPradeFactory;

    pub fn new(p: f64) -> Result<DuboisPradeIntersection> {
        Self::FACTORY.create(&[p])
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    fn parameter_spec() -> ParameterSpec {
        ParameterSpec::new(1, SimpleInterval::closed(0.0, 1.0))
    }
}

impl Norm for DuboisPradeIntersection {
    fn apply(&self, values: &[f64]) -> Result<f64> {
        let (a, b) = two_operands(OPERATOR, values)?;
        let denominator = a.max(b).max(self.p);
        if denominator == 0.0 {
            return Ok(0.0);
        }
        Ok((a * b) / denominator)
    }

    fn norm_type(&self) -> NormType {
        NormType::TNorm
    }

    fn duality(&self) -> Arc<dyn Norm> {
        Arc::new(DeMorganDuality::new(Arc::new(*self)))
    }
}

impl std::fmt::Display for DuboisPradeIntersection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_dp", self.norm_type())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DuboisPradeFactory;

impl ParametricFactory<DuboisPradeIntersection> for DuboisPradeFactory {
    fn parameter_spec(&self) -> ParameterSpec {
        DuboisPradeIntersection::parameter_spec()
    }

    fn create(&self, params: &[f64]) -> Result<DuboisPradeIntersection> {
        self.parameter_spec().validate(OPERATOR, params)?;
        Ok(DuboisPradeIntersection { p: params[0] })
    }
}
