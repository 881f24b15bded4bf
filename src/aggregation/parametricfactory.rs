use crate::fuzzyerror::{
    FuzzyError,
    Result
};
use crate::util::simpleinterval::SimpleInterval;

/// Arity and per-parameter domain accepted by a parametric operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    arity: usize,
    domain: Option<SimpleInterval>
}

impl ParameterSpec {
    pub fn new(arity: usize, domain: SimpleInterval) -> ParameterSpec {
        ParameterSpec { arity, domain: Some(domain) }
    }

    pub fn none() -> ParameterSpec {
        ParameterSpec { arity: 0, domain: None }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn domain(&self) -> Option<SimpleInterval> {
        self.domain
    }

    /// Checks the count first, then every value against the domain.
    pub fn validate(&self, operator: &str, params: &[f64]) -> Result<()> {
        if params.len() != self.arity {
            tracing::debug!(operator, expected = self.arity, found = params.len(), "wrong parameter count");
            return Err(FuzzyError::invalid_parameter(operator, *self, params));
        }
        if let Some(domain) = self.domain {
            if let Some(rejected) = params.iter().find(|p| !domain.contains(**p)) {
                tracing::debug!(operator, rejected, %domain, "parameter outside domain");
                return Err(FuzzyError::invalid_parameter(operator, *self, params));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.arity, self.domain) {
            (0, _) => write!(f, "no parameters"),
            (1, None) => write!(f, "one parameter"),
            (n, None) => write!(f, "{} parameters", n),
            (1, Some(domain)) => write!(f, "one parameter in {}", domain),
            (n, Some(domain)) => write!(f, "{} parameters in {}", n, domain),
        }
    }
}

/// Builds a configured operator from a raw parameter vector.
///
/// `create` either returns a fully valid `V` or an
/// [`InvalidParameter`](FuzzyError::InvalidParameter) error; it never
/// constructs anything on failure.
pub trait ParametricFactory<V>: Send + Sync {
    fn parameter_spec(&self) -> ParameterSpec;

    fn create(&self, params: &[f64]) -> Result<V>;
}
