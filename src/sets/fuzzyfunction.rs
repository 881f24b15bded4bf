use crate::util::simpleinterval::SimpleInterval;

/// A membership function: maps a crisp input to a degree of truth.
pub trait FuzzyFunction: Send + Sync {
    fn apply(&self, x: f64) -> f64;
}

/// A function that knows where it can be nonzero.
pub trait SupportAware {
    fn support(&self) -> SimpleInterval;
}
