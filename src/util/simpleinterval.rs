use serde::{
    Serialize,
    Deserialize
};

use crate::util::nonfinitefloat;

/// A real interval whose bounds are individually open or closed.
///
/// Bounds may be infinite. The closed flags are kept exactly as given, so an
/// interval can be closed at an infinite bound; use [`SimpleInterval::is_bounded`]
/// to tell such intervals apart from finite ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterval {
    lower_closed: bool,
    #[serde(with = "nonfinitefloat")]
    lower: f64,
    #[serde(with = "nonfinitefloat")]
    upper: f64,
    upper_closed: bool
}

impl SimpleInterval {
    pub fn new(lower_closed: bool, lower: f64, upper: f64, upper_closed: bool) -> SimpleInterval {
        SimpleInterval { lower_closed, lower, upper, upper_closed }
    }

    pub fn closed(lower: f64, upper: f64) -> SimpleInterval {
        SimpleInterval::new(true, lower, upper, true)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn is_lower_closed(&self) -> bool {
        self.lower_closed
    }

    pub fn is_upper_closed(&self) -> bool {
        self.upper_closed
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    pub fn contains(&self, x: f64) -> bool {
        let above_lower = if self.lower_closed { x >= self.lower } else { x > self.lower };
        let below_upper = if self.upper_closed { x <= self.upper } else { x < self.upper };
        above_lower && below_upper
    }
}

impl std::fmt::Display for SimpleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.lower_closed { '[' } else { '(' },
            self.lower,
            self.upper,
            if self.upper_closed { ']' } else { ')' }
        )
    }
}
