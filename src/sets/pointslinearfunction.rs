use std::cmp::Ordering;

use serde::{
    Serialize,
    Deserialize
};

use crate::fuzzyerror::{
    FuzzyError,
    PointsViolation,
    Result
};
use crate::sets::fuzzyfunction::{
    FuzzyFunction,
    SupportAware
};
use crate::sets::point::Point;
use crate::util::nonfinitefloat;
use crate::util::simpleinterval::SimpleInterval;

#[derive(Deserialize)]
struct PointsLinearFunctionJsonProp {
    points: Vec<Point>,
    #[serde(default, with = "nonfinitefloat")]
    default_value: f64
}

impl TryFrom<PointsLinearFunctionJsonProp> for PointsLinearFunction {
    type Error = FuzzyError;

    fn try_from(prop: PointsLinearFunctionJsonProp) -> Result<PointsLinearFunction> {
        PointsLinearFunction::with_default_value(prop.default_value, prop.points)
    }
}

/// Membership function shaped by control points, linearly interpolated
/// between neighbours.
///
/// Points must be given in strictly increasing x. A segment touching an
/// infinite x must be flat. Outside `[first.x, last.x]` the function takes
/// its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointsLinearFunctionJsonProp")]
pub struct PointsLinearFunction {
    points: Vec<Point>,
    #[serde(with = "nonfinitefloat")]
    default_value: f64
}

impl PointsLinearFunction {
    pub fn new(points: Vec<Point>) -> Result<PointsLinearFunction> {
        Self::with_default_value(0.0, points)
    }

    pub fn with_default_value(default_value: f64, points: Vec<Point>) -> Result<PointsLinearFunction> {
        if let Err(violation) = validate_points(&points) {
            tracing::debug!(%violation, "rejected control points");
            return Err(FuzzyError::InvalidPoints(violation));
        }
        Ok(PointsLinearFunction { points, default_value })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }
}

fn validate_points(points: &[Point]) -> std::result::Result<(), PointsViolation> {
    if points.is_empty() {
        return Err(PointsViolation::Empty);
    }

    for (index, pair) in points.windows(2).enumerate() {
        let (left, right) = (pair[0], pair[1]);

        // NaN compares as None and is rejected with the rest.
        if left.x().partial_cmp(&right.x()) != Some(Ordering::Less) {
            return Err(PointsViolation::NotIncreasing { index, left, right });
        }

        if (left.x().is_infinite() || right.x().is_infinite()) && left.y() != right.y() {
            return Err(PointsViolation::SlopeAtInfinity { index, left, right });
        }
    }
    Ok(())
}

impl FuzzyFunction for PointsLinearFunction {
    fn apply(&self, x: f64) -> f64 {
        if let [single] = self.points.as_slice() {
            return if single.x() == x { single.y() } else { self.default_value };
        }

        for pair in self.points.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);

            if x == left.x() {
                return left.y();
            } else if x == right.x() {
                return right.y();
            } else if left.x() < x && x < right.x() {
                if left.y() == right.y() {
                    return left.y();
                }
                let m = Point::slope(left, right);
                let b = left.y() - m * left.x();
                return m * x + b;
            }
        }

        self.default_value
    }
}

impl SupportAware for PointsLinearFunction {
    fn support(&self) -> SimpleInterval {
        // Points are never empty once constructed.
        let lower = self.points.first().map_or(f64::NAN, Point::x);
        let upper = self.points.last().map_or(f64::NAN, Point::x);
        SimpleInterval::closed(lower, upper)
    }
}

impl std::fmt::Display for PointsLinearFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let points: Vec<String> = self.points.iter().map(Point::to_string).collect();
        write!(f, "PointsLinear[{}]", points.join(", "))
    }
}
