use serde::{
    Serialize,
    Deserialize
};

use crate::util::nonfinitefloat;

/// A control point of a membership function; either coordinate may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(with = "nonfinitefloat")]
    x: f64,
    #[serde(with = "nonfinitefloat")]
    y: f64
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Slope of the segment from `left` to `right`.
    pub fn slope(left: &Point, right: &Point) -> f64 {
        (right.y - left.y) / (right.x - left.x)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_between_neighbours() {
        assert_eq!(Point::slope(&Point::new(0.0, 0.0), &Point::new(2.0, 1.0)), 0.5);
        assert_eq!(Point::slope(&Point::new(1.0, 1.0), &Point::new(2.0, 0.0)), -1.0);
    }

    #[test]
    fn infinite_x_survives_json() {
        let point = Point::new(f64::NEG_INFINITY, 1.0);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"x":"-inf","y":1.0}"#);
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
    }
}
