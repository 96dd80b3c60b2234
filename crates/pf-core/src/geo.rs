//! Planar coordinates for the clinic floor layout.
//!
//! The layout is abstract (units are "layout units", not metres); only
//! Euclidean distance and straight-line stepping are needed.

/// A point on the clinic floor plan.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move at most `max_step` towards `target`.
    ///
    /// Returns the new position and whether `target` was reached (distance
    /// `<= max_step`, in which case the position snaps to `target`).
    pub fn step_toward(self, target: Point, max_step: f64) -> (Point, bool) {
        let d = self.distance(target);
        if d <= max_step {
            return (target, true);
        }
        let f = max_step / d;
        (
            Point::new(self.x + (target.x - self.x) * f, self.y + (target.y - self.y) * f),
            false,
        )
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
