use std::fmt;
use std::ops;

use super::Axial;

/// Cubic (x/y/z) coordinate of a hex cell.
///
/// Cubic addressing carries a redundant third component constrained by
/// `x + y + z == 0`. The redundancy pays for itself: distance and rotation
/// become simple component arithmetic. Every conversion in this crate
/// produces valid triples by construction; [`Cubic::new`] itself does not
/// check, matching the raw constructor of the other coordinate types, and
/// [`Cubic::is_valid`] exposes the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubic {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cubic {
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Rounds a fractional cubic triple to the nearest valid coordinate.
    ///
    /// All three components are rounded independently; the one with the
    /// largest rounding error is then recomputed as the negated sum of the
    /// other two, which restores `x + y + z == 0` while minimizing total
    /// deviation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_fractional(x: f64, y: f64, z: f64) -> Self {
        let mut rx = x.round() as i32;
        let mut ry = y.round() as i32;
        let mut rz = z.round() as i32;

        let x_diff = (f64::from(rx) - x).abs();
        let y_diff = (f64::from(ry) - y).abs();
        let z_diff = (f64::from(rz) - z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        Self::new(rx, ry, rz)
    }

    /// Whether the zero-sum invariant holds for this triple.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.x + self.y + self.z == 0
    }

    /// Rotates this coordinate 60 degrees clockwise around the origin cell.
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self::new(-self.y, -self.z, -self.x)
    }

    /// Rotates this coordinate clockwise by `times` sixths of a full turn.
    #[must_use]
    pub fn rotated_right_by(self, times: u32) -> Self {
        let mut current = self;
        for _ in 0..times % 6 {
            current = current.rotated_right();
        }
        current
    }

    /// Minimum number of single-step neighbor hops between two cells.
    #[must_use]
    pub fn distance_to(self, other: Self) -> u32 {
        let delta = self - other;
        (delta.x.unsigned_abs() + delta.y.unsigned_abs() + delta.z.unsigned_abs()) / 2
    }
}

impl From<Axial> for Cubic {
    /// Lifts an axial coordinate to the cubic plane; the derived middle
    /// component makes the zero-sum invariant hold by construction.
    fn from(axial: Axial) -> Self {
        Self::new(axial.q, -axial.q - axial.r, axial.r)
    }
}

impl ops::Add for Cubic {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub for Cubic {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Add<i32> for Cubic {
    type Output = Self;

    fn add(self, rhs: i32) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl ops::Sub<i32> for Cubic {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl ops::Mul<i32> for Cubic {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "C-[{}:{}:{}]", self.x, self.y, self.z)
        } else {
            write!(f, "C-[invalid {}:{}:{}]", self.x, self.y, self.z)
        }
    }
}
