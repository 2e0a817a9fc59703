use std::fmt;
use std::ops;

use super::Cubic;

/// Axial (q/r) coordinate of a hex cell.
///
/// Axial addressing drops the redundant third component of [`Cubic`] and is
/// translation-invariant: one fixed set of six direction vectors works for
/// every cell, regardless of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ZERO: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<Cubic> for Axial {
    /// Projects a cubic coordinate onto the (q, r) axes. Exact for every
    /// input; the dropped component is recoverable as `-q - r`.
    fn from(cubic: Cubic) -> Self {
        Self::new(cubic.x, cubic.z)
    }
}

impl ops::Add for Axial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl ops::Sub for Axial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl ops::Add<i32> for Axial {
    type Output = Self;

    fn add(self, rhs: i32) -> Self {
        Self::new(self.q + rhs, self.r + rhs)
    }
}

impl ops::Sub<i32> for Axial {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self {
        Self::new(self.q - rhs, self.r - rhs)
    }
}

impl ops::Mul<i32> for Axial {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.q * rhs, self.r * rhs)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A-[{}:{}]", self.q, self.r)
    }
}
