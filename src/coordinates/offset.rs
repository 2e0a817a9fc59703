use std::fmt;
use std::ops;

/// Offset (col/row) coordinate of a hex cell.
///
/// Offset addressing is the familiar rectangular row/column scheme. It is
/// *not* translation-invariant: which cells count as neighbors depends on
/// the parity of the shifted axis and on the grid layout, so all non-trivial
/// operations on `Offset` go through [`HexGrid`](crate::grid::HexGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    pub const ZERO: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns this coordinate shifted by the given column/row deltas.
    #[must_use]
    pub const fn translated(self, cols: i32, rows: i32) -> Self {
        Self::new(self.col + cols, self.row + rows)
    }

    /// Clamps both components of `coord` into the `[min, max]` box.
    #[must_use]
    pub fn clamp(coord: Self, min: Self, max: Self) -> Self {
        Self::new(
            coord.col.clamp(min.col, max.col),
            coord.row.clamp(min.row, max.row),
        )
    }
}

impl ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl ops::Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl ops::Add<i32> for Offset {
    type Output = Self;

    fn add(self, rhs: i32) -> Self {
        Self::new(self.col + rhs, self.row + rhs)
    }
}

impl ops::Sub<i32> for Offset {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self {
        Self::new(self.col - rhs, self.row - rhs)
    }
}

impl ops::Mul<i32> for Offset {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.col * rhs, self.row * rhs)
    }
}

impl ops::Div<i32> for Offset {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self::new(self.col / rhs, self.row / rhs)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O-[{}:{}]", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_arithmetic() {
        let a = Offset::new(2, -3);
        let b = Offset::new(-1, 5);
        assert_eq!(a + b, Offset::new(1, 2));
        assert_eq!(a - b, Offset::new(3, -8));
        assert_eq!(a * 2, Offset::new(4, -6));
        assert_eq!(Offset::new(4, -6) / 2, Offset::new(2, -3));
    }

    #[test]
    fn scalar_shift() {
        let a = Offset::new(2, -3);
        assert_eq!(a + 1, Offset::new(3, -2));
        assert_eq!(a - 1, Offset::new(1, -4));
        assert_eq!(a.translated(-2, 3), Offset::ZERO);
    }

    #[test]
    fn clamp_stays_in_box() {
        let min = Offset::new(-2, -2);
        let max = Offset::new(2, 2);
        assert_eq!(Offset::clamp(Offset::new(5, 0), min, max), Offset::new(2, 0));
        assert_eq!(
            Offset::clamp(Offset::new(-7, 9), min, max),
            Offset::new(-2, 2)
        );
        assert_eq!(
            Offset::clamp(Offset::new(1, -1), min, max),
            Offset::new(1, -1)
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(Offset::new(-4, 7).to_string(), "O-[-4:7]");
    }
}
