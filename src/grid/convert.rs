//! Conversions among the three coordinate representations and the
//! continuous plane.
//!
//! Axial and cubic convert between each other without any grid context
//! (see the `From` impls on the coordinate types); everything involving
//! offset coordinates or plane points branches on the grid layout. All
//! integer conversions are exact round trips, and every cubic value
//! produced here satisfies the zero-sum invariant by construction.

use crate::coordinates::{Axial, Cubic, Offset};
use crate::math::Point2;

use super::{HexGrid, HexLayout};

impl HexGrid {
    /// Converts a cubic coordinate to offset.
    ///
    /// The shifted-axis component maps through directly (column for flat
    /// layouts, row for pointy layouts); the other is reconstructed with a
    /// parity correction whose sign distinguishes the odd and even variants.
    #[must_use]
    pub fn cubic_to_offset(&self, coord: Cubic) -> Offset {
        match self.layout {
            HexLayout::FlatOdd => {
                Offset::new(coord.x, coord.z + (coord.x - (coord.x & 1)) / 2)
            }
            HexLayout::FlatEven => {
                Offset::new(coord.x, coord.z + (coord.x + (coord.x & 1)) / 2)
            }
            HexLayout::PointyOdd => {
                Offset::new(coord.x + (coord.z - (coord.z & 1)) / 2, coord.z)
            }
            HexLayout::PointyEven => {
                Offset::new(coord.x + (coord.z + (coord.z & 1)) / 2, coord.z)
            }
        }
    }

    /// Converts an offset coordinate to cubic.
    ///
    /// Uses the algebraic inverse of [`Self::cubic_to_offset`]; the middle
    /// component is always derived as `-x - z`, so the zero-sum invariant
    /// cannot be violated.
    #[must_use]
    pub fn offset_to_cubic(&self, coord: Offset) -> Cubic {
        let (x, z) = match self.layout {
            HexLayout::FlatOdd => {
                (coord.col, coord.row - (coord.col - (coord.col & 1)) / 2)
            }
            HexLayout::FlatEven => {
                (coord.col, coord.row - (coord.col + (coord.col & 1)) / 2)
            }
            HexLayout::PointyOdd => {
                (coord.col - (coord.row - (coord.row & 1)) / 2, coord.row)
            }
            HexLayout::PointyEven => {
                (coord.col - (coord.row + (coord.row & 1)) / 2, coord.row)
            }
        };
        Cubic::new(x, -x - z, z)
    }

    /// Converts an axial coordinate to offset.
    #[must_use]
    pub fn axial_to_offset(&self, coord: Axial) -> Offset {
        self.cubic_to_offset(coord.into())
    }

    /// Converts an offset coordinate to axial.
    #[must_use]
    pub fn offset_to_axial(&self, coord: Offset) -> Axial {
        self.offset_to_cubic(coord).into()
    }

    /// Converts a plane point to the cubic coordinate of the hex whose
    /// center lies nearest to it.
    #[must_use]
    pub fn point_to_cubic(&self, point: Point2) -> Cubic {
        let sqrt3 = 3.0_f64.sqrt();
        let radius = self.described_radius;
        let (q, r) = if self.layout.is_flat() {
            (
                point.x * 2.0 / 3.0 / radius,
                (-point.x / 3.0 + sqrt3 / 3.0 * point.y) / radius,
            )
        } else {
            (
                (point.x * sqrt3 / 3.0 - point.y / 3.0) / radius,
                point.y * 2.0 / 3.0 / radius,
            )
        };
        Cubic::from_fractional(q, -q - r, r)
    }

    /// Converts a plane point to the axial coordinate of the nearest hex.
    #[must_use]
    pub fn point_to_axial(&self, point: Point2) -> Axial {
        self.point_to_cubic(point).into()
    }

    /// Converts a plane point to the offset coordinate of the nearest hex.
    #[must_use]
    pub fn point_to_offset(&self, point: Point2) -> Offset {
        self.cubic_to_offset(self.point_to_cubic(point))
    }

    /// Returns the center of the hex at the given offset coordinate.
    ///
    /// The parity shift moves odd columns/rows for the odd variants and
    /// even ones for the even variants, so the sign of the half-step
    /// correction follows the layout. This keeps the result identical to
    /// converting through axial and taking that center.
    #[must_use]
    pub fn offset_center(&self, coord: Offset) -> Point2 {
        match self.layout {
            HexLayout::FlatOdd => Point2::new(
                self.described_radius * 1.5 * f64::from(coord.col),
                self.inscribed_diameter()
                    * (f64::from(coord.row) + 0.5 * f64::from(coord.col & 1)),
            ),
            HexLayout::FlatEven => Point2::new(
                self.described_radius * 1.5 * f64::from(coord.col),
                self.inscribed_diameter()
                    * (f64::from(coord.row) - 0.5 * f64::from(coord.col & 1)),
            ),
            HexLayout::PointyOdd => Point2::new(
                self.inscribed_diameter()
                    * (f64::from(coord.col) + 0.5 * f64::from(coord.row & 1)),
                self.described_radius * 1.5 * f64::from(coord.row),
            ),
            HexLayout::PointyEven => Point2::new(
                self.inscribed_diameter()
                    * (f64::from(coord.col) - 0.5 * f64::from(coord.row & 1)),
                self.described_radius * 1.5 * f64::from(coord.row),
            ),
        }
    }

    /// Returns the center of the hex at the given axial coordinate.
    #[must_use]
    pub fn axial_center(&self, coord: Axial) -> Point2 {
        if self.layout.is_flat() {
            Point2::new(
                self.described_radius * 1.5 * f64::from(coord.q),
                self.inscribed_diameter()
                    * (f64::from(coord.r) + f64::from(coord.q) * 0.5),
            )
        } else {
            Point2::new(
                self.inscribed_diameter()
                    * (f64::from(coord.q) + f64::from(coord.r) * 0.5),
                self.described_radius * 1.5 * f64::from(coord.r),
            )
        }
    }

    /// Returns the center of the hex at the given cubic coordinate.
    #[must_use]
    pub fn cubic_center(&self, coord: Cubic) -> Point2 {
        self.axial_center(coord.into())
    }
}
