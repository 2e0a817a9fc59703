pub mod axial;
pub mod cubic;
pub mod offset;

pub use axial::Axial;
pub use cubic::Cubic;
pub use offset::Offset;

use std::fmt;
use std::hash::Hash;

use crate::grid::HexGrid;
use crate::math::Point2;

/// Common interface over the three hex coordinate representations.
///
/// Every grid operation that is representation-independent (neighbors,
/// rings, distance, corner and edge geometry) is generic over this trait,
/// so callers stay in whichever addressing scheme suits them. Conversions
/// are grid-parametrized because offset addressing depends on the layout.
///
/// Implementations must agree with each other: the neighbor of a cell at a
/// given index is the same physical cell no matter which representation the
/// query went through.
pub trait Coord: Copy + Eq + Hash + fmt::Display {
    /// Converts this coordinate to cubic under the given grid layout.
    fn to_cubic(self, grid: &HexGrid) -> Cubic;

    /// Converts a cubic coordinate back to this representation.
    fn from_cubic(cubic: Cubic, grid: &HexGrid) -> Self;

    /// Returns the adjacent cell at `index`, normalized into `[0, 6)` by
    /// floor modulo (so `-1` wraps to `5`).
    fn neighbor(self, grid: &HexGrid, index: i32) -> Self;

    /// Returns the center of this cell on the continuous plane.
    fn center(self, grid: &HexGrid) -> Point2;
}
