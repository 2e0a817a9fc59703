//! Adjacency, ring and spiral traversal, distance, and derived corner/edge
//! geometry.
//!
//! Axial and cubic coordinates share one translation-invariant direction
//! table each, ordered from the east neighbor. Offset coordinates need four
//! tables: which one applies depends on the orientation and on whether the
//! queried cell sits on a shifted column/row, so the table is picked per
//! query from the parity of the relevant axis. All four tables are derived
//! from the axial table through the offset conversions, which keeps the
//! three representations in exact agreement.

use crate::coordinates::{Axial, Coord, Cubic, Offset};
use crate::error::{Result, TopologyError};
use crate::math::Point2;

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use super::{HexGrid, HexLayout};

const AXIAL_DIRECTIONS: [Axial; 6] = [
    Axial::new(1, 0),
    Axial::new(1, -1),
    Axial::new(0, -1),
    Axial::new(-1, 0),
    Axial::new(-1, 1),
    Axial::new(0, 1),
];

const CUBIC_DIRECTIONS: [Cubic; 6] = [
    Cubic::new(1, -1, 0),
    Cubic::new(1, 0, -1),
    Cubic::new(0, 1, -1),
    Cubic::new(-1, 1, 0),
    Cubic::new(-1, 0, 1),
    Cubic::new(0, -1, 1),
];

const FLAT_UNSHIFTED: [Offset; 6] = [
    Offset::new(1, 0),
    Offset::new(1, -1),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(0, 1),
];

const FLAT_SHIFTED: [Offset; 6] = [
    Offset::new(1, 1),
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
];

const POINTY_UNSHIFTED: [Offset; 6] = [
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
];

const POINTY_SHIFTED: [Offset; 6] = [
    Offset::new(1, 0),
    Offset::new(1, -1),
    Offset::new(0, -1),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(1, 1),
];

/// Normalizes a neighbor or corner index into `[0, 6)` by floor modulo,
/// so negative indices wrap (`-1` becomes `5`).
#[allow(clippy::cast_sign_loss)]
fn direction_index(index: i32) -> usize {
    index.rem_euclid(6) as usize
}

/// Picks the offset direction table for the cell's parity under the layout.
fn offset_directions(layout: HexLayout, coord: Offset) -> &'static [Offset; 6] {
    let shifted = match layout {
        HexLayout::FlatOdd => coord.col & 1 == 1,
        HexLayout::FlatEven => coord.col & 1 == 0,
        HexLayout::PointyOdd => coord.row & 1 == 1,
        HexLayout::PointyEven => coord.row & 1 == 0,
    };
    match (layout.is_flat(), shifted) {
        (true, false) => &FLAT_UNSHIFTED,
        (true, true) => &FLAT_SHIFTED,
        (false, false) => &POINTY_UNSHIFTED,
        (false, true) => &POINTY_SHIFTED,
    }
}

impl Coord for Offset {
    fn to_cubic(self, grid: &HexGrid) -> Cubic {
        grid.offset_to_cubic(self)
    }

    fn from_cubic(cubic: Cubic, grid: &HexGrid) -> Self {
        grid.cubic_to_offset(cubic)
    }

    fn neighbor(self, grid: &HexGrid, index: i32) -> Self {
        self + offset_directions(grid.layout(), self)[direction_index(index)]
    }

    fn center(self, grid: &HexGrid) -> Point2 {
        grid.offset_center(self)
    }
}

impl Coord for Axial {
    fn to_cubic(self, _grid: &HexGrid) -> Cubic {
        self.into()
    }

    fn from_cubic(cubic: Cubic, _grid: &HexGrid) -> Self {
        cubic.into()
    }

    fn neighbor(self, _grid: &HexGrid, index: i32) -> Self {
        self + AXIAL_DIRECTIONS[direction_index(index)]
    }

    fn center(self, grid: &HexGrid) -> Point2 {
        grid.axial_center(self)
    }
}

impl Coord for Cubic {
    fn to_cubic(self, _grid: &HexGrid) -> Cubic {
        self
    }

    fn from_cubic(cubic: Cubic, _grid: &HexGrid) -> Self {
        cubic
    }

    fn neighbor(self, _grid: &HexGrid, index: i32) -> Self {
        self + CUBIC_DIRECTIONS[direction_index(index)]
    }

    fn center(self, grid: &HexGrid) -> Point2 {
        grid.cubic_center(self)
    }
}

impl HexGrid {
    /// Returns the adjacent cell at the given index; indices outside
    /// `[0, 6)` wrap by floor modulo.
    #[must_use]
    pub fn neighbor<C: Coord>(&self, coord: C, index: i32) -> C {
        coord.neighbor(self, index)
    }

    /// Returns all six adjacent cells, in index order.
    #[must_use]
    pub fn neighbors<C: Coord>(&self, coord: C) -> [C; Self::EDGE_COUNT] {
        let mut result = [coord; Self::EDGE_COUNT];
        for (index, slot) in (0_i32..).zip(result.iter_mut()) {
            *slot = coord.neighbor(self, index);
        }
        result
    }

    /// Whether the two cells share an edge.
    #[must_use]
    pub fn is_neighbors<C: Coord>(&self, coord1: C, coord2: C) -> bool {
        self.neighbors(coord1).contains(&coord2)
    }

    /// Returns the direction index from `center` to `neighbor`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotAdjacent`] if the cells do not share an
    /// edge.
    pub fn neighbor_index<C: Coord>(&self, center: C, neighbor: C) -> Result<usize> {
        self.neighbors(center)
            .iter()
            .position(|&current| current == neighbor)
            .ok_or_else(|| {
                TopologyError::NotAdjacent {
                    center: center.to_string(),
                    other: neighbor.to_string(),
                }
                .into()
            })
    }

    /// Returns the ring of cells at exactly `radius` steps from `center`,
    /// in traversal order.
    ///
    /// Radius 0 yields just the center. Otherwise the walk first moves
    /// `radius` steps in direction 4 to reach a corner of the ring, then
    /// covers each of the six sides with `radius` steps, emitting the
    /// current cell before every step: exactly `6 * radius` distinct cells.
    #[must_use]
    pub fn ring<C: Coord>(&self, center: C, radius: u32) -> Vec<C> {
        if radius == 0 {
            return vec![center];
        }

        let mut cells = Vec::with_capacity(Self::EDGE_COUNT * radius as usize);
        let mut current = center;
        for _ in 0..radius {
            current = current.neighbor(self, 4);
        }
        for side in 0..6 {
            for _ in 0..radius {
                cells.push(current);
                current = current.neighbor(self, side);
            }
        }
        cells
    }

    /// Returns the disk of cells strictly closer than `radius` to `center`:
    /// the concatenation of rings `0, 1, ..., radius - 1`.
    #[must_use]
    pub fn spiral<C: Coord>(&self, center: C, radius: u32) -> Vec<C> {
        let capacity = if radius == 0 {
            0
        } else {
            (3 * radius * (radius - 1) + 1) as usize
        };
        let mut cells = Vec::with_capacity(capacity);
        for ring_radius in 0..radius {
            cells.extend(self.ring(center, ring_radius));
        }
        cells
    }

    /// Minimum number of single-step hops between two cells.
    #[must_use]
    pub fn distance<C: Coord>(&self, coord1: C, coord2: C) -> u32 {
        coord1.to_cubic(self).distance_to(coord2.to_cubic(self))
    }

    /// Returns the center of the given cell on the continuous plane.
    #[must_use]
    pub fn center<C: Coord>(&self, coord: C) -> Point2 {
        coord.center(self)
    }

    /// Returns the corner point of a cell at the given index; indices wrap
    /// by floor modulo like neighbor indices.
    ///
    /// Corners sit at the described radius from the center, 60 degrees
    /// apart, rotated back 30 degrees for pointy-top layouts so that corner
    /// alignment matches the orientation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn corner<C: Coord>(&self, coord: C, index: i32) -> Point2 {
        let mut angle = FRAC_PI_3 * direction_index(index) as f64;
        if self.layout().is_pointy() {
            angle -= FRAC_PI_6;
        }
        let center = coord.center(self);
        Point2::new(
            center.x + self.described_radius() * angle.cos(),
            center.y + self.described_radius() * angle.sin(),
        )
    }

    /// Returns the midpoint of the edge shared by two adjacent cells, which
    /// is the arithmetic mean of their centers.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotAdjacent`] if the cells do not share an
    /// edge.
    pub fn edge_midpoint<C: Coord>(&self, coord1: C, coord2: C) -> Result<Point2> {
        if !self.is_neighbors(coord1, coord2) {
            return Err(TopologyError::NotAdjacent {
                center: coord1.to_string(),
                other: coord2.to_string(),
            }
            .into());
        }

        let c1 = coord1.center(self);
        let c2 = coord2.center(self);
        Ok(Point2::new((c1.x + c2.x) / 2.0, (c1.y + c2.y) / 2.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::{HashSet, VecDeque};

    const SAMPLES: [i32; 5] = [-13, -8, 0, 15, 22];

    fn grids() -> impl Iterator<Item = HexGrid> {
        HexLayout::ALL
            .into_iter()
            .map(|layout| HexGrid::new(layout, 0.5))
    }

    #[test]
    fn scenario_pointy_odd_first_neighbor() {
        let grid = HexGrid::new(HexLayout::PointyOdd, 0.5);
        assert_relative_eq!(grid.described_radius(), 0.5774, epsilon = 1e-4);

        let neighbor = grid.neighbor(Offset::ZERO, 0);
        assert_eq!(neighbor, Offset::new(1, 0));

        let through_axial = grid.axial_to_offset(grid.offset_to_axial(neighbor));
        assert_eq!(through_axial, Offset::new(1, 0));
    }

    #[test]
    fn neighbor_index_wraps_by_floor_modulo() {
        for grid in grids() {
            let coord = Offset::new(3, -5);
            assert_eq!(grid.neighbor(coord, -1), grid.neighbor(coord, 5));
            assert_eq!(grid.neighbor(coord, 6), grid.neighbor(coord, 0));
            assert_eq!(grid.neighbor(coord, -7), grid.neighbor(coord, 5));
        }
    }

    #[test]
    fn every_neighbor_is_adjacent() {
        for grid in grids() {
            for col in SAMPLES {
                for row in SAMPLES {
                    let offset = Offset::new(col, row);
                    let axial = grid.offset_to_axial(offset);
                    let cubic = grid.offset_to_cubic(offset);

                    for index in -1..=6 {
                        let o = grid.neighbor(offset, index);
                        let a = grid.neighbor(axial, index);
                        let c = grid.neighbor(cubic, index);

                        assert!(c.is_valid(), "invalid {c}");
                        assert!(grid.is_neighbors(offset, o), "{offset} vs {o}");
                        assert!(grid.is_neighbors(axial, a), "{axial} vs {a}");
                        assert!(grid.is_neighbors(cubic, c), "{cubic} vs {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn neighbor_agrees_across_representations() {
        for grid in grids() {
            for col in SAMPLES {
                for row in SAMPLES {
                    let offset = Offset::new(col, row);
                    let axial = grid.offset_to_axial(offset);
                    let cubic = grid.offset_to_cubic(offset);

                    for index in -1..=6 {
                        let o = grid.neighbor(offset, index);
                        let from_axial = grid.axial_to_offset(grid.neighbor(axial, index));
                        let from_cubic = grid.cubic_to_offset(grid.neighbor(cubic, index));

                        assert_eq!(o, from_axial, "axial path at index {index}");
                        assert_eq!(o, from_cubic, "cubic path at index {index}");
                    }
                }
            }
        }
    }

    #[test]
    fn neighbor_index_inverts_neighbor() {
        for grid in grids() {
            let center = Offset::new(-8, 15);
            for index in 0..6 {
                let neighbor = grid.neighbor(center, index);
                let found = grid.neighbor_index(center, neighbor).unwrap();
                assert_eq!(found, usize::try_from(index).unwrap());
            }
        }
    }

    #[test]
    fn neighbor_index_rejects_non_adjacent() {
        let grid = HexGrid::new(HexLayout::FlatEven, 1.0);
        let result = grid.neighbor_index(Offset::ZERO, Offset::new(4, 4));
        assert!(result.is_err());
    }

    #[test]
    fn ring_cardinality_and_distinctness() {
        for grid in grids() {
            let center = Axial::new(2, -1);
            assert_eq!(grid.ring(center, 0), vec![center]);

            for radius in 1..=5 {
                let ring = grid.ring(center, radius);
                assert_eq!(ring.len(), 6 * radius as usize);

                let distinct: HashSet<Axial> = ring.iter().copied().collect();
                assert_eq!(distinct.len(), ring.len(), "duplicates at radius {radius}");

                for cell in &ring {
                    assert_eq!(grid.distance(center, *cell), radius);
                }
            }
        }
    }

    #[test]
    fn offset_ring_matches_axial_ring() {
        for grid in grids() {
            let center = Offset::new(1, 2);
            let from_offset = grid.ring(center, 3);
            let from_axial: Vec<Offset> = grid
                .ring(grid.offset_to_axial(center), 3)
                .into_iter()
                .map(|cell| grid.axial_to_offset(cell))
                .collect();
            assert_eq!(from_offset, from_axial);
        }
    }

    #[test]
    fn spiral_is_concatenated_rings() {
        for grid in grids() {
            let center = Cubic::ZERO;
            assert!(grid.spiral(center, 0).is_empty());

            for radius in 1..=4_u32 {
                let disk = grid.spiral(center, radius);
                assert_eq!(disk.len() as u32, 3 * radius * (radius - 1) + 1);

                // Every cell lies strictly inside the excluded outer ring.
                for cell in &disk {
                    assert!(grid.distance(center, *cell) < radius);
                }

                let distinct: HashSet<Cubic> = disk.iter().copied().collect();
                assert_eq!(distinct.len(), disk.len());
            }
        }
    }

    /// Breadth-first hop count over repeated neighbor expansion.
    fn hops(grid: &HexGrid, from: Axial, to: Axial) -> u32 {
        let mut visited: HashSet<Axial> = HashSet::new();
        let mut queue: VecDeque<(Axial, u32)> = VecDeque::new();
        visited.insert(from);
        queue.push_back((from, 0));
        while let Some((cell, depth)) = queue.pop_front() {
            if cell == to {
                return depth;
            }
            for next in grid.neighbors(cell) {
                if visited.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
        unreachable!("grid is connected");
    }

    #[test]
    fn distance_equals_minimum_hop_count() {
        let grid = HexGrid::new(HexLayout::PointyOdd, 0.5);
        let pairs = [
            (Axial::ZERO, Axial::ZERO),
            (Axial::ZERO, Axial::new(1, 0)),
            (Axial::ZERO, Axial::new(3, -1)),
            (Axial::new(-2, 1), Axial::new(2, -3)),
            (Axial::new(4, -4), Axial::new(-1, 2)),
        ];
        for (from, to) in pairs {
            assert_eq!(grid.distance(from, to), hops(&grid, from, to), "{from} -> {to}");
        }
    }

    #[test]
    fn distance_is_representation_independent() {
        for grid in grids() {
            let a = Offset::new(-8, 15);
            let b = Offset::new(22, -13);
            let expected = grid.distance(a, b);
            assert_eq!(
                grid.distance(grid.offset_to_axial(a), grid.offset_to_axial(b)),
                expected
            );
            assert_eq!(
                grid.distance(grid.offset_to_cubic(a), grid.offset_to_cubic(b)),
                expected
            );
        }
    }

    #[test]
    fn corners_sit_at_described_radius() {
        for grid in grids() {
            let coord = Axial::new(3, -2);
            let center = grid.center(coord);
            for index in -1..=6 {
                let corner = grid.corner(coord, index);
                let dist = ((corner.x - center.x).powi(2) + (corner.y - center.y).powi(2)).sqrt();
                assert_relative_eq!(dist, grid.described_radius(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn corner_indices_wrap() {
        let grid = HexGrid::new(HexLayout::FlatOdd, 1.0);
        let coord = Offset::ZERO;
        let wrapped = grid.corner(coord, -1);
        let direct = grid.corner(coord, 5);
        assert_relative_eq!(wrapped.x, direct.x);
        assert_relative_eq!(wrapped.y, direct.y);
    }

    #[test]
    fn first_corner_orientation() {
        // Flat-top: corner 0 due east of the center. Pointy-top: rotated
        // back 30 degrees below the east axis.
        let flat = HexGrid::new(HexLayout::FlatOdd, 0.5);
        let corner = flat.corner(Offset::ZERO, 0);
        assert_relative_eq!(corner.x, flat.described_radius(), epsilon = 1e-9);
        assert_relative_eq!(corner.y, 0.0, epsilon = 1e-9);

        let pointy = HexGrid::new(HexLayout::PointyOdd, 0.5);
        let corner = pointy.corner(Offset::ZERO, 0);
        assert_relative_eq!(
            corner.x,
            pointy.described_radius() * (-FRAC_PI_6).cos(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            corner.y,
            pointy.described_radius() * (-FRAC_PI_6).sin(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn edge_midpoint_is_mean_of_centers() {
        for grid in grids() {
            let a = Offset::new(2, 2);
            let b = grid.neighbor(a, 1);
            let midpoint = grid.edge_midpoint(a, b).unwrap();
            let ca = grid.center(a);
            let cb = grid.center(b);
            assert_relative_eq!(midpoint.x, (ca.x + cb.x) / 2.0);
            assert_relative_eq!(midpoint.y, (ca.y + cb.y) / 2.0);

            // The shared edge midpoint is an inscribed radius from both.
            let dist = ((midpoint.x - ca.x).powi(2) + (midpoint.y - ca.y).powi(2)).sqrt();
            assert_relative_eq!(dist, grid.inscribed_radius(), epsilon = 1e-9);
        }
    }

    #[test]
    fn edge_midpoint_rejects_non_adjacent() {
        let grid = HexGrid::new(HexLayout::PointyEven, 0.5);
        assert!(grid.edge_midpoint(Axial::ZERO, Axial::new(2, 0)).is_err());
        assert!(grid.edge_midpoint(Axial::ZERO, Axial::ZERO).is_err());
    }
}
