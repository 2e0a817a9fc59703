mod convert;
mod mesh;
mod topology;

pub use mesh::{MeshBuffers, MeshCounts, MeshSink};

use std::f64::consts::{FRAC_PI_6, PI};

/// The typical layouts and orientations for hex grids.
///
/// A layout pairs a hex orientation (flat-top or pointy-top) with the parity
/// of the shifted axis: flat layouts shift alternating columns vertically,
/// pointy layouts shift alternating rows horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexLayout {
    /// Pointy-top orientation, odd rows shifted (odd-r).
    PointyOdd,
    /// Pointy-top orientation, even rows shifted (even-r).
    PointyEven,
    /// Flat-top orientation, odd columns shifted (odd-q).
    FlatOdd,
    /// Flat-top orientation, even columns shifted (even-q).
    FlatEven,
}

impl HexLayout {
    /// All four layouts, for exhaustive iteration in callers and tests.
    pub const ALL: [Self; 4] = [
        Self::PointyOdd,
        Self::PointyEven,
        Self::FlatOdd,
        Self::FlatEven,
    ];

    /// Whether this layout uses pointy-top orientation.
    #[must_use]
    pub const fn is_pointy(self) -> bool {
        matches!(self, Self::PointyOdd | Self::PointyEven)
    }

    /// Whether this layout uses flat-top orientation.
    #[must_use]
    pub const fn is_flat(self) -> bool {
        !self.is_pointy()
    }
}

/// Geometry engine for an infinite hexagonal grid.
///
/// The grid is a cheap immutable value: a layout plus the inscribed radius,
/// with the described radius derived at construction. Every query is a pure
/// function, so one grid can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGrid {
    layout: HexLayout,
    inscribed_radius: f64,
    described_radius: f64,
}

impl HexGrid {
    /// Number of edges (and neighbors, and corners) of a hex cell.
    pub const EDGE_COUNT: usize = 6;

    /// Creates a grid with the given layout and inscribed radius
    /// (center-to-edge-midpoint distance).
    #[must_use]
    pub fn new(layout: HexLayout, inscribed_radius: f64) -> Self {
        Self {
            layout,
            inscribed_radius,
            described_radius: inscribed_radius / (PI / 6.0).cos(),
        }
    }

    /// Orientation and layout of this grid.
    #[must_use]
    pub const fn layout(&self) -> HexLayout {
        self.layout
    }

    /// Distance from a cell center to the midpoint of one of its edges.
    #[must_use]
    pub const fn inscribed_radius(&self) -> f64 {
        self.inscribed_radius
    }

    /// Distance from a cell center to one of its corners.
    #[must_use]
    pub const fn described_radius(&self) -> f64 {
        self.described_radius
    }

    #[must_use]
    pub fn inscribed_diameter(&self) -> f64 {
        self.inscribed_radius * 2.0
    }

    #[must_use]
    pub fn described_diameter(&self) -> f64 {
        self.described_radius * 2.0
    }

    /// Length of one hex edge, equal to the described radius.
    #[must_use]
    pub const fn side_length(&self) -> f64 {
        self.described_radius
    }

    /// Distance along x between a cell center and its right-hand neighbor.
    #[must_use]
    pub fn horizontal_offset(&self) -> f64 {
        if self.layout.is_flat() {
            self.described_radius * 1.5
        } else {
            self.inscribed_radius * 2.0
        }
    }

    /// Distance along y between a cell center and its upward neighbor.
    #[must_use]
    pub fn vertical_offset(&self) -> f64 {
        if self.layout.is_flat() {
            self.inscribed_radius * 2.0
        } else {
            self.described_radius * 1.5
        }
    }

    /// Angle in radians from the positive x axis to the line connecting a
    /// cell center with the center of its first neighbor.
    #[must_use]
    pub fn angle_to_first_neighbor(&self) -> f64 {
        if self.layout.is_flat() {
            FRAC_PI_6
        } else {
            0.0
        }
    }
}
