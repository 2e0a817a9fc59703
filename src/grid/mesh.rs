//! Triangulated disk meshes for hexagonal cells.
//!
//! A single cell is tessellated as a column sweep over an equilateral point
//! lattice: the sweep runs from the leftmost column to the rightmost, each
//! column holds `2 * subdivide + 1 - |column|` points, and adjacent columns
//! are stitched with left- and right-facing triangles. The resulting disk is
//! rotated so its outer boundary matches the cell orientation, then placed
//! at the cell center.
//!
//! Output goes through the [`MeshSink`] trait so callers can write straight
//! into GPU-ready buffers; [`MeshBuffers`] is the plain in-memory sink.

use crate::coordinates::Coord;
use crate::math::{self, Point2, Vector2};

use super::HexGrid;

/// Exact vertex and index totals for a mesh, computed ahead of emission so
/// sinks can allocate once.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MeshCounts {
    pub vertices: usize,
    pub indices: usize,
}

/// Receiver for triangulation output.
///
/// `set_vertex` and `set_index` are called exactly once per slot, in
/// unspecified order, with positions below the totals reported by
/// [`HexGrid::mesh_counts`].
pub trait MeshSink {
    fn set_vertex(&mut self, index: usize, point: Point2);
    fn set_index(&mut self, index: usize, vertex: usize);
}

/// Grows a `Vec`-backed vertex and index store to use as a [`MeshSink`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<Point2>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Pre-sizes both buffers to the given counts, filled with zeroes.
    #[must_use]
    pub fn with_counts(counts: MeshCounts) -> Self {
        Self {
            vertices: vec![Point2::origin(); counts.vertices],
            indices: vec![0; counts.indices],
        }
    }
}

impl MeshSink for MeshBuffers {
    fn set_vertex(&mut self, index: usize, point: Point2) {
        self.vertices[index] = point;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn set_index(&mut self, index: usize, vertex: usize) {
        self.indices[index] = vertex as u32;
    }
}

/// Shifts a cell mesh into place within a batch: vertices are translated to
/// the cell center and index values rebased past the preceding cells.
struct TranslatedSink<'a, S: MeshSink> {
    inner: &'a mut S,
    vertex_base: usize,
    index_base: usize,
    translation: Vector2,
}

impl<S: MeshSink> MeshSink for TranslatedSink<'_, S> {
    fn set_vertex(&mut self, index: usize, point: Point2) {
        self.inner
            .set_vertex(self.vertex_base + index, point + self.translation);
    }

    fn set_index(&mut self, index: usize, vertex: usize) {
        self.inner
            .set_index(self.index_base + index, self.vertex_base + vertex);
    }
}

/// Vertex count of one cell disk at the given subdivision level.
fn cell_vertices(subdivide: u32) -> usize {
    let s = subdivide as usize;
    1 + 3 * s * (s + 1)
}

/// Index count of one cell disk at the given subdivision level.
fn cell_indices(subdivide: u32) -> usize {
    let s = subdivide as usize;
    18 * s * s
}

impl HexGrid {
    /// Totals for a batch of `hex_count` cells triangulated at `subdivide`.
    #[must_use]
    pub fn mesh_counts(&self, hex_count: usize, subdivide: u32) -> MeshCounts {
        MeshCounts {
            vertices: hex_count * cell_vertices(subdivide),
            indices: hex_count * cell_indices(subdivide),
        }
    }

    /// Triangulates a single cell disk centered on the origin.
    ///
    /// `subdivide` is the number of lattice steps from the center to the
    /// boundary; 0 degenerates to the lone center vertex with no triangles.
    /// Triangles are emitted with counter-clockwise winding.
    #[allow(clippy::cast_precision_loss)]
    pub fn triangulate<S: MeshSink>(&self, subdivide: u32, sink: &mut S) {
        if subdivide == 0 {
            sink.set_vertex(0, Point2::origin());
            return;
        }

        let s = i64::from(subdivide);
        let sin_60 = std::f64::consts::FRAC_PI_3.sin();
        let inv_tan_60 = 1.0 / std::f64::consts::FRAC_PI_3.tan();
        let step = self.described_radius() / f64::from(subdivide);
        let angle = self.angle_to_first_neighbor();

        let mut vertex_index = 0_i64;
        let mut index_index = 0_usize;
        let mut prev_col_points = 0_i64;

        // The lattice is swept column by column from left to right; each
        // column holds `2s + 1 - |it_c|` points stacked bottom to top.
        for it_c in -s..=s {
            let x = sin_60 * step * it_c as f64;
            let col_points = 2 * s + 1 - it_c.abs();

            // Columns left of the center are clipped from below, so their
            // bottom row starts higher; triangle stitching compensates with
            // a one-slot pad towards the longer neighboring column.
            let row_min = if it_c < 0 { -s - it_c } else { -s };
            let pad_left = i64::from(it_c < 0);
            let pad_right = i64::from(it_c > 0);

            for it_r in row_min..row_min + col_points {
                let z = inv_tan_60 * x + step * it_r as f64;
                let point = math::rotated(Point2::new(x, z), angle);
                sink.set_vertex(cast_slot(vertex_index), point);

                // Every vertex but the top of its column spawns up to two
                // triangles towards the adjacent columns.
                if it_r + 1 < row_min + col_points {
                    if it_c < s {
                        emit_triangle(
                            sink,
                            &mut index_index,
                            vertex_index + col_points + pad_left,
                            vertex_index + 1,
                            vertex_index,
                        );
                    }
                    if it_c > -s {
                        emit_triangle(
                            sink,
                            &mut index_index,
                            vertex_index - prev_col_points + pad_right,
                            vertex_index,
                            vertex_index + 1,
                        );
                    }
                }

                vertex_index += 1;
            }
            prev_col_points = col_points;
        }
    }

    /// Triangulates a batch of cells into one contiguous sink: cell `k`
    /// occupies the `k`-th block of per-cell vertex and index slots, with
    /// vertices translated to the cell center.
    pub fn triangulate_batch<C: Coord, S: MeshSink>(
        &self,
        cells: &[C],
        subdivide: u32,
        sink: &mut S,
    ) {
        let vertices_per_cell = cell_vertices(subdivide);
        let indices_per_cell = cell_indices(subdivide);

        for (block, cell) in cells.iter().enumerate() {
            let mut translated = TranslatedSink {
                inner: &mut *sink,
                vertex_base: block * vertices_per_cell,
                index_base: block * indices_per_cell,
                translation: cell.center(self).coords,
            };
            self.triangulate(subdivide, &mut translated);
        }
    }
}

fn emit_triangle<S: MeshSink>(sink: &mut S, at: &mut usize, a: i64, b: i64, c: i64) {
    sink.set_index(*at, cast_slot(a));
    sink.set_index(*at + 1, cast_slot(b));
    sink.set_index(*at + 2, cast_slot(c));
    *at += 3;
}

/// Emission only ever produces non-negative slot positions.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn cast_slot(value: i64) -> usize {
    value as usize
}
