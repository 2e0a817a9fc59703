pub mod coordinates;
pub mod error;
pub mod grid;
pub mod math;

pub use coordinates::{Axial, Coord, Cubic, Offset};
pub use error::{HexalisError, Result};
pub use grid::{HexGrid, HexLayout, MeshBuffers, MeshCounts, MeshSink};
