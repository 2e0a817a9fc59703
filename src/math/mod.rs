/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotates a point around the origin by `angle` radians, counterclockwise.
#[must_use]
pub fn rotated(point: Point2, angle: f64) -> Point2 {
    nalgebra::Rotation2::new(angle) * point
}
