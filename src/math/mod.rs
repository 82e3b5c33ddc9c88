/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix for 2D.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Builds a homogeneous translation by `offset`.
#[must_use]
pub fn translation(offset: &Vector2) -> Matrix3 {
    Matrix3::new_translation(offset)
}

/// Applies a homogeneous transform to a point.
#[must_use]
pub fn transform_point(matrix: &Matrix3, point: &Point2) -> Point2 {
    matrix.transform_point(point)
}
