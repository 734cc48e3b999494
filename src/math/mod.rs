/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum radial distance for the revolve center pole.
///
/// A true zero-radius ring would weld every center vertex into one point and
/// break per-column UV indexing, so the pole is offset by this amount.
pub const CENTER_EPSILON: f64 = 1e-4;
