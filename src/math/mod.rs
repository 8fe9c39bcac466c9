/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid placement of a local coordinate frame in the basic frame.
pub type Frame = nalgebra::Isometry3<f64>;
