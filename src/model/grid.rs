use crate::math::{Frame, Point3};

/// A grid point as read from the input deck.
///
/// The position is expressed in the point's own coordinate frame; `None`
/// means the basic frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    /// Position in the grid's coordinate frame.
    pub position: Point3,
    /// Placement of that frame in the basic frame.
    pub frame: Option<Frame>,
}

impl GridPoint {
    /// Creates a grid point in the basic frame.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            frame: None,
        }
    }

    /// Creates a grid point in a local frame.
    #[must_use]
    pub fn in_frame(position: Point3, frame: Frame) -> Self {
        Self {
            position,
            frame: Some(frame),
        }
    }

    /// Position in the basic frame.
    #[must_use]
    pub fn to_global(&self) -> Point3 {
        match &self.frame {
            Some(frame) => frame.transform_point(&self.position),
            None => self.position,
        }
    }
}

impl From<Point3> for GridPoint {
    fn from(position: Point3) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn basic_frame_is_identity() {
        let g = GridPoint::new(Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(g.to_global(), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn local_frame_is_applied() {
        // Frame rotated 90 degrees about Z and moved to (10, 0, 0).
        let frame = Frame::new(Vector3::new(10.0, 0.0, 0.0), Vector3::z() * FRAC_PI_2);
        let g = GridPoint::in_frame(Point3::new(1.0, 0.0, 0.0), frame);
        assert_relative_eq!(g.to_global(), Point3::new(10.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
