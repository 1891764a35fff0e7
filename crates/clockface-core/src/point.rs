//! Plain 2-D point used by the geometry layer.

use std::fmt::{self, Display};

/// A point in widget-local coordinates, with `y` growing downward.
///
/// Kept independent of any GUI math types so the geometry can sit behind an
/// arbitrary renderer.
///
/// # Examples
///
/// ```
/// use clockface_core::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x, 10.0);
/// assert_eq!(p.y, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, in points.
    pub x: f32,
    /// Vertical coordinate, in points.
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point reached by travelling `radius` along `angle`.
    ///
    /// The angle is in radians, measured from the positive x axis and turning
    /// clockwise in screen coordinates (because `y` grows downward).
    ///
    /// # Examples
    ///
    /// ```
    /// use clockface_core::Point;
    ///
    /// let origin = Point::new(0.0, 0.0);
    /// let right = origin.along(0.0, 5.0);
    /// assert!((right.x - 5.0).abs() < 1e-5);
    /// assert!(right.y.abs() < 1e-5);
    /// ```
    #[must_use]
    pub fn along(self, angle: f32, radius: f32) -> Self {
        Self::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn along_projects_cardinal_directions() {
        let origin = Point::new(100.0, 100.0);

        let right = origin.along(0.0, 10.0);
        assert!((right.x - 110.0).abs() < EPS);
        assert!((right.y - 100.0).abs() < EPS);

        // Positive angles turn clockwise on screen: +pi/2 points down.
        let down = origin.along(FRAC_PI_2, 10.0);
        assert!((down.x - 100.0).abs() < EPS);
        assert!((down.y - 110.0).abs() < EPS);

        let up = origin.along(-FRAC_PI_2, 10.0);
        assert!((up.y - 90.0).abs() < EPS);
    }

    #[test]
    fn along_zero_radius_is_identity() {
        let origin = Point::new(3.0, 4.0);
        assert_eq!(origin.along(1.234, 0.0), origin);
    }
}
