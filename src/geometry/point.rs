//! Points in the plane.

use std::fmt;

use crate::Traversals;

/// Coordinates closer than this are considered equal.
const PRECISION: f64 = 1e-10;

/// A point in 2D space with double precision coordinates.
///
/// Points are mutable in place: [`Point::add`] and [`Point::scale`] change the
/// receiver and return it for chaining. Equality is approximate, comparing
/// each coordinate up to `1e-10`.
///
/// # Example
///
/// ```
/// use traverso::geometry::Point;
///
/// let mut point = Point::new(1.0, 2.0);
/// point.scale(2.0).add(&Point::new(0.5, 0.5));
/// assert_eq!(point, Point::new(2.5, 4.5));
/// ```
#[derive(Debug, Clone, Copy, Default, Traversals)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Adds the coordinates of `other` to this point.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    /// Multiplies both coordinates by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Returns the arithmetic mean of `points`, or `None` if there are none.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::geometry::Point;
    ///
    /// let corners = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
    /// assert_eq!(Point::centroid(&corners), Some(Point::new(1.0, 1.0)));
    /// assert_eq!(Point::centroid(&[]), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut result = Self::default();
        for point in points {
            result.add(point);
        }
        result.scale(1.0 / points.len() as f64);
        Some(result)
    }
}

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < PRECISION
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        close(self.x, other.x) && close(self.y, other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.x, self.y)
    }
}
