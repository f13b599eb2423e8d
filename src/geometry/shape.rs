//! Shapes placed in an image at a location.

use crate::Traversals;
use crate::optics::Traversal;

use super::Point;

/// A circle around a stored center point.
///
/// The center is stored, so [`Circle::center_traversal`] borrows it directly
/// and edits land in place.
///
/// # Example
///
/// ```
/// use traverso::geometry::{Circle, Point};
///
/// let mut circle = Circle::new(Point::new(3.0, 4.0), 5.0);
/// Circle::center_traversal().traverse(&mut circle, |center| {
///     center.scale(2.0);
/// });
/// assert_eq!(*circle.center(), Point::new(6.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Traversals)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle at `center` with the given `radius`.
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center point.
    #[must_use]
    pub const fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

/// A square located by its top-left corner.
///
/// The center is computed from the corner and the size. Its traversal,
/// [`Square::center_traversal`], hands out the computed center and moves the
/// square to wherever the center was moved.
#[derive(Debug, Clone, Copy, PartialEq, Traversals)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    top_left: Point,
    size: f64,
}

impl Square {
    /// Creates a square with the given top-left corner and size.
    #[must_use]
    pub const fn new(top_left: Point, size: f64) -> Self {
        Self { top_left, size }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> &Point {
        &self.top_left
    }

    /// Returns the side length.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Computes the center from the top-left corner and the size.
    #[must_use]
    pub fn center(&self) -> Point {
        let mut center = Point::new(self.size, self.size);
        center.scale(0.5).add(&self.top_left);
        center
    }

    /// Moves the square so that its center is `center`. The size is kept.
    pub fn set_center(&mut self, center: &Point) {
        let mut offset = self.center();
        offset.scale(-1.0).add(center);
        self.top_left.add(&offset);
    }

    /// Returns a traversal visiting the computed center.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::geometry::{Point, Square};
    ///
    /// let mut square = Square::new(Point::new(0.0, 0.0), 2.0);
    /// Square::center_traversal().traverse(&mut square, |center| *center = Point::new(5.0, 5.0));
    /// assert_eq!(*square.top_left(), Point::new(4.0, 4.0));
    /// ```
    #[must_use]
    pub fn center_traversal() -> Traversal<Self, Point> {
        Traversal::identity().map_with(Self::center, |square: &mut Self, center: Point| {
            square.set_center(&center);
        })
    }
}

/// A geometric shape: one of a closed set of variants, each with a center.
#[derive(Debug, Clone, Copy, PartialEq, Traversals)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A square.
    Square(Square),
}

impl Shape {
    /// Returns the center point, stored or computed depending on the variant.
    #[must_use]
    pub fn center(&self) -> Point {
        match self {
            Self::Circle(circle) => *circle.center(),
            Self::Square(square) => square.center(),
        }
    }

    /// Returns a traversal visiting the center of whichever variant the root is.
    ///
    /// Each variant's traversal yields nothing for the other variant, so
    /// concatenating them visits exactly one center per shape.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::geometry::{Circle, Point, Shape, Square};
    ///
    /// let target = Point::new(10.0, 10.0);
    /// for mut shape in [
    ///     Shape::Circle(Circle::new(Point::new(1.0, 1.0), 1.0)),
    ///     Shape::Square(Square::new(Point::new(1.0, 1.0), 1.0)),
    /// ] {
    ///     Shape::center_traversal().set_all(&mut shape, &target);
    ///     assert_eq!(shape.center(), target);
    /// }
    /// ```
    #[must_use]
    pub fn center_traversal() -> Traversal<Self, Point> {
        let circle_center = Self::circle_traversal().compose(&Circle::center_traversal());
        let square_center = Self::square_traversal().compose(&Square::center_traversal());
        circle_center.and_also(&square_center)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Self::Square(square)
    }
}
