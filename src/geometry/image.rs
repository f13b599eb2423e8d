//! Images: ordered, mutable collections of shapes.

use crate::Traversals;
use crate::optics::Traversal;

use super::Shape;

/// An image containing any number of shapes, in drawing order.
///
/// # Example
///
/// ```
/// use traverso::geometry::{Circle, Image, Point, Shape};
///
/// let mut image: Image = (0..3)
///     .map(|offset| Shape::from(Circle::new(Point::new(f64::from(offset), 0.0), 1.0)))
///     .collect();
///
/// let centers = Image::shapes().compose(&Shape::center_traversal());
/// centers.traverse(&mut image, |center| {
///     center.y = 1.0;
/// });
/// assert!(image.iter().all(|shape| shape.center().y == 1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Traversals)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    shapes: Vec<Shape>,
}

impl Image {
    /// Creates an empty image.
    #[must_use]
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Returns a traversal visiting every shape of an image, in order.
    #[must_use]
    pub fn shapes() -> Traversal<Self, Shape> {
        Self::shapes_traversal().flat_map(|shapes: &mut Vec<Shape>| shapes)
    }

    /// Adds a shape on top of the existing ones.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Returns the number of shapes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the image has no shapes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns an iterator over the shapes.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Returns the shapes as a mutable vector.
    pub const fn shapes_mut(&mut self) -> &mut Vec<Shape> {
        &mut self.shapes
    }
}

impl From<Vec<Shape>> for Image {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl FromIterator<Shape> for Image {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Image {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
