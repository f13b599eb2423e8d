//! Geometric shapes exposing traversals over their parts.
//!
//! This module shows traversals over both stored and computed properties:
//!
//! - [`Point`]: A mutable point with approximate equality
//! - [`Circle`]: A shape whose center is stored
//! - [`Square`]: A shape whose center is computed from its corner and size
//! - [`Shape`]: The closed set of shapes
//! - [`Image`]: An ordered collection of shapes
//!
//! # Example
//!
//! ```
//! use traverso::geometry::{Circle, Image, Point, Shape, Square};
//!
//! let mut image = Image::new();
//! image.push(Circle::new(Point::new(3.0, 4.0), 5.0));
//! image.push(Square::new(Point::new(0.0, 0.0), 2.0));
//!
//! // Move every shape so that its center lies on the origin
//! let centers = Image::shapes().compose(&Shape::center_traversal());
//! centers.set_all(&mut image, &Point::new(0.0, 0.0));
//!
//! assert!(image.iter().all(|shape| shape.center() == Point::new(0.0, 0.0)));
//! ```

mod image;
mod point;
mod shape;

pub use image::Image;
pub use point::Point;
pub use shape::{Circle, Shape, Square};
