//! Derive macros for traverso traversals.
//!
//! This crate provides the [`Traversals`] derive, which generates one
//! traversal constructor per struct field or per enum variant.
//!
//! # Example: Structs
//!
//! ```rust,ignore
//! use traverso::Traversals;
//!
//! #[derive(Clone, Traversals)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! // Generated methods:
//! // - Point::x_traversal() -> Traversal<Point, f64>
//! // - Point::y_traversal() -> Traversal<Point, f64>
//!
//! let mut point = Point { x: 1.0, y: 2.0 };
//! Point::x_traversal().traverse(&mut point, |x| *x += 1.0);
//! assert_eq!(point.x, 2.0);
//! ```
//!
//! # Example: Enums
//!
//! ```rust,ignore
//! use traverso::Traversals;
//!
//! #[derive(Clone, Traversals)]
//! enum Shape {
//!     Circle(Circle),
//!     Square(Square),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_traversal() -> Traversal<Shape, Circle>
//! // - Shape::square_traversal() -> Traversal<Shape, Square>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod traversals;

use proc_macro::TokenStream;

/// Derive macro generating traversal constructors.
///
/// # Structs
///
/// For each named field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_traversal() -> ::traverso::optics::Traversal<StructName, T> { ... }
/// }
/// ```
///
/// The traversal visits the field in place by mutable borrow, so any change
/// made by the consumer lands directly in the struct.
///
/// # Enums
///
/// For each single-field tuple variant `Foo(T)`, generates
/// `foo_traversal() -> Traversal<EnumName, T>`, visiting the payload when the
/// root is that variant and nothing otherwise. Unit, multi-field and struct
/// variants are skipped.
///
/// # Requirements
///
/// - Structs must have named fields
/// - The type and its field types must be `'static`
///
/// ```rust,ignore
/// #[derive(Traversals)]
/// enum Token {
///     Word(String),
///     Number(i64),
///     Break,
/// }
///
/// let mut token = Token::Number(41);
/// Token::number_traversal().traverse(&mut token, |number| *number += 1);
/// ```
#[proc_macro_derive(Traversals)]
pub fn derive_traversals(input: TokenStream) -> TokenStream {
    traversals::derive_traversals_impl(input)
}
