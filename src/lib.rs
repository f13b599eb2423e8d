//! # traverso
//!
//! Composable, push-based traversals for locating, reading and rewriting the
//! parts of mutable data structures.
//!
//! ## Overview
//!
//! A [`Traversal<R, P>`](optics::Traversal) describes how to visit zero or
//! more parts `P` inside a root `R`. Traversals are built once from a small
//! set of combinators and replayed against any number of roots:
//!
//! - **Optics**: the traversal algebra, index pairing and materialization
//! - **Geometry**: points, circles, squares and images exposing traversals
//! - **Text**: a mutable character buffer with delimiter-based grouping
//!
//! ## Feature Flags
//!
//! - `optics`: The traversal algebra
//! - `derive`: `#[derive(Traversals)]` for struct fields and enum variants
//! - `geometry`: Geometry domain
//! - `text`: Text domain
//! - `serde`: Serialization for the domain types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use traverso::prelude::*;
//!
//! let mut text = Text::from("hello world");
//! words().traverse(&mut text, |word| {
//!     word.map_at(0, title_case);
//! });
//! assert_eq!(text, "Hello World");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `#[derive(Traversals)]` refer to `::traverso` from inside this crate.
#[cfg(feature = "derive")]
extern crate self as traverso;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use traverso::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::Traversals;

    #[cfg(feature = "geometry")]
    pub use crate::geometry::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

#[cfg(feature = "derive")]
pub use traverso_derive::Traversals;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "geometry")]
pub mod geometry;

#[cfg(feature = "text")]
pub mod text;
