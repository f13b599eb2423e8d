//! Traversal optics for reading and rewriting parts of mutable data.
//!
//! This module provides [`Traversal`], a composable description of how to
//! locate zero or more parts inside a root structure. A traversal is built
//! once from combinators and replayed against any number of roots, either to
//! enumerate the parts or to change them in place.
//!
//! # Combinators
//!
//! - [`Traversal::identity`]: The root itself is the only part
//! - [`Traversal::map`]: Derive a new part from each part (read-only)
//! - [`Traversal::map_with`]: Derive a new part and write it back afterwards
//! - [`Traversal::focus`]: Borrow a value stored inside each part
//! - [`Traversal::flat_map`]: Expand each part into the elements of a collection
//! - [`Traversal::filter`]: Skip parts failing a predicate
//! - [`Traversal::compose`]: Traverse each part with another traversal
//! - [`Traversal::and_also`]: Visit the parts of two traversals in sequence
//! - [`Traversal::indexed`]: Pair each part with its position
//! - [`Traversal::only_at`], [`Traversal::except_at`], [`Traversal::only_at_where`]:
//!   Select parts by position
//!
//! # Evaluation
//!
//! Evaluation is push-based: the traversal calls a consumer for each part it
//! discovers, in a deterministic order. No intermediate collections are built,
//! except by [`Traversal::parts_of`], which buffers copies of the parts.
//!
//! # Example
//!
//! ```
//! use traverso::optics::Traversal;
//!
//! #[derive(Debug, PartialEq)]
//! struct Line { words: Vec<String> }
//!
//! let words: Traversal<Vec<Line>, String> = Traversal::identity()
//!     .flat_map(|lines: &mut Vec<Line>| lines)
//!     .flat_map(|line: &mut Line| &mut line.words);
//!
//! let mut document = vec![
//!     Line { words: vec!["hello".to_string(), "world".to_string()] },
//!     Line { words: vec!["bye".to_string()] },
//! ];
//!
//! // The first word of every line, upper-cased in place
//! let first_words: Traversal<Vec<Line>, String> = Traversal::identity()
//!     .flat_map(|lines: &mut Vec<Line>| lines)
//!     .compose(&Traversal::identity().flat_map(|line: &mut Line| &mut line.words).only_at(0));
//! first_words.traverse(&mut document, |word| *word = word.to_uppercase());
//!
//! assert_eq!(
//!     words.parts_of(&mut document).collect::<Vec<_>>(),
//!     vec!["HELLO", "world", "BYE"],
//! );
//! ```

mod counter;
mod indexed;
mod parts;
mod traversal;

pub use counter::Counter;
pub use indexed::Indexed;
pub use parts::Parts;
pub use traversal::Traversal;
