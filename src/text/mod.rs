//! Mutable text and traversals over its words, lines and delimited groups.
//!
//! - [`Text`]: A character buffer whose operations clamp their indices
//! - [`groups`], [`groups_of`]: Groups between delimiting characters
//! - [`words`]: Groups between whitespace
//! - [`lines`]: Groups between line terminators
//!
//! Group traversals compose: a traversal over the cells of comma-separated
//! data is `lines().compose(&groups_of(","))`, and edits made to a cell are
//! joined back into the whole text.
//!
//! # Example
//!
//! ```
//! use traverso::text::{Text, groups_of, lines, title_case, words};
//!
//! let mut table = Text::from("id,name\n47,jane doe\n11,joe bloggs");
//!
//! let ids: Vec<u32> = lines()
//!     .except_at(0)
//!     .compose(&groups_of(",").only_at(0))
//!     .map(|cell| cell.to_string().parse::<u32>())
//!     .parts_of(&mut table)
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(ids, vec![47, 11]);
//!
//! lines()
//!     .except_at(0)
//!     .compose(&groups_of(",").only_at(1))
//!     .compose(&words())
//!     .traverse(&mut table, |word| {
//!         word.map_at(0, title_case);
//!     });
//! assert_eq!(table, "id,name\n47,Jane Doe\n11,Joe Bloggs");
//! # Ok::<(), std::num::ParseIntError>(())
//! ```

mod buffer;
mod grouping;

pub use buffer::{Text, title_case};
pub use grouping::{groups, groups_of, lines, words};
