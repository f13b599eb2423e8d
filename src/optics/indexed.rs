//! Values paired with their position in a traversal.

/// A value with an associated zero-based index.
///
/// `Indexed` is produced by [`Traversal::indexed`](super::Traversal::indexed)
/// and only lives for the duration of one consumer call. The index is fixed;
/// the value may be edited through [`Indexed::value_mut`], and the edit is
/// written back into the part it was copied from.
///
/// # Examples
///
/// ```
/// use traverso::optics::Indexed;
///
/// let indexed = Indexed::new(2, "third");
/// assert_eq!(indexed.index(), 2);
/// assert_eq!(*indexed.value(), "third");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indexed<P> {
    index: usize,
    value: P,
}

impl<P> Indexed<P> {
    /// Pairs a value with an index.
    #[must_use]
    pub const fn new(index: usize, value: P) -> Self {
        Self { index, value }
    }

    /// Returns the index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the value.
    #[must_use]
    pub const fn value(&self) -> &P {
        &self.value
    }

    /// Returns a mutable reference to the value.
    pub const fn value_mut(&mut self) -> &mut P {
        &mut self.value
    }

    /// Consumes the pair and returns the value.
    #[must_use]
    pub fn into_value(self) -> P {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_accessors() {
        let indexed = Indexed::new(7, 'x');
        assert_eq!(indexed.index(), 7);
        assert_eq!(*indexed.value(), 'x');
        assert_eq!(indexed.into_value(), 'x');
    }

    #[test]
    fn test_indexed_equality_is_field_wise() {
        assert_eq!(Indexed::new(1, "a"), Indexed::new(1, "a"));
        assert_ne!(Indexed::new(1, "a"), Indexed::new(2, "a"));
        assert_ne!(Indexed::new(1, "a"), Indexed::new(1, "b"));
    }
}
