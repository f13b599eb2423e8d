//! The ordered sequence of parts produced by [`Traversal::parts_of`].
//!
//! [`Traversal::parts_of`]: super::Traversal::parts_of

use std::iter::FusedIterator;
use std::vec;

/// An iterator over the parts a traversal visited, in visitation order.
///
/// The parts are copies taken while the traversal ran; the iterator holds no
/// borrow of the root.
#[derive(Debug, Clone)]
pub struct Parts<P> {
    inner: vec::IntoIter<P>,
}

impl<P> Parts<P> {
    pub(crate) fn new(parts: Vec<P>) -> Self {
        Self {
            inner: parts.into_iter(),
        }
    }

    /// Returns the parts not yet yielded as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        self.inner.as_slice()
    }
}

impl<P> Iterator for Parts<P> {
    type Item = P;

    #[inline]
    fn next(&mut self) -> Option<P> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<P> DoubleEndedIterator for Parts<P> {
    #[inline]
    fn next_back(&mut self) -> Option<P> {
        self.inner.next_back()
    }
}

impl<P> ExactSizeIterator for Parts<P> {}

impl<P> FusedIterator for Parts<P> {}
