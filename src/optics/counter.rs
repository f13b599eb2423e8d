//! A monotonic counter assigning positions during a single traversal pass.

/// A counter that starts at zero and can be incremented by one repeatedly.
///
/// Each indexed evaluation allocates its own counter for the root it is
/// applied to, so counters are never shared between evaluations.
///
/// # Examples
///
/// ```
/// use traverso::optics::Counter;
///
/// let mut counter = Counter::new();
/// assert_eq!(counter.value(), 0);
///
/// counter.increment().increment();
/// assert_eq!(counter.value(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    count: usize,
}

impl Counter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Returns the current count.
    #[must_use]
    pub const fn value(&self) -> usize {
        self.count
    }

    /// Advances the counter by one and returns it for chaining.
    pub const fn increment(&mut self) -> &mut Self {
        self.count += 1;
        self
    }
}
