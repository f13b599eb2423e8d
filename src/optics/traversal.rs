//! Push-based traversals for focusing on the parts of a mutable root.
//!
//! A [`Traversal<R, P>`] describes how to visit zero or more parts of type `P`
//! inside a root of type `R`. It is a transformer from "a consumer of parts" to
//! "a consumer of roots": given an action on parts, it drives the discovery of
//! parts inside a root and feeds each one to the action, in a fixed order.
//!
//! Because parts are handed out as `&mut P`, the same composed pipeline serves
//! both reading ([`Traversal::parts_of`]) and writing ([`Traversal::traverse`]
//! with a mutating action).
//!
//! # Laws
//!
//! 1. **Identity Law**: the identity traversal yields exactly its root.
//!    ```text
//!    Traversal::identity().parts_of(&mut x) == [x]
//!    ```
//!
//! 2. **Composition Law**: composing visits the inner parts of each outer part in turn.
//!    ```text
//!    a.compose(&b).parts_of(r) == a.parts_of(r).flat_map(|p| b.parts_of(p))
//!    ```
//!
//! 3. **Concatenation Law**: concatenating visits both traversals in sequence.
//!    ```text
//!    a.and_also(&b).parts_of(r) == a.parts_of(r).chain(b.parts_of(r))
//!    ```
//!
//! # Examples
//!
//! ```
//! use traverso::optics::Traversal;
//!
//! let rows: Traversal<Vec<Vec<i32>>, i32> = Traversal::identity()
//!     .flat_map(|rows: &mut Vec<Vec<i32>>| rows)
//!     .flat_map(|row: &mut Vec<i32>| row);
//!
//! let mut table = vec![vec![1, 2], vec![3, 4, 5]];
//!
//! // Read all parts
//! assert_eq!(rows.parts_of(&mut table).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//!
//! // Write through the same traversal
//! rows.filter(|cell| cell % 2 == 1).traverse(&mut table, |cell| *cell *= 10);
//! assert_eq!(table, vec![vec![10, 2], vec![30, 4, 50]]);
//! ```

use std::fmt;
use std::rc::Rc;

use super::{Counter, Indexed, Parts};

/// The uncurried visiting function: drives `consumer` over the parts of a root.
type Visit<R, P> = dyn Fn(&mut R, &mut dyn FnMut(&mut P));

/// A composable description of how to visit parts `P` inside a root `R`.
///
/// Traversals are immutable values. Cloning one is cheap and shares the
/// underlying visiting function. Any state an evaluation needs, such as the
/// running index of [`Traversal::indexed`], is allocated per evaluation.
///
/// # Type Parameters
///
/// - `R`: The root type (the whole structure)
/// - `P`: The part type (the visited elements)
///
/// # Example
///
/// ```
/// use traverso::optics::Traversal;
///
/// #[derive(Debug, PartialEq)]
/// struct Account { owner: String, balance: i64 }
///
/// let balances: Traversal<Vec<Account>, i64> = Traversal::identity()
///     .flat_map(|accounts: &mut Vec<Account>| accounts)
///     .focus(|account: &mut Account| &mut account.balance);
///
/// let mut accounts = vec![
///     Account { owner: "ana".to_string(), balance: 10 },
///     Account { owner: "bo".to_string(), balance: -5 },
/// ];
///
/// balances.filter(|balance| *balance < 0).traverse(&mut accounts, |balance| *balance = 0);
/// assert_eq!(balances.parts_of(&mut accounts).collect::<Vec<_>>(), vec![10, 0]);
/// ```
pub struct Traversal<R, P> {
    visit: Rc<Visit<R, P>>,
}

impl<R, P> Clone for Traversal<R, P> {
    fn clone(&self) -> Self {
        Self {
            visit: Rc::clone(&self.visit),
        }
    }
}

impl<R, P> fmt::Debug for Traversal<R, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("root", &std::any::type_name::<R>())
            .field("part", &std::any::type_name::<P>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Traversal<T, T> {
    /// Creates the traversal whose single part is the root itself.
    ///
    /// Every other traversal of a root type is derived from this one. The
    /// identity traversal never inspects the root, so even `None` or an empty
    /// collection yields exactly one part.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let mut root: Option<i32> = None;
    /// assert_eq!(Traversal::identity().length(&mut root), 1);
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|root, consumer| consumer(root))
    }
}

impl<T: 'static> Default for Traversal<T, T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<R: 'static, P: 'static> Traversal<R, P> {
    /// Creates a traversal from a visiting function.
    ///
    /// The function receives a root and a consumer, and must call the consumer
    /// once for each part it finds, in a deterministic order.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let both: Traversal<(i32, i32), i32> = Traversal::new(|pair: &mut (i32, i32), consumer| {
    ///     consumer(&mut pair.0);
    ///     consumer(&mut pair.1);
    /// });
    ///
    /// let mut pair = (1, 2);
    /// both.traverse(&mut pair, |number| *number += 1);
    /// assert_eq!(pair, (2, 3));
    /// ```
    pub fn new<F>(visit: F) -> Self
    where
        F: Fn(&mut R, &mut dyn FnMut(&mut P)) + 'static,
    {
        Self {
            visit: Rc::new(visit),
        }
    }

    /// Invokes `action` once per part of `root`, in traversal order.
    ///
    /// All write-backs triggered by [`Traversal::map_with`] are applied
    /// before this method returns.
    pub fn traverse<F>(&self, root: &mut R, mut action: F)
    where
        F: FnMut(&mut P),
    {
        (self.visit)(root, &mut action);
    }

    /// Turns a part consumer into a reusable root consumer.
    ///
    /// This is the curried view of a traversal: the returned closure can be
    /// applied to any number of roots, running `action` on each of their parts.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let cells: Traversal<Vec<i32>, i32> = Traversal::identity().flat_map(|row: &mut Vec<i32>| row);
    ///
    /// let mut total = 0;
    /// let mut sum_row = cells.apply(|cell| total += *cell);
    /// sum_row(&mut vec![1, 2]);
    /// sum_row(&mut vec![3]);
    /// drop(sum_row);
    /// assert_eq!(total, 6);
    /// ```
    pub fn apply<F>(&self, mut action: F) -> impl FnMut(&mut R) + use<R, P, F>
    where
        F: FnMut(&mut P),
    {
        let visit = Rc::clone(&self.visit);
        move |root: &mut R| visit(root, &mut action)
    }

    /// Returns the parts of `root` in traversal order.
    ///
    /// The parts are copied into a buffer as they are visited, so the result
    /// does not borrow the root. The root is taken mutably because write-back
    /// combinators run their `put` functions on every evaluation.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let evens: Traversal<Vec<i32>, i32> = Traversal::identity()
    ///     .flat_map(|numbers: &mut Vec<i32>| numbers)
    ///     .filter(|number| number % 2 == 0);
    ///
    /// let mut numbers = vec![1, 2, 3, 4];
    /// assert_eq!(evens.parts_of(&mut numbers).collect::<Vec<_>>(), vec![2, 4]);
    /// ```
    pub fn parts_of(&self, root: &mut R) -> Parts<P>
    where
        P: Clone,
    {
        let mut buffer = Vec::new();
        self.traverse(root, |part| buffer.push(part.clone()));
        tracing::trace!(parts = buffer.len(), "buffered traversal parts");
        Parts::new(buffer)
    }

    /// Invokes a fallible `action` on each part until it first fails.
    ///
    /// After the first `Err`, the action is no longer called for the remaining
    /// parts and that error is returned. Write-backs of parts visited before the
    /// failure stay applied.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `action`.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let numbers: Traversal<Vec<u8>, u8> = Traversal::identity().flat_map(|numbers: &mut Vec<u8>| numbers);
    ///
    /// let mut values = vec![100, 200, 250];
    /// let result: Result<(), u8> = numbers.try_traverse(&mut values, |number| {
    ///     *number = number.checked_add(50).ok_or(*number)?;
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err(250));
    /// assert_eq!(values, vec![150, 250, 250]);
    /// ```
    pub fn try_traverse<E, F>(&self, root: &mut R, mut action: F) -> Result<(), E>
    where
        F: FnMut(&mut P) -> Result<(), E>,
    {
        let mut failure = None;
        let mut visited = 0_usize;
        self.traverse(root, |part| {
            if failure.is_none() {
                visited += 1;
                if let Err(error) = action(part) {
                    failure = Some(error);
                }
            }
        });
        match failure {
            Some(error) => {
                tracing::debug!(visited, "traversal action failed, skipping remaining parts");
                Err(error)
            }
            None => Ok(()),
        }
    }

    /// Returns the number of parts of `root`.
    pub fn length(&self, root: &mut R) -> usize {
        let mut count = 0;
        self.traverse(root, |_| count += 1);
        count
    }

    /// Folds over the parts of `root` in traversal order.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let numbers: Traversal<Vec<i32>, i32> = Traversal::identity().flat_map(|numbers: &mut Vec<i32>| numbers);
    /// let sum = numbers.fold(&mut vec![1, 2, 3], 0, |accumulator, number| accumulator + number);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<B, F>(&self, root: &mut R, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &P) -> B,
    {
        // The consumer only borrows its captures, so the owned accumulator is
        // moved out and back through an `Option`. It is `None` only while
        // `function` runs; a panic there unwinds past the final match.
        let mut accumulator = Some(initial);
        self.traverse(root, |part| {
            accumulator = accumulator.take().map(|value| function(value, part));
        });
        match accumulator {
            Some(result) => result,
            None => unreachable!("the accumulator is restored after every part"),
        }
    }

    /// Tests whether every part of `root` satisfies `predicate`.
    ///
    /// Returns `true` if there are no parts. Once a part fails, the predicate
    /// is not evaluated for the remaining parts.
    pub fn for_all<F>(&self, root: &mut R, mut predicate: F) -> bool
    where
        F: FnMut(&P) -> bool,
    {
        let mut result = true;
        self.traverse(root, |part| {
            if result && !predicate(part) {
                result = false;
            }
        });
        result
    }

    /// Tests whether any part of `root` satisfies `predicate`.
    ///
    /// Returns `false` if there are no parts.
    pub fn exists<F>(&self, root: &mut R, mut predicate: F) -> bool
    where
        F: FnMut(&P) -> bool,
    {
        let mut result = false;
        self.traverse(root, |part| {
            if !result && predicate(part) {
                result = true;
            }
        });
        result
    }

    /// Returns a copy of the first part of `root`, if any.
    pub fn head_option(&self, root: &mut R) -> Option<P>
    where
        P: Clone,
    {
        let mut head = None;
        self.traverse(root, |part| {
            if head.is_none() {
                head = Some(part.clone());
            }
        });
        head
    }

    /// Replaces every part of `root` with `function` applied to it.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let words: Traversal<Vec<String>, String> = Traversal::identity().flat_map(|words: &mut Vec<String>| words);
    ///
    /// let mut words_in_place = vec!["a".to_string(), "b".to_string()];
    /// words.modify_all(&mut words_in_place, |word| word.to_uppercase());
    /// assert_eq!(words_in_place, vec!["A", "B"]);
    /// ```
    pub fn modify_all<F>(&self, root: &mut R, mut function: F)
    where
        F: FnMut(&P) -> P,
    {
        self.traverse(root, |part| *part = function(part));
    }

    /// Sets every part of `root` to a copy of `value`.
    pub fn set_all(&self, root: &mut R, value: &P)
    where
        P: Clone,
    {
        self.traverse(root, |part| part.clone_from(value));
    }

    /// Maps each part to a derived value.
    ///
    /// The derived value is owned by the traversal; changes the consumer makes
    /// to it are discarded. Use [`Traversal::map_with`] to write them back, or
    /// [`Traversal::focus`] to borrow a stored field instead.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let lengths: Traversal<Vec<String>, usize> = Traversal::identity()
    ///     .flat_map(|words: &mut Vec<String>| words)
    ///     .map(String::len);
    ///
    /// let mut words = vec!["one".to_string(), "three".to_string()];
    /// assert_eq!(lengths.parts_of(&mut words).collect::<Vec<_>>(), vec![3, 5]);
    /// ```
    #[must_use]
    pub fn map<Q, F>(&self, get: F) -> Traversal<R, Q>
    where
        Q: 'static,
        F: Fn(&P) -> Q + 'static,
    {
        let visit = Rc::clone(&self.visit);
        Traversal::<R, Q>::new(move |root, consumer| {
            visit(root, &mut |part: &mut P| consumer(&mut get(part)));
        })
    }

    /// Maps each part to a derived value and writes it back afterwards.
    ///
    /// For each part `p`, the consumer receives `get(p)`; once it returns,
    /// `put(p, q)` stores the (possibly changed) derived value `q` back into
    /// `p`. `put` runs exactly once per visited part, always after the
    /// consumer.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// struct Celsius(f64);
    ///
    /// let fahrenheit: Traversal<Celsius, f64> = Traversal::identity().map_with(
    ///     |celsius: &Celsius| celsius.0 * 9.0 / 5.0 + 32.0,
    ///     |celsius: &mut Celsius, fahrenheit: f64| celsius.0 = (fahrenheit - 32.0) * 5.0 / 9.0,
    /// );
    ///
    /// let mut temperature = Celsius(100.0);
    /// fahrenheit.traverse(&mut temperature, |degrees| *degrees = 32.0);
    /// assert!(temperature.0.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn map_with<Q, G, S>(&self, get: G, put: S) -> Traversal<R, Q>
    where
        Q: 'static,
        G: Fn(&P) -> Q + 'static,
        S: Fn(&mut P, Q) + 'static,
    {
        let visit = Rc::clone(&self.visit);
        Traversal::<R, Q>::new(move |root, consumer| {
            visit(root, &mut |part: &mut P| {
                let mut derived = get(part);
                consumer(&mut derived);
                put(part, derived);
            });
        })
    }

    /// Focuses on a value stored inside each part.
    ///
    /// The consumer borrows the stored value directly, so changes land in
    /// place without a write-back step.
    #[must_use]
    pub fn focus<Q, F>(&self, get: F) -> Traversal<R, Q>
    where
        Q: 'static,
        F: for<'a> Fn(&'a mut P) -> &'a mut Q + 'static,
    {
        let visit = Rc::clone(&self.visit);
        Traversal::<R, Q>::new(move |root, consumer| {
            visit(root, &mut |part: &mut P| consumer(get(part)));
        })
    }

    /// Expands each part into the elements of a collection it holds.
    ///
    /// Elements are visited in the collection's iteration order; the number of
    /// parts is the sum over all expanded collections. Any collection whose
    /// mutable reference iterates mutable elements works, e.g. `Vec`, slices,
    /// arrays, `VecDeque` or `Option`.
    #[must_use]
    pub fn flat_map<Q, C, F>(&self, get: F) -> Traversal<R, Q>
    where
        Q: 'static,
        C: ?Sized + 'static,
        F: for<'a> Fn(&'a mut P) -> &'a mut C + 'static,
        for<'a> &'a mut C: IntoIterator<Item = &'a mut Q>,
    {
        let visit = Rc::clone(&self.visit);
        Traversal::<R, Q>::new(move |root, consumer| {
            visit(root, &mut |part: &mut P| {
                for element in get(part) {
                    consumer(element);
                }
            });
        })
    }

    /// Restricts the traversal to parts satisfying `predicate`.
    ///
    /// Rejected parts are never handed to the consumer and are not counted by
    /// index-based combinators applied afterwards.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&P) -> bool + 'static,
    {
        let visit = Rc::clone(&self.visit);
        Self::new(move |root, consumer| {
            visit(root, &mut |part: &mut P| {
                if predicate(part) {
                    consumer(part);
                }
            });
        })
    }

    /// Traverses each part of this traversal with `other`.
    ///
    /// For each part `p` (in this traversal's order) all parts `other` finds
    /// in `p` are visited before moving on to the next part.
    #[must_use]
    pub fn compose<Q>(&self, other: &Traversal<P, Q>) -> Traversal<R, Q>
    where
        Q: 'static,
    {
        let outer = Rc::clone(&self.visit);
        let inner = Rc::clone(&other.visit);
        Traversal::<R, Q>::new(move |root, consumer| {
            outer(root, &mut |part: &mut P| inner(part, &mut *consumer));
        })
    }

    /// Visits all parts of this traversal, then all parts of `other`.
    ///
    /// Both traversals run against the same root with the same consumer.
    #[must_use]
    pub fn and_also(&self, other: &Self) -> Self {
        let first = Rc::clone(&self.visit);
        let second = Rc::clone(&other.visit);
        Self::new(move |root, consumer| {
            first(root, &mut *consumer);
            second(root, consumer);
        })
    }

    /// Pairs each part with its zero-based position.
    ///
    /// Positions are assigned in visitation order by a fresh [`Counter`] for
    /// every root the traversal is applied to. The consumer receives a copy of
    /// the part, which is written back once the consumer returns.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::{Indexed, Traversal};
    ///
    /// let letters: Traversal<Vec<char>, Indexed<char>> = Traversal::identity()
    ///     .flat_map(|letters: &mut Vec<char>| letters)
    ///     .indexed();
    ///
    /// let mut word = vec!['a', 'b'];
    /// assert_eq!(
    ///     letters.parts_of(&mut word).collect::<Vec<_>>(),
    ///     vec![Indexed::new(0, 'a'), Indexed::new(1, 'b')],
    /// );
    /// ```
    #[must_use]
    pub fn indexed(&self) -> Traversal<R, Indexed<P>>
    where
        P: Clone,
    {
        let visit = Rc::clone(&self.visit);
        Traversal::<R, Indexed<P>>::new(move |root, consumer| {
            let mut counter = Counter::new();
            visit(root, &mut |part: &mut P| {
                let mut indexed = Indexed::new(counter.value(), part.clone());
                consumer(&mut indexed);
                *part = indexed.into_value();
                counter.increment();
            });
        })
    }

    /// Keeps only the parts whose position satisfies `predicate`.
    ///
    /// Equivalent to `indexed()` followed by a filter on the index and
    /// unwrapping the value, except that the consumer receives the part itself
    /// rather than a copy.
    #[must_use]
    pub fn only_at_where<F>(&self, predicate: F) -> Self
    where
        F: Fn(usize) -> bool + 'static,
    {
        let visit = Rc::clone(&self.visit);
        Self::new(move |root, consumer| {
            let mut counter = Counter::new();
            visit(root, &mut |part: &mut P| {
                if predicate(counter.value()) {
                    consumer(part);
                }
                counter.increment();
            });
        })
    }

    /// Keeps only the part at `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::optics::Traversal;
    ///
    /// let numbers: Traversal<Vec<i32>, i32> = Traversal::identity().flat_map(|numbers: &mut Vec<i32>| numbers);
    ///
    /// let mut values = vec![10, 20, 30];
    /// assert_eq!(numbers.only_at(1).parts_of(&mut values).collect::<Vec<_>>(), vec![20]);
    /// assert_eq!(numbers.only_at(3).length(&mut values), 0);
    /// ```
    #[must_use]
    pub fn only_at(&self, index: usize) -> Self {
        self.only_at_where(move |position| position == index)
    }

    /// Keeps every part except the one at `index`.
    #[must_use]
    pub fn except_at(&self, index: usize) -> Self {
        self.only_at_where(move |position| position != index)
    }
}

static_assertions::assert_impl_all!(Traversal<String, char>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Traversal<String, char>: Send, Sync);
