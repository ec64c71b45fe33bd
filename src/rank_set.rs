use core::borrow::Borrow;
use core::fmt;
use core::ops::Index;

use alloc::string::String;

use crate::error::{DuplicateKey, OutOfRange};
use crate::raw::RawRankSet;

/// An ordered set of unique keys with rank queries, backed by a red-black
/// tree.
///
/// `RankSet` keeps its keys in a self-balancing binary search tree and
/// answers two order-statistic questions besides insertion:
///
/// - [`select`](Self::select) - the k-th smallest key, 1-indexed,
/// - [`count_less`](Self::count_less) - how many keys are strictly smaller
///   than a probe value.
///
/// Keys are unique: inserting a key that is already present fails with
/// [`DuplicateKey`] and leaves the set exactly as it was. Keys are never
/// removed one at a time; the set grows until [`clear`](Self::clear) or
/// drop tears the whole structure down at once.
///
/// Nodes carry no subtree-size counters, so [`select`](Self::select),
/// [`count_less`](Self::count_less), and [`len`](Self::len) recompute
/// sizes by traversal: `insert` is O(log n), the queries are linear in
/// the worst case.
///
/// # Examples
///
/// ```
/// use rank_tree::RankSet;
///
/// let mut set = RankSet::new();
/// set.insert(1)?;
/// set.insert(5)?;
/// set.insert(10)?;
///
/// assert_eq!(set.select(2), Ok(&5));
/// assert_eq!(set.count_less(&6), 2);
/// assert_eq!(set.len(), 3);
/// # Ok::<(), rank_tree::DuplicateKey>(())
/// ```
#[derive(Clone)]
pub struct RankSet<T> {
    raw: RawRankSet<T>,
}

/// A one-based rank into the sorted order of a [`RankSet`].
///
/// Rank 1 names the smallest key, matching [`RankSet::select`].
///
/// # Examples
///
/// ```
/// use rank_tree::{Rank, RankSet};
///
/// let mut set = RankSet::new();
/// set.insert(10)?;
/// set.insert(20)?;
///
/// assert_eq!(set[Rank(1)], 10);
/// # Ok::<(), rank_tree::DuplicateKey>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

impl<T> RankSet<T> {
    /// Makes a new, empty `RankSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let mut set = RankSet::new();
    /// assert!(set.insert(1).is_ok());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: RawRankSet::new() }
    }

    /// Makes an empty `RankSet` with room for at least `capacity` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let set: RankSet<i32> = RankSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { raw: RawRankSet::with_capacity(capacity) }
    }

    /// Returns the number of keys the set can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the `rank`-th smallest key, 1-indexed: rank 1 is the
    /// minimum.
    ///
    /// Fails with [`OutOfRange`] when `rank` is 0, exceeds
    /// [`len`](Self::len), or the set is empty; a failed call performs no
    /// side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::{OutOfRange, RankSet};
    ///
    /// let mut set = RankSet::new();
    /// set.insert(10)?;
    /// set.insert(40)?;
    ///
    /// assert_eq!(set.select(1), Ok(&10));
    /// assert_eq!(set.select(2), Ok(&40));
    /// assert_eq!(set.select(0), Err(OutOfRange(0)));
    /// assert_eq!(set.select(3), Err(OutOfRange(3)));
    /// # Ok::<(), rank_tree::DuplicateKey>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(rank + height): an in-order walk that stops after `rank` nodes.
    /// There is no per-node size metadata to descend by.
    pub fn select(&self, rank: usize) -> Result<&T, OutOfRange> {
        self.raw.select(rank)
    }

    /// Counts the keys strictly less than `key`.
    ///
    /// The probe may be any borrowed form of the key type, as long as the
    /// ordering on the borrowed form matches the ordering on the key type.
    /// Never fails: an empty set, or a probe at or below the minimum,
    /// yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let mut set = RankSet::new();
    /// assert_eq!(set.count_less(&99), 0);
    /// for key in [10, 40, -1] {
    ///     set.insert(key)?;
    /// }
    ///
    /// assert_eq!(set.count_less(&0), 1);
    /// assert_eq!(set.count_less(&41), 3);
    /// # Ok::<(), rank_tree::DuplicateKey>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) worst case: left-subtree sizes are recomputed by traversal at
    /// every step of the descent.
    pub fn count_less<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.count_less(key)
    }

    /// Returns the number of keys in the set.
    ///
    /// The count is not cached anywhere: this walks the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let mut set = RankSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1)?;
    /// assert_eq!(set.len(), 1);
    /// # Ok::<(), rank_tree::DuplicateKey>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let mut set = RankSet::new();
    /// assert!(set.is_empty());
    /// set.insert(1)?;
    /// assert!(!set.is_empty());
    /// # Ok::<(), rank_tree::DuplicateKey>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the set, releasing every node at once.
    ///
    /// This is the only way back to the empty state: individual keys
    /// cannot be removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let mut set = RankSet::new();
    /// set.insert(1)?;
    /// set.clear();
    /// assert!(set.is_empty());
    /// # Ok::<(), rank_tree::DuplicateKey>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<T: Ord> RankSet<T> {
    /// Adds a key to the set.
    ///
    /// Fails with [`DuplicateKey`] if an equal key is already present; the
    /// failed call mutates nothing, so it is safe to retry or ignore.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::{DuplicateKey, RankSet};
    ///
    /// let mut set = RankSet::new();
    /// assert!(set.insert(2).is_ok());
    /// assert_eq!(set.insert(2), Err(DuplicateKey));
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: T) -> Result<(), DuplicateKey> {
        self.raw.insert(key)
    }
}

impl<T: fmt::Debug> RankSet<T> {
    /// Renders the tree shape for debugging: one key per line, tagged with
    /// its color (`R`/`B`), the right subtree above its parent and the
    /// left below, indented by depth.
    ///
    /// Diagnostic only; the exact format is not part of the contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankSet;
    ///
    /// let mut set = RankSet::new();
    /// for key in [2, 1, 3] {
    ///     set.insert(key)?;
    /// }
    ///
    /// assert_eq!(set.dump().lines().count(), 3);
    /// # Ok::<(), rank_tree::DuplicateKey>(())
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        self.raw.dump()
    }
}

/// Indexes into the set by 1-based rank; sugar for
/// [`select`](RankSet::select).
///
/// # Panics
///
/// Panics if `rank` is out of range.
///
/// # Examples
///
/// ```
/// use rank_tree::{Rank, RankSet};
///
/// let mut set = RankSet::new();
/// for key in [10, 20, 30] {
///     set.insert(key)?;
/// }
/// assert_eq!(set[Rank(2)], 20);
/// # Ok::<(), rank_tree::DuplicateKey>(())
/// ```
impl<T> Index<Rank> for RankSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).expect("rank out of bounds")
    }
}

impl<T> Default for RankSet<T> {
    fn default() -> Self {
        RankSet::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RankSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.raw.in_order_keys()).finish()
    }
}
