//! Ordering keys.
//!
//! Every container in this crate orders its items by a key derived from the
//! item. The extractor is captured once at construction and must be pure:
//! the same item has to produce the same key on every call, or the ordering
//! invariants of the container no longer hold.

/// Derives the ordering key of an item.
///
/// The key is lent to a continuation instead of being returned, so that
/// [`Identity`] can hand out the item itself without requiring `Clone`,
/// while computed extractors hand out a temporary.
///
/// Any closure `Fn(&T) -> K` with `K: Ord` is a `KeyFn<T>`:
///
/// ```
/// use avl_collections::AvlTree;
/// let mut tree = AvlTree::with_key_fn(|s: &String| s.len());
/// tree.insert(String::from("three"));
/// tree.insert(String::from("one"));
/// assert_eq!(tree.find(&3).map(String::as_str), Some("one"));
/// ```
pub trait KeyFn<T> {
    type Key: Ord + ?Sized;

    /// Calls `f` with the key of `item`.
    fn with_key<R, G>(&self, item: &T, f: G) -> R
    where
        G: FnOnce(&Self::Key) -> R;
}

/// Orders items by themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Ord> KeyFn<T> for Identity {
    type Key = T;

    #[inline]
    fn with_key<R, G>(&self, item: &T, f: G) -> R
    where
        G: FnOnce(&T) -> R,
    {
        f(item)
    }
}

impl<T, K, F> KeyFn<T> for F
where
    F: Fn(&T) -> K,
    K: Ord,
{
    type Key = K;

    #[inline]
    fn with_key<R, G>(&self, item: &T, f: G) -> R
    where
        G: FnOnce(&K) -> R,
    {
        f(&self(item))
    }
}

/// Compares two items by their keys.
#[inline]
pub(crate) fn compare<T, F: KeyFn<T>>(key_fn: &F, lhs: &T, rhs: &T) -> std::cmp::Ordering {
    key_fn.with_key(lhs, |lhs_key| key_fn.with_key(rhs, |rhs_key| lhs_key.cmp(rhs_key)))
}
