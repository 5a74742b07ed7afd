//! Ordered collections built on a self-balancing AVL tree, plus a binary heap.
//!
//! - [`AvlTree`] stores unique items ordered by a key derived from each item.
//! - [`AvlTreeMap`] and [`AvlTreeSet`] are ordered map and set views on top of it.
//! - [`Heap`] is a priority queue that hands out the smallest or largest key first.
//!
//! Ordering keys come from a [`KeyFn`]. [`Identity`] orders items by themselves,
//! and any `Fn(&T) -> K` closure with `K: Ord` works as well.
//!
//! ```
//! use avl_collections::AvlTree;
//!
//! let mut tree: AvlTree<i32> = [5, 4, 7, 8, 4, 6, 2, 7, 1].iter().copied().collect();
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.remove(&4), Some(4));
//! assert!(!tree.contains(&4));
//! ```

mod error;
mod key;

pub mod heap;
pub mod map;
pub mod set;
pub mod tree;

pub use error::{Error, Result};
pub use heap::{Heap, Order};
pub use key::{Identity, KeyFn};
pub use map::AvlTreeMap;
pub use set::AvlTreeSet;
pub use tree::AvlTree;

#[cfg(test)]
mod tests;
