//! The AVL tree all other ordered containers are built on.

use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::key::{self, Identity, KeyFn};

mod iter;

pub(crate) use iter::IterMut;
pub use iter::{IntoIter, Iter};

/// A self-balancing binary search tree ordered by a key derived from each item.
///
/// Keys are unique: an item whose key is already present is rejected (or
/// replaces the stored item, see [`insert_or_replace`]). The key extractor is
/// captured at construction and defaults to [`Identity`].
///
/// Mutating the tree while an iterator borrows it is prevented by the borrow
/// checker; the tree is not internally synchronized.
///
/// ```
/// use avl_collections::AvlTree;
/// let mut tree = AvlTree::new();
/// for value in [5, 4, 7, 8, 4, 6, 2, 7, 1] {
///     tree.insert(value);
/// }
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 6, 7, 8]);
/// assert_eq!(tree.remove(&4), Some(4));
/// assert!(!tree.contains(&4));
/// ```
///
/// [`insert_or_replace`]: AvlTree::insert_or_replace
pub struct AvlTree<T, F = Identity> {
    root: Link<T>,
    num_nodes: usize,
    key_fn: F,
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
    height: usize,
}

type NodePtr<T> = NonNull<Node<T>>;
type Link<T> = Option<NodePtr<T>>;
type LinkPtr<T> = NonNull<Link<T>>;

#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

enum InsertPos<T> {
    Vacant { parent: Link<T>, link_ptr: LinkPtr<T> },
    Occupied(NodePtr<T>),
}

/// Outcome of [`AvlTree::upsert`].
pub(crate) enum Upsert<T> {
    Inserted,
    Replaced(T),
    Rejected,
}

// The tree owns its nodes exclusively; parent links never outlive it.
unsafe impl<T: Send, F: Send> Send for AvlTree<T, F> {}
unsafe impl<T: Sync, F: Sync> Sync for AvlTree<T, F> {}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree ordering items by themselves.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self::with_key_fn(Identity)
    }
}

impl<T, F: KeyFn<T>> AvlTree<T, F> {
    /// Creates an empty tree ordering items by `key_fn`.
    pub fn with_key_fn(key_fn: F) -> Self {
        Self {
            root: None,
            num_nodes: 0,
            key_fn,
            _marker: PhantomData,
        }
    }

    /// Returns true if an item with the same key as `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.key_fn
            .with_key(item, |key| self.find_node(key).is_some())
    }

    /// Returns true if an item with the given key is stored.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        F::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns a reference to the item with the given key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        F::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key)
            .map(|node_ptr| unsafe { &(*node_ptr.as_ptr()).value })
    }

    /// Inserts an item unless its key is already present.
    /// Returns whether a new node was created; a rejected item is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        matches!(self.upsert(item, false), Upsert::Inserted)
    }

    /// Inserts an item, replacing the stored item with the same key if present.
    /// Returns whether a new node was created.
    pub fn insert_or_replace(&mut self, item: T) -> bool {
        matches!(self.upsert(item, true), Upsert::Inserted)
    }

    /// Removes the item with the given key and returns it.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        F::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node_ptr = self.find_node(key)?;
        let value = self.remove_node(node_ptr);
        debug_assert!(self.find_node(key).is_none());
        Some(value)
    }

    /// Returns the key extractor of this tree.
    pub fn key_fn(&self) -> &F {
        &self.key_fn
    }

    /// Inserts or replaces `item`. A rejected item is dropped.
    pub(crate) fn upsert(&mut self, item: T, overwrite: bool) -> Upsert<T> {
        let key_fn = &self.key_fn;
        let root = &mut self.root;
        let pos = key_fn.with_key(&item, |key| Self::find_insert_pos(root, key_fn, key));
        match pos {
            InsertPos::Occupied(mut node_ptr) if overwrite => {
                let old = mem::replace(unsafe { &mut node_ptr.as_mut().value }, item);
                Upsert::Replaced(old)
            }
            InsertPos::Occupied(_) => Upsert::Rejected,
            InsertPos::Vacant { parent, link_ptr } => {
                self.link_new_node(parent, link_ptr, item);
                Upsert::Inserted
            }
        }
    }

    /// Returns the item stored under `key`, first inserting `make(key)` if absent.
    /// The item built by `make` must have `key` as its key.
    pub(crate) fn get_or_insert_with<G>(&mut self, key: F::Key, make: G) -> &mut T
    where
        F::Key: Sized,
        G: FnOnce(F::Key) -> T,
    {
        let pos = Self::find_insert_pos(&mut self.root, &self.key_fn, &key);
        let node_ptr = match pos {
            InsertPos::Occupied(node_ptr) => node_ptr,
            InsertPos::Vacant { parent, link_ptr } => {
                self.link_new_node(parent, link_ptr, make(key))
            }
        };
        unsafe { &mut (*node_ptr.as_ptr()).value }
    }

    /// Returns a mutable reference to the item with the given key.
    /// Callers must not change the item's key.
    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        F::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key)
            .map(|node_ptr| unsafe { &mut (*node_ptr.as_ptr()).value })
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        unsafe {
            // Check root link
            if let Some(root_ptr) = self.root {
                assert!(root_ptr.as_ref().parent.is_none());
            }

            // Check tree nodes
            let mut num_nodes = 0;
            self.preorder(|node_ptr| {
                let node = node_ptr.as_ref();
                let mut height = 0;
                let mut left_height = 0;
                let mut right_height = 0;

                if let Some(left_ptr) = node.left {
                    let left = left_ptr.as_ref();
                    assert!(left.parent == Some(node_ptr));
                    assert_eq!(
                        key::compare(&self.key_fn, &left.value, &node.value),
                        Ordering::Less
                    );
                    left_height = left.height + 1;
                    height = cmp::max(height, left_height);
                }

                if let Some(right_ptr) = node.right {
                    let right = right_ptr.as_ref();
                    assert!(right.parent == Some(node_ptr));
                    assert_eq!(
                        key::compare(&self.key_fn, &right.value, &node.value),
                        Ordering::Greater
                    );
                    right_height = right.height + 1;
                    height = cmp::max(height, right_height);
                }

                assert_eq!(node.height, height);

                // AVL condition
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                num_nodes += 1;
            });

            assert_eq!(num_nodes, self.num_nodes);

            // Neighbours in order must be strictly increasing, across subtrees too
            let mut iter = self.iter();
            if let Some(mut prev) = iter.next() {
                for value in iter {
                    assert_eq!(key::compare(&self.key_fn, prev, value), Ordering::Less);
                    prev = value;
                }
            }
        }
    }

    fn find_node<Q>(&self, key: &Q) -> Link<T>
    where
        F::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            let value = unsafe { &node_ptr.as_ref().value };
            current = match self
                .key_fn
                .with_key(value, |node_key| key.cmp(node_key.borrow()))
            {
                Ordering::Equal => break,
                Ordering::Less => unsafe { node_ptr.as_ref().left },
                Ordering::Greater => unsafe { node_ptr.as_ref().right },
            };
        }
        current
    }

    fn find_insert_pos(root: &mut Link<T>, key_fn: &F, key: &F::Key) -> InsertPos<T> {
        let mut parent: Link<T> = None;
        let mut link_ptr: LinkPtr<T> = LinkPtr::from(root);
        unsafe {
            while let Some(mut node_ptr) = *link_ptr.as_ref() {
                let ordering = key_fn.with_key(&node_ptr.as_ref().value, |node_key| key.cmp(node_key));
                link_ptr = match ordering {
                    Ordering::Equal => return InsertPos::Occupied(node_ptr),
                    Ordering::Less => LinkPtr::from(&mut node_ptr.as_mut().left),
                    Ordering::Greater => LinkPtr::from(&mut node_ptr.as_mut().right),
                };
                parent = Some(node_ptr);
            }
        }
        InsertPos::Vacant { parent, link_ptr }
    }
}

impl<T, F> AvlTree<T, F> {
    /// Returns true if the tree contains no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of levels of the tree, zero if empty.
    pub fn height(&self) -> usize {
        match self.root {
            None => 0,
            Some(root_ptr) => unsafe { root_ptr.as_ref().height + 1 },
        }
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        debug!(len = self.num_nodes, "clearing tree");
        self.destroy_nodes();
    }

    /// Gets an iterator over the items of the tree in key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root, self.num_nodes)
    }

    /// Returns the item with the smallest key.
    pub fn first(&self) -> Option<&T> {
        self.root
            .map(|root_ptr| unsafe { &(*leftmost(root_ptr).as_ptr()).value })
    }

    /// Returns the item with the largest key.
    pub fn last(&self) -> Option<&T> {
        self.root
            .map(|root_ptr| unsafe { &(*rightmost(root_ptr).as_ptr()).value })
    }

    /// Removes and returns the item with the smallest key.
    pub fn pop_first(&mut self) -> Option<T> {
        let node_ptr = leftmost(self.root?);
        Some(self.remove_node(node_ptr))
    }

    /// Removes and returns the item with the largest key.
    pub fn pop_last(&mut self) -> Option<T> {
        let node_ptr = rightmost(self.root?);
        Some(self.remove_node(node_ptr))
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.root, self.num_nodes)
    }

    /// Builds a perfectly balanced tree from items whose keys strictly increase.
    pub(crate) fn from_sorted_vec(values: Vec<T>, key_fn: F) -> Self {
        let num_nodes = values.len();
        trace!(len = num_nodes, "building tree from sorted items");
        let mut values = values.into_iter();
        let root = Self::build_subtree(&mut values, num_nodes);
        debug_assert!(values.next().is_none());
        Self {
            root,
            num_nodes,
            key_fn,
            _marker: PhantomData,
        }
    }

    /// Takes all items out in key order, leaving the tree empty.
    pub(crate) fn take_sorted_vec(&mut self) -> Vec<T> {
        let mut node_ptrs = Vec::with_capacity(self.num_nodes);
        self.inorder(|node_ptr| node_ptrs.push(node_ptr));
        self.root = None;
        self.num_nodes = 0;
        node_ptrs
            .into_iter()
            .map(|node_ptr| unsafe { Node::destroy(node_ptr) })
            .collect()
    }

    // Consumes `len` items of `values` in order.
    fn build_subtree(values: &mut std::vec::IntoIter<T>, len: usize) -> Link<T> {
        if len == 0 {
            return None;
        }
        let left_len = len / 2;
        let left = Self::build_subtree(values, left_len);
        let mut node_ptr = Node::create(None, values.next()?);
        let right = Self::build_subtree(values, len - left_len - 1);
        unsafe {
            for mut child_ptr in left.into_iter().chain(right) {
                child_ptr.as_mut().parent = Some(node_ptr);
            }
            node_ptr.as_mut().left = left;
            node_ptr.as_mut().right = right;
        }
        adjust_height(node_ptr);
        Some(node_ptr)
    }

    fn link_new_node(&mut self, parent: Link<T>, mut link_ptr: LinkPtr<T>, item: T) -> NodePtr<T> {
        let node_ptr = Node::create(parent, item);
        unsafe {
            *link_ptr.as_mut() = Some(node_ptr);
        }
        self.num_nodes += 1;
        self.rebalance_once(parent);
        node_ptr
    }

    fn remove_node(&mut self, mut node_ptr: NodePtr<T>) -> T {
        debug_assert!(self.num_nodes >= 1);
        unsafe {
            if let (Some(left_ptr), Some(_)) = (node_ptr.as_ref().left, node_ptr.as_ref().right) {
                // Move in-order predecessor into node to-remove, then unlink predecessor
                let mut pred_ptr = rightmost(left_ptr);
                mem::swap(&mut node_ptr.as_mut().value, &mut pred_ptr.as_mut().value);
                node_ptr = pred_ptr;
            }
        }
        self.splice_out(node_ptr);
        self.num_nodes -= 1;
        unsafe { Node::destroy(node_ptr) }
    }

    // Unlinks a node with at most one child, moving the child into its place.
    fn splice_out(&mut self, node_ptr: NodePtr<T>) {
        let (left, right, parent) = unsafe {
            let node = node_ptr.as_ref();
            (node.left, node.right, node.parent)
        };
        debug_assert!(left.is_none() || right.is_none());
        let child = left.or(right);
        if let Some(mut child_ptr) = child {
            unsafe { child_ptr.as_mut().parent = parent };
        }
        self.replace_child(parent, node_ptr, child);
        // Ancestors might be out of balance now
        self.rebalance(parent);
    }

    // Points the link of `parent` (or the root) that refers to `old_child` at `new_child`.
    fn replace_child(&mut self, parent: Link<T>, old_child: NodePtr<T>, new_child: Link<T>) {
        match parent {
            None => self.root = new_child,
            Some(mut parent_ptr) => unsafe {
                if parent_ptr.as_ref().left == Some(old_child) {
                    parent_ptr.as_mut().left = new_child;
                } else {
                    parent_ptr.as_mut().right = new_child;
                }
            },
        }
    }

    fn rotate_left(&mut self, mut node_ptr: NodePtr<T>) {
        unsafe {
            if let Some(mut right_ptr) = node_ptr.as_ref().right {
                trace!(height = node_ptr.as_ref().height, "rotate left");
                node_ptr.as_mut().right = right_ptr.as_ref().left;
                if let Some(mut right_left_ptr) = right_ptr.as_ref().left {
                    right_left_ptr.as_mut().parent = Some(node_ptr);
                }

                let parent = node_ptr.as_ref().parent;
                right_ptr.as_mut().parent = parent;
                self.replace_child(parent, node_ptr, Some(right_ptr));

                right_ptr.as_mut().left = Some(node_ptr);
                node_ptr.as_mut().parent = Some(right_ptr);

                adjust_height(node_ptr);
                adjust_height(right_ptr);
            }
        }
    }

    fn rotate_right(&mut self, mut node_ptr: NodePtr<T>) {
        unsafe {
            if let Some(mut left_ptr) = node_ptr.as_ref().left {
                trace!(height = node_ptr.as_ref().height, "rotate right");
                node_ptr.as_mut().left = left_ptr.as_ref().right;
                if let Some(mut left_right_ptr) = left_ptr.as_ref().right {
                    left_right_ptr.as_mut().parent = Some(node_ptr);
                }

                let parent = node_ptr.as_ref().parent;
                left_ptr.as_mut().parent = parent;
                self.replace_child(parent, node_ptr, Some(left_ptr));

                left_ptr.as_mut().right = Some(node_ptr);
                node_ptr.as_mut().parent = Some(left_ptr);

                adjust_height(node_ptr);
                adjust_height(left_ptr);
            }
        }
    }

    /// Rebalances nodes starting from given position up to the root node.
    fn rebalance(&mut self, start_from: Link<T>) {
        let mut current = start_from;
        while let Some(node_ptr) = current {
            let parent = unsafe { node_ptr.as_ref().parent };
            self.rebalance_node(node_ptr);
            current = parent;
        }
    }

    /// Rebalances nodes starting from given position up to the root node.
    /// Stops after the first rotation, or as soon as a subtree keeps its height.
    /// This is enough to restore balance after a single insert operation.
    fn rebalance_once(&mut self, start_from: Link<T>) {
        let mut current = start_from;
        while let Some(node_ptr) = current {
            let (parent, old_height) = unsafe { (node_ptr.as_ref().parent, node_ptr.as_ref().height) };
            if self.rebalance_node(node_ptr) {
                break;
            }
            if unsafe { node_ptr.as_ref().height } == old_height {
                break;
            }
            current = parent;
        }
    }

    /// Restores AVL condition (balance) at given node if necessary and adjusts height.
    /// Resulting balance will be +1, 0 or -1 height difference between left and right subtree.
    /// Initial balance must not exceed +2 or -2, which always holds after a single update.
    /// Returns whether a rotation had been necessary.
    fn rebalance_node(&mut self, node_ptr: NodePtr<T>) -> bool {
        let left = left_height(node_ptr);
        let right = right_height(node_ptr);
        debug_assert!(left <= right + 2);
        debug_assert!(right <= left + 2);
        if left > right + 1 {
            // Left heavy, rotate right
            if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                if right_height(left_ptr) > left_height(left_ptr) {
                    self.rotate_left(left_ptr);
                }
            }
            self.rotate_right(node_ptr);
            true
        } else if right > left + 1 {
            // Right heavy, rotate left
            if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                if left_height(right_ptr) > right_height(right_ptr) {
                    self.rotate_right(right_ptr);
                }
            }
            self.rotate_left(node_ptr);
            true
        } else {
            adjust_height(node_ptr);
            false
        }
    }

    fn destroy_nodes(&mut self) {
        self.postorder(|node_ptr| unsafe { drop(Node::destroy(node_ptr)) });
        self.root = None;
        self.num_nodes = 0;
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn preorder<Pre: FnMut(NodePtr<T>)>(&self, f: Pre) {
        self.traverse(f, |_| {}, |_| {});
    }

    fn inorder<In: FnMut(NodePtr<T>)>(&self, f: In) {
        self.traverse(|_| {}, f, |_| {});
    }

    fn postorder<Post: FnMut(NodePtr<T>)>(&self, f: Post) {
        self.traverse(|_| {}, |_| {}, f);
    }

    fn traverse<Pre, In, Post>(&self, mut preorder: Pre, mut inorder: In, mut postorder: Post)
    where
        Pre: FnMut(NodePtr<T>),
        In: FnMut(NodePtr<T>),
        Post: FnMut(NodePtr<T>),
    {
        if let Some(mut node_ptr) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(node_ptr);
                        if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                            node_ptr = left_ptr;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        inorder(node_ptr);
                        if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                            node_ptr = right_ptr;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        // Post order traversal is used for node deletion,
                        // so make sure not to use node pointer after postorder call.
                        if let Some(parent_ptr) = unsafe { node_ptr.as_ref().parent } {
                            if Some(node_ptr) == unsafe { parent_ptr.as_ref().left } {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            postorder(node_ptr);
                            node_ptr = parent_ptr;
                        } else {
                            postorder(node_ptr);
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl<T, F> Drop for AvlTree<T, F> {
    fn drop(&mut self) {
        self.destroy_nodes();
    }
}

impl<T, F: Default> Default for AvlTree<T, F> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self {
            root: None,
            num_nodes: 0,
            key_fn: F::default(),
            _marker: PhantomData,
        }
    }
}

impl<T: Clone, F: Clone> Clone for AvlTree<T, F> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.map(|root_ptr| Node::clone_subtree(root_ptr, None)),
            num_nodes: self.num_nodes,
            key_fn: self.key_fn.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for AvlTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, F: KeyFn<T> + Default> FromIterator<T> for AvlTree<T, F> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::with_key_fn(F::default());
        tree.extend(iter);
        tree
    }
}

impl<T, F: KeyFn<T>> Extend<T> for AvlTree<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |item| {
            self.insert(item);
        });
    }
}

impl<'a, T, F> IntoIterator for &'a AvlTree<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, F> IntoIterator for AvlTree<T, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.take_sorted_vec())
    }
}

impl<T> Node<T> {
    fn create(parent: Link<T>, value: T) -> NodePtr<T> {
        let boxed = Box::new(Node {
            value,
            parent,
            left: None,
            right: None,
            height: 0,
        });
        NodePtr::from(Box::leak(boxed))
    }

    /// Frees a node that is no longer linked and returns its value.
    unsafe fn destroy(node_ptr: NodePtr<T>) -> T {
        Box::from_raw(node_ptr.as_ptr()).value
    }

    fn clone_subtree(node_ptr: NodePtr<T>, parent: Link<T>) -> NodePtr<T>
    where
        T: Clone,
    {
        let node = unsafe { node_ptr.as_ref() };
        let mut clone_ptr = Node::create(parent, node.value.clone());
        let left = node
            .left
            .map(|left_ptr| Node::clone_subtree(left_ptr, Some(clone_ptr)));
        let right = node
            .right
            .map(|right_ptr| Node::clone_subtree(right_ptr, Some(clone_ptr)));
        unsafe {
            clone_ptr.as_mut().left = left;
            clone_ptr.as_mut().right = right;
            clone_ptr.as_mut().height = node.height;
        }
        clone_ptr
    }
}

fn left_height<T>(node_ptr: NodePtr<T>) -> usize {
    unsafe {
        match node_ptr.as_ref().left {
            None => 0,
            Some(left_ptr) => left_ptr.as_ref().height + 1,
        }
    }
}

fn right_height<T>(node_ptr: NodePtr<T>) -> usize {
    unsafe {
        match node_ptr.as_ref().right {
            None => 0,
            Some(right_ptr) => right_ptr.as_ref().height + 1,
        }
    }
}

fn adjust_height<T>(mut node_ptr: NodePtr<T>) {
    let height = cmp::max(left_height(node_ptr), right_height(node_ptr));
    unsafe { node_ptr.as_mut().height = height };
}

fn leftmost<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    while let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
        node_ptr = left_ptr;
    }
    node_ptr
}

fn rightmost<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    while let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
        node_ptr = right_ptr;
    }
    node_ptr
}

fn successor<T>(mut node_ptr: NodePtr<T>) -> Link<T> {
    unsafe {
        if let Some(right_ptr) = node_ptr.as_ref().right {
            return Some(leftmost(right_ptr));
        }
        while let Some(parent_ptr) = node_ptr.as_ref().parent {
            if parent_ptr.as_ref().left == Some(node_ptr) {
                return Some(parent_ptr);
            }
            node_ptr = parent_ptr;
        }
    }
    None
}

fn predecessor<T>(mut node_ptr: NodePtr<T>) -> Link<T> {
    unsafe {
        if let Some(left_ptr) = node_ptr.as_ref().left {
            return Some(rightmost(left_ptr));
        }
        while let Some(parent_ptr) = node_ptr.as_ref().parent {
            if parent_ptr.as_ref().right == Some(node_ptr) {
                return Some(parent_ptr);
            }
            node_ptr = parent_ptr;
        }
    }
    None
}
