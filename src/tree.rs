use std::{borrow::Borrow, fmt::Debug};

use crate::{
    iter::{IntoIter, Iter},
    node::{remove_recurse, InsertResult, Node},
};

/// An ordered set of unique keys, stored in a height-balanced (AVL) binary
/// search tree.
///
/// Every node exclusively owns its two subtrees, and the tree owns the root.
/// After every insert or remove, the heights of the left and right subtrees of
/// every node differ by at most 1, bounding the height of the tree (and
/// therefore the cost of every operation) to `O(log n)`.
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the height of the tree; 0 when empty, 1 for a single key.
    pub fn height(&self) -> u8 {
        crate::node::height(self.root.as_deref())
    }

    /// Return the smallest key in the tree, if any.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().map(Node::first)
    }

    /// Return the largest key in the tree, if any.
    pub fn last(&self) -> Option<&K> {
        self.root.as_deref().map(Node::last)
    }

    /// Visit every key in ascending order.
    ///
    /// The traversal borrows the tree and does not modify it - calling
    /// `iter()` again re-walks the tree from the smallest key.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Return a snapshot of all keys in ascending order.
    pub fn inorder_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Remove and free every key in the tree.
    pub fn clear(&mut self) {
        // Dropping the root frees every node it transitively owns.
        self.root = None;
        self.len = 0;
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree, rebalancing as necessary.
    ///
    /// Returns false and leaves the tree unmodified if an equal key is
    /// already present.
    ///
    /// # Aborts
    ///
    /// Node storage is obtained from the global allocator; allocation failure
    /// aborts the process (see [`std::alloc::handle_alloc_error`]).
    pub fn insert(&mut self, key: K) -> bool {
        let res = match self.root {
            Some(ref mut v) => v.insert(key),
            None => {
                self.root = Some(Box::new(Node::new(key)));
                InsertResult::Inserted(std::cmp::Ordering::Equal)
            }
        };

        match res {
            InsertResult::Duplicate => false,
            InsertResult::Inserted(_) => {
                self.len += 1;
                true
            }
        }
    }

    /// Remove `key` from the tree, rebalancing as necessary.
    ///
    /// Returns false if the key was not present, in which case the tree is
    /// unmodified.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Remove and return the key in the tree equal to `key`, if any.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let v = remove_recurse(&mut self.root, key)?;
        self.len -= 1;
        Some(v)
    }

    /// Returns a reference to the key in the tree equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_ref().and_then(|v| v.get(key))
    }

    /// Returns true if the tree contains a key equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K> Debug for AvlTree<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> PartialEq for AvlTree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys may differ in shape, so only the
        // in-order key sequences are compared.
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for AvlTree<K> where K: Eq {}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}
