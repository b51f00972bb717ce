//! A self-balancing (AVL) binary search tree over a set of unique, totally
//! ordered keys.
//!
//! [`AvlTree`] stores each key in a heap-allocated node exclusively owning its
//! left and right subtrees. After every [`insert`] or [`remove`], the heights
//! of every node's two subtrees differ by at most one, bounding the tree
//! height to roughly `1.44 * log2(n + 2)` for `n` keys.
//!
//! ```
//! use avlset::AvlTree;
//!
//! let mut t = AvlTree::new();
//! for v in [12, 15, 14, 16, 10, 9, 12, 13, 11, 8] {
//!     t.insert(v);
//! }
//!
//! // The second 12 was rejected as a duplicate.
//! assert_eq!(t.inorder_keys(), [8, 9, 10, 11, 12, 13, 14, 15, 16]);
//!
//! t.remove(&10);
//! assert_eq!(t.inorder_keys(), [8, 9, 11, 12, 13, 14, 15, 16]);
//!
//! // Dropping the tree frees every node.
//! drop(t);
//! ```
//!
//! # Duplicates & Missing Keys
//!
//! Inserting a key that is already present, or removing a key that is not,
//! leaves the tree unmodified and is reported through the `bool` return value
//! rather than as an error.
//!
//! # Allocation Failure
//!
//! Each inserted key allocates one node from the global allocator. Allocation
//! failure is not recoverable and aborts the process, as with the standard
//! library collections.
//!
//! [`insert`]: AvlTree::insert
//! [`remove`]: AvlTree::remove

#![warn(missing_docs)]

mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use iter::{IntoIter, Iter};
pub use tree::AvlTree;
