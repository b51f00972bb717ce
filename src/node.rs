use std::{borrow::Borrow, cmp::Ordering, mem};

/// The outcome of a [`Node::insert()`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// An equal key already exists in the subtree, which is left unmodified.
    Duplicate,

    /// The key was linked into the subtree.
    ///
    /// Carries the ordering of the inserted key relative to the key held by
    /// the subtree root at the time the key descended through it, which is
    /// [`Ordering::Equal`] when the subtree root is the newly allocated node.
    Inserted(Ordering),
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child nodes pointers.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of far more entries than are addressable.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, rebalancing every node
    /// on the path back up to `self`.
    ///
    /// `self` may be replaced by a rotation, in which case it points at the
    /// new root of the subtree on return.
    pub(crate) fn insert(self: &mut Box<Self>, key: K) -> InsertResult
    where
        K: Ord,
    {
        let placed = key.cmp(&self.key);
        let child = match placed {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return InsertResult::Duplicate,
            Ordering::Greater => &mut self.right,
        };

        // The ordering of the new key relative to the key of the child it
        // descended into, used to pick the rotation pattern below.
        let landed = match child {
            Some(v) => match v.insert(key) {
                InsertResult::Duplicate => return InsertResult::Duplicate,
                InsertResult::Inserted(ord) => ord,
            },
            None => {
                // Allocation failure aborts via the global allocator.
                *child = Some(Box::new(Self::new(key)));
                Ordering::Equal
            }
        };

        update_height(self);

        // A rotation in the child restores the child's pre-insert height, so
        // "landed" is only consulted when the child was left unrotated and
        // still holds the key it was compared against.
        match (balance(self), landed) {
            // Left-left
            (2, Ordering::Less) => rotate_right(self),
            // Left-right
            (2, Ordering::Greater) => {
                if let Some(l) = self.left_mut() {
                    rotate_left(l);
                }
                rotate_right(self);
            }
            // Right-right
            (-2, Ordering::Greater) => rotate_left(self),
            // Right-left
            (-2, Ordering::Less) => {
                if let Some(r) = self.right_mut() {
                    rotate_right(r);
                }
                rotate_left(self);
            }
            (-1..=1, _) => { /* The tree is well balanced */ }
            _ => unreachable!("insert skewed a subtree by more than one level"),
        }

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        InsertResult::Inserted(placed)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.key),
            Ordering::Greater => self.right(),
        }?;

        node.get(key)
    }

    /// Return the minimum key in the subtree rooted at `self`.
    pub(crate) fn first(&self) -> &K {
        let mut ptr = self;
        while let Some(v) = ptr.left() {
            ptr = v;
        }
        &ptr.key
    }

    /// Return the maximum key in the subtree rooted at `self`.
    pub(crate) fn last(&self) -> &K {
        let mut ptr = self;
        while let Some(v) = ptr.right() {
            ptr = v;
        }
        &ptr.key
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the key it holds.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Return the height of `n`, or 0 if `n` is absent.
pub(crate) fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let mut p = x.right.take().unwrap();
    mem::swap(x, &mut p);

    // "p" is now the old subtree root, and sits below "x".
    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let mut p = y.left.take().unwrap();
    mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Remove the node holding `key` from the subtree rooted at `node`, if any,
/// rebalancing every node on the path back up to `node`.
///
/// Returns the removed key, or [`None`] if the key is not found (in which case
/// the subtree is left unmodified).
pub(crate) fn remove_recurse<K, Q>(node: &mut Option<Box<Node<K>>>, key: &Q) -> Option<K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let n = node.as_mut()?;

    let removed = match key.cmp(n.key.borrow()) {
        Ordering::Less => remove_recurse(&mut n.left, key)?,
        Ordering::Greater => remove_recurse(&mut n.right, key)?,
        Ordering::Equal if n.left.is_some() && n.right.is_some() => {
            // This node has two children.
            //
            // The in-order successor (the left-most node of the right subtree)
            // is unlinked, and its key moves into this node in place of the
            // removed key.
            //
            // ```text
            //                 <4>      <- remove 4
            //                /   \
            //               2     6
            //                    / \
            //       successor ->5   7
            // ```
            let successor = take_min(&mut n.right)?;
            mem::replace(&mut n.key, successor)
        }
        // Otherwise the node has zero or one child and is spliced out, with
        // the surviving child (if any) taking its place in the parent.
        //
        // The surviving child is an unmodified, valid AVL subtree and requires
        // no rebalancing.
        Ordering::Equal => return unlink(node),
    };

    rebalance_after_remove(n);
    Some(removed)
}

/// Unlinks the node in `slot` (which must have at most one child), linking
/// its child (if any) in its place.
fn unlink<K>(slot: &mut Option<Box<Node<K>>>) -> Option<K> {
    let mut node = slot.take()?;

    // Invariant: only a node with at most one child can be spliced out.
    debug_assert!(node.left.is_none() || node.right.is_none());

    *slot = node.left.take().or_else(|| node.right.take());
    Some(node.into_key())
}

/// Extracts the minimum key in the subtree rooted at `slot`, if any,
/// linking the right subtree of the extracted node in its place.
fn take_min<K>(slot: &mut Option<Box<Node<K>>>) -> Option<K> {
    let n = slot.as_mut()?;

    if n.left.is_none() {
        // This is the end of the left edge.
        //
        // ```text
        //                 6
        //                / \
        //    here ->   <4>   7
        //                \
        //                 5
        // ```
        return unlink(slot);
    }

    // Descend left to the leaf.
    let v = take_min(&mut n.left);
    rebalance_after_remove(n);
    v
}

fn rebalance_after_remove<K>(v: &mut Box<Node<K>>) {
    // Recompute the height of the modified node.
    update_height(v);

    // And rebalance the subtree, tie-breaking on the skew of the heavy child
    // (the removed key is no longer available to compare against).
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(l) = v.left_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(r) = v.right_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
