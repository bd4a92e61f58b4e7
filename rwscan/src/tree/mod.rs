//! Ordered, duplicate-free set backed by a binary search tree
//!
//! Insertion never restructures the tree. Balance is restored on request by
//! [`BalancedOrderedSet::rebalance`], which discards the whole node graph and
//! rebuilds it from the sorted contents, choosing the midpoint of every range
//! as the subtree root.

mod iter;
mod node;

pub use iter::InorderIter;
pub use node::TreeNode;

use node::Link;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

pub struct BalancedOrderedSet<T> {
    root: Link<T>,
    len: usize,
    rebuilds: usize,
}

impl<T> BalancedOrderedSet<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            rebuilds: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty
    pub fn height(&self) -> usize {
        node::measure(self.root.as_deref()).height
    }

    /// How many times [`rebalance`](Self::rebalance) rebuilt the tree
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Whether every node's subtree heights differ by less than two.
    ///
    /// Heights are recomputed on every call.
    pub fn is_balanced(&self) -> bool {
        node::measure(self.root.as_deref()).balanced
    }

    /// Rebuild into a height-balanced shape if the tree is currently unbalanced.
    ///
    /// Returns whether a rebuild happened. The old nodes are consumed, never reused.
    pub fn rebalance(&mut self) -> bool {
        if self.is_balanced() {
            return false;
        }

        let values = node::into_sorted_vec(self.root.take(), self.len);
        let count = values.len();
        self.root = node::build_balanced(&mut values.into_iter(), count);
        self.len = count;
        self.rebuilds += 1;
        true
    }

    /// Ascending traversal of the current contents
    pub fn iter(&self) -> InorderIter<'_, T> {
        InorderIter::new(self.root.as_deref(), self.len)
    }

    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.len = 0;
    }

    /// Consume the set, returning its values in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let len = self.len;
        node::into_sorted_vec(self.root.take(), len)
    }
}

impl<T: Ord> BalancedOrderedSet<T> {
    /// Add `value` as a new leaf. Does not rebalance.
    ///
    /// Returns `false`, leaving the set untouched, if an equal value is present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return false,
            }
        }

        *link = Some(Box::new(TreeNode::leaf(value)));
        self.len += 1;
        true
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Build a balanced set directly from strictly ascending values
    pub fn from_sorted(values: Vec<T>) -> Self {
        debug_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "from_sorted requires strictly ascending input"
        );

        let len = values.len();
        Self {
            root: node::build_balanced(&mut values.into_iter(), len),
            len,
            rebuilds: 0,
        }
    }
}

impl<T> Default for BalancedOrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BalancedOrderedSet<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T: Ord> FromIterator<T> for BalancedOrderedSet<T> {
    /// Inserts every item, then rebalances once
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BalancedOrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
        self.rebalance();
    }
}

impl<'a, T> IntoIterator for &'a BalancedOrderedSet<T> {
    type Item = &'a T;
    type IntoIter = InorderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for BalancedOrderedSet<T> {
    /// Equal contents, regardless of shape
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BalancedOrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for BalancedOrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for BalancedOrderedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
