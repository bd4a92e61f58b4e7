//! Tree nodes and the shape measurements taken over them
//!
//! Every walk here uses an explicit stack, so a degenerate tree (sorted
//! input inserted without rebalancing) is as safe to measure as a balanced one.

use std::fmt;

pub(crate) type Link<T> = Option<Box<TreeNode<T>>>;

/// One value plus exclusively owned children
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> TreeNode<T> {
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here; a leaf has height 1
    pub fn height(&self) -> usize {
        measure(Some(self)).height
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Height and balance of a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shape {
    pub height: usize,
    /// Every node's child heights differ by at most one
    pub balanced: bool,
}

/// Post-order walk computing every node's height from its children.
/// An absent subtree has height 0 and is balanced.
pub(crate) fn measure<T>(root: Option<&TreeNode<T>>) -> Shape {
    let Some(root) = root else {
        return Shape {
            height: 0,
            balanced: true,
        };
    };

    let mut pending: Vec<(&TreeNode<T>, bool)> = vec![(root, false)];
    let mut heights: Vec<usize> = Vec::new();
    let mut balanced = true;

    while let Some((node, children_done)) = pending.pop() {
        if !children_done {
            pending.push((node, true));
            if let Some(right) = node.right() {
                pending.push((right, false));
            }
            if let Some(left) = node.left() {
                pending.push((left, false));
            }
            continue;
        }

        // Left finished first, so its height sits below the right one.
        let right_height = match node.right {
            Some(_) => heights.pop().unwrap_or(0),
            None => 0,
        };
        let left_height = match node.left {
            Some(_) => heights.pop().unwrap_or(0),
            None => 0,
        };

        if left_height.abs_diff(right_height) >= 2 {
            balanced = false;
        }
        heights.push(1 + left_height.max(right_height));
    }

    Shape {
        height: heights.pop().unwrap_or(0),
        balanced,
    }
}

/// Consume a subtree, yielding its values in ascending order
pub(crate) fn into_sorted_vec<T>(root: Link<T>, capacity: usize) -> Vec<T> {
    let mut values = Vec::with_capacity(capacity);
    let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }

        let Some(node) = stack.pop() else {
            break;
        };
        let TreeNode { value, right, .. } = *node;
        values.push(value);
        current = right;
    }

    values
}

/// Build a height-balanced subtree from the next `count` ascending values.
///
/// The root of every range `[start, end]` is the element at
/// `(start + end) / 2`, so the left side receives `(count - 1) / 2` values.
pub(crate) fn build_balanced<T, I>(values: &mut I, count: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if count == 0 {
        return None;
    }

    let left_count = (count - 1) / 2;
    let left = build_balanced(values, left_count);
    let value = values.next()?;
    let right = build_balanced(values, count - 1 - left_count);

    Some(Box::new(TreeNode { value, left, right }))
}

/// Free a subtree without recursing on its depth
pub(crate) fn dismantle<T>(root: Link<T>) {
    let mut stack: Vec<Box<TreeNode<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Link<usize> {
        let mut root: Link<usize> = None;
        for value in (0..len).rev() {
            root = Some(Box::new(TreeNode {
                value,
                left: None,
                right: root,
            }));
        }
        root
    }

    #[test]
    fn test_measure_empty_and_leaf() {
        assert_eq!(
            measure::<u8>(None),
            Shape {
                height: 0,
                balanced: true
            }
        );
        let leaf = TreeNode::leaf(7);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.height(), 1);
    }

    #[test]
    fn test_measure_detects_right_chain() {
        let root = chain(3);
        let shape = measure(root.as_deref());
        assert_eq!(shape.height, 3);
        assert!(!shape.balanced);
        dismantle(root);
    }

    #[test]
    fn test_two_node_chain_is_balanced() {
        let root = chain(2);
        assert!(measure(root.as_deref()).balanced);
        dismantle(root);
    }

    #[test]
    fn test_build_uses_truncating_midpoint() {
        // [0, 3] -> mid 1, left [0], right [2, 3] -> mid 2, right [3]
        let root = build_balanced(&mut (0..4), 4).unwrap();
        assert_eq!(*root.value(), 1);
        assert_eq!(root.left().map(|n| n.value), Some(0));
        let right = root.right().unwrap();
        assert_eq!(right.value, 2);
        assert!(right.left().is_none());
        assert_eq!(right.right().map(|n| n.value), Some(3));
    }

    #[test]
    fn test_deep_chain_is_measured_drained_and_dropped() {
        let depth = 200_000;
        let root = chain(depth);
        assert_eq!(measure(root.as_deref()).height, depth);

        let values = into_sorted_vec(root, depth);
        assert_eq!(values.len(), depth);
        assert!(values.windows(2).all(|w| w[0] < w[1]));

        dismantle(chain(depth));
    }
}
