use super::node::TreeNode;
use std::iter::FusedIterator;

/// Ascending in-order traversal over a borrowed tree.
///
/// Holds the left spine of the unvisited part on an explicit stack, so memory
/// is bounded by tree height and no call recurses.
pub struct InorderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
    remaining: usize,
}

impl<'a, T> InorderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>, len: usize) -> Self {
        let mut iter = InorderIter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InorderIter<'_, T> {}

impl<T> FusedIterator for InorderIter<'_, T> {}

impl<T> Clone for InorderIter<'_, T> {
    fn clone(&self) -> Self {
        InorderIter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
