//! Index-based LIFO stack used for state history.

use thiserror::Error;

/// Errors raised by [`Stack`] operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StackError {
    /// `pop` was called on an empty stack
    #[error("No elements to pop")]
    Empty,
}

/// Last-in first-out sequence with a logical top index.
///
/// `clear` only resets the top index. Slots above the top are logically
/// gone and get overwritten by later pushes, so clearing is O(1) and the
/// backing storage is reused.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Stack, StackError};
///
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
///
/// assert_eq!(stack.peek(), Some(&"b"));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.len(), 1);
///
/// stack.clear();
/// assert_eq!(stack.peek(), None);
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    data: Vec<T>,
    top: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            top: 0,
        }
    }

    /// Push `element` as the new top.
    pub fn push(&mut self, element: T) {
        if self.top < self.data.len() {
            self.data[self.top] = element;
        } else {
            self.data.push(element);
        }
        self.top += 1;
    }

    /// Top element without removing it, `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.top.checked_sub(1).map(|index| &self.data[index])
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Logically empty the stack. Storage is kept for reuse.
    pub fn clear(&mut self) {
        self.top = 0;
    }

    /// Live elements from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data[..self.top].iter()
    }
}

impl<T: Clone> Stack<T> {
    /// Remove and return the top element.
    ///
    /// The slot stays allocated until a later push overwrites it.
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.top == 0 {
            return Err(StackError::Empty);
        }
        self.top -= 1;
        Ok(self.data[self.top].clone())
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data[..self.top] == other.data[..other.top]
    }
}

impl<T: Eq> Eq for Stack<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack: Stack<u32> = Stack::new();
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn push_grows_and_peek_sees_top() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));
    }

    #[test]
    fn pop_returns_elements_in_lifo_order() {
        let mut stack = Stack::new();
        stack.push("solid");
        stack.push("liquid");

        assert_eq!(stack.pop(), Ok("liquid"));
        assert_eq!(stack.pop(), Ok("solid"));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_on_empty_stack_fails() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.pop(), Err(StackError::Empty));
        assert_eq!(StackError::Empty.to_string(), "No elements to pop");
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push('x');

        assert_eq!(stack.peek(), Some(&'x'));
        assert_eq!(stack.peek(), Some(&'x'));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn clear_makes_stack_logically_empty() {
        let mut stack = Stack::new();
        stack.push(10);
        stack.push(20);
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.iter().count(), 0);
    }

    #[test]
    fn push_after_clear_overwrites_stale_slots() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        stack.clear();

        stack.push(7);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![7]);

        assert_eq!(stack.pop(), Ok(7));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn push_after_pop_reuses_slot() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");
        let _ = stack.pop();
        stack.push("c");

        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn equality_ignores_stale_slots() {
        let mut left = Stack::new();
        left.push(1);
        left.push(2);
        let _ = left.pop();

        let mut right = Stack::new();
        right.push(1);

        assert_eq!(left, right);
    }
}
