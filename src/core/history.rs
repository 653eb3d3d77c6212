//! Linear undo/redo history over visited states.
//!
//! History is kept on two stacks: the done stack holds every visited state
//! with the active state on top, the undone stack holds states taken off by
//! [`History::undo`] that [`History::redo`] can bring back.

use super::stack::Stack;
use super::state::State;

/// Two-stack record of visited and undone states.
///
/// The bottom of the done stack is always the initial state and the done
/// stack is never empty. Recording a new state discards the redo branch.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new("draft".to_string());
/// history.record("review".to_string());
/// history.record("published".to_string());
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "review");
///
/// assert!(history.redo());
/// assert_eq!(history.current(), "published");
/// assert!(!history.redo());
/// ```
#[derive(Clone, Debug)]
pub struct History<S: State> {
    initial: S,
    done: Stack<S>,
    undone: Stack<S>,
}

impl<S: State> History<S> {
    /// Create a history positioned at `initial`.
    pub fn new(initial: S) -> Self {
        let mut done = Stack::new();
        done.push(initial.clone());
        Self {
            initial,
            done,
            undone: Stack::new(),
        }
    }

    /// The state every history starts from and resets to.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The active state, i.e. the top of the done stack.
    pub fn current(&self) -> &S {
        self.done.peek().unwrap_or(&self.initial)
    }

    /// Move forward to `state`, discarding any redo history.
    pub fn record(&mut self, state: S) {
        self.done.push(state);
        self.undone.clear();
    }

    /// Step back one state.
    ///
    /// Returns `false` without touching anything when only the bottom entry
    /// is left.
    pub fn undo(&mut self) -> bool {
        if self.done.len() <= 1 {
            return false;
        }
        match self.done.pop() {
            Ok(state) => {
                self.undone.push(state);
                true
            }
            Err(_) => false,
        }
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` without touching anything when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Ok(state) => {
                self.done.push(state);
                true
            }
            Err(_) => false,
        }
    }

    /// Collapse the done stack back to the initial state.
    ///
    /// The undone stack is left as is, so states undone before the rewind
    /// can still be redone on top of the initial state.
    pub fn rewind(&mut self) {
        self.done.clear();
        self.done.push(self.initial.clone());
    }

    /// Drop both stacks and start over from the initial state.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
        self.done.push(self.initial.clone());
    }

    pub fn can_undo(&self) -> bool {
        self.done.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of entries on the done stack, including the initial state.
    pub fn depth(&self) -> usize {
        self.done.len()
    }

    /// Visited states from the initial state to the active one.
    pub fn path(&self) -> Vec<&S> {
        self.done.iter().collect()
    }

    /// Undone states; the next one [`redo`](Self::redo) would apply is last.
    pub fn redo_path(&self) -> Vec<&S> {
        self.undone.iter().collect()
    }
}
