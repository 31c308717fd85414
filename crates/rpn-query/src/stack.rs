//! Tail-mutated value stack shared by both evaluators.

use crate::errors::EvalError;

/// Ordered sequence of values mutated only at the top.
///
/// The numeric and boolean evaluators each own one instance; nothing else
/// aliases it.
///
/// # Examples
/// ```
/// use rpn_query::{EvalError, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1.5);
/// stack.push(2.0);
/// assert_eq!(stack.peek(), Ok(&2.0));
/// assert_eq!(stack.pop(), Ok(2.0));
/// assert_eq!(stack.len(), 1);
/// stack.clear();
/// assert_eq!(stack.pop(), Err(EvalError::EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value.
    ///
    /// # Errors
    /// Returns [`EvalError::EmptyStack`] when the stack holds no values.
    pub fn pop(&mut self) -> Result<T, EvalError> {
        self.items.pop().ok_or(EvalError::EmptyStack)
    }

    /// Borrow the top value without removing it.
    ///
    /// # Errors
    /// Returns [`EvalError::EmptyStack`] when the stack holds no values.
    pub fn peek(&self) -> Result<&T, EvalError> {
        self.items.last().ok_or(EvalError::EmptyStack)
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Values from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Pop the top two values as `(first, second)`, where `second` was pushed
    /// last. The stack is untouched when fewer than two values are present.
    pub(crate) fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.items.len() < 2 {
            return None;
        }
        let second = self.items.pop()?;
        let first = self.items.pop()?;
        Some((first, second))
    }

    /// Take the sole remaining value, or report how many values are left.
    pub(crate) fn into_single(mut self) -> Result<T, EvalError> {
        match self.items.len() {
            1 => self.pop(),
            remaining => Err(EvalError::InvalidExpression { remaining }),
        }
    }
}
