//! OR combinator - logical disjunction of two conditions
//!
//! Both sides are always evaluated; see the module docs of
//! [`super::and`] for why there is no short-circuit.

use crate::foundation::{Condition, Verdict};

/// Combines two conditions with logical OR.
///
/// The combined verdict is `left | right`: valid when either side is
/// valid, and then without a message.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let validator = exact_length(5).or(exact_length(10));
/// assert!(validator.evaluate(Some("hello")).is_valid());
/// assert!(validator.evaluate(Some("helloworld")).is_valid());
/// assert!(!validator.evaluate(Some("hi")).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left condition.
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right condition.
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the two conditions.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<T, L, R> Condition<T> for Or<L, R>
where
    T: ?Sized,
    L: Condition<T>,
    R: Condition<T>,
{
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        self.left.evaluate(value) | self.right.evaluate(value)
    }
}

/// Creates an [`Or`] combinator from two conditions.
pub const fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}
