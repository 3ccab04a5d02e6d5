//! AND combinator - logical conjunction of two conditions
//!
//! Unlike a short-circuiting `&&`, both sides are always evaluated: the
//! verdict message-selection rule needs both verdicts, and conditions are
//! pure so the extra evaluation is observable only to instrumentation.

use crate::foundation::{Condition, Verdict};

/// Combines two conditions with logical AND.
///
/// The combined verdict is `left & right`; the first failing condition's
/// non-blank message wins.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let validator = min_length(5).and(max_length(10));
/// assert!(validator.evaluate(Some("hello")).is_valid());
/// assert!(!validator.evaluate(Some("hi")).is_valid());
/// assert!(!validator.evaluate(Some("verylongstring")).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<T, L, R> Condition<T> for And<L, R>
where
    T: ?Sized,
    L: Condition<T>,
    R: Condition<T>,
{
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        self.left.evaluate(value) & self.right.evaluate(value)
    }
}

/// Creates an [`And`] combinator from two conditions.
pub const fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}
