//! Presence condition for any value type

use std::borrow::Cow;

use crate::foundation::{Condition, Verdict};

/// Requires the value to be present; the content is not inspected.
///
/// Unlike [`Required`](super::Required) this applies to values of any
/// type, not just text, and accepts empty or blank text.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let c = not_null();
/// assert!(c.evaluate(Some(&42)).is_valid());
/// assert!(!c.evaluate(None::<&i32>).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotNull {
    message: Option<Cow<'static, str>>,
}

impl NotNull {
    /// Creates the condition with its default error message.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Overrides the error message reported on failure.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: ?Sized> Condition<T> for NotNull {
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        if value.is_some() {
            Verdict::valid()
        } else {
            match &self.message {
                Some(m) => Verdict::invalid(m.clone()),
                None => Verdict::invalid("Value must be present"),
            }
        }
    }
}

/// Creates a [`NotNull`] condition.
#[must_use]
pub const fn not_null() -> NotNull {
    NotNull::new()
}
