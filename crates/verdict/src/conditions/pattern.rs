//! Regular-expression condition

use std::borrow::Cow;

use regex::Regex;

use crate::foundation::{Condition, Verdict};

/// Error building a [`Pattern`] condition.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// Requires the entire text to match a regular expression.
///
/// The pattern is anchored at construction (`^(?:pat)$`), so partial
/// matches are not enough — the behavior of whole-string matching, not of
/// `Regex::is_match`. An absent value is matched as the empty string.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let digits = pattern(r"\d+")?;
/// assert!(digits.evaluate(Some("123")).is_valid());
/// assert!(!digits.evaluate(Some("123a")).is_valid());
/// assert!(!digits.evaluate(None::<&str>).is_valid());
/// # Ok::<(), verdict::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: Option<Cow<'static, str>>,
}

impl Pattern {
    /// Compiles `pattern` into a whole-string condition.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            regex,
            message: None,
        })
    }

    /// Overrides the error message reported on failure.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> Condition<T> for Pattern
where
    T: AsRef<str> + ?Sized,
{
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        let text = value.map_or("", AsRef::as_ref);
        if self.regex.is_match(text) {
            Verdict::valid()
        } else {
            match &self.message {
                Some(m) => Verdict::invalid(m.clone()),
                None => Verdict::invalid("Text does not match given pattern"),
            }
        }
    }
}

/// Creates a [`Pattern`] condition.
///
/// # Errors
///
/// Returns [`PatternError`] when the pattern does not compile.
pub fn pattern(pattern: &str) -> Result<Pattern, PatternError> {
    Pattern::new(pattern)
}
