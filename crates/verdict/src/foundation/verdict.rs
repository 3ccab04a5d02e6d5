//! The verdict value type
//!
//! A [`Verdict`] is the immutable outcome of evaluating a condition:
//! pass/fail plus an optional human-readable message. Verdicts combine
//! with `|` (logical OR) and `&` (logical AND); see the operator impls
//! for the message-selection rules.
//!
//! Uses `Cow<'static, str>` for zero-allocation when messages are known
//! at compile time (the common case).

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr};

// ============================================================================
// VERDICT
// ============================================================================

/// The outcome of a validation: valid or invalid, with an optional message.
///
/// A message is only meaningful on an invalid verdict; every constructor
/// and combinator discards messages from valid results.
///
/// # Examples
///
/// ```rust
/// use verdict::Verdict;
///
/// let ok = Verdict::valid();
/// let err = Verdict::invalid("too short");
///
/// assert!(ok.is_valid());
/// assert_eq!(err.message(), Some("too short"));
///
/// // OR: valid wins, messages of valid results are dropped
/// assert!((ok.clone() | err.clone()).is_valid());
///
/// // AND: the first invalid operand's message wins
/// assert_eq!((ok & err).message(), Some("too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    valid: bool,
    message: Option<Cow<'static, str>>,
}

impl Verdict {
    /// Creates a valid verdict. Valid verdicts never carry a message.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// Creates an invalid verdict with a message.
    #[must_use]
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Creates an invalid verdict with no message.
    ///
    /// Used where no single condition can be blamed for the failure,
    /// e.g. a disjunction over results that are all invalid.
    #[must_use]
    pub const fn invalid_unexplained() -> Self {
        Self {
            valid: false,
            message: None,
        }
    }

    /// Creates a verdict from a flag and an optional message.
    ///
    /// The message is kept only when the verdict is invalid.
    #[must_use]
    pub fn of(valid: bool, message: Option<Cow<'static, str>>) -> Self {
        if valid {
            Self::valid()
        } else {
            Self {
                valid: false,
                message,
            }
        }
    }

    /// Whether the validated value passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consumes the verdict, returning its message.
    #[must_use]
    pub fn into_message(self) -> Option<Cow<'static, str>> {
        self.message
    }

    /// A message that is present and not all-whitespace.
    ///
    /// Blank messages are ignored by the combination rules below, exactly
    /// like absent ones.
    fn usable_message(&self) -> Option<&Cow<'static, str>> {
        self.message.as_ref().filter(|m| !m.trim().is_empty())
    }

    /// First-invalid-non-blank message selection, shared by OR and AND.
    fn combined_message(&self, other: &Self) -> Option<Cow<'static, str>> {
        if !self.valid {
            if let Some(m) = self.usable_message() {
                return Some(m.clone());
            }
        }
        if !other.valid {
            if let Some(m) = other.usable_message() {
                return Some(m.clone());
            }
        }
        None
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "valid")
        } else {
            match self.message() {
                Some(m) => write!(f, "invalid: {m}"),
                None => write!(f, "invalid"),
            }
        }
    }
}

// ============================================================================
// COMBINATION: `|` is OR, `&` is AND
// ============================================================================

/// Logical OR of two verdicts.
///
/// The result is valid when either operand is valid, and then carries no
/// message. When both are invalid, the first operand's non-blank message
/// wins, else the second's.
impl BitOr for Verdict {
    type Output = Verdict;

    fn bitor(self, rhs: Verdict) -> Verdict {
        let message = self.combined_message(&rhs);
        Verdict::of(self.valid || rhs.valid, message)
    }
}

/// Logical AND of two verdicts.
///
/// The result is valid only when both operands are valid. The message is
/// the first invalid operand's non-blank message; when both are invalid,
/// the first operand wins.
impl BitAnd for Verdict {
    type Output = Verdict;

    fn bitand(self, rhs: Verdict) -> Verdict {
        let message = self.combined_message(&rhs);
        Verdict::of(self.valid && rhs.valid, message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
