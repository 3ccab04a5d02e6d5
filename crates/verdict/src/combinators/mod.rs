//! Condition combinators
//!
//! Algebraic composition of conditions: [`And`] and [`Or`]. Usually
//! reached through [`ConditionExt`](crate::ConditionExt) rather than
//! constructed directly:
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let username = required().and(min_length(3)).and(max_length(20));
//! assert!(username.evaluate(Some("alice")).is_valid());
//! assert!(!username.evaluate(None::<&str>).is_valid());
//! ```

pub mod and;
pub mod or;

pub use and::{And, and};
pub use or::{Or, or};
