//! Standard condition library
//!
//! Reusable, purely synchronous conditions consumed by
//! [`Validator`](crate::Validator):
//!
//! - **Presence**: [`NotNull`] (any type), [`Required`] (non-blank text)
//! - **Length**: [`MinLength`], [`MaxLength`], [`LengthRange`],
//!   [`ExactLength`] — measured in chars, absent counts as length 0
//! - **Shape**: [`Pattern`] — whole-string regular-expression match
//!
//! Every condition carries a default human-readable message, overridable
//! via `with_message`. Custom text conditions are one
//! [`text_condition!`](crate::text_condition) invocation away.

pub mod nullable;
pub mod pattern;
pub mod text;

pub use nullable::{NotNull, not_null};
pub use pattern::{Pattern, PatternError, pattern};
pub use text::{
    ExactLength, LengthRange, MaxLength, MinLength, Required, exact_length, length_range,
    max_length, min_length, required,
};
