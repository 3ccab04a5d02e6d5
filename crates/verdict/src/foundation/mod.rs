//! Core validation types
//!
//! The fundamental building blocks of the engine:
//!
//! - **[`Verdict`]** — immutable pass/fail outcome with an optional message,
//!   combinable with `|` (OR) and `&` (AND).
//! - **[`Condition`]** — a pure predicate over an optional value, composable
//!   through [`ConditionExt`].
//! - **[`Operator`]** — reduction of many verdicts into one
//!   ([`Conjunction`], [`Disjunction`]).
//!
//! Everything here is synchronous and free of interior state; the reactive
//! machinery lives in [`crate::engine`].

pub mod condition;
pub mod operator;
pub mod verdict;

pub use condition::{Condition, ConditionExt, FnCondition, SharedCondition, condition};
pub use operator::{Conjunction, Disjunction, Operator, SharedOperator};
pub use verdict::Verdict;
