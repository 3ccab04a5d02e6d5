//! # verdict
//!
//! A composable, reactive value-validation engine.
//!
//! Values live in replay-latest [`Signal`]s; a [`LiveValidator`] binds a
//! mutable rule set to one of them and publishes a [`Verdict`] stream
//! that re-evaluates on every emission or rule change; a [`Mux`] folds
//! several such streams into one aggregate answer. Everything is
//! single-threaded and callback-driven.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let username: Signal<String> = Signal::new();
//! let live = LiveValidator::new(&username);
//! live.add_condition(required().shared());
//! live.add_condition(min_length(3).and(max_length(20)).shared());
//!
//! let _watch = live.state().subscribe(|verdict| {
//!     // drive the UI from here
//!     let _ = verdict;
//! });
//!
//! username.set("ada".to_string());
//! assert!(live.validate().is_valid());
//! ```
//!
//! ## Building Blocks
//!
//! - **Verdicts**: [`Verdict`] — validity plus an optional message,
//!   combinable with `|` and `&`
//! - **Conditions**: the [`Condition`] trait, closure-backed
//!   [`condition`], the [`text_condition!`] macro, and the standard
//!   library in [`conditions`] ([`required`](conditions::required),
//!   [`min_length`](conditions::min_length), [`pattern`](conditions::pattern), ...)
//! - **Combinators**: [`And`](combinators::And) / [`Or`](combinators::Or)
//!   via [`ConditionExt::and`] / [`ConditionExt::or`], plus the
//!   [`all_of!`] / [`any_of!`] macros
//! - **Operators**: [`Conjunction`], [`Disjunction`], or any
//!   `Fn(&[Verdict]) -> Verdict`
//! - **Engine**: [`Validator`], [`LiveValidator`], [`Mux`]

// Combinator nesting (And<And<Required, MinLength>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod conditions;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod signal;

pub use combinators::{And, Or};
pub use conditions::PatternError;
pub use engine::{
    ConditionSet, ConditionsChangedListener, LiveValidator, Mux, OperatorChangedListener,
    Validator, VerdictSource,
};
pub use foundation::{
    Condition, ConditionExt, Conjunction, Disjunction, FnCondition, Operator, SharedCondition,
    SharedOperator, Verdict, condition,
};
pub use signal::{ReadSignal, Signal, Subscription};
