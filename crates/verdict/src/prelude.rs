//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict::prelude::*;` import that brings in
//! the commonly needed traits, types, conditions, and engine pieces.
//!
//! # Examples
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let username = required().and(min_length(3)).and(max_length(20));
//! assert!(username.evaluate(Some("ada")).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Verdicts, conditions, operators
// ============================================================================

pub use crate::foundation::{
    Condition, ConditionExt, Conjunction, Disjunction, FnCondition, Operator, SharedCondition,
    SharedOperator, Verdict, condition,
};

// ============================================================================
// CONDITIONS: The standard condition library
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::conditions::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Or, and, or};

// ============================================================================
// ENGINE: Validators, live binding, aggregation
// ============================================================================

pub use crate::engine::{ConditionSet, LiveValidator, Mux, Validator, VerdictSource};

// ============================================================================
// SIGNALS
// ============================================================================

pub use crate::signal::{ReadSignal, Signal, Subscription};
