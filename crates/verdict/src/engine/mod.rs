//! Validation engine
//!
//! The three moving parts of the crate:
//!
//! - [`Validator`] — a mutable, observable set of conditions folded by
//!   an [`Operator`](crate::Operator)
//! - [`LiveValidator`] — a validator bound to a [`Signal`](crate::Signal),
//!   publishing verdicts reactively
//! - [`Mux`] — an aggregate over several verdict streams

pub mod live;
pub mod mux;
pub mod validator;

pub use live::LiveValidator;
pub use mux::{Mux, VerdictSource};
pub use validator::{
    ConditionSet, ConditionsChangedListener, OperatorChangedListener, Validator,
};
