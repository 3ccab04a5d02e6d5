//! The condition contract
//!
//! A [`Condition`] is a pure predicate over an optional value, producing a
//! [`Verdict`]. Conditions must be total: an absent value is a normal case,
//! not an error, and every condition defines explicit behavior for it.
//!
//! Conditions compose algebraically through [`ConditionExt::and`] and
//! [`ConditionExt::or`]; both operands are always evaluated (no
//! short-circuit) so the message-selection rule of [`Verdict`] combination
//! is well-defined regardless of operand order.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::combinators::{And, Or};
use crate::foundation::Verdict;

// ============================================================================
// CORE CONDITION TRAIT
// ============================================================================

/// A pure predicate from an optional value to a [`Verdict`].
///
/// The trait is generic over the input type rather than using an
/// associated type so that one condition can serve several input types
/// (e.g. the text conditions apply to any `T: AsRef<str>`).
///
/// # Contract
///
/// * `evaluate` is deterministic and side-effect-free: the same value
///   always yields the same verdict.
/// * `evaluate` must not panic for any input, including `None`.
///
/// A condition that panics anyway is a caller bug; the engine performs no
/// containment and lets the panic propagate.
///
/// # Examples
///
/// ```rust
/// use verdict::{Condition, Verdict};
///
/// struct ContainsX;
///
/// impl Condition<str> for ContainsX {
///     fn evaluate(&self, value: Option<&str>) -> Verdict {
///         if value.is_some_and(|s| s.contains('x')) {
///             Verdict::valid()
///         } else {
///             Verdict::invalid("no x")
///         }
///     }
/// }
///
/// assert!(ContainsX.evaluate(Some("axb")).is_valid());
/// assert!(!ContainsX.evaluate(None).is_valid());
/// ```
pub trait Condition<T: ?Sized> {
    /// Evaluates the condition against the given value.
    fn evaluate(&self, value: Option<&T>) -> Verdict;
}

/// A reference-counted, type-erased condition.
///
/// This is the unit of identity inside a [`Validator`](crate::Validator):
/// two shared conditions are the same condition iff they point at the same
/// allocation ([`Rc::ptr_eq`]).
pub type SharedCondition<T> = Rc<dyn Condition<T>>;

// Conditions evaluate through shared pointers and references unchanged.

impl<T: ?Sized, C: Condition<T> + ?Sized> Condition<T> for &C {
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        (**self).evaluate(value)
    }
}

impl<T: ?Sized, C: Condition<T> + ?Sized> Condition<T> for Box<C> {
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        (**self).evaluate(value)
    }
}

impl<T: ?Sized, C: Condition<T> + ?Sized> Condition<T> for Rc<C> {
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        (**self).evaluate(value)
    }
}

// ============================================================================
// CONDITION EXTENSION TRAIT
// ============================================================================

/// Combinator methods on conditions.
///
/// Deliberately not generic over the input type: conditions like the text
/// library implement [`Condition<T>`] for a whole family of inputs, and a
/// `T` parameter here would force every `.and(...)` chain to name one.
/// The input type is pinned where it matters — at [`evaluate`](Condition::evaluate)
/// or [`shared`](Self::shared) — and a type error in a chain still
/// surfaces there.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let length = min_length(3).and(max_length(20));
/// assert!(length.evaluate(Some("hello")).is_valid());
/// assert!(!length.evaluate(Some("hi")).is_valid());
/// ```
pub trait ConditionExt: Sized {
    /// Combines two conditions with logical AND.
    ///
    /// Both conditions are always evaluated; the verdicts combine with
    /// [`Verdict`]'s `&` operator, so the first failing condition's
    /// message wins.
    fn and<C>(self, other: C) -> And<Self, C> {
        And::new(self, other)
    }

    /// Combines two conditions with logical OR.
    ///
    /// Both conditions are always evaluated; the verdicts combine with
    /// [`Verdict`]'s `|` operator.
    fn or<C>(self, other: C) -> Or<Self, C> {
        Or::new(self, other)
    }

    /// Moves the condition behind an `Rc`, giving it a stable identity.
    ///
    /// Required for membership in a [`Validator`](crate::Validator), where
    /// conditions are added and removed by pointer identity. This is the
    /// point where a multi-input condition commits to one input type;
    /// usually inferred from the validator it joins.
    fn shared<T>(self) -> SharedCondition<T>
    where
        Self: Condition<T> + 'static,
        T: ?Sized + 'static,
    {
        Rc::new(self)
    }
}

impl<C> ConditionExt for C {}

// ============================================================================
// CLOSURE CONDITIONS
// ============================================================================

/// A condition backed by a boolean closure plus an error message.
///
/// Created through [`FnCondition::new`] or the [`condition`] factory.
pub struct FnCondition<T: ?Sized, F> {
    check: F,
    message: Option<Cow<'static, str>>,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FnCondition<T, F>
where
    F: Fn(Option<&T>) -> bool,
{
    /// Creates a closure condition with no message.
    pub fn new(check: F) -> Self {
        Self {
            check,
            message: None,
            _input: PhantomData,
        }
    }

    /// Sets the message reported when the check fails.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: ?Sized, F> Condition<T> for FnCondition<T, F>
where
    F: Fn(Option<&T>) -> bool,
{
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        if (self.check)(value) {
            Verdict::valid()
        } else {
            Verdict::of(false, self.message.clone())
        }
    }
}

impl<T: ?Sized, F> std::fmt::Debug for FnCondition<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCondition")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Creates a shared closure condition with an error message.
///
/// The returned [`SharedCondition`] has a stable identity and can be added
/// to and removed from validators.
///
/// # Examples
///
/// ```rust
/// use verdict::condition;
///
/// let has_x = condition::<String, _>("no x", |v| v.is_some_and(|s| s.contains('x')));
/// assert!(has_x.evaluate(Some(&"axb".to_string())).is_valid());
/// assert_eq!(has_x.evaluate(None).message(), Some("no x"));
/// ```
pub fn condition<T, F>(message: impl Into<Cow<'static, str>>, check: F) -> SharedCondition<T>
where
    T: ?Sized + 'static,
    F: Fn(Option<&T>) -> bool + 'static,
{
    Rc::new(FnCondition::new(check).with_message(message))
}

// ============================================================================
// TESTS
// ============================================================================
