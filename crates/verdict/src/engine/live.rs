//! Validator bound to a live signal
//!
//! A [`LiveValidator`] couples a [`Validator`] to a primary [`Signal`]
//! fixed at construction and exposes its verdict as a replay-latest
//! stream. It re-evaluates on every source emission, condition-set
//! change, or operator change, and can track auxiliary signals that
//! either trigger re-validation or run arbitrary side effects.
//!
//! # Activation
//!
//! The validator is dormant until its [`state`](LiveValidator::state)
//! stream has an observer: source emissions cause no evaluation while
//! nobody is watching. The first subscription evaluates once against the
//! then-current source value, so observers always see an initial verdict
//! computed from live data, never a stale cache. Explicit calls —
//! [`validate`](LiveValidator::validate) and the condition/operator
//! mutation API — always evaluate, dormant or not.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::engine::validator::{ConditionSet, Validator};
use crate::foundation::{Operator, SharedCondition, SharedOperator, Verdict};
use crate::signal::{ReadSignal, Signal, Subscription};

/// Auxiliary dependency bookkeeping: the signal's identity plus the
/// subscription feeding it into this validator.
struct Tracked {
    key: usize,
    _subscription: Subscription,
}

// ============================================================================
// LIVE VALIDATOR
// ============================================================================

/// A [`Validator`] bound to an observable source.
///
/// # Examples
///
/// ```rust
/// use verdict::{LiveValidator, Signal, condition};
///
/// let source: Signal<String> = Signal::new();
/// let live = LiveValidator::new(&source);
/// live.add_condition(condition("no x", |v: Option<&String>| {
///     v.is_some_and(|s| s.contains('x'))
/// }));
///
/// let _watch = live.state().subscribe(|verdict| {
///     // push verdicts into the UI layer
///     let _ = verdict;
/// });
///
/// source.set("x123".to_string());
/// assert!(live.validate().is_valid());
/// ```
pub struct LiveValidator<T: 'static> {
    validator: Validator<T>,
    source: Signal<T>,
    state: Signal<Verdict>,
    /// Self-handle for wiring new subscriptions without keeping the
    /// validator alive through its own callbacks.
    weak: Weak<Self>,
    tracked: RefCell<Vec<Tracked>>,
    /// Keeps the primary-source subscription alive for the validator's
    /// whole life.
    _wiring: RefCell<Vec<Subscription>>,
}

impl<T: 'static> LiveValidator<T> {
    /// Binds a new validator to `source`.
    ///
    /// The source is fixed for the validator's lifetime.
    #[must_use]
    pub fn new(source: &Signal<T>) -> Rc<Self> {
        Self::build(source, Validator::new())
    }

    /// Binds a validator seeded with one condition.
    #[must_use]
    pub fn with_condition(source: &Signal<T>, condition: SharedCondition<T>) -> Rc<Self> {
        Self::build(source, Validator::with_condition(condition))
    }

    /// Binds a validator with a non-default operator.
    #[must_use]
    pub fn with_operator(source: &Signal<T>, operator: impl Operator + 'static) -> Rc<Self> {
        Self::build(source, Validator::with_operator(operator))
    }

    fn build(source: &Signal<T>, validator: Validator<T>) -> Rc<Self> {
        let live = Rc::new_cyclic(|weak| Self {
            validator,
            source: source.clone(),
            state: Signal::new(),
            weak: weak.clone(),
            tracked: RefCell::new(Vec::new()),
            _wiring: RefCell::new(Vec::new()),
        });

        // Source emissions re-validate only while someone watches the
        // verdict stream; the subscription itself lives as long as the
        // validator.
        let weak = Rc::downgrade(&live);
        let feed = source.subscribe(move |value| {
            if let Some(live) = weak.upgrade() {
                if live.state.has_observers() {
                    tracing::trace!("source emission, re-validating");
                    live.apply(value);
                }
            }
        });
        live._wiring.borrow_mut().push(feed);

        // Explicit rule mutations always re-validate, dormant or not.
        let weak = Rc::downgrade(&live);
        live.validator
            .add_conditions_listener(Rc::new(move |_: &[SharedCondition<T>]| {
                if let Some(live) = weak.upgrade() {
                    live.validate();
                }
            }));
        let weak = Rc::downgrade(&live);
        live.validator.add_operator_listener(Rc::new(move || {
            if let Some(live) = weak.upgrade() {
                live.validate();
            }
        }));

        // First observer: evaluate once against the live current value.
        let weak = Rc::downgrade(&live);
        live.state.on_first_subscribe(move || {
            if let Some(live) = weak.upgrade() {
                tracing::trace!("verdict stream activated");
                live.validate();
            }
        });

        live
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    /// Forces an evaluation against the source's current value,
    /// regardless of activation, updating the verdict stream.
    ///
    /// The source borrow is released before the verdict is published, so
    /// state observers are free to touch the source.
    pub fn validate(&self) -> Verdict {
        let verdict = self.source.read(|value| self.validator.validate(value));
        self.state.set(verdict.clone());
        verdict
    }

    /// Evaluates an explicit value and publishes the verdict.
    fn apply(&self, value: Option<&T>) -> Verdict {
        let verdict = self.validator.validate(value);
        self.state.set(verdict.clone());
        verdict
    }

    /// The verdict stream: replay-latest, read-only.
    #[must_use]
    pub fn state(&self) -> ReadSignal<Verdict> {
        self.state.reader()
    }

    /// The bound source.
    #[must_use]
    pub fn source(&self) -> &Signal<T> {
        &self.source
    }

    /// The underlying rule set.
    ///
    /// Mutations through the returned reference re-validate exactly like
    /// the delegating methods below.
    #[must_use]
    pub fn rules(&self) -> &Validator<T> {
        &self.validator
    }

    // ------------------------------------------------------------------
    // Delegated rule mutation (each call re-validates via the listeners
    // wired in `build`)
    // ------------------------------------------------------------------

    /// Adds a condition; see [`Validator::add_condition`].
    pub fn add_condition(&self, condition: SharedCondition<T>) {
        self.validator.add_condition(condition);
    }

    /// Removes a condition; see [`Validator::remove_condition`].
    pub fn remove_condition(&self, condition: &SharedCondition<T>) {
        self.validator.remove_condition(condition);
    }

    /// Transforms the condition set atomically; see
    /// [`Validator::change_conditions`].
    pub fn change_conditions(&self, transform: impl FnOnce(&mut ConditionSet<'_, T>)) {
        self.validator.change_conditions(transform);
    }

    /// Replaces the operator; see [`Validator::set_operator`].
    pub fn set_operator(&self, operator: impl Operator + 'static) {
        self.validator.set_operator(operator);
    }

    /// Copy-on-read snapshot of the condition set.
    #[must_use]
    pub fn conditions(&self) -> Vec<SharedCondition<T>> {
        self.validator.conditions()
    }

    /// The current operator.
    #[must_use]
    pub fn operator(&self) -> SharedOperator {
        self.validator.operator()
    }

    // ------------------------------------------------------------------
    // Auxiliary sources
    // ------------------------------------------------------------------

    /// Tracks `other`: while the verdict stream is observed, any emission
    /// from `other` re-validates the *primary* source's current value.
    pub fn trigger_on<U: 'static>(&self, other: &Signal<U>) {
        let weak = self.weak.clone();
        let subscription = other.subscribe(move |_| {
            if let Some(live) = weak.upgrade() {
                if live.state.has_observers() {
                    tracing::trace!("auxiliary trigger fired, re-validating");
                    live.validate();
                }
            }
        });
        self.tracked.borrow_mut().push(Tracked {
            key: other.key(),
            _subscription: subscription,
        });
    }

    /// Watches `other`: while the verdict stream is observed, any
    /// emission from `other` runs `callback` with the emitted value. No
    /// re-validation happens; the callback may mutate this validator's
    /// rule set, which re-validates through the normal path.
    pub fn watch_on<U: 'static>(&self, other: &Signal<U>, callback: impl Fn(Option<&U>) + 'static) {
        let weak = self.weak.clone();
        let subscription = other.subscribe(move |value| {
            if let Some(live) = weak.upgrade() {
                if live.state.has_observers() {
                    callback(value);
                }
            }
        });
        self.tracked.borrow_mut().push(Tracked {
            key: other.key(),
            _subscription: subscription,
        });
    }

    /// Stops tracking `other`, removing every dependency registered for
    /// it. Silent no-op when the signal was never tracked.
    pub fn untrack<U: 'static>(&self, other: &Signal<U>) {
        let key = other.key();
        self.tracked.borrow_mut().retain(|t| t.key != key);
    }
}

impl<T: 'static> fmt::Debug for LiveValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveValidator")
            .field("validator", &self.validator)
            .field("tracked", &self.tracked.borrow().len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
