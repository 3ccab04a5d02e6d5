//! Set-of-conditions evaluator
//!
//! A [`Validator`] owns a mutable, insertion-ordered set of shared
//! conditions plus an [`Operator`] that reduces their verdicts. It is
//! itself a [`Condition`], so validators nest.
//!
//! Evaluation is pure: `validate` never mutates the validator. All
//! mutation goes through the explicit `add/remove/change/set` calls, each
//! of which notifies registered listeners after internal borrows are
//! released — a listener may freely re-query or further mutate the
//! validator.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::foundation::{Condition, Conjunction, Operator, SharedCondition, SharedOperator, Verdict};

/// Listener invoked with the new full condition set after each change.
pub type ConditionsChangedListener<T> = Rc<dyn Fn(&[SharedCondition<T>])>;

/// Listener invoked after the operator is replaced; re-query for details.
pub type OperatorChangedListener = Rc<dyn Fn()>;

// ============================================================================
// CONDITION SET
// ============================================================================

/// Mutable view of a validator's condition set, handed to
/// [`Validator::change_conditions`] transforms.
///
/// Preserves the set invariants: insertion order, no duplicates
/// (pointer identity).
pub struct ConditionSet<'a, T: ?Sized> {
    items: &'a mut Vec<SharedCondition<T>>,
}

impl<T: ?Sized> ConditionSet<'_, T> {
    /// Adds a condition; returns `false` if it was already present.
    pub fn add(&mut self, condition: SharedCondition<T>) -> bool {
        if self.contains(&condition) {
            return false;
        }
        self.items.push(condition);
        true
    }

    /// Removes a condition by identity; returns `false` if absent.
    pub fn remove(&mut self, condition: &SharedCondition<T>) -> bool {
        let before = self.items.len();
        self.items.retain(|c| !Rc::ptr_eq(c, condition));
        self.items.len() < before
    }

    /// Whether the condition is present (pointer identity).
    #[must_use]
    pub fn contains(&self, condition: &SharedCondition<T>) -> bool {
        self.items.iter().any(|c| Rc::ptr_eq(c, condition))
    }

    /// Removes every condition.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates a value against a mutable set of conditions.
///
/// Every condition is evaluated in insertion order; the verdicts are
/// reduced by the current operator ([`Conjunction`] by default, so the
/// first failing condition's message is reported and an empty validator
/// accepts everything).
///
/// # Examples
///
/// ```rust
/// use verdict::{Validator, condition};
///
/// let validator = Validator::new();
/// let has_x = condition::<str, _>("no x", |v| v.is_some_and(|s| s.contains('x')));
/// validator.add_condition(has_x.clone());
///
/// assert!(validator.validate(Some("x1")).is_valid());
/// assert_eq!(validator.validate(Some("1")).message(), Some("no x"));
///
/// validator.remove_condition(&has_x);
/// assert!(validator.validate(Some("1")).is_valid());
/// ```
pub struct Validator<T: ?Sized> {
    conditions: RefCell<Vec<SharedCondition<T>>>,
    operator: RefCell<SharedOperator>,
    conditions_listeners: RefCell<Vec<ConditionsChangedListener<T>>>,
    operator_listeners: RefCell<Vec<OperatorChangedListener>>,
}

impl<T: ?Sized + 'static> Validator<T> {
    /// Creates an empty validator with the default [`Conjunction`] operator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: RefCell::new(Vec::new()),
            operator: RefCell::new(Rc::new(Conjunction)),
            conditions_listeners: RefCell::new(Vec::new()),
            operator_listeners: RefCell::new(Vec::new()),
        }
    }

    /// Creates a validator seeded with one condition.
    #[must_use]
    pub fn with_condition(condition: SharedCondition<T>) -> Self {
        let validator = Self::new();
        validator.conditions.borrow_mut().push(condition);
        validator
    }

    /// Creates a validator with a non-default operator.
    #[must_use]
    pub fn with_operator(operator: impl Operator + 'static) -> Self {
        let validator = Self::new();
        *validator.operator.borrow_mut() = Rc::new(operator);
        validator
    }

    /// Creates a validator from a single boolean check.
    #[must_use]
    pub fn from_fn<F>(message: impl Into<std::borrow::Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(Option<&T>) -> bool + 'static,
    {
        Self::with_condition(crate::foundation::condition(message, check))
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    /// Evaluates every condition against `value`, in insertion order, and
    /// reduces the verdicts with the current operator.
    ///
    /// Pure with respect to the validator's own state. A panic inside a
    /// condition propagates to the caller.
    #[must_use]
    pub fn validate(&self, value: Option<&T>) -> Verdict {
        let results: SmallVec<[Verdict; 8]> = self
            .conditions
            .borrow()
            .iter()
            .map(|c| c.evaluate(value))
            .collect();
        // Clone the operator out so it may replace itself mid-apply.
        let operator = Rc::clone(&self.operator.borrow());
        operator.apply(&results)
    }

    // ------------------------------------------------------------------
    // Condition set
    // ------------------------------------------------------------------

    /// Adds a condition.
    ///
    /// Silent no-op when the same condition (by identity) is already
    /// present: the set is unchanged and listeners are not notified.
    pub fn add_condition(&self, condition: SharedCondition<T>) {
        self.change_conditions_silently_if_noop(move |set| set.add(condition));
    }

    /// Removes a condition by identity.
    ///
    /// Silent no-op, without notification, when the condition is absent.
    pub fn remove_condition(&self, condition: &SharedCondition<T>) {
        self.change_conditions_silently_if_noop(move |set| set.remove(condition));
    }

    /// Applies an arbitrary transformation to the condition set
    /// atomically, then fires exactly one change notification with the
    /// resulting set.
    pub fn change_conditions(&self, transform: impl FnOnce(&mut ConditionSet<'_, T>)) {
        {
            let mut items = self.conditions.borrow_mut();
            let mut set = ConditionSet { items: &mut items };
            transform(&mut set);
        }
        self.notify_conditions_changed();
    }

    /// Runs a transform but skips the notification when it reports that
    /// nothing changed.
    fn change_conditions_silently_if_noop(
        &self,
        transform: impl FnOnce(&mut ConditionSet<'_, T>) -> bool,
    ) {
        let changed = {
            let mut items = self.conditions.borrow_mut();
            let mut set = ConditionSet { items: &mut items };
            transform(&mut set)
        };
        if changed {
            self.notify_conditions_changed();
        }
    }

    /// Copy-on-read snapshot of the condition set, in insertion order.
    #[must_use]
    pub fn conditions(&self) -> Vec<SharedCondition<T>> {
        self.conditions.borrow().clone()
    }

    /// Whether the condition is present (pointer identity).
    #[must_use]
    pub fn contains(&self, condition: &SharedCondition<T>) -> bool {
        self.conditions
            .borrow()
            .iter()
            .any(|c| Rc::ptr_eq(c, condition))
    }

    // ------------------------------------------------------------------
    // Operator
    // ------------------------------------------------------------------

    /// Replaces the operator and fires exactly one operator-changed
    /// notification.
    pub fn set_operator(&self, operator: impl Operator + 'static) {
        *self.operator.borrow_mut() = Rc::new(operator);
        tracing::debug!("validator operator replaced");
        let listeners: Vec<OperatorChangedListener> = self.operator_listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    /// The current operator.
    #[must_use]
    pub fn operator(&self) -> SharedOperator {
        Rc::clone(&self.operator.borrow())
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Registers a condition-set-changed listener.
    pub fn add_conditions_listener(&self, listener: ConditionsChangedListener<T>) {
        self.conditions_listeners.borrow_mut().push(listener);
    }

    /// Removes a condition-set-changed listener by identity.
    pub fn remove_conditions_listener(&self, listener: &ConditionsChangedListener<T>) {
        self.conditions_listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    /// Registers an operator-changed listener.
    pub fn add_operator_listener(&self, listener: OperatorChangedListener) {
        self.operator_listeners.borrow_mut().push(listener);
    }

    /// Removes an operator-changed listener by identity.
    pub fn remove_operator_listener(&self, listener: &OperatorChangedListener) {
        self.operator_listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    fn notify_conditions_changed(&self) {
        let snapshot = self.conditions();
        tracing::debug!(conditions = snapshot.len(), "condition set changed");
        let listeners: Vec<ConditionsChangedListener<T>> =
            self.conditions_listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<T: ?Sized + 'static> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("conditions", &self.conditions.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A validator is itself a condition and can join another validator's
/// condition set.
impl<T: ?Sized + 'static> Condition<T> for Validator<T> {
    fn evaluate(&self, value: Option<&T>) -> Verdict {
        self.validate(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
