//! Single-threaded observable value cell
//!
//! [`Signal`] is the observable-source contract of the engine made
//! concrete: it holds a current (possibly absent) value, delivers every
//! mutation synchronously to its subscribers in registration order, and
//! replays the latest value to new subscribers. [`ReadSignal`] is the
//! read-only view handed to consumers; [`Subscription`] is the RAII guard
//! that removes an observer when dropped.
//!
//! Delivery is version-tracked: an observer never sees the same emission
//! twice, even when a subscription-time activation hook already pushed a
//! fresh value at it.
//!
//! The cell is cooperative and `!Send` by construction (`Rc`/`RefCell`).
//! A single logical mutation runs to completion before `set` returns;
//! setting a signal from inside one of its own observer callbacks is
//! outside the contract.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(Option<&T>)>;
type Hook = Rc<dyn Fn()>;

struct Observer<T> {
    id: u64,
    /// Version of the last emission delivered to this observer.
    last_seen: Cell<u64>,
    callback: Callback<T>,
}

struct Shared<T> {
    value: RefCell<Option<T>>,
    /// Bumped on every `set`; 0 means the signal was never set.
    version: Cell<u64>,
    observers: RefCell<Vec<Rc<Observer<T>>>>,
    next_id: Cell<u64>,
    on_first_subscribe: RefCell<Option<Hook>>,
    on_last_unsubscribe: RefCell<Option<Hook>>,
}

impl<T> Shared<T> {
    fn remove_observer(&self, id: u64) {
        let became_inactive = {
            let mut observers = self.observers.borrow_mut();
            let before = observers.len();
            observers.retain(|o| o.id != id);
            before > 0 && observers.is_empty()
        };
        if became_inactive {
            let hook = self.on_last_unsubscribe.borrow().clone();
            if let Some(hook) = hook {
                hook();
            }
        }
    }
}

// ============================================================================
// SIGNAL
// ============================================================================

/// An observable, mutable value cell with replay-latest semantics.
///
/// Cloning a `Signal` clones the handle, not the cell: all clones share
/// the same value and observer list.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use verdict::Signal;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let signal = Signal::new();
///
/// let sink = seen.clone();
/// let _sub = signal.subscribe(move |v: Option<&i32>| {
///     sink.borrow_mut().push(v.copied());
/// });
///
/// signal.set(1);
/// signal.set(None);
/// assert_eq!(*seen.borrow(), vec![Some(1), None]);
/// ```
pub struct Signal<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("version", &self.shared.version.get())
            .field("observers", &self.shared.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<T> Signal<T> {
    /// Creates an empty signal: no value yet, nothing to replay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(None),
                version: Cell::new(0),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                on_first_subscribe: RefCell::new(None),
                on_last_unsubscribe: RefCell::new(None),
            }),
        }
    }

    /// Creates a signal holding an initial value.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        let signal = Self::new();
        *signal.shared.value.borrow_mut() = Some(value);
        signal.shared.version.set(1);
        signal
    }

    /// Replaces the current value and notifies every observer.
    ///
    /// `set(None)` is a regular emission of an absent value, distinct
    /// from "never set".
    pub fn set(&self, value: impl Into<Option<T>>) {
        *self.shared.value.borrow_mut() = value.into();
        self.shared.version.set(self.shared.version.get() + 1);
        self.dispatch();
    }

    /// Clones the current value, if any.
    #[must_use]
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.shared.value.borrow().clone()
    }

    /// Reads the current value without cloning.
    pub fn read<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        f(self.shared.value.borrow().as_ref())
    }

    /// Whether the signal has ever been set.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.shared.version.get() > 0
    }

    /// Number of current observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.observers.borrow().len()
    }

    /// Whether anyone is observing the signal.
    #[must_use]
    pub fn has_observers(&self) -> bool {
        self.observer_count() > 0
    }

    /// Registers an observer, replaying the latest value to it.
    ///
    /// On the 0→1 observer transition the first-subscribe hook runs
    /// before replay; whatever it pushes counts as the replayed value, so
    /// the new observer still receives exactly one initial delivery.
    ///
    /// The observer is removed when the returned [`Subscription`] is
    /// dropped or cancelled.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(Option<&T>) + 'static) -> Subscription
    where
        T: 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);

        let observer = Rc::new(Observer {
            id,
            last_seen: Cell::new(0),
            callback: Rc::new(callback),
        });

        let became_active = {
            let mut observers = self.shared.observers.borrow_mut();
            observers.push(Rc::clone(&observer));
            observers.len() == 1
        };

        if became_active {
            let hook = self.shared.on_first_subscribe.borrow().clone();
            if let Some(hook) = hook {
                hook();
            }
        }

        // Replay the latest value unless the activation hook already
        // delivered a fresher one through a regular dispatch.
        let version = self.shared.version.get();
        if version > observer.last_seen.get() {
            observer.last_seen.set(version);
            let value = self.shared.value.borrow();
            (observer.callback)(value.as_ref());
        }

        let weak = Rc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.remove_observer(id);
                }
            })),
        }
    }

    /// Installs the hook run when the observer count goes 0→1.
    pub fn on_first_subscribe(&self, hook: impl Fn() + 'static) {
        *self.shared.on_first_subscribe.borrow_mut() = Some(Rc::new(hook));
    }

    /// Installs the hook run when the observer count goes 1→0.
    pub fn on_last_unsubscribe(&self, hook: impl Fn() + 'static) {
        *self.shared.on_last_unsubscribe.borrow_mut() = Some(Rc::new(hook));
    }

    /// Returns the read-only view of this signal.
    #[must_use]
    pub fn reader(&self) -> ReadSignal<T> {
        ReadSignal {
            signal: self.clone(),
        }
    }

    /// Identity of the underlying cell, for dependency bookkeeping.
    pub(crate) fn key(&self) -> usize {
        Rc::as_ptr(&self.shared) as usize
    }

    fn dispatch(&self) {
        let snapshot: Vec<Rc<Observer<T>>> = self.shared.observers.borrow().clone();
        let version = self.shared.version.get();
        for observer in snapshot {
            // An observer unsubscribed by an earlier callback of this
            // same dispatch no longer receives the emission.
            let still_subscribed = self
                .shared
                .observers
                .borrow()
                .iter()
                .any(|o| o.id == observer.id);
            if !still_subscribed || observer.last_seen.get() >= version {
                continue;
            }
            observer.last_seen.set(version);
            let value = self.shared.value.borrow();
            (observer.callback)(value.as_ref());
        }
    }
}

// ============================================================================
// READ-ONLY VIEW
// ============================================================================

/// Read-only view of a [`Signal`].
///
/// Consumers of a verdict stream receive this type: they can read,
/// subscribe, and nothing else.
pub struct ReadSignal<T> {
    signal: Signal<T>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<T> fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadSignal")
            .field("signal", &self.signal)
            .finish()
    }
}

impl<T> ReadSignal<T> {
    /// Clones the current value, if any.
    #[must_use]
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.signal.get()
    }

    /// Reads the current value without cloning.
    pub fn read<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.signal.read(f)
    }

    /// Whether the signal has ever been set.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.signal.has_value()
    }

    /// Registers an observer; see [`Signal::subscribe`].
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(Option<&T>) + 'static) -> Subscription
    where
        T: 'static,
    {
        self.signal.subscribe(callback)
    }
}

// ============================================================================
// SUBSCRIPTION GUARD
// ============================================================================

/// RAII guard for an observer registration.
///
/// Dropping (or [`cancel`](Self::cancel)-ing) the guard removes the
/// observer immediately for all future emissions; an in-flight delivery
/// already dispatched is not retracted.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Explicitly removes the observer.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn collector() -> (Rc<RefCell<Vec<Option<String>>>>, impl Fn(Option<&String>)) {
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: Option<&String>| {
            sink.borrow_mut().push(v.cloned());
        })
    }

    #[test]
    fn replays_latest_value_to_new_subscriber() {
        let signal = Signal::with_value("a".to_string());
        let (seen, cb) = collector();

        let _sub = signal.subscribe(cb);
        assert_eq!(*seen.borrow(), vec![Some("a".to_string())]);
    }

    #[test]
    fn no_replay_before_first_set() {
        let signal: Signal<String> = Signal::new();
        let (seen, cb) = collector();

        let _sub = signal.subscribe(cb);
        assert!(seen.borrow().is_empty());
        assert!(!signal.has_value());
    }

    #[test]
    fn absent_emission_is_delivered() {
        let signal = Signal::with_value("a".to_string());
        let (seen, cb) = collector();
        let _sub = signal.subscribe(cb);

        signal.set(None);
        assert_eq!(*seen.borrow(), vec![Some("a".to_string()), None]);
        assert!(signal.has_value());
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let signal = Signal::new();
        let (seen, cb) = collector();

        let sub = signal.subscribe(cb);
        signal.set("a".to_string());
        drop(sub);
        signal.set("b".to_string());

        assert_eq!(*seen.borrow(), vec![Some("a".to_string())]);
        assert!(!signal.has_observers());
    }

    #[test]
    fn observers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let signal: Signal<u8> = Signal::new();

        let first = Rc::clone(&order);
        let _a = signal.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        let _b = signal.subscribe(move |_| second.borrow_mut().push("second"));

        signal.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn activation_hooks_fire_on_transitions() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let signal: Signal<u8> = Signal::new();

        let up = Rc::clone(&events);
        signal.on_first_subscribe(move || up.borrow_mut().push("active"));
        let down = Rc::clone(&events);
        signal.on_last_unsubscribe(move || down.borrow_mut().push("inactive"));

        let a = signal.subscribe(|_| {});
        let b = signal.subscribe(|_| {});
        drop(a);
        drop(b);

        assert_eq!(*events.borrow(), vec!["active", "inactive"]);
    }

    #[test]
    fn hook_delivery_counts_as_the_replay() {
        // The hook pushes a fresh value; the new subscriber must see it
        // exactly once.
        let signal: Signal<u8> = Signal::new();
        let hooked = signal.clone();
        signal.on_first_subscribe(move || hooked.set(7));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = signal.subscribe(move |v: Option<&u8>| sink.borrow_mut().push(v.copied()));

        assert_eq!(*seen.borrow(), vec![Some(7)]);
    }

    #[test]
    fn clones_share_the_cell() {
        let signal: Signal<u8> = Signal::new();
        let alias = signal.clone();
        let (seen, cb) = {
            let seen: Rc<RefCell<Vec<Option<u8>>>> = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&seen);
            (seen, move |v: Option<&u8>| sink.borrow_mut().push(v.copied()))
        };
        let _sub = signal.subscribe(cb);

        alias.set(3);
        assert_eq!(*seen.borrow(), vec![Some(3)]);
        assert_eq!(signal.get(), Some(3));
    }
}
