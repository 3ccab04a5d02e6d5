//! Verdict multiplexer
//!
//! A [`Mux`] folds the verdict streams of several member validators into
//! one aggregate stream, typically "is the whole form submittable". It
//! never evaluates members itself: it combines whatever verdicts the
//! members have already published, skipping members that have not
//! produced one yet.
//!
//! # Activation
//!
//! Activation cascades. A dormant mux holds no subscriptions on its
//! members, so adding a member does not wake it; the first observer of
//! the aggregate stream subscribes the mux to every member — which in
//! turn activates members that are themselves dormant — and the last
//! observer leaving releases them again.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::engine::live::LiveValidator;
use crate::engine::validator::OperatorChangedListener;
use crate::foundation::{Conjunction, Operator, SharedOperator, Verdict};
use crate::signal::{ReadSignal, Signal, Subscription};

/// Anything exposing a verdict stream that a [`Mux`] can aggregate.
pub trait VerdictSource {
    /// The replay-latest stream of this source's verdicts.
    fn state(&self) -> ReadSignal<Verdict>;
}

impl<T: 'static> VerdictSource for LiveValidator<T> {
    fn state(&self) -> ReadSignal<Verdict> {
        Self::state(self)
    }
}

// Muxes nest: a form section aggregates its fields, the form aggregates
// its sections.
impl VerdictSource for Mux {
    fn state(&self) -> ReadSignal<Verdict> {
        Self::state(self)
    }
}

/// Membership entry; the subscription exists only while the mux itself
/// is observed.
struct Member {
    source: Rc<dyn VerdictSource>,
    subscription: Option<Subscription>,
}

struct Watched {
    key: usize,
    _subscription: Subscription,
}

// ============================================================================
// MUX
// ============================================================================

/// Aggregates member verdict streams under a shared [`Operator`]
/// (conjunction by default).
///
/// Members are combined in insertion order using their *published*
/// verdicts only; a member whose stream is still empty contributes
/// nothing. With no contributing members the operator sees an empty
/// slice, so a conjunction mux starts out valid.
///
/// # Examples
///
/// ```rust
/// use verdict::{LiveValidator, Mux, Signal, condition};
///
/// let name = Signal::with_value("ada".to_string());
/// let v = LiveValidator::with_condition(
///     &name,
///     condition("name required", |v: Option<&String>| {
///         v.is_some_and(|s| !s.is_empty())
///     }),
/// );
///
/// let mux = Mux::new();
/// let _watch = mux.state().subscribe(|_| {});
/// mux.add_member(v);
/// assert!(mux.is_valid());
/// ```
pub struct Mux {
    members: RefCell<Vec<Member>>,
    operator: RefCell<SharedOperator>,
    state: Signal<Verdict>,
    /// Self-handle for wiring member subscriptions without a cycle.
    weak: Weak<Self>,
    /// Suppresses per-member rechecks while member subscriptions are
    /// being wired; the caller rechecks once afterwards.
    attaching: Cell<bool>,
    watched: RefCell<Vec<Watched>>,
    operator_listeners: RefCell<Vec<OperatorChangedListener>>,
}

impl Mux {
    /// An empty mux with the default conjunction operator.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Self::with_operator(Conjunction)
    }

    /// An empty mux with an explicit operator.
    #[must_use]
    pub fn with_operator(operator: impl Operator + 'static) -> Rc<Self> {
        let mux = Rc::new_cyclic(|weak| Self {
            members: RefCell::new(Vec::new()),
            operator: RefCell::new(Rc::new(operator)),
            state: Signal::new(),
            weak: weak.clone(),
            attaching: Cell::new(false),
            watched: RefCell::new(Vec::new()),
            operator_listeners: RefCell::new(Vec::new()),
        });

        let weak = Rc::downgrade(&mux);
        mux.state.on_first_subscribe(move || {
            if let Some(mux) = weak.upgrade() {
                tracing::trace!("aggregate stream activated");
                mux.activate();
            }
        });
        let weak = Rc::downgrade(&mux);
        mux.state.on_last_unsubscribe(move || {
            if let Some(mux) = weak.upgrade() {
                tracing::trace!("aggregate stream deactivated");
                mux.deactivate();
            }
        });

        mux
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Subscribes to every member and publishes a fresh aggregate.
    /// Subscribing activates members that were dormant themselves.
    fn activate(&self) {
        let sources: Vec<Rc<dyn VerdictSource>> = self
            .members
            .borrow()
            .iter()
            .filter(|m| m.subscription.is_none())
            .map(|m| Rc::clone(&m.source))
            .collect();
        for source in &sources {
            self.attach(source);
        }
        self.recheck();
    }

    /// Drops every member subscription, releasing members whose only
    /// observer was this mux.
    fn deactivate(&self) {
        for member in self.members.borrow_mut().iter_mut() {
            member.subscription = None;
        }
    }

    /// Wires one member's verdict stream into this mux. The replay (and
    /// any activation-time emission of the member) is swallowed; the
    /// caller follows up with one recheck.
    fn attach(&self, source: &Rc<dyn VerdictSource>) {
        let weak = self.weak.clone();
        self.attaching.set(true);
        let subscription = source.state().subscribe(move |_: Option<&Verdict>| {
            if let Some(mux) = weak.upgrade() {
                if !mux.attaching.get() && mux.state.has_observers() {
                    mux.recheck();
                }
            }
        });
        self.attaching.set(false);

        if let Some(member) = self
            .members
            .borrow_mut()
            .iter_mut()
            .find(|m| Rc::ptr_eq(&m.source, source))
        {
            member.subscription = Some(subscription);
        }
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    /// Adds `member` and refreshes the aggregate. Silent no-op when the
    /// member is already present (by identity).
    ///
    /// The member is inserted before any subscription is wired, so the
    /// refresh triggered by the add already includes it.
    pub fn add_member(&self, member: Rc<dyn VerdictSource>) {
        if self.contains(&member) {
            return;
        }

        self.members.borrow_mut().push(Member {
            source: Rc::clone(&member),
            subscription: None,
        });
        if self.state.has_observers() {
            self.attach(&member);
        }
        self.recheck();
    }

    /// Removes `member` (by identity) and refreshes the aggregate.
    /// Silent no-op when absent.
    pub fn remove_member(&self, member: &Rc<dyn VerdictSource>) {
        let before = self.members.borrow().len();
        self.members
            .borrow_mut()
            .retain(|m| !Rc::ptr_eq(&m.source, member));
        if self.members.borrow().len() != before {
            self.recheck();
        }
    }

    /// Whether `member` is present, by identity.
    #[must_use]
    pub fn contains(&self, member: &Rc<dyn VerdictSource>) -> bool {
        self.members
            .borrow()
            .iter()
            .any(|m| Rc::ptr_eq(&m.source, member))
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    /// Whether the mux has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    // ------------------------------------------------------------------
    // Auxiliary sources
    // ------------------------------------------------------------------

    /// Watches `other`: while the aggregate stream is observed, any
    /// emission from `other` runs `callback` with the emitted value. The
    /// signal is not a member and contributes no verdict; the callback
    /// typically mutates membership or the operator, which refreshes the
    /// aggregate through the normal paths.
    pub fn watch<U: 'static>(&self, other: &Signal<U>, callback: impl Fn(Option<&U>) + 'static) {
        let weak = self.weak.clone();
        let subscription = other.subscribe(move |value| {
            if let Some(mux) = weak.upgrade() {
                if mux.state.has_observers() {
                    callback(value);
                }
            }
        });
        self.watched.borrow_mut().push(Watched {
            key: other.key(),
            _subscription: subscription,
        });
    }

    /// Stops watching `other`. Silent no-op when it was never watched.
    pub fn unwatch<U: 'static>(&self, other: &Signal<U>) {
        let key = other.key();
        self.watched.borrow_mut().retain(|w| w.key != key);
    }

    // ------------------------------------------------------------------
    // Operator
    // ------------------------------------------------------------------

    /// Replaces the combining operator, notifies listeners, and
    /// refreshes the aggregate.
    pub fn set_operator(&self, operator: impl Operator + 'static) {
        *self.operator.borrow_mut() = Rc::new(operator);
        tracing::debug!("mux operator replaced");

        let listeners: Vec<OperatorChangedListener> = self
            .operator_listeners
            .borrow()
            .iter()
            .map(Rc::clone)
            .collect();
        for listener in listeners {
            listener();
        }
        self.recheck();
    }

    /// The current operator.
    #[must_use]
    pub fn operator(&self) -> SharedOperator {
        Rc::clone(&self.operator.borrow())
    }

    /// Registers a listener called after every operator replacement.
    pub fn add_operator_listener(&self, listener: OperatorChangedListener) {
        self.operator_listeners.borrow_mut().push(listener);
    }

    /// Removes a previously registered listener, by identity.
    pub fn remove_operator_listener(&self, listener: &OperatorChangedListener) {
        self.operator_listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    // ------------------------------------------------------------------
    // Aggregate
    // ------------------------------------------------------------------

    /// Recombines the members' published verdicts and pushes the result
    /// to the aggregate stream.
    pub fn recheck(&self) -> Verdict {
        let verdicts: SmallVec<[Verdict; 8]> = self
            .members
            .borrow()
            .iter()
            .filter_map(|m| m.source.state().get())
            .collect();
        // Clone the operator out so it may replace itself mid-apply.
        let operator = Rc::clone(&self.operator.borrow());
        let verdict = operator.apply(&verdicts);
        tracing::trace!(
            members = self.members.borrow().len(),
            contributing = verdicts.len(),
            valid = verdict.is_valid(),
            "aggregate refreshed"
        );
        self.state.set(verdict.clone());
        verdict
    }

    /// Convenience: recombines now and reports validity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.recheck().is_valid()
    }

    /// The aggregate verdict stream: replay-latest, read-only.
    #[must_use]
    pub fn state(&self) -> ReadSignal<Verdict> {
        self.state.reader()
    }
}

impl fmt::Debug for Mux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mux")
            .field("members", &self.members.borrow().len())
            .field("watched", &self.watched.borrow().len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
