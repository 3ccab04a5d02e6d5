//! Multi-validator aggregation scenarios for [`Mux`].

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use verdict::prelude::*;

fn contains(needle: char, message: &'static str) -> SharedCondition<String> {
    condition(message, move |v: Option<&String>| {
        v.is_some_and(|s| s.contains(needle))
    })
}

/// Three validators over one shared text source, plus keepalive
/// subscriptions so each publishes its verdict.
struct Fixture {
    text: Signal<String>,
    mux: Rc<Mux>,
    _keepalive: Vec<Subscription>,
}

fn fixture(initial: &str) -> Fixture {
    let text = Signal::with_value(initial.to_string());
    let vx = LiveValidator::with_condition(&text, contains('X', "no X"));
    let vy = LiveValidator::with_condition(&text, contains('Y', "no Y"));
    let vz = LiveValidator::with_condition(&text, contains('Z', "no Z"));

    let keepalive = vec![
        vx.state().subscribe(|_| {}),
        vy.state().subscribe(|_| {}),
        vz.state().subscribe(|_| {}),
    ];

    let mux = Mux::new();
    mux.add_member(vx);
    mux.add_member(vy);
    mux.add_member(vz);

    Fixture {
        text,
        mux,
        _keepalive: keepalive,
    }
}

#[test]
fn aggregate_reports_first_failing_member() {
    let f = fixture("XY");
    assert_eq!(f.mux.recheck().message(), Some("no Z"));
    assert!(!f.mux.is_valid());
}

#[test]
fn aggregate_clears_when_all_members_pass() {
    let f = fixture("XY");
    f.text.set("XYZ".to_string());

    let verdict = f.mux.recheck();
    assert!(verdict.is_valid());
    assert_eq!(verdict.message(), None);
}

#[test]
fn member_emissions_push_fresh_aggregates_to_observers() {
    let f = fixture("X");

    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _watch = f.mux.state().subscribe(move |v: Option<&Verdict>| {
        sink.borrow_mut()
            .push(v.and_then(Verdict::message).map(str::to_owned));
    });

    f.text.set("XYZ".to_string());

    let first = seen.borrow().first().cloned().flatten();
    let last = seen.borrow().last().cloned().flatten();
    assert_eq!(first, Some("no Y".to_owned()));
    assert_eq!(last, None);
}

#[test]
fn removing_the_failing_member_flips_the_aggregate() {
    let text = Signal::with_value("X".to_string());
    let vx = LiveValidator::with_condition(&text, contains('X', "no X"));
    let vy = LiveValidator::with_condition(&text, contains('Y', "no Y"));
    let _kx = vx.state().subscribe(|_| {});
    let _ky = vy.state().subscribe(|_| {});

    let mux = Mux::new();
    let failing: Rc<dyn VerdictSource> = vy;
    mux.add_member(vx);
    mux.add_member(Rc::clone(&failing));
    assert!(!mux.is_valid());

    mux.remove_member(&failing);
    assert!(mux.is_valid());
}

#[test]
fn members_without_published_verdicts_are_skipped() {
    let text: Signal<String> = Signal::new();
    // Never observed and never validated: publishes nothing.
    let silent = LiveValidator::with_condition(&text, contains('X', "no X"));

    let mux = Mux::new();
    mux.add_member(silent.clone());
    assert!(mux.is_valid());

    // Once it publishes, the verdict counts.
    silent.validate();
    assert_eq!(mux.recheck().message(), Some("no X"));
}

#[test]
fn disjunction_mux_accepts_one_passing_member() {
    let f = fixture("X");
    f.mux.set_operator(Disjunction);
    assert!(f.mux.is_valid());

    f.text.set("Q".to_string());
    assert!(!f.mux.is_valid());
}

#[test]
fn mux_of_muxes_aggregates_transitively() {
    let f = fixture("XY");
    let outer = Mux::new();
    let _watch = outer.state().subscribe(|_| {});
    let inner: Rc<dyn VerdictSource> = f.mux.clone();
    outer.add_member(inner);

    assert_eq!(outer.recheck().message(), Some("no Z"));

    f.text.set("XYZ".to_string());
    f.mux.recheck();
    assert!(outer.is_valid());
}
