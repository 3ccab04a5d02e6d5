//! End-to-end scenarios for the non-reactive [`Validator`].

use pretty_assertions::assert_eq;
use verdict::prelude::*;

fn contains(needle: char, message: &'static str) -> SharedCondition<str> {
    condition(message, move |v: Option<&str>| {
        v.is_some_and(|s| s.contains(needle))
    })
}

#[test]
fn conjunction_reports_first_failure_in_insertion_order() {
    let v: Validator<str> = Validator::new();
    v.add_condition(contains('x', "no x"));
    v.add_condition(contains('y', "no y"));
    v.add_condition(contains('z', "no z"));

    assert!(v.validate(Some("xyz123")).is_valid());
    assert_eq!(v.validate(Some("yz123")).message(), Some("no x"));
    assert_eq!(v.validate(Some("xz123")).message(), Some("no y"));
    assert_eq!(v.validate(Some("xy123")).message(), Some("no z"));
    assert_eq!(v.validate(None).message(), Some("no x"));
}

#[test]
fn combinator_algebra_inside_a_validator() {
    // x AND (y OR z)
    let v: Validator<str> = Validator::new();
    v.add_condition(
        contains('x', "no x")
            .and(contains('y', "no y").or(contains('z', "no z")))
            .shared(),
    );

    assert!(v.validate(Some("xyz123")).is_valid());
    assert!(v.validate(Some("xy123")).is_valid());
    assert!(v.validate(Some("xz123")).is_valid());
    assert_eq!(v.validate(Some("yz123")).message(), Some("no x"));
    // x alone: the OR fails with its first branch's message, which the
    // AND then reports.
    assert_eq!(v.validate(Some("x123")).message(), Some("no y"));
}

#[test]
fn disjunction_validator_accepts_any_passing_condition() {
    let v: Validator<str> = Validator::with_operator(Disjunction);
    v.add_condition(contains('x', "no x"));
    v.add_condition(contains('y', "no y"));

    assert!(v.validate(Some("x")).is_valid());
    assert!(v.validate(Some("y")).is_valid());
    let failed = v.validate(Some("q"));
    assert!(!failed.is_valid());
    // A failed disjunction carries no message of its own.
    assert_eq!(failed.message(), None);
}

#[test]
fn standard_conditions_compose_with_custom_ones() {
    let v: Validator<str> = Validator::new();
    v.add_condition(required().shared());
    v.add_condition(length_range(3..=8).shared());
    v.add_condition(contains('_', "needs an underscore"));

    assert!(v.validate(Some("a_b")).is_valid());
    assert_eq!(v.validate(Some("")).message(), Some("Required field"));
    assert_eq!(
        v.validate(Some("abc")).message(),
        Some("needs an underscore")
    );
}

#[test]
fn validators_nest_as_conditions() {
    let inner: Validator<str> = Validator::new();
    inner.add_condition(contains('a', "no a"));

    let outer: Validator<str> = Validator::with_condition(inner.shared());
    outer.add_condition(contains('b', "no b"));

    assert!(outer.validate(Some("ab")).is_valid());
    assert_eq!(outer.validate(Some("b")).message(), Some("no a"));
}

#[test]
fn empty_validator_accepts_everything() {
    let v: Validator<str> = Validator::new();
    assert!(v.validate(Some("anything")).is_valid());
    assert!(v.validate(None).is_valid());
}

#[test]
fn from_fn_builds_a_single_rule_validator() {
    let v = Validator::from_fn("must be positive", |n: Option<&i64>| {
        n.is_some_and(|n| *n > 0)
    });
    assert!(v.validate(Some(&3)).is_valid());
    assert_eq!(v.validate(Some(&-3)).message(), Some("must be positive"));
}

#[test]
fn custom_operator_from_a_closure() {
    // Majority vote: valid when more conditions pass than fail.
    let v: Validator<str> = Validator::with_operator(|results: &[Verdict]| {
        let valid = results.iter().filter(|r| r.is_valid()).count();
        Verdict::of(valid * 2 > results.len(), Some("outvoted".into()))
    });
    v.add_condition(contains('x', "no x"));
    v.add_condition(contains('y', "no y"));
    v.add_condition(contains('z', "no z"));

    assert!(v.validate(Some("xy")).is_valid());
    assert_eq!(v.validate(Some("x")).message(), Some("outvoted"));
}
