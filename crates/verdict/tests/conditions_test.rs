//! Table-driven coverage of the standard condition library.

use rstest::rstest;
use verdict::prelude::*;

#[rstest]
#[case(Some("hello"), true)]
#[case(Some("  x  "), true)]
#[case(Some(""), false)]
#[case(Some("   "), false)]
#[case(None, false)]
fn required_cases(#[case] input: Option<&str>, #[case] expected: bool) {
    assert_eq!(required().evaluate(input).is_valid(), expected);
}

#[rstest]
#[case(0, None, true)]
#[case(1, None, false)]
#[case(3, Some("abc"), true)]
#[case(3, Some("ab"), false)]
#[case(3, Some("äöü"), true)] // chars, not bytes
fn min_length_cases(#[case] min: usize, #[case] input: Option<&str>, #[case] expected: bool) {
    assert_eq!(min_length(min).evaluate(input).is_valid(), expected);
}

#[rstest]
#[case(3, None, true)]
#[case(3, Some("abc"), true)]
#[case(3, Some("abcd"), false)]
#[case(0, Some(""), true)]
fn max_length_cases(#[case] max: usize, #[case] input: Option<&str>, #[case] expected: bool) {
    assert_eq!(max_length(max).evaluate(input).is_valid(), expected);
}

#[rstest]
#[case(Some("a"), false)]
#[case(Some("ab"), true)]
#[case(Some("abcd"), true)]
#[case(Some("abcde"), false)]
#[case(None, false)]
fn length_range_cases(#[case] input: Option<&str>, #[case] expected: bool) {
    assert_eq!(length_range(2..=4).evaluate(input).is_valid(), expected);
}

#[rstest]
#[case(r"\d+", Some("123"), true)]
#[case(r"\d+", Some("12a"), false)]
#[case(r"\d+", Some("a12"), false)]
#[case(r"\d*", None, true)]
#[case("a|aa", Some("aa"), true)]
fn pattern_cases(#[case] pat: &str, #[case] input: Option<&str>, #[case] expected: bool) {
    let c = pattern(pat).expect("test pattern compiles");
    assert_eq!(c.evaluate(input).is_valid(), expected);
}

#[rstest]
#[case(Some(""), true)]
#[case(None, false)]
fn not_null_accepts_any_present_value(#[case] input: Option<&str>, #[case] expected: bool) {
    assert_eq!(not_null().evaluate(input).is_valid(), expected);
}

#[test]
fn combinator_chains_infer_without_annotations() {
    // Text conditions serve every `AsRef<str>` input; chaining them must
    // not force callers to pin the input type mid-chain.
    let username = required().and(min_length(3)).and(max_length(20));
    assert!(username.evaluate(Some("alice")).is_valid());
    assert!(!username.evaluate(Some("al")).is_valid());
    assert!(!username.evaluate(None::<&str>).is_valid());

    let either = exact_length(4).or(exact_length(6));
    assert!(either.evaluate(Some("four")).is_valid());

    // The input type commits at `shared()`, inferred from the validator.
    let v: Validator<String> = Validator::new();
    v.add_condition(required().and(min_length(3)).shared());
    assert!(v.validate(Some(&"ada".to_string())).is_valid());
    assert!(!v.validate(Some(&"a".to_string())).is_valid());
}

#[test]
fn default_messages_name_the_constraint() {
    assert_eq!(
        max_length(3).evaluate(Some("abcd")).message(),
        Some("Exceeded maximum text length: 3")
    );
    assert_eq!(
        min_length(3).evaluate(Some("ab")).message(),
        Some("Minimum text length not reached: 3")
    );
    assert_eq!(
        length_range(2..=4).evaluate(Some("a")).message(),
        Some("Text length should be in range: 2 - 4")
    );
    assert_eq!(
        exact_length(2).evaluate(Some("a")).message(),
        Some("Text length must be 2")
    );
    assert_eq!(
        pattern("x").unwrap().evaluate(Some("y")).message(),
        Some("Text does not match given pattern")
    );
}
