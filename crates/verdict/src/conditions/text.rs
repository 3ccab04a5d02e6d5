//! Text conditions
//!
//! Reusable conditions over string-like values. All of them apply to any
//! `T: AsRef<str>` input, measure length in Unicode scalar values, and
//! treat an absent value as text of length zero — so `max_length(5)`
//! accepts an absent value while `min_length(1)` rejects it. Only
//! [`Required`] rejects absence outright.

use std::ops::RangeInclusive;

// ============================================================================
// REQUIRED
// ============================================================================

crate::text_condition! {
    /// Requires text that is present, non-empty, and not all-whitespace.
    pub Required;
    rule(self, value) { value.is_some_and(|s| !s.trim().is_empty()) }
    message(self) { "Required field" }
    fn required();
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::text_condition! {
    /// Rejects text longer than `max` characters.
    ///
    /// An absent value counts as length 0 and is therefore accepted.
    pub MaxLength { max: usize };
    rule(self, value) { value.map_or(0, |s| s.chars().count()) <= self.max }
    message(self) { format!("Exceeded maximum text length: {}", self.max) }
    fn max_length();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::text_condition! {
    /// Rejects text shorter than `min` characters.
    ///
    /// An absent value counts as length 0.
    pub MinLength { min: usize };
    rule(self, value) { value.map_or(0, |s| s.chars().count()) >= self.min }
    message(self) { format!("Minimum text length not reached: {}", self.min) }
    fn min_length();
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::text_condition! {
    /// Requires the text length to fall inside an inclusive range.
    ///
    /// An absent value counts as length 0.
    pub LengthRange { range: RangeInclusive<usize> };
    rule(self, value) { self.range.contains(&value.map_or(0, |s| s.chars().count())) }
    message(self) {
        format!(
            "Text length should be in range: {} - {}",
            self.range.start(),
            self.range.end()
        )
    }
    fn length_range();
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::text_condition! {
    /// Requires the text length to equal `length` exactly.
    ///
    /// An absent value counts as length 0, so `exact_length(0)` accepts it.
    pub ExactLength { length: usize };
    rule(self, value) { value.map_or(0, |s| s.chars().count()) == self.length }
    message(self) { format!("Text length must be {}", self.length) }
    fn exact_length();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    #[test]
    fn required_rejects_absent_empty_and_blank() {
        let c = required();
        assert!(!c.evaluate(None::<&str>).is_valid());
        assert!(!c.evaluate(Some("")).is_valid());
        assert!(!c.evaluate(Some("   \t")).is_valid());
        assert!(c.evaluate(Some("x")).is_valid());
        assert_eq!(c.evaluate(None::<&str>).message(), Some("Required field"));
    }

    #[test]
    fn max_length_counts_chars_and_accepts_absent() {
        let c = max_length(3);
        assert!(c.evaluate(None::<&str>).is_valid());
        assert!(c.evaluate(Some("äöü")).is_valid());
        assert!(!c.evaluate(Some("äöüß")).is_valid());
        assert_eq!(
            c.evaluate(Some("abcd")).message(),
            Some("Exceeded maximum text length: 3")
        );
    }

    #[test]
    fn min_length_rejects_absent_unless_zero() {
        assert!(!min_length(1).evaluate(None::<&str>).is_valid());
        assert!(min_length(0).evaluate(None::<&str>).is_valid());
        assert!(min_length(2).evaluate(Some("ab")).is_valid());
    }

    #[test]
    fn length_range_is_inclusive() {
        let c = length_range(2..=4);
        assert!(!c.evaluate(Some("a")).is_valid());
        assert!(c.evaluate(Some("ab")).is_valid());
        assert!(c.evaluate(Some("abcd")).is_valid());
        assert!(!c.evaluate(Some("abcde")).is_valid());
    }

    #[test]
    fn exact_length_matches_only_one_length() {
        let c = exact_length(2);
        assert!(c.evaluate(Some("ab")).is_valid());
        assert!(!c.evaluate(Some("abc")).is_valid());
        assert!(exact_length(0).evaluate(None::<&str>).is_valid());
    }

    #[test]
    fn message_override_applies() {
        let c = MaxLength::new(1).with_message("too chatty");
        assert_eq!(c.evaluate(Some("ab")).message(), Some("too chatty"));
    }

    #[test]
    fn works_for_owned_strings_too() {
        let c = min_length(3);
        let owned = String::from("hello");
        assert!(c.evaluate(Some(&owned)).is_valid());
    }
}
