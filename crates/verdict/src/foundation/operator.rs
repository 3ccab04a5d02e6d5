//! Verdict reduction operators
//!
//! An [`Operator`] reduces the verdicts of many conditions into one. The
//! two canonical operators are [`Conjunction`] (AND-all) and
//! [`Disjunction`] (OR-all).
//!
//! Note the vacuous asymmetry: a conjunction over zero results is valid,
//! a disjunction over zero results is invalid with no message. A
//! disjunction with nothing to satisfy cannot succeed.

use std::rc::Rc;

use crate::foundation::Verdict;

// ============================================================================
// OPERATOR TRAIT
// ============================================================================

/// Reduces a slice of verdicts, in condition-set order, into one verdict.
///
/// Implemented for plain closures as well, so ad-hoc policies need no
/// named type:
///
/// ```rust
/// use verdict::{Operator, Verdict};
///
/// let majority = |results: &[Verdict]| {
///     let valid = results.iter().filter(|r| r.is_valid()).count();
///     Verdict::of(valid * 2 > results.len(), Some("outvoted".into()))
/// };
/// assert!(majority.apply(&[Verdict::valid(), Verdict::valid(), Verdict::invalid("x")]).is_valid());
/// ```
pub trait Operator {
    /// Reduces the given verdicts into one.
    fn apply(&self, results: &[Verdict]) -> Verdict;
}

/// A reference-counted, type-erased operator, shared between validators.
pub type SharedOperator = Rc<dyn Operator>;

impl<F> Operator for F
where
    F: Fn(&[Verdict]) -> Verdict,
{
    fn apply(&self, results: &[Verdict]) -> Verdict {
        self(results)
    }
}

// ============================================================================
// CONJUNCTION
// ============================================================================

/// AND-all: the first invalid verdict wins; none invalid means valid.
///
/// An empty slice is vacuously valid, so a validator with no conditions
/// accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conjunction;

impl Operator for Conjunction {
    fn apply(&self, results: &[Verdict]) -> Verdict {
        results
            .iter()
            .find(|r| !r.is_valid())
            .cloned()
            .unwrap_or_else(Verdict::valid)
    }
}

// ============================================================================
// DISJUNCTION
// ============================================================================

/// OR-all: the first valid verdict wins; none valid means invalid.
///
/// The failure carries no message: a disjunction cannot attribute blame
/// to a single failing condition. An empty slice is invalid as well;
/// callers relying on a disjunction with zero members must special-case
/// it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disjunction;

impl Operator for Disjunction {
    fn apply(&self, results: &[Verdict]) -> Verdict {
        results
            .iter()
            .find(|r| r.is_valid())
            .cloned()
            .unwrap_or_else(Verdict::invalid_unexplained)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_returns_first_invalid() {
        let results = [
            Verdict::valid(),
            Verdict::invalid("first"),
            Verdict::invalid("second"),
        ];
        assert_eq!(Conjunction.apply(&results).message(), Some("first"));
    }

    #[test]
    fn conjunction_all_valid_is_valid() {
        let results = [Verdict::valid(), Verdict::valid()];
        assert!(Conjunction.apply(&results).is_valid());
    }

    #[test]
    fn conjunction_empty_is_vacuously_valid() {
        assert!(Conjunction.apply(&[]).is_valid());
    }

    #[test]
    fn disjunction_returns_first_valid() {
        let results = [Verdict::invalid("x"), Verdict::valid()];
        assert!(Disjunction.apply(&results).is_valid());
    }

    #[test]
    fn disjunction_all_invalid_has_no_message() {
        let results = [Verdict::invalid("x"), Verdict::invalid("y")];
        let verdict = Disjunction.apply(&results);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.message(), None);
    }

    #[test]
    fn disjunction_empty_is_invalid() {
        assert!(!Disjunction.apply(&[]).is_valid());
    }

    #[test]
    fn closure_operator() {
        let first_or_valid =
            |results: &[Verdict]| results.first().cloned().unwrap_or_else(Verdict::valid);
        assert_eq!(
            first_or_valid.apply(&[Verdict::invalid("e")]).message(),
            Some("e")
        );
    }
}
