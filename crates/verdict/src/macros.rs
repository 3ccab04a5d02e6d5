//! Macros for creating conditions with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`text_condition!`] — Create a complete text condition (struct +
//!   `Condition` impl over any `AsRef<str>` input + factory fn)
//! - [`all_of!`] — AND-chain multiple conditions
//! - [`any_of!`] — OR-chain multiple conditions
//!
//! # Examples
//!
//! ```rust
//! use verdict::text_condition;
//!
//! text_condition! {
//!     /// Requires the text to contain at least one digit.
//!     pub HasDigit;
//!     rule(self, value) { value.is_some_and(|s| s.chars().any(|c| c.is_ascii_digit())) }
//!     message(self) { "Text must contain a digit" }
//!     fn has_digit();
//! }
//!
//! use verdict::Condition;
//! assert!(has_digit().evaluate(Some("a1")).is_valid());
//! assert!(!has_digit().evaluate(None::<&str>).is_valid());
//! ```

// ============================================================================
// TEXT CONDITION MACRO
// ============================================================================

/// Creates a complete text condition: struct definition, `Condition`
/// implementation for every `T: AsRef<str>` input, constructor with an
/// overridable error message, and factory function.
///
/// The `rule` block receives the value as `Option<&str>`; an absent value
/// is a normal case the rule must decide on. The `message` block produces
/// the default error message (evaluated only on failure, so `format!` is
/// fine); callers override it with `with_message`.
///
/// # Variants
///
/// **Unit condition** (no fields):
/// ```rust,ignore
/// text_condition! {
///     pub Required;
///     rule(self, value) { value.is_some_and(|s| !s.trim().is_empty()) }
///     message(self) { "Required field" }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` and factory from all fields):
/// ```rust,ignore
/// text_condition! {
///     pub MaxLength { max: usize };
///     rule(self, value) { value.map_or(0, |s| s.chars().count()) <= self.max }
///     message(self) { format!("Exceeded maximum text length: {}", self.max) }
///     fn max_length();
/// }
/// ```
#[macro_export]
macro_rules! text_condition {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident $({ $($field:ident: $fty:ty),+ $(,)? })?;
        rule($rself:ident, $value:ident) $rule:block
        message($mself:ident) $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($($field: $fty,)+)?
            message: ::std::option::Option<::std::borrow::Cow<'static, str>>,
        }

        impl $name {
            /// Creates the condition with its default error message.
            #[must_use]
            $vis fn new($($($field: $fty),+)?) -> Self {
                Self {
                    $($($field,)+)?
                    message: ::std::option::Option::None,
                }
            }

            /// Overrides the error message reported on failure.
            #[must_use]
            $vis fn with_message(
                mut self,
                message: impl ::std::convert::Into<::std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.message = ::std::option::Option::Some(message.into());
                self
            }

            fn failure(&$mself) -> $crate::Verdict {
                match &$mself.message {
                    ::std::option::Option::Some(m) => $crate::Verdict::invalid(m.clone()),
                    ::std::option::Option::None => $crate::Verdict::invalid($msg),
                }
            }
        }

        impl<T> $crate::Condition<T> for $name
        where
            T: ::std::convert::AsRef<str> + ?Sized,
        {
            #[allow(unused_variables)]
            fn evaluate(&$rself, value: ::std::option::Option<&T>) -> $crate::Verdict {
                let $value: ::std::option::Option<&str> =
                    value.map(::std::convert::AsRef::as_ref);
                if $rule {
                    $crate::Verdict::valid()
                } else {
                    $rself.failure()
                }
            }
        }

        #[doc = ::std::concat!("Creates a [`", ::std::stringify!($name), "`] condition.")]
        #[must_use]
        $vis fn $factory($($($field: $fty),+)?) -> $name {
            $name::new($($($field),+)?)
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// AND-chains multiple conditions into one.
///
/// ```rust
/// use verdict::prelude::*;
/// use verdict::all_of;
///
/// let c = all_of![required(), min_length(3), max_length(20)];
/// assert!(c.evaluate(Some("alice")).is_valid());
/// assert!(!c.evaluate(Some("al")).is_valid());
/// ```
#[macro_export]
macro_rules! all_of {
    [$single:expr $(,)?] => { $single };
    [$first:expr, $($rest:expr),+ $(,)?] => {
        $crate::combinators::And::new($first, $crate::all_of![$($rest),+])
    };
}

/// OR-chains multiple conditions into one.
///
/// ```rust
/// use verdict::prelude::*;
/// use verdict::any_of;
///
/// let c = any_of![exact_length(4), exact_length(6)];
/// assert!(c.evaluate(Some("four")).is_valid());
/// assert!(!c.evaluate(Some("seven")).is_valid());
/// ```
#[macro_export]
macro_rules! any_of {
    [$single:expr $(,)?] => { $single };
    [$first:expr, $($rest:expr),+ $(,)?] => {
        $crate::combinators::Or::new($first, $crate::any_of![$($rest),+])
    };
}
