//! `SwitchStr` — first-match-wins switch expression over one input string
//!
//! A fluent accumulator sequencing matcher/value pairs against a single
//! input. The value of the first matching case wins; a terminating
//! [`otherwise`](SwitchStr::otherwise) supplies the fallback and yields the
//! result.
//!
//! Forgetting the terminator is a type error, not a runtime default: a
//! `SwitchStr<T>` is not a `T`, and the type is `#[must_use]`.

use crate::{is_matching, IntoMatcher};
use std::fmt;

/// First-match-wins switch over a string slice.
///
/// # Example
///
/// ```
/// use swex::{ContainsMatcher, PrefixMatcher, SwitchStr};
///
/// let kind = SwitchStr::new("0123foo43210")
///     .case(PrefixMatcher::new("abc"), "prefixed")
///     .case(ContainsMatcher::first("foo"), "contains foo")
///     .case("0123foo43210", "exact")
///     .otherwise("unknown");
/// assert_eq!(kind, "contains foo");
/// ```
#[must_use = "a switch expression does nothing until terminated with `otherwise`"]
pub struct SwitchStr<'s, T> {
    text: &'s str,
    result: Option<T>,
}

impl<'s, T> SwitchStr<'s, T> {
    /// Start a switch over `text` with no result recorded.
    pub fn new(text: &'s str) -> Self {
        Self { text, result: None }
    }

    /// Record `value` if no case has matched yet and `matcher` matches.
    ///
    /// Once a result is recorded, later case matchers are not evaluated:
    /// the first match wins and ends all further work, including any
    /// position capture a later lookup matcher would have performed.
    pub fn case<S, M: IntoMatcher<S>>(mut self, matcher: M, value: T) -> Self {
        if self.result.is_none() && is_matching(matcher, self.text) {
            self.result = Some(value);
        }
        self
    }

    /// Terminate the switch: the recorded result, or `fallback` if no case
    /// matched.
    pub fn otherwise(self, fallback: T) -> T {
        self.result.unwrap_or(fallback)
    }
}

impl<T: fmt::Debug> fmt::Debug for SwitchStr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchStr")
            .field("text", &self.text)
            .field("result", &self.result)
            .finish()
    }
}
