//! `StrMatcher` — the predicate capability and its calling conventions
//!
//! A matcher is anything that can decide whether a `&str` satisfies some
//! condition. Three shapes qualify, checked in priority order:
//!
//! 1. **Method** — a type implementing [`StrMatcher`] directly
//! 2. **Callable** — a closure or fn of shape `Fn(&str) -> bool`
//! 3. **Literal** — anything convertible to a string slice; the match
//!    succeeds iff the input equals that literal exactly
//!
//! [`IntoMatcher`] unifies the three shapes behind one conversion, and
//! [`is_matching`] is the single dispatch entry point every other component
//! (combinators, [`AnyMatcher`](crate::AnyMatcher), the switch expression)
//! calls through.
//!
//! The shapes are disjoint under Rust's coherence rules: a closure cannot
//! also implement `StrMatcher`, and a string slice implements neither `Fn`
//! nor `StrMatcher`. The Method shape is the identity conversion; the other
//! two normalize into it through adapters ([`FnMatcher`] for closures,
//! [`ExactMatcher`](crate::ExactMatcher) for literals). In the rare case a
//! user type provides more than one shape, inference reports an ambiguity
//! and the caller picks the shape explicitly:
//!
//! ```ignore
//! is_matching::<shape::Method, _>(matcher, text)
//! ```

use crate::ExactMatcher;
use std::fmt;

/// The named-method matcher shape.
///
/// This is the canonical capability: every other shape normalizes into a
/// `StrMatcher` value. Implement it directly for stateful or domain-specific
/// matchers.
///
/// # Example
///
/// ```
/// use swex::{is_matching, StrMatcher};
///
/// #[derive(Debug, Clone)]
/// struct Palindrome;
///
/// impl StrMatcher for Palindrome {
///     fn is_matching(&self, text: &str) -> bool {
///         text.chars().eq(text.chars().rev())
///     }
/// }
///
/// assert!(is_matching(Palindrome, "otto"));
/// assert!(!is_matching(Palindrome, "swex"));
/// ```
pub trait StrMatcher {
    /// Check whether `text` satisfies this matcher's condition.
    fn is_matching(&self, text: &str) -> bool;
}

impl<M: StrMatcher + ?Sized> StrMatcher for &M {
    fn is_matching(&self, text: &str) -> bool {
        (**self).is_matching(text)
    }
}

impl<M: StrMatcher + ?Sized> StrMatcher for Box<M> {
    fn is_matching(&self, text: &str) -> bool {
        (**self).is_matching(text)
    }
}

/// Marker types naming the accepted matcher shapes.
///
/// These only steer trait resolution in [`IntoMatcher`]; they carry no data
/// and cannot be constructed.
pub mod shape {
    /// The type implements [`StrMatcher`](super::StrMatcher) directly.
    /// Highest priority.
    pub enum Method {}

    /// The type is callable as `Fn(&str) -> bool`. Second priority.
    pub enum Callable {}

    /// The type converts to a string slice; matching is whole-string
    /// equality against it. Fallback only.
    pub enum Literal {}
}

/// Conversion from any accepted matcher shape into a [`StrMatcher`] value.
///
/// The `Shape` parameter is inferred from which of the three impls applies;
/// callers normally never name it. A type satisfying none of the shapes
/// fails this bound at compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a string matcher",
    label = "none of the accepted matcher shapes apply to this type",
    note = "a matcher must provide one of: \
            an `is_matching(&self, &str) -> bool` method (impl `StrMatcher`), \
            a callable shape `Fn(&str) -> bool`, \
            or a conversion to a string slice (matched by exact equality)"
)]
pub trait IntoMatcher<Shape> {
    /// The concrete matcher this shape normalizes into.
    type Matcher: StrMatcher;

    /// Normalize into the canonical matcher value.
    fn into_matcher(self) -> Self::Matcher;
}

impl<M: StrMatcher> IntoMatcher<shape::Method> for M {
    type Matcher = M;

    fn into_matcher(self) -> M {
        self
    }
}

impl<F: Fn(&str) -> bool> IntoMatcher<shape::Callable> for F {
    type Matcher = FnMatcher<F>;

    fn into_matcher(self) -> FnMatcher<F> {
        FnMatcher(self)
    }
}

impl<S: AsRef<str>> IntoMatcher<shape::Literal> for S {
    type Matcher = ExactMatcher;

    fn into_matcher(self) -> ExactMatcher {
        ExactMatcher::new(self.as_ref())
    }
}

/// Adapter giving the callable shape a [`StrMatcher`] impl.
///
/// Produced by [`IntoMatcher`] for closures; also usable directly when a
/// named type is needed.
///
/// # Example
///
/// ```
/// use swex::{is_matching, FnMatcher, StrMatcher};
///
/// let empty = FnMatcher::new(|s: &str| s.is_empty());
/// assert!(empty.is_matching(""));
/// assert!(is_matching(|s: &str| s.len() > 3, "long enough"));
/// ```
#[derive(Clone, Copy)]
pub struct FnMatcher<F>(F);

impl<F: Fn(&str) -> bool> FnMatcher<F> {
    /// Wrap a callable as a matcher.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn(&str) -> bool> StrMatcher for FnMatcher<F> {
    fn is_matching(&self, text: &str) -> bool {
        (self.0)(text)
    }
}

impl<F> fmt::Debug for FnMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnMatcher")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}

/// Evaluate `matcher` against `text`.
///
/// This is the dispatch entry point of the whole crate: it accepts any of
/// the three matcher shapes and forwards to the normalized matcher.
/// Pass matchers by reference to keep using them afterwards.
///
/// # Example
///
/// ```
/// use swex::{is_matching, ExactMatcher};
///
/// assert!(is_matching("foo", "foo")); // literal shape
/// assert!(!is_matching("foo", "bar"));
/// assert!(is_matching(|s: &str| s.starts_with('f'), "foo")); // callable
/// assert!(is_matching(ExactMatcher::new("foo"), "foo")); // method
/// ```
pub fn is_matching<S, M: IntoMatcher<S>>(matcher: M, text: &str) -> bool {
    matcher.into_matcher().is_matching(text)
}
