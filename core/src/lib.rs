//! # swex — string matcher combinators and a switch-on-string expression
//!
//! `swex` evaluates predicates over strings. Anything that can decide a
//! string can act as a matcher:
//!
//!   * a type implementing [`StrMatcher`] (all built-ins do),
//!   * a closure or function `Fn(&str) -> bool`,
//!   * a string literal or any `AsRef<str>` value, meaning exact equality.
//!
//! The three shapes unify through [`IntoMatcher`], so APIs such as
//! [`SwitchStr::case`] and the combinator constructors accept any of them
//! interchangeably. A value that is none of the three fails to compile with
//! a diagnostic naming the accepted shapes.
//!
//! ## Architecture
//!
//! | layer | types | role |
//! |-------|-------|------|
//! | dispatch | [`StrMatcher`], [`IntoMatcher`], [`shape`] | unify the three matcher shapes |
//! | simple | [`NeverMatcher`], [`AlwaysMatcher`], [`ExactMatcher`], [`PrefixMatcher`], [`SuffixMatcher`] | constant and anchored predicates |
//! | lookup | [`ContainsMatcher`], [`OneOfMatcher`], [`Pattern`], [`MatchPos`] | substring and character-set search with optional position capture |
//! | combine | [`NotMatcher`], [`AllOfMatcher`], [`AnyOfMatcher`] | boolean composition with short-circuit evaluation |
//! | erasure | [`AnyMatcher`] | store heterogeneous matchers uniformly |
//! | switch | [`SwitchStr`] | first-match-wins dispatch expression |
//! | config | [`MatchSpec`] | data description compiled to a runtime matcher |
//!
//! ## Example
//!
//! ```
//! use swex::{ContainsMatcher, MatchPos, SwitchStr};
//!
//! let pos = MatchPos::new();
//! let verdict = SwitchStr::new("Ceci est un string")
//!     .case(ContainsMatcher::first("foo").record_into(&pos), "foo!")
//!     .case(ContainsMatcher::first("est").record_into(&pos), "est!")
//!     .otherwise("nope");
//!
//! assert_eq!(verdict, "est!");
//! assert_eq!(pos.get(), Some(5));
//! ```
//!
//! Matcher evaluation never fails; [`MatcherError`] only surfaces when a
//! [`MatchSpec`] with an invalid structure is compiled.

mod any_matcher;
mod combine;
mod lookup;
mod match_spec;
mod matcher;
mod simple;
mod switch;

pub use any_matcher::AnyMatcher;
pub use combine::{AllOfMatcher, AnyOfMatcher, MatcherList, NotMatcher};
pub use lookup::{ContainsMatcher, MatchPos, OneOfMatcher, Pattern};
pub use match_spec::MatchSpec;
pub use matcher::{is_matching, shape, FnMatcher, IntoMatcher, StrMatcher};
pub use simple::{AlwaysMatcher, ExactMatcher, NeverMatcher, PrefixMatcher, SuffixMatcher};
pub use switch::SwitchStr;

/// Maximum nesting depth accepted by [`MatchSpec::validate`].
pub const MAX_DEPTH: usize = 32;

/// Errors reported when compiling a [`MatchSpec`] into a matcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// An `all_of`/`any_of` combinator had no children.
    #[error("combinator requires at least one child matcher")]
    EmptyCombinator,
    /// The spec tree nests deeper than [`MAX_DEPTH`].
    #[error("matcher nesting depth {depth} exceeds the maximum of {max}")]
    DepthExceeded {
        /// Observed nesting depth.
        depth: usize,
        /// Allowed maximum, [`MAX_DEPTH`].
        max: usize,
    },
}

/// Convenience re-exports for glob import.
///
/// ```
/// use swex::prelude::*;
///
/// assert!(is_matching("yes", "yes"));
/// ```
pub mod prelude {
    pub use crate::{
        is_matching, AllOfMatcher, AlwaysMatcher, AnyMatcher, AnyOfMatcher, ContainsMatcher,
        ExactMatcher, IntoMatcher, MatchPos, NeverMatcher, NotMatcher, OneOfMatcher,
        PrefixMatcher, StrMatcher, SuffixMatcher, SwitchStr,
    };
}
