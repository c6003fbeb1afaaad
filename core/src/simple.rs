//! Primitive matchers — constant, equality, prefix, and suffix predicates
//!
//! Stateless or captured-state building blocks. Each one implements
//! [`StrMatcher`] and composes freely with the combinators.

use crate::StrMatcher;

/// Matcher that never matches anything.
///
/// Also the payload a default-constructed
/// [`AnyMatcher`](crate::AnyMatcher) wraps.
///
/// # Example
///
/// ```
/// use swex::{is_matching, NeverMatcher};
///
/// assert!(!is_matching(NeverMatcher, ""));
/// assert!(!is_matching(NeverMatcher, "anything"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverMatcher;

impl StrMatcher for NeverMatcher {
    fn is_matching(&self, _text: &str) -> bool {
        false
    }
}

/// Matcher that matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysMatcher;

impl StrMatcher for AlwaysMatcher {
    fn is_matching(&self, _text: &str) -> bool {
        true
    }
}

/// Exact string equality matcher.
///
/// Matches when the input equals the expected value: same length, same
/// bytes. Also the normalization target of the literal matcher shape.
///
/// # Example
///
/// ```
/// use swex::{ExactMatcher, StrMatcher};
///
/// let matcher = ExactMatcher::new("hello");
/// assert!(matcher.is_matching("hello"));
/// assert!(!matcher.is_matching("Hello")); // case-sensitive
/// assert!(!matcher.is_matching("hello ")); // no trimming
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatcher {
    expected: String,
}

impl ExactMatcher {
    /// Create a new exact matcher with the given expected value.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Returns the expected value.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl StrMatcher for ExactMatcher {
    fn is_matching(&self, text: &str) -> bool {
        text == self.expected
    }
}

/// Prefix matcher.
///
/// Matches when the input starts with the given prefix. The empty prefix
/// matches any input, including the empty one.
///
/// # Example
///
/// ```
/// use swex::{PrefixMatcher, StrMatcher};
///
/// let matcher = PrefixMatcher::new("/api/");
/// assert!(matcher.is_matching("/api/users"));
/// assert!(matcher.is_matching("/api/"));
/// assert!(!matcher.is_matching("/users"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    /// Create a new prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the prefix being matched.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl StrMatcher for PrefixMatcher {
    fn is_matching(&self, text: &str) -> bool {
        text.starts_with(&self.prefix)
    }
}

/// Suffix matcher.
///
/// Matches when the input ends with the given suffix. The empty suffix
/// matches any input, including the empty one.
///
/// # Example
///
/// ```
/// use swex::{StrMatcher, SuffixMatcher};
///
/// let matcher = SuffixMatcher::new(".json");
/// assert!(matcher.is_matching("data.json"));
/// assert!(!matcher.is_matching("data.xml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMatcher {
    suffix: String,
}

impl SuffixMatcher {
    /// Create a new suffix matcher.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Returns the suffix being matched.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl StrMatcher for SuffixMatcher {
    fn is_matching(&self, text: &str) -> bool {
        text.ends_with(&self.suffix)
    }
}
