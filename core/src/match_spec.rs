//! `MatchSpec` — config-level matcher description
//!
//! This type represents a user's *intent* for matching (e.g., "prefix match
//! on /api", "all of these conditions") as plain data. It compiles to a
//! runtime [`AnyMatcher`] via [`to_matcher()`](MatchSpec::to_matcher), and
//! with the `serde` feature it round-trips through YAML/JSON.
//!
//! Validation happens at compile time of the *config*, not at evaluation
//! time: empty combinator lists and over-deep nesting are rejected before a
//! matcher is ever built.

use crate::{
    AllOfMatcher, AlwaysMatcher, AnyMatcher, AnyOfMatcher, ContainsMatcher, ExactMatcher,
    MatcherError, NeverMatcher, NotMatcher, OneOfMatcher, PrefixMatcher, SuffixMatcher, MAX_DEPTH,
};
use std::fmt;

/// A matcher description from user configuration.
///
/// Compiles to the corresponding runtime matcher via
/// [`to_matcher()`](Self::to_matcher). Lookup variants take string patterns
/// only; position capture is a programmatic API and has no config surface.
///
/// # Example
///
/// ```
/// use swex::MatchSpec;
///
/// let spec = MatchSpec::AnyOf(vec![
///     MatchSpec::Prefix("/api".into()),
///     MatchSpec::Exact("/healthz".into()),
/// ]);
/// let matcher = spec.to_matcher().unwrap();
/// assert!(matcher.is_matching("/api/users"));
/// assert!(matcher.is_matching("/healthz"));
/// assert!(!matcher.is_matching("/static"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchSpec {
    /// Matches everything.
    Always,
    /// Matches nothing.
    Never,
    /// Exact string equality.
    Exact(String),
    /// String starts with prefix.
    Prefix(String),
    /// String ends with suffix.
    Suffix(String),
    /// String contains substring (first occurrence).
    Contains(String),
    /// String contains substring, searched from the end (last occurrence).
    ContainsLast(String),
    /// Any character of the pattern occurs in the string.
    OneOf(String),
    /// Any character of the pattern occurs, searched from the end.
    OneOfLast(String),
    /// Inverts the inner spec.
    Not(Box<MatchSpec>),
    /// All child specs must match (short-circuit AND). Must be non-empty.
    AllOf(Vec<MatchSpec>),
    /// Any child spec must match (short-circuit OR). Must be non-empty.
    AnyOf(Vec<MatchSpec>),
}

impl MatchSpec {
    /// Nesting depth of this spec tree. Leaves have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Not(inner) => 1 + inner.depth(),
            Self::AllOf(children) | Self::AnyOf(children) => {
                1 + children.iter().map(MatchSpec::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Validate this spec against structural constraints.
    ///
    /// Checks that no `AllOf`/`AnyOf` is empty and that nesting does not
    /// exceed [`MAX_DEPTH`]. Call at config load time to catch errors
    /// before evaluation.
    ///
    /// # Errors
    ///
    /// [`MatcherError::EmptyCombinator`] or [`MatcherError::DepthExceeded`].
    pub fn validate(&self) -> Result<(), MatcherError> {
        let depth = self.depth();
        if depth > MAX_DEPTH {
            return Err(MatcherError::DepthExceeded {
                depth,
                max: MAX_DEPTH,
            });
        }
        self.check_arity()
    }

    fn check_arity(&self) -> Result<(), MatcherError> {
        match self {
            Self::Not(inner) => inner.check_arity(),
            Self::AllOf(children) | Self::AnyOf(children) => {
                if children.is_empty() {
                    return Err(MatcherError::EmptyCombinator);
                }
                children.iter().try_for_each(MatchSpec::check_arity)
            }
            _ => Ok(()),
        }
    }

    /// Compile this spec into a runtime [`AnyMatcher`].
    ///
    /// Validates first, so the returned matcher is structurally sound.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`validate`](Self::validate).
    pub fn to_matcher(&self) -> Result<AnyMatcher, MatcherError> {
        self.validate()?;
        self.build()
    }

    fn build(&self) -> Result<AnyMatcher, MatcherError> {
        Ok(match self {
            Self::Always => AnyMatcher::new(AlwaysMatcher),
            Self::Never => AnyMatcher::new(NeverMatcher),
            Self::Exact(v) => AnyMatcher::new(ExactMatcher::new(v.clone())),
            Self::Prefix(v) => AnyMatcher::new(PrefixMatcher::new(v.clone())),
            Self::Suffix(v) => AnyMatcher::new(SuffixMatcher::new(v.clone())),
            Self::Contains(v) => AnyMatcher::new(ContainsMatcher::first(v.as_str())),
            Self::ContainsLast(v) => AnyMatcher::new(ContainsMatcher::last(v.as_str())),
            Self::OneOf(v) => AnyMatcher::new(OneOfMatcher::first(v.as_str())),
            Self::OneOfLast(v) => AnyMatcher::new(OneOfMatcher::last(v.as_str())),
            Self::Not(inner) => AnyMatcher::new(NotMatcher::new(inner.build()?)),
            Self::AllOf(children) => {
                let erased = children
                    .iter()
                    .map(MatchSpec::build)
                    .collect::<Result<_, _>>()?;
                AnyMatcher::new(AllOfMatcher::from_vec(erased)?)
            }
            Self::AnyOf(children) => {
                let erased = children
                    .iter()
                    .map(MatchSpec::build)
                    .collect::<Result<_, _>>()?;
                AnyMatcher::new(AnyOfMatcher::from_vec(erased)?)
            }
        })
    }
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "Always"),
            Self::Never => write!(f, "Never"),
            Self::Exact(v) => write!(f, "Exact(\"{v}\")"),
            Self::Prefix(v) => write!(f, "Prefix(\"{v}\")"),
            Self::Suffix(v) => write!(f, "Suffix(\"{v}\")"),
            Self::Contains(v) => write!(f, "Contains(\"{v}\")"),
            Self::ContainsLast(v) => write!(f, "ContainsLast(\"{v}\")"),
            Self::OneOf(v) => write!(f, "OneOf(\"{v}\")"),
            Self::OneOfLast(v) => write!(f, "OneOfLast(\"{v}\")"),
            Self::Not(inner) => write!(f, "Not({inner})"),
            Self::AllOf(children) => {
                write!(f, "AllOf(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
            Self::AnyOf(children) => {
                write!(f, "AnyOf(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
