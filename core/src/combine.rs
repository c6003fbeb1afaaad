//! Combinators — negation, conjunction, disjunction
//!
//! Combinators capture their children by value as erased
//! [`AnyMatcher`](crate::AnyMatcher) handles and evaluate them strictly in
//! declaration order. [`AllOfMatcher`] short-circuits on the first false
//! child, [`AnyOfMatcher`] on the first true child.
//!
//! Children are passed as a non-empty tuple, so the shapes can be mixed
//! freely and the zero-child case does not compile:
//!
//! ```
//! use swex::{AllOfMatcher, PrefixMatcher, StrMatcher};
//!
//! let m = AllOfMatcher::new((PrefixMatcher::new("foo"), |s: &str| s.len() > 4));
//! assert!(m.is_matching("foo bar"));
//! assert!(!m.is_matching("foo"));
//! ```

use crate::{AnyMatcher, IntoMatcher, MatcherError, StrMatcher};

/// Non-empty ordered list of matchers, accepted as a tuple of mixed shapes.
///
/// Implemented for tuples of arity 1 through 8. The empty tuple
/// deliberately has no impl: a combinator with zero children is rejected at
/// compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a non-empty list of matchers",
    note = "pass a tuple of 1 to 8 matchers, e.g. `(PrefixMatcher::new(\"a\"), \"b\")`; \
            a single matcher still needs the trailing comma: `(m,)`"
)]
pub trait MatcherList<Shapes> {
    /// Erase the tuple elements into boxed handles, preserving order.
    fn into_matchers(self) -> Vec<AnyMatcher>;
}

macro_rules! impl_matcher_list {
    ($(($m:ident, $s:ident)),+) => {
        impl<$($s,)+ $($m,)+> MatcherList<($($s,)+)> for ($($m,)+)
        where
            $(
                $m: IntoMatcher<$s>,
                $m::Matcher: Clone + Send + Sync + 'static,
            )+
        {
            fn into_matchers(self) -> Vec<AnyMatcher> {
                #[allow(non_snake_case)]
                let ($($m,)+) = self;
                vec![$(AnyMatcher::new($m),)+]
            }
        }
    };
}

impl_matcher_list!((M1, S1));
impl_matcher_list!((M1, S1), (M2, S2));
impl_matcher_list!((M1, S1), (M2, S2), (M3, S3));
impl_matcher_list!((M1, S1), (M2, S2), (M3, S3), (M4, S4));
impl_matcher_list!((M1, S1), (M2, S2), (M3, S3), (M4, S4), (M5, S5));
impl_matcher_list!((M1, S1), (M2, S2), (M3, S3), (M4, S4), (M5, S5), (M6, S6));
impl_matcher_list!(
    (M1, S1),
    (M2, S2),
    (M3, S3),
    (M4, S4),
    (M5, S5),
    (M6, S6),
    (M7, S7)
);
impl_matcher_list!(
    (M1, S1),
    (M2, S2),
    (M3, S3),
    (M4, S4),
    (M5, S5),
    (M6, S6),
    (M7, S7),
    (M8, S8)
);

/// Negation combinator: inverts the wrapped matcher's result.
///
/// # Example
///
/// ```
/// use swex::{is_matching, NotMatcher};
///
/// assert!(!is_matching(NotMatcher::new("foo"), "foo"));
/// assert!(is_matching(NotMatcher::new("foo"), "bar"));
/// ```
#[derive(Debug, Clone)]
pub struct NotMatcher {
    inner: AnyMatcher,
}

impl NotMatcher {
    /// Capture `matcher` by value and negate it.
    pub fn new<S, M>(matcher: M) -> Self
    where
        M: IntoMatcher<S>,
        M::Matcher: Clone + Send + Sync + 'static,
    {
        Self {
            inner: AnyMatcher::new(matcher),
        }
    }
}

impl StrMatcher for NotMatcher {
    fn is_matching(&self, text: &str) -> bool {
        !self.inner.is_matching(text)
    }
}

/// Conjunction combinator: true iff every child matches.
///
/// Children are evaluated in declaration order; evaluation stops at the
/// first false child.
#[derive(Debug, Clone)]
pub struct AllOfMatcher {
    children: Vec<AnyMatcher>,
}

impl AllOfMatcher {
    /// Capture a non-empty tuple of matchers by value.
    pub fn new<Shapes, L: MatcherList<Shapes>>(matchers: L) -> Self {
        Self {
            children: matchers.into_matchers(),
        }
    }

    /// Build from already-erased handles.
    ///
    /// This is the dynamic path for lists assembled at runtime (e.g. from
    /// configuration); unlike [`new`](Self::new), the arity check moves to
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::EmptyCombinator`] if `children` is empty.
    pub fn from_vec(children: Vec<AnyMatcher>) -> Result<Self, MatcherError> {
        if children.is_empty() {
            return Err(MatcherError::EmptyCombinator);
        }
        Ok(Self { children })
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl StrMatcher for AllOfMatcher {
    fn is_matching(&self, text: &str) -> bool {
        self.children.iter().all(|m| m.is_matching(text))
    }
}

/// Disjunction combinator: true iff any child matches.
///
/// Children are evaluated in declaration order; evaluation stops at the
/// first true child.
#[derive(Debug, Clone)]
pub struct AnyOfMatcher {
    children: Vec<AnyMatcher>,
}

impl AnyOfMatcher {
    /// Capture a non-empty tuple of matchers by value.
    pub fn new<Shapes, L: MatcherList<Shapes>>(matchers: L) -> Self {
        Self {
            children: matchers.into_matchers(),
        }
    }

    /// Build from already-erased handles.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::EmptyCombinator`] if `children` is empty.
    pub fn from_vec(children: Vec<AnyMatcher>) -> Result<Self, MatcherError> {
        if children.is_empty() {
            return Err(MatcherError::EmptyCombinator);
        }
        Ok(Self { children })
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl StrMatcher for AnyOfMatcher {
    fn is_matching(&self, text: &str) -> bool {
        self.children.iter().any(|m| m.is_matching(text))
    }
}
