//! `AnyMatcher` — runtime-polymorphic matcher with value semantics
//!
//! One concrete, clonable slot that can hold any matcher satisfying the
//! capability contract. Use it wherever heterogeneous matcher types must
//! live in one place: combinator children, containers, or a variable
//! reassigned across branches.

use crate::{IntoMatcher, NeverMatcher, StrMatcher};
use dyn_clone::DynClone;
use std::fmt;

/// Object-safe inner interface: evaluate plus deep clone.
///
/// `DynClone` supplies cloning through the box so `AnyMatcher` can be a
/// plain `Clone` value type.
trait ErasedMatcher: DynClone + Send + Sync {
    fn is_matching(&self, text: &str) -> bool;

    /// Concrete type name of the wrapped matcher, for `Debug` output.
    fn inner_type_name(&self) -> &'static str;
}

dyn_clone::clone_trait_object!(ErasedMatcher);

/// Generic adapter wrapping one concrete matcher behind [`ErasedMatcher`].
#[derive(Clone)]
struct ErasedWrapper<M>(M);

impl<M> ErasedMatcher for ErasedWrapper<M>
where
    M: StrMatcher + Clone + Send + Sync + 'static,
{
    fn is_matching(&self, text: &str) -> bool {
        self.0.is_matching(text)
    }

    fn inner_type_name(&self) -> &'static str {
        std::any::type_name::<M>()
    }
}

/// Type-erased matcher owning one boxed payload.
///
/// Accepts any of the three matcher shapes (see
/// [`IntoMatcher`](crate::IntoMatcher)); the payload additionally has to be
/// `Clone + Send + Sync + 'static` so the box itself stays a clonable,
/// shareable value.
///
/// # Invariants
///
/// - A live `AnyMatcher` never holds "nothing": default construction wraps
///   [`NeverMatcher`], so evaluation is always well-defined.
/// - `Clone` deep-clones the payload; the two boxes are fully independent
///   afterwards.
/// - Moving transfers ownership (compile-checked, as any Rust move).
/// - [`set`](Self::set) (or plain reassignment) swaps in a new payload
///   whose dynamic type may differ from the old one.
///
/// # Example
///
/// ```
/// use swex::{AnyMatcher, ExactMatcher, StrMatcher};
///
/// let mut slot = AnyMatcher::default();
/// assert!(!slot.is_matching("anything")); // NeverMatcher payload
///
/// slot.set(ExactMatcher::new("foo"));
/// assert!(slot.is_matching("foo"));
///
/// slot.set(|s: &str| s.is_empty()); // different dynamic type
/// assert!(slot.is_matching(""));
/// ```
pub struct AnyMatcher {
    inner: Box<dyn ErasedMatcher>,
}

impl AnyMatcher {
    /// Box `matcher` behind the erased interface.
    pub fn new<S, M>(matcher: M) -> Self
    where
        M: IntoMatcher<S>,
        M::Matcher: Clone + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(ErasedWrapper(matcher.into_matcher())),
        }
    }

    /// Replace the payload with `matcher`, discarding the old one.
    ///
    /// The new payload's concrete type is unconstrained by the old one.
    pub fn set<S, M>(&mut self, matcher: M)
    where
        M: IntoMatcher<S>,
        M::Matcher: Clone + Send + Sync + 'static,
    {
        *self = Self::new(matcher);
    }

    /// Evaluate the wrapped payload against `text`.
    ///
    /// Always well-defined thanks to the default-construction invariant.
    #[must_use]
    pub fn is_matching(&self, text: &str) -> bool {
        self.inner.is_matching(text)
    }
}

impl StrMatcher for AnyMatcher {
    fn is_matching(&self, text: &str) -> bool {
        self.inner.is_matching(text)
    }
}

impl Default for AnyMatcher {
    fn default() -> Self {
        Self::new(NeverMatcher)
    }
}

impl Clone for AnyMatcher {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for AnyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyMatcher")
            .field(&self.inner.inner_type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_matching, ContainsMatcher, ExactMatcher, NotMatcher};

    #[test]
    fn default_never_matches() {
        let slot = AnyMatcher::default();
        for text in ["", "foo", "bar"] {
            assert!(!slot.is_matching(text));
        }
    }

    #[test]
    fn wraps_each_shape() {
        let texts = ["foo", "bar", "baz", ""];
        let mut slot = AnyMatcher::default();

        slot.set(ExactMatcher::new("foo"));
        for text in texts {
            assert_eq!(slot.is_matching(text), text == "foo");
        }

        slot.set("bar");
        for text in texts {
            assert_eq!(slot.is_matching(text), text == "bar");
        }

        slot.set(|s: &str| s.is_empty());
        for text in texts {
            assert_eq!(slot.is_matching(text), text.is_empty());
        }

        slot.set(NotMatcher::new(ExactMatcher::new("foo")));
        for text in texts {
            assert_eq!(slot.is_matching(text), text != "foo");
        }
    }

    #[test]
    fn wraps_lvalue_matchers_by_cloning() {
        let equals = ExactMatcher::new("baz");
        let slot = AnyMatcher::new(equals.clone());
        assert!(slot.is_matching("baz"));
        // The original stays usable
        assert!(equals.is_matching("baz"));
    }

    #[test]
    fn clone_is_deep_and_independent() {
        let a = AnyMatcher::new(ExactMatcher::new("x"));
        let mut b = a.clone();
        b.set(ExactMatcher::new("y"));

        assert!(a.is_matching("x"));
        assert!(!a.is_matching("y"));
        assert!(b.is_matching("y"));
        assert!(!b.is_matching("x"));
    }

    #[test]
    fn behaves_as_a_matcher_itself() {
        let slot = AnyMatcher::new(ContainsMatcher::first("oo"));
        assert!(is_matching(&slot, "foo"));
        assert!(!is_matching(&slot, "bar"));
        // And nests inside another erased slot
        let nested = AnyMatcher::new(slot);
        assert!(nested.is_matching("foo"));
    }

    #[test]
    fn debug_names_the_payload_type() {
        let slot = AnyMatcher::new(ExactMatcher::new("x"));
        let repr = format!("{slot:?}");
        assert!(repr.contains("ExactMatcher"), "got {repr}");
    }
}
