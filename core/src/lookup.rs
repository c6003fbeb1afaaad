//! Lookup matchers — substring and character-set search with position capture
//!
//! [`ContainsMatcher`] finds a [`Pattern`] as a contiguous substring;
//! [`OneOfMatcher`] treats the pattern as a set of candidate characters.
//! Both come in a forward flavor (`first`, reporting the first occurrence)
//! and a reverse flavor (`last`, reporting the last occurrence), and both
//! can record the byte index of the hit into a caller-supplied
//! [`MatchPos`] slot.
//!
//! # Empty-pattern convention
//!
//! Semantics follow `str::find` / `str::rfind`: an empty *substring*
//! pattern matches any input (forward at position 0, reverse at
//! `text.len()`), while an empty *character set* never matches. Both cases
//! are tested explicitly below.

use crate::StrMatcher;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// What a lookup matcher searches for: a single character or a string.
///
/// The variant decides the search algorithm at evaluation time. For
/// [`OneOfMatcher`], a string is read as a set of candidate characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A single character.
    Char(char),
    /// A string: a contiguous substring for [`ContainsMatcher`], a set of
    /// candidate characters for [`OneOfMatcher`].
    Str(String),
}

impl From<char> for Pattern {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Caller-supplied output slot for the position of a successful lookup.
///
/// A slot starts at [`NOT_FOUND`](Self::NOT_FOUND). A successful lookup
/// writes the byte index of the hit; a failed lookup leaves the slot
/// untouched, so a caller that needs a default must [`clear`](Self::clear)
/// the slot between evaluations.
///
/// The slot is shared by handle: cloning a `MatchPos` (or a matcher holding
/// one) yields another handle onto the same slot. That is the point: the
/// slot is the caller's output channel, not matcher state. Writes use
/// relaxed atomics; the crate assumes single-writer, single-reader-at-a-time
/// access to any one slot (see the crate docs on concurrency).
///
/// # Example
///
/// ```
/// use swex::{is_matching, ContainsMatcher, MatchPos};
///
/// let pos = MatchPos::new();
/// assert!(is_matching(ContainsMatcher::first("foo").record_into(&pos), "0123foo43210"));
/// assert_eq!(pos.get(), Some(4));
/// ```
#[derive(Clone)]
pub struct MatchPos {
    slot: Arc<AtomicUsize>,
}

impl MatchPos {
    /// Sentinel raw value meaning "no match recorded".
    pub const NOT_FOUND: usize = usize::MAX;

    /// Create a fresh slot holding [`NOT_FOUND`](Self::NOT_FOUND).
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(AtomicUsize::new(Self::NOT_FOUND)),
        }
    }

    /// The recorded position, or `None` if the slot still holds the
    /// sentinel.
    #[must_use]
    pub fn get(&self) -> Option<usize> {
        match self.slot.load(Ordering::Relaxed) {
            Self::NOT_FOUND => None,
            pos => Some(pos),
        }
    }

    /// Reset the slot to [`NOT_FOUND`](Self::NOT_FOUND).
    pub fn clear(&self) {
        self.slot.store(Self::NOT_FOUND, Ordering::Relaxed);
    }

    pub(crate) fn record(&self, pos: usize) {
        self.slot.store(pos, Ordering::Relaxed);
    }
}

impl Default for MatchPos {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(pos) => write!(f, "MatchPos({pos})"),
            None => write!(f, "MatchPos(not found)"),
        }
    }
}

/// Search direction of a lookup matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    First,
    Last,
}

/// Substring lookup matcher.
///
/// Matches when the pattern appears inside the input as a contiguous
/// substring (a `char` pattern is a one-character substring). The
/// [`first`](Self::first) flavor reports the first occurrence, the
/// [`last`](Self::last) flavor the last one.
///
/// # Example
///
/// ```
/// use swex::{ContainsMatcher, MatchPos, StrMatcher};
///
/// let pos = MatchPos::new();
/// let matcher = ContainsMatcher::last("foo").record_into(&pos);
/// assert!(matcher.is_matching("foofoofoo"));
/// assert_eq!(pos.get(), Some(6));
/// ```
#[derive(Debug, Clone)]
pub struct ContainsMatcher {
    pattern: Pattern,
    direction: Direction,
    position: Option<MatchPos>,
}

impl ContainsMatcher {
    /// Forward lookup: reports the index of the first occurrence.
    pub fn first(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
            direction: Direction::First,
            position: None,
        }
    }

    /// Reverse lookup: reports the index of the last occurrence.
    pub fn last(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
            direction: Direction::Last,
            position: None,
        }
    }

    /// Record the byte index of a successful lookup into `position`.
    ///
    /// On failure the slot is left untouched.
    #[must_use]
    pub fn record_into(mut self, position: &MatchPos) -> Self {
        self.position = Some(position.clone());
        self
    }

    /// Returns the pattern being searched for.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl StrMatcher for ContainsMatcher {
    fn is_matching(&self, text: &str) -> bool {
        let found = match (self.direction, &self.pattern) {
            (Direction::First, Pattern::Char(c)) => text.find(*c),
            (Direction::First, Pattern::Str(s)) => text.find(s.as_str()),
            (Direction::Last, Pattern::Char(c)) => text.rfind(*c),
            (Direction::Last, Pattern::Str(s)) => text.rfind(s.as_str()),
        };
        record(&self.position, found)
    }
}

/// Character-set lookup matcher.
///
/// The pattern is read as a set of candidate characters (each character of a
/// string pattern is one candidate). Matches when any input character
/// belongs to the set; reports the byte index of the first
/// ([`first`](Self::first)) or last ([`last`](Self::last)) such character.
///
/// # Example
///
/// ```
/// use swex::{MatchPos, OneOfMatcher, StrMatcher};
///
/// let pos = MatchPos::new();
/// let digit = OneOfMatcher::first("0123456789").record_into(&pos);
/// assert!(digit.is_matching("abc7def"));
/// assert_eq!(pos.get(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct OneOfMatcher {
    pattern: Pattern,
    direction: Direction,
    position: Option<MatchPos>,
}

impl OneOfMatcher {
    /// Forward lookup: reports the first input position in the set.
    pub fn first(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
            direction: Direction::First,
            position: None,
        }
    }

    /// Reverse lookup: reports the last input position in the set.
    pub fn last(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
            direction: Direction::Last,
            position: None,
        }
    }

    /// Record the byte index of a successful lookup into `position`.
    ///
    /// On failure the slot is left untouched.
    #[must_use]
    pub fn record_into(mut self, position: &MatchPos) -> Self {
        self.position = Some(position.clone());
        self
    }

    /// Returns the pattern holding the candidate set.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl StrMatcher for OneOfMatcher {
    fn is_matching(&self, text: &str) -> bool {
        let found = match (self.direction, &self.pattern) {
            (Direction::First, Pattern::Char(c)) => text.find(*c),
            (Direction::First, Pattern::Str(set)) => text.find(|ch: char| set.contains(ch)),
            (Direction::Last, Pattern::Char(c)) => text.rfind(*c),
            (Direction::Last, Pattern::Str(set)) => text.rfind(|ch: char| set.contains(ch)),
        };
        record(&self.position, found)
    }
}

fn record(position: &Option<MatchPos>, found: Option<usize>) -> bool {
    match found {
        Some(at) => {
            if let Some(slot) = position {
                slot.record(at);
            }
            true
        }
        None => false,
    }
}
