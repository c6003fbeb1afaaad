//! Evaluate benchmarks — the hot path.
//!
//! Measures: simple matchers, substring lookup with position capture,
//! combinator short-circuit, type-erasure overhead, and switch dispatch.

use swex::prelude::*;

fn main() {
    divan::main();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test fixtures
// ═══════════════════════════════════════════════════════════════════════════════

const HIT: &str = "/api/v2/users/12345";
const MISS: &str = "/static/assets/logo.png";
const HAYSTACK: &str =
    "2026-08-29T12:00:00Z ERROR request failed: upstream timed out after 30s (attempt 3)";

// ═══════════════════════════════════════════════════════════════════════════════
// Core scenario: simple matchers (baseline)
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn exact_match_hit(bencher: divan::Bencher) {
    let matcher = ExactMatcher::new(HIT);
    bencher.bench_local(|| matcher.is_matching(HIT));
}

#[divan::bench]
fn exact_match_miss(bencher: divan::Bencher) {
    let matcher = ExactMatcher::new(HIT);
    bencher.bench_local(|| matcher.is_matching(MISS));
}

#[divan::bench]
fn prefix_match_hit(bencher: divan::Bencher) {
    let matcher = PrefixMatcher::new("/api/");
    bencher.bench_local(|| matcher.is_matching(HIT));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Core scenario: substring lookup
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn contains_hit(bencher: divan::Bencher) {
    let matcher = ContainsMatcher::first("timed out");
    bencher.bench_local(|| matcher.is_matching(HAYSTACK));
}

#[divan::bench]
fn contains_miss(bencher: divan::Bencher) {
    let matcher = ContainsMatcher::first("connection refused");
    bencher.bench_local(|| matcher.is_matching(HAYSTACK));
}

#[divan::bench]
fn contains_hit_with_capture(bencher: divan::Bencher) {
    let pos = MatchPos::new();
    let matcher = ContainsMatcher::first("timed out").record_into(&pos);
    bencher.bench_local(|| matcher.is_matching(HAYSTACK));
}

#[divan::bench]
fn one_of_last_hit(bencher: divan::Bencher) {
    let matcher = OneOfMatcher::last("()");
    bencher.bench_local(|| matcher.is_matching(HAYSTACK));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Core scenario: combinator short-circuit
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn all_of_short_circuits_on_first(bencher: divan::Bencher) {
    let matcher = AllOfMatcher::new((
        PrefixMatcher::new("/admin/"),
        ContainsMatcher::first("users"),
        SuffixMatcher::new("/edit"),
    ));
    bencher.bench_local(|| matcher.is_matching(HIT));
}

#[divan::bench]
fn all_of_evaluates_every_child(bencher: divan::Bencher) {
    let matcher = AllOfMatcher::new((
        PrefixMatcher::new("/api/"),
        ContainsMatcher::first("users"),
        NotMatcher::new(SuffixMatcher::new("/edit")),
    ));
    bencher.bench_local(|| matcher.is_matching(HIT));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Core scenario: type-erasure overhead
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn erased_exact_match_hit(bencher: divan::Bencher) {
    let matcher = AnyMatcher::new(ExactMatcher::new(HIT));
    bencher.bench_local(|| matcher.is_matching(HIT));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Core scenario: switch dispatch
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn switch_first_case_wins(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        SwitchStr::new(HIT)
            .case(PrefixMatcher::new("/api/"), 1)
            .case(PrefixMatcher::new("/static/"), 2)
            .case(ContainsMatcher::first("healthz"), 3)
            .otherwise(0)
    });
}

#[divan::bench]
fn switch_miss_heavy(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        SwitchStr::new(MISS)
            .case(PrefixMatcher::new("/api/"), 1)
            .case(ContainsMatcher::first("healthz"), 2)
            .case(SuffixMatcher::new(".wasm"), 3)
            .otherwise(0)
    });
}
