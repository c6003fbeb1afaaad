//! Round-trips `MatchSpec` through the serialized config formats users feed
//! in, then checks the compiled matchers behave as the config promises.
#![cfg(feature = "serde")]

use swex::{MatchSpec, MatcherError};

#[test]
fn yaml_config_compiles_and_matches() {
    let yaml = r#"
all_of:
  - prefix: "/api"
  - not:
      contains: ".."
"#;
    let spec: MatchSpec = serde_yaml::from_str(yaml).unwrap();
    let matcher = spec.to_matcher().unwrap();
    assert!(matcher.is_matching("/api/v1/users"));
    assert!(!matcher.is_matching("/api/../secrets"));
    assert!(!matcher.is_matching("/static/logo.png"));
}

#[test]
fn unit_variants_parse_from_bare_strings() {
    let spec: MatchSpec = serde_yaml::from_str("always").unwrap();
    assert_eq!(spec, MatchSpec::Always);
    let spec: MatchSpec = serde_yaml::from_str("never").unwrap();
    assert_eq!(spec, MatchSpec::Never);
}

#[test]
fn json_round_trip_preserves_structure() {
    let spec = MatchSpec::AnyOf(vec![
        MatchSpec::Exact("/healthz".into()),
        MatchSpec::Suffix(".css".into()),
        MatchSpec::Not(Box::new(MatchSpec::OneOf("?#".into()))),
    ]);
    let json = serde_json::to_string(&spec).unwrap();
    let back: MatchSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn snake_case_variant_names_on_the_wire() {
    let json = serde_json::to_string(&MatchSpec::ContainsLast("x".into())).unwrap();
    assert_eq!(json, r#"{"contains_last":"x"}"#);
    let json = serde_json::to_string(&MatchSpec::OneOfLast("ab".into())).unwrap();
    assert_eq!(json, r#"{"one_of_last":"ab"}"#);
}

#[test]
fn invalid_config_is_rejected_at_compile_time() {
    let spec: MatchSpec = serde_json::from_str(r#"{"all_of":[]}"#).unwrap();
    assert_eq!(spec.to_matcher().unwrap_err(), MatcherError::EmptyCombinator);
}
