use fuzzrisk_engine::{AssessError, ConfigurationError, RuleEngine};
use fuzzrisk_profile::{diabetes_engine, diabetes_profile, Profile, ProfileError};
use fuzzrisk_shape::ShoulderKind;
use pretty_assertions::assert_eq;

use crate::diabetes_inputs;

#[test]
fn non_monotonic_term_is_rejected_without_corrupting_the_engine() {
    let mut engine = diabetes_engine().unwrap();
    let inputs = diabetes_inputs(150.0, 27.0, 45.0, 100.0);
    let before = engine.assess(&inputs).unwrap();
    let variables_before = engine.variables().to_vec();

    let err = engine
        .add_variable("hba1c", [("low", [10.0, 5.0, 20.0])])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::NonMonotonic {
            term: "low".into(),
            params: vec![10.0, 5.0, 20.0]
        }
    );

    assert_eq!(engine.variables(), variables_before.as_slice());
    assert_eq!(engine.assess(&inputs).unwrap(), before);
}

#[test]
fn every_builtin_term_gets_its_positional_shoulder() {
    let engine = diabetes_engine().unwrap();
    for var in engine.variables() {
        let kinds: Vec<ShoulderKind> = var.terms().iter().map(|t| t.kind).collect();
        let last = kinds.len() - 1;
        assert_eq!(kinds[0], ShoulderKind::LeftShoulder, "{}", var.name());
        assert_eq!(kinds[last], ShoulderKind::RightShoulder, "{}", var.name());
        assert!(kinds[1..last].iter().all(|k| *k == ShoulderKind::Normal));
    }
    for term in engine.output_terms() {
        assert_eq!(term.kind, ShoulderKind::Normal);
    }
}

#[test]
fn missing_measurement_is_a_configuration_error() {
    let engine = diabetes_engine().unwrap();
    let mut inputs = diabetes_inputs(150.0, 27.0, 45.0, 100.0);
    inputs.remove("age");
    let err = engine.assess(&inputs).unwrap_err();
    assert_eq!(
        err,
        AssessError::Configuration(ConfigurationError::MissingInput("age".into()))
    );
    assert!(err.is_configuration());
}

#[test]
fn profile_with_misordered_terms_fails_to_build() {
    let mut profile = diabetes_profile().unwrap();
    profile.variables[0].terms.swap(0, 3);
    match profile.build() {
        Err(ProfileError::Configuration { source, .. }) => {
            assert!(matches!(source, ConfigurationError::TermsOutOfOrder { .. }))
        }
        other => panic!("expected out-of-order terms, got {other:?}"),
    }
}

#[test]
fn builtin_profile_survives_a_toml_round_trip() {
    let profile = diabetes_profile().unwrap();
    let reparsed = Profile::from_toml_str(&profile.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed, profile);

    let a = profile.build().unwrap();
    let b = reparsed.build().unwrap();
    let inputs = diabetes_inputs(104.0, 27.0, 60.0, 50.0);
    assert_eq!(a.assess(&inputs).unwrap(), b.assess(&inputs).unwrap());
}

#[test]
fn rule_against_unregistered_output_fails_fast() {
    let mut engine = RuleEngine::new();
    engine
        .add_variable("fbs", [("low", [50.0, 70.0, 90.0]), ("high", [90.0, 150.0, 180.0])])
        .unwrap();
    assert_eq!(
        engine.add_rule([("fbs", "high")], "high_risk"),
        Err(ConfigurationError::UnknownOutputTerm("high_risk".into()))
    );
    assert!(engine.rules().is_empty());
}
