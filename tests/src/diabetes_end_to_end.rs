use fuzzrisk_engine::{AssessError, InferenceError};
use fuzzrisk_profile::diabetes_engine;
use pretty_assertions::assert_eq;

use crate::{diabetes_inputs, init_test_logger};

// Centroid of each output triangle when it is the only, fully active term.
const HIGH_CENTROID: f64 = (58.0 + 80.0 + 100.0) / 3.0;
const MODERATE_CENTROID: f64 = (30.0 + 50.0 + 60.0) / 3.0;
const LOW_CENTROID: f64 = 20.0;

#[test]
fn diabetic_fbs_alone_triggers_high_risk() {
    init_test_logger();
    let engine = diabetes_engine().unwrap();
    for (fbs, bmi, age, activity) in [
        (150.0, 27.0, 45.0, 100.0),
        (150.0, 22.0, 45.0, 100.0),
        (165.0, 27.0, 40.0, 120.0),
        (199.0, 27.0, 45.0, 100.0),
    ] {
        let result = engine
            .assess(&diabetes_inputs(fbs, bmi, age, activity))
            .unwrap();
        assert_eq!(result.label, "high_risk", "fbs={fbs} bmi={bmi} age={age}");
        assert_eq!(result.category(), "High");
        assert!(result.score > 60.0, "score {} for fbs={fbs}", result.score);
        assert!((result.score - HIGH_CENTROID).abs() < 0.1, "score {}", result.score);
        assert_eq!(result.activations.get("high_risk"), Some(1.0));
    }
}

#[test]
fn full_tie_goes_to_the_earlier_output_term() {
    let engine = diabetes_engine().unwrap();
    // Diabetic fbs fully fires high_risk; old age with low activity fully
    // fires moderate_risk. moderate_risk is registered first.
    let result = engine
        .assess(&diabetes_inputs(150.0, 27.0, 65.0, 40.0))
        .unwrap();
    assert_eq!(result.activations.get("high_risk"), Some(1.0));
    assert_eq!(result.activations.get("moderate_risk"), Some(1.0));
    assert_eq!(result.label, "moderate_risk");
    assert_eq!(result.category(), "Moderate");

    // The score still blends both sets, so it sits between the two centroids.
    assert!(
        result.score > MODERATE_CENTROID && result.score < HIGH_CENTROID,
        "score {}",
        result.score
    );
    assert!((result.score - 65.73).abs() < 0.01, "score {}", result.score);
}

#[test]
fn low_fbs_triggers_the_unconditional_low_risk_rule() {
    let engine = diabetes_engine().unwrap();
    for (bmi, age, activity) in [(22.0, 45.0, 100.0), (22.0, 25.0, 200.0)] {
        let result = engine
            .assess(&diabetes_inputs(60.0, bmi, age, activity))
            .unwrap();
        assert_eq!(result.label, "low_risk");
        assert_eq!(result.category(), "Low");
        assert!((result.score - LOW_CENTROID).abs() < 1e-6, "score {}", result.score);
        assert_eq!(result.rounded_score(), 20.0);
    }
}

#[test]
fn prediabetic_middle_aged_normal_weight_is_moderate() {
    let engine = diabetes_engine().unwrap();
    let result = engine
        .assess(&diabetes_inputs(110.0, 22.0, 45.0, 100.0))
        .unwrap();
    assert_eq!(result.label, "moderate_risk");
    assert_eq!(result.category(), "Moderate");
    assert!((result.score - MODERATE_CENTROID).abs() < 0.1, "score {}", result.score);
    assert_eq!(result.activations.get("high_risk"), Some(0.0));
    assert_eq!(result.activations.get("low_risk"), Some(0.0));

    // Rule #10 is the first moderate rule: prediabetic, normal bmi, middle age.
    let strongest = result.fired_rules()[0];
    assert_eq!(strongest.rule, 10);
    assert_eq!(strongest.strength, 1.0);
}

#[test]
fn uncovered_readings_have_no_applicable_rule() {
    let engine = diabetes_engine().unwrap();
    // Normal fbs with an underweight bmi: no rule mentions underweight.
    let err = engine
        .assess(&diabetes_inputs(95.0, 12.0, 45.0, 100.0))
        .unwrap_err();
    assert_eq!(err, AssessError::Inference(InferenceError::NoApplicableRule));
}

#[test]
fn mixed_activations_land_between_categories() {
    let engine = diabetes_engine().unwrap();
    // fbs 104: normal 2/11, prediabetic 0.5. Older, inactive, overweight.
    let result = engine
        .assess(&diabetes_inputs(104.0, 27.0, 60.0, 50.0))
        .unwrap();
    let high = result.activations.get("high_risk").unwrap();
    let moderate = result.activations.get("moderate_risk").unwrap();
    assert!(high > 0.0 && moderate > 0.0);
    assert!(result.score > MODERATE_CENTROID && result.score < HIGH_CENTROID);
    assert!(result.label == "high_risk" || result.label == "moderate_risk");
}

#[test]
fn repeated_assessments_are_identical() {
    let engine = diabetes_engine().unwrap();
    let inputs = diabetes_inputs(104.0, 27.0, 60.0, 50.0);
    let first = engine.assess(&inputs).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.assess(&inputs).unwrap(), first);
    }
}
