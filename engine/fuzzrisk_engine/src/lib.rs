//! Mamdani fuzzy inference for risk assessment.
//!
//! A [`RuleEngine`] holds input variables, output terms and rules. Each call
//! to [`RuleEngine::assess`] fuzzifies the crisp inputs, fires every rule
//! (AND via minimum), aggregates per output term (OR via maximum), and
//! defuzzifies the clipped output sets into a centroid score plus the label
//! of the strongest output term.
//!
//! ```
//! use fuzzrisk_engine::{Inputs, RuleEngine};
//!
//! let mut engine = RuleEngine::new();
//! engine.add_variable("fbs", [
//!     ("low", [50.0, 70.0, 90.0]),
//!     ("diabetic", [120.0, 150.0, 180.0]),
//! ])?;
//! engine.add_output_term("low_risk", &[0.0, 20.0, 40.0])?;
//! engine.add_output_term("high_risk", &[58.0, 80.0, 100.0])?;
//! engine.add_rule([("fbs", "diabetic")], "high_risk")?;
//! engine.add_rule([("fbs", "low")], "low_risk")?;
//!
//! let inputs = Inputs::from([("fbs".to_string(), 160.0)]);
//! let result = engine.assess(&inputs)?;
//! assert_eq!(result.label, "high_risk");
//! assert!(result.score > 60.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assessment;
pub mod config;
pub mod defuzz;
pub mod engine;
pub mod error;
pub mod rule;

pub use assessment::Assessment;
pub use config::{EngineConfig, DEFAULT_RESOLUTION};
pub use defuzz::OutputDomain;
pub use engine::{Evaluation, Inputs, RuleEngine};
pub use error::{AssessError, InferenceError};
pub use fuzzrisk_shape::{
    ConfigurationError, FuzzifiedReading, InputVariable, LinguisticTerm, Shape, ShoulderKind,
};
pub use rule::{ActivationMap, Readings, Rule, RuleFiring};
