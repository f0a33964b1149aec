use fuzzrisk_shape::ConfigurationError;
use thiserror::Error;

/// Inputs for which the rule base cannot produce an answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("no applicable rule: every rule fired with strength 0")]
    NoApplicableRule,

    #[error("combined output set has zero area over [{low}, {high}]")]
    EmptyOutputSet { low: f64, high: f64 },
}

/// Anything `RuleEngine::assess` can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl AssessError {
    /// True for caller faults (bad rule base or missing input).
    pub fn is_configuration(&self) -> bool {
        matches!(self, AssessError::Configuration(_))
    }
}
