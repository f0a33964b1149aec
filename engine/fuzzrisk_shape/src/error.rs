//! Configuration errors raised while registering terms, variables and rules.

use thiserror::Error;

/// A malformed rule base or a call that does not match it.
///
/// Every variant is a caller fault: the engine never recovers from these
/// internally and the boundary layer is expected to surface them as client
/// errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("term '{term}': expected 3 (triangular) or 4 (trapezoidal) parameters, got {arity}")]
    InvalidArity { term: String, arity: usize },

    #[error("term '{term}': parameters {params:?} must be non-decreasing")]
    NonMonotonic { term: String, params: Vec<f64> },

    #[error("term '{term}': parameters {params:?} must be finite")]
    NonFiniteParameter { term: String, params: Vec<f64> },

    #[error("variable '{variable}' declares no terms")]
    EmptyTerms { variable: String },

    #[error("variable '{variable}' declares term '{term}' more than once")]
    DuplicateTerm { variable: String, term: String },

    #[error(
        "variable '{variable}': term '{term}' peaks at {peak}, below the previous peak {previous}"
    )]
    TermsOutOfOrder {
        variable: String,
        term: String,
        peak: f64,
        previous: f64,
    },

    #[error("variable '{variable}': range [{low}, {high}] is empty or not finite")]
    InvalidRange {
        variable: String,
        low: f64,
        high: f64,
    },

    #[error("variable '{0}' is already registered")]
    DuplicateVariable(String),

    #[error("output term '{0}' is already registered")]
    DuplicateOutputTerm(String),

    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("variable '{variable}' has no term '{term}'")]
    UnknownTerm { variable: String, term: String },

    #[error("unknown output term '{0}'")]
    UnknownOutputTerm(String),

    #[error("rule concluding '{0}' has no antecedents")]
    EmptyAntecedents(String),

    #[error("no output terms are registered")]
    NoOutputTerms,

    #[error("output domain [{low}, {high}] sampled at {resolution} points is not usable")]
    InvalidOutputDomain {
        low: f64,
        high: f64,
        resolution: usize,
    },

    #[error("missing input for variable '{0}'")]
    MissingInput(String),

    #[error("input for variable '{variable}' is not a finite number ({value})")]
    NonFiniteInput { variable: String, value: f64 },

    #[error(
        "activations [{}] do not match the output terms [{}]",
        .found.join(", "),
        .expected.join(", ")
    )]
    ActivationMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}
