//! Built-in diabetes risk profile.

use fuzzrisk_engine::{Inputs, RuleEngine};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::profile::Profile;

/// Source of the built-in profile.
pub const DIABETES_TOML: &str = include_str!("../profiles/diabetes.toml");

pub fn diabetes_profile() -> Result<Profile, ProfileError> {
    Profile::from_toml_str(DIABETES_TOML)
}

pub fn diabetes_engine() -> Result<RuleEngine, ProfileError> {
    diabetes_profile()?.build()
}

/// The four measurements the diabetes profile expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiabetesInputs {
    /// Fasting blood sugar, mg/dL.
    pub fbs: f64,
    pub bmi: f64,
    /// Years.
    pub age: f64,
    /// Minutes per week.
    pub physical_activity: f64,
}

impl DiabetesInputs {
    pub fn to_inputs(&self) -> Inputs {
        Inputs::from([
            ("fbs".to_string(), self.fbs),
            ("bmi".to_string(), self.bmi),
            ("age".to_string(), self.age),
            ("physical_activity".to_string(), self.physical_activity),
        ])
    }
}

impl From<DiabetesInputs> for Inputs {
    fn from(value: DiabetesInputs) -> Self {
        value.to_inputs()
    }
}
