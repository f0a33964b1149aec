//! Cross-crate tests for the fuzzrisk workspace.

use fuzzrisk_engine::Inputs;
use fuzzrisk_profile::DiabetesInputs;

/// Inputs for the built-in diabetes profile.
pub fn diabetes_inputs(fbs: f64, bmi: f64, age: f64, physical_activity: f64) -> Inputs {
    DiabetesInputs {
        fbs,
        bmi,
        age,
        physical_activity,
    }
    .into()
}

#[cfg(test)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[cfg(test)]
mod concurrency;
#[cfg(test)]
mod configuration;
#[cfg(test)]
mod diabetes_end_to_end;
