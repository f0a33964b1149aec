//! Centroid defuzzification and classification.
//!
//! Each output term is clipped at its aggregated activation and the clipped
//! shapes are combined by pointwise maximum. The crisp score is the centre of
//! area of that curve over a uniform sample grid.

use fuzzrisk_shape::{ConfigurationError, LinguisticTerm};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::InferenceError;
use crate::rule::ActivationMap;

/// Sampled output domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputDomain {
    pub low: f64,
    pub high: f64,
    pub resolution: usize,
}

impl OutputDomain {
    /// Uses the configured range, or the hull of the output terms' supports.
    pub fn resolve(
        config: &EngineConfig,
        outputs: &[LinguisticTerm],
    ) -> Result<Self, ConfigurationError> {
        let (low, high) = match config.output_range {
            Some(range) => range,
            None => {
                if outputs.is_empty() {
                    return Err(ConfigurationError::NoOutputTerms);
                }
                outputs
                    .iter()
                    .map(|t| t.shape.support())
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
                        (lo.min(a), hi.max(b))
                    })
            }
        };
        let resolution = config.resolution;
        if !(low.is_finite() && high.is_finite() && low < high) || resolution < 2 {
            return Err(ConfigurationError::InvalidOutputDomain {
                low,
                high,
                resolution,
            });
        }
        Ok(Self {
            low,
            high,
            resolution,
        })
    }

    pub fn step(&self) -> f64 {
        (self.high - self.low) / (self.resolution - 1) as f64
    }

    /// Grid points from `low` to `high` inclusive.
    pub fn samples(&self) -> impl Iterator<Item = f64> {
        let (low, high, step, last) = (self.low, self.high, self.step(), self.resolution - 1);
        (0..self.resolution).map(move |i| if i == last { high } else { low + step * i as f64 })
    }
}

/// Checks that `activations` pairs up with `outputs` name by name, in order.
pub fn check_alignment(
    outputs: &[LinguisticTerm],
    activations: &ActivationMap,
) -> Result<(), ConfigurationError> {
    let aligned = outputs.len() == activations.len()
        && outputs
            .iter()
            .zip(activations.iter())
            .all(|(term, (name, _))| term.name == name);
    if aligned {
        return Ok(());
    }
    Err(ConfigurationError::ActivationMismatch {
        expected: outputs.iter().map(|t| t.name.clone()).collect(),
        found: activations.iter().map(|(n, _)| n.to_string()).collect(),
    })
}

/// Height of the combined output set at `x`.
///
/// Terms are paired with activations positionally; callers holding a map
/// from elsewhere should run [`check_alignment`] first.
pub fn combined_membership(outputs: &[LinguisticTerm], activations: &ActivationMap, x: f64) -> f64 {
    outputs
        .iter()
        .zip(activations.iter())
        .map(|(term, (_, strength))| term.membership(x).min(strength))
        .fold(0.0, f64::max)
}

/// Centre of area of the combined output set.
pub fn centroid(
    outputs: &[LinguisticTerm],
    activations: &ActivationMap,
    domain: &OutputDomain,
) -> Result<f64, InferenceError> {
    if activations.is_quiescent() {
        return Err(InferenceError::NoApplicableRule);
    }

    let (moment, area) = domain
        .samples()
        .map(|x| (x, combined_membership(outputs, activations, x)))
        .fold((0.0, 0.0), |(m, a), (x, mu)| (m + x * mu, a + mu));

    if area <= 0.0 {
        return Err(InferenceError::EmptyOutputSet {
            low: domain.low,
            high: domain.high,
        });
    }
    Ok(moment / area)
}

/// The most strongly triggered output term.
pub fn classify(activations: &ActivationMap) -> Result<&str, InferenceError> {
    match activations.strongest() {
        Some((label, strength)) if strength > 0.0 => Ok(label),
        _ => Err(InferenceError::NoApplicableRule),
    }
}

/// Crisp score plus label for one activation map.
pub fn defuzzify(
    outputs: &[LinguisticTerm],
    activations: &ActivationMap,
    domain: &OutputDomain,
) -> Result<(f64, String), InferenceError> {
    let label = classify(activations)?.to_string();
    let score = centroid(outputs, activations, domain)?;
    Ok((score, label))
}
