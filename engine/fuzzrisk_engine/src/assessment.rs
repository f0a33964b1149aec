use serde::Serialize;

use crate::rule::{ActivationMap, RuleFiring};

/// Outcome of one `assess` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Centroid of the combined output set.
    pub score: f64,
    /// Name of the most strongly activated output term.
    pub label: String,
    pub activations: ActivationMap,
    pub firings: Vec<RuleFiring>,
}

impl Assessment {
    /// Score rounded to two decimals, as reported to clients.
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }

    /// Human-facing category: `"high_risk"` becomes `"High"`.
    pub fn category(&self) -> String {
        let stem = self.label.strip_suffix("_risk").unwrap_or(&self.label);
        let mut chars = stem.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Indices of rules that fired with non-zero strength, strongest first.
    pub fn fired_rules(&self) -> Vec<RuleFiring> {
        let mut fired: Vec<RuleFiring> = self
            .firings
            .iter()
            .copied()
            .filter(|f| f.strength > 0.0)
            .collect();
        fired.sort_by(|a, b| b.strength.total_cmp(&a.strength).then(a.rule.cmp(&b.rule)));
        fired
    }
}
