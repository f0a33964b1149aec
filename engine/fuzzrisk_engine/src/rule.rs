//! Rules, firing strengths and per-output aggregation.

use std::fmt;

use serde::Serialize;

/// Per-variable membership degrees for one assessment, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Readings {
    degrees: Vec<Vec<f64>>,
}

impl Readings {
    pub(crate) fn new(degrees: Vec<Vec<f64>>) -> Self {
        Self { degrees }
    }

    #[inline]
    pub fn degree(&self, variable: usize, term: usize) -> f64 {
        self.degrees[variable][term]
    }

    pub fn variable(&self, variable: usize) -> &[f64] {
        &self.degrees[variable]
    }
}

/// An `IF a AND b ... THEN consequent` rule, resolved to catalog indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedents: Vec<(String, String)>,
    consequent: String,
    resolved: Vec<(usize, usize)>,
    output: usize,
}

impl Rule {
    pub(crate) fn new(
        antecedents: Vec<(String, String)>,
        consequent: String,
        resolved: Vec<(usize, usize)>,
        output: usize,
    ) -> Self {
        debug_assert_eq!(antecedents.len(), resolved.len());
        Self {
            antecedents,
            consequent,
            resolved,
            output,
        }
    }

    pub fn antecedents(&self) -> &[(String, String)] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &str {
        &self.consequent
    }

    pub(crate) fn output(&self) -> usize {
        self.output
    }

    /// Fuzzy AND: the weakest antecedent bounds the rule.
    pub fn firing_strength(&self, readings: &Readings) -> f64 {
        self.resolved
            .iter()
            .map(|&(var, term)| readings.degree(var, term))
            .fold(1.0, f64::min)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IF ")?;
        for (i, (var, term)) in self.antecedents.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{var} is {term}")?;
        }
        write!(f, " THEN {}", self.consequent)
    }
}

/// Strength one rule fired with during an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleFiring {
    pub rule: usize,
    pub strength: f64,
}

/// Output term name to aggregated activation, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActivationMap {
    entries: Vec<(String, f64)>,
}

impl ActivationMap {
    pub(crate) fn zeroed<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: names.into_iter().map(|n| (n.to_string(), 0.0)).collect(),
        }
    }

    /// Fuzzy OR across rules: keep the strongest conclusion, never sum.
    pub(crate) fn aggregate(&mut self, output: usize, strength: f64) {
        let slot = &mut self.entries[output].1;
        *slot = slot.max(strength);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no output term received any activation.
    pub fn is_quiescent(&self) -> bool {
        self.entries.iter().all(|(_, s)| *s <= 0.0)
    }

    /// The most strongly activated term; ties go to the earliest registered.
    pub fn strongest(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, strength) in self.iter() {
            match best {
                Some((_, s)) if strength <= s => {}
                _ => best = Some((name, strength)),
            }
        }
        best
    }
}
