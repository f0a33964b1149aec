//! Linguistic terms and the input variables that own them.

use std::collections::HashSet;
use std::fmt;

use crate::error::ConfigurationError;
use crate::fuzzify::{term_kind, FuzzifiedReading};
use crate::shape::{Shape, ShoulderKind};

/// A named membership shape, e.g. `"prediabetic"` over fasting blood sugar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinguisticTerm {
    pub name: String,
    pub shape: Shape,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ShoulderKind,
}

impl LinguisticTerm {
    /// A plain (non-shoulder) term. Output terms are always built this way.
    pub fn new(name: impl Into<String>, params: &[f64]) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let shape = Shape::from_params(&name, params)?;
        Ok(Self {
            name,
            shape,
            kind: ShoulderKind::Normal,
        })
    }

    pub fn with_kind(mut self, kind: ShoulderKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub fn membership(&self, value: f64) -> f64 {
        self.shape.membership(value, self.kind)
    }
}

impl fmt::Display for LinguisticTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shape.is_trapezoidal() {
            write!(f, "{} {}", self.name, self.shape)
        } else {
            write!(f, "{} {} [{}]", self.name, self.shape, self.kind)
        }
    }
}

/// An input variable with its terms in ascending domain order.
///
/// Shoulder kinds are fixed at construction: the first triangular term
/// saturates to the left, the last to the right.
#[derive(Debug, Clone, PartialEq)]
pub struct InputVariable {
    name: String,
    terms: Vec<LinguisticTerm>,
    range: Option<(f64, f64)>,
}

impl InputVariable {
    /// Validates and registers `terms` in declaration order.
    ///
    /// Nothing is kept if any term is rejected.
    pub fn new<N, T, P>(
        name: N,
        terms: impl IntoIterator<Item = (T, P)>,
        range: Option<(f64, f64)>,
    ) -> Result<Self, ConfigurationError>
    where
        N: Into<String>,
        T: Into<String>,
        P: AsRef<[f64]>,
    {
        let name = name.into();
        let raw: Vec<(String, P)> = terms.into_iter().map(|(t, p)| (t.into(), p)).collect();
        if raw.is_empty() {
            return Err(ConfigurationError::EmptyTerms { variable: name });
        }

        if let Some((low, high)) = range {
            if !(low.is_finite() && high.is_finite() && low < high) {
                return Err(ConfigurationError::InvalidRange {
                    variable: name,
                    low,
                    high,
                });
            }
        }

        let len = raw.len();
        let mut seen = HashSet::with_capacity(len);
        let mut built: Vec<LinguisticTerm> = Vec::with_capacity(len);
        for (index, (term, params)) in raw.into_iter().enumerate() {
            if !seen.insert(term.clone()) {
                return Err(ConfigurationError::DuplicateTerm {
                    variable: name,
                    term,
                });
            }
            let shape = Shape::from_params(&term, params.as_ref())?;
            if let Some(prev) = built.last() {
                if shape.peak() < prev.shape.peak() {
                    return Err(ConfigurationError::TermsOutOfOrder {
                        variable: name,
                        term,
                        peak: shape.peak(),
                        previous: prev.shape.peak(),
                    });
                }
            }
            let kind = term_kind(&shape, index, len);
            built.push(LinguisticTerm {
                name: term,
                shape,
                kind,
            });
        }

        log::debug!("registered variable '{name}' with {len} terms");
        Ok(Self {
            name,
            terms: built,
            range,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terms(&self) -> &[LinguisticTerm] {
        &self.terms
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == term)
    }

    /// Degrees for every term, indexed like [`InputVariable::terms`].
    pub fn degrees(&self, value: f64) -> Vec<f64> {
        if let Some((low, high)) = self.range {
            if value < low || value > high {
                log::warn!(
                    "value {value} for '{}' lies outside its range [{low}, {high}]",
                    self.name
                );
            }
        }
        self.terms.iter().map(|t| t.membership(value)).collect()
    }

    pub fn fuzzify(&self, value: f64) -> FuzzifiedReading {
        let degrees = self.degrees(value);
        self.terms
            .iter()
            .zip(degrees)
            .map(|(t, mu)| (t.name.clone(), mu))
            .collect()
    }
}
