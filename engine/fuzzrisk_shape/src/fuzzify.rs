//! Fuzzification of crisp values against an ordered set of terms.

use crate::error::ConfigurationError;
use crate::shape::{Shape, ShoulderKind};

/// Shoulder kind implied by a term's position among `len` declared terms.
///
/// The first term wins when there is only one.
pub fn positional_kind(index: usize, len: usize) -> ShoulderKind {
    if index == 0 {
        ShoulderKind::LeftShoulder
    } else if index + 1 == len {
        ShoulderKind::RightShoulder
    } else {
        ShoulderKind::Normal
    }
}

/// Shoulder kind for `shape` at `index` of `len` terms. Trapezoids are never
/// shoulders, though they still occupy a position.
pub fn term_kind(shape: &Shape, index: usize, len: usize) -> ShoulderKind {
    match shape {
        Shape::Triangular { .. } => positional_kind(index, len),
        Shape::Trapezoidal { .. } => ShoulderKind::Normal,
    }
}

/// Term name to membership degree, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuzzifiedReading {
    entries: Vec<(String, f64)>,
}

impl FuzzifiedReading {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == term)
            .map(|(_, mu)| *mu)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, mu)| (name.as_str(), *mu))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for FuzzifiedReading {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Fuzzifies `value` against raw `(name, params)` terms.
///
/// Shoulders are inferred from position on every call: terms must be given in
/// ascending domain order. Four-parameter terms are always plain trapezoids.
pub fn fuzzify_variable<S, P>(
    value: f64,
    terms: &[(S, P)],
) -> Result<FuzzifiedReading, ConfigurationError>
where
    S: AsRef<str>,
    P: AsRef<[f64]>,
{
    let len = terms.len();
    terms
        .iter()
        .enumerate()
        .map(|(index, (name, params))| {
            let name = name.as_ref();
            let shape = Shape::from_params(name, params.as_ref())?;
            let kind = term_kind(&shape, index, len);
            let mu = shape.membership(value, kind);
            log::trace!("fuzzify {value} -> {name} ({kind}) = {mu}");
            Ok((name.to_string(), mu))
        })
        .collect()
}
