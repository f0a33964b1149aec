//! Triangular and trapezoidal membership functions.
//!
//! A [`Shape`] is decided once from its parameter tuple when a term is
//! registered; evaluation afterwards is a plain `match` on the variant.

use std::fmt;

use crate::error::ConfigurationError;

/// How a triangular term saturates toward the ends of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ShoulderKind {
    /// Zero outside `[low, high]`, one at `mid`.
    #[default]
    Normal,
    /// One for every value at or below `mid`.
    LeftShoulder,
    /// One for every value at or above `mid`.
    RightShoulder,
}

impl ShoulderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoulderKind::Normal => "normal",
            ShoulderKind::LeftShoulder => "left-shoulder",
            ShoulderKind::RightShoulder => "right-shoulder",
        }
    }
}

impl fmt::Display for ShoulderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated membership shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Shape {
    Triangular { low: f64, mid: f64, high: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl Shape {
    /// Builds a shape from a raw parameter tuple, picking the variant by arity.
    ///
    /// `term` is only used to label errors.
    pub fn from_params(term: &str, params: &[f64]) -> Result<Self, ConfigurationError> {
        if params.len() != 3 && params.len() != 4 {
            return Err(ConfigurationError::InvalidArity {
                term: term.to_string(),
                arity: params.len(),
            });
        }
        if params.iter().any(|p| !p.is_finite()) {
            return Err(ConfigurationError::NonFiniteParameter {
                term: term.to_string(),
                params: params.to_vec(),
            });
        }
        if params.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigurationError::NonMonotonic {
                term: term.to_string(),
                params: params.to_vec(),
            });
        }

        Ok(match *params {
            [low, mid, high] => Shape::Triangular { low, mid, high },
            [a, b, c, d] => Shape::Trapezoidal { a, b, c, d },
            _ => unreachable!("arity checked above"),
        })
    }

    /// Degree of membership of `value`. `kind` only applies to triangles.
    pub fn membership(&self, value: f64, kind: ShoulderKind) -> f64 {
        match *self {
            Shape::Triangular { low, mid, high } => triangular_degree(value, low, mid, high, kind),
            Shape::Trapezoidal { a, b, c, d } => trapezoidal_degree(value, a, b, c, d),
        }
    }

    /// Point used to order terms along a domain: `mid` or the plateau start `b`.
    pub fn peak(&self) -> f64 {
        match *self {
            Shape::Triangular { mid, .. } => mid,
            Shape::Trapezoidal { b, .. } => b,
        }
    }

    /// Outer bounds of the non-zero region of the normal shape.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Shape::Triangular { low, high, .. } => (low, high),
            Shape::Trapezoidal { a, d, .. } => (a, d),
        }
    }

    pub fn params(&self) -> Vec<f64> {
        match *self {
            Shape::Triangular { low, mid, high } => vec![low, mid, high],
            Shape::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
        }
    }

    pub fn is_trapezoidal(&self) -> bool {
        matches!(self, Shape::Trapezoidal { .. })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Triangular { low, mid, high } => write!(f, "tri({low}, {mid}, {high})"),
            Shape::Trapezoidal { a, b, c, d } => write!(f, "trap({a}, {b}, {c}, {d})"),
        }
    }
}

/// Validates `(low, mid, high)` and evaluates the triangle at `value`.
pub fn triangular(
    value: f64,
    params: (f64, f64, f64),
    kind: ShoulderKind,
) -> Result<f64, ConfigurationError> {
    let (low, mid, high) = params;
    let shape = Shape::from_params("triangular", &[low, mid, high])?;
    Ok(shape.membership(value, kind))
}

/// Validates `(a, b, c, d)` and evaluates the trapezoid at `value`.
pub fn trapezoidal(value: f64, params: (f64, f64, f64, f64)) -> Result<f64, ConfigurationError> {
    let (a, b, c, d) = params;
    let shape = Shape::from_params("trapezoidal", &[a, b, c, d])?;
    Ok(shape.membership(value, ShoulderKind::Normal))
}

// Bounds are tested before the ramps so zero-width ramps never divide by zero.
fn triangular_degree(value: f64, low: f64, mid: f64, high: f64, kind: ShoulderKind) -> f64 {
    match kind {
        ShoulderKind::LeftShoulder => {
            if value <= low {
                1.0
            } else if value >= high {
                0.0
            } else if value <= mid {
                1.0
            } else {
                (high - value) / (high - mid)
            }
        }
        ShoulderKind::RightShoulder => {
            if value >= high {
                1.0
            } else if value <= low {
                0.0
            } else if value >= mid {
                1.0
            } else {
                (value - low) / (mid - low)
            }
        }
        ShoulderKind::Normal => {
            if value <= low || value >= high {
                0.0
            } else if value == mid {
                1.0
            } else if value < mid {
                (value - low) / (mid - low)
            } else {
                (high - value) / (high - mid)
            }
        }
    }
}

fn trapezoidal_degree(value: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if value < a || value > d {
        0.0
    } else if value < b {
        (value - a) / (b - a)
    } else if value <= c {
        1.0
    } else {
        (d - value) / (d - c)
    }
}
