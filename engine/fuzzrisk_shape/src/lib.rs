//! Membership functions and fuzzification for the fuzzrisk engine.
//!
//! This crate covers the leaf of the inference pipeline: turning a crisp
//! measurement into degrees of membership in named linguistic terms.
//!
//! ```
//! use fuzzrisk_shape::{fuzzify_variable, ShoulderKind, triangular};
//!
//! let mu = triangular(80.0, (50.0, 70.0, 90.0), ShoulderKind::LeftShoulder).unwrap();
//! assert_eq!(mu, 0.5);
//!
//! let reading = fuzzify_variable(150.0, &[
//!     ("normal", [85.0, 95.0, 106.0]),
//!     ("diabetic", [120.0, 150.0, 180.0]),
//! ]).unwrap();
//! assert_eq!(reading.get("diabetic"), Some(1.0));
//! ```

pub mod error;
pub mod fuzzify;
pub mod shape;
pub mod term;

pub use error::ConfigurationError;
pub use fuzzify::{fuzzify_variable, positional_kind, term_kind, FuzzifiedReading};
pub use shape::{trapezoidal, triangular, Shape, ShoulderKind};
pub use term::{InputVariable, LinguisticTerm};
