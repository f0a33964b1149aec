//! Declarative rule-base profiles for the fuzzrisk engine.
//!
//! A profile is a TOML document listing input variables, output terms and
//! rules. [`Profile::build`] validates it into a ready-to-share
//! [`RuleEngine`](fuzzrisk_engine::RuleEngine).

pub mod diabetes;
pub mod error;
pub mod profile;

pub use diabetes::{diabetes_engine, diabetes_profile, DiabetesInputs, DIABETES_TOML};
pub use error::ProfileError;
pub use profile::{Profile, RuleDecl, TermDecl, VariableDecl};
