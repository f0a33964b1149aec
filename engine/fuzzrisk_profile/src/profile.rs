use std::fs;
use std::path::Path;

use fuzzrisk_engine::{EngineConfig, RuleEngine};
use fuzzrisk_shape::ConfigurationError;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TermDecl {
    pub name: String,
    pub params: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VariableDecl {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,

    /// Terms in ascending domain order.
    pub terms: Vec<TermDecl>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDecl {
    /// `(variable, term)` pairs joined by AND.
    pub when: Vec<(String, String)>,
    pub then: String,
}

/// A complete rule base as written in a profile file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<VariableDecl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<TermDecl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleDecl>,
}

impl Profile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            engine: EngineConfig::default(),
            variables: Vec::new(),
            outputs: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str::<Profile>(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading profile from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn to_toml(&self) -> Result<String, ProfileError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Registers everything in declaration order. The first rejected
    /// declaration aborts the build.
    pub fn build(&self) -> Result<RuleEngine, ProfileError> {
        self.build_engine().map_err(|source| ProfileError::Configuration {
            profile: self.name.clone(),
            source,
        })
    }

    fn build_engine(&self) -> Result<RuleEngine, ConfigurationError> {
        let mut engine = RuleEngine::with_config(self.engine);
        for var in &self.variables {
            engine.add_variable_with_range(
                var.name.as_str(),
                var.terms.iter().map(|t| (t.name.as_str(), t.params.as_slice())),
                var.range,
            )?;
        }
        for out in &self.outputs {
            engine.add_output_term(out.name.as_str(), &out.params)?;
        }
        for rule in &self.rules {
            engine.add_rule(
                rule.when.iter().map(|(v, t)| (v.as_str(), t.as_str())),
                rule.then.as_str(),
            )?;
        }
        // Surface a bad output domain now rather than on the first request.
        engine.output_domain()?;

        log::debug!(
            "built profile '{}': {} variables, {} output terms, {} rules",
            self.name,
            engine.variables().len(),
            engine.output_terms().len(),
            engine.rules().len()
        );
        Ok(engine)
    }
}
