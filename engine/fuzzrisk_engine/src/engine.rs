//! The configured rule base and the assessment pipeline.

use std::collections::HashMap;

use fuzzrisk_shape::{ConfigurationError, FuzzifiedReading, InputVariable, LinguisticTerm};

use crate::assessment::Assessment;
use crate::config::EngineConfig;
use crate::defuzz::{self, OutputDomain};
use crate::error::AssessError;
use crate::rule::{ActivationMap, Readings, Rule, RuleFiring};

/// Crisp inputs keyed by variable name.
pub type Inputs = HashMap<String, f64>;

/// Result of firing every rule once.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub activations: ActivationMap,
    pub firings: Vec<RuleFiring>,
}

/// Mamdani inference engine over a fixed rule base.
///
/// Build it once with the `add_*` methods, then share it by reference: the
/// assessment path only reads the catalogs, so one engine can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: EngineConfig,
    variables: Vec<InputVariable>,
    outputs: Vec<LinguisticTerm>,
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn variables(&self) -> &[InputVariable] {
        &self.variables
    }

    pub fn output_terms(&self) -> &[LinguisticTerm] {
        &self.outputs
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn variable(&self, name: &str) -> Option<&InputVariable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name() == name)
    }

    fn output_index(&self, name: &str) -> Option<usize> {
        self.outputs.iter().position(|t| t.name == name)
    }

    /// Registers an input variable with its terms in ascending domain order.
    pub fn add_variable<N, T, P>(
        &mut self,
        name: N,
        terms: impl IntoIterator<Item = (T, P)>,
    ) -> Result<(), ConfigurationError>
    where
        N: Into<String>,
        T: Into<String>,
        P: AsRef<[f64]>,
    {
        self.add_variable_with_range(name, terms, None)
    }

    /// Like [`RuleEngine::add_variable`], also recording the variable's universe.
    pub fn add_variable_with_range<N, T, P>(
        &mut self,
        name: N,
        terms: impl IntoIterator<Item = (T, P)>,
        range: Option<(f64, f64)>,
    ) -> Result<(), ConfigurationError>
    where
        N: Into<String>,
        T: Into<String>,
        P: AsRef<[f64]>,
    {
        let name = name.into();
        if self.variable_index(&name).is_some() {
            return Err(ConfigurationError::DuplicateVariable(name));
        }
        let variable = InputVariable::new(name, terms, range)?;
        self.variables.push(variable);
        Ok(())
    }

    /// Registers an output term. Output terms never get shoulders.
    pub fn add_output_term(
        &mut self,
        name: impl Into<String>,
        params: &[f64],
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.output_index(&name).is_some() {
            return Err(ConfigurationError::DuplicateOutputTerm(name));
        }
        let term = LinguisticTerm::new(name, params)?;
        log::debug!("registered output term {term}");
        self.outputs.push(term);
        Ok(())
    }

    /// Appends `IF v1 is t1 AND ... THEN consequent`.
    ///
    /// Every name is resolved here so a broken rule base fails before the
    /// first assessment.
    pub fn add_rule<V, T, C>(
        &mut self,
        antecedents: impl IntoIterator<Item = (V, T)>,
        consequent: C,
    ) -> Result<(), ConfigurationError>
    where
        V: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        let consequent = consequent.into();
        let antecedents: Vec<(String, String)> = antecedents
            .into_iter()
            .map(|(v, t)| (v.into(), t.into()))
            .collect();
        if antecedents.is_empty() {
            return Err(ConfigurationError::EmptyAntecedents(consequent));
        }

        let resolved = antecedents
            .iter()
            .map(|(var, term)| {
                let vi = self
                    .variable_index(var)
                    .ok_or_else(|| ConfigurationError::UnknownVariable(var.clone()))?;
                let ti = self.variables[vi].term_index(term).ok_or_else(|| {
                    ConfigurationError::UnknownTerm {
                        variable: var.clone(),
                        term: term.clone(),
                    }
                })?;
                Ok((vi, ti))
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;
        let output = self
            .output_index(&consequent)
            .ok_or_else(|| ConfigurationError::UnknownOutputTerm(consequent.clone()))?;

        let rule = Rule::new(antecedents, consequent, resolved, output);
        log::debug!("rule #{}: {rule}", self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// Fuzzifies every registered variable. Inputs naming unknown variables
    /// are ignored.
    pub fn fuzzify(&self, inputs: &Inputs) -> Result<Readings, ConfigurationError> {
        for name in inputs.keys() {
            if self.variable_index(name).is_none() {
                log::warn!("ignoring input for unknown variable '{name}'");
            }
        }

        let degrees = self
            .variables
            .iter()
            .map(|var| {
                let value = *inputs
                    .get(var.name())
                    .ok_or_else(|| ConfigurationError::MissingInput(var.name().to_string()))?;
                if !value.is_finite() {
                    return Err(ConfigurationError::NonFiniteInput {
                        variable: var.name().to_string(),
                        value,
                    });
                }
                Ok(var.degrees(value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Readings::new(degrees))
    }

    /// Named readings for diagnostics, in catalog order.
    pub fn explain(&self, readings: &Readings) -> Vec<(String, FuzzifiedReading)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(i, var)| {
                let reading = var
                    .terms()
                    .iter()
                    .zip(readings.variable(i))
                    .map(|(t, mu)| (t.name.clone(), *mu))
                    .collect();
                (var.name().to_string(), reading)
            })
            .collect()
    }

    /// Fires every rule once and aggregates per output term.
    pub fn evaluate(&self, readings: &Readings) -> Evaluation {
        let mut activations = ActivationMap::zeroed(self.outputs.iter().map(|t| t.name.as_str()));
        let firings = self
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let strength = rule.firing_strength(readings);
                if strength > 0.0 {
                    log::trace!("rule #{index} fired at {strength:.4}: {rule}");
                }
                activations.aggregate(rule.output(), strength);
                RuleFiring {
                    rule: index,
                    strength,
                }
            })
            .collect();
        Evaluation {
            activations,
            firings,
        }
    }

    pub fn output_domain(&self) -> Result<OutputDomain, ConfigurationError> {
        OutputDomain::resolve(&self.config, &self.outputs)
    }

    /// Crisp score and label for an activation map produced by this engine.
    pub fn defuzzify(&self, activations: &ActivationMap) -> Result<(f64, String), AssessError> {
        defuzz::check_alignment(&self.outputs, activations)?;
        let domain = self.output_domain()?;
        Ok(defuzz::defuzzify(&self.outputs, activations, &domain)?)
    }

    /// The combined (clipped, max-aggregated) output set on the sample grid.
    pub fn output_curve(
        &self,
        activations: &ActivationMap,
    ) -> Result<Vec<(f64, f64)>, ConfigurationError> {
        defuzz::check_alignment(&self.outputs, activations)?;
        let domain = self.output_domain()?;
        Ok(domain
            .samples()
            .map(|x| (x, defuzz::combined_membership(&self.outputs, activations, x)))
            .collect())
    }

    /// Runs the full pipeline for one set of crisp inputs.
    pub fn assess(&self, inputs: &Inputs) -> Result<Assessment, AssessError> {
        let readings = self.fuzzify(inputs)?;
        let Evaluation {
            activations,
            firings,
        } = self.evaluate(&readings);
        let (score, label) = self.defuzzify(&activations)?;
        log::debug!("assessment: score {score:.2}, label {label}");
        Ok(Assessment {
            score,
            label,
            activations,
            firings,
        })
    }
}
