use serde::Deserialize;

use crate::error::AlignError;
use crate::graph::vocab;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Relation whose literal objects are treated as labels.
    #[serde(default = "default_preferred_label")]
    pub preferred_label: String,
    /// Relation emitted in both directions for every promoted pair.
    #[serde(default = "default_symmetric_relation")]
    pub symmetric_relation: String,
    /// Minimum number of agreeing label keys required to promote a pair.
    #[serde(default = "default_min_score")]
    pub min_score: u32,
}

fn default_name() -> String {
    "alignment".into()
}

fn default_preferred_label() -> String {
    vocab::SKOS_PREF_LABEL.into()
}

fn default_symmetric_relation() -> String {
    vocab::OWL_SAME_AS.into()
}

fn default_min_score() -> u32 {
    2
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            preferred_label: default_preferred_label(),
            symmetric_relation: default_symmetric_relation(),
            min_score: default_min_score(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AlignConfig {
    pub fn from_toml(input: &str) -> Result<Self, AlignError> {
        let config: AlignConfig =
            toml::from_str(input).map_err(|e| AlignError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlignError> {
        check_relation("preferred_label", &self.preferred_label)?;
        check_relation("symmetric_relation", &self.symmetric_relation)?;

        if self.min_score == 0 {
            return Err(AlignError::ConfigValidation(
                "min_score must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Relations are IRIs: non-empty, scheme-qualified, no whitespace.
fn check_relation(field: &str, iri: &str) -> Result<(), AlignError> {
    if iri.is_empty() {
        return Err(AlignError::ConfigValidation(format!("{field} must not be empty")));
    }
    if iri.chars().any(char::is_whitespace) {
        return Err(AlignError::ConfigValidation(format!(
            "{field} '{iri}' contains whitespace"
        )));
    }
    match iri.split_once(':') {
        Some((scheme, _)) if !scheme.is_empty() => Ok(()),
        _ => Err(AlignError::ConfigValidation(format!(
            "{field} '{iri}' is not an absolute IRI"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
