//! Scoring configuration.
//!
//! Everything the pipeline reads is here: weights, vocabularies, and the
//! two numeric knobs of the extractors. Defaults reproduce the built-in
//! behaviour; a YAML/JSON/TOML file may override any subset of fields.

use resumerank_common::{Lexicon, RankError, Result};
use serde::{Deserialize, Serialize};

use crate::features::repetition::DEFAULT_REPETITION_STEP;
use crate::features::uniqueness::DEFAULT_DUPLICATE_THRESHOLD;
use crate::weights::WeightTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Composite score weights
    #[serde(default)]
    pub weights: WeightTable,

    /// Vague/strong terms, skill pairs, stop words
    #[serde(default)]
    pub lexicon: Lexicon,

    /// Penalty per occurrence of the most repeated token
    #[serde(default = "default_repetition_step")]
    pub repetition_step: f64,

    /// Similarity above which two resumes count as duplicates
    #[serde(default = "default_duplicate_threshold")]
    pub duplicate_threshold: f64,

    /// Count a document's similarity to itself in its mean corpus similarity
    #[serde(default = "default_true")]
    pub include_self_similarity: bool,

    /// Run extractors on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_repetition_step() -> f64 { DEFAULT_REPETITION_STEP }
fn default_duplicate_threshold() -> f64 { DEFAULT_DUPLICATE_THRESHOLD }
fn default_true() -> bool { true }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            lexicon: Lexicon::default(),
            repetition_step: default_repetition_step(),
            duplicate_threshold: default_duplicate_threshold(),
            include_self_similarity: true,
            parallel: true,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !(0.0..=1.0).contains(&self.duplicate_threshold) {
            return Err(RankError::Config(format!(
                "duplicate_threshold must be within [0, 1], got {}",
                self.duplicate_threshold
            )));
        }
        if !self.repetition_step.is_finite() || self.repetition_step < 0.0 {
            return Err(RankError::Config(format!(
                "repetition_step must be a non-negative number, got {}",
                self.repetition_step
            )));
        }
        Ok(())
    }

    /// Load from YAML file
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file
    pub fn from_toml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: &str) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.include_self_similarity);
        assert!((config.duplicate_threshold - 0.9).abs() < 1e-12);
        assert!((config.repetition_step - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ScoringConfig::from_yaml_str("include_self_similarity: false\n").unwrap();
        assert!(!config.include_self_similarity);
        assert_eq!(config.weights, WeightTable::default());
        assert_eq!(config.lexicon, Lexicon::default());
    }

    #[test]
    fn test_toml_weights_override() {
        let toml = r#"
            duplicate_threshold = 0.8

            [weights]
            lexical = 0.2
            similarity = 0.2
            penalty = 0.2
            consistency = 0.2
            uniqueness = 0.2
        "#;
        let config = ScoringConfig::from_toml_str(toml).unwrap();
        assert!((config.weights.similarity - 0.2).abs() < 1e-12);
        assert!((config.duplicate_threshold - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_bad_weights_rejected() {
        let yaml = "weights: {lexical: 0.5, similarity: 0.5, penalty: 0.5, consistency: 0.0, uniqueness: 0.0}\n";
        assert!(matches!(
            ScoringConfig::from_yaml_str(yaml),
            Err(RankError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_bad_threshold_rejected() {
        assert!(matches!(
            ScoringConfig::from_yaml_str("duplicate_threshold: 1.5\n"),
            Err(RankError::Config(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ScoringConfig { parallel: false, ..Default::default() };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = ScoringConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            ScoringConfig::from_toml_str("[weights\nlexical = "),
            Err(RankError::Toml(_))
        ));
    }
}
