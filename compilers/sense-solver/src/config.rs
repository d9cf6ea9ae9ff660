use std::fs;
use std::path::{Path, PathBuf};

use sense_lexicon::{TriggerMatching, TriggerRule};
use sense_parser::{StructuralRule, Tokenizer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid analyzer config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty trigger in {rule} rule #{index}")]
    EmptyTrigger { rule: &'static str, index: usize },
}

/// Tunable rule tables of the pipeline. Every field is optional in JSON;
/// missing fields keep the built-in behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub tokenizer: Tokenizer,
    pub trigger_rules: Vec<TriggerRule>,
    pub trigger_matching: TriggerMatching,
    pub structural_rules: Vec<StructuralRule>,
    pub extra_verbs: Vec<String>,
    pub extra_prepositions: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            trigger_rules: TriggerRule::defaults(),
            trigger_matching: TriggerMatching::default(),
            structural_rules: vec![StructuralRule::attachment()],
            extra_verbs: Vec::new(),
            extra_prepositions: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Blank triggers would match every sentence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.trigger_rules.iter().enumerate() {
            if rule.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::EmptyTrigger { rule: "trigger", index });
            }
        }
        for (index, rule) in self.structural_rules.iter().enumerate() {
            if rule.trigger.trim().is_empty() {
                return Err(ConfigError::EmptyTrigger { rule: "structural", index });
            }
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
