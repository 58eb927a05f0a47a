//! `sverka.toml`: the company's own identity and its tag rules.

use std::path::Path;

use serde::Deserialize;
use sverka_core::{CompanyIdentity, IdentityError};
use thiserror::Error;

use crate::normalize::normalize_text;
use crate::tags::{MatchType, TagClassifier, TagRule};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid company identity: {0}")]
    Identity(#[from] IdentityError),
    #[error("Invalid tag rule #{index} ('{tag}'): {reason}")]
    InvalidRule {
        index: usize,
        tag: String,
        reason: String,
    },
}

#[derive(Debug, Default, Deserialize)]
struct CompanySection {
    inn: Option<String>,
    #[serde(default)]
    accounts: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    company: Option<CompanySection>,
    #[serde(default)]
    tag_rules: Vec<TagRule>,
}

/// Validated configuration. Unlike [`TagClassifier::new`], loading rejects
/// rules that could never match instead of skipping them.
#[derive(Debug, Clone, Default)]
pub struct ReconcileConfig {
    pub company: Option<CompanyIdentity>,
    pub tag_rules: Vec<TagRule>,
}

impl ReconcileConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;

        let company = match file.company {
            Some(section) => {
                let identity = CompanyIdentity::new(section.inn.as_deref(), &section.accounts);
                identity.validate()?;
                Some(identity)
            }
            None => None,
        };

        for (index, rule) in file.tag_rules.iter().enumerate() {
            check_rule(index, rule)?;
        }

        Ok(ReconcileConfig {
            company,
            tag_rules: file.tag_rules,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            rules = config.tag_rules.len(),
            company = config.company.is_some(),
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn classifier(&self) -> TagClassifier {
        TagClassifier::new(self.tag_rules.clone())
    }
}

fn check_rule(index: usize, rule: &TagRule) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidRule {
        index,
        tag: rule.tag.clone(),
        reason,
    };
    if rule.tag.trim().is_empty() {
        return Err(invalid("tag is empty".to_string()));
    }
    if rule.pattern.trim().is_empty() {
        return Err(invalid("pattern is empty".to_string()));
    }
    match rule.match_type {
        MatchType::Regex => {
            regex::Regex::new(&rule.pattern).map_err(|e| invalid(e.to_string()))?;
        }
        // Matched against the normalized purpose.
        MatchType::Contains | MatchType::Exact => {
            if normalize_text(Some(&rule.pattern)).is_empty() {
                return Err(invalid(format!(
                    "pattern '{}' is empty after normalization",
                    rule.pattern
                )));
            }
        }
    }
    Ok(())
}
