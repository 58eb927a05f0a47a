use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use sverka_core::ParsedDocument;

use crate::dictionary::{TagEntry, OTHER_TAG, TAG_DICTIONARY};
use crate::normalize::normalize_text;

/// A company-specific tagging rule, checked before the built-in dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: String,
    pub pattern: String,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    Contains,
    Exact,
    Regex,
}

/// Internal pairing of a rule with its precompiled regex (if applicable).
struct CompiledRule {
    rule: TagRule,
    pattern: String,
    compiled_regex: Option<regex::Regex>,
}

/// Assigns exactly one purpose tag to a document.
///
/// User rules run first (highest priority first, ties in declaration
/// order), then the dictionary in its declared order, then `other`.
pub struct TagClassifier {
    rules: Vec<CompiledRule>,
    dictionary: &'static [TagEntry],
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TagClassifier {
    pub fn new(rules: Vec<TagRule>) -> Self {
        let mut compiled: Vec<CompiledRule> = rules
            .into_iter()
            .map(|rule| {
                let compiled_regex = if let MatchType::Regex = &rule.match_type {
                    regex::RegexBuilder::new(&rule.pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| {
                            tracing::warn!(tag = %rule.tag, error = %e, "ignoring tag rule with invalid regex");
                        })
                        .ok()
                } else {
                    None
                };
                let pattern = normalize_text(Some(&rule.pattern));
                CompiledRule {
                    rule,
                    pattern,
                    compiled_regex,
                }
            })
            .collect();
        // Stable sort keeps declaration order among equal priorities.
        compiled.sort_by(|a, b| b.rule.priority.cmp(&a.rule.priority));
        Self {
            rules: compiled,
            dictionary: TAG_DICTIONARY,
        }
    }

    /// Non-empty list of tags; the first element is the primary tag.
    pub fn extract_tags(&self, doc: &ParsedDocument) -> Vec<String> {
        vec![self.primary_tag(doc).to_string()]
    }

    pub fn primary_tag(&self, doc: &ParsedDocument) -> &str {
        self.classify(doc.purpose.as_deref())
    }

    pub fn classify(&self, purpose: Option<&str>) -> &str {
        let normalized = normalize_text(purpose);
        if let Some(cr) = self
            .rules
            .iter()
            .find(|cr| rule_matches(cr, &normalized, purpose.unwrap_or("")))
        {
            return &cr.rule.tag;
        }
        dictionary_tag(self.dictionary, &normalized)
    }
}

fn rule_matches(cr: &CompiledRule, normalized: &str, raw: &str) -> bool {
    match &cr.rule.match_type {
        MatchType::Contains => !cr.pattern.is_empty() && normalized.contains(&cr.pattern),
        MatchType::Exact => !cr.pattern.is_empty() && normalized == cr.pattern,
        MatchType::Regex => cr
            .compiled_regex
            .as_ref()
            .is_some_and(|re| re.is_match(raw)),
    }
}

fn dictionary_tag(dictionary: &'static [TagEntry], normalized: &str) -> &'static str {
    dictionary
        .iter()
        .find(|entry| entry.keywords.iter().any(|k| normalized.contains(k)))
        .map_or(OTHER_TAG, |entry| entry.tag)
}

fn default_classifier() -> &'static TagClassifier {
    static C: OnceLock<TagClassifier> = OnceLock::new();
    C.get_or_init(TagClassifier::default)
}

/// Classifies `doc` with the built-in dictionary only.
pub fn extract_tags(doc: &ParsedDocument) -> Vec<String> {
    default_classifier().extract_tags(doc)
}

pub fn primary_tag(doc: &ParsedDocument) -> &'static str {
    dictionary_tag(TAG_DICTIONARY, &normalize_text(doc.purpose.as_deref()))
}
