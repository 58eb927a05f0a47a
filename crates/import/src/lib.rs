pub mod config;
pub mod dictionary;
pub mod direction;
pub mod duplicates;
pub mod enrich;
pub mod hash;
pub mod normalize;
pub mod similarity;
pub mod tags;

pub use config::{ConfigError, ReconcileConfig};
pub use dictionary::{TagEntry, OTHER_TAG, TAG_DICTIONARY};
pub use direction::{determine_operation_direction, resolve_direction};
pub use duplicates::{DuplicateCheckResult, DuplicateIndex};
pub use enrich::{EnrichedOperation, ImportEnricher};
pub use hash::create_operation_hash;
pub use normalize::{normalize_text, normalize_text_aggressive};
pub use similarity::{find_similar_operations, group_similar_operations, SimilarityGroup};
pub use tags::{extract_tags, MatchType, TagClassifier, TagRule};

pub mod import {
    use std::path::Path;

    use crate::*;

    pub fn load_config(path: &Path) -> Result<ReconcileConfig, ConfigError> {
        ReconcileConfig::load(path)
    }

    pub fn create_enricher(config: &ReconcileConfig) -> ImportEnricher {
        ImportEnricher::from_config(config)
    }

    pub fn create_duplicate_index<I, S>(known_hashes: I) -> DuplicateIndex
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DuplicateIndex::from_hashes(known_hashes)
    }
}
