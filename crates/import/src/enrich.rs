use std::collections::HashSet;

use serde::Serialize;
use sverka_core::{CompanyIdentity, ImportedOperation, OperationDirectionResult, ParsedDocument};

use crate::config::ReconcileConfig;
use crate::direction::resolve_direction;
use crate::duplicates::DuplicateIndex;
use crate::hash::create_operation_hash;
use crate::tags::TagClassifier;

/// An imported operation with everything derived from it at import time.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedOperation {
    pub id: String,
    #[serde(flatten)]
    pub document: ParsedDocument,
    pub hash: String,
    pub tags: Vec<String>,
    pub direction: OperationDirectionResult,
    pub duplicate: bool,
    /// Not an exact duplicate, but close to a stored operation.
    pub probable_duplicate: bool,
}

/// Tags, hashes and orients imported operations for one company.
#[derive(Default)]
pub struct ImportEnricher {
    classifier: TagClassifier,
    company: CompanyIdentity,
}

impl ImportEnricher {
    pub fn new(classifier: TagClassifier, company: Option<CompanyIdentity>) -> Self {
        Self {
            classifier,
            company: company.unwrap_or_default(),
        }
    }

    pub fn from_config(config: &ReconcileConfig) -> Self {
        Self::new(config.classifier(), config.company.clone())
    }

    /// Enriches a single operation; both duplicate flags only reflect `index`.
    pub fn enrich(&self, op: ImportedOperation, index: &DuplicateIndex) -> EnrichedOperation {
        let hash = create_operation_hash(&op.document);
        let duplicate = index.contains(&hash);
        self.build(op, hash, duplicate, index)
    }

    /// Enriches `ops` in input order. A record is also a duplicate when an
    /// earlier record of the same batch has the same hash.
    pub fn enrich_batch(
        &self,
        ops: Vec<ImportedOperation>,
        index: &DuplicateIndex,
    ) -> Vec<EnrichedOperation> {
        let mut seen: HashSet<String> = HashSet::with_capacity(ops.len());
        let mut enriched = Vec::with_capacity(ops.len());

        for op in ops {
            let hash = create_operation_hash(&op.document);
            let duplicate = index.contains(&hash) || !seen.insert(hash.clone());
            enriched.push(self.build(op, hash, duplicate, index));
        }

        let duplicates = enriched.iter().filter(|e| e.duplicate).count();
        let probable = enriched.iter().filter(|e| e.probable_duplicate).count();
        let undetermined: Vec<&str> = enriched
            .iter()
            .filter(|e| !e.direction.is_determined())
            .map(|e| e.id.as_str())
            .collect();
        tracing::info!(
            total = enriched.len(),
            duplicates,
            probable,
            undetermined = undetermined.len(),
            "enriched import batch"
        );
        if !undetermined.is_empty() {
            tracing::warn!(
                count = undetermined.len(),
                ids = ?undetermined,
                "direction could not be determined"
            );
        }

        enriched
    }

    fn build(
        &self,
        op: ImportedOperation,
        hash: String,
        duplicate: bool,
        index: &DuplicateIndex,
    ) -> EnrichedOperation {
        let probable_duplicate = !duplicate && index.is_probable_duplicate(&op.document);
        let tags = self.classifier.extract_tags(&op.document);
        let direction = resolve_direction(&op.document, &self.company);
        EnrichedOperation {
            id: op.id,
            document: op.document,
            hash,
            tags,
            direction,
            duplicate,
            probable_duplicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sverka_core::{Confidence, Direction, Money};

    use crate::tags::{MatchType, TagRule};

    const COMPANY_INN: &str = "7701234567";

    fn op(id: &str, purpose: &str) -> ImportedOperation {
        let doc = ParsedDocument::new(
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            Money::from_kopecks(12_000_00),
        )
        .with_purpose(purpose);
        ImportedOperation::new(id, doc)
    }

    fn enricher() -> ImportEnricher {
        ImportEnricher::new(
            TagClassifier::default(),
            Some(CompanyIdentity::new(Some(COMPANY_INN), Vec::<String>::new())),
        )
    }

    #[test]
    fn enrich_fills_every_field() {
        let mut input = op("42", "Оплата гостиницы");
        input.document.payer_inn = Some(COMPANY_INN.to_string());
        let expected_hash = create_operation_hash(&input.document);

        let e = enricher().enrich(input, &DuplicateIndex::new());
        assert_eq!(e.id, "42");
        assert_eq!(e.hash, expected_hash);
        assert_eq!(e.tags, ["travel_accommodation"]);
        assert_eq!(e.direction.direction(), Some(Direction::Expense));
        assert_eq!(e.direction.confidence(), Confidence::High);
        assert!(!e.duplicate);
    }

    #[test]
    fn enrich_flags_known_hash() {
        let input = op("1", "Аренда склада");
        let index = DuplicateIndex::from_hashes([create_operation_hash(&input.document)]);
        assert!(enricher().enrich(input, &index).duplicate);
    }

    #[test]
    fn batch_flags_later_repeats_only() {
        let ops = vec![
            op("1", "Аренда склада"),
            op("2", "Аренда склада"),
            op("3", "Связь"),
        ];
        let out = enricher().enrich_batch(ops, &DuplicateIndex::new());
        let flags: Vec<bool> = out.iter().map(|e| e.duplicate).collect();
        assert_eq!(flags, [false, true, false]);
        assert_eq!(out[0].hash, out[1].hash);
        let ids: Vec<&str> = out.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn near_copy_of_stored_operation_is_probable() {
        let mut index = DuplicateIndex::new();
        index.record(&op("1", "Аренда склада").document);

        let mut moved = op("2", "Аренда склада");
        moved.document.date = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();
        let out = enricher().enrich_batch(vec![op("3", "Аренда склада"), moved], &index);
        assert!(out[0].duplicate);
        assert!(!out[0].probable_duplicate);
        assert!(!out[1].duplicate);
        assert!(out[1].probable_duplicate);
    }

    #[test]
    fn without_company_only_keywords_decide() {
        let e = ImportEnricher::default().enrich(
            op("1", "Комиссия банка за обслуживание"),
            &DuplicateIndex::new(),
        );
        assert_eq!(e.direction.direction(), Some(Direction::Expense));
        assert_eq!(e.direction.confidence(), Confidence::Medium);
    }

    #[test]
    fn user_rules_reach_tags() {
        let classifier = TagClassifier::new(vec![TagRule {
            tag: "rent_office".to_string(),
            pattern: "бизнес-центр".to_string(),
            match_type: MatchType::Contains,
            priority: 1,
        }]);
        let e = ImportEnricher::new(classifier, None)
            .enrich(op("1", "Оплата за бизнес-центр"), &DuplicateIndex::new());
        assert_eq!(e.tags, ["rent_office"]);
    }

    #[test]
    fn serializes_flat_with_direction_object() {
        let e = enricher().enrich(op("7", "Непонятная операция"), &DuplicateIndex::new());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["purpose"], "Непонятная операция");
        assert_eq!(json["tags"][0], "other");
        assert!(json["direction"]["direction"].is_null());
        assert_eq!(json["direction"]["confidence"], "low");
        assert_eq!(json["duplicate"], false);
        assert_eq!(json["probable_duplicate"], false);
    }
}
