use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;
use sverka_core::{Money, ParsedDocument};

use crate::hash::create_operation_hash;

/// Stored operations this many days either side of a record can make it a
/// probable duplicate.
pub const PROBABLE_DATE_WINDOW_DAYS: i64 = 2;

/// Leading purpose characters compared for probable duplicates.
pub const PURPOSE_PREFIX_CHARS: usize = 50;

/// Outcome of checking one import batch against the stored operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateCheckResult {
    pub duplicates_count: usize,
    /// Hashes of the duplicate records, one entry per duplicate, in batch order.
    pub duplicate_hashes: Vec<String>,
    /// Records that are not exact duplicates but look like a stored operation
    /// re-exported with slightly different details.
    pub probable_count: usize,
    pub probable_hashes: Vec<String>,
}

/// Content hashes of stored operations, plus the date and purpose prefix of
/// each stored operation keyed by amount.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    known: HashSet<String>,
    by_amount: HashMap<Money, Vec<(NaiveDate, String)>>,
}

fn purpose_prefix(doc: &ParsedDocument) -> Option<String> {
    match doc.purpose.as_deref() {
        Some(p) if !p.is_empty() => Some(p.chars().take(PURPOSE_PREFIX_CHARS).collect()),
        _ => None,
    }
}

impl DuplicateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of bare hashes. Probable-duplicate checks need [`Self::record`].
    pub fn from_hashes<I, S>(hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: hashes.into_iter().map(Into::into).collect(),
            by_amount: HashMap::new(),
        }
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.known.contains(hash)
    }

    /// Records a hash once the operation has been stored. Returns `false`
    /// if it was already known.
    pub fn insert(&mut self, hash: impl Into<String>) -> bool {
        self.known.insert(hash.into())
    }

    /// Records a stored operation for both exact and probable matching.
    /// Returns `false` if its hash was already known.
    pub fn record(&mut self, doc: &ParsedDocument) -> bool {
        if let Some(prefix) = purpose_prefix(doc) {
            self.by_amount
                .entry(doc.amount.rounded())
                .or_default()
                .push((doc.date, prefix));
        }
        self.insert(create_operation_hash(doc))
    }

    /// Same amount, a date within [`PROBABLE_DATE_WINDOW_DAYS`] and the same
    /// first [`PURPOSE_PREFIX_CHARS`] characters of a non-empty purpose as
    /// some stored operation. Exact duplicates also satisfy this.
    pub fn is_probable_duplicate(&self, doc: &ParsedDocument) -> bool {
        let Some(prefix) = purpose_prefix(doc) else {
            return false;
        };
        let Some(stored) = self.by_amount.get(&doc.amount.rounded()) else {
            return false;
        };
        stored.iter().any(|(date, stored_prefix)| {
            (*date - doc.date).num_days().abs() <= PROBABLE_DATE_WINDOW_DAYS
                && *stored_prefix == prefix
        })
    }

    /// A record is a duplicate when its hash is already stored or an earlier
    /// record of the same batch hashed the same; otherwise it may still be a
    /// probable duplicate of a stored operation. The index is not modified.
    pub fn check_batch(&self, documents: &[ParsedDocument]) -> DuplicateCheckResult {
        let mut seen: HashSet<String> = HashSet::with_capacity(documents.len());
        let mut result = DuplicateCheckResult::default();

        for doc in documents {
            let hash = create_operation_hash(doc);
            if self.known.contains(&hash) || !seen.insert(hash.clone()) {
                result.duplicates_count += 1;
                result.duplicate_hashes.push(hash);
            } else if self.is_probable_duplicate(doc) {
                result.probable_count += 1;
                result.probable_hashes.push(hash);
            }
        }

        tracing::debug!(
            batch = documents.len(),
            duplicates = result.duplicates_count,
            probable = result.probable_count,
            "checked batch for duplicates"
        );
        result
    }
}
