use std::collections::HashSet;

use serde::Serialize;
use sverka_core::ImportedOperation;

use crate::dictionary::OTHER_TAG;
use crate::normalize::normalize_text_aggressive;
use crate::tags::primary_tag;

/// Two narrations whose token sets overlap by more than this are similar.
pub const JACCARD_THRESHOLD: f64 = 0.5;

/// Tokens of this many characters or fewer are ignored.
const MIN_TOKEN_CHARS: usize = 2;

/// Aggressively normalized words longer than two characters.
pub fn token_set(text: Option<&str>) -> HashSet<String> {
    normalize_text_aggressive(text)
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// |a ∩ b| / |a ∪ b|; 0.0 when both sets are empty.
pub fn jaccard_index(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Candidates that look like "the same kind of thing" as `target`, in input
/// order. A shared dictionary tag is enough; otherwise the narrations must
/// overlap by more than [`JACCARD_THRESHOLD`]. Candidates with the target's
/// id are skipped.
pub fn find_similar_operations<'a>(
    target: &ImportedOperation,
    candidates: &'a [ImportedOperation],
) -> Vec<&'a ImportedOperation> {
    let target_tag = primary_tag(&target.document);
    let mut target_tokens: Option<HashSet<String>> = None;

    candidates
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .filter(|candidate| {
            if target_tag != OTHER_TAG && primary_tag(&candidate.document) == target_tag {
                return true;
            }
            let tokens = target_tokens
                .get_or_insert_with(|| token_set(target.document.purpose.as_deref()));
            let score = jaccard_index(tokens, &token_set(candidate.document.purpose.as_deref()));
            score > JACCARD_THRESHOLD
        })
        .collect()
}

/// A run of mutually reviewable operations, keyed by the first one seen.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityGroup {
    pub anchor_id: String,
    pub member_ids: Vec<String>,
}

/// Partitions `operations` into groups for bulk review. Each operation lands
/// in at most one group; operations with nothing similar are left out.
pub fn group_similar_operations(operations: &[ImportedOperation]) -> Vec<SimilarityGroup> {
    let mut grouped: HashSet<&str> = HashSet::new();
    let mut groups = Vec::new();

    for (idx, anchor) in operations.iter().enumerate() {
        if grouped.contains(anchor.id.as_str()) {
            continue;
        }
        let similar: Vec<&ImportedOperation> =
            find_similar_operations(anchor, &operations[idx + 1..])
                .into_iter()
                .filter(|op| !grouped.contains(op.id.as_str()))
                .collect();
        if similar.is_empty() {
            continue;
        }

        grouped.insert(anchor.id.as_str());
        let mut member_ids = vec![anchor.id.clone()];
        for op in similar {
            grouped.insert(op.id.as_str());
            member_ids.push(op.id.clone());
        }
        groups.push(SimilarityGroup {
            anchor_id: anchor.id.clone(),
            member_ids,
        });
    }

    groups
}
