use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
    /// Money moving between two accounts of the same company.
    Transfer,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Income => write!(f, "income"),
            Direction::Expense => write!(f, "expense"),
            Direction::Transfer => write!(f, "transfer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Backed by ownership evidence (tax id or account number).
    High,
    /// Backed by narration keywords only.
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Outcome of direction inference. An undetermined result always carries
/// `Confidence::Low` and no reasons; a determined one always has at least
/// one reason. The fields are private so both shapes go through the
/// constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDirectionResult")]
pub struct OperationDirectionResult {
    direction: Option<Direction>,
    confidence: Confidence,
    reasons: Vec<String>,
}

impl OperationDirectionResult {
    /// Returns `None` when `reasons` is empty.
    pub fn determined(
        direction: Direction,
        confidence: Confidence,
        reasons: Vec<String>,
    ) -> Option<Self> {
        if reasons.is_empty() {
            return None;
        }
        Some(OperationDirectionResult {
            direction: Some(direction),
            confidence,
            reasons,
        })
    }

    pub fn undetermined() -> Self {
        OperationDirectionResult {
            direction: None,
            confidence: Confidence::Low,
            reasons: Vec::new(),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn is_determined(&self) -> bool {
        self.direction.is_some()
    }
}

#[derive(Deserialize)]
struct RawDirectionResult {
    direction: Option<Direction>,
    confidence: Confidence,
    #[serde(default)]
    reasons: Vec<String>,
}

impl TryFrom<RawDirectionResult> for OperationDirectionResult {
    type Error = String;

    fn try_from(raw: RawDirectionResult) -> Result<Self, Self::Error> {
        match raw.direction {
            Some(direction) => {
                OperationDirectionResult::determined(direction, raw.confidence, raw.reasons)
                    .ok_or_else(|| format!("{direction} result has no reasons"))
            }
            None if raw.confidence == Confidence::Low && raw.reasons.is_empty() => {
                Ok(OperationDirectionResult::undetermined())
            }
            None => Err("undetermined result must be low confidence without reasons".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undetermined_is_low_without_reasons() {
        let r = OperationDirectionResult::undetermined();
        assert_eq!(r.direction(), None);
        assert_eq!(r.confidence(), Confidence::Low);
        assert!(r.reasons().is_empty());
        assert!(!r.is_determined());
    }

    #[test]
    fn determined_requires_a_reason() {
        assert!(
            OperationDirectionResult::determined(Direction::Income, Confidence::High, vec![])
                .is_none()
        );
        let r = OperationDirectionResult::determined(
            Direction::Income,
            Confidence::High,
            vec!["receiver tax id matches the company".to_string()],
        )
        .unwrap();
        assert_eq!(r.direction(), Some(Direction::Income));
        assert_eq!(r.reasons().len(), 1);
    }

    #[test]
    fn serializes_lowercase_with_null_direction() {
        let json = serde_json::to_value(OperationDirectionResult::undetermined()).unwrap();
        assert_eq!(json["direction"], serde_json::Value::Null);
        assert_eq!(json["confidence"], "low");

        let r = OperationDirectionResult::determined(
            Direction::Transfer,
            Confidence::High,
            vec!["x".to_string()],
        )
        .unwrap();
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["direction"], "transfer");
        assert_eq!(json["confidence"], "high");
    }

    #[test]
    fn deserializes_valid_shapes() {
        let r: OperationDirectionResult = serde_json::from_str(
            r#"{"direction":"income","confidence":"medium","reasons":["keyword"]}"#,
        )
        .unwrap();
        assert_eq!(r.direction(), Some(Direction::Income));
        assert_eq!(r.confidence(), Confidence::Medium);

        let r: OperationDirectionResult =
            serde_json::from_str(r#"{"direction":null,"confidence":"low","reasons":[]}"#).unwrap();
        assert_eq!(r, OperationDirectionResult::undetermined());
    }

    #[test]
    fn rejects_shapes_the_constructors_cannot_build() {
        let bad = [
            r#"{"direction":null,"confidence":"high","reasons":["x"]}"#,
            r#"{"direction":null,"confidence":"low","reasons":["x"]}"#,
            r#"{"direction":"income","confidence":"high","reasons":[]}"#,
        ];
        for json in bad {
            assert!(
                serde_json::from_str::<OperationDirectionResult>(json).is_err(),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(Direction::Expense.to_string(), "expense");
        assert_eq!(Confidence::Medium.to_string(), "medium");
    }
}
