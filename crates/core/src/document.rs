use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// One transaction line extracted from a bank statement export, before any
/// enrichment. Only `date` and `amount` are guaranteed; statements do not
/// always expose both counterparties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default)]
    pub payer_inn: Option<String>,
    #[serde(default)]
    pub payer_account: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub receiver_inn: Option<String>,
    #[serde(default)]
    pub receiver_account: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

impl ParsedDocument {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        ParsedDocument {
            date,
            amount,
            number: None,
            payer: None,
            payer_inn: None,
            payer_account: None,
            receiver: None,
            receiver_inn: None,
            receiver_account: None,
            purpose: None,
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn with_payer(
        mut self,
        name: Option<&str>,
        inn: Option<&str>,
        account: Option<&str>,
    ) -> Self {
        self.payer = name.map(str::to_string);
        self.payer_inn = inn.map(str::to_string);
        self.payer_account = account.map(str::to_string);
        self
    }

    pub fn with_receiver(
        mut self,
        name: Option<&str>,
        inn: Option<&str>,
        account: Option<&str>,
    ) -> Self {
        self.receiver = name.map(str::to_string);
        self.receiver_inn = inn.map(str::to_string);
        self.receiver_account = account.map(str::to_string);
        self
    }

    /// Payment narration, empty when the statement line has none.
    pub fn purpose_text(&self) -> &str {
        self.purpose.as_deref().unwrap_or("")
    }
}

/// A parsed document after the persistence layer has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedOperation {
    pub id: String,
    #[serde(flatten)]
    pub document: ParsedDocument,
}

impl ImportedOperation {
    pub fn new(id: impl Into<String>, document: ParsedDocument) -> Self {
        ImportedOperation {
            id: id.into(),
            document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_document_has_no_counterparties() {
        let doc = ParsedDocument::new(date(2024, 3, 1), Money::from_kopecks(100));
        assert!(doc.payer.is_none());
        assert!(doc.receiver_account.is_none());
        assert_eq!(doc.purpose_text(), "");
    }

    #[test]
    fn builders_fill_both_sides() {
        let doc = ParsedDocument::new(date(2024, 3, 1), Money::from_kopecks(100))
            .with_payer(Some("ООО Ромашка"), Some("7701234567"), None)
            .with_receiver(None, Some("500100732259"), Some("40702810900000000001"))
            .with_purpose("Оплата по счету");
        assert_eq!(doc.payer.as_deref(), Some("ООО Ромашка"));
        assert_eq!(doc.payer_account, None);
        assert_eq!(doc.receiver_inn.as_deref(), Some("500100732259"));
        assert_eq!(doc.purpose_text(), "Оплата по счету");
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"date":"2024-01-15","amount":"1500.00"}"#;
        let doc: ParsedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.date, date(2024, 1, 15));
        assert_eq!(doc.amount.to_fixed(), "1500.00");
        assert!(doc.purpose.is_none());
    }

    #[test]
    fn imported_operation_flattens_document_fields() {
        let json = r#"{"id":"op-1","date":"2024-01-15","amount":10,"purpose":"Аренда"}"#;
        let op: ImportedOperation = serde_json::from_str(json).unwrap();
        assert_eq!(op.id, "op-1");
        assert_eq!(op.document.purpose_text(), "Аренда");
        assert_eq!(op.document.amount.to_fixed(), "10.00");
    }
}
