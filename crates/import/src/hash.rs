use sha2::{Digest, Sha256};
use sverka_core::ParsedDocument;

fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Pipe-joined identity fields in fixed order:
/// `date|amount|number|payer|payer_inn|payer_account|receiver|receiver_inn|receiver_account|purpose`.
/// The separator keeps `("AB", "C")` and `("A", "BC")` apart.
pub fn canonical_identity(doc: &ParsedDocument) -> String {
    let field = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").to_string();
    [
        doc.date.format("%Y-%m-%d").to_string(),
        doc.amount.to_fixed(),
        field(&doc.number),
        field(&doc.payer),
        field(&doc.payer_inn),
        field(&doc.payer_account),
        field(&doc.receiver),
        field(&doc.receiver_inn),
        field(&doc.receiver_account),
        field(&doc.purpose),
    ]
    .join("|")
}

/// Content address of a statement line: the same transaction hashes the same
/// no matter which file or batch it was imported from. Purpose text is taken
/// verbatim (trimmed), not normalized.
pub fn create_operation_hash(doc: &ParsedDocument) -> String {
    to_hex(&Sha256::digest(canonical_identity(doc).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use sverka_core::Money;

    fn base() -> ParsedDocument {
        ParsedDocument {
            date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            amount: Money::from_kopecks(1_500_00),
            number: Some("118".to_string()),
            payer: Some("ООО Ромашка".to_string()),
            payer_inn: Some("7701234567".to_string()),
            payer_account: Some("40702810900000000001".to_string()),
            receiver: Some("ИП Петров".to_string()),
            receiver_inn: Some("500100732259".to_string()),
            receiver_account: Some("40802810500000000002".to_string()),
            purpose: Some("Оплата по счету 15".to_string()),
        }
    }

    #[test]
    fn canonical_identity_layout() {
        assert_eq!(
            canonical_identity(&base()),
            "2024-02-05|1500.00|118|ООО Ромашка|7701234567|40702810900000000001|ИП Петров|500100732259|40802810500000000002|Оплата по счету 15"
        );
    }

    #[test]
    fn absent_fields_become_empty_segments() {
        let doc = ParsedDocument::new(
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            Money::from_kopecks(1),
        );
        assert_eq!(canonical_identity(&doc), "2024-02-05|0.01||||||||");
    }

    #[test]
    fn fixed_documents_hash_to_pinned_digests() {
        assert_eq!(
            create_operation_hash(&base()),
            "a5cb4944339b077411ac9e4f54492d5c3a71aac1a62195b6dfb4c70b58e3fb24"
        );
        let bare = ParsedDocument::new(
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            Money::from_kopecks(1),
        );
        assert_eq!(
            create_operation_hash(&bare),
            "3f928daa73fa5ffed0efbd7eff52ac37c0aadad21da679375cdac3e07f04db32"
        );
    }

    #[test]
    fn hash_is_64_hex_chars_and_deterministic() {
        let h = create_operation_hash(&base());
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(h, create_operation_hash(&base()));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut padded = base();
        padded.payer = Some("  ООО Ромашка ".to_string());
        padded.purpose = Some("Оплата по счету 15\n".to_string());
        assert_eq!(create_operation_hash(&padded), create_operation_hash(&base()));
    }

    #[test]
    fn amount_scale_does_not_change_hash() {
        let mut a = base();
        a.amount = Money::from_decimal(Decimal::from_str("1500").unwrap());
        let mut b = base();
        b.amount = Money::from_decimal(Decimal::from_str("1500.000").unwrap());
        assert_eq!(create_operation_hash(&a), create_operation_hash(&b));
    }

    #[test]
    fn every_identity_field_changes_hash() {
        let original = create_operation_hash(&base());
        let edits: Vec<Box<dyn Fn(&mut ParsedDocument)>> = vec![
            Box::new(|d| d.date = NaiveDate::from_ymd_opt(2024, 2, 6).unwrap()),
            Box::new(|d| d.amount = Money::from_kopecks(1_500_01)),
            Box::new(|d| d.number = Some("119".to_string())),
            Box::new(|d| d.payer = Some("ООО Лютик".to_string())),
            Box::new(|d| d.payer_inn = Some("7701234568".to_string())),
            Box::new(|d| d.payer_account = None),
            Box::new(|d| d.receiver = None),
            Box::new(|d| d.receiver_inn = Some("500100732250".to_string())),
            Box::new(|d| d.receiver_account = Some("40802810500000000003".to_string())),
            Box::new(|d| d.purpose = Some("Оплата по счёту 15".to_string())),
        ];
        for (i, edit) in edits.iter().enumerate() {
            let mut doc = base();
            edit(&mut doc);
            assert_ne!(create_operation_hash(&doc), original, "edit #{i} kept the hash");
        }
    }

    #[test]
    fn separator_prevents_field_shift_collisions() {
        let mut a = base();
        a.payer = Some("AB".to_string());
        a.payer_inn = Some("C".to_string());
        let mut b = base();
        b.payer = Some("A".to_string());
        b.payer_inn = Some("BC".to_string());
        assert_ne!(create_operation_hash(&a), create_operation_hash(&b));
    }
}
