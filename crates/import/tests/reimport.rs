use chrono::NaiveDate;
use sverka_core::{Direction, ImportedOperation, Money, ParsedDocument};
use sverka_import::{
    create_operation_hash, find_similar_operations, group_similar_operations, DuplicateIndex,
    ImportEnricher, ReconcileConfig,
};

const CONFIG: &str = r#"
[company]
inn = "7701234567"
accounts = ["40702810900000000001"]

[[tag_rules]]
tag = "rent_office"
pattern = "бизнес-центр"
priority = 5
"#;

fn statement() -> Vec<ParsedDocument> {
    let date = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
    vec![
        ParsedDocument::new(date(1), Money::from_kopecks(45_000_00))
            .with_payer(Some("ООО Ромашка"), Some("7701234567"), Some("40702810900000000001"))
            .with_receiver(Some("ООО Башня"), Some("7705000000"), None)
            .with_purpose("Оплата по счету №12 от 01.03.2024 за бизнес-центр, в т.ч. НДС 20%"),
        ParsedDocument::new(date(4), Money::from_kopecks(3_500_00))
            .with_payer(Some("ООО Гость"), Some("7709000000"), None)
            .with_receiver(Some("ООО Ромашка"), None, Some("4070 2810 9000 0000 0001"))
            .with_purpose("Оплата за проживание"),
        ParsedDocument::new(date(9), Money::from_kopecks(150_00))
            .with_purpose("Комиссия за операции по терминалам"),
        ParsedDocument::new(date(12), Money::from_kopecks(8_000_00))
            .with_purpose("Оплата гостиницы"),
    ]
}

fn assign_ids(docs: Vec<ParsedDocument>, prefix: &str) -> Vec<ImportedOperation> {
    docs.into_iter()
        .enumerate()
        .map(|(i, d)| ImportedOperation::new(format!("{prefix}-{i}"), d))
        .collect()
}

#[test]
fn importing_the_same_statement_twice_flags_every_record() {
    let config = ReconcileConfig::from_toml(CONFIG).unwrap();
    let enricher = ImportEnricher::from_config(&config);
    let mut index = DuplicateIndex::new();

    let first = enricher.enrich_batch(assign_ids(statement(), "a"), &index);
    assert!(first.iter().all(|e| !e.duplicate));
    for e in &first {
        index.insert(e.hash.clone());
    }

    let check = index.check_batch(&statement());
    assert_eq!(check.duplicates_count, 4);

    let second = enricher.enrich_batch(assign_ids(statement(), "b"), &index);
    assert!(second.iter().all(|e| e.duplicate));
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.hash, create_operation_hash(&b.document));
    }
}

#[test]
fn statement_is_tagged_and_oriented() {
    let config = ReconcileConfig::from_toml(CONFIG).unwrap();
    let enricher = ImportEnricher::from_config(&config);
    let out = enricher.enrich_batch(assign_ids(statement(), "a"), &DuplicateIndex::new());

    let tags: Vec<&str> = out.iter().map(|e| e.tags[0].as_str()).collect();
    assert_eq!(
        tags,
        ["rent_office", "travel_accommodation", "acquiring_fee", "travel_accommodation"]
    );

    let directions: Vec<Option<Direction>> = out.iter().map(|e| e.direction.direction()).collect();
    assert_eq!(
        directions,
        [
            Some(Direction::Expense),
            Some(Direction::Income),
            Some(Direction::Expense),
            None
        ]
    );
}

#[test]
fn similar_operations_share_a_review_group() {
    let ops = assign_ids(statement(), "a");
    let similar = find_similar_operations(&ops[1], &ops);
    let ids: Vec<&str> = similar.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["a-3"]);

    let groups = group_similar_operations(&ops);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].member_ids, ["a-1", "a-3"]);
}
