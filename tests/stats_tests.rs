use luogu_profile::stats::{aggregate, ProblemRecord, ProblemStats, TOTAL_KEY};
use pretty_assertions::assert_eq;

fn record(kind: &str, difficulty: i64) -> ProblemRecord {
    ProblemRecord {
        kind: kind.to_string(),
        difficulty,
    }
}

fn all_total(rows: &std::collections::BTreeMap<String, luogu_profile::stats::CountRow>) -> u64 {
    rows.values().map(|row| row[TOTAL_KEY]).sum()
}

#[test]
fn test_worked_example() {
    let stats = aggregate(&[record("P", 3), record("P", 3), record("CF", 0)]).unwrap();

    assert_eq!(stats.difficulty_type["3"]["P"], 2);
    assert_eq!(stats.difficulty_type["3"]["ALL"], 2);
    assert_eq!(stats.difficulty_type["0"]["CF"], 1);
    assert_eq!(stats.type_difficulty["P"]["ALL"], 2);
    assert_eq!(stats.count, 3);
}

#[test]
fn test_all_totals_match_count_on_both_axes() {
    let records = vec![
        record("P", 0),
        record("P", 7),
        record("B", 1),
        record("CF", 4),
        record("SP", 4),
        record("AT", 4),
        record("UVA", 2),
        record("CF", 4),
    ];

    let stats = aggregate(&records).unwrap();

    assert_eq!(stats.count, records.len() as u64);
    assert_eq!(all_total(&stats.difficulty_type), stats.count);
    assert_eq!(all_total(&stats.type_difficulty), stats.count);
}

#[test]
fn test_matrices_are_transposes_of_each_other() {
    let records = vec![
        record("P", 1),
        record("P", 1),
        record("AT", 1),
        record("UVA", 6),
        record("B", 0),
    ];

    let stats = aggregate(&records).unwrap();

    for (d, row) in &stats.difficulty_type {
        for (t, &count) in row {
            if t == TOTAL_KEY {
                continue;
            }
            assert_eq!(
                count, stats.type_difficulty[t][d],
                "asymmetry at ({}, {})",
                d, t
            );
        }
    }
}

#[test]
fn test_empty_input_yields_zero_matrices() {
    let stats = aggregate(&[]).unwrap();

    assert_eq!(stats.count, 0);
    assert_eq!(all_total(&stats.difficulty_type), 0);
    assert_eq!(all_total(&stats.type_difficulty), 0);
}

#[test]
fn test_order_independence() {
    let forwards = vec![
        record("P", 3),
        record("CF", 0),
        record("AT", 5),
        record("P", 3),
        record("UVA", 7),
    ];
    let mut backwards = forwards.clone();
    backwards.reverse();
    let interleaved = vec![
        record("AT", 5),
        record("P", 3),
        record("UVA", 7),
        record("P", 3),
        record("CF", 0),
    ];

    let a: ProblemStats = aggregate(&forwards).unwrap();
    let b = aggregate(&backwards).unwrap();
    let c = aggregate(&interleaved).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_serialized_shape_matches_site_format() {
    let stats = aggregate(&[record("P", 3)]).unwrap();
    let value = serde_json::to_value(&stats).unwrap();

    // camelCase field names, string bucket keys, ALL column present
    assert_eq!(value["difficultyType"]["3"]["P"], 1);
    assert_eq!(value["difficultyType"]["3"]["ALL"], 1);
    assert_eq!(value["typeDifficulty"]["P"]["3"], 1);
    assert_eq!(value["typeDifficulty"]["P"]["ALL"], 1);
    assert_eq!(value["count"], 1);
    // no ALL row on either axis
    assert!(value["difficultyType"].get("ALL").is_none());
    assert!(value["typeDifficulty"].get("ALL").is_none());
}

#[test]
fn test_record_deserialization_ignores_extra_fields() {
    let records: Vec<ProblemRecord> = serde_json::from_str(
        r#"[{"pid": "P1001", "type": "P", "difficulty": 2, "title": "A+B"}]"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, "P");
    assert_eq!(records[0].difficulty, 2);
}
