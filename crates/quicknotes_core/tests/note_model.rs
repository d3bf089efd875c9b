use quicknotes_core::Note;
use uuid::Uuid;

#[test]
fn empty_sequence_round_trips() {
    let notes: Vec<Note> = Vec::new();
    let payload = serde_json::to_string(&notes).unwrap();
    let decoded: Vec<Note> = serde_json::from_str(&payload).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn sequence_round_trips_losslessly() {
    let notes = vec![
        Note::with_parts(Uuid::new_v4(), "first", 1_700_000_000_000),
        Note::with_parts(Uuid::new_v4(), "", 1_700_000_000_001),
        Note::with_parts(Uuid::new_v4(), "third, with ünïcode", 1_700_000_000_002),
    ];

    let payload = serde_json::to_string(&notes).unwrap();
    let decoded: Vec<Note> = serde_json::from_str(&payload).unwrap();

    assert_eq!(decoded, notes);
}

#[test]
fn decodes_the_persisted_field_layout() {
    let payload = r#"[
        {"id": "9f1c6fc4-2ab3-4c38-9d9e-0a4f0cafe001", "text": "Buy milk", "date": 1700000000000}
    ]"#;

    let decoded: Vec<Note> = serde_json::from_str(payload).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_eq!(
        decoded[0].id.to_string(),
        "9f1c6fc4-2ab3-4c38-9d9e-0a4f0cafe001"
    );
    assert_eq!(decoded[0].text, "Buy milk");
    assert_eq!(decoded[0].created_at_ms, 1_700_000_000_000);
}

#[test]
fn rejects_a_non_uuid_id() {
    let payload = r#"[{"id": "not-a-uuid", "text": "x", "date": 0}]"#;
    assert!(serde_json::from_str::<Vec<Note>>(payload).is_err());
}

#[test]
fn rejects_missing_fields() {
    let payload = r#"[{"text": "no id or date"}]"#;
    assert!(serde_json::from_str::<Vec<Note>>(payload).is_err());
}
