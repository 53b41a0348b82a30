use pharosquiz_types::{PlayerId, QuestionId};
use std::collections::HashSet;
use std::str::FromStr;

// ── PlayerId ──────────────────────────────────────────────────────

#[test]
fn player_id_new_is_unique() {
    let a = PlayerId::new();
    let b = PlayerId::new();
    assert_ne!(a, b);
}

#[test]
fn player_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = PlayerId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn player_id_display_and_parse() {
    let id = PlayerId::new();
    let parsed = PlayerId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn player_id_from_str_invalid() {
    assert!(PlayerId::from_str("garbage").is_err());
}

#[test]
fn player_id_later_sorts_later() {
    let a = PlayerId::new();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let b = PlayerId::new();
    assert!(a < b);
}

#[test]
fn player_id_hash_and_eq() {
    let id = PlayerId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn player_id_serializes_as_plain_string() {
    let id = PlayerId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

#[test]
fn player_id_short_is_random_tail() {
    let id = PlayerId::new();
    let short = id.short();
    assert_eq!(short.len(), 8);
    assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(id.as_uuid().simple().to_string().ends_with(&short));
}

// ── QuestionId ────────────────────────────────────────────────────

#[test]
fn question_id_display_and_from_str() {
    let id = QuestionId::new();
    let parsed = QuestionId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn question_id_default_is_unique() {
    assert_ne!(QuestionId::default(), QuestionId::default());
}
