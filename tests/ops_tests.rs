use gift_exchange::db::*;
use gift_exchange::error::GiftError;
use gift_exchange::model::*;
use gift_exchange::ops::*;
use gift_exchange::queries::*;
use gift_exchange::validation::MAX_TEXT_LEN;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn setup() -> (rusqlite::Connection, Group) {
    let conn = schema::test_connection();
    let group = group_ops::create_group(&conn, "Office Party", Some("Friday")).unwrap();
    (conn, group)
}

// ==========================================================================
// GROUP OPS TESTS
// ==========================================================================

#[test]
fn create_group_trims_fields() {
    let conn = schema::test_connection();
    let group = group_ops::create_group(&conn, "  Family  ", Some("  Christmas ")).unwrap();
    assert_eq!(group.name, "Family");
    assert_eq!(group.description, Some("Christmas".into()));
}

#[test]
fn create_group_blank_description_becomes_none() {
    let conn = schema::test_connection();
    let group = group_ops::create_group(&conn, "Family", Some("  ")).unwrap();
    assert_eq!(group.description, None);
}

#[test]
fn create_group_rejects_blank_name() {
    let conn = schema::test_connection();
    let err = group_ops::create_group(&conn, "   ", None).unwrap_err();
    assert!(matches!(err, GiftError::BlankField { .. }));
    assert!(group_queries::list_groups(&conn).unwrap().is_empty());
}

#[test]
fn create_group_rejects_oversized_name() {
    let conn = schema::test_connection();
    let err = group_ops::create_group(&conn, &"x".repeat(MAX_TEXT_LEN + 1), None).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn update_group_replaces_name_and_description() {
    let (conn, group) = setup();
    let updated = group_ops::update_group(&conn, group.id, "Holiday Party", None).unwrap();
    assert_eq!(updated.name, "Holiday Party");
    assert_eq!(updated.description, None);

    let stored = group_queries::get_group(&conn, group.id).unwrap();
    assert_eq!(stored.summary.name, "Holiday Party");
}

#[test]
fn update_missing_group_is_not_found() {
    let conn = schema::test_connection();
    let err = group_ops::update_group(&conn, Id::generate(), "X", None).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_group_returns_it_and_keeps_participants() {
    let (conn, group) = setup();
    let a = group_ops::create_participant_in_group(&conn, group.id, "A", "socks").unwrap();

    let deleted = group_ops::delete_group(&conn, group.id).unwrap();
    assert_eq!(deleted.summary.id, group.id);
    assert_eq!(deleted.participants.len(), 1);

    assert!(group_queries::get_group(&conn, group.id).unwrap_err().is_not_found());
    assert_eq!(group_queries::get_participant(&conn, a.id).unwrap().name, "A");
}

#[test]
fn delete_missing_group_is_not_found() {
    let conn = schema::test_connection();
    assert!(group_ops::delete_group(&conn, Id::generate()).unwrap_err().is_not_found());
}

// ==========================================================================
// MEMBERSHIP OPS TESTS
// ==========================================================================

#[test]
fn create_participant_in_group_adds_membership() {
    let (conn, group) = setup();
    let p = group_ops::create_participant_in_group(&conn, group.id, "Alice", "a scarf").unwrap();

    let members = group_queries::participants_of_group(&conn, group.id).unwrap();
    assert_eq!(members, vec![p]);
}

#[test]
fn create_participant_in_missing_group_writes_nothing() {
    let conn = schema::test_connection();
    let err =
        group_ops::create_participant_in_group(&conn, Id::generate(), "Alice", "a scarf").unwrap_err();
    assert!(err.is_not_found());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM participants", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn create_participant_rejects_blank_wish() {
    let (conn, group) = setup();
    let err = group_ops::create_participant_in_group(&conn, group.id, "Alice", " ").unwrap_err();
    assert!(matches!(err, GiftError::BlankField { ref field } if field == "wish"));
}

#[test]
fn add_existing_participant_to_group() {
    let (conn, group) = setup();
    let p = participant_ops::create_participant(&conn, "Bob", "vinyl").unwrap();
    group_ops::add_participant(&conn, group.id, p.id).unwrap();

    let detail = group_queries::get_group(&conn, group.id).unwrap();
    assert_eq!(detail.participants.len(), 1);
    assert_eq!(detail.participants[0].id, p.id);
}

#[test]
fn add_participant_checks_both_ids() {
    let (conn, group) = setup();
    let p = participant_ops::create_participant(&conn, "Bob", "vinyl").unwrap();

    let err = group_ops::add_participant(&conn, Id::generate(), p.id).unwrap_err();
    assert!(matches!(err, GiftError::NotFound { ref entity_type, .. } if entity_type == "Group"));

    let err = group_ops::add_participant(&conn, group.id, Id::generate()).unwrap_err();
    assert!(matches!(err, GiftError::NotFound { ref entity_type, .. } if entity_type == "Participant"));
}

#[test]
fn remove_participant_deletes_it_entirely() {
    let (conn, group) = setup();
    let p = group_ops::create_participant_in_group(&conn, group.id, "Alice", "a scarf").unwrap();

    let removed = group_ops::remove_participant(&conn, group.id, p.id).unwrap();
    assert_eq!(removed.id, p.id);

    assert!(group_queries::participants_of_group(&conn, group.id).unwrap().is_empty());
    assert!(group_queries::get_participant(&conn, p.id).unwrap_err().is_not_found());
}

#[test]
fn remove_participant_from_other_group_is_rejected() {
    let (conn, group) = setup();
    let other = group_ops::create_group(&conn, "Family", None).unwrap();
    let p = group_ops::create_participant_in_group(&conn, other.id, "Alice", "a scarf").unwrap();

    let err = group_ops::remove_participant(&conn, group.id, p.id).unwrap_err();
    assert!(matches!(err, GiftError::NotAMember { .. }));
    assert!(group_queries::get_participant(&conn, p.id).is_ok());
}

#[test]
fn remove_participant_missing_ids() {
    let (conn, group) = setup();
    assert!(group_ops::remove_participant(&conn, group.id, Id::generate())
        .unwrap_err()
        .is_not_found());
    assert!(group_ops::remove_participant(&conn, Id::generate(), Id::generate())
        .unwrap_err()
        .is_not_found());
}

// ==========================================================================
// PARTICIPANT OPS TESTS
// ==========================================================================

#[test]
fn create_participant_without_group() {
    let conn = schema::test_connection();
    let p = participant_ops::create_participant(&conn, "  Carol ", " books ").unwrap();
    assert_eq!(p.name, "Carol");
    assert_eq!(p.wish, "books");
    assert_eq!(p.recipient_id, None);
}

#[test]
fn create_participant_rejects_oversized_wish() {
    let conn = schema::test_connection();
    let err = participant_ops::create_participant(&conn, "Carol", &"w".repeat(MAX_TEXT_LEN + 1))
        .unwrap_err();
    assert!(matches!(err, GiftError::TooLong { ref field, .. } if field == "wish"));
}

#[test]
fn update_participant_wish_only() {
    let conn = schema::test_connection();
    let p = participant_ops::create_participant(&conn, "Carol", "books").unwrap();
    let updated = participant_ops::update_participant(&conn, p.id, None, Some("tea")).unwrap();
    assert_eq!(updated.name, "Carol");
    assert_eq!(updated.wish, "tea");
}

#[test]
fn update_participant_after_toss_keeps_every_recipient() {
    let (conn, group) = setup();
    for (name, wish) in [("A", "x"), ("B", "y"), ("C", "z"), ("D", "w")] {
        group_ops::create_participant_in_group(&conn, group.id, name, wish).unwrap();
    }
    let assignments = toss_ops::toss(&conn, group.id, &mut StdRng::seed_from_u64(6)).unwrap();

    for a in &assignments {
        let updated =
            participant_ops::update_participant(&conn, a.participant.id, Some("Renamed"), Some("new wish"))
                .unwrap();
        assert_eq!(updated.recipient_id, Some(a.recipient.id));
    }

    for a in &assignments {
        let stored = group_queries::get_participant(&conn, a.participant.id).unwrap();
        assert_eq!(stored.wish, "new wish");
        assert_eq!(stored.recipient_id, Some(a.recipient.id));
    }
}

#[test]
fn update_participant_rejects_blank_name() {
    let conn = schema::test_connection();
    let p = participant_ops::create_participant(&conn, "Carol", "books").unwrap();
    assert!(participant_ops::update_participant(&conn, p.id, Some(""), None).is_err());
    assert_eq!(group_queries::get_participant(&conn, p.id).unwrap().name, "Carol");
}

#[test]
fn delete_participant_clears_incoming_links_in_every_group() {
    let (conn, group) = setup();
    let other = group_ops::create_group(&conn, "Family", None).unwrap();
    let a = group_ops::create_participant_in_group(&conn, group.id, "A", "x").unwrap();
    let b = group_ops::create_participant_in_group(&conn, group.id, "B", "y").unwrap();
    group_ops::add_participant(&conn, other.id, b.id).unwrap();
    participant_repo::set_recipient(&conn, a.id, Some(b.id)).unwrap();

    participant_ops::delete_participant(&conn, b.id).unwrap();

    assert_eq!(group_queries::get_participant(&conn, a.id).unwrap().recipient_id, None);
    assert!(group_queries::participants_of_group(&conn, other.id).unwrap().is_empty());
}

#[test]
fn delete_missing_participant_is_not_found() {
    let conn = schema::test_connection();
    assert!(participant_ops::delete_participant(&conn, Id::generate())
        .unwrap_err()
        .is_not_found());
}
