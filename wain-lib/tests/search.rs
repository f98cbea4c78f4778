mod common;

use wain_catalog::{ReportKind, SearchMode, ValidationError};
use wain_db::open_memory;
use wain_lib::{SearchStatus, ServiceError, search, submit_report};

use common::{form, settings_in};

#[test]
fn unknown_key_is_clear() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    let outcome = search(&conn, &settings, SearchMode::Plate, "NOPE1").unwrap();
    assert_eq!(outcome.status, SearchStatus::Clear);
    assert!(outcome.hits.is_empty());
}

#[test]
fn lost_report_without_match_is_raised() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    submit_report(&conn, &settings, ReportKind::Lost, &form("A", "KH1234", ""), None).unwrap();

    let outcome = search(&conn, &settings, SearchMode::Plate, "kh-1234").unwrap();
    assert_eq!(outcome.key, "KH1234");
    assert_eq!(outcome.status, SearchStatus::Raised);
    assert!(outcome.hits.is_empty());
}

#[test]
fn sighting_only_is_clear() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    submit_report(&conn, &settings, ReportKind::Sighting, &form("A", "", "CH1"), None).unwrap();

    let outcome = search(&conn, &settings, SearchMode::Chassis, "ch1").unwrap();
    assert_eq!(outcome.status, SearchStatus::Clear);
}

#[test]
fn matched_key_returns_pair_and_mediator() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    submit_report(&conn, &settings, ReportKind::Lost, &form("Lost car", "", "JT123"), None)
        .unwrap();
    submit_report(&conn, &settings, ReportKind::Sighting, &form("Seen car", "", "jt-123"), None)
        .unwrap();

    let outcome = search(&conn, &settings, SearchMode::Chassis, "JT 123").unwrap();
    assert_eq!(outcome.status, SearchStatus::Matched);
    assert_eq!(outcome.hits.len(), 1);

    let hit = &outcome.hits[0];
    assert_eq!(hit.lost.car_name, "Lost car");
    assert_eq!(hit.sighting.car_name, "Seen car");
    assert_eq!(hit.mediator.phone, "+249900000000");
    assert_eq!(hit.mediator.whatsapp, "+249900000001");
}

#[test]
fn match_shared_by_several_reports_is_listed_once() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    submit_report(&conn, &settings, ReportKind::Lost, &form("A", "DUP1", ""), None).unwrap();
    submit_report(&conn, &settings, ReportKind::Sighting, &form("A", "DUP1", ""), None).unwrap();

    // Both the lost and the sighting report carry the key; one match links them.
    let outcome = search(&conn, &settings, SearchMode::Plate, "DUP1").unwrap();
    assert_eq!(outcome.hits.len(), 1);
}

#[test]
fn empty_search_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    let err = search(&conn, &settings, SearchMode::Plate, "   ").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::EmptySearch)
    ));
}
