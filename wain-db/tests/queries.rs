use rusqlite::Connection;
use wain_catalog::types::*;
use wain_db::*;

fn report(kind: ReportKind, plate: Option<&str>, chassis: Option<&str>) -> NewReport {
    NewReport {
        report_type: kind,
        car_name: "Hyundai Accent".to_string(),
        model: None,
        color: None,
        chassis: chassis.map(str::to_string),
        plate: plate.map(str::to_string),
        location: None,
        phone: "0912000000".to_string(),
        image_path: None,
        notes: None,
    }
}

fn insert(conn: &Connection, kind: ReportKind, plate: Option<&str>, chassis: Option<&str>) -> Report {
    insert_report(conn, &report(kind, plate, chassis)).unwrap()
}

#[test]
fn active_lookup_filters_kind_activity_and_key() {
    let conn = open_memory().unwrap();
    let lost = insert(&conn, ReportKind::Lost, Some("P1"), Some("C1"));
    let inactive = insert(&conn, ReportKind::Lost, Some("P1"), None);
    set_report_active(&conn, inactive.id, false).unwrap();
    insert(&conn, ReportKind::Sighting, Some("P1"), None);
    insert(&conn, ReportKind::Lost, Some("P2"), None);

    let by_plate = active_reports_by_key(&conn, ReportKind::Lost, MatchRule::Plate, "P1").unwrap();
    assert_eq!(by_plate, vec![lost.clone()]);

    let by_chassis =
        active_reports_by_key(&conn, ReportKind::Lost, MatchRule::Chassis, "C1").unwrap();
    assert_eq!(by_chassis, vec![lost]);

    let none = active_reports_by_key(&conn, ReportKind::Lost, MatchRule::Chassis, "P1").unwrap();
    assert!(none.is_empty());
}

#[test]
fn key_lookup_is_exact() {
    let conn = open_memory().unwrap();
    insert(&conn, ReportKind::Lost, Some("kh 1"), None);
    assert!(reports_by_key(&conn, MatchRule::Plate, "KH1").unwrap().is_empty());
    assert_eq!(reports_by_key(&conn, MatchRule::Plate, "kh 1").unwrap().len(), 1);
}

#[test]
fn reports_by_key_includes_all_kinds_and_inactive() {
    let conn = open_memory().unwrap();
    let a = insert(&conn, ReportKind::Lost, Some("P1"), None);
    insert(&conn, ReportKind::Sighting, Some("P1"), None);
    set_report_active(&conn, a.id, false).unwrap();
    assert_eq!(reports_by_key(&conn, MatchRule::Plate, "P1").unwrap().len(), 2);
}

#[test]
fn recent_reports_newest_first_with_limit() {
    let conn = open_memory().unwrap();
    let ids: Vec<i64> = (0..5)
        .map(|i| insert(&conn, ReportKind::Lost, Some(format!("P{}", i).as_str()), None).id)
        .collect();

    let recent = recent_reports(&conn, 3).unwrap();
    let recent_ids: Vec<i64> = recent.iter().map(|r| r.id).collect();
    assert_eq!(recent_ids, vec![ids[4], ids[3], ids[2]]);
}

#[test]
fn match_listings_by_side() {
    let conn = open_memory().unwrap();
    let lost = insert(&conn, ReportKind::Lost, Some("P1"), Some("C1"));
    let sighting = insert(&conn, ReportKind::Sighting, Some("P1"), Some("C1"));
    insert_match(&conn, lost.id, sighting.id, MatchRule::Plate).unwrap();
    insert_match(&conn, lost.id, sighting.id, MatchRule::Chassis).unwrap();

    assert_eq!(matches_for_lost(&conn, lost.id).unwrap().len(), 2);
    assert_eq!(matches_for_sighting(&conn, sighting.id).unwrap().len(), 2);
    assert!(matches_for_lost(&conn, sighting.id).unwrap().is_empty());
}

#[test]
fn recent_match_pairs_join_both_reports() {
    let conn = open_memory().unwrap();
    let lost = insert(&conn, ReportKind::Lost, Some("P1"), None);
    let sighting = insert(&conn, ReportKind::Sighting, Some("P1"), None);
    insert_match(&conn, lost.id, sighting.id, MatchRule::Plate).unwrap();

    let pairs = recent_match_pairs(&conn, 50).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].lost, lost);
    assert_eq!(pairs[0].sighting, sighting);
    assert_eq!(pairs[0].record.rule, MatchRule::Plate);
}

#[test]
fn stats_count_active_reports_and_all_matches() {
    let conn = open_memory().unwrap();
    let lost = insert(&conn, ReportKind::Lost, Some("P1"), None);
    let sighting = insert(&conn, ReportKind::Sighting, Some("P1"), None);
    let gone = insert(&conn, ReportKind::Sighting, Some("P9"), None);
    set_report_active(&conn, gone.id, false).unwrap();
    insert_match(&conn, lost.id, sighting.id, MatchRule::Plate).unwrap();

    let stats = report_stats(&conn).unwrap();
    assert_eq!(
        stats,
        ReportStats {
            lost_reports: 1,
            sighting_reports: 1,
            total_reports: 2,
            matches_found: 1,
        }
    );
}
