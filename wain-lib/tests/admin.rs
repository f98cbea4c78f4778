mod common;

use wain_catalog::ReportKind;
use wain_db::{find_report, open_memory};
use wain_lib::{
    AdminGuard, DASHBOARD_LIMIT, RequestContext, ServiceError, dashboard, deactivate_report,
    reactivate_report, submit_report,
};

use common::{form, settings_in};

#[test]
fn login_with_correct_password_authorizes() {
    let guard = AdminGuard::from_password(Some("secret"));
    let token = guard.login("secret").unwrap();
    assert!(guard.is_authorized_admin(&RequestContext::with_token(&token)));
}

#[test]
fn wrong_password_gets_no_token() {
    let guard = AdminGuard::from_password(Some("secret"));
    assert!(guard.login("Secret").is_none());
    assert!(guard.login("").is_none());
}

#[test]
fn anonymous_and_forged_requests_are_refused() {
    let guard = AdminGuard::from_password(Some("secret"));
    assert!(!guard.is_authorized_admin(&RequestContext::anonymous()));

    let forged = RequestContext {
        admin_token: Some("secret".to_string()),
    };
    assert!(!guard.is_authorized_admin(&forged));
}

#[test]
fn token_from_other_secret_is_refused() {
    let other = AdminGuard::from_password(Some("other"));
    let token = other.login("other").unwrap();

    let guard = AdminGuard::from_password(Some("secret"));
    assert!(!guard.is_authorized_admin(&RequestContext::with_token(&token)));
}

#[test]
fn altered_token_is_refused() {
    let guard = AdminGuard::from_password(Some("secret"));
    let token = guard.login("secret").unwrap();
    let good = token.as_str().to_string();

    let mut flipped = good.clone();
    let last = if flipped.ends_with('0') { '1' } else { '0' };
    flipped.pop();
    flipped.push(last);

    let truncated = good[..good.len() - 1].to_string();
    let extended = format!("{good}0");
    for bad in [truncated, extended, flipped] {
        let ctx = RequestContext {
            admin_token: Some(bad.clone()),
        };
        assert!(!guard.is_authorized_admin(&ctx), "accepted {bad}");
    }
}

#[test]
fn unconfigured_password_disables_admin() {
    for guard in [AdminGuard::from_password(None), AdminGuard::from_password(Some(""))] {
        assert!(guard.login("").is_none());
        assert!(guard.login("anything").is_none());
    }
}

#[test]
fn unauthorized_dashboard_is_refused() {
    let conn = open_memory().unwrap();
    let guard = AdminGuard::from_password(Some("secret"));
    let err = dashboard(&conn, &guard, &RequestContext::anonymous()).unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

#[test]
fn dashboard_lists_reports_and_matches() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    submit_report(&conn, &settings, ReportKind::Lost, &form("Lost", "Z9", ""), None).unwrap();
    submit_report(&conn, &settings, ReportKind::Sighting, &form("Seen", "Z9", ""), None).unwrap();

    let guard = AdminGuard::new(&settings);
    let token = guard.login("open-sesame").unwrap();
    let view = dashboard(&conn, &guard, &RequestContext::with_token(&token)).unwrap();

    assert_eq!(view.reports.len(), 2);
    assert_eq!(view.reports[0].car_name, "Seen");
    assert_eq!(view.matches.len(), 1);
    assert_eq!(view.matches[0].lost.car_name, "Lost");
    assert_eq!(view.matches[0].sighting.car_name, "Seen");
}

#[test]
fn dashboard_is_capped() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    for i in 0..(DASHBOARD_LIMIT + 5) {
        let plate = format!("CAP{}", i);
        submit_report(&conn, &settings, ReportKind::Lost, &form("Car", &plate, ""), None).unwrap();
    }

    let guard = AdminGuard::new(&settings);
    let token = guard.login("open-sesame").unwrap();
    let view = dashboard(&conn, &guard, &RequestContext::with_token(&token)).unwrap();
    assert_eq!(view.reports.len(), DASHBOARD_LIMIT as usize);
}

#[test]
fn deactivate_and_reactivate_require_admin() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let conn = open_memory().unwrap();

    let outcome =
        submit_report(&conn, &settings, ReportKind::Lost, &form("Car", "R1", ""), None).unwrap();
    let id = outcome.report().unwrap().id;

    let guard = AdminGuard::new(&settings);
    let anon = RequestContext::anonymous();
    assert!(matches!(
        deactivate_report(&conn, &guard, &anon, id),
        Err(ServiceError::Unauthorized)
    ));
    assert!(find_report(&conn, id).unwrap().unwrap().is_active);

    let ctx = RequestContext::with_token(&guard.login("open-sesame").unwrap());
    deactivate_report(&conn, &guard, &ctx, id).unwrap();
    assert!(!find_report(&conn, id).unwrap().unwrap().is_active);

    reactivate_report(&conn, &guard, &ctx, id).unwrap();
    assert!(find_report(&conn, id).unwrap().unwrap().is_active);
}

#[test]
fn deactivating_missing_report_is_not_found() {
    let conn = open_memory().unwrap();
    let guard = AdminGuard::from_password(Some("pw"));
    let ctx = RequestContext::with_token(&guard.login("pw").unwrap());
    let err = deactivate_report(&conn, &guard, &ctx, 999).unwrap_err();
    assert!(matches!(err, ServiceError::Db(_)));
}
