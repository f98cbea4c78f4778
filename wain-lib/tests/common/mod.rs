#![allow(dead_code)]

use std::path::Path;

use wain_catalog::{ReportKind, SubmissionForm};
use wain_lib::Settings;

/// Settings pointing every path into `dir`, with a known admin secret.
pub fn settings_in(dir: &Path) -> Settings {
    Settings {
        database_path: dir.join("wain.db"),
        upload_dir: dir.join("uploads"),
        admin_password: Some("open-sesame".to_string()),
        mediator_phone: "+249900000000".to_string(),
        mediator_whatsapp: "+249900000001".to_string(),
        sheet_path: dir.join("sheet.csv"),
    }
}

pub fn form(car_name: &str, plate: &str, chassis: &str) -> SubmissionForm {
    SubmissionForm {
        car_name: car_name.to_string(),
        phone: "+249911111111".to_string(),
        plate: plate.to_string(),
        chassis: chassis.to_string(),
        ..Default::default()
    }
}

pub fn kinds() -> [ReportKind; 2] {
    [ReportKind::Lost, ReportKind::Sighting]
}
