use std::collections::HashMap;
use std::path::{Path, PathBuf};

use wain_lib::settings::{
    ENV_ADMIN_PASSWORD, ENV_DATABASE, ENV_MEDIATOR_PHONE, ENV_MEDIATOR_WHATSAPP, FileSettings,
    parse_config, sources_from,
};
use wain_lib::{SettingSource, Settings};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |var: &str| map.get(var).cloned()
}

#[test]
fn env_beats_file_beats_default() {
    let file = FileSettings {
        database_path: Some(PathBuf::from("/from/file.db")),
        mediator_phone: Some("111".to_string()),
        ..Default::default()
    };

    let s = Settings::resolve(env_of(&[(ENV_DATABASE, "/from/env.db")]), Some(&file));
    assert_eq!(s.database_path, PathBuf::from("/from/env.db"));
    assert_eq!(s.mediator_phone, "111");
    assert_eq!(s.upload_dir, PathBuf::from("uploads"));

    let s = Settings::resolve(env_of(&[]), Some(&file));
    assert_eq!(s.database_path, PathBuf::from("/from/file.db"));

    let s = Settings::resolve(env_of(&[]), None);
    assert!(s.database_path.ends_with("wain.db"));
}

#[test]
fn empty_env_value_is_ignored() {
    let file = FileSettings {
        admin_password: Some("pw".to_string()),
        ..Default::default()
    };
    let s = Settings::resolve(env_of(&[(ENV_ADMIN_PASSWORD, "")]), Some(&file));
    assert_eq!(s.admin_password.as_deref(), Some("pw"));
}

#[test]
fn whatsapp_defaults_to_phone() {
    let s = Settings::resolve(env_of(&[(ENV_MEDIATOR_PHONE, "+249")]), None);
    assert_eq!(s.mediator().whatsapp, "+249");

    let s = Settings::resolve(
        env_of(&[(ENV_MEDIATOR_PHONE, "+249"), (ENV_MEDIATOR_WHATSAPP, "+1")]),
        None,
    );
    assert_eq!(s.mediator().phone, "+249");
    assert_eq!(s.mediator().whatsapp, "+1");
}

#[test]
fn missing_password_stays_none() {
    let s = Settings::resolve(env_of(&[]), None);
    assert_eq!(s.admin_password, None);
}

#[test]
fn database_override_replaces_resolved_path() {
    let s = Settings::resolve(env_of(&[]), None).with_database_path(Some(PathBuf::from("x.db")));
    assert_eq!(s.database_path, PathBuf::from("x.db"));

    let s = s.with_database_path(None);
    assert_eq!(s.database_path, PathBuf::from("x.db"));
}

#[test]
fn parse_config_reads_wain_table() {
    let content = r#"
[wain]
database_path = "/srv/wain.db"
mediator_phone = "+249123"
"#;
    let file = parse_config(content, Path::new("config.toml")).unwrap().unwrap();
    assert_eq!(file.database_path, Some(PathBuf::from("/srv/wain.db")));
    assert_eq!(file.mediator_phone.as_deref(), Some("+249123"));
    assert_eq!(file.admin_password, None);
}

#[test]
fn parse_config_without_table_is_none() {
    assert!(parse_config("", Path::new("c.toml")).unwrap().is_none());
}

#[test]
fn parse_config_rejects_bad_toml() {
    assert!(parse_config("[wain\n", Path::new("c.toml")).is_err());
}

#[test]
fn sources_report_provenance() {
    let file = FileSettings {
        mediator_phone: Some("1".to_string()),
        ..Default::default()
    };
    let sources = sources_from(env_of(&[(ENV_DATABASE, "/x.db")]), Some(&file));
    assert_eq!(sources.database_path, SettingSource::EnvVar(ENV_DATABASE));
    assert_eq!(sources.mediator_phone, SettingSource::ConfigFile);
    assert_eq!(sources.upload_dir, SettingSource::Default);
    assert_eq!(sources.admin_password, SettingSource::Missing);
}
