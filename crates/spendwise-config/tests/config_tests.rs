use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use spendwise_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(cfg.simulated_date.is_none());
    assert_eq!(cfg.currency_symbol(), "$");
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.currency_symbol(), "€");
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert_eq!(manager.base_dir(), dir.path().join("home").as_path());
}

#[test]
fn simulated_date_overrides_today_until_cleared() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let simulated = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

    manager.set_simulated_date(simulated).expect("set date");
    let loaded = manager.load().expect("load");
    assert_eq!(loaded.current_date(today), simulated);

    let raw = std::fs::read_to_string(manager.config_path()).expect("read config");
    assert!(raw.contains("\"simulated_date\": \"2024-01-20\""), "{raw}");

    manager.clear_simulated_date().expect("clear date");
    assert_eq!(manager.load().expect("load").current_date(today), today);
}

#[test]
fn data_file_resolves_against_the_base_dir() {
    let base = Path::new("/tmp/spendwise-home");
    let mut cfg = Config::default();
    assert_eq!(cfg.resolve_data_file(base), base.join("spendwise.json"));

    cfg.data_file = Some(PathBuf::from("custom/data.json"));
    assert_eq!(cfg.resolve_data_file(base), base.join("custom/data.json"));

    let absolute = std::env::temp_dir().join("elsewhere.json");
    cfg.data_file = Some(absolute.clone());
    assert_eq!(cfg.resolve_data_file(base), absolute);
}

#[test]
fn missing_optional_fields_fall_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en-GB","currency":"GBP"}"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.currency_symbol(), "£");
    assert!(loaded.ui_color_enabled);
    assert!(loaded.data_file.is_none());
}
