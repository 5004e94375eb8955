use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.primary_feed_path, Path::new(DEFAULT_PRIMARY_FEED));
    assert_eq!(
        cfg.supplementary_feed_path,
        Path::new(DEFAULT_SUPPLEMENTARY_FEED)
    );
    assert_eq!(cfg.cosmetics_feed_path, Path::new(DEFAULT_COSMETICS_FEED));
    assert_eq!(cfg.merged_path, Path::new(DEFAULT_MERGED_PATH));
    assert_eq!(cfg.output_dir, Path::new(DEFAULT_OUTPUT_DIR));
}

#[test]
fn build_app_config_reads_path_overrides() {
    let mut map = HashMap::new();
    map.insert("INKCAT_PRIMARY_FEED", "/tmp/in/ld.json");
    map.insert("INKCAT_COSMETICS_FEED", "/tmp/in/cosm.json");
    map.insert("INKCAT_OUTPUT_DIR", "/tmp/out");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.primary_feed_path, Path::new("/tmp/in/ld.json"));
    assert_eq!(cfg.cosmetics_feed_path, Path::new("/tmp/in/cosm.json"));
    assert_eq!(cfg.output_dir, Path::new("/tmp/out"));
    assert_eq!(
        cfg.supplementary_feed_path,
        Path::new(DEFAULT_SUPPLEMENTARY_FEED)
    );
}

#[test]
fn build_app_config_rejects_blank_path() {
    let mut map = HashMap::new();
    map.insert("INKCAT_MERGED_PATH", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "INKCAT_MERGED_PATH"),
        "expected InvalidEnvVar(INKCAT_MERGED_PATH), got: {result:?}"
    );
}

#[test]
fn build_app_config_log_level_override() {
    let mut map = HashMap::new();
    map.insert("INKCAT_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_ignores_unrelated_variables() {
    let mut map = HashMap::new();
    map.insert("INKCAT_ENV", "staging");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.merged_path, Path::new(DEFAULT_MERGED_PATH));
}
