use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("SITE_DIR", "dist")]))
        .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_dir, PathBuf::from("dist"));
}

#[test]
fn blank_values_use_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn invalid_bind_addr_is_an_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).is_err());
}
