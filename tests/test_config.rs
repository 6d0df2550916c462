use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use fileserve::config::{Config, DEFAULT_PORT};
use fileserve::error::ConfigError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.root_directory, PathBuf::from("."));
    assert_eq!(cfg.listen_addr(), "0.0.0.0:50505");
}

#[test]
fn test_config_from_env_vars() {
    let cfg = Config::from_lookup(lookup(&[
        ("FILESERVE_HOST", "127.0.0.1"),
        ("FILESERVE_PORT", "8080"),
        ("FILESERVE_ROOT", "/srv/www"),
    ]))
    .unwrap();

    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.root_directory, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_rejects_privileged_port() {
    let err = Config::from_lookup(lookup(&[("FILESERVE_PORT", "80")])).unwrap_err();
    assert!(matches!(err, ConfigError::PortOutOfRange(80)));
}

#[test]
fn test_config_rejects_unparsable_port() {
    let err = Config::from_lookup(lookup(&[("FILESERVE_PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));

    let err = Config::from_lookup(lookup(&[("FILESERVE_PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn test_config_port_bounds() {
    assert!(Config::new("127.0.0.1", 1024, ".").is_err());
    assert!(Config::new("127.0.0.1", 1025, ".").is_ok());
    assert!(Config::new("127.0.0.1", 65535, ".").is_ok());
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str("port: 9000\nroot_directory: /tmp/site\n").unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.root_directory, PathBuf::from("/tmp/site"));
}

#[test]
fn test_config_yaml_validates_port() {
    let err = Config::from_yaml_str("port: 22\n").unwrap_err();
    assert!(matches!(err, ConfigError::PortOutOfRange(22)));
}

#[test]
fn test_config_malformed_yaml() {
    let err = Config::from_yaml_str("port: [not, a, port]\n").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_config_file_with_env_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "host: 127.0.0.1\nport: 9001\nroot_directory: /var/www").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let cfg = Config::from_lookup(lookup(&[
        ("FILESERVE_CONFIG", path.as_str()),
        ("FILESERVE_PORT", "9002"),
    ]))
    .unwrap();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9002);
    assert_eq!(cfg.root_directory, PathBuf::from("/var/www"));
}

#[test]
fn test_config_missing_file() {
    let err = Config::from_lookup(lookup(&[("FILESERVE_CONFIG", "/nonexistent/fileserve.yaml")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::new("127.0.0.1", 8000, "/srv").unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}
