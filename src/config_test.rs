use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_url, DEFAULT_SITE_URL);
}

#[test]
fn explicit_values_override_defaults() {
    let config =
        ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_URL", "https://mara.dev")]))
            .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_url, "https://mara.dev");
    assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn trailing_slash_is_stripped_from_site_url() {
    let config = ServerConfig::from_lookup(lookup(&[("SITE_URL", "https://mara.dev///")])).unwrap();
    assert_eq!(config.site_url, "https://mara.dev");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn blank_site_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SITE_URL", " / ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptySiteUrl);
}

#[test]
fn hostname_is_not_a_bind_addr() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap();
    assert!(matches!(config.bind_addr(), Err(ConfigError::InvalidAddr(_))));
}
