use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            upstream: DEFAULT_UPSTREAM.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BLOG_API_UPSTREAM", "https://blog.example.test"),
        ("BLOG_PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream, "https://blog.example.test");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn upstream_trailing_slash_is_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[("BLOG_API_UPSTREAM", "http://127.0.0.1:5002/")])).unwrap();
    assert_eq!(cfg.upstream, "http://127.0.0.1:5002");
}

#[test]
fn port_whitespace_is_tolerated() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BLOG_PROXY_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "BLOG_PROXY_TIMEOUT_SECS", value: "-1".to_owned() });
}

#[test]
fn upstream_without_scheme_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BLOG_API_UPSTREAM", "localhost:5002")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "BLOG_API_UPSTREAM", value: "localhost:5002".to_owned() });
}
