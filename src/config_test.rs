use super::*;

use std::collections::HashMap;
use std::net::Ipv4Addr;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_vars(vars(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = HostConfig::from_vars(vars(&[("HOST", "::1")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3000");
}

#[test]
fn bad_port_is_rejected() {
    let err = HostConfig::from_vars(vars(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert_eq!(err.to_string(), "invalid PORT 'http': expected 1-65535");
}

#[test]
fn zero_and_out_of_range_ports_are_rejected() {
    assert!(matches!(HostConfig::from_vars(vars(&[("PORT", "0")])), Err(ConfigError::InvalidPort(_))));
    assert!(matches!(HostConfig::from_vars(vars(&[("PORT", "70000")])), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn hostname_is_rejected() {
    let err = HostConfig::from_vars(vars(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".into()));
}

#[test]
fn from_env_reads_process_environment() {
    // Only this test touches the process environment.
    unsafe {
        std::env::set_var("PORT", "4123");
        std::env::remove_var("HOST");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4123);
    unsafe { std::env::remove_var("PORT") };
}
