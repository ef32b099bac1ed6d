//! Shared fixtures for endpoint configuration tests.

use query_endpoints::{FileSdConfig, TlsConfiguration};

/// Owned address list from string literals.
pub fn addrs(list: &[&str]) -> Vec<String> {
    list.iter().map(|addr| addr.to_string()).collect()
}

/// TLS settings used for the flag-synthesized groups.
pub fn client_tls() -> TlsConfiguration {
    TlsConfiguration {
        cert_file: Some("/etc/thanos/client.pem".into()),
        key_file: Some("/etc/thanos/client-key.pem".into()),
        ca_file: Some("/etc/thanos/ca.pem".into()),
        server_name: None,
    }
}

/// A single-file discovery reference.
pub fn file_sd(path: &str) -> FileSdConfig {
    FileSdConfig::new(vec![path.to_string()])
}

/// Two regional groups, one default and one strict, with TLS on the first.
pub const TWO_GROUPS: &str = r#"
- name: eu
  tls_config:
    cert_file: /certs/eu.pem
    key_file: /certs/eu-key.pem
    ca_file: /certs/ca.pem
    server_name: store.eu.internal
  endpoints:
    - store-eu-0:10901
    - store-eu-1:10901
  endpoints_sd_files:
    - files:
        - /etc/sd/eu-*.yml
      refresh_interval: 1m
- name: us
  endpoints:
    - store-us-0:10901
  mode: strict
"#;
