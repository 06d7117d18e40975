use zerospam_domain::config::{DatabaseConfig, SecurityConfig, ServerConfig, TableConfig};
use zerospam_domain::{Config, ConfigError, EmptyResultPolicy};

#[test]
fn test_section_defaults() {
    let server = ServerConfig::default();
    assert_eq!(server.web_port, 8080);
    assert_eq!(server.bind_address, "0.0.0.0");

    let security = SecurityConfig::default();
    assert!(security.nonce_secret.is_empty());
    assert_eq!(security.nonce_lifetime_secs, 86_400);

    let database = DatabaseConfig::default();
    assert_eq!(database.path, "./zerospam.db");
    assert_eq!(database.max_connections, 5);

    let table = TableConfig::default();
    assert_eq!(table.empty_result, EmptyResultPolicy::Skip);
}

#[test]
fn test_empty_result_policy_parses_case_insensitively() {
    assert_eq!("Publish".parse::<EmptyResultPolicy>(), Ok(EmptyResultPolicy::Publish));
    assert_eq!("SKIP".parse::<EmptyResultPolicy>(), Ok(EmptyResultPolicy::Skip));
    assert!("sometimes".parse::<EmptyResultPolicy>().is_err());
    assert_eq!(EmptyResultPolicy::Publish.to_string(), "publish");
}

#[test]
fn test_full_file_round_trips_through_toml() {
    let toml_str = r#"
        [server]
        web_port = 9000
        bind_address = "127.0.0.1"

        [table]
        ip_lookup_url = "https://lookup.example/ip/"
        empty_result = "publish"

        [security]
        nonce_secret = "abc"
        nonce_lifetime_secs = 3600

        [logging]
        level = "debug"

        [database]
        path = "/var/lib/zerospam/zerospam.db"
        max_connections = 2
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.web_port, 9000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.table.ip_lookup_url, "https://lookup.example/ip/");
    assert_eq!(config.table.empty_result, EmptyResultPolicy::Publish);
    assert_eq!(config.security.nonce_lifetime_secs, 3600);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.database.max_connections, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_non_http_lookup_url() {
    let config = Config::from_toml(
        r#"
        [table]
        ip_lookup_url = "javascript:alert(1)"

        [security]
        nonce_secret = "abc"
        "#,
    )
    .unwrap();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_short_nonce_lifetime() {
    let config = Config::from_toml(
        r#"
        [security]
        nonce_secret = "abc"
        nonce_lifetime_secs = 1
        "#,
    )
    .unwrap();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_missing_explicit_path_is_file_read_error() {
    let result = Config::load(
        Some("/nonexistent/zerospam-test.toml"),
        Default::default(),
    );

    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
