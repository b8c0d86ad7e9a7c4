//! Integration tests for the as7341-secrets public API
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test integration_test
//! ```
//!
//! `committed_configuration_holds_only_placeholders` fails on a clone whose
//! `src/configuration.rs` carries real credentials. That is intended: run the
//! suite before pushing to catch secrets about to leave the machine.

use as7341_secrets::configuration::CONFIG;
use as7341_secrets::utility::{config_value, WIFI_NETWORK_KEY, WIFI_PASSWORD_KEY};
use as7341_secrets::{credentials, Credentials, SecretsError, PLACEHOLDER};

#[test]
fn committed_configuration_holds_only_placeholders() {
    assert_eq!(config_value(CONFIG, WIFI_NETWORK_KEY), Some("........"));
    assert_eq!(config_value(CONFIG, WIFI_PASSWORD_KEY), Some("........"));
}

#[test]
fn test_active_credentials_are_defined_text() {
    let creds = credentials();
    // Reading must never panic, whatever the values are
    let _ = creds.network_identifier().len();
    let _ = creds.network_secret().len();
    let _ = format!("{creds:?}");
}

#[test]
fn test_active_credentials_without_build_overrides() {
    if option_env!("WIFI_SSID").is_some() || option_env!("WIFI_PASSWORD").is_some() {
        return;
    }
    let creds = credentials();
    assert_eq!(creds, Credentials::from_config(CONFIG));
}

#[test]
fn test_reads_are_idempotent() {
    let a = credentials();
    let b = credentials();
    assert_eq!(a.network_identifier(), b.network_identifier());
    assert_eq!(a.network_secret(), b.network_secret());
}

#[test]
fn test_placeholder_pair() {
    let creds = Credentials::from_config("WIFI_NETWORK=........\nWIFI_PASSWORD=........\n");
    assert_eq!(creds.network_identifier(), PLACEHOLDER);
    assert_eq!(creds.network_secret(), PLACEHOLDER);
    assert!(creds.is_placeholder());
    assert!(creds.validate().is_ok());
    assert_eq!(creds.masked_secret().as_str(), "********");
}

#[test]
fn test_maintainer_edit() {
    let creds = Credentials::from_config("WIFI_NETWORK=MyWifi\nWIFI_PASSWORD=MyPassword123\n");
    assert_eq!(creds.network_identifier(), "MyWifi");
    assert_eq!(creds.network_secret(), "MyPassword123");
    assert!(creds.is_configured());
    assert!(creds.validate().is_ok());
}

#[test]
fn test_open_network() {
    let creds = Credentials::from_config("WIFI_NETWORK=Cafe\nWIFI_PASSWORD=\n");
    assert_eq!(creds.network_secret(), "");
    assert!(creds.is_configured());
    assert!(creds.validate().is_ok());
}

#[test]
fn test_validation_error_surface() {
    let err = Credentials::new("Lab", "1234").validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Credential error: passphrase is shorter than 8 characters"
    );
    let SecretsError::Credential(inner) = err;
    assert!(inner.is_secret_too_short());
}

#[test]
fn test_debug_never_shows_secret() {
    let creds = Credentials::new("MyWifi", "MyPassword123");
    let rendered = format!("{creds:?}");
    assert_eq!(
        rendered,
        r#"Credentials { network_identifier: "MyWifi", network_secret: "<redacted>" }"#
    );
}
