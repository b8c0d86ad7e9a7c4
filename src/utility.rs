//! Utility functions for configuration parsing

use crate::configuration::CONFIG;

/// Value committed to shared history in place of a real credential.
pub const PLACEHOLDER: &str = "........";

/// Configuration key holding the network identifier (SSID).
pub const WIFI_NETWORK_KEY: &str = "WIFI_NETWORK";

/// Configuration key holding the network secret (passphrase).
pub const WIFI_PASSWORD_KEY: &str = "WIFI_PASSWORD";

/// Looks up `key` in a `KEY=value` configuration block.
///
/// Leading whitespace on a line is ignored. `lines()` already removes `\r\n`
/// endings; a stray `\r` left at the end of the last line is dropped too.
/// Everything after the first `=` is returned verbatim, so an empty value
/// (e.g. an open network with no password) yields `Some("")`.
///
/// # Returns
/// * `Option<&str>` - the value of the first matching line, `None` if absent
pub fn config_value<'a>(config: &'a str, key: &str) -> Option<&'a str> {
    config.lines().find_map(|line| {
        let line = line.trim_start();
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.strip_prefix(key)?.strip_prefix('=')
    })
}

/// Extracts the WiFi SSID.
///
/// A `WIFI_SSID` variable set at build time overrides the configuration file.
///
/// # Returns
/// * `&str` - WiFi network SSID, [`PLACEHOLDER`] if nothing was configured
pub fn get_ssid() -> &'static str {
    option_env!("WIFI_SSID")
        .or_else(|| config_value(CONFIG, WIFI_NETWORK_KEY))
        .unwrap_or(PLACEHOLDER)
}

/// Extracts the WiFi password.
///
/// A `WIFI_PASSWORD` variable set at build time overrides the configuration file.
///
/// # Returns
/// * `&str` - WiFi network password, [`PLACEHOLDER`] if nothing was configured
pub fn get_wifi_password() -> &'static str {
    option_env!("WIFI_PASSWORD")
        .or_else(|| config_value(CONFIG, WIFI_PASSWORD_KEY))
        .unwrap_or(PLACEHOLDER)
}
