//! Credential holder for the firmware's network initializer.
//!
//! The network identifier (SSID) and secret (passphrase) are baked into the
//! binary at build time and handed out as `&'static str`. There is no setter
//! and no interior mutability, so any number of tasks may read them
//! concurrently without synchronization.
//!
//! ## Example
//!
//! ```rust
//! use as7341_secrets::{credentials, Credentials};
//!
//! let creds = Credentials::from_config("WIFI_NETWORK=MyWifi\nWIFI_PASSWORD=MyPassword123\n");
//! assert_eq!(creds.network_identifier(), "MyWifi");
//! assert_eq!(creds.network_secret(), "MyPassword123");
//!
//! // The pair compiled into this binary
//! let active = credentials();
//! assert_eq!(active, credentials());
//! ```

use core::fmt;

use crate::error::{Result, SecretsError};
use crate::utility::{
    config_value, get_ssid, get_wifi_password, PLACEHOLDER, WIFI_NETWORK_KEY, WIFI_PASSWORD_KEY,
};

/// Longest SSID allowed by IEEE 802.11, in bytes.
pub const MAX_SSID_LEN: usize = 32;

/// Shortest WPA/WPA2 passphrase.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Longest WPA/WPA2 passphrase.
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Length of a raw pre-shared key given as hex digits.
pub const PSK_HEX_LEN: usize = 64;

/// Capacity of [`Credentials::masked_secret`].
pub const MASKED_SECRET_CAPACITY: usize = 64;

/// Immutable network identifier / secret pair.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    network_identifier: &'static str,
    network_secret: &'static str,
}

impl Credentials {
    /// Creates a credential pair from two static strings.
    pub const fn new(network_identifier: &'static str, network_secret: &'static str) -> Self {
        Self {
            network_identifier,
            network_secret,
        }
    }

    /// Reads the pair from a `KEY=value` configuration block.
    ///
    /// Missing keys fall back to [`PLACEHOLDER`]; this never fails.
    pub fn from_config(config: &'static str) -> Self {
        Self::new(
            config_value(config, WIFI_NETWORK_KEY).unwrap_or(PLACEHOLDER),
            config_value(config, WIFI_PASSWORD_KEY).unwrap_or(PLACEHOLDER),
        )
    }

    /// The network identifier (SSID).
    #[inline]
    pub const fn network_identifier(&self) -> &'static str {
        self.network_identifier
    }

    /// The network secret (passphrase).
    #[inline]
    pub const fn network_secret(&self) -> &'static str {
        self.network_secret
    }

    /// Whether either value is still the committed placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.network_identifier == PLACEHOLDER || self.network_secret == PLACEHOLDER
    }

    /// Whether both values were filled in by the maintainer.
    pub fn is_configured(&self) -> bool {
        !self.is_placeholder()
    }

    /// The secret with every character replaced by `*`.
    ///
    /// Output is capped at [`MASKED_SECRET_CAPACITY`] characters.
    pub fn masked_secret(&self) -> heapless::String<MASKED_SECRET_CAPACITY> {
        let mut masked = heapless::String::new();
        for _ in self.network_secret.chars() {
            if masked.push('*').is_err() {
                break;
            }
        }
        masked
    }

    /// Checks that the pair is usable for a WPA/WPA2 join attempt.
    ///
    /// An empty secret is accepted as an open network. Placeholders are
    /// syntactically valid and pass; a join with them fails in the network
    /// layer, not here.
    pub fn validate(&self) -> Result<()> {
        if self.network_identifier.is_empty() {
            return Err(SecretsError::empty_identifier());
        }
        if self.network_identifier.len() > MAX_SSID_LEN {
            return Err(SecretsError::identifier_too_long());
        }

        let secret = self.network_secret;
        if secret.is_empty() {
            return Ok(());
        }
        if secret.len() == PSK_HEX_LEN && secret.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(());
        }
        if !secret.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            return Err(SecretsError::secret_not_printable());
        }
        if secret.len() < MIN_PASSPHRASE_LEN {
            return Err(SecretsError::secret_too_short());
        }
        if secret.len() > MAX_PASSPHRASE_LEN {
            return Err(SecretsError::secret_too_long());
        }
        Ok(())
    }

    /// Logs the identifier and secret length, never the secret itself.
    pub fn log_summary(&self) {
        secrets_log!(
            info,
            "WiFi credentials: network={}, secret={} chars",
            self.network_identifier,
            self.network_secret.chars().count()
        );
        if self.is_placeholder() {
            secrets_log!(
                warn,
                "WiFi credentials are still placeholders; edit src/configuration.rs or set WIFI_SSID/WIFI_PASSWORD"
            );
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("network_identifier", &self.network_identifier)
            .field("network_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Credentials {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "Credentials(network_identifier={=str}, network_secret=<redacted>)",
            self.network_identifier
        );
    }
}

/// The credential pair compiled into this binary.
///
/// Build-time `WIFI_SSID` / `WIFI_PASSWORD` take precedence over
/// [`CONFIG`](crate::configuration::CONFIG). Every call returns the same
/// `&'static str` values.
pub fn credentials() -> Credentials {
    Credentials::new(get_ssid(), get_wifi_password())
}
