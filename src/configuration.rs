//! Wi-Fi credentials for the spectral sensor firmware.
//!
//! Fill in your network name and password below, one `KEY=value` per line.
//! The repository only ever carries the `........` placeholders. After cloning,
//! tell git to stop tracking your local edits before you touch this file:
//!
//! ```text
//! git update-index --skip-worktree src/configuration.rs
//! ```
//!
//! Alternatively leave this file alone and set `WIFI_SSID` / `WIFI_PASSWORD`
//! in the environment when building; those take precedence.

pub const CONFIG: &str = r#"
WIFI_NETWORK=........
WIFI_PASSWORD=........
"#;
