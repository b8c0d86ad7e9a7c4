#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # as7341-secrets
//!
//! Build-time Wi-Fi credentials for the ESP32 AS7341 spectral sensor firmware.
//!
//! This crate is `no_std` and allocation free. It exposes one immutable
//! [`Credentials`] pair that the network initializer reads at startup.
//!
//! ## Example
//!
//! ```rust
//! use as7341_secrets::credentials;
//!
//! let creds = credentials();
//! creds.log_summary();
//! if creds.is_placeholder() {
//!     // joining will fail in the network layer; nothing breaks here
//! }
//! ```

// Macro modules (must be declared before use)
#[macro_use]
pub mod logging;

pub mod configuration;
pub mod credentials;
pub mod error;
pub mod utility;

// Re-export commonly used types
#[doc(inline)]
pub use credentials::{credentials, Credentials};
#[doc(inline)]
pub use error::{Result, SecretsError};
#[doc(inline)]
pub use utility::PLACEHOLDER;
