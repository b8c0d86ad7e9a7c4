//! Unified Logging Macros
//!
//! This module provides a unified logging interface that automatically
//! selects between `log::` and `defmt::` based on the active feature flags.
//!
//! # Usage
//!
//! ```rust,ignore
//! secrets_log!(info, "Credentials loaded");
//! secrets_log!(debug, "Secret is {} characters", n);
//! secrets_log!(warn, "Placeholder credentials in use");
//! ```
//!
//! # Feature Flags
//!
//! - `log` - Uses the `log::` crate
//! - `defmt` - Uses `defmt::` (when `log` is not enabled)
//! - Neither - Arguments are type-checked, nothing is emitted

/// Unified logging macro - automatically selects log:: or defmt:: based on features
///
/// Only plain `{}` placeholders are used so the same call site is valid for
/// both backends.
#[macro_export]
#[cfg(feature = "log")]
macro_rules! secrets_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! secrets_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! secrets_log {
    ($level:ident, $($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
