//! Process-wide default converter.
//!
//! - `init_custom(toml_content)` installs a converter built from a custom
//!   initialism config, before the first `default_converter()` call
//! - `default_converter()` returns `&'static Converter` (lazy-init singleton)
//! - Without a custom config the default holds [`COMMON_INITIALISMS`]
//!
//! [`COMMON_INITIALISMS`]: crate::COMMON_INITIALISMS

use std::sync::OnceLock;

use tracing::debug;

use crate::initialisms::{parse_initialisms_toml, ConfigError};
use crate::Converter;

static INSTANCE: OnceLock<Converter> = OnceLock::new();

/// Install a custom default converter before first `default_converter()` call.
///
/// The converter is built first and installed in a single `set`, so a call
/// that loses to `default_converter()` or to another `init_custom` on a
/// different thread fails with `AlreadyInitialized`.
pub fn init_custom(toml_content: String) -> Result<(), ConfigError> {
    let config = parse_initialisms_toml(&toml_content)?;
    debug!(
        extend_default = config.extend_default,
        custom = config.initialisms.len(),
        "installing custom default converter"
    );
    INSTANCE
        .set(config.into_converter())
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Get or initialize the default converter.
pub fn default_converter() -> &'static Converter {
    INSTANCE.get_or_init(Converter::new_default)
}
