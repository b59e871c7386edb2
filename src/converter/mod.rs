//! CamelCase ⇄ snake_case conversion with initialism awareness.
//!
//! A [`Converter`] owns an [`Initialisms`] set. CamelCase input is split on
//! upper-case transitions, keeping registered initialisms ("HTTPS", "ID")
//! together as single words; snake_case input is joined back, writing
//! initialism words fully upper-cased.

mod camel;
mod snake;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use tracing::{debug, debug_span};

use crate::initialisms::{parse_initialisms_toml, ConfigError, Initialisms, COMMON_INITIALISMS};

/// Case converter configured with a set of initialisms.
///
/// Build it once, extend it with [`add`](Self::add) during setup, then share
/// it read-only: conversions take `&self` and the type is `Send + Sync`.
/// `Default` yields a converter with no initialisms.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    initialisms: Initialisms,
}

impl Converter {
    /// Converter seeded with exactly `initialisms`.
    pub fn new<I, S>(initialisms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut converter = Self::default();
        converter.add(initialisms);
        converter
    }

    /// Converter seeded with [`COMMON_INITIALISMS`].
    pub fn new_default() -> Self {
        Self::new(COMMON_INITIALISMS)
    }

    /// Build a converter from TOML config text (see [`parse_initialisms_toml`]).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(parse_initialisms_toml(toml_str)?.into_converter())
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Register more initialisms. Tokens are upper-cased; re-adding one is a no-op.
    pub fn add<I, S>(&mut self, initialisms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.initialisms.len();
        self.initialisms.extend(initialisms);
        debug!(
            added = self.initialisms.len() - before,
            total = self.initialisms.len(),
            min_len = self.initialisms.min_len(),
            max_len = self.initialisms.max_len(),
            "initialisms extended"
        );
        self
    }

    pub fn initialisms(&self) -> &Initialisms {
        &self.initialisms
    }

    /// `"HTTPSConnectionID"` → `"https_connection_id"`.
    pub fn camel_to_snake(&self, s: &str) -> String {
        let _span = debug_span!("camel_to_snake", len = s.len()).entered();
        camel::camel_to_snake(&self.initialisms, s)
    }

    /// `"this_is_an_id"` → `"ThisIsAnID"`.
    pub fn snake_to_camel(&self, s: &str) -> String {
        let _span = debug_span!("snake_to_camel", len = s.len()).entered();
        snake::snake_to_camel(&self.initialisms, s, true)
    }

    /// `"this_is_an_id"` → `"thisIsAnID"`. The first word is kept as given.
    pub fn snake_to_camel_lower(&self, s: &str) -> String {
        let _span = debug_span!("snake_to_camel_lower", len = s.len()).entered();
        snake::snake_to_camel(&self.initialisms, s, false)
    }
}
