//! Convert identifiers between CamelCase and snake_case, keeping initialisms
//! such as "ID" or "HTTPS" intact.
//!
//! ```
//! assert_eq!(snaker::camel_to_snake("HTTPSConnectionID"), "https_connection_id");
//! assert_eq!(snaker::snake_to_camel("this_is_an_id"), "ThisIsAnID");
//! assert_eq!(snaker::snake_to_camel_lower("id_me_please"), "idMePlease");
//!
//! let converter = snaker::Converter::new(["ID", "IMDB"]);
//! assert_eq!(converter.camel_to_snake("IMDBID"), "imdb_id");
//! assert_eq!(converter.snake_to_camel("imdb_name"), "IMDBName");
//! ```

pub mod converter;
pub mod global;
pub mod initialisms;
pub mod unicode;

pub use converter::Converter;
pub use global::{default_converter, init_custom};
pub use initialisms::{ConfigError, InitialismConfig, Initialisms, COMMON_INITIALISMS};

/// [`Converter::camel_to_snake`] on the default converter.
pub fn camel_to_snake(s: &str) -> String {
    default_converter().camel_to_snake(s)
}

/// [`Converter::snake_to_camel`] on the default converter.
pub fn snake_to_camel(s: &str) -> String {
    default_converter().snake_to_camel(s)
}

/// [`Converter::snake_to_camel_lower`] on the default converter.
pub fn snake_to_camel_lower(s: &str) -> String {
    default_converter().snake_to_camel_lower(s)
}
