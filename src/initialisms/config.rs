use std::path::PathBuf;

use serde::Deserialize;

use super::table::COMMON_INITIALISMS;
use crate::Converter;

/// Initialism set as read from TOML.
///
/// ```toml
/// extend_default = true
/// initialisms = ["IMDB", "GRPC"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialismConfig {
    /// Start from the built-in list instead of an empty set.
    #[serde(default = "default_extend")]
    pub extend_default: bool,
    #[serde(default)]
    pub initialisms: Vec<String>,
}

fn default_extend() -> bool {
    true
}

impl Default for InitialismConfig {
    fn default() -> Self {
        Self {
            extend_default: true,
            initialisms: Vec::new(),
        }
    }
}

impl InitialismConfig {
    pub fn into_converter(self) -> Converter {
        let mut converter = if self.extend_default {
            Converter::new_default()
        } else {
            Converter::default()
        };
        converter.add(self.initialisms);
        converter
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("initialism #{0} is empty")]
    EmptyEntry(usize),
    #[error("invalid initialism {0:?}: must not contain '_' or whitespace")]
    InvalidEntry(String),
    #[error("initialisms list is empty and extend_default is false")]
    Empty,
    #[error("default converter already initialized")]
    AlreadyInitialized,
}

/// Parse and validate an initialism config.
pub fn parse_initialisms_toml(toml_str: &str) -> Result<InitialismConfig, ConfigError> {
    let config: InitialismConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if !config.extend_default && config.initialisms.is_empty() {
        return Err(ConfigError::Empty);
    }

    for (i, entry) in config.initialisms.iter().enumerate() {
        if entry.is_empty() {
            return Err(ConfigError::EmptyEntry(i));
        }
        if entry.chars().any(|c| c == '_' || c.is_whitespace()) {
            return Err(ConfigError::InvalidEntry(entry.clone()));
        }
    }

    Ok(config)
}

/// The built-in list rendered as a standalone config.
pub fn default_toml() -> String {
    let mut out = String::from(
        "# Built-in initialisms. Set extend_default = true and list only\n\
         # additions to keep these and add your own.\n\
         extend_default = false\n\
         initialisms = [\n",
    );
    for initialism in COMMON_INITIALISMS {
        out.push_str(&format!("    \"{initialism}\",\n"));
    }
    out.push_str("]\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
initialisms = ["IMDB", "GRPC"]
"#;
        let config = parse_initialisms_toml(toml).unwrap();
        assert!(config.extend_default);
        assert_eq!(config.initialisms, vec!["IMDB", "GRPC"]);
    }

    #[test]
    fn parse_empty_document_extends_default() {
        let config = parse_initialisms_toml("").unwrap();
        assert_eq!(config, InitialismConfig::default());
        let converter = config.into_converter();
        assert_eq!(converter.initialisms().len(), COMMON_INITIALISMS.len());
    }

    #[test]
    fn parse_default_toml() {
        let config = parse_initialisms_toml(&default_toml()).unwrap();
        assert!(!config.extend_default);
        assert_eq!(config.initialisms, COMMON_INITIALISMS);
    }

    #[test]
    fn replace_default() {
        let toml = r#"
extend_default = false
initialisms = ["ID", "IMDB"]
"#;
        let converter = parse_initialisms_toml(toml).unwrap().into_converter();
        assert_eq!(converter.initialisms().len(), 2);
        assert_eq!(converter.camel_to_snake("IMDBID"), "imdb_id");
        assert_eq!(converter.camel_to_snake("HTTPSID"), "h_t_t_p_s_id");
    }

    #[test]
    fn extend_default() {
        let converter = parse_initialisms_toml(r#"initialisms = ["IMDB"]"#)
            .unwrap()
            .into_converter();
        assert_eq!(converter.camel_to_snake("IMDBHTTPSID"), "imdb_https_id");
    }

    #[test]
    fn error_empty_list_without_default() {
        let err = parse_initialisms_toml("extend_default = false\n").unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn error_empty_entry() {
        let err = parse_initialisms_toml(r#"initialisms = ["ID", ""]"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyEntry(1)));
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn error_invalid_entry() {
        let err = parse_initialisms_toml(r#"initialisms = ["MY_ID"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry(ref s) if s == "MY_ID"));
        let err = parse_initialisms_toml(r#"initialisms = ["A B"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry(_)));
    }

    #[test]
    fn error_unknown_field() {
        let err = parse_initialisms_toml("acronyms = [\"ID\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_initialisms_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
