use std::fs;
use std::io::{self, Write};

use snaker::initialisms::{default_toml, parse_initialisms_toml};
use snaker::COMMON_INITIALISMS;

pub fn write_export<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(default_toml().as_bytes())
}

/// Validate config text and write a one-line summary.
///
/// An invalid config surfaces as `InvalidData` carrying the config error.
pub fn write_validation<W: Write>(content: &str, out: &mut W) -> io::Result<()> {
    let config = parse_initialisms_toml(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let custom = config.initialisms.len();
    let base = if config.extend_default {
        COMMON_INITIALISMS.len()
    } else {
        0
    };
    let total = config.into_converter().initialisms().len();
    writeln!(out, "OK: {total} initialisms ({base} built-in, {custom} listed)")
}

pub fn initialisms_export() {
    die!(write_export(&mut io::stdout().lock()), "Error: {}");
}

pub fn initialisms_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        write_validation(&content, &mut io::stdout().lock()),
        "Error: {}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(content: &str) -> io::Result<String> {
        let mut out = Vec::new();
        write_validation(content, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn export_round_trips() {
        let mut out = Vec::new();
        write_export(&mut out).unwrap();
        let exported = String::from_utf8(out).unwrap();
        let config = parse_initialisms_toml(&exported).unwrap();
        assert!(!config.extend_default);
        assert_eq!(config.initialisms, COMMON_INITIALISMS);
        assert_eq!(
            validate(&exported).unwrap(),
            "OK: 39 initialisms (0 built-in, 39 listed)\n"
        );
    }

    #[test]
    fn validate_extending_config() {
        // "ID" is already built in, so only "IMDB" adds to the total.
        let summary = validate(r#"initialisms = ["IMDB", "ID"]"#).unwrap();
        assert_eq!(summary, "OK: 40 initialisms (39 built-in, 2 listed)\n");
    }

    #[test]
    fn validate_replacing_config() {
        let summary = validate("extend_default = false\ninitialisms = [\"ID\", \"IMDB\"]\n").unwrap();
        assert_eq!(summary, "OK: 2 initialisms (0 built-in, 2 listed)\n");
    }

    #[test]
    fn validate_rejects_invalid_entry() {
        let err = validate(r#"initialisms = ["MY_ID"]"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("MY_ID"));
    }
}
