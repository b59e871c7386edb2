use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use snaker::Converter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CamelToSnake,
    SnakeToCamel,
    SnakeToCamelLower,
}

impl Direction {
    pub fn apply(self, converter: &Converter, input: &str) -> String {
        match self {
            Direction::CamelToSnake => converter.camel_to_snake(input),
            Direction::SnakeToCamel => converter.snake_to_camel(input),
            Direction::SnakeToCamelLower => converter.snake_to_camel_lower(input),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    output: &'a str,
}

/// Convert each input and write one result per line, plain or as JSON objects.
/// Surrounding whitespace is trimmed from every input.
pub fn write_conversions<I, W>(
    converter: &Converter,
    direction: Direction,
    inputs: I,
    json: bool,
    out: &mut W,
) -> io::Result<usize>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut count = 0;
    for line in inputs {
        let line = line?;
        let input = line.trim();
        let output = direction.apply(converter, input);
        if json {
            serde_json::to_writer(&mut *out, &Record { input, output: &output })?;
            writeln!(out)?;
        } else {
            writeln!(out, "{output}")?;
        }
        count += 1;
    }
    Ok(count)
}

/// Entry point for the conversion subcommands. Reads stdin when `words` is empty.
pub fn convert_cmd(direction: Direction, words: Vec<String>, config: Option<&str>, json: bool) {
    let converter = match config {
        Some(path) => die!(
            Converter::from_toml_file(Path::new(path)),
            "Error loading initialisms: {}"
        ),
        None => Converter::new_default(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = if words.is_empty() {
        let stdin = io::stdin();
        write_conversions(&converter, direction, stdin.lock().lines(), json, &mut out)
    } else {
        write_conversions(&converter, direction, words.into_iter().map(Ok), json, &mut out)
    };
    let count = die!(result.and_then(|n| out.flush().map(|_| n)), "Error: {}");
    debug!(count, ?direction, "conversions written");
}
