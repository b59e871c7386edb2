//! Character-level helpers shared by both conversion directions.

/// Append `word` to `out` with its first char upper-cased.
///
/// Upper-casing may expand a single char (e.g. 'ß' becomes "SS"), so the
/// first char is written through its full case mapping.
pub fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Byte length of the first char of `s`, 0 if `s` is empty.
pub fn first_char_len(s: &str) -> usize {
    s.chars().next().map_or(0, char::len_utf8)
}
