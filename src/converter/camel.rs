use tracing::trace;

use crate::initialisms::Initialisms;
use crate::unicode::first_char_len;

/// Split a CamelCase identifier into words and join them as snake_case.
///
/// A word boundary is any upper-case char after the first one. At each
/// boundary the pending word is first checked for the longest leading
/// initialism; if one matches, the whole initialism becomes a word and the
/// next word starts right after it, even when that leaves a lower-case tail
/// ("UserIDs" gives "user_id_s"). Offsets are byte offsets that always sit on char
/// boundaries.
pub(super) fn camel_to_snake(initialisms: &Initialisms, s: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    // Start of the pending word.
    let mut start = 0;
    // The first char of a word is never a boundary.
    let mut pos = first_char_len(s);

    while let Some(c) = s[pos..].chars().next() {
        if c.is_uppercase() {
            if let Some(initialism) = initialisms.longest_prefix(&s[start..]) {
                trace!(initialism, offset = start, "initialism matched");
                words.push(initialism);
                start += initialism.len();
                pos = start + first_char_len(&s[start..]);
                continue;
            }
            words.push(&s[start..pos]);
            start = pos;
        }
        pos += c.len_utf8();
    }

    if start < s.len() {
        words.push(&s[start..]);
    }
    words.join("_").to_lowercase()
}
