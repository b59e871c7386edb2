use crate::initialisms::Initialisms;
use crate::unicode::push_capitalized;

/// Join snake_case words into CamelCase (or camelCase if `capitalize_first`
/// is false, in which case the first word is copied verbatim).
///
/// Words that are registered initialisms are written fully upper-cased.
/// Empty segments from stray underscores contribute nothing.
pub(super) fn snake_to_camel(initialisms: &Initialisms, s: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(s.len());

    for (i, word) in s.split('_').enumerate() {
        if i == 0 && !capitalize_first {
            out.push_str(word);
            continue;
        }
        let upper = word.to_uppercase();
        if initialisms.contains_upper(&upper) {
            out.push_str(&upper);
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}
