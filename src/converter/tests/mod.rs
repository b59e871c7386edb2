
use super::Converter;

/// Assert `f(input) == expected` for every pair, reporting the failing input.
pub(super) fn check(cases: &[(&str, &str)], f: impl Fn(&str) -> String) {
    for &(input, expected) in cases {
        assert_eq!(f(input), expected, "input {input:?}");
    }
}

pub(super) fn default_converter() -> Converter {
    Converter::new_default()
}
