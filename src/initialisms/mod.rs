//! Initialism registry and prefix matching.
//!
//! Initialisms are stored upper-case. Whole-word lookups ([`Initialisms::contains`])
//! are case-insensitive; prefix search inside CamelCase text is exact, so that
//! "Id" in "Identity" is never taken for "ID". The registry tracks the
//! shortest and longest entry so that prefix search only tries lengths that
//! could possibly match.

mod config;
mod table;

use std::collections::HashSet;

use tracing::{trace, warn};

pub use config::{default_toml, parse_initialisms_toml, ConfigError, InitialismConfig};
pub use table::COMMON_INITIALISMS;

/// A set of upper-case initialisms with cached length bounds (in chars).
#[derive(Debug, Clone)]
pub struct Initialisms {
    set: HashSet<String>,
    min_len: usize,
    max_len: usize,
}

impl Default for Initialisms {
    fn default() -> Self {
        Self {
            set: HashSet::new(),
            min_len: usize::MAX,
            max_len: 0,
        }
    }
}

impl Initialisms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token`, upper-casing it first.
    ///
    /// Returns `false` if the token was already present or is empty. An empty
    /// token would match at every position, so it is rejected.
    pub fn insert(&mut self, token: &str) -> bool {
        if token.is_empty() {
            warn!("ignoring empty initialism");
            return false;
        }
        let upper = token.to_uppercase();
        let len = upper.chars().count();
        self.min_len = self.min_len.min(len);
        self.max_len = self.max_len.max(len);
        let added = self.set.insert(upper);
        if added {
            trace!(token, len, "initialism registered");
        }
        added
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, candidate: &str) -> bool {
        self.contains_upper(&candidate.to_uppercase())
    }

    /// Membership test for a candidate that is already upper-cased.
    pub(crate) fn contains_upper(&self, upper: &str) -> bool {
        self.set.contains(upper)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Length in chars of the shortest registered initialism, `usize::MAX` when empty.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Length in chars of the longest registered initialism, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Longest registered initialism that is a prefix of `s`.
    ///
    /// Only prefix lengths in `[min_len, max_len]` are tried, shortest
    /// first, and a longer match replaces a shorter one. The comparison is
    /// exact against the upper-case entries, so mixed-case text such as
    /// "Https" does not match "HTTPS".
    pub fn longest_prefix<'a>(&self, s: &'a str) -> Option<&'a str> {
        // Byte offset just past the n-th char, for n = 1, 2, ...
        let ends = s.char_indices().map(|(i, c)| i + c.len_utf8());
        ends.enumerate()
            .skip(self.min_len.saturating_sub(1))
            .take_while(|&(n, _)| n < self.max_len)
            .map(move |(_, end)| &s[..end])
            .filter(|prefix| self.contains_upper(prefix))
            .last()
    }
}

impl<S: AsRef<str>> Extend<S> for Initialisms {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for token in iter {
            self.insert(token.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Initialisms {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
