//! Placeholder extraction from annotated input text.
//!
//! Recognised lines look like `**KEY:** value`. Everything else is ignored.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `**<key>:**<optional whitespace><value>`, key matched lazily up to the first `:**`
    static ref ANNOTATION: Regex = Regex::new(r"^\*\*(.+?):\*\*\s*(.*)").unwrap();
}

/// Markup tag names that are never treated as placeholders.
pub const IGNORED_KEYS: [&str; 22] = [
    "SPAN", "DIV", "P", "H1", "H2", "H3", "H4", "H5", "H6", "A", "IMG", "UL", "LI", "SECTION",
    "HEADER", "FOOTER", "BODY", "HTML", "SCRIPT", "STYLE", "BR", "HR",
];

/// Ordered placeholder → value mapping.
///
/// Keys keep the position of their first insertion; inserting an existing key
/// overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<(String, String)>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ReplacementMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Parse `**KEY:** value` lines from `input` into a replacement mapping.
pub fn extract_replacements(input: &str) -> ReplacementMap {
    let mut replacements = ReplacementMap::new();

    for line in input.lines() {
        let Some((key, value)) = parse_line(line.trim()) else {
            continue;
        };

        if IGNORED_KEYS.contains(&key) {
            continue;
        }

        replacements.insert(key, value);
    }

    replacements
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let captures = ANNOTATION.captures(line)?;
    let key = captures.get(1)?.as_str().trim();
    let value = captures.get(2).map_or("", |m| m.as_str()).trim();
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_annotation() {
        let map = extract_replacements("**Title:** Hello World");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Title"), Some("Hello World"));
    }

    #[test]
    fn test_ignored_markup_keys() {
        let map = extract_replacements("**DIV:** ignored\n**H3:** also ignored\n**NAME:** kept");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("DIV"), None);
        assert_eq!(map.get("NAME"), Some("kept"));
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        let map = extract_replacements("**div:** lower\n**Span:** mixed");
        assert_eq!(map.get("div"), Some("lower"));
        assert_eq!(map.get("Span"), Some("mixed"));
    }

    #[test]
    fn test_non_matching_lines_ignored() {
        let input = "\nplain text\n* single star:* nope\n**NOKEY** value\nKEY:** value\n";
        assert!(extract_replacements(input).is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let map = extract_replacements("   **CITY:**    Lisbon   \r\n");
        assert_eq!(map.get("CITY"), Some("Lisbon"));
    }

    #[test]
    fn test_key_is_trimmed_and_stops_at_first_marker() {
        let map = extract_replacements("** NAME :**a:** b");
        assert_eq!(map.get("NAME"), Some("a:** b"));
    }

    #[test]
    fn test_no_space_after_marker() {
        let map = extract_replacements("**ID:**42");
        assert_eq!(map.get("ID"), Some("42"));
    }

    #[test]
    fn test_empty_value_kept() {
        let map = extract_replacements("**SUBTITLE:**");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("SUBTITLE"), Some(""));
    }

    #[test]
    fn test_blank_key_kept_as_empty_string() {
        let map = extract_replacements("**  :** X");
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("", "X")]);
    }

    #[test]
    fn test_duplicate_key_last_wins_keeps_position() {
        let map = extract_replacements("**FIRST:** one\n**SECOND:** two\n**FIRST:** again");
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("FIRST", "again"), ("SECOND", "two")]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let input = "**NAME:** Alice\nnoise\n**DIV:** x\n**AGE:** 30\n**NAME:** Bob";
        assert_eq!(extract_replacements(input), extract_replacements(input));
    }
}
