//! Language byte counts and the derived percentage shares

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// One row of the language breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    /// Integer percent of total bytes, 0-100
    pub percent: u32,
}

impl LanguageShare {
    pub fn new(name: impl Into<String>, percent: u32) -> Self {
        Self {
            name: name.into(),
            percent,
        }
    }
}

/// Per-repository language map, in the order the API sent it.
///
/// Order matters: ties in the final percentages are broken by first
/// appearance, so a plain `HashMap`/`BTreeMap` would change the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBytes(pub Vec<(String, u64)>);

impl<'de> Deserialize<'de> for LanguageBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LanguageBytesVisitor;

        impl<'de> Visitor<'de> for LanguageBytesVisitor {
            type Value = LanguageBytes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language name to byte count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, bytes)) = map.next_entry::<String, u64>()? {
                    entries.push((name, bytes));
                }
                Ok(LanguageBytes(entries))
            }
        }

        deserializer.deserialize_map(LanguageBytesVisitor)
    }
}

/// Byte totals summed across repositories, insertion ordered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    entries: Vec<(String, u64)>,
}

impl LanguageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, bytes: u64) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total = total.saturating_add(bytes),
            None => self.entries.push((name.to_string(), bytes)),
        }
    }

    pub fn merge(&mut self, repo: &LanguageBytes) {
        for (name, bytes) in &repo.0 {
            self.add(name, *bytes);
        }
    }

    /// Append `name` with zero bytes if it is not already present.
    pub fn ensure(&mut self, name: &str) {
        if !self.contains(name) {
            self.entries.push((name.to_string(), 0));
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, (_, b)| sum.saturating_add(*b))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(n, b)| (n.as_str(), *b))
    }
}

impl<'a> FromIterator<&'a LanguageBytes> for LanguageTotals {
    fn from_iter<I: IntoIterator<Item = &'a LanguageBytes>>(iter: I) -> Self {
        let mut totals = LanguageTotals::new();
        for repo in iter {
            totals.merge(repo);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_keeps_document_order() {
        let bytes: LanguageBytes =
            serde_json::from_str(r#"{"TypeScript": 900, "CSS": 40, "JavaScript": 12}"#).unwrap();
        let names: Vec<_> = bytes.0.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "CSS", "JavaScript"]);
    }

    #[test]
    fn deserialize_rejects_arrays() {
        assert!(serde_json::from_str::<LanguageBytes>("[1, 2]").is_err());
    }

    #[test]
    fn totals_sum_across_repos_in_first_seen_order() {
        let a = LanguageBytes(vec![("Rust".into(), 100), ("Shell".into(), 5)]);
        let b = LanguageBytes(vec![("Python".into(), 50), ("Rust".into(), 25)]);

        let totals: LanguageTotals = [&a, &b].into_iter().collect();

        let rows: Vec<_> = totals.iter().collect();
        assert_eq!(rows, vec![("Rust", 125), ("Shell", 5), ("Python", 50)]);
        assert_eq!(totals.total_bytes(), 180);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let a = LanguageBytes(vec![("C".into(), u64::MAX - 1), ("Asm".into(), 10)]);
        let b = LanguageBytes(vec![("C".into(), 5)]);

        let totals: LanguageTotals = [&a, &b].into_iter().collect();

        let rows: Vec<_> = totals.iter().collect();
        assert_eq!(rows, vec![("C", u64::MAX), ("Asm", 10)]);
        assert_eq!(totals.total_bytes(), u64::MAX);
    }

    #[test]
    fn ensure_appends_once() {
        let mut totals = LanguageTotals::new();
        totals.add("Go", 10);
        totals.ensure("Java");
        totals.ensure("Java");
        totals.ensure("Go");

        let rows: Vec<_> = totals.iter().collect();
        assert_eq!(rows, vec![("Go", 10), ("Java", 0)]);
    }
}
