//! Parsing of `--name:value` switches into a lookup map

use log::debug;

/// Delimiter that introduces a switch.
pub const SWITCH_PREFIX: &str = "--";

/// Separator between a switch name and its value.
pub const VALUE_SEPARATOR: char = ':';

/// Switches supplied on the command line, keyed by name.
///
/// A switch given without a value (`--help`) is present with `None`,
/// which is distinct from an explicitly empty value (`--out:`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchMap {
    entries: Vec<(String, Option<String>)>,
}

impl SwitchMap {
    /// Build a switch map from raw argument tokens.
    ///
    /// Tokens are joined with single spaces and split on `--`, so a switch may
    /// span several tokens (`--in: data.json`) or several switches may share
    /// one token (`"--in:a --out:b"`). Each segment is split on its first `:`
    /// into a trimmed name and a trimmed value. Repeated names keep the last
    /// value.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut switches = Self::default();
        for segment in joined.split(SWITCH_PREFIX) {
            if segment.trim().is_empty() {
                continue;
            }
            let (name, value) = match segment.split_once(VALUE_SEPARATOR) {
                Some((name, value)) => (name.trim(), Some(value.trim().to_string())),
                None => (segment.trim(), None),
            };
            switches.insert(name, value);
        }

        debug!("Parsed {} switch(es): {:?}", switches.len(), switches.names());
        switches
    }

    /// Insert a switch, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: &str, value: Option<String>) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Whether the switch was supplied at all, with or without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// The switch's value. `None` both for absent switches and for switches
    /// given without a value; use [`SwitchMap::contains`] to tell them apart.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Switch names in the order they first appeared.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
