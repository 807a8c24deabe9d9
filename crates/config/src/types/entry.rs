//! Parsed `.env` contents.

/// A single `KEY=value` pair read from an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    /// Key as written in the file (case preserved).
    pub key: String,
    /// Value, possibly empty.
    pub value: String,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered key/value mapping produced by one load of an environment file.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvEntries {
    entries: Vec<EnvEntry>,
}

impl EnvEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, overwriting the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(EnvEntry { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvEntries
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}

impl IntoIterator for EnvEntries {
    type Item = EnvEntry;
    type IntoIter = std::vec::IntoIter<EnvEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EnvEntries {
    type Item = &'a EnvEntry;
    type IntoIter = std::slice::Iter<'a, EnvEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
