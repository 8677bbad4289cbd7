//! Name-keyed map that remembers insertion order.
//!
//! Every derived map in a scoring pass is keyed by display name and is
//! iterated in the order players appear in the report, so rankings and
//! tie-breaks do not depend on hashing. Per-player boon generation uses
//! the same map so boons keep the order the report lists them in.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTable<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for PlayerTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> PlayerTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Same keys, same order, new values.
    pub fn map<U>(&self, mut f: impl FnMut(&str, &T) -> U) -> PlayerTable<U> {
        PlayerTable {
            entries: self
                .entries
                .iter()
                .map(|(n, v)| (n.clone(), f(n, v)))
                .collect(),
        }
    }
}

impl<T: Copy + Default> PlayerTable<T> {
    /// Value for `name`, or the type's zero when absent.
    pub fn value_or_default(&self, name: &str) -> T {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<T> FromIterator<(String, T)> for PlayerTable<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut table = PlayerTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

impl<T: Serialize> Serialize for PlayerTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
