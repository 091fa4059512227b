use serde::Serialize;
use serde_json::{Map, Value};

/// Opaque application payload delivered alongside (or instead of) the
/// notification block.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Data {
    entries: Map<String, Value>,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_map(&self) -> Map<String, Value> {
        self.entries.clone()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
