use std::collections::BTreeMap;

use super::Store;
use crate::Result;

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, json: &str) -> Result<()> {
        self.entries.insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, json) in entries {
            self.entries.insert(key.to_string(), json.to_string());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}
