//! メモリ上のキー・値ストレージ（テスト用）

use crate::ports::outbound::KeyValueStore;
use common::error::Error;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let values = self
            .values
            .lock()
            .map_err(|e| Error::system(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| Error::system(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
