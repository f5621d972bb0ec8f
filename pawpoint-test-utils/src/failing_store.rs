// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pawpoint_error::{PawpointError, Result};
use pawpoint_landing::storage::{KeyValueStore, MemoryStore};

/// Store whose reads succeed but whose writes always fail, like a browser
/// `localStorage` over quota.
#[derive(Clone, Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-populated contents.
    pub fn with_contents(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(PawpointError::storage(format!("quota exceeded writing {key}")))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Err(PawpointError::storage(format!("quota exceeded removing {key}")))
    }
}
