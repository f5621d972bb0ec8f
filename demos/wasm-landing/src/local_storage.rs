// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pawpoint::{KeyValueStore, PawpointError, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`KeyValueStore`] over `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// `None` when storage is unavailable, e.g. disabled by privacy settings.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

fn storage_error(action: &str, key: &str, error: JsValue) -> PawpointError {
    PawpointError::storage(format!("{action} {key}: {error:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|error| storage_error("reading", key, error))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|error| storage_error("writing", key, error))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|error| storage_error("removing", key, error))
    }
}
