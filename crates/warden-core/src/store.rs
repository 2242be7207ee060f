//! In-memory option store, the reference `OptionStore` implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use warden_host_api::{OptionStore, Scope, StoreError};

/// `Mutex<HashMap>`-backed store. The key is the full `(scope, name)` pair,
/// so site and network options never alias.
#[derive(Debug, Default)]
pub struct MemoryOptions {
    options: Mutex<HashMap<(Scope, String), Value>>,
}

impl MemoryOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionStore for MemoryOptions {
    fn read(&self, scope: Scope, name: &str) -> Result<Option<Value>, StoreError> {
        let options = self.options.lock().unwrap();
        Ok(options.get(&(scope, name.to_string())).cloned())
    }

    fn write(&self, scope: Scope, name: &str, value: Value) -> Result<(), StoreError> {
        let mut options = self.options.lock().unwrap();
        options.insert((scope, name.to_string()), value);
        Ok(())
    }
}
