use serde_json::Value;

use crate::error::StoreError;
use crate::scope::Scope;

/// Scoped key-value storage for shared options.
///
/// Values are schemaless JSON. Implementations provide at least
/// last-writer-wins atomicity per `(scope, name)` key; the gate performs no
/// locking of its own.
pub trait OptionStore: Send + Sync {
    /// Read the option, `None` if it was never written.
    fn read(&self, scope: Scope, name: &str) -> Result<Option<Value>, StoreError>;

    /// Create or replace the option.
    fn write(&self, scope: Scope, name: &str, value: Value) -> Result<(), StoreError>;
}
