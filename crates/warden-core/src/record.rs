use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use warden_host_api::UserId;

/// The persisted gate record: one activator plus an allow-list.
///
/// Exactly one record exists per owning extension per storage scope. The
/// activator is the permanent authority for the guarded action; `allowed`
/// holds additional identities with the same access. `0` never appears in
/// `allowed` and a non-zero `activator` is expected to reference an existing
/// user (the gate repairs it when it does not).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Identity of the permanent authority; `0` = unset.
    #[serde(default)]
    pub activator: UserId,
    /// Additional identities granted access. No zeros, no duplicates.
    #[serde(default)]
    pub allowed: Vec<UserId>,
}

impl AccessRecord {
    /// Fresh record for an activation performed by `actor`.
    pub fn fresh(actor: UserId) -> Self {
        Self {
            activator: actor,
            allowed: Vec::new(),
        }
    }

    /// Decode a stored value, coercing malformed shapes instead of failing.
    ///
    /// An absent or non-object value yields the unset record. A non-numeric
    /// `activator` becomes `0`; allow-list entries that are not positive
    /// integers are dropped, as are duplicates (first occurrence wins).
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(obj) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        let activator = obj.get("activator").and_then(Value::as_u64).unwrap_or(0);

        let mut allowed: Vec<UserId> = Vec::new();
        if let Some(entries) = obj.get("allowed").and_then(Value::as_array) {
            for entry in entries {
                match entry.as_u64() {
                    Some(id) if id != 0 && !allowed.contains(&id) => allowed.push(id),
                    _ => {}
                }
            }
        }

        Self { activator, allowed }
    }

    /// Canonical stored shape.
    pub fn to_value(&self) -> Value {
        json!({ "activator": self.activator, "allowed": self.allowed })
    }

    /// Is `user` on the allow-list?
    pub fn is_allowed(&self, user: UserId) -> bool {
        self.allowed.contains(&user)
    }
}
