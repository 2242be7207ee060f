use serde::{Deserialize, Serialize};

/// Storage scope for a shared option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Site-local storage.
    Site,
    /// Tenant-wide storage, shared across all sites of a multi-tenant
    /// installation.
    Network,
}

impl Scope {
    /// Stable label for adapters that persist the scope as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Site => "site",
            Scope::Network => "network",
        }
    }
}
