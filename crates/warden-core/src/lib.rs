//! Activator-restricted access gate.
//!
//! One persisted record (an activator identity plus an allow-list) guards a
//! single administrative action of an owning extension. The record is
//! re-read from host storage on every check and lazily repaired when the
//! activator account no longer exists, so the gate is self-healing without
//! any background reconciliation.
//!
//! Host collaborator contracts live in `warden-host-api`; this crate ships
//! the gate itself plus two `OptionStore` adapters (in-memory and SQLite).

pub mod decision;
pub mod gate;
pub mod record;
pub mod sqlite;
pub mod store;

pub use decision::{repair, resolve, Decision, Grant, RepairOutcome};
pub use gate::AccessGate;
pub use record::AccessRecord;
pub use sqlite::SqliteOptions;
pub use store::MemoryOptions;
