//! Contracts a host platform supplies to the warden access gate.
//!
//! The gate itself lives in `warden-core`; this crate only defines the seams
//! it talks through:
//! - [`OptionStore`]: scoped key-value storage for the shared record
//! - [`Directory`]: user and role lookup
//! - [`Tenancy`]: multi-tenancy introspection
//! - [`HookRegistrar`]: explicit lifecycle hook wiring

pub mod directory;
pub mod error;
pub mod hooks;
pub mod scope;
pub mod store;

pub use directory::{Directory, Tenancy, UserId};
pub use error::StoreError;
pub use hooks::HookRegistrar;
pub use scope::Scope;
pub use store::OptionStore;
