//! The gate orchestrator: scope selection, record load, repair
//! write-through, decision, and the guarded action.

use std::sync::Arc;

use warden_host_api::{
    Directory, HookRegistrar, OptionStore, Scope, StoreError, Tenancy, UserId,
};

use crate::decision::{repair, resolve, RepairOutcome};
use crate::record::AccessRecord;

/// Access gate for one administrative action of one owning extension.
///
/// Holds no record state between calls; every operation re-reads the store,
/// so concurrent writers elsewhere are observed on the next check.
/// Construction has no side effects: wire lifecycle hooks explicitly via
/// [`register`](Self::register), or call [`on_activation`](Self::on_activation)
/// and [`run_if_allowed`](Self::run_if_allowed) directly from the host's own
/// hook system.
pub struct AccessGate {
    option_name: String,
    store: Arc<dyn OptionStore>,
    directory: Arc<dyn Directory>,
    tenancy: Arc<dyn Tenancy>,
}

impl AccessGate {
    pub fn new(
        option_name: impl Into<String>,
        store: Arc<dyn OptionStore>,
        directory: Arc<dyn Directory>,
        tenancy: Arc<dyn Tenancy>,
    ) -> Self {
        Self {
            option_name: option_name.into(),
            store,
            directory,
            tenancy,
        }
    }

    /// The option name this gate reads and writes.
    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    /// Wire the gate into the host lifecycle.
    ///
    /// `on_allowed` is the guarded action the admin-surface hook will run
    /// when the current actor passes the gate.
    pub fn register(
        self: Arc<Self>,
        registrar: &mut dyn HookRegistrar,
        on_allowed: impl Fn() + Send + Sync + 'static,
    ) {
        let gate = Arc::clone(&self);
        registrar.on_activation(Box::new(move |network_wide| gate.on_activation(network_wide)));

        registrar.on_admin_surface(Box::new(move || self.run_if_allowed(&on_allowed)));
    }

    /// Activation handler: reset the record to the activating user.
    ///
    /// Overwrites any pre-existing record unconditionally; reactivation
    /// always hands ownership to the reactivating user.
    pub fn on_activation(&self, network_wide: bool) -> Result<(), StoreError> {
        let actor = self.directory.current_actor();
        let scope = if self.tenancy.is_multitenant() && network_wide {
            Scope::Network
        } else {
            Scope::Site
        };
        tracing::debug!(actor, scope = scope.as_str(), "activation reset");
        self.persist(scope, &AccessRecord::fresh(actor))
    }

    /// Run `action` iff the current actor passes the gate.
    ///
    /// Loads the record, repairs a stale activator (persisting the fix
    /// before the decision is made), then decides. Denial is silent; only
    /// storage failures surface.
    pub fn run_if_allowed<F: FnOnce()>(&self, action: F) -> Result<(), StoreError> {
        let caller = self.directory.current_actor();
        let scope = self.active_scope();
        let record = self.load(scope)?;

        let activator_exists =
            record.activator != 0 && self.directory.user_exists(record.activator);
        // Admin enumeration only happens on the repair path.
        let admins = if activator_exists {
            Vec::new()
        } else {
            self.directory.admins()
        };
        let RepairOutcome { record: effective, dirty } =
            repair(&record, activator_exists, &admins);
        if dirty {
            tracing::warn!(
                stale = record.activator,
                promoted = effective.activator,
                "activator unset or deleted, promoted fallback admin"
            );
            self.persist(scope, &effective)?;
        }

        let caller_is_admin = effective.activator == 0 && self.directory.is_admin(caller);
        let decision = resolve(&effective, caller, caller_is_admin);
        tracing::debug!(caller, code = decision.reason_code(), "gate decision");

        if decision.is_allow() {
            action();
        }
        Ok(())
    }

    /// Add `user` to the allow-list. Writes only when absent; `0` is never
    /// stored.
    pub fn allow(&self, user: UserId) -> Result<(), StoreError> {
        let scope = self.active_scope();
        let mut record = self.load(scope)?;
        if user != 0 && !record.is_allowed(user) {
            record.allowed.push(user);
            self.persist(scope, &record)?;
        }
        Ok(())
    }

    /// Remove every occurrence of `user` from the allow-list, preserving the
    /// relative order of the rest.
    ///
    /// Always persists the filtered list, even when nothing matched. The
    /// activator is untouched.
    pub fn unallow(&self, user: UserId) -> Result<(), StoreError> {
        let scope = self.active_scope();
        let mut record = self.load(scope)?;
        record.allowed.retain(|&id| id != user);
        self.persist(scope, &record)
    }

    /// Scope the record currently lives in. Re-evaluated on every read and
    /// write: tenant-wide activation can change under us.
    fn active_scope(&self) -> Scope {
        if self.tenancy.is_multitenant() && self.tenancy.network_activated() {
            Scope::Network
        } else {
            Scope::Site
        }
    }

    fn load(&self, scope: Scope) -> Result<AccessRecord, StoreError> {
        let value = self.store.read(scope, &self.option_name)?;
        Ok(AccessRecord::from_value(value.as_ref()))
    }

    fn persist(&self, scope: Scope, record: &AccessRecord) -> Result<(), StoreError> {
        self.store.write(scope, &self.option_name, record.to_value())
    }
}
