use crate::error::StoreError;

/// Activation hook: receives `true` for a tenant-wide activation.
pub type ActivationHook = Box<dyn Fn(bool) -> Result<(), StoreError> + Send + Sync>;

/// Admin-surface hook: fired when the host assembles its administrative UI.
pub type AdminSurfaceHook = Box<dyn Fn() -> Result<(), StoreError> + Send + Sync>;

/// Host-side lifecycle hook registration.
///
/// Constructing a gate has no side effects. The host wires it into its own
/// lifecycle afterwards by handing a registrar to the gate; errors returned
/// by a hook are the host's to surface, the gate never masks them.
pub trait HookRegistrar {
    /// Invoke `hook` when the owning extension is activated.
    fn on_activation(&mut self, hook: ActivationHook);

    /// Invoke `hook` at the point the administrative surface is assembled.
    fn on_admin_surface(&mut self, hook: AdminSurfaceHook);
}
