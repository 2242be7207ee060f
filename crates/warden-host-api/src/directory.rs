/// Integer user identity. `0` means "no user".
pub type UserId = u64;

/// User and role lookup supplied by the host.
pub trait Directory: Send + Sync {
    /// Identity of the currently authenticated actor, `0` if none.
    fn current_actor(&self) -> UserId;

    /// Does a user with this identity currently exist?
    fn user_exists(&self, user: UserId) -> bool;

    /// Identities of users holding the administrator role, ascending.
    fn admins(&self) -> Vec<UserId>;

    /// Does this user hold the administrator capability?
    ///
    /// May be broader than membership in [`admins`](Self::admins): some
    /// hosts grant the capability without the role.
    fn is_admin(&self, user: UserId) -> bool;
}

/// Multi-tenancy introspection supplied by the host.
///
/// Both answers can change at any time (a tenant-wide activation can be
/// toggled independently of this component), so callers must not cache them.
pub trait Tenancy: Send + Sync {
    /// Is this installation multi-tenant-capable at all?
    fn is_multitenant(&self) -> bool;

    /// Is the owning extension activated tenant-wide?
    fn network_activated(&self) -> bool;
}
