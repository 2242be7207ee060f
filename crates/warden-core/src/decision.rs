//! Pure permission resolution.
//!
//! Two passes, both free of I/O:
//! - [`repair`] replaces a dead or unset activator with a fallback admin
//! - [`resolve`] turns the repaired record into an allow/deny decision
//!
//! The gate supplies directory facts and persists repaired records; keeping
//! the algorithm pure keeps it independently testable.

use crate::record::AccessRecord;
use warden_host_api::UserId;

/// Machine-readable reason codes attached to decision diagnostics.
pub mod reason_codes {
    /// Caller is the effective activator.
    pub const P_ACTIVATOR: &str = "P_ACTIVATOR";
    /// Caller is on the allow-list.
    pub const P_ALLOW_LISTED: &str = "P_ALLOW_LISTED";
    /// No activator could be established; caller holds the admin capability.
    pub const P_ADMIN_FALLBACK: &str = "P_ADMIN_FALLBACK";
    /// Caller matched no grant rule.
    pub const D_NOT_ALLOWED: &str = "D_NOT_ALLOWED";
    /// No activator, no fallback, and the caller is not an admin.
    pub const D_NO_ADMIN: &str = "D_NO_ADMIN";
}

/// Which rule granted access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Activator,
    AllowListed,
    AdminFallback,
}

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow(Grant),
    Deny { reason: &'static str },
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    /// Reason code for diagnostics.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Decision::Allow(Grant::Activator) => reason_codes::P_ACTIVATOR,
            Decision::Allow(Grant::AllowListed) => reason_codes::P_ALLOW_LISTED,
            Decision::Allow(Grant::AdminFallback) => reason_codes::P_ADMIN_FALLBACK,
            Decision::Deny { reason } => reason,
        }
    }
}

/// Result of the repair pass over a loaded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Record to decide against, with the effective activator in place.
    pub record: AccessRecord,
    /// True when the activator changed and the record must be persisted
    /// before the decision is made.
    pub dirty: bool,
}

/// Replace a dead or unset activator with the lowest-id administrator.
///
/// `admins` must be ascending. The allow-list is carried over verbatim,
/// including entries for since-deleted users; a stale entry never matches a
/// live caller. When no fallback exists the activator stays `0` and nothing
/// needs to be written.
pub fn repair(record: &AccessRecord, activator_exists: bool, admins: &[UserId]) -> RepairOutcome {
    if record.activator != 0 && activator_exists {
        return RepairOutcome {
            record: record.clone(),
            dirty: false,
        };
    }

    match admins.first().copied() {
        Some(fallback) => RepairOutcome {
            record: AccessRecord {
                activator: fallback,
                allowed: record.allowed.clone(),
            },
            dirty: true,
        },
        None => RepairOutcome {
            record: AccessRecord {
                activator: 0,
                allowed: record.allowed.clone(),
            },
            dirty: false,
        },
    }
}

/// Decide whether `caller` may run the guarded action.
///
/// `record` must already have been through [`repair`]; an activator of `0`
/// here means no fallback was available, in which case only administrators
/// pass so the system is never permanently locked out.
pub fn resolve(record: &AccessRecord, caller: UserId, caller_is_admin: bool) -> Decision {
    if record.activator == 0 {
        return if caller_is_admin {
            Decision::Allow(Grant::AdminFallback)
        } else {
            Decision::Deny {
                reason: reason_codes::D_NO_ADMIN,
            }
        };
    }

    if caller == record.activator {
        Decision::Allow(Grant::Activator)
    } else if record.is_allowed(caller) {
        Decision::Allow(Grant::AllowListed)
    } else {
        Decision::Deny {
            reason: reason_codes::D_NOT_ALLOWED,
        }
    }
}
