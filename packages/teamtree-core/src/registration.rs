//! Tier derivation for the registration flow.
//!
//! The new account's tier is a pure function of the chosen parent's tier;
//! the API re-validates and is the authority of record. No hidden defaults:
//! the whole rule table lives in [`resolve_tier`] and [`Role::child_tier`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::role::Role;

/// An account eligible to be a registration parent. Set semantics on `id`;
/// ordering is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCandidate {
    pub id: String,
    pub tier: Role,
    pub name: String,
}

/// The derived tier and parent linkage for a registration submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierResolution {
    pub tier: Role,
    pub parent_id: Option<String>,
}

/// Derive the new account's tier from the selected parent.
///
/// No selection, or a selection that matches no candidate, registers an
/// admin with no parent. Otherwise the child sits one tier below the
/// parent, flooring at `user`.
pub fn resolve_tier(selected: Option<&str>, candidates: &[ParentCandidate]) -> TierResolution {
    let parent = selected.and_then(|id| candidates.iter().find(|c| c.id == id));

    match parent {
        Some(parent) => TierResolution {
            tier: parent.tier.child_tier(),
            parent_id: Some(parent.id.clone()),
        },
        None => TierResolution {
            tier: Role::Admin,
            parent_id: None,
        },
    }
}

/// Single-flight guard for a form submission.
///
/// [`SubmitGuard::begin`] hands out a permit only while no other permit is
/// alive. Dropping the permit re-arms the guard, so the busy state clears
/// on every exit path whatever the submission's outcome.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    busy: AtomicBool,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard. `None` while a prior submission is outstanding.
    pub fn begin(&self) -> Option<SubmitPermit<'_>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(SubmitPermit { guard: self })
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

/// Proof that the guard is held. Dropping it releases the guard.
#[derive(Debug)]
pub struct SubmitPermit<'a> {
    guard: &'a SubmitGuard,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::SeqCst);
    }
}
