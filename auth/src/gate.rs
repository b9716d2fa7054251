//! The authorization gate consulted before any state mutation.

use crate::error::AuthError;
use crate::role::Role;
use benefit_types::Address;
use std::collections::HashSet;

/// Checks callers against the role an operation declares.
///
/// Agency membership is fixed at construction; Beneficiary and Guardian are
/// checked against the owner/guardian recorded on the target account, which
/// the caller supplies from a registry snapshot.
pub struct AuthorizationGate {
    agencies: HashSet<Address>,
}

impl AuthorizationGate {
    pub fn new(agencies: impl IntoIterator<Item = Address>) -> Self {
        Self {
            agencies: agencies.into_iter().collect(),
        }
    }

    pub fn is_agency(&self, caller: &Address) -> bool {
        self.agencies.contains(caller)
    }

    pub fn require_agency(&self, caller: &Address) -> Result<(), AuthError> {
        if self.is_agency(caller) {
            return Ok(());
        }
        Err(AuthError::unauthorized(caller, Role::Agency))
    }

    /// The caller must be the account's own address.
    pub fn require_beneficiary(&self, caller: &Address, owner: &Address) -> Result<(), AuthError> {
        if caller == owner {
            return Ok(());
        }
        Err(AuthError::unauthorized(caller, Role::Beneficiary))
    }

    /// The caller must be the account's recorded guardian.
    pub fn require_guardian(&self, caller: &Address, guardian: &Address) -> Result<(), AuthError> {
        if caller == guardian {
            return Ok(());
        }
        Err(AuthError::unauthorized(caller, Role::Guardian))
    }
}
