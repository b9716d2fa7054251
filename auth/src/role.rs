//! The three roles of the authorization model.

use std::fmt;

/// Who an operation requires the caller to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// A designated issuing authority: registration, freeze/unfreeze,
    /// clawback, voucher issuance, mass disbursement.
    Agency,
    /// The account's own address: online claims.
    Beneficiary,
    /// The account's recorded guardian address: recovery claims.
    Guardian,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agency => write!(f, "agency"),
            Self::Beneficiary => write!(f, "beneficiary"),
            Self::Guardian => write!(f, "guardian"),
        }
    }
}
