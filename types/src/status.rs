//! Account lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle status of a beneficiary account.
///
/// Accounts are never deleted — a misbehaving account is frozen, preserving
/// its audit history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Account may claim and be disbursed to.
    Active,
    /// Account is suspended; claims and disbursements are rejected.
    Frozen,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Frozen => write!(f, "frozen"),
        }
    }
}
