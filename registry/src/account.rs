//! Per-beneficiary account record.

use benefit_types::{AccountStatus, Address, BenefitAmount, Timestamp};
use serde::{Deserialize, Serialize};

/// Ledger state for one beneficiary.
///
/// `name` and `id_number` are descriptive metadata from registration and play
/// no part in authorization. `disbursed_amount` is the cumulative lifetime
/// total ever paid out — monotonically non-decreasing except on clawback.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub name: String,
    pub id_number: String,
    /// A second identity permitted limited recovery actions. Always differs
    /// from `address`.
    pub guardian_address: Address,
    pub status: AccountStatus,
    /// Per-period entitlement in the smallest currency unit.
    pub benefit_amount: BenefitAmount,
    pub disbursed_amount: BenefitAmount,
    /// Timestamp of the most recent successful payout; `None` initially.
    pub last_disbursement_at: Option<Timestamp>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
