//! Protocol parameters — the tunable windows governing claims and vouchers.

use serde::{Deserialize, Serialize};

/// All protocol parameters consulted by the engine and voucher protocol.
///
/// Every duration is in seconds. Agencies may deploy with different values;
/// the defaults below are the reference configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Maximum age of an identity proof before it is considered stale.
    /// Prevents replay of old proofs. Default: 5 minutes.
    pub proof_freshness_window_secs: u64,

    /// Lifetime of an offline voucher from issuance to expiry. The boundary
    /// is inclusive: a voucher is still redeemable at exactly `issued_at + ttl`.
    /// Default: 30 days.
    pub voucher_ttl_secs: u64,

    /// Bounded wait for the identity-proof oracle. A call that does not
    /// resolve within this window is treated as a stale proof, never left
    /// pending. Default: 30 seconds.
    pub oracle_timeout_secs: u64,

    /// Minimum interval between two entitlement payouts to the same account.
    /// This is the per-period gate that makes concurrent claims against a
    /// single entitlement resolve to exactly one payout. Default: 30 days.
    pub claim_period_secs: u64,
}

impl ProtocolParams {
    /// Reference configuration.
    pub fn defaults() -> Self {
        Self {
            proof_freshness_window_secs: 5 * 60,
            voucher_ttl_secs: 30 * 24 * 3600,
            oracle_timeout_secs: 30,
            claim_period_secs: 30 * 24 * 3600,
        }
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self::defaults()
    }
}
