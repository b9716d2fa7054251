//! Voucher issuance and redemption.
//!
//! Per-voucher state machine: Issued → Redeemed (terminal) or Issued →
//! Expired (terminal, checked lazily at redemption — no background sweep).

use crate::error::VoucherError;
use crate::voucher::Voucher;
use benefit_auth::AuthorizationGate;
use benefit_crypto::{sign_message, verify_signature};
use benefit_registry::{BeneficiaryRegistry, RegistryError};
use benefit_types::{Address, BenefitAmount, KeyPair, ProtocolParams, Timestamp};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// Issues signed single-use vouchers and validates + redeems them against the
/// registry, detecting replay and staleness.
pub struct VoucherProtocol {
    registry: Arc<BeneficiaryRegistry>,
    gate: Arc<AuthorizationGate>,
    params: ProtocolParams,
    /// The issuing agency's signing authority.
    agency_key: KeyPair,
    /// Tuples that have been redeemed — the at-most-once guarantee.
    redeemed: Mutex<HashSet<(Address, u64, [u8; 64])>>,
}

impl VoucherProtocol {
    pub fn new(
        registry: Arc<BeneficiaryRegistry>,
        gate: Arc<AuthorizationGate>,
        params: ProtocolParams,
        agency_key: KeyPair,
    ) -> Self {
        Self {
            registry,
            gate,
            params,
            agency_key,
            redeemed: Mutex::new(HashSet::new()),
        }
    }

    /// Issue a voucher for an Active beneficiary under Agency authority.
    pub fn issue(
        &self,
        caller: &Address,
        beneficiary: &Address,
        amount: BenefitAmount,
        now: Timestamp,
    ) -> Result<Voucher, VoucherError> {
        self.gate.require_agency(caller)?;

        let account = self.registry.get(beneficiary)?;
        if !account.is_active() {
            return Err(RegistryError::AccountFrozen(beneficiary.to_string()).into());
        }

        let digest = Voucher::signing_digest(beneficiary, amount, now);
        let signature = sign_message(&digest, &self.agency_key.private);
        info!(beneficiary = %beneficiary, %amount, issued_at = %now, "voucher issued");

        Ok(Voucher {
            beneficiary: beneficiary.clone(),
            amount,
            issued_at: now,
            signature,
        })
    }

    /// Redeem a voucher: verify signature integrity, expiry (inclusive at
    /// exactly `issued_at + ttl`), and the at-most-once guarantee, then apply
    /// the disbursement.
    ///
    /// The redeemed-set lock is held across the ledger mutation so the
    /// consume-and-pay pair is atomic: no interleaving can observe a consumed
    /// voucher without payment, or a payment with the voucher still live.
    /// Lock order is redeemed set, then account; claim paths take only the
    /// account lock, so the order is acyclic.
    pub fn redeem(&self, voucher: &Voucher, now: Timestamp) -> Result<BenefitAmount, VoucherError> {
        if !verify_signature(&voucher.digest(), &voucher.signature, &self.agency_key.public) {
            warn!(beneficiary = %voucher.beneficiary, "voucher signature rejected");
            return Err(VoucherError::InvalidSignature);
        }

        let ttl = self.params.voucher_ttl_secs;
        if voucher.issued_at.has_expired(ttl, now) {
            return Err(VoucherError::VoucherExpired {
                issued_at: voucher.issued_at.as_secs(),
                ttl_secs: ttl,
                now: now.as_secs(),
            });
        }

        let key = voucher.redemption_key();
        let mut redeemed = self.redeemed.lock().unwrap_or_else(PoisonError::into_inner);
        if redeemed.contains(&key) {
            return Err(VoucherError::VoucherAlreadyRedeemed);
        }

        // A failed disbursement (frozen/unknown account) leaves the voucher
        // unconsumed; it can be retried once the account is restored.
        self.registry
            .apply_disbursement(&voucher.beneficiary, voucher.amount, now)?;
        redeemed.insert(key);

        info!(
            beneficiary = %voucher.beneficiary,
            amount = %voucher.amount,
            "voucher redeemed"
        );
        Ok(voucher.amount)
    }

    /// Number of vouchers redeemed so far.
    pub fn redeemed_count(&self) -> usize {
        let redeemed = self.redeemed.lock().unwrap_or_else(PoisonError::into_inner);
        redeemed.len()
    }
}
