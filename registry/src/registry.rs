//! The account arena with per-account mutation locks.
//!
//! The map itself is guarded by a `RwLock` (registration takes the write
//! lock, lookups take the read lock); each account record sits behind its own
//! `Mutex` so mutations against distinct accounts never contend. All
//! check-then-mutate sequences hold the account lock for their full duration
//! and release it on every exit path via the guard.

use crate::account::Account;
use crate::error::RegistryError;
use benefit_types::{AccountStatus, Address, BenefitAmount, Timestamp};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info};

/// The authoritative mapping of beneficiary identity to account state.
///
/// No other component mutates account fields directly — the disbursement
/// engine and voucher protocol go through the operations below.
pub struct BeneficiaryRegistry {
    accounts: RwLock<HashMap<Address, Arc<Mutex<Account>>>>,
}

impl BeneficiaryRegistry {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new beneficiary with an Active account and zero disbursed.
    pub fn register(
        &self,
        address: Address,
        name: impl Into<String>,
        id_number: impl Into<String>,
        guardian_address: Address,
        benefit_amount: BenefitAmount,
    ) -> Result<(), RegistryError> {
        if guardian_address == address {
            return Err(RegistryError::InvalidGuardian(address.to_string()));
        }

        let mut map = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(&address) {
            return Err(RegistryError::DuplicateAccount(address.to_string()));
        }

        let account = Account {
            address: address.clone(),
            name: name.into(),
            id_number: id_number.into(),
            guardian_address,
            status: AccountStatus::Active,
            benefit_amount,
            disbursed_amount: BenefitAmount::ZERO,
            last_disbursement_at: None,
        };
        map.insert(address.clone(), Arc::new(Mutex::new(account)));
        info!(address = %address, "beneficiary registered");
        Ok(())
    }

    /// Set an account's status. Idempotent: setting the current status is a
    /// no-op, not an error.
    pub fn set_status(&self, address: &Address, status: AccountStatus) -> Result<(), RegistryError> {
        let record = self.record(address)?;
        let mut account = record.lock().unwrap_or_else(PoisonError::into_inner);
        if account.status != status {
            info!(address = %address, %status, "account status changed");
            account.status = status;
        }
        Ok(())
    }

    /// Record a payout of `amount` to an Active account.
    ///
    /// Used by voucher redemption, where the voucher itself is the
    /// entitlement; online claims go through [`claim_entitlement`] which adds
    /// the per-period gate.
    ///
    /// [`claim_entitlement`]: Self::claim_entitlement
    pub fn apply_disbursement(
        &self,
        address: &Address,
        amount: BenefitAmount,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let record = self.record(address)?;
        let mut account = record.lock().unwrap_or_else(PoisonError::into_inner);
        Self::disburse_locked(&mut account, amount, now)
    }

    /// Claim one period's entitlement: a single check-then-mutate under the
    /// account lock. Requires Active status and at least `period_secs` since
    /// the previous payout, so two concurrent claims against one entitlement
    /// resolve to exactly one payout.
    pub fn claim_entitlement(
        &self,
        address: &Address,
        period_secs: u64,
        now: Timestamp,
    ) -> Result<BenefitAmount, RegistryError> {
        let record = self.record(address)?;
        let mut account = record.lock().unwrap_or_else(PoisonError::into_inner);

        if !account.is_active() {
            return Err(RegistryError::AccountFrozen(address.to_string()));
        }
        if let Some(last) = account.last_disbursement_at {
            let elapsed = last.elapsed_since(now);
            if elapsed < period_secs {
                return Err(RegistryError::ClaimNotDue {
                    address: address.to_string(),
                    remaining_secs: period_secs - elapsed,
                });
            }
        }

        let amount = account.benefit_amount;
        Self::disburse_locked(&mut account, amount, now)?;
        Ok(amount)
    }

    /// Reverse `amount` of prior disbursement — a ledger correction, not a
    /// payment. Fails if `amount` exceeds the net disbursed total, so the
    /// total can never go below zero.
    pub fn apply_clawback(
        &self,
        address: &Address,
        amount: BenefitAmount,
    ) -> Result<(), RegistryError> {
        let record = self.record(address)?;
        let mut account = record.lock().unwrap_or_else(PoisonError::into_inner);

        match account.disbursed_amount.checked_sub(amount) {
            Some(remaining) => {
                account.disbursed_amount = remaining;
                info!(address = %address, %amount, "clawback applied");
                Ok(())
            }
            None => Err(RegistryError::InsufficientDisbursed {
                requested: amount.raw(),
                disbursed: account.disbursed_amount.raw(),
            }),
        }
    }

    /// Read-only snapshot of an account.
    pub fn get(&self, address: &Address) -> Result<Account, RegistryError> {
        let record = self.record(address)?;
        let account = record.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(account.clone())
    }

    pub fn account_count(&self) -> usize {
        let map = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }

    /// Clone the lock handle for an account so the map read lock is not held
    /// across the mutation.
    fn record(&self, address: &Address) -> Result<Arc<Mutex<Account>>, RegistryError> {
        let map = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        map.get(address)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownAccount(address.to_string()))
    }

    /// Shared disbursement path; caller holds the account lock.
    fn disburse_locked(
        account: &mut Account,
        amount: BenefitAmount,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        if !account.is_active() {
            return Err(RegistryError::AccountFrozen(account.address.to_string()));
        }
        account.disbursed_amount = account
            .disbursed_amount
            .checked_add(amount)
            .ok_or_else(|| RegistryError::AmountOverflow(account.address.to_string()))?;
        account.last_disbursement_at = Some(now);
        debug!(address = %account.address, %amount, "disbursement applied");
        Ok(())
    }
}

impl Default for BeneficiaryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
