//! The disbursement engine.

use crate::error::EngineError;
use benefit_auth::{AuthorizationGate, Role};
use benefit_registry::BeneficiaryRegistry;
use benefit_types::{
    AccountStatus, Address, BenefitAmount, IdentityProof, IdentityProofOracle, ProofMethod,
    ProtocolParams, Timestamp,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Per-address result of a mass disbursement run.
///
/// A failure on one address is recorded here and never aborts the batch —
/// mass runs target many independent accounts.
#[derive(Debug)]
pub struct MassDisburseOutcome {
    pub address: Address,
    pub result: Result<BenefitAmount, EngineError>,
}

/// Computes eligibility and executes fund movements against the registry.
pub struct DisbursementEngine {
    registry: Arc<BeneficiaryRegistry>,
    gate: Arc<AuthorizationGate>,
    params: ProtocolParams,
}

impl DisbursementEngine {
    pub fn new(
        registry: Arc<BeneficiaryRegistry>,
        gate: Arc<AuthorizationGate>,
        params: ProtocolParams,
    ) -> Self {
        Self {
            registry,
            gate,
            params,
        }
    }

    /// Online claim by the beneficiary, gated on a fresh successful proof.
    ///
    /// All checks precede the mutation; the entitlement payout itself is a
    /// single check-then-mutate under the account lock.
    pub fn claim_online(
        &self,
        caller: &Address,
        beneficiary: &Address,
        proof: &IdentityProof,
        now: Timestamp,
    ) -> Result<BenefitAmount, EngineError> {
        let account = self.registry.get(beneficiary)?;
        self.gate.require_beneficiary(caller, &account.address)?;
        self.validate_proof(caller, proof, now, Role::Beneficiary)?;

        let paid = self
            .registry
            .claim_entitlement(beneficiary, self.params.claim_period_secs, now)?;
        info!(beneficiary = %beneficiary, amount = %paid, "online claim disbursed");
        Ok(paid)
    }

    /// Recovery claim by the account's guardian on behalf of an incapacitated
    /// beneficiary. The proof must be tagged for the guardian, not the
    /// beneficiary.
    pub fn claim_recovery(
        &self,
        guardian: &Address,
        beneficiary: &Address,
        proof: &IdentityProof,
        now: Timestamp,
    ) -> Result<BenefitAmount, EngineError> {
        let account = self.registry.get(beneficiary)?;
        self.gate
            .require_guardian(guardian, &account.guardian_address)?;
        self.validate_proof(guardian, proof, now, Role::Guardian)?;

        let paid = self
            .registry
            .claim_entitlement(beneficiary, self.params.claim_period_secs, now)?;
        info!(
            beneficiary = %beneficiary,
            guardian = %guardian,
            amount = %paid,
            "recovery claim disbursed"
        );
        Ok(paid)
    }

    /// Self-claim with the proof fetched from the oracle.
    ///
    /// The oracle round trip happens before any account lock is touched, with
    /// a bounded wait; a call that does not resolve in time surfaces as
    /// [`EngineError::StaleProof`], never an unbounded hang. Freshness is
    /// validated against the post-await clock before committing. Abandoning
    /// the future before the claim commits has no side effects.
    pub async fn claim_with_oracle(
        &self,
        beneficiary: &Address,
        oracle: &dyn IdentityProofOracle,
        method: ProofMethod,
    ) -> Result<BenefitAmount, EngineError> {
        let wait = Duration::from_secs(self.params.oracle_timeout_secs);
        let proof = match tokio::time::timeout(wait, oracle.request(beneficiary, method)).await {
            Ok(Ok(proof)) => proof,
            Ok(Err(e)) => {
                warn!(beneficiary = %beneficiary, error = %e, "oracle request failed");
                return Err(EngineError::StaleProof(e.to_string()));
            }
            Err(_) => {
                warn!(beneficiary = %beneficiary, "oracle request timed out");
                return Err(EngineError::StaleProof(format!(
                    "oracle did not respond within {}s",
                    self.params.oracle_timeout_secs
                )));
            }
        };

        self.claim_online(beneficiary, beneficiary, &proof, Timestamp::now())
    }

    /// Disburse to each address independently, in the given order, under
    /// Agency authority (the agency's sign-off stands in for a per-subject
    /// proof). Per-address failures are recorded in the outcome list; no
    /// failure aborts the batch or touches another account's state.
    pub fn mass_disburse(
        &self,
        caller: &Address,
        addresses: &[Address],
        now: Timestamp,
    ) -> Result<Vec<MassDisburseOutcome>, EngineError> {
        self.gate.require_agency(caller)?;

        let outcomes: Vec<MassDisburseOutcome> = addresses
            .iter()
            .map(|address| {
                let result = self
                    .registry
                    .claim_entitlement(address, self.params.claim_period_secs, now)
                    .map_err(EngineError::from);
                MassDisburseOutcome {
                    address: address.clone(),
                    result,
                }
            })
            .collect();

        let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
        info!(
            total = outcomes.len(),
            succeeded,
            failed = outcomes.len() - succeeded,
            "mass disbursement run complete"
        );
        Ok(outcomes)
    }

    /// Agency-initiated ledger correction. Never a reverse payment — the
    /// external ledger collaborator owns any settlement mechanics.
    pub fn clawback(
        &self,
        caller: &Address,
        target: &Address,
        amount: BenefitAmount,
    ) -> Result<(), EngineError> {
        self.gate.require_agency(caller)?;
        self.registry.apply_clawback(target, amount)?;
        Ok(())
    }

    /// Idempotent freeze under Agency authority.
    pub fn freeze(&self, caller: &Address, target: &Address) -> Result<(), EngineError> {
        self.gate.require_agency(caller)?;
        self.registry.set_status(target, AccountStatus::Frozen)?;
        Ok(())
    }

    /// Idempotent unfreeze under Agency authority.
    pub fn unfreeze(&self, caller: &Address, target: &Address) -> Result<(), EngineError> {
        self.gate.require_agency(caller)?;
        self.registry.set_status(target, AccountStatus::Active)?;
        Ok(())
    }

    /// Validate an untrusted proof: subject binding, outcome, freshness.
    fn validate_proof(
        &self,
        expected_subject: &Address,
        proof: &IdentityProof,
        now: Timestamp,
        required: Role,
    ) -> Result<(), EngineError> {
        if proof.subject != *expected_subject || !proof.is_success() {
            // A proof for someone else, or a failed liveness check: the
            // caller's identity was not proven.
            return Err(benefit_auth::AuthError::unauthorized(expected_subject, required).into());
        }
        if !proof.is_fresh(self.params.proof_freshness_window_secs, now) {
            return Err(EngineError::StaleProof(format!(
                "proof from {} is older than {}s at {}",
                proof.timestamp, self.params.proof_freshness_window_secs, now
            )));
        }
        Ok(())
    }
}
