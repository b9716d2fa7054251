//! The identity-proof oracle boundary.
//!
//! The oracle represents a hardware or network round trip (biometric reader,
//! document scanner, hardware token). The core never inspects proof
//! internals — only outcome, subject, method, and timestamp — and treats the
//! result as untrusted input to be validated before any ledger mutation.

use crate::address::Address;
use crate::proof::{IdentityProof, ProofMethod};
use async_trait::async_trait;
use thiserror::Error;

/// Produces a freshness-bounded identity assertion for a subject.
///
/// Any concrete biometric, document-scan, or hardware-token implementation is
/// swappable behind this trait.
#[async_trait]
pub trait IdentityProofOracle: Send + Sync {
    async fn request(
        &self,
        subject: &Address,
        method: ProofMethod,
    ) -> Result<IdentityProof, OracleError>;
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("identity oracle unavailable: {0}")]
    Unavailable(String),
}
