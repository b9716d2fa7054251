//! Nullable identity-proof oracle — scripted outcomes, no hardware.

use async_trait::async_trait;
use benefit_types::{
    Address, IdentityProof, IdentityProofOracle, OracleError, ProofMethod, ProofOutcome, Timestamp,
};

enum Behavior {
    /// Resolve with a fresh successful proof for the requested subject.
    Succeed,
    /// Resolve with a fresh failed proof (liveness check did not pass).
    Fail,
    /// Resolve with an error (reader offline, transport failure).
    Unavailable(String),
    /// Never resolve — exercises the engine's bounded wait.
    Hang,
}

/// A scripted oracle for tests.
pub struct NullOracle {
    behavior: Behavior,
}

impl NullOracle {
    pub fn succeeding() -> Self {
        Self {
            behavior: Behavior::Succeed,
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Unavailable(reason.into()),
        }
    }

    pub fn hanging() -> Self {
        Self {
            behavior: Behavior::Hang,
        }
    }
}

#[async_trait]
impl IdentityProofOracle for NullOracle {
    async fn request(
        &self,
        subject: &Address,
        method: ProofMethod,
    ) -> Result<IdentityProof, OracleError> {
        let outcome = match &self.behavior {
            Behavior::Succeed => ProofOutcome::Success,
            Behavior::Fail => ProofOutcome::Failure,
            Behavior::Unavailable(reason) => {
                return Err(OracleError::Unavailable(reason.clone()));
            }
            Behavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!("pending future never resolves");
            }
        };

        Ok(IdentityProof {
            subject: subject.clone(),
            outcome,
            method,
            timestamp: Timestamp::now(),
        })
    }
}
