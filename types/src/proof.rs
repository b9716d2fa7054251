//! Identity proof types — the boundary contract with the proof oracle.
//!
//! The core never inspects proof internals. The only guarantees a proof
//! carries are its outcome, its timestamp (freshness), the claimed method,
//! and the subject it was produced for.

use crate::address::Address;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a liveness/identity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofOutcome {
    Success,
    Failure,
}

/// The method the oracle claims to have used.
///
/// Any concrete biometric, document-scan, or hardware-token implementation
/// is swappable behind the oracle interface; the core only records which
/// method was claimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofMethod {
    Fingerprint,
    FaceScan,
    DocumentScan,
    HardwareToken,
}

impl fmt::Display for ProofMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fingerprint => write!(f, "fingerprint"),
            Self::FaceScan => write!(f, "face_scan"),
            Self::DocumentScan => write!(f, "document_scan"),
            Self::HardwareToken => write!(f, "hardware_token"),
        }
    }
}

/// An opaque, time-stamped assertion that `subject` passed an identity check.
///
/// Treated as untrusted input: the engine validates outcome, subject, and
/// freshness before any ledger mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProof {
    pub subject: Address,
    pub outcome: ProofOutcome,
    pub method: ProofMethod,
    pub timestamp: Timestamp,
}

impl IdentityProof {
    pub fn is_success(&self) -> bool {
        self.outcome == ProofOutcome::Success
    }

    /// Whether the proof is within the freshness window relative to `now`.
    pub fn is_fresh(&self, window_secs: u64, now: Timestamp) -> bool {
        self.timestamp.elapsed_since(now) <= window_secs
    }
}
