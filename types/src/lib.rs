//! Fundamental types for the benefit-ledger protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, amounts, timestamps, account status, protocol
//! parameters, identity proofs with their oracle boundary, and key material.

pub mod address;
pub mod amount;
pub mod keys;
pub mod oracle;
pub mod params;
pub mod proof;
pub mod status;
pub mod time;

pub use address::Address;
pub use amount::BenefitAmount;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use oracle::{IdentityProofOracle, OracleError};
pub use params::ProtocolParams;
pub use proof::{IdentityProof, ProofMethod, ProofOutcome};
pub use status::AccountStatus;
pub use time::Timestamp;
