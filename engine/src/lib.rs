//! Disbursement engine.
//!
//! Computes eligibility and executes fund movements: online claims
//! (proof-gated), guardian recovery claims, mass disbursement with
//! per-address outcomes, clawback, and freeze/unfreeze. The authorization
//! gate is consulted before every mutation; all checks precede the single
//! ledger write, so failures leave no partial effects.

pub mod engine;
pub mod error;

pub use engine::{DisbursementEngine, MassDisburseOutcome};
pub use error::EngineError;
