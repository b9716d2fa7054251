//! Cryptographic primitives for the benefit-ledger protocol.
//!
//! Ed25519 for the agency's voucher-signing authority, Blake2b-256 for
//! digests. Key types live in `benefit-types`; this crate holds the
//! operations.

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
