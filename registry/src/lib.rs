//! Authoritative beneficiary registry.
//!
//! The single source of truth for `address → Account`. Accounts are created
//! only via agency registration and never deleted (only frozen), preserving
//! audit history. Every check-then-mutate runs under that account's lock.

pub mod account;
pub mod error;
pub mod registry;

pub use account::Account;
pub use error::RegistryError;
pub use registry::BeneficiaryRegistry;
