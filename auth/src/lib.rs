//! Role-based authorization gate.
//!
//! Every mutating operation declares its required role; the gate checks the
//! caller's identity against data recorded on the target account — an
//! explicit capability check, never caller self-assertion.

pub mod error;
pub mod gate;
pub mod role;

pub use error::AuthError;
pub use gate::AuthorizationGate;
pub use role::Role;
