//! Offline claim vouchers.
//!
//! A voucher is a signed, single-use claim token bound to a beneficiary and
//! amount, issued online by the agency and redeemed later — a constrained
//! asynchronous two-phase commit over an untrusted channel. The codec turns
//! vouchers into a compact transport string (the QR payload); the protocol
//! enforces signature integrity, expiry, and at-most-once redemption.

pub mod codec;
pub mod error;
pub mod protocol;
pub mod voucher;

pub use codec::{decode, encode};
pub use error::VoucherError;
pub use protocol::VoucherProtocol;
pub use voucher::Voucher;
