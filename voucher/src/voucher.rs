//! The voucher type and its signing digest.

use benefit_crypto::blake2b_256_multi;
use benefit_types::{Address, BenefitAmount, Signature, Timestamp};

/// Domain separator for voucher signatures.
const SIGNING_DOMAIN: &[u8] = b"benefit-voucher-v1";

/// A signed, single-use offline claim token.
///
/// The `(beneficiary, issued_at, signature)` tuple uniquely identifies a
/// voucher; the redemption protocol enforces at-most-once per tuple.
#[derive(Clone, Debug, PartialEq)]
pub struct Voucher {
    pub beneficiary: Address,
    pub amount: BenefitAmount,
    pub issued_at: Timestamp,
    /// Produced by the issuing agency's authority over the signing digest.
    pub signature: Signature,
}

impl Voucher {
    /// The Blake2b digest the agency signs, binding
    /// `(beneficiary, amount, issued_at)` under a domain separator.
    pub fn signing_digest(
        beneficiary: &Address,
        amount: BenefitAmount,
        issued_at: Timestamp,
    ) -> [u8; 32] {
        blake2b_256_multi(&[
            SIGNING_DOMAIN,
            beneficiary.as_str().as_bytes(),
            &amount.raw().to_le_bytes(),
            &issued_at.as_secs().to_le_bytes(),
        ])
    }

    pub fn digest(&self) -> [u8; 32] {
        Self::signing_digest(&self.beneficiary, self.amount, self.issued_at)
    }

    /// The identifying tuple used by the redeemed set.
    pub fn redemption_key(&self) -> (Address, u64, [u8; 64]) {
        (
            self.beneficiary.clone(),
            self.issued_at.as_secs(),
            self.signature.0,
        )
    }
}
