//! Voucher transport codec — the QR payload encoding.
//!
//! A voucher travels as base64 of a UTF-8 JSON object
//! `{beneficiary, amount, timestamp, signature}` with the signature
//! hex-encoded, suitable for a printed or displayed code scanned by a reader.
//! Encoding is deterministic and reversible; decoding rejects anything that
//! does not match this exact shape and reports failure as a result, never a
//! panic.

use crate::error::VoucherError;
use crate::voucher::Voucher;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use benefit_types::{Address, BenefitAmount, Signature, Timestamp};
use serde::{Deserialize, Serialize};

/// The exact wire shape of the transport payload.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct VoucherWire {
    beneficiary: String,
    amount: u64,
    timestamp: u64,
    signature: String,
}

/// Encode a voucher to its transport string.
pub fn encode(voucher: &Voucher) -> Result<String, VoucherError> {
    let wire = VoucherWire {
        beneficiary: voucher.beneficiary.to_string(),
        amount: voucher.amount.raw(),
        timestamp: voucher.issued_at.as_secs(),
        signature: hex::encode(voucher.signature.as_bytes()),
    };
    let json = serde_json::to_string(&wire)
        .map_err(|e| VoucherError::MalformedPayload(format!("wire serialization: {e}")))?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Decode a transport string back into a voucher.
pub fn decode(transport: &str) -> Result<Voucher, VoucherError> {
    let bytes = STANDARD
        .decode(transport.trim())
        .map_err(|e| VoucherError::MalformedPayload(format!("invalid base64: {e}")))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| VoucherError::MalformedPayload(format!("invalid utf-8: {e}")))?;
    let wire: VoucherWire = serde_json::from_str(&json)
        .map_err(|e| VoucherError::MalformedPayload(format!("invalid json: {e}")))?;

    let sig_bytes = hex::decode(&wire.signature)
        .map_err(|e| VoucherError::MalformedPayload(format!("invalid signature hex: {e}")))?;
    let sig_array: [u8; 64] = sig_bytes.try_into().map_err(|v: Vec<u8>| {
        VoucherError::MalformedPayload(format!("signature must be 64 bytes, got {}", v.len()))
    })?;

    Ok(Voucher {
        beneficiary: Address::new(wire.beneficiary),
        amount: BenefitAmount::new(wire.amount),
        issued_at: Timestamp::new(wire.timestamp),
        signature: Signature(sig_array),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn voucher(beneficiary: &str, amount: u64, secs: u64, sig: [u8; 64]) -> Voucher {
        Voucher {
            beneficiary: Address::new(beneficiary),
            amount: BenefitAmount::new(amount),
            issued_at: Timestamp::new(secs),
            signature: Signature(sig),
        }
    }

    #[test]
    fn round_trip() {
        let v = voucher("BEN1", 1000, 1_700_000_000, [7u8; 64]);
        let decoded = decode(&encode(&v).unwrap()).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn rejects_non_base64() {
        assert!(matches!(
            decode("not b64!!!"),
            Err(VoucherError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_non_json_payload() {
        let garbage = STANDARD.encode(b"just some text");
        assert!(matches!(
            decode(&garbage),
            Err(VoucherError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_missing_field() {
        let payload = STANDARD.encode(br#"{"beneficiary":"BEN1","amount":10,"timestamp":5}"#);
        assert!(matches!(
            decode(&payload),
            Err(VoucherError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_unknown_field() {
        let payload = STANDARD.encode(
            br#"{"beneficiary":"BEN1","amount":10,"timestamp":5,"signature":"00","extra":1}"#,
        );
        assert!(matches!(
            decode(&payload),
            Err(VoucherError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_wrong_signature_length() {
        let payload = STANDARD.encode(
            br#"{"beneficiary":"BEN1","amount":10,"timestamp":5,"signature":"00ff"}"#,
        );
        assert!(matches!(
            decode(&payload),
            Err(VoucherError::MalformedPayload(_))
        ));
    }

    proptest! {
        #[test]
        fn round_trip_any_voucher(
            beneficiary in "[A-Z0-9]{1,58}",
            amount in any::<u64>(),
            secs in any::<u64>(),
            sig in any::<[u8; 64]>(),
        ) {
            let v = voucher(&beneficiary, amount, secs, sig);
            prop_assert_eq!(decode(&encode(&v).unwrap()).unwrap(), v);
        }
    }
}
