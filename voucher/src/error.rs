use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoucherError {
    #[error("voucher signature is not valid under the agency authority")]
    InvalidSignature,

    #[error("voucher expired: issued at {issued_at}s, ttl {ttl_secs}s, now {now}s")]
    VoucherExpired {
        issued_at: u64,
        ttl_secs: u64,
        now: u64,
    },

    #[error("voucher has already been redeemed")]
    VoucherAlreadyRedeemed,

    #[error("malformed voucher payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Unauthorized(#[from] benefit_auth::AuthError),

    #[error(transparent)]
    Registry(#[from] benefit_registry::RegistryError),
}
