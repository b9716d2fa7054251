use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("account already registered: {0}")]
    DuplicateAccount(String),

    #[error("guardian address must differ from the account address: {0}")]
    InvalidGuardian(String),

    #[error("account not found: {0}")]
    UnknownAccount(String),

    #[error("account is frozen: {0}")]
    AccountFrozen(String),

    #[error("clawback of {requested} exceeds disbursed total {disbursed}")]
    InsufficientDisbursed { requested: u64, disbursed: u64 },

    #[error("entitlement not yet due for {address}: {remaining_secs}s remaining")]
    ClaimNotDue {
        address: String,
        remaining_secs: u64,
    },

    #[error("disbursed total overflow for {0}")]
    AmountOverflow(String),
}
