use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("identity proof is stale or the oracle did not respond: {0}")]
    StaleProof(String),

    #[error(transparent)]
    Unauthorized(#[from] benefit_auth::AuthError),

    #[error(transparent)]
    Registry(#[from] benefit_registry::RegistryError),
}
