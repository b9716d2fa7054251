use crate::role::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("caller {caller} does not hold the {required} role for this operation")]
    Unauthorized { caller: String, required: Role },
}

impl AuthError {
    pub fn unauthorized(caller: &benefit_types::Address, required: Role) -> Self {
        Self::Unauthorized {
            caller: caller.to_string(),
            required,
        }
    }
}
