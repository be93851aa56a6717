/// Auth store errors. Validation variants carry the exact messages the
/// UI displays inline, so `to_string()` is the display contract.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No account found with this email")]
    AccountNotFound,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("This handle is already taken")]
    HandleTaken,

    #[error("auth store persistence failed: {reason}")]
    PersistenceFailed { reason: String },
}
