/// Chat playground errors: missing credentials, API failures, transport.
#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    #[error("{service} API key not configured")]
    MissingCredential { service: String },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("malformed API response: {reason}")]
    MalformedResponse { reason: String },
}
