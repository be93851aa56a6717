use promptdeck_core::errors::*;

#[test]
fn deck_error_prompt_not_found_carries_id() {
    let err = DeckError::PromptNotFound { id: "p-404".into() };
    assert!(
        err.to_string().contains("p-404"),
        "error should contain the prompt id"
    );
}

#[test]
fn deck_error_config_error_carries_message() {
    let err = DeckError::ConfigError("storage.db_path is required".into());
    assert!(err.to_string().contains("storage.db_path"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_deck_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let deck_err: DeckError = storage_err.into();
    assert!(matches!(deck_err, DeckError::StorageError(_)));
    assert!(deck_err.to_string().contains("disk full"));
}

#[test]
fn playground_error_converts_to_deck_error() {
    let pg_err = PlaygroundError::MissingCredential {
        service: "OpenRouter".into(),
    };
    let deck_err: DeckError = pg_err.into();
    assert!(matches!(deck_err, DeckError::PlaygroundError(_)));
    assert!(deck_err.to_string().contains("OpenRouter"));
}

#[test]
fn auth_error_converts_to_deck_error() {
    let auth_err = AuthError::HandleTaken;
    let deck_err: DeckError = auth_err.into();
    assert!(matches!(deck_err, DeckError::AuthError(_)));
}

#[test]
fn serialization_error_converts_to_deck_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let deck_err: DeckError = json_err.into();
    assert!(matches!(deck_err, DeckError::SerializationError(_)));
}

// --- Sub-error variants carry context ---

#[test]
fn playground_api_error_carries_status_and_message() {
    let err = PlaygroundError::ApiError {
        status: 429,
        message: "rate limited".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("429"));
    assert!(msg.contains("rate limited"));
}

#[test]
fn auth_errors_render_the_exact_ui_messages() {
    assert_eq!(
        AuthError::AccountNotFound.to_string(),
        "No account found with this email"
    );
    assert_eq!(AuthError::IncorrectPassword.to_string(), "Incorrect password");
    assert_eq!(
        AuthError::EmailTaken.to_string(),
        "An account with this email already exists"
    );
    assert_eq!(
        AuthError::HandleTaken.to_string(),
        "This handle is already taken"
    );
}
