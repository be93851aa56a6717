//! Credential store round-trips over a real temp file.

use tempfile::TempDir;

use promptdeck_auth::{CredentialStore, ProfileUpdate, Registration};

fn registration(email: &str, handle: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: "hunter2".to_string(),
        name: "Test User".to_string(),
        handle: handle.to_string(),
    }
}

fn store_in(dir: &TempDir) -> CredentialStore {
    CredentialStore::open(&dir.path().join("users.json"))
}

#[test]
fn register_then_login_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    let created = store.register(registration("ada@example.com", "ada")).unwrap();
    assert_eq!(created.credibility_score, 50);
    assert_eq!(created.followers, 0);
    assert!(created.avatar.contains("ui-avatars.com"));

    let logged_in = store.login("ada@example.com", "hunter2").unwrap();
    assert_eq!(logged_in, created);
}

#[test]
fn login_failures_carry_the_inline_messages() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.register(registration("ada@example.com", "ada")).unwrap();

    let err = store.login("nobody@example.com", "hunter2").unwrap_err();
    assert_eq!(err.to_string(), "No account found with this email");

    let err = store.login("ada@example.com", "wrong").unwrap_err();
    assert_eq!(err.to_string(), "Incorrect password");
}

#[test]
fn email_keys_are_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.register(registration("Ada@Example.COM", "ada")).unwrap();

    assert!(store.login("ada@example.com", "hunter2").is_ok());

    let err = store
        .register(registration("ADA@example.com", "ada2"))
        .unwrap_err();
    assert_eq!(err.to_string(), "An account with this email already exists");
}

#[test]
fn duplicate_handle_is_rejected_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.register(registration("ada@example.com", "ada")).unwrap();

    let err = store
        .register(registration("grace@example.com", "ADA"))
        .unwrap_err();
    assert_eq!(err.to_string(), "This handle is already taken");
}

#[test]
fn accounts_survive_a_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let mut store = CredentialStore::open(&path);
    store.register(registration("ada@example.com", "ada")).unwrap();
    drop(store);

    let reopened = CredentialStore::open(&path);
    assert_eq!(reopened.len(), 1);
    assert!(reopened.login("ada@example.com", "hunter2").is_ok());
}

#[test]
fn corrupt_blob_starts_empty_instead_of_failing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut store = CredentialStore::open(&path);
    assert!(store.is_empty());
    assert!(store.register(registration("ada@example.com", "ada")).is_ok());
}

#[test]
fn profile_update_persists_changed_fields_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let mut store = CredentialStore::open(&path);
    let created = store.register(registration("ada@example.com", "ada")).unwrap();

    let updated = store
        .update_profile(
            "ada@example.com",
            ProfileUpdate {
                bio: Some("Analyst of engines".to_string()),
                ..ProfileUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(updated.bio, "Analyst of engines");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.avatar, created.avatar);

    let reopened = CredentialStore::open(&path);
    let logged_in = reopened.login("ada@example.com", "hunter2").unwrap();
    assert_eq!(logged_in.bio, "Analyst of engines");
}

#[test]
fn missing_account_cannot_be_updated() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    let err = store
        .update_profile("ghost@example.com", ProfileUpdate::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "No account found with this email");
}
