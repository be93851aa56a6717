//! The credential store: one JSON blob keyed by lowercased email.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use promptdeck_core::config::AuthConfig;
use promptdeck_core::constants::DEFAULT_CREDIBILITY_SCORE;
use promptdeck_core::errors::{AuthError, DeckResult};

use crate::avatar::generate_avatar;

/// The signed-in identity handed to the UI. A superset of the public
/// `User` profile fields plus the email the account is keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub bio: String,
    pub credibility_score: i64,
    pub followers: i64,
    pub following: i64,
    pub created_at: DateTime<Utc>,
}

/// Sign-up form payload.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CredentialRecord {
    user: AuthUser,
    password: String,
}

/// Fields a signed-in user may edit on their own profile. Unset fields
/// keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

/// Map of lowercased email to credential record, persisted as a single
/// serialized blob. Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    records: HashMap<String, CredentialRecord>,
}

impl CredentialStore {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::open(&config.store_path)
    }

    /// Load the store, starting empty when the file is missing or the
    /// blob does not parse. A corrupt blob loses the stored accounts but
    /// never blocks sign-up.
    pub fn open(path: &Path) -> Self {
        let records = match std::fs::read_to_string(path) {
            Ok(blob) => match serde_json::from_str(&blob) {
                Ok(records) => records,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt credential blob, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        debug!(path = %path.display(), accounts = records.len(), "credential store opened");
        Self {
            path: path.to_path_buf(),
            records,
        }
    }

    /// Validate an email/password pair against the stored record.
    pub fn login(&self, email: &str, password: &str) -> DeckResult<AuthUser> {
        let record = self
            .records
            .get(&email.to_lowercase())
            .ok_or(AuthError::AccountNotFound)?;
        if record.password != password {
            return Err(AuthError::IncorrectPassword.into());
        }
        Ok(record.user.clone())
    }

    /// Create an account. Email (case-insensitive) and handle
    /// (case-insensitive) must both be unused.
    pub fn register(&mut self, registration: Registration) -> DeckResult<AuthUser> {
        let key = registration.email.to_lowercase();
        if self.records.contains_key(&key) {
            return Err(AuthError::EmailTaken.into());
        }
        let handle_taken = self
            .records
            .values()
            .any(|r| r.user.handle.eq_ignore_ascii_case(&registration.handle));
        if handle_taken {
            return Err(AuthError::HandleTaken.into());
        }

        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email: registration.email,
            avatar: generate_avatar(&registration.name),
            name: registration.name,
            handle: registration.handle,
            bio: String::new(),
            credibility_score: DEFAULT_CREDIBILITY_SCORE,
            followers: 0,
            following: 0,
            created_at: Utc::now(),
        };
        self.records.insert(
            key,
            CredentialRecord {
                user: user.clone(),
                password: registration.password,
            },
        );
        self.save()?;
        Ok(user)
    }

    /// Apply a profile edit to the stored account and persist it.
    pub fn update_profile(&mut self, email: &str, update: ProfileUpdate) -> DeckResult<AuthUser> {
        let record = self
            .records
            .get_mut(&email.to_lowercase())
            .ok_or(AuthError::AccountNotFound)?;
        if let Some(name) = update.name {
            record.user.name = name;
        }
        if let Some(avatar) = update.avatar {
            record.user.avatar = avatar;
        }
        if let Some(bio) = update.bio {
            record.user.bio = bio;
        }
        let user = record.user.clone();
        self.save()?;
        Ok(user)
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn save(&self) -> DeckResult<()> {
        let blob = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, blob).map_err(|e| AuthError::PersistenceFailed {
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
