//! User accounts and the persisted session.
//!
//! `login` is the only remote call with a local side effect: on success it
//! writes the session record through the store port, which later calls
//! read for the bearer token. `current_user` and `is_logged_in` are pure
//! reads of that record and never touch the network.

use tracing::instrument;

use fresh_bowl_core::{SessionRecord, User, UserId};

use super::wire::{LoginRequestWire, LoginWire, RegisterWire, UserPatchWire, UserWire};
use super::{ApiClient, ApiError};

/// Fields that can change on an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
}

impl ApiClient {
    /// Register a new user account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on failure; a duplicate email surfaces as a
    /// 400 with the backend's message.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<User, ApiError> {
        let body = RegisterWire {
            nombre: name,
            email,
            password,
            telefono: phone,
        };
        let wire: UserWire = self.post_json("/usuarios/", &body).await?;
        Ok(wire.into())
    }

    /// Authenticate and persist the session record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for remote failures. A store failure while
    /// persisting the record is reported as `ApiError::Parse` so the
    /// caller sees one error channel for "login did not stick".
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        let body = LoginRequestWire { email, password };
        let wire: LoginWire = self.post_json("/usuarios/login", &body).await?;

        let record = SessionRecord {
            user_id: UserId::new(wire.id),
            // The backend's login response may omit the name
            name: wire.name.unwrap_or_else(|| wire.email.clone()),
            email: wire.email,
            phone: wire.phone,
            token: wire.token,
        };

        self.store()
            .save_session(&record)
            .map_err(|e| ApiError::Parse(format!("failed to persist session: {e}")))?;
        Ok(record)
    }

    /// The persisted session record, if any. Never touches the network.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionRecord> {
        self.store().load_session().ok().flatten()
    }

    /// Whether a session record is persisted.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Delete the persisted session record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if the store cannot delete the record.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.store()
            .clear_session()
            .map_err(|e| ApiError::Parse(format!("failed to clear session: {e}")))
    }

    /// Fetch a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure, including 404.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn user(&self, id: &UserId) -> Result<User, ApiError> {
        let wire: UserWire = self.get_json(&format!("/usuarios/{id}"), &[]).await?;
        Ok(wire.into())
    }

    /// Update a user's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        let body = UserPatchWire {
            nombre: patch.name.as_deref(),
            email: patch.email.as_deref(),
            telefono: patch.phone.as_deref(),
        };
        let wire: UserWire = self.put_json(&format!("/usuarios/{id}"), &body).await?;
        Ok(wire.into())
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.delete(&format!("/usuarios/{id}")).await
    }
}
