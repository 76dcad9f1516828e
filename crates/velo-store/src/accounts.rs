//! In-memory user and session store.
//!
//! Users and sessions share one lock so that opening a session and checking
//! that its user exists happen as a single step.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, warn};
use velo_types::{NewUser, Session, SessionId, User, UserId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{SessionStore, UserStore};

#[derive(Default)]
struct Accounts {
    users: HashMap<UserId, User>,
    sessions: HashMap<SessionId, Session>,
}

/// An in-memory implementation of [`UserStore`] and [`SessionStore`].
pub struct InMemoryAccountStore {
    inner: RwLock<Accounts>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Accounts::default()),
        }
    }

    /// Create a store pre-populated with users and their sessions.
    ///
    /// Duplicate ids keep the first record. Sessions whose user is not among
    /// `users` are dropped.
    pub fn from_records(
        users: impl IntoIterator<Item = User>,
        sessions: impl IntoIterator<Item = Session>,
    ) -> Self {
        let mut accounts = Accounts::default();
        for user in users {
            if accounts.users.contains_key(&user.id) {
                warn!(id = %user.id, "dropping seed user with duplicate id");
                continue;
            }
            accounts.users.insert(user.id.clone(), user);
        }
        for session in sessions {
            if !accounts.users.contains_key(&session.user_id) {
                warn!(id = %session.id, user = %session.user_id, "dropping seed session for unknown user");
                continue;
            }
            if accounts.sessions.contains_key(&session.id) {
                warn!(id = %session.id, "dropping seed session with duplicate id");
                continue;
            }
            accounts.sessions.insert(session.id.clone(), session);
        }
        Self {
            inner: RwLock::new(accounts),
        }
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    pub fn session_count(&self) -> usize {
        self.read().sessions.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Accounts> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Accounts> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryAccountStore {
    fn get_user(&self, id: &UserId) -> StoreResult<User> {
        self.read()
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::user_not_found(id))
    }

    fn create_user(&self, new: NewUser) -> StoreResult<User> {
        let user = User::from_new(UserId::generate(), new, Utc::now());
        {
            let mut accounts = self.write();
            if accounts.users.contains_key(&user.id) {
                return Err(StoreError::Backend(format!("generated duplicate id {}", user.id)));
            }
            accounts.users.insert(user.id.clone(), user.clone());
        }
        debug!(id = %user.id, "user created");
        Ok(user)
    }
}

impl SessionStore for InMemoryAccountStore {
    fn get_session(&self, id: &SessionId) -> StoreResult<Session> {
        self.read()
            .sessions
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::session_not_found(id))
    }

    fn open_session(&self, user_id: &UserId) -> StoreResult<Session> {
        let session = Session {
            id: SessionId::generate(),
            user_id: user_id.clone(),
            created_at: Utc::now(),
        };
        {
            let mut accounts = self.write();
            if !accounts.users.contains_key(user_id) {
                return Err(StoreError::user_not_found(user_id));
            }
            accounts.sessions.insert(session.id.clone(), session.clone());
        }
        debug!(id = %session.id, user = %user_id, "session opened");
        Ok(session)
    }
}

impl std::fmt::Debug for InMemoryAccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let accounts = self.read();
        f.debug_struct("InMemoryAccountStore")
            .field("user_count", &accounts.users.len())
            .field("session_count", &accounts.sessions.len())
            .finish()
    }
}
