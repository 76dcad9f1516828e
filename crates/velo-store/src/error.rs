use velo_types::{ItemId, SessionId, UserId};

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No item with this id exists, whether it never did or was deleted.
    #[error("item not found: {id}")]
    NotFound { id: ItemId },

    #[error("user not found: {id}")]
    UserNotFound { id: UserId },

    #[error("session not found: {id}")]
    SessionNotFound { id: SessionId },

    /// Failure reported by a backend other than the in-memory stores.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(id: &ItemId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    pub fn user_not_found(id: &UserId) -> Self {
        Self::UserNotFound { id: id.clone() }
    }

    pub fn session_not_found(id: &SessionId) -> Self {
        Self::SessionNotFound { id: id.clone() }
    }

    /// Returns `true` for a lookup miss of any record kind.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::UserNotFound { .. } | Self::SessionNotFound { .. }
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
