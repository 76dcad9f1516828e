//! Storage interfaces: [`ItemStore`], [`UserStore`] and [`SessionStore`].
//!
//! The HTTP layer only ever talks to these traits as objects, so the real
//! stores, call-counting spies and error-injecting wrappers are
//! interchangeable.

use velo_types::{Item, ItemId, ItemPatch, NewItem, NewUser, Session, SessionId, User, UserId};

use crate::error::StoreResult;

/// Storage backend for item records.
///
/// Implementations must be thread-safe (`Send + Sync`). Point operations on
/// a missing id fail with [`StoreError::NotFound`](crate::StoreError::NotFound).
pub trait ItemStore: Send + Sync {
    /// Read one item by id.
    fn get_item(&self, id: &ItemId) -> StoreResult<Item>;

    /// Snapshot of all items in insertion order.
    ///
    /// The returned records are copies; mutating them does not affect the
    /// store.
    fn get_items(&self) -> StoreResult<Vec<Item>>;

    /// Apply `patch` to the item and return the full updated record.
    ///
    /// Locating, patching and reading back happen atomically with respect to
    /// every other store operation. An empty patch succeeds without changes.
    fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> StoreResult<Item>;

    /// Remove an item. The relative order of the remaining items is kept.
    fn delete_item(&self, id: &ItemId) -> StoreResult<()>;

    /// Create an item under a freshly generated id and append it.
    fn create_item(&self, new: NewItem) -> StoreResult<Item>;

    /// Returns `true` if an item with this id exists.
    fn contains(&self, id: &ItemId) -> StoreResult<bool> {
        match self.get_item(id) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Storage backend for registered users.
pub trait UserStore: Send + Sync {
    /// Read one user by id; a miss is [`StoreError::UserNotFound`](crate::StoreError::UserNotFound).
    fn get_user(&self, id: &UserId) -> StoreResult<User>;

    /// Register a user under a freshly generated id.
    fn create_user(&self, new: NewUser) -> StoreResult<User>;
}

/// Storage backend for user sessions.
pub trait SessionStore: Send + Sync {
    /// Read one session by id; a miss is [`StoreError::SessionNotFound`](crate::StoreError::SessionNotFound).
    fn get_session(&self, id: &SessionId) -> StoreResult<Session>;

    /// Open a new session for an existing user.
    fn open_session(&self, user_id: &UserId) -> StoreResult<Session>;
}
