//! Sample records used by `velo serve --seed` and by tests across the
//! workspace.

use chrono::Utc;
use velo_types::{Item, ItemId, NewItem, NewUser, Session, SessionId, User, UserId};

use crate::accounts::InMemoryAccountStore;
use crate::memory::InMemoryItemStore;

/// The two canonical sample items, `item-001` and `item-002`.
pub fn sample_items() -> Vec<Item> {
    let now = Utc::now();
    vec![
        Item::from_new(
            ItemId::new("item-001"),
            NewItem {
                name: "First Test Item".into(),
                external_id: "ext-001".into(),
                org_id: "org-123".into(),
                is_active: "true".into(),
                created_by: "test-user".into(),
            },
            now,
        ),
        Item::from_new(
            ItemId::new("item-002"),
            NewItem {
                name: "Second Test Item".into(),
                external_id: "ext-002".into(),
                org_id: "org-123".into(),
                is_active: "true".into(),
                created_by: "test-user".into(),
            },
            now,
        ),
    ]
}

/// An in-memory store seeded with [`sample_items`].
pub fn sample_store() -> InMemoryItemStore {
    InMemoryItemStore::from_items(sample_items())
}

/// The sample user `user-001`.
pub fn sample_users() -> Vec<User> {
    vec![User::from_new(UserId::new("user-001"), NewUser::named("Test User"), Utc::now())]
}

/// The sample session `session-001`, owned by `user-001`.
pub fn sample_sessions() -> Vec<Session> {
    vec![Session {
        id: SessionId::new("session-001"),
        user_id: UserId::new("user-001"),
        created_at: Utc::now(),
    }]
}

/// An account store seeded with [`sample_users`] and [`sample_sessions`].
pub fn sample_accounts() -> InMemoryAccountStore {
    InMemoryAccountStore::from_records(sample_users(), sample_sessions())
}
