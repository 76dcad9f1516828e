//! Wrapping store implementations for tests and fault drills.
//!
//! Both wrappers delegate to an inner store, so they can sit in front of
//! the in-memory stores or of each other.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use velo_types::{Item, ItemId, ItemPatch, NewItem, NewUser, Session, SessionId, User, UserId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{ItemStore, SessionStore, UserStore};

/// Counts calls per operation and records a line per update.
///
/// Counters are bumped before delegating, so they reflect attempts, not
/// successes.
#[derive(Debug)]
pub struct SpyItemStore<S> {
    inner: S,
    get_item_calls: AtomicUsize,
    get_items_calls: AtomicUsize,
    update_item_calls: AtomicUsize,
    delete_item_calls: AtomicUsize,
    create_item_calls: AtomicUsize,
    update_log: Mutex<Vec<String>>,
}

impl<S: ItemStore> SpyItemStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            get_item_calls: AtomicUsize::new(0),
            get_items_calls: AtomicUsize::new(0),
            update_item_calls: AtomicUsize::new(0),
            delete_item_calls: AtomicUsize::new(0),
            create_item_calls: AtomicUsize::new(0),
            update_log: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn get_item_calls(&self) -> usize {
        self.get_item_calls.load(Ordering::SeqCst)
    }

    pub fn get_items_calls(&self) -> usize {
        self.get_items_calls.load(Ordering::SeqCst)
    }

    pub fn update_item_calls(&self) -> usize {
        self.update_item_calls.load(Ordering::SeqCst)
    }

    pub fn delete_item_calls(&self) -> usize {
        self.delete_item_calls.load(Ordering::SeqCst)
    }

    pub fn create_item_calls(&self) -> usize {
        self.create_item_calls.load(Ordering::SeqCst)
    }

    /// Copy of the update log, in the order the spy saw the calls.
    pub fn update_log(&self) -> Vec<String> {
        self.update_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record_update(&self, id: &ItemId, patch: &ItemPatch) {
        let line = match &patch.name {
            Some(name) => format!("Updated {id} name to {name}"),
            None => format!("Updated {id} with {} fields", patch.present_fields().len()),
        };
        self.update_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

impl<S: ItemStore> ItemStore for SpyItemStore<S> {
    fn get_item(&self, id: &ItemId) -> StoreResult<Item> {
        self.get_item_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_item(id)
    }

    fn get_items(&self) -> StoreResult<Vec<Item>> {
        self.get_items_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_items()
    }

    fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> StoreResult<Item> {
        self.update_item_calls.fetch_add(1, Ordering::SeqCst);
        self.record_update(id, patch);
        self.inner.update_item(id, patch)
    }

    fn delete_item(&self, id: &ItemId) -> StoreResult<()> {
        self.delete_item_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_item(id)
    }

    fn create_item(&self, new: NewItem) -> StoreResult<Item> {
        self.create_item_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_item(new)
    }
}

/// Fails every operation with [`StoreError::Backend`] while armed.
///
/// Implements each store trait its inner store implements.
#[derive(Debug)]
pub struct FaultyStore<S> {
    inner: S,
    should_error: AtomicBool,
}

impl<S> FaultyStore<S> {
    /// Wrap `inner`, initially passing every call through.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            should_error: AtomicBool::new(false),
        }
    }

    /// Wrap `inner`, initially failing every call.
    pub fn failing(inner: S) -> Self {
        Self {
            inner,
            should_error: AtomicBool::new(true),
        }
    }

    pub fn set_failing(&self, should_error: bool) {
        self.should_error.store(should_error, Ordering::SeqCst);
    }

    pub fn is_failing(&self) -> bool {
        self.should_error.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn check(&self, op: &str) -> StoreResult<()> {
        if self.is_failing() {
            return Err(StoreError::Backend(format!("injected failure in {op}")));
        }
        Ok(())
    }
}

impl<S: ItemStore> ItemStore for FaultyStore<S> {
    fn get_item(&self, id: &ItemId) -> StoreResult<Item> {
        self.check("get_item")?;
        self.inner.get_item(id)
    }

    fn get_items(&self) -> StoreResult<Vec<Item>> {
        self.check("get_items")?;
        self.inner.get_items()
    }

    fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> StoreResult<Item> {
        self.check("update_item")?;
        self.inner.update_item(id, patch)
    }

    fn delete_item(&self, id: &ItemId) -> StoreResult<()> {
        self.check("delete_item")?;
        self.inner.delete_item(id)
    }

    fn create_item(&self, new: NewItem) -> StoreResult<Item> {
        self.check("create_item")?;
        self.inner.create_item(new)
    }
}

impl<S: UserStore> UserStore for FaultyStore<S> {
    fn get_user(&self, id: &UserId) -> StoreResult<User> {
        self.check("get_user")?;
        self.inner.get_user(id)
    }

    fn create_user(&self, new: NewUser) -> StoreResult<User> {
        self.check("create_user")?;
        self.inner.create_user(new)
    }
}

impl<S: SessionStore> SessionStore for FaultyStore<S> {
    fn get_session(&self, id: &SessionId) -> StoreResult<Session> {
        self.check("get_session")?;
        self.inner.get_session(id)
    }

    fn open_session(&self, user_id: &UserId) -> StoreResult<Session> {
        self.check("open_session")?;
        self.inner.open_session(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_accounts, sample_store};
    use crate::memory::InMemoryItemStore;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn spy_counts_every_operation() {
        let spy = SpyItemStore::new(sample_store());
        let id = ItemId::from("item-001");

        spy.get_item(&id).unwrap();
        spy.get_items().unwrap();
        spy.update_item(&id, &ItemPatch::new()).unwrap();
        spy.create_item(NewItem::named("x")).unwrap();
        spy.delete_item(&id).unwrap();
        assert!(spy.get_item(&id).is_err());

        assert_eq!(spy.get_item_calls(), 2);
        assert_eq!(spy.get_items_calls(), 1);
        assert_eq!(spy.update_item_calls(), 1);
        assert_eq!(spy.create_item_calls(), 1);
        assert_eq!(spy.delete_item_calls(), 1);
        assert_eq!(spy.inner().len(), 2);
    }

    #[test]
    fn spy_logs_updates() {
        let spy = SpyItemStore::new(sample_store());
        let id = ItemId::from("item-002");

        spy.update_item(&id, &ItemPatch::new().with_name("Renamed")).unwrap();
        spy.update_item(&id, &ItemPatch::new().with_is_active("false").with_deleted_at("now"))
            .unwrap();

        assert_eq!(
            spy.update_log(),
            vec![
                "Updated item-002 name to Renamed".to_string(),
                "Updated item-002 with 2 fields".to_string(),
            ]
        );
    }

    #[test]
    fn spy_counts_failed_attempts() {
        let spy = SpyItemStore::new(InMemoryItemStore::new());
        let err = spy
            .update_item(&ItemId::from("nope"), &ItemPatch::new().with_name("x"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(spy.update_item_calls(), 1);
    }

    #[test]
    fn concurrent_updates_counted_by_spy() {
        let spy = Arc::new(SpyItemStore::new(sample_store()));
        let id = ItemId::from("item-001");
        let updates = 1000;

        let successes = AtomicUsize::new(0);
        thread::scope(|s| {
            for worker in 0..10 {
                let spy = Arc::clone(&spy);
                let id = id.clone();
                let successes = &successes;
                s.spawn(move || {
                    for i in (worker..updates).step_by(10) {
                        spy.get_item(&id).unwrap();
                        let patch = ItemPatch::new().with_name(format!("Update {i}"));
                        if spy.update_item(&id, &patch).is_ok() {
                            successes.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                });
            }
        });

        assert_eq!(spy.update_item_calls(), updates);
        assert_eq!(successes.load(Ordering::SeqCst), updates);
        assert_eq!(spy.update_log().len(), updates);

        let final_name = spy.get_item(&id).unwrap().name;
        let index: usize = final_name
            .strip_prefix("Update ")
            .and_then(|n| n.parse().ok())
            .expect("final name comes from one of the patches");
        assert!(index < updates);
    }

    #[test]
    fn faulty_store_fails_only_while_armed() {
        let faulty = FaultyStore::failing(sample_store());
        let id = ItemId::from("item-001");

        assert!(matches!(faulty.get_item(&id), Err(StoreError::Backend(_))));
        assert!(matches!(faulty.get_items(), Err(StoreError::Backend(_))));
        assert!(matches!(
            faulty.update_item(&id, &ItemPatch::new().with_name("x")),
            Err(StoreError::Backend(_))
        ));
        assert!(matches!(faulty.delete_item(&id), Err(StoreError::Backend(_))));
        assert!(matches!(
            faulty.create_item(NewItem::named("x")),
            Err(StoreError::Backend(_))
        ));

        faulty.set_failing(false);
        assert!(!faulty.is_failing());
        assert_eq!(faulty.get_item(&id).unwrap().name, "First Test Item");
    }

    #[test]
    fn faulty_store_does_not_mutate_while_armed() {
        let faulty = FaultyStore::new(sample_store());
        let id = ItemId::from("item-001");

        faulty.set_failing(true);
        let _ = faulty.update_item(&id, &ItemPatch::new().with_name("lost"));
        let _ = faulty.delete_item(&id);
        faulty.set_failing(false);

        assert_eq!(faulty.get_item(&id).unwrap().name, "First Test Item");
    }

    #[test]
    fn faulty_store_covers_users_and_sessions() {
        let faulty = FaultyStore::failing(sample_accounts());
        let user = UserId::from("user-001");

        let err = faulty.create_user(NewUser::named("Ada")).unwrap_err();
        assert_eq!(err.to_string(), "store backend error: injected failure in create_user");
        assert!(!err.is_not_found());
        assert!(matches!(faulty.get_user(&user), Err(StoreError::Backend(_))));
        assert!(matches!(
            faulty.get_session(&SessionId::from("session-001")),
            Err(StoreError::Backend(_))
        ));
        assert!(matches!(faulty.open_session(&user), Err(StoreError::Backend(_))));
        assert_eq!(faulty.inner().user_count(), 1);

        faulty.set_failing(false);
        assert_eq!(faulty.get_user(&user).unwrap().name, "Test User");
    }

    #[test]
    fn wrappers_compose_behind_trait_objects() {
        let store: Arc<dyn ItemStore> =
            Arc::new(SpyItemStore::new(FaultyStore::new(sample_store())));
        assert!(store.contains(&ItemId::from("item-002")).unwrap());
        assert!(!store.contains(&ItemId::from("item-999")).unwrap());
    }
}
