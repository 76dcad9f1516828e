//! Record storage for the Velo item service.
//!
//! The stores are the only shared mutable state in the service. They hold
//! the authoritative [`Item`](velo_types::Item), [`User`](velo_types::User)
//! and [`Session`](velo_types::Session) records and serialize every read and
//! write against concurrent callers.
//!
//! # Storage Backends
//!
//! - [`InMemoryItemStore`] -- `RwLock`-guarded, insertion-ordered [`ItemStore`]
//! - [`InMemoryAccountStore`] -- [`UserStore`] and [`SessionStore`] behind one lock
//! - [`SpyItemStore`] -- wrapper that counts item calls and logs updates
//! - [`FaultyStore`] -- wrapper that fails every call on demand
//!
//! # Design Rules
//!
//! 1. Reads take a shared lock and may run in parallel with each other.
//! 2. Writes take the exclusive lock for the whole locate-apply-return span.
//! 3. No lock is held across I/O; logging happens after the guard drops.
//! 4. Listing returns an owned snapshot in insertion order.
//! 5. Every item lookup miss is `StoreError::NotFound` carrying the missing
//!    id; users and sessions have their own not-found variants.
//! 6. Concurrent writes to one id are last-writer-wins; there is no
//!    version check.

pub mod accounts;
pub mod doubles;
pub mod error;
pub mod fixtures;
pub mod memory;
pub mod traits;

pub use accounts::InMemoryAccountStore;
pub use doubles::{FaultyStore, SpyItemStore};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryItemStore;
pub use traits::{ItemStore, SessionStore, UserStore};
