//! Foundation types for the Velo item service.
//!
//! This crate provides the record model shared by the store and the HTTP
//! layer: items, plus the users and sessions that sit beside them. Every other Velo crate depends on `velo-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] — Immutable, never-reused item identifier
//! - [`Item`] — One stored record with string-typed mutable fields
//! - [`NewItem`] — Input for the create path
//! - [`ItemPatch`] — Typed partial update projected from an untyped JSON map
//! - [`User`] / [`NewUser`] — Registered user and its create input
//! - [`Session`] — A user's login session

pub mod error;
pub mod id;
pub mod item;
pub mod patch;
pub mod user;

pub use error::{TypeError, TypeResult};
pub use id::{ItemId, SessionId, UserId};
pub use item::{Item, NewItem};
pub use patch::{fields, ItemPatch};
pub use user::{NewUser, Session, User};
