use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::id::ItemId;

/// A single stored record.
///
/// `id` and `created_at` are fixed at creation. Every other field is a plain
/// string and may be overwritten through an [`ItemPatch`](crate::ItemPatch).
/// `is_active` holds a string-encoded boolean and an empty `deleted_at`
/// means "not deleted".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub external_id: String,
    pub org_id: String,
    pub is_active: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub deleted_at: String,
}

impl Item {
    /// Build a record from creation input, stamping the given id and time.
    pub fn from_new(id: ItemId, new: NewItem, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            external_id: new.external_id,
            org_id: new.org_id,
            is_active: new.is_active,
            created_at,
            created_by: new.created_by,
            deleted_at: String::new(),
        }
    }

    /// Returns `true` when `deleted_at` carries a soft-delete marker.
    pub fn is_soft_deleted(&self) -> bool {
        !self.deleted_at.is_empty()
    }
}

/// Input for creating an item.
///
/// Only `name` is required; the remaining fields default to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewItem {
    pub name: String,
    pub external_id: String,
    pub org_id: String,
    pub is_active: String,
    pub created_by: String,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Reject input that would create an unnamed item.
    pub fn validate(&self) -> TypeResult<()> {
        if self.name.is_empty() {
            return Err(TypeError::MissingField { field: "name" });
        }
        Ok(())
    }
}
