//! Partial updates for [`Item`] records.
//!
//! Clients send patches as untyped JSON objects keyed by record field names
//! (`{"Name": "x", "IsActive": "false"}`). [`ItemPatch`] projects such a map
//! onto one optional slot per mutable field: a recognized key carrying a
//! string fills its slot, anything else is dropped. A JSON `null` body is
//! read as an empty patch. Applying a patch can therefore never fail and
//! never touches `id` or `created_at`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::item::Item;

/// Patch keys recognized by [`ItemPatch`]. Matching is case-sensitive.
pub mod fields {
    pub const NAME: &str = "Name";
    pub const EXTERNAL_ID: &str = "ExternalID";
    pub const ORG_ID: &str = "OrgID";
    pub const IS_ACTIVE: &str = "IsActive";
    pub const CREATED_BY: &str = "CreatedBy";
    pub const DELETED_AT: &str = "DeletedAt";

    pub const ALL: [&str; 6] = [NAME, EXTERNAL_ID, ORG_ID, IS_ACTIVE, CREATED_BY, DELETED_AT];
}

/// A best-effort partial update to an [`Item`].
///
/// Each field is independently present or absent. Deserializing from JSON
/// accepts any object: unknown keys are ignored and recognized keys with a
/// non-string value are skipped, never rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Map<String, Value>>", into = "Map<String, Value>")]
pub struct ItemPatch {
    pub name: Option<String>,
    pub external_id: Option<String>,
    pub org_id: Option<String>,
    pub is_active: Option<String>,
    pub created_by: Option<String>,
    pub deleted_at: Option<String>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_is_active(mut self, is_active: impl Into<String>) -> Self {
        self.is_active = Some(is_active.into());
        self
    }

    pub fn with_deleted_at(mut self, deleted_at: impl Into<String>) -> Self {
        self.deleted_at = Some(deleted_at.into());
        self
    }

    /// Returns `true` if applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Names of the fields this patch will overwrite, in declaration order.
    pub fn present_fields(&self) -> Vec<&'static str> {
        self.slots()
            .into_iter()
            .filter_map(|(key, slot)| slot.map(|_| key))
            .collect()
    }

    /// Overwrite every field present in the patch.
    pub fn apply(&self, item: &mut Item) {
        let targets: [(&Option<String>, &mut String); 6] = [
            (&self.name, &mut item.name),
            (&self.external_id, &mut item.external_id),
            (&self.org_id, &mut item.org_id),
            (&self.is_active, &mut item.is_active),
            (&self.created_by, &mut item.created_by),
            (&self.deleted_at, &mut item.deleted_at),
        ];
        for (value, field) in targets {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
    }

    fn slots(&self) -> [(&'static str, Option<&String>); 6] {
        [
            (fields::NAME, self.name.as_ref()),
            (fields::EXTERNAL_ID, self.external_id.as_ref()),
            (fields::ORG_ID, self.org_id.as_ref()),
            (fields::IS_ACTIVE, self.is_active.as_ref()),
            (fields::CREATED_BY, self.created_by.as_ref()),
            (fields::DELETED_AT, self.deleted_at.as_ref()),
        ]
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

impl From<&Map<String, Value>> for ItemPatch {
    fn from(map: &Map<String, Value>) -> Self {
        Self {
            name: string_field(map, fields::NAME),
            external_id: string_field(map, fields::EXTERNAL_ID),
            org_id: string_field(map, fields::ORG_ID),
            is_active: string_field(map, fields::IS_ACTIVE),
            created_by: string_field(map, fields::CREATED_BY),
            deleted_at: string_field(map, fields::DELETED_AT),
        }
    }
}

impl From<Map<String, Value>> for ItemPatch {
    fn from(map: Map<String, Value>) -> Self {
        Self::from(&map)
    }
}

impl From<Option<Map<String, Value>>> for ItemPatch {
    fn from(map: Option<Map<String, Value>>) -> Self {
        map.map(Self::from).unwrap_or_default()
    }
}

impl From<ItemPatch> for Map<String, Value> {
    fn from(patch: ItemPatch) -> Self {
        patch
            .slots()
            .into_iter()
            .filter_map(|(key, slot)| slot.map(|v| (key.to_string(), Value::String(v.clone()))))
            .collect()
    }
}
