//! String identifiers for stored records.
//!
//! Each record kind gets its own newtype so an item id can never be passed
//! where a user or session id is expected. Ids are assigned once at creation
//! and never altered or reused. Freshly created records get a time-ordered
//! UUID v7; seeded fixtures may carry any string.

use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new time-ordered identifier (UUID v7).
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a stored item.
    ItemId
);

string_id!(
    /// Identifier of a registered user.
    UserId
);

string_id!(
    /// Identifier of a user session.
    SessionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn id_display_is_raw_string() {
        let id = ItemId::from("item-001");
        assert_eq!(id.to_string(), "item-001");
        assert_eq!(format!("{id:?}"), "ItemId(item-001)");
    }

    #[test]
    fn debug_names_the_kind() {
        assert_eq!(format!("{:?}", UserId::from("user-001")), "UserId(user-001)");
        assert_eq!(format!("{:?}", SessionId::from("session-001")), "SessionId(session-001)");
    }

    #[test]
    fn ids_serialize_as_bare_strings() {
        let json = serde_json::to_string(&UserId::new("user-001")).unwrap();
        assert_eq!(json, "\"user-001\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "user-001");
    }
}
