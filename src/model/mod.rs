//! # Data Model
//!
//! The user record and its wire shapes. A `User` is the sole entity:
//! a store-assigned identifier plus three flat string fields. The
//! identifier serializes as `_id`, matching the document-store
//! convention clients expect.

mod id;
mod validator;

pub use id::{DocumentId, MalformedId, ID_HEX_LEN};
pub use validator::{
    validate_new, validate_user, ValidationError, ValidationResult, EMAIL_MAX, EMAIL_MIN,
    NAME_MAX, NAME_MIN,
};

use serde::{Deserialize, Serialize};

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier; immutable for the record's lifetime.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub country: String,
}

/// Candidate record for creation. The caller never supplies an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub country: String,
}

/// Replacement fields for an update. Only the keys present in the
/// request body are applied; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl UserPatch {
    /// Returns the stored record with every present field replaced.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
            country: self.country.clone().unwrap_or_else(|| user.country.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_with_underscore_id() {
        let user = User {
            id: "5f43ef20c1d4a133e4628181".parse().unwrap(),
            name: "george".to_string(),
            email: "geo@gmail.com".to_string(),
            country: "romania".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], "5f43ef20c1d4a133e4628181");
        assert_eq!(json["name"], "george");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_patch_applies_present_fields_only() {
        let user = User {
            id: DocumentId::generate(),
            name: "george".to_string(),
            email: "geo@gmail.com".to_string(),
            country: "romania".to_string(),
        };
        let patch = UserPatch {
            country: Some("spain".to_string()),
            ..Default::default()
        };

        let updated = patch.apply_to(&user);
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.name, "george");
        assert_eq!(updated.country, "spain");
    }

    #[test]
    fn test_patch_deserializes_partial_body() {
        let patch: UserPatch = serde_json::from_str(r#"{"name":"maria"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("maria"));
        assert_eq!(patch.email, None);
        assert_eq!(patch.country, None);
    }
}
