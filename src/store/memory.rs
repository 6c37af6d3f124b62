//! In-memory document-store client
//!
//! Backs the gateway with an `RwLock`ed vector, which keeps list order
//! stable (insertion order) within an unmodified snapshot. In
//! production this would delegate to a remote document-store client;
//! the trait boundary keeps handlers indifferent to that.

use std::sync::RwLock;

use crate::model::{validate_new, validate_user, DocumentId, NewUser, User, UserPatch};

use super::{StoreError, StoreResult, UserStore};

/// In-memory user collection.
pub struct InMemoryUserStore {
    /// Namespace the client is "connected" to; diagnostics only.
    namespace: String,
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Connect to the given namespace with an empty collection.
    pub fn connect(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        tracing::debug!(namespace = %namespace, "connecting to user store");
        let store = Self {
            namespace,
            users: RwLock::new(Vec::new()),
        };
        tracing::info!(namespace = %store.namespace, "user store connected");
        store
    }

    /// Namespace this client was connected with.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn email_taken(users: &[User], email: &str, exclude: Option<DocumentId>) -> bool {
        users
            .iter()
            .any(|u| u.email == email && Some(u.id) != exclude)
    }
}

impl Drop for InMemoryUserStore {
    fn drop(&mut self) {
        tracing::info!(namespace = %self.namespace, "user store disconnected");
    }
}

impl UserStore for InMemoryUserStore {
    fn find_all(&self) -> StoreResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(users.clone())
    }

    fn find_by_id(&self, id: DocumentId) -> StoreResult<User> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, candidate: NewUser) -> StoreResult<User> {
        validate_new(&candidate)?;

        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        if Self::email_taken(&users, &candidate.email, None) {
            return Err(StoreError::DuplicateEmail(candidate.email));
        }

        let user = User {
            id: DocumentId::generate(),
            name: candidate.name,
            email: candidate.email,
            country: candidate.country,
        };
        users.push(user.clone());
        Ok(user)
    }

    fn update_by_id(&self, id: DocumentId, patch: UserPatch) -> StoreResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let idx = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let updated = patch.apply_to(&users[idx]);
        validate_user(&updated)?;
        if Self::email_taken(&users, &updated.email, Some(id)) {
            return Err(StoreError::DuplicateEmail(updated.email));
        }

        users[idx] = updated.clone();
        Ok(updated)
    }

    fn delete_by_id(&self, id: DocumentId) -> StoreResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let idx = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;
        users.remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, email: &str, country: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            country: country.to_string(),
        }
    }

    fn test_store() -> InMemoryUserStore {
        InMemoryUserStore::connect("userbase_test")
    }

    #[test]
    fn test_insert_assigns_id_and_keeps_fields() {
        let store = test_store();
        let user = store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();

        assert_eq!(user.name, "george");
        assert_eq!(user.email, "geo@gmail.com");
        assert_eq!(user.country, "romania");
        assert_eq!(store.find_by_id(user.id).unwrap(), user);
    }

    #[test]
    fn test_find_all_preserves_insertion_order() {
        let store = test_store();
        store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();
        store
            .insert(candidate("maria", "maria@gmail.com", "spain"))
            .unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "george");
        assert_eq!(all[1].name, "maria");
    }

    #[test]
    fn test_find_by_id_absent_is_not_found() {
        let store = test_store();
        let id: DocumentId = "5f43ef20c1d4a133e4628181".parse().unwrap();
        assert_eq!(store.find_by_id(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let store = test_store();
        store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();

        let err = store
            .insert(candidate("other", "geo@gmail.com", "spain"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail("geo@gmail.com".to_string()));
    }

    #[test]
    fn test_insert_rejects_invalid_fields() {
        let store = test_store();
        let err = store
            .insert(candidate("ab", "geo@gmail.com", "romania"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_update_replaces_present_fields() {
        let store = test_store();
        let user = store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();

        let patch = UserPatch {
            country: Some("spain".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_id(user.id, patch).unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.name, "george");
        assert_eq!(updated.country, "spain");
        assert_eq!(store.find_by_id(user.id).unwrap(), updated);
    }

    #[test]
    fn test_update_absent_is_not_found() {
        let store = test_store();
        let id: DocumentId = "5f43ef20c1d4a133e4628181".parse().unwrap();
        let err = store.update_by_id(id, UserPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound(id));
    }

    #[test]
    fn test_update_keeps_own_email() {
        let store = test_store();
        let user = store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();

        // Re-sending the stored email must not trip the uniqueness check.
        let patch = UserPatch {
            email: Some("geo@gmail.com".to_string()),
            ..Default::default()
        };
        assert!(store.update_by_id(user.id, patch).is_ok());
    }

    #[test]
    fn test_update_rejects_email_collision() {
        let store = test_store();
        store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();
        let maria = store
            .insert(candidate("maria", "maria@gmail.com", "spain"))
            .unwrap();

        let patch = UserPatch {
            email: Some("geo@gmail.com".to_string()),
            ..Default::default()
        };
        let err = store.update_by_id(maria.id, patch).unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail("geo@gmail.com".to_string()));
    }

    #[test]
    fn test_delete_removes_record() {
        let store = test_store();
        let user = store
            .insert(candidate("george", "geo@gmail.com", "romania"))
            .unwrap();

        store.delete_by_id(user.id).unwrap();
        assert_eq!(store.find_by_id(user.id), Err(StoreError::NotFound(user.id)));
        assert_eq!(store.delete_by_id(user.id), Err(StoreError::NotFound(user.id)));
    }
}
