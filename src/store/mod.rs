//! # Persistence Gateway
//!
//! A thin interface to the document store for the user collection.
//! Handlers only ever talk to the [`UserStore`] trait; the concrete
//! client is constructed by the application assembly and injected as
//! shared state.
//!
//! Identifier parsing happens at the handler boundary, so every id that
//! reaches the gateway is well-formed by construction and not-found is
//! the only id failure a gateway operation can report.

mod memory;

pub use memory::InMemoryUserStore;

use thiserror::Error;

use crate::model::{DocumentId, NewUser, User, UserPatch, ValidationError};

/// Result type for gateway operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Well-formed id with no matching record.
    #[error("no user matches id {0}")]
    NotFound(DocumentId),

    /// Email uniqueness constraint violated at write time.
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    /// Field constraints violated at write time.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client-side failure (e.g. poisoned collection lock).
    #[error("store error: {0}")]
    Internal(String),
}

/// Document-store client for the user collection.
///
/// Single-document operations are atomic at the store level; callers
/// perform no locking of their own.
pub trait UserStore: Send + Sync {
    /// Returns every stored record, in insertion order.
    fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Returns the record with the given id.
    fn find_by_id(&self, id: DocumentId) -> StoreResult<User>;

    /// Validates the candidate, assigns a fresh id, and stores it.
    fn insert(&self, candidate: NewUser) -> StoreResult<User>;

    /// Replaces the fields present in `patch`, preserving the id and
    /// re-checking field constraints and email uniqueness.
    fn update_by_id(&self, id: DocumentId, patch: UserPatch) -> StoreResult<User>;

    /// Permanently removes the record. No soft-delete.
    fn delete_by_id(&self, id: DocumentId) -> StoreResult<()>;
}
