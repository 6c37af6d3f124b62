//! Response formatting
//!
//! List and single-record responses are the serialized records
//! themselves; only deletion gets a confirmation envelope.

use serde::Serialize;

use crate::model::DocumentId;

/// Delete confirmation
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: DocumentId,
}

impl DeleteResponse {
    pub fn success(id: DocumentId) -> Self {
        Self { deleted: true, id }
    }
}
