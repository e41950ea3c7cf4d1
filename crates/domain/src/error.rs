//! Domain error types.

use thiserror::Error;

/// Errors raised while resolving related rows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A row requested by id does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A row exists but a row it references (or is referenced by) is absent.
    #[error("{entity} {id} has no associated {missing}")]
    MissingAssociation {
        entity: &'static str,
        id: i64,
        missing: &'static str,
    },
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn missing(entity: &'static str, id: i64, missing: &'static str) -> Self {
        Self::MissingAssociation {
            entity,
            id,
            missing,
        }
    }
}
