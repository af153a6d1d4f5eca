// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for entity store backends.

/// Errors surfaced by an [`EntityStore`](crate::EntityStore) backend.
///
/// Absence of an entity is not an error: lookups return `Ok(None)`. This
/// type covers genuine backend failures, such as lock poisoning in the
/// in-memory store or I/O and serialization failures in persistent
/// implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("Store backend error: {details}")]
    Backend {
        /// Details about the backend failure
        details: String,
    },

    /// Entity (de)serialization failed.
    ///
    /// Only produced by backends that persist entities in a serialized
    /// form; the in-memory store keeps typed values and never returns this.
    #[error("Store serialization error: {details}")]
    Serialization {
        /// Details about the serialization failure
        details: String,
    },
}

impl StoreError {
    /// Create a `Backend` error with details.
    pub fn backend(details: impl Into<String>) -> Self {
        StoreError::Backend {
            details: details.into(),
        }
    }

    /// Create a `Serialization` error with details.
    pub fn serialization(details: impl Into<String>) -> Self {
        StoreError::Serialization {
            details: details.into(),
        }
    }
}
