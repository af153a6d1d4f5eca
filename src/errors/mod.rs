// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the bankscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling
//!   ([`EventDecodeError`], [`StoreError`], [`ProjectionError`])
//! - **Unified error type** ([`IndexingError`]) for callers that don't need
//!   to distinguish between error sources
//!
//! Note what is *not* an error at this layer: an absent account aggregate
//! during a withdrawal is a defined no-op branch of the projector, and an
//! absent entity in the store is `Ok(None)`. The taxonomy here covers
//! caller contract violations (malformed logs), storage backend failures,
//! and checked-arithmetic overflow.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use bankscan::{BankIndexer, EventDecodeError, IndexingError};
//!
//! match indexer.handle_deposit_log(&log) {
//!     Ok(()) => {}
//!     Err(IndexingError::Decode(EventDecodeError::MissingMetadata { field })) => {
//!         eprintln!("upstream delivered a pruned log, missing {field}");
//!     }
//!     Err(e) => eprintln!("indexing failed: {e}"),
//! }
//! ```

mod events;
mod projection;
mod store;

pub use events::EventDecodeError;
pub use projection::ProjectionError;
pub use store::StoreError;

/// Unified error type covering every failure mode of the indexing handlers.
///
/// Module-specific errors convert into this type via `From`, so handler
/// code can use `?` freely.
#[derive(Debug, thiserror::Error)]
pub enum IndexingError {
    /// A log could not be decoded into an event payload.
    #[error("Event decode error: {0}")]
    Decode(#[from] EventDecodeError),

    /// The entity store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The account projection failed.
    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),
}
