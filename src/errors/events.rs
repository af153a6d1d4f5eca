// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event decoding.

/// Errors that can occur when decoding an RPC log into an event payload.
///
/// Both variants are caller contract violations: the upstream dispatcher is
/// expected to deliver fully-populated logs that match the SimpleBank event
/// signatures. There is no retry or recovery at this layer; the upstream
/// re-delivery policy governs what happens next.
#[derive(Debug, thiserror::Error)]
pub enum EventDecodeError {
    /// The log data does not match the expected event signature.
    #[error("Failed to decode event: {details}")]
    DecodeFailed {
        /// Details about why the decode failed
        details: String,
    },

    /// The log is missing block or transaction metadata.
    ///
    /// The deterministic event id and the record entities need the
    /// transaction hash, log index, block number, and block timestamp; a
    /// log without them cannot be indexed.
    #[error("Missing log metadata: {field}")]
    MissingMetadata {
        /// Name of the missing field
        field: &'static str,
    },
}

impl EventDecodeError {
    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(details: impl Into<String>) -> Self {
        EventDecodeError::DecodeFailed {
            details: details.into(),
        }
    }

    /// Create a `MissingMetadata` error for a specific field.
    pub const fn missing_metadata(field: &'static str) -> Self {
        EventDecodeError::MissingMetadata { field }
    }
}
