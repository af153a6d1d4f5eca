// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Deterministic entity identifiers.
//!
//! Both id types normalize their input in the constructor so that key
//! stability is a property of the type, not caller discipline: the same
//! event (or address) always produces the same store key.

use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

/// Deterministic identifier for an event record.
///
/// Composed as `<0x-lowercase-tx-hash>-<log-index>`, which is unique within
/// a block and stable across re-delivery of the same event. Re-writing a
/// record under its id is therefore an idempotent overwrite.
///
/// # Examples
///
/// ```
/// use alloy_primitives::b256;
/// use bankscan::EventId;
///
/// let tx = b256!("00000000000000000000000000000000000000000000000000000000000000ab");
/// let id = EventId::new(tx, 3);
/// assert!(id.as_str().starts_with("0x"));
/// assert!(id.as_str().ends_with("-3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Build the deterministic id for the event at `log_index` of the
    /// transaction `transaction_hash`.
    pub fn new(transaction_hash: TxHash, log_index: u64) -> Self {
        Self(format!("{transaction_hash:#x}-{log_index}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for an account aggregate.
///
/// The 0x-prefixed lowercase hex rendering of the actor address. Lowercase
/// (rather than EIP-55 checksummed) so that the same address always maps to
/// the same aggregate regardless of how the upstream source cased it.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use bankscan::AccountId;
///
/// let id = AccountId::from_address(address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
/// assert_eq!(id.as_str(), "0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Derive the aggregate id from an actor address.
    pub fn from_address(address: Address) -> Self {
        Self(format!("{address:#x}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Address> for AccountId {
    fn from(address: Address) -> Self {
        Self::from_address(address)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
