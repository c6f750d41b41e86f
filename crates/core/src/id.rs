//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of an inventory item.
///
/// Positive, assigned from a monotonically increasing counter and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    /// The first id handed out by an empty store.
    pub const FIRST: ItemId = ItemId(NonZeroU64::MIN);

    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// The id following this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Parse an integer route segment.
    ///
    /// Plain decimal digits only (no sign, no whitespace). A well-formed
    /// segment that cannot name an item (`0`, or beyond `u64`) yields
    /// `Ok(None)`; anything else is `InvalidId`.
    pub fn parse_segment(s: &str) -> DomainResult<Option<Self>> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!("ItemId: {s:?}")));
        }
        Ok(s.parse::<u64>().ok().and_then(ItemId::new))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
