// crates/decision-draft-core/src/core/time.rs
// ============================================================================
// Module: Decision Draft Time Model
// Description: Canonical timestamp representations for steps and replay frames.
// Purpose: Provide deterministic, replayable time values across draft records.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Draft snapshots carry explicit time values on every step so replay stays
//! deterministic. The core never reads wall-clock time directly; the upstream
//! draft API supplies timestamps with the snapshot.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Canonical timestamp used on decision steps and replay frames.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads wall-clock time.
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Timestamp {
    /// Unix epoch milliseconds.
    UnixMillis(i64),
    /// Monotonic logical time value.
    Logical(u64),
}

impl Timestamp {
    /// Returns the timestamp as unix milliseconds when available.
    #[must_use]
    pub const fn as_unix_millis(&self) -> Option<i64> {
        match self {
            Self::UnixMillis(value) => Some(*value),
            Self::Logical(_) => None,
        }
    }

    /// Returns the timestamp as logical time when available.
    #[must_use]
    pub const fn as_logical(&self) -> Option<u64> {
        match self {
            Self::UnixMillis(_) => None,
            Self::Logical(value) => Some(*value),
        }
    }

    /// Returns the signed millisecond span from `earlier` to `self`.
    ///
    /// Only defined when both values are unix milliseconds; mixed or logical
    /// values yield `None`.
    #[must_use]
    pub const fn millis_since(&self, earlier: &Self) -> Option<i64> {
        match (self, earlier) {
            (Self::UnixMillis(later), Self::UnixMillis(earlier)) => {
                Some(later.saturating_sub(*earlier))
            }
            _ => None,
        }
    }
}
