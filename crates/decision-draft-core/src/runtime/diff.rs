// crates/decision-draft-core/src/runtime/diff.rs
// ============================================================================
// Module: Version Diff
// Description: Id-matched classification of steps across two snapshots.
// Purpose: Report steps added, removed, or modified between draft versions.
// Dependencies: crate::core::{identifiers, step}, serde
// ============================================================================

//! ## Overview
//! Two ordered step snapshots are compared by identifier, never by list
//! position: a reordered step must not read as modified. Steps present
//! only in the newer snapshot are added; steps present only in the older
//! one are removed; steps present in both are modified when their raw
//! lifecycle status differs. The four classes (with unchanged as the
//! implicit fourth) partition the union of identifiers with no overlap.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::StepId;
use crate::core::step::DecisionStep;

// ============================================================================
// SECTION: Version Diff
// ============================================================================

/// Classification of step changes between two snapshots.
///
/// # Invariants
/// - A step id appears in at most one of the three lists.
/// - `added` follows the newer snapshot's order; `removed` follows the
///   older snapshot's order; `modified` follows the newer snapshot's order
///   and carries the newer copy of each step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionDiff {
    /// Steps present in the newer snapshot only.
    pub added: Vec<DecisionStep>,
    /// Steps present in the older snapshot only.
    pub removed: Vec<DecisionStep>,
    /// Steps present in both snapshots whose status differs.
    pub modified: Vec<DecisionStep>,
}

impl VersionDiff {
    /// Computes the diff from an older snapshot to a newer one.
    #[must_use]
    pub fn between(older: &[DecisionStep], newer: &[DecisionStep]) -> Self {
        let older_by_id: BTreeMap<&StepId, &DecisionStep> =
            older.iter().map(|step| (&step.id, step)).collect();
        let newer_by_id: BTreeMap<&StepId, &DecisionStep> =
            newer.iter().map(|step| (&step.id, step)).collect();

        let mut diff = Self::default();
        for step in newer {
            match older_by_id.get(&step.id) {
                None => diff.added.push(step.clone()),
                Some(previous) => {
                    if previous.status != step.status {
                        diff.modified.push(step.clone());
                    }
                }
            }
        }
        for step in older {
            if !newer_by_id.contains_key(&step.id) {
                diff.removed.push(step.clone());
            }
        }
        diff
    }

    /// Returns whether the two snapshots are identical under this diff.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}
