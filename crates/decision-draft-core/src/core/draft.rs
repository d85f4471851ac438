// crates/decision-draft-core/src/core/draft.rs
// ============================================================================
// Module: Decision Draft Snapshot
// Description: Ordered step snapshots with metadata, lookup, and statistics.
// Purpose: Represent one immutable decision draft as supplied by the draft API.
// Dependencies: crate::core::{identifiers, status, step, time}, serde, thiserror
// ============================================================================

//! ## Overview
//! A draft is an ordered sequence of decision steps plus metadata. The core
//! treats every draft as an immutable snapshot per call: no step is mutated
//! in place, and updates surface only as a new draft version. Lookups by an
//! explicitly requested step identifier are the one place that errors; a
//! silent default there would hide a stale-id bug in the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::DraftId;
use crate::core::identifiers::PlanId;
use crate::core::identifiers::PlanVersion;
use crate::core::identifiers::StepId;
use crate::core::status::StepStatus;
use crate::core::step::DecisionStep;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by explicit-id draft lookups.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The requested step identifier is not present in the draft.
    #[error("step not found: {0}")]
    StepNotFound(StepId),
}

// ============================================================================
// SECTION: Draft Metadata
// ============================================================================

/// Metadata describing a decision draft snapshot.
///
/// # Invariants
/// - `decision_count` reflects the authored step count at snapshot time;
///   the core does not recompute or enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMetadata {
    /// Number of decisions in the draft at snapshot time.
    pub decision_count: usize,
    /// Optional author of the draft.
    pub created_by: Option<String>,
    /// Draft creation timestamp.
    pub created_at: Timestamp,
    /// Draft last-update timestamp.
    pub updated_at: Timestamp,
}

// ============================================================================
// SECTION: Decision Draft
// ============================================================================

/// One immutable decision-draft snapshot.
///
/// # Invariants
/// - `steps` preserves authored order; graph inference and layout
///   tie-breaks depend on it.
/// - Step identifiers are unique within the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDraft {
    /// Draft identifier.
    pub draft_id: DraftId,
    /// Plan the draft belongs to.
    pub plan_id: PlanId,
    /// Plan version the draft was generated against.
    pub plan_version: PlanVersion,
    /// Ordered decision steps.
    pub steps: Vec<DecisionStep>,
    /// Draft metadata.
    pub metadata: DraftMetadata,
}

impl DecisionDraft {
    /// Looks up a step by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::StepNotFound`] when the identifier is absent;
    /// the caller asked for a specific step, so a silent default would mask
    /// a stale or mistyped identifier.
    pub fn step(&self, step_id: &StepId) -> Result<&DecisionStep, DraftError> {
        self.steps
            .iter()
            .find(|step| step.id == *step_id)
            .ok_or_else(|| DraftError::StepNotFound(step_id.clone()))
    }

    /// Returns the steps flagged as key decisions, in authored order.
    #[must_use]
    pub fn key_steps(&self) -> Vec<&DecisionStep> {
        self.steps.iter().filter(|step| step.is_key).collect()
    }

    /// Computes aggregate statistics over the draft's steps.
    #[must_use]
    pub fn stats(&self) -> DraftStats {
        let mut stats = DraftStats {
            step_count: self.steps.len(),
            ..DraftStats::default()
        };
        let mut confidence_total = 0.0;
        for step in &self.steps {
            if step.is_key {
                stats.key_step_count += 1;
            }
            match step.status {
                StepStatus::Pending => stats.pending_count += 1,
                StepStatus::Approved => stats.approved_count += 1,
                StepStatus::Rejected => stats.rejected_count += 1,
                StepStatus::Modified => stats.modified_count += 1,
            }
            confidence_total += step.confidence;
        }
        if !self.steps.is_empty() {
            #[allow(
                clippy::cast_precision_loss,
                reason = "Step counts are far below 2^52; the mean is a display heuristic."
            )]
            {
                stats.mean_confidence = confidence_total / self.steps.len() as f64;
            }
        }
        stats
    }
}

// ============================================================================
// SECTION: Draft Statistics
// ============================================================================

/// Aggregate statistics for one draft snapshot.
///
/// # Invariants
/// - Per-status counts sum to `step_count`.
/// - `mean_confidence` is `0.0` for an empty draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftStats {
    /// Total number of steps.
    pub step_count: usize,
    /// Number of steps flagged as key decisions.
    pub key_step_count: usize,
    /// Steps awaiting a user decision.
    pub pending_count: usize,
    /// Steps approved by the user.
    pub approved_count: usize,
    /// Steps rejected by the user.
    pub rejected_count: usize,
    /// Steps modified by the user.
    pub modified_count: usize,
    /// Mean upstream confidence across steps.
    pub mean_confidence: f64,
}
