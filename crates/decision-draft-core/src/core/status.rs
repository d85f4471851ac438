// crates/decision-draft-core/src/core/status.rs
// ============================================================================
// Module: Decision Draft Status Normalization
// Description: Canonical four-state gate status and legacy vocabulary adapters.
// Purpose: Map heterogeneous lifecycle tokens onto one canonical approval model.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Several lifecycle vocabularies coexist upstream: free-form legacy gate
//! tokens (`PASSED`, `WARN`, `BLOCKED`, ...), the four-value pipeline-stage
//! enum, and the raw decision-step lifecycle. This module collapses all of
//! them onto the canonical [`GateStatus`] four-state model. Every mapping is
//! total: unrecognized input resolves to [`GateStatus::NeedConfirm`] rather
//! than erroring, so an unknown status can never silently read as allowed.
//! The mappings are not injective and round-tripping canonical to legacy is
//! out of scope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Canonical Gate Status
// ============================================================================

/// Canonical four-state approval status for decision gating.
///
/// # Invariants
/// - Variants are stable for serialization and presentation labeling.
/// - Every upstream vocabulary maps onto exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateStatus {
    /// Decision is allowed as-is.
    Allow,
    /// Decision requires user confirmation before proceeding.
    NeedConfirm,
    /// Decision should be replaced with a suggested alternative.
    SuggestReplace,
    /// Decision is rejected.
    Reject,
}

impl GateStatus {
    /// Returns the stable canonical label for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::NeedConfirm => "NEED_CONFIRM",
            Self::SuggestReplace => "SUGGEST_REPLACE",
            Self::Reject => "REJECT",
        }
    }

    /// Normalizes a free-form lifecycle token onto the canonical status.
    ///
    /// The token is trimmed and ASCII-uppercased before lookup, so
    /// `"pass"`, `" Pass "`, and `"PASS"` all resolve identically. Tokens
    /// outside every alias table resolve to [`Self::NeedConfirm`], the
    /// safest state: an unrecognized status must never collapse to allowed.
    #[must_use]
    pub fn normalize(token: &str) -> Self {
        let upper = token.trim().to_ascii_uppercase();
        match upper.as_str() {
            "PASSED" | "PASS" | "ALLOW" => Self::Allow,
            "BLOCKED" | "BLOCK" | "REJECT" => Self::Reject,
            "SUGGEST_REPLACE" | "REPLACE" | "ADJUST" => Self::SuggestReplace,
            // WARN, NEED_CONFIRM, and NEED_CONFIRMATION map here explicitly;
            // every other token falls through to the same safe default.
            _ => Self::NeedConfirm,
        }
    }

    /// Maps a pipeline stage status onto the canonical status.
    ///
    /// The default pipeline state (`pending`) maps to the strictest
    /// canonical value: a stage that has proven nothing is not safe.
    #[must_use]
    pub const fn from_pipeline(stage: PipelineStageStatus) -> Self {
        match stage {
            PipelineStageStatus::Completed => Self::Allow,
            PipelineStageStatus::InProgress => Self::NeedConfirm,
            PipelineStageStatus::Risk => Self::SuggestReplace,
            PipelineStageStatus::Pending => Self::Reject,
        }
    }

    /// Maps a raw decision-step lifecycle status onto the canonical status.
    ///
    /// A step awaiting user action (`pending`) stays at the confirmation
    /// state rather than either extreme.
    #[must_use]
    pub const fn from_step(status: StepStatus) -> Self {
        match status {
            StepStatus::Approved => Self::Allow,
            StepStatus::Pending => Self::NeedConfirm,
            StepStatus::Modified => Self::SuggestReplace,
            StepStatus::Rejected => Self::Reject,
        }
    }
}

// ============================================================================
// SECTION: Raw Vocabularies
// ============================================================================

/// Raw decision-step lifecycle status as authored upstream.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step awaits a user decision.
    Pending,
    /// Step was approved by the user.
    Approved,
    /// Step was rejected by the user.
    Rejected,
    /// Step was modified by the user.
    Modified,
}

impl StepStatus {
    /// Returns the stable wire label for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Modified => "modified",
        }
    }
}

/// Pipeline stage status used by the planning workbench.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStageStatus {
    /// Stage finished successfully.
    Completed,
    /// Stage is currently running.
    InProgress,
    /// Stage surfaced a risk.
    Risk,
    /// Stage has not started; the default initial state.
    Pending,
}

// ============================================================================
// SECTION: Aggregate Reduction
// ============================================================================

/// Resolves a collection of pipeline stage statuses to one gate status.
///
/// Worst-case-wins priority, not an average: any `risk` stage forces
/// [`GateStatus::SuggestReplace`]; else any `in-progress` stage forces
/// [`GateStatus::NeedConfirm`]; else all stages `completed` yields
/// [`GateStatus::Allow`]; otherwise [`GateStatus::Reject`]. An empty
/// collection is vacuously all-completed and yields `Allow`.
#[must_use]
pub fn overall_pipeline_status(stages: &[PipelineStageStatus]) -> GateStatus {
    if stages.iter().any(|stage| *stage == PipelineStageStatus::Risk) {
        return GateStatus::SuggestReplace;
    }
    if stages.iter().any(|stage| *stage == PipelineStageStatus::InProgress) {
        return GateStatus::NeedConfirm;
    }
    if stages.iter().all(|stage| *stage == PipelineStageStatus::Completed) {
        return GateStatus::Allow;
    }
    GateStatus::Reject
}
