// crates/decision-draft-core/src/runtime/replay.rs
// ============================================================================
// Module: Decision Replay
// Description: Ordered replay timeline derived from one draft snapshot.
// Purpose: Let the presentation layer step through decisions over time.
// Dependencies: crate::core::{draft, identifiers, status, time}, serde
// ============================================================================

//! ## Overview
//! Replay presents the draft's decisions one frame at a time, in authored
//! order. Frames carry the data the timeline UI needs (identifier, title,
//! raw status, timestamp); the draft itself stays the source of truth for
//! everything else. The replay span is reported in milliseconds when the
//! boundary timestamps are unix-millis, and omitted otherwise.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::draft::DecisionDraft;
use crate::core::identifiers::StepId;
use crate::core::status::StepStatus;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Replay Frames
// ============================================================================

/// One frame of a decision replay.
///
/// # Invariants
/// - `seq` is the zero-based position within the replay and matches the
///   authored step order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// Zero-based frame sequence.
    pub seq: usize,
    /// Timestamp the step was created at.
    pub timestamp: Timestamp,
    /// Step identifier shown in this frame.
    pub step_id: StepId,
    /// Step title for timeline display.
    pub title: String,
    /// Raw lifecycle status at snapshot time.
    pub status: StepStatus,
}

/// Replay timeline for one draft snapshot.
///
/// # Invariants
/// - `frames` is ordered by `seq`.
/// - `span_millis` is present only when the first and last frames both
///   carry unix-millis timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReplay {
    /// Ordered replay frames.
    pub frames: Vec<ReplayFrame>,
    /// Millisecond span from first to last frame, when defined.
    pub span_millis: Option<i64>,
}

// ============================================================================
// SECTION: Replay Construction
// ============================================================================

/// Builds the replay timeline for a draft snapshot.
#[must_use]
pub fn build_replay(draft: &DecisionDraft) -> DecisionReplay {
    let frames: Vec<ReplayFrame> = draft
        .steps
        .iter()
        .enumerate()
        .map(|(seq, step)| ReplayFrame {
            seq,
            timestamp: step.created_at,
            step_id: step.id.clone(),
            title: step.title.clone(),
            status: step.status,
        })
        .collect();

    let span_millis = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => last.timestamp.millis_since(&first.timestamp),
        _ => None,
    };

    DecisionReplay {
        frames,
        span_millis,
    }
}
