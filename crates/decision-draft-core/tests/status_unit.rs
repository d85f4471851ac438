// crates/decision-draft-core/tests/status_unit.rs
// ============================================================================
// Module: Status Normalization Unit Tests
// Description: Alias tables, safe defaults, and aggregate reduction.
// Purpose: Validate that every lifecycle vocabulary lands on the canonical
//          four-state model.
// ============================================================================

//! Unit tests for gate-status normalization and the pipeline reduction.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use decision_draft_core::GateStatus;
use decision_draft_core::PipelineStageStatus;
use decision_draft_core::StepStatus;
use decision_draft_core::overall_pipeline_status;

// ============================================================================
// SECTION: Alias Tables
// ============================================================================

#[test]
fn allow_aliases_normalize_to_allow() {
    for token in ["PASSED", "PASS", "ALLOW"] {
        assert_eq!(GateStatus::normalize(token), GateStatus::Allow, "token {token}");
    }
}

#[test]
fn need_confirm_aliases_normalize_to_need_confirm() {
    for token in ["WARN", "NEED_CONFIRM", "NEED_CONFIRMATION"] {
        assert_eq!(GateStatus::normalize(token), GateStatus::NeedConfirm, "token {token}");
    }
}

#[test]
fn reject_aliases_normalize_to_reject() {
    for token in ["BLOCKED", "BLOCK", "REJECT"] {
        assert_eq!(GateStatus::normalize(token), GateStatus::Reject, "token {token}");
    }
}

#[test]
fn suggest_replace_aliases_normalize_to_suggest_replace() {
    for token in ["SUGGEST_REPLACE", "REPLACE", "ADJUST"] {
        assert_eq!(GateStatus::normalize(token), GateStatus::SuggestReplace, "token {token}");
    }
}

#[test]
fn normalization_ignores_case_and_whitespace() {
    assert_eq!(GateStatus::normalize("PASS"), GateStatus::Allow);
    assert_eq!(GateStatus::normalize("pass"), GateStatus::Allow);
    assert_eq!(GateStatus::normalize(" Pass "), GateStatus::Allow);
    assert_eq!(GateStatus::normalize("\tblocked\n"), GateStatus::Reject);
}

#[test]
fn unknown_tokens_default_to_need_confirm() {
    for token in ["", "   ", "UNKNOWN", "ok", "approved-maybe", "ALLOWED"] {
        assert_eq!(GateStatus::normalize(token), GateStatus::NeedConfirm, "token {token:?}");
    }
}

#[test]
fn canonical_labels_round_trip_through_normalize() {
    for status in [
        GateStatus::Allow,
        GateStatus::NeedConfirm,
        GateStatus::SuggestReplace,
        GateStatus::Reject,
    ] {
        assert_eq!(GateStatus::normalize(status.as_str()), status);
    }
}

// ============================================================================
// SECTION: Typed Adapters
// ============================================================================

#[test]
fn pipeline_mapping_is_strict_on_pending() {
    assert_eq!(GateStatus::from_pipeline(PipelineStageStatus::Completed), GateStatus::Allow);
    assert_eq!(
        GateStatus::from_pipeline(PipelineStageStatus::InProgress),
        GateStatus::NeedConfirm
    );
    assert_eq!(
        GateStatus::from_pipeline(PipelineStageStatus::Risk),
        GateStatus::SuggestReplace
    );
    assert_eq!(GateStatus::from_pipeline(PipelineStageStatus::Pending), GateStatus::Reject);
}

#[test]
fn step_mapping_keeps_pending_at_confirmation() {
    assert_eq!(GateStatus::from_step(StepStatus::Approved), GateStatus::Allow);
    assert_eq!(GateStatus::from_step(StepStatus::Pending), GateStatus::NeedConfirm);
    assert_eq!(GateStatus::from_step(StepStatus::Modified), GateStatus::SuggestReplace);
    assert_eq!(GateStatus::from_step(StepStatus::Rejected), GateStatus::Reject);
}

// ============================================================================
// SECTION: Aggregate Reduction
// ============================================================================

#[test]
fn risk_dominates_completed() {
    let stages = [PipelineStageStatus::Completed, PipelineStageStatus::Risk];
    assert_eq!(overall_pipeline_status(&stages), GateStatus::SuggestReplace);
}

#[test]
fn in_progress_dominates_completed_without_risk() {
    let stages = [
        PipelineStageStatus::Completed,
        PipelineStageStatus::InProgress,
        PipelineStageStatus::Completed,
    ];
    assert_eq!(overall_pipeline_status(&stages), GateStatus::NeedConfirm);
}

#[test]
fn all_completed_resolves_to_allow() {
    let stages = [PipelineStageStatus::Completed, PipelineStageStatus::Completed];
    assert_eq!(overall_pipeline_status(&stages), GateStatus::Allow);
}

#[test]
fn pending_mixture_resolves_to_reject() {
    let stages = [PipelineStageStatus::Completed, PipelineStageStatus::Pending];
    assert_eq!(overall_pipeline_status(&stages), GateStatus::Reject);
}

#[test]
fn empty_stage_list_is_vacuously_allow() {
    assert_eq!(overall_pipeline_status(&[]), GateStatus::Allow);
}

#[test]
fn risk_dominates_regardless_of_position() {
    let stages = [
        PipelineStageStatus::Risk,
        PipelineStageStatus::InProgress,
        PipelineStageStatus::Pending,
    ];
    assert_eq!(overall_pipeline_status(&stages), GateStatus::SuggestReplace);
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

#[test]
fn gate_status_serializes_to_canonical_wire_labels() {
    let rendered = serde_json::to_string(&GateStatus::NeedConfirm).unwrap();
    assert_eq!(rendered, "\"NEED_CONFIRM\"");
    let parsed: GateStatus = serde_json::from_str("\"SUGGEST_REPLACE\"").unwrap();
    assert_eq!(parsed, GateStatus::SuggestReplace);
}

#[test]
fn pipeline_status_serializes_kebab_case() {
    let rendered = serde_json::to_string(&PipelineStageStatus::InProgress).unwrap();
    assert_eq!(rendered, "\"in-progress\"");
}
