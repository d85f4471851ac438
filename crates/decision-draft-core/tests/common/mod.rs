// crates/decision-draft-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared step and draft builders for decision-draft-core tests.
// Purpose: Provide reusable fixtures for graph, impact, diff, and version tests.
// Dependencies: decision-draft-core, serde_json
// ============================================================================

//! ## Overview
//! Provides shared builders for decision steps and drafts with declared
//! inputs, outputs, and evidence.

#![allow(
    dead_code,
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only helpers; not every test binary uses every builder."
)]

use decision_draft_core::DecisionDraft;
use decision_draft_core::DecisionStep;
use decision_draft_core::DraftId;
use decision_draft_core::DraftMetadata;
use decision_draft_core::EvidenceId;
use decision_draft_core::EvidenceRef;
use decision_draft_core::PlanId;
use decision_draft_core::PlanVersion;
use decision_draft_core::StepId;
use decision_draft_core::StepInput;
use decision_draft_core::StepOutput;
use decision_draft_core::StepStatus;
use decision_draft_core::Timestamp;
use serde_json::json;

// ============================================================================
// SECTION: Step Builders
// ============================================================================

/// Creates a pending step with named inputs and outputs.
pub fn step(id: &str, inputs: &[&str], outputs: &[&str]) -> DecisionStep {
    step_with_status(id, inputs, outputs, StepStatus::Pending)
}

/// Creates a step with named inputs and outputs and an explicit status.
pub fn step_with_status(
    id: &str,
    inputs: &[&str],
    outputs: &[&str],
    status: StepStatus,
) -> DecisionStep {
    DecisionStep {
        id: StepId::new(id),
        title: format!("step {id}"),
        description: String::new(),
        status,
        is_key: false,
        confidence: 0.8,
        inputs: inputs
            .iter()
            .map(|name| StepInput {
                name: (*name).to_string(),
                value: json!(null),
                source: None,
            })
            .collect(),
        outputs: outputs
            .iter()
            .map(|name| StepOutput {
                name: (*name).to_string(),
                value: json!(null),
                kind: None,
            })
            .collect(),
        evidence: Vec::new(),
        created_at: Timestamp::Logical(0),
        updated_at: Timestamp::Logical(0),
    }
}

/// Attaches evidence references to a step.
pub fn with_evidence(mut step: DecisionStep, evidence_ids: &[&str]) -> DecisionStep {
    step.evidence = evidence_ids
        .iter()
        .map(|id| EvidenceRef {
            evidence_id: EvidenceId::new(*id),
            source_title: format!("source {id}"),
            source_url: None,
            excerpt: None,
            relevance: 0.9,
            confidence: 0.9,
        })
        .collect();
    step
}

// ============================================================================
// SECTION: Draft Builders
// ============================================================================

/// Wraps steps into a draft snapshot with minimal metadata.
pub fn draft(steps: Vec<DecisionStep>) -> DecisionDraft {
    let decision_count = steps.len();
    DecisionDraft {
        draft_id: DraftId::new("draft-1"),
        plan_id: PlanId::new("plan-1"),
        plan_version: PlanVersion::from_raw(1).unwrap(),
        steps,
        metadata: DraftMetadata {
            decision_count,
            created_by: None,
            created_at: Timestamp::Logical(0),
            updated_at: Timestamp::Logical(0),
        },
    }
}
