// crates/decision-draft-layout/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared step builders for decision-draft-layout tests.
// Purpose: Provide reusable fixtures for layout engine tests.
// Dependencies: decision-draft-core, serde_json
// ============================================================================

//! ## Overview
//! Provides shared builders for decision steps with declared inputs and
//! outputs.

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

use decision_draft_core::DecisionStep;
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
    DecisionStep {
        id: StepId::new(id),
        title: format!("step {id}"),
        description: String::new(),
        status: StepStatus::Pending,
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

/// Creates `count` isolated steps with no inputs or outputs.
pub fn isolated_steps(count: usize) -> Vec<DecisionStep> {
    (0 .. count).map(|index| step(&format!("step-{index}"), &[], &[])).collect()
}
