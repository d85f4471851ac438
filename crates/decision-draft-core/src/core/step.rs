// crates/decision-draft-core/src/core/step.rs
// ============================================================================
// Module: Decision Step Model
// Description: Decision steps with declared inputs, outputs, and evidence.
// Purpose: Represent one node of the decision graph as supplied by the draft API.
// Dependencies: crate::core::{identifiers, status, time}, serde
// ============================================================================

//! ## Overview
//! A decision step is one atomic choice made by the upstream planning
//! process ("choose transport", "pick accommodation tier"). Steps declare
//! named inputs and outputs; dependency edges between steps are inferred
//! from name matches, never authored directly. Steps are immutable
//! snapshots per call: updates arrive as a new draft version.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::EvidenceId;
use crate::core::identifiers::StepId;
use crate::core::status::StepStatus;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Step Inputs and Outputs
// ============================================================================

/// Named input consumed by a decision step.
///
/// # Invariants
/// - `name` is the dependency-matching key; `value` is opaque to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    /// Input name matched against other steps' output names.
    pub name: String,
    /// Opaque input payload.
    pub value: Value,
    /// Optional hint describing where the value came from.
    pub source: Option<String>,
}

/// Named output produced by a decision step.
///
/// # Invariants
/// - `name` is the dependency-matching key; `value` is opaque to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutput {
    /// Output name matched against other steps' input names.
    pub name: String,
    /// Opaque output payload.
    pub value: Value,
    /// Optional output type label.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// ============================================================================
// SECTION: Evidence References
// ============================================================================

/// Opaque evidence reference attached to a decision step.
///
/// # Invariants
/// - Not interpreted by graph or layout logic; only identifiers are
///   aggregated during impact estimation.
/// - `relevance` and `confidence` are caller-supplied scalars in `[0, 1]`;
///   the core does not clamp them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRef {
    /// Evidence identifier.
    pub evidence_id: EvidenceId,
    /// Title of the evidence source.
    pub source_title: String,
    /// Optional URL of the evidence source.
    pub source_url: Option<String>,
    /// Optional excerpt from the source.
    pub excerpt: Option<String>,
    /// Relevance of the evidence to the step.
    pub relevance: f64,
    /// Confidence in the evidence.
    pub confidence: f64,
}

// ============================================================================
// SECTION: Decision Step
// ============================================================================

/// One node in the decision graph.
///
/// # Invariants
/// - `id` is unique within a draft and stable across versions.
/// - `inputs` and `outputs` preserve authored order; dependency inference
///   relies on it for deterministic tie-breaks.
/// - Steps are never mutated in place; a user action produces a new draft
///   version with re-authored steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionStep {
    /// Step identifier, stable across versions.
    pub id: StepId,
    /// Display title; opaque to the core.
    pub title: String,
    /// Display description; opaque to the core.
    pub description: String,
    /// Raw lifecycle status as authored.
    pub status: StepStatus,
    /// Marks steps always shown even under filtering. Informational; not
    /// enforced by this core.
    pub is_key: bool,
    /// Upstream confidence in the decision, in `[0, 1]`.
    pub confidence: f64,
    /// Ordered declared inputs.
    pub inputs: Vec<StepInput>,
    /// Ordered declared outputs.
    pub outputs: Vec<StepOutput>,
    /// Evidence references backing the decision.
    pub evidence: Vec<EvidenceRef>,
    /// Creation timestamp supplied by the draft API.
    pub created_at: Timestamp,
    /// Last-update timestamp supplied by the draft API.
    pub updated_at: Timestamp,
}

impl DecisionStep {
    /// Returns whether any declared output carries the given name.
    #[must_use]
    pub fn produces(&self, name: &str) -> bool {
        self.outputs.iter().any(|output| output.name == name)
    }
}
