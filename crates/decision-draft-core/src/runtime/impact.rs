// crates/decision-draft-core/src/runtime/impact.rs
// ============================================================================
// Module: Impact Estimation
// Description: Downstream reachability and evidence aggregation for one step.
// Purpose: Report which steps and evidence a modification would affect.
// Dependencies: crate::core::{draft, identifiers, step}, crate::runtime::graph, serde
// ============================================================================

//! ## Overview
//! Modifying one decision invalidates everything downstream of it. Impact
//! estimation walks the successor map from the modified step (breadth-first,
//! no revisits) and reports the transitive closure, the union of evidence
//! references those steps carry, and a confidence-delta heuristic. The
//! heuristic is a placeholder: it is monotone in the number of affected
//! steps and meaningful only for ordering, not calibrated against a model.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::collections::VecDeque;

use serde::Deserialize;
use serde::Serialize;

use crate::core::draft::DraftError;
use crate::core::identifiers::EvidenceId;
use crate::core::identifiers::StepId;
use crate::core::step::DecisionStep;
use crate::runtime::graph::DependencyGraph;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Confidence penalty applied per affected downstream step.
const CONFIDENCE_PENALTY_PER_STEP: f64 = 0.05;
/// Largest total confidence penalty the heuristic will report.
const MAX_CONFIDENCE_PENALTY: f64 = 0.5;

// ============================================================================
// SECTION: Impact Estimate
// ============================================================================

/// Estimated impact of modifying one decision step.
///
/// # Invariants
/// - `affected_steps` excludes the modified step itself and follows the
///   snapshot's authored order.
/// - `affected_evidence` is deduplicated, first-seen order.
/// - `confidence_delta` is non-positive and bounded below by the clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    /// Steps downstream of the modified step.
    pub affected_steps: Vec<StepId>,
    /// Evidence referenced by the affected steps.
    pub affected_evidence: Vec<EvidenceId>,
    /// Heuristic confidence adjustment; more affected steps, lower value.
    pub confidence_delta: f64,
}

// ============================================================================
// SECTION: Estimation
// ============================================================================

/// Estimates the downstream impact of modifying `step_id`.
///
/// Reachability is computed over `graph`'s successor map; `steps` supplies
/// authored order and evidence payloads and must be the snapshot the graph
/// was built from.
///
/// # Errors
///
/// Returns [`DraftError::StepNotFound`] when `step_id` is not present in
/// the snapshot: the caller named a specific step, so a silent empty
/// estimate would hide a stale identifier.
pub fn estimate_impact(
    steps: &[DecisionStep],
    graph: &DependencyGraph,
    step_id: &StepId,
) -> Result<ImpactEstimate, DraftError> {
    if !steps.iter().any(|step| step.id == *step_id) {
        return Err(DraftError::StepNotFound(step_id.clone()));
    }

    let mut visited: BTreeSet<StepId> = BTreeSet::new();
    let mut queue: VecDeque<&StepId> = VecDeque::new();
    queue.push_back(step_id);
    while let Some(current) = queue.pop_front() {
        let Some(successors) = graph.successors.get(current) else {
            continue;
        };
        for successor in successors {
            if visited.insert(successor.clone()) {
                queue.push_back(successor);
            }
        }
    }
    visited.remove(step_id);

    let mut affected_steps = Vec::with_capacity(visited.len());
    let mut affected_evidence = Vec::new();
    let mut seen_evidence: BTreeSet<EvidenceId> = BTreeSet::new();
    for step in steps {
        if !visited.contains(&step.id) {
            continue;
        }
        affected_steps.push(step.id.clone());
        for evidence in &step.evidence {
            if seen_evidence.insert(evidence.evidence_id.clone()) {
                affected_evidence.push(evidence.evidence_id.clone());
            }
        }
    }

    let confidence_delta = confidence_delta_for(affected_steps.len());
    Ok(ImpactEstimate {
        affected_steps,
        affected_evidence,
        confidence_delta,
    })
}

/// Computes the clamped per-step confidence penalty.
fn confidence_delta_for(affected_count: usize) -> f64 {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Affected-step counts are far below 2^52; the delta is a display heuristic."
    )]
    let raw = -(affected_count as f64 * CONFIDENCE_PENALTY_PER_STEP);
    raw.max(-MAX_CONFIDENCE_PENALTY)
}
