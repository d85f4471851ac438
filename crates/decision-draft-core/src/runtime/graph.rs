// crates/decision-draft-core/src/runtime/graph.rs
// ============================================================================
// Module: Dependency Graph Builder
// Description: Infers step dependency edges from declared inputs and outputs.
// Purpose: Derive the successor map and in-degree counts consumed by layered
//          layout and impact estimation.
// Dependencies: crate::core::{identifiers, step}, serde
// ============================================================================

//! ## Overview
//! Dependency edges are never authored: for every step and every input it
//! declares, the first *other* step in authored order whose outputs carry a
//! matching name becomes the unique source of that input, and an edge
//! source → consumer is recorded. Unmatched inputs are treated as
//! externally supplied. The graph is derived and cheap; it is rebuilt on
//! every call and never cached, because the step list may have changed
//! between calls.
//!
//! The builder does not detect cycles. Under the assumption that inputs
//! never reference a later step's outputs the result is a DAG; when that
//! assumption fails, the layered layout's stall fallback handles it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::StepId;
use crate::core::step::DecisionStep;

// ============================================================================
// SECTION: Dependency Graph
// ============================================================================

/// Derived dependency graph over a step snapshot.
///
/// # Invariants
/// - Every step id in the source snapshot keys both maps, even when
///   isolated.
/// - `in_degree` counts *distinct* predecessors: a consumer matching two
///   inputs against the same source still counts that source once, so
///   Kahn layering terminates without spurious stalls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Successor sets: `successors[a]` holds every step that consumes one
    /// of `a`'s outputs.
    pub successors: BTreeMap<StepId, BTreeSet<StepId>>,
    /// Distinct-predecessor counts per step.
    pub in_degree: BTreeMap<StepId, usize>,
}

impl DependencyGraph {
    /// Builds the dependency graph for an ordered step snapshot.
    ///
    /// For each input of each step, the first other step in authored order
    /// producing an output with the same name is chosen as the unique
    /// source. Multiple producers of one name are silently resolved to the
    /// first; inputs with no producer create no edge.
    #[must_use]
    pub fn build(steps: &[DecisionStep]) -> Self {
        let mut graph = Self::default();
        for step in steps {
            graph.successors.insert(step.id.clone(), BTreeSet::new());
            graph.in_degree.insert(step.id.clone(), 0);
        }

        for consumer in steps {
            for input in &consumer.inputs {
                let source = steps
                    .iter()
                    .find(|candidate| candidate.id != consumer.id && candidate.produces(&input.name));
                let Some(source) = source else {
                    // Externally supplied input; not an error.
                    continue;
                };
                let newly_inserted = graph
                    .successors
                    .entry(source.id.clone())
                    .or_default()
                    .insert(consumer.id.clone());
                if newly_inserted
                    && let Some(count) = graph.in_degree.get_mut(&consumer.id)
                {
                    *count += 1;
                }
            }
        }
        graph
    }

    /// Returns the inferred edges as `(source, consumer)` pairs.
    ///
    /// Sources iterate in identifier order; consumers within a source are
    /// ordered the same way. The external rendering layer draws dependency
    /// lines from exactly this set.
    pub fn edges(&self) -> impl Iterator<Item = (&StepId, &StepId)> {
        self.successors
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }

    /// Returns the number of inferred edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }

    /// Returns the distinct-predecessor count for a step, or zero for an
    /// unknown identifier.
    #[must_use]
    pub fn in_degree_of(&self, step_id: &StepId) -> usize {
        self.in_degree.get(step_id).copied().unwrap_or(0)
    }
}
