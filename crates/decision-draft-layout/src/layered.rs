// crates/decision-draft-layout/src/layered.rs
// ============================================================================
// Module: Layered Layout Engine
// Description: Topological layering with grid coordinates per layer.
// Purpose: Render dependency structure as strict top-down generations.
// Dependencies: crate::{config, position}, decision-draft-core
// ============================================================================

//! ## Overview
//! Kahn's algorithm assigns each step to a layer: every round collects the
//! not-yet-placed steps whose remaining in-degree is zero, in authored
//! order. For an acyclic snapshot this guarantees that an ancestor's layer
//! index is strictly smaller than any descendant's. When a cycle stalls the
//! algorithm, all remaining steps are dumped into one final layer - a
//! deterministic stall-breaker, not a cycle-breaking algorithm - and the
//! assignment reports which steps it swept up so callers can flag the
//! degraded region instead of trusting it silently.
//!
//! Coordinates are `y = layer * vertical_spacing + top margin` and
//! `x = index-in-layer * horizontal_spacing + left margin`. Layers are
//! never reordered after assignment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use decision_draft_core::DecisionStep;
use decision_draft_core::DependencyGraph;
use decision_draft_core::StepId;
use serde::Deserialize;
use serde::Serialize;

use crate::config::LayoutOptions;
use crate::position::NodePosition;
use crate::position::PositionMap;
use crate::position::coord;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Vertical offset of the first layer.
const TOP_MARGIN: f64 = 100.0;
/// Horizontal offset of the first step within a layer.
const LEFT_MARGIN: f64 = 100.0;

// ============================================================================
// SECTION: Layer Assignment
// ============================================================================

/// Topological layer assignment for a step snapshot.
///
/// # Invariants
/// - Every step id appears in exactly one layer.
/// - `fallback` is empty iff layering completed without a cycle stall;
///   otherwise it lists the steps placed by the stall-breaker, which form
///   the final layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerAssignment {
    /// Steps per layer, authored order within each layer.
    pub layers: Vec<Vec<StepId>>,
    /// Steps placed by the cycle stall-breaker.
    pub fallback: Vec<StepId>,
}

/// Assigns steps to topological layers with a deterministic cycle fallback.
#[must_use]
pub fn assign_layers(steps: &[DecisionStep], graph: &DependencyGraph) -> LayerAssignment {
    let mut assignment = LayerAssignment::default();
    let mut remaining: BTreeSet<&StepId> = steps.iter().map(|step| &step.id).collect();
    let mut in_degree: BTreeMap<&StepId, usize> = steps
        .iter()
        .map(|step| (&step.id, graph.in_degree_of(&step.id)))
        .collect();

    while !remaining.is_empty() {
        let mut layer: Vec<StepId> = steps
            .iter()
            .filter(|step| {
                remaining.contains(&step.id) && in_degree.get(&step.id).copied() == Some(0)
            })
            .map(|step| step.id.clone())
            .collect();

        if layer.is_empty() {
            // Cycle stall: place every remaining step into one final layer.
            layer = steps
                .iter()
                .filter(|step| remaining.contains(&step.id))
                .map(|step| step.id.clone())
                .collect();
            assignment.fallback.clone_from(&layer);
        }

        for placed in &layer {
            remaining.remove(placed);
            let Some(successors) = graph.successors.get(placed) else {
                continue;
            };
            for successor in successors {
                if let Some(count) = in_degree.get_mut(successor) {
                    *count = count.saturating_sub(1);
                }
            }
        }
        assignment.layers.push(layer);
    }
    assignment
}

// ============================================================================
// SECTION: Layered Layout
// ============================================================================

/// Computes the layered layout for the step snapshot.
///
/// Builds the dependency graph, assigns layers, and places each step at
/// its layer's row and in-layer column.
#[must_use]
pub fn layered_layout(steps: &[DecisionStep], options: &LayoutOptions) -> PositionMap {
    let graph = DependencyGraph::build(steps);
    let assignment = assign_layers(steps, &graph);
    positions_for(&assignment, options)
}

/// Converts a layer assignment into canvas coordinates.
#[must_use]
pub fn positions_for(assignment: &LayerAssignment, options: &LayoutOptions) -> PositionMap {
    let mut positions = PositionMap::new();
    for (layer_index, layer) in assignment.layers.iter().enumerate() {
        let y = coord(layer_index) * options.vertical_spacing + TOP_MARGIN;
        for (step_index, step_id) in layer.iter().enumerate() {
            positions.insert(
                step_id.clone(),
                NodePosition {
                    id: step_id.clone(),
                    x: coord(step_index) * options.horizontal_spacing + LEFT_MARGIN,
                    y,
                },
            );
        }
    }
    positions
}
