// crates/decision-draft-layout/src/position.rs
// ============================================================================
// Module: Node Positions
// Description: Coordinate output artifact shared by all layout engines.
// Purpose: Carry per-step canvas coordinates to the external renderer.
// Dependencies: decision-draft-core, serde
// ============================================================================

//! ## Overview
//! A node position is the sole output of a layout engine: a step identifier
//! with canvas coordinates. It shares nothing with [`DecisionStep`] beyond
//! the identifier and implies nothing about rendering; the external canvas
//! layer decides what to paint at the coordinates.
//!
//! [`DecisionStep`]: decision_draft_core::DecisionStep

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use decision_draft_core::StepId;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Node Position
// ============================================================================

/// Canvas coordinates computed for one step.
///
/// # Invariants
/// - `id` matches a step in the snapshot the layout was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Step identifier the position belongs to.
    pub id: StepId,
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
}

/// Position map produced by every layout engine: one entry per step.
pub type PositionMap = BTreeMap<StepId, NodePosition>;

// ============================================================================
// SECTION: Coordinate Helpers
// ============================================================================

/// Converts a list index into a canvas coordinate factor.
#[allow(
    clippy::cast_precision_loss,
    reason = "Step counts are far below 2^52; coordinates are display values."
)]
pub(crate) const fn coord(index: usize) -> f64 {
    index as f64
}
