// crates/decision-draft-layout/src/grid.rs
// ============================================================================
// Module: Grid Layout Engine
// Description: Square-grid placement ignoring dependency structure.
// Purpose: Provide the layout-agnostic fallback used when dependency
//          structure is irrelevant or graph construction failed.
// Dependencies: crate::{config, position}, decision-draft-core
// ============================================================================

//! ## Overview
//! Steps are placed row-major on a near-square grid: the column count is
//! the ceiling square root of the step count, and each cell advances by
//! node size plus spacing, with the spacing doubling as the outer margin.
//! The result depends only on list order, so equal inputs always produce
//! identical coordinates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use decision_draft_core::DecisionStep;

use crate::config::LayoutOptions;
use crate::position::NodePosition;
use crate::position::PositionMap;
use crate::position::coord;

// ============================================================================
// SECTION: Grid Layout
// ============================================================================

/// Computes a square-grid layout for the step snapshot.
#[must_use]
pub fn grid_layout(steps: &[DecisionStep], options: &LayoutOptions) -> PositionMap {
    let mut positions = PositionMap::new();
    let cols = ceil_sqrt(steps.len());
    if cols == 0 {
        return positions;
    }

    for (index, step) in steps.iter().enumerate() {
        let row = index / cols;
        let col = index % cols;
        positions.insert(
            step.id.clone(),
            NodePosition {
                id: step.id.clone(),
                x: coord(col) * (options.node_width + options.spacing) + options.spacing,
                y: coord(row) * (options.node_height + options.spacing) + options.spacing,
            },
        );
    }
    positions
}

/// Returns the smallest `c` with `c * c >= n`, in integer arithmetic.
const fn ceil_sqrt(n: usize) -> usize {
    let mut c = 0;
    while c * c < n {
        c += 1;
    }
    c
}
