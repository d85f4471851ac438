// crates/decision-draft-layout/src/selector.rs
// ============================================================================
// Module: Layout Selector
// Description: Mode-keyed dispatch across the three layout engines.
// Purpose: Give callers one entry point with a safe default for bad modes.
// Dependencies: crate::{config, force, grid, layered, position}, decision-draft-core
// ============================================================================

//! ## Overview
//! The selector is pure dispatch: one mode, one engine, one call. Unknown
//! mode tokens resolve to the grid engine rather than erroring, mirroring
//! the status normalizer's safe-default philosophy - a misspelled mode
//! from presentation code should degrade the layout, not the render.

// ============================================================================
// SECTION: Imports
// ============================================================================

use decision_draft_core::DecisionStep;
use serde::Deserialize;
use serde::Serialize;

use crate::config::LayoutOptions;
use crate::force::force_layout;
use crate::grid::grid_layout;
use crate::layered::layered_layout;
use crate::position::PositionMap;

// ============================================================================
// SECTION: Layout Mode
// ============================================================================

/// Layout engine selection.
///
/// # Invariants
/// - Variants are stable for serialization and presentation toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Square-grid placement; the default and the fallback.
    #[default]
    Grid,
    /// Topological layered placement.
    Hierarchical,
    /// Force-directed placement.
    Force,
}

impl LayoutMode {
    /// Returns the stable label for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Hierarchical => "hierarchical",
            Self::Force => "force",
        }
    }

    /// Parses a free-form mode token, defaulting unknown values to grid.
    ///
    /// The token is trimmed and ASCII-lowercased before matching. Unknown
    /// modes never error; the grid engine is the safe fallback.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "hierarchical" => Self::Hierarchical,
            "force" => Self::Force,
            _ => Self::Grid,
        }
    }
}

// ============================================================================
// SECTION: Dispatch
// ============================================================================

/// Computes node positions for the snapshot using the requested engine.
#[must_use]
pub fn compute_layout(
    steps: &[DecisionStep],
    mode: LayoutMode,
    options: &LayoutOptions,
) -> PositionMap {
    match mode {
        LayoutMode::Grid => grid_layout(steps, options),
        LayoutMode::Hierarchical => layered_layout(steps, options),
        LayoutMode::Force => force_layout(steps, options),
    }
}
