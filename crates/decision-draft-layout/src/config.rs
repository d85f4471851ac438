// crates/decision-draft-layout/src/config.rs
// ============================================================================
// Module: Layout Options
// Description: Validated parameters shared by the layout engines.
// Purpose: Carry node dimensions, spacings, and simulation controls with
//          fail-closed boundary validation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Layout parameters arrive from presentation code and are validated once
//! at the boundary: dimensions and spacings must be finite and positive,
//! and the force simulation needs at least one iteration. Defaults match
//! the canvas the engines were designed for (240x180 nodes, 50px grid
//! spacing, 300/200 layered spacings, 100 force iterations).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Layout option validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutOptionsError {
    /// A dimension or spacing was not a finite number.
    #[error("layout option `{field}` must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A dimension or spacing was zero or negative.
    #[error("layout option `{field}` must be positive")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The force simulation was configured with zero iterations.
    #[error("layout option `iterations` must be at least 1")]
    ZeroIterations,
}

// ============================================================================
// SECTION: Layout Options
// ============================================================================

/// Parameters shared by the layout engines.
///
/// # Invariants
/// - Validated values are finite and positive; `iterations >= 1`.
/// - `seed` fully determines the force layout's jitter, so equal inputs
///   give equal layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Node width in canvas units.
    pub node_width: f64,
    /// Node height in canvas units.
    pub node_height: f64,
    /// Grid cell spacing, also used as the grid margin.
    pub spacing: f64,
    /// Horizontal spacing between layered-layout columns.
    pub horizontal_spacing: f64,
    /// Vertical spacing between layered-layout layers.
    pub vertical_spacing: f64,
    /// Force simulation iteration count.
    pub iterations: u32,
    /// Seed for the force layout's position jitter.
    pub seed: u64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_width: 240.0,
            node_height: 180.0,
            spacing: 50.0,
            horizontal_spacing: 300.0,
            vertical_spacing: 200.0,
            iterations: 100,
            seed: 0,
        }
    }
}

impl LayoutOptions {
    /// Validates the options at the configuration boundary.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutOptionsError`] naming the first offending field
    /// when a dimension or spacing is non-finite or non-positive, or when
    /// the iteration count is zero.
    pub fn validate(&self) -> Result<(), LayoutOptionsError> {
        let dimensions = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("spacing", self.spacing),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() {
                return Err(LayoutOptionsError::NonFinite {
                    field,
                });
            }
            if value <= 0.0 {
                return Err(LayoutOptionsError::NonPositive {
                    field,
                });
            }
        }
        if self.iterations == 0 {
            return Err(LayoutOptionsError::ZeroIterations);
        }
        Ok(())
    }
}
