// crates/decision-draft-layout/tests/grid_unit.rs
// ============================================================================
// Module: Grid Layout Unit Tests
// Description: Column math, coordinates, and determinism.
// Purpose: Validate the dependency-agnostic grid fallback.
// ============================================================================

//! Unit tests for the grid layout engine.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use decision_draft_core::StepId;
use decision_draft_layout::LayoutOptions;
use decision_draft_layout::grid_layout;

use crate::common::isolated_steps;

// ============================================================================
// SECTION: Placement
// ============================================================================

#[test]
fn four_steps_wrap_into_two_columns() {
    let steps = isolated_steps(4);
    let options = LayoutOptions::default();
    let positions = grid_layout(&steps, &options);

    // cols = ceil(sqrt(4)) = 2; cell pitch = 240 + 50 with a 50 margin.
    assert_eq!(positions[&StepId::new("step-0")].x, 50.0);
    assert_eq!(positions[&StepId::new("step-0")].y, 50.0);
    assert_eq!(positions[&StepId::new("step-1")].x, 340.0);
    assert_eq!(positions[&StepId::new("step-1")].y, 50.0);
    assert_eq!(positions[&StepId::new("step-2")].x, 50.0);
    assert_eq!(positions[&StepId::new("step-2")].y, 280.0);
    assert_eq!(positions[&StepId::new("step-3")].x, 340.0);
    assert_eq!(positions[&StepId::new("step-3")].y, 280.0);
}

#[test]
fn five_steps_get_three_columns() {
    let steps = isolated_steps(5);
    let options = LayoutOptions::default();
    let positions = grid_layout(&steps, &options);

    // cols = ceil(sqrt(5)) = 3; the fourth step starts the second row.
    assert_eq!(positions[&StepId::new("step-3")].x, 50.0);
    assert_eq!(positions[&StepId::new("step-3")].y, 280.0);
}

#[test]
fn single_step_sits_at_the_margin() {
    let steps = isolated_steps(1);
    let options = LayoutOptions::default();
    let positions = grid_layout(&steps, &options);

    assert_eq!(positions.len(), 1);
    assert_eq!(positions[&StepId::new("step-0")].x, 50.0);
    assert_eq!(positions[&StepId::new("step-0")].y, 50.0);
}

#[test]
fn empty_snapshot_yields_empty_positions() {
    let options = LayoutOptions::default();
    assert!(grid_layout(&[], &options).is_empty());
}

#[test]
fn every_step_gets_exactly_one_position() {
    let steps = isolated_steps(11);
    let options = LayoutOptions::default();
    let positions = grid_layout(&steps, &options);

    assert_eq!(positions.len(), steps.len());
    for step in &steps {
        assert!(positions.contains_key(&step.id));
    }
}

// ============================================================================
// SECTION: Determinism
// ============================================================================

#[test]
fn repeated_calls_produce_identical_coordinates() {
    let steps = isolated_steps(9);
    let options = LayoutOptions::default();
    assert_eq!(grid_layout(&steps, &options), grid_layout(&steps, &options));
}
