// crates/decision-draft-layout/tests/layered_unit.rs
// ============================================================================
// Module: Layered Layout Unit Tests
// Description: Layer assignment, coordinates, and the cycle stall-breaker.
// Purpose: Validate topological layering over inferred dependencies.
// ============================================================================

//! Unit tests for the layered layout engine.

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

use decision_draft_core::DependencyGraph;
use decision_draft_core::StepId;
use decision_draft_layout::LayoutOptions;
use decision_draft_layout::assign_layers;
use decision_draft_layout::layered_layout;

use crate::common::step;

// ============================================================================
// SECTION: Layer Assignment
// ============================================================================

#[test]
fn three_step_chain_yields_three_layers() {
    let steps = vec![
        step("step-1", &[], &["route"]),
        step("step-2", &["route"], &["hotel"]),
        step("step-3", &["hotel"], &[]),
    ];
    let graph = DependencyGraph::build(&steps);
    let assignment = assign_layers(&steps, &graph);

    assert_eq!(
        assignment.layers,
        vec![
            vec![StepId::new("step-1")],
            vec![StepId::new("step-2")],
            vec![StepId::new("step-3")],
        ]
    );
    assert!(assignment.fallback.is_empty());
}

#[test]
fn independent_steps_share_the_first_layer() {
    let steps = vec![
        step("step-1", &[], &[]),
        step("step-2", &[], &[]),
        step("step-3", &[], &[]),
    ];
    let graph = DependencyGraph::build(&steps);
    let assignment = assign_layers(&steps, &graph);

    assert_eq!(assignment.layers.len(), 1);
    assert_eq!(assignment.layers[0].len(), 3);
    assert!(assignment.fallback.is_empty());
}

#[test]
fn layers_keep_authored_order_within_a_layer() {
    let steps = vec![
        step("zeta", &[], &["a"]),
        step("alpha", &[], &["b"]),
        step("consumer", &["a", "b"], &[]),
    ];
    let graph = DependencyGraph::build(&steps);
    let assignment = assign_layers(&steps, &graph);

    // Authored order, not identifier order.
    assert_eq!(
        assignment.layers[0],
        vec![StepId::new("zeta"), StepId::new("alpha")]
    );
}

#[test]
fn ancestors_always_land_in_earlier_layers() {
    let steps = vec![
        step("root", &[], &["seed"]),
        step("left", &["seed"], &["left-out"]),
        step("right", &["seed"], &["right-out"]),
        step("join", &["left-out", "right-out"], &[]),
    ];
    let graph = DependencyGraph::build(&steps);
    let assignment = assign_layers(&steps, &graph);

    let layer_of = |id: &str| {
        assignment
            .layers
            .iter()
            .position(|layer| layer.contains(&StepId::new(id)))
            .unwrap()
    };
    for (source, target) in graph.edges() {
        assert!(
            layer_of(source.as_str()) < layer_of(target.as_str()),
            "edge {source} -> {target} must cross layers downward"
        );
    }
}

// ============================================================================
// SECTION: Cycle Fallback
// ============================================================================

#[test]
fn mutual_dependency_triggers_the_reported_fallback() {
    let steps = vec![
        step("first", &["b"], &["a"]),
        step("second", &["a"], &["b"]),
    ];
    let graph = DependencyGraph::build(&steps);
    let assignment = assign_layers(&steps, &graph);

    assert_eq!(assignment.layers.len(), 1);
    assert_eq!(
        assignment.fallback,
        vec![StepId::new("first"), StepId::new("second")]
    );
}

#[test]
fn acyclic_prefix_survives_a_downstream_cycle() {
    let steps = vec![
        step("start", &[], &["seed"]),
        step("loop-a", &["seed", "loop-b-out"], &["loop-a-out"]),
        step("loop-b", &["loop-a-out"], &["loop-b-out"]),
    ];
    let graph = DependencyGraph::build(&steps);
    let assignment = assign_layers(&steps, &graph);

    assert_eq!(assignment.layers[0], vec![StepId::new("start")]);
    assert_eq!(
        assignment.fallback,
        vec![StepId::new("loop-a"), StepId::new("loop-b")]
    );
}

// ============================================================================
// SECTION: Coordinates
// ============================================================================

#[test]
fn chain_coordinates_step_down_by_vertical_spacing() {
    let steps = vec![
        step("step-1", &[], &["route"]),
        step("step-2", &["route"], &["hotel"]),
        step("step-3", &["hotel"], &[]),
    ];
    let options = LayoutOptions::default();
    let positions = layered_layout(&steps, &options);

    assert_eq!(positions[&StepId::new("step-1")].y, 100.0);
    assert_eq!(positions[&StepId::new("step-2")].y, 300.0);
    assert_eq!(positions[&StepId::new("step-3")].y, 500.0);
    for id in ["step-1", "step-2", "step-3"] {
        assert_eq!(positions[&StepId::new(id)].x, 100.0);
    }
}

#[test]
fn siblings_advance_by_horizontal_spacing() {
    let steps = vec![
        step("root", &[], &["seed"]),
        step("left", &["seed"], &[]),
        step("right", &["seed"], &[]),
    ];
    let options = LayoutOptions::default();
    let positions = layered_layout(&steps, &options);

    assert_eq!(positions[&StepId::new("left")].x, 100.0);
    assert_eq!(positions[&StepId::new("right")].x, 400.0);
    assert_eq!(positions[&StepId::new("left")].y, positions[&StepId::new("right")].y);
}

#[test]
fn every_step_is_positioned_exactly_once() {
    let steps = vec![
        step("step-1", &[], &["route"]),
        step("step-2", &["route"], &[]),
        step("step-3", &[], &[]),
    ];
    let options = LayoutOptions::default();
    let positions = layered_layout(&steps, &options);
    assert_eq!(positions.len(), steps.len());
}
