// crates/decision-draft-layout/src/force.rs
// ============================================================================
// Module: Force-Directed Layout Engine
// Description: Pure-repulsion relaxation from seeded circular positions.
// Purpose: Produce organic, decluttered layouts independent of dependency
//          structure.
// Dependencies: crate::{config, position}, decision-draft-core, rand
// ============================================================================

//! ## Overview
//! Steps seed onto a circle around a fixed center, with per-step radius
//! jitter drawn from a seeded RNG so runs are reproducible. Each iteration
//! accumulates pairwise repulsive forces (inverse-square in distance) and
//! applies them with damping. No attractive force is modeled: this is a
//! declutter layout that spreads nodes evenly, not a spring layout, and it
//! implies nothing about dependency structure - use the layered engine when
//! structure must be visible.
//!
//! The iteration count is fixed; there is no convergence check. The inner
//! loop is `O(n^2)` per iteration, negligible at the expected scale of a
//! few dozen steps per draft; callers must not feed it thousands of nodes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use decision_draft_core::DecisionStep;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::LayoutOptions;
use crate::position::NodePosition;
use crate::position::PositionMap;
use crate::position::coord;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Canvas center the seed circle wraps around.
const CENTER: (f64, f64) = (400.0, 300.0);
/// Base seed-circle radius.
const BASE_RADIUS: f64 = 200.0;
/// Upper bound of the per-step radius jitter.
const RADIUS_JITTER: f64 = 100.0;
/// Repulsion strength numerator.
const REPULSION: f64 = 1000.0;
/// Damping factor applied to accumulated forces.
const DAMPING: f64 = 0.1;

// ============================================================================
// SECTION: Force Layout
// ============================================================================

/// Computes the force-directed layout for the step snapshot.
///
/// Deterministic for a given `options.seed`: the RNG drives only the seed
/// radii, and the relaxation itself is pure arithmetic.
#[must_use]
pub fn force_layout(steps: &[DecisionStep], options: &LayoutOptions) -> PositionMap {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let count = steps.len();
    let mut coords: Vec<(f64, f64)> = Vec::with_capacity(count);
    for index in 0 .. count {
        let angle = coord(index) / coord(count) * 2.0 * std::f64::consts::PI;
        let radius = BASE_RADIUS + rng.gen_range(0.0 .. RADIUS_JITTER);
        coords.push((
            CENTER.0 + radius * angle.cos(),
            CENTER.1 + radius * angle.sin(),
        ));
    }

    for _ in 0 .. options.iterations {
        let mut forces = vec![(0.0_f64, 0.0_f64); count];
        for i in 0 .. count {
            for j in i + 1 .. count {
                let dx = coords[j].0 - coords[i].0;
                let dy = coords[j].1 - coords[i].1;
                let mut distance = (dx * dx + dy * dy).sqrt();
                if distance == 0.0 {
                    distance = 1.0;
                }
                let force = REPULSION / (distance * distance);
                let fx = dx / distance * force;
                let fy = dy / distance * force;
                forces[i].0 -= fx;
                forces[i].1 -= fy;
                forces[j].0 += fx;
                forces[j].1 += fy;
            }
        }
        for (position, force) in coords.iter_mut().zip(&forces) {
            position.0 += force.0 * DAMPING;
            position.1 += force.1 * DAMPING;
        }
    }

    steps
        .iter()
        .zip(coords)
        .map(|(step, (x, y))| {
            (
                step.id.clone(),
                NodePosition {
                    id: step.id.clone(),
                    x,
                    y,
                },
            )
        })
        .collect()
}
