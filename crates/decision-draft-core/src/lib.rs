// crates/decision-draft-core/src/lib.rs
// ============================================================================
// Module: Decision Draft Core
// Description: Decision-graph data model, status normalization, and derived
//              computations for decision-draft visualization.
// Purpose: Provide the pure, synchronous core consumed by layout engines and
//          presentation layers.
// Dependencies: serde, serde_json, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! This crate is the algorithmic core of the decision-draft visualization:
//! it models draft snapshots as supplied by the external draft API, infers
//! dependency edges between decision steps from their declared inputs and
//! outputs, normalizes heterogeneous lifecycle vocabularies onto the
//! canonical four-state [`GateStatus`], estimates downstream impact of
//! modifying a step, and diffs step snapshots across versions.
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable
//! state, no caching across calls. Failure philosophy follows the trust
//! indicators this core feeds: unknown inputs resolve to the safest value
//! (`NEED_CONFIRM`, grid layout, no edge) rather than erroring, while
//! lookups by an explicitly requested identifier do error, since a silent
//! default there would hide a real caller bug.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::DecisionDraft;
pub use crate::core::DecisionStep;
pub use crate::core::DraftError;
pub use crate::core::DraftId;
pub use crate::core::DraftMetadata;
pub use crate::core::DraftStats;
pub use crate::core::EvidenceId;
pub use crate::core::EvidenceRef;
pub use crate::core::GateStatus;
pub use crate::core::HashAlgorithm;
pub use crate::core::HashDigest;
pub use crate::core::HashError;
pub use crate::core::PipelineStageStatus;
pub use crate::core::PlanId;
pub use crate::core::PlanVersion;
pub use crate::core::StepId;
pub use crate::core::StepInput;
pub use crate::core::StepOutput;
pub use crate::core::StepStatus;
pub use crate::core::Timestamp;
pub use crate::core::VersionId;
pub use crate::core::overall_pipeline_status;
pub use crate::interfaces::DraftVersion;
pub use crate::interfaces::InMemoryVersionStore;
pub use crate::interfaces::VersionComparison;
pub use crate::interfaces::VersionStore;
pub use crate::interfaces::VersionStoreError;
pub use crate::interfaces::compare_versions;
pub use crate::runtime::DecisionReplay;
pub use crate::runtime::DependencyGraph;
pub use crate::runtime::ImpactEstimate;
pub use crate::runtime::ReplayFrame;
pub use crate::runtime::VersionDiff;
pub use crate::runtime::build_replay;
pub use crate::runtime::estimate_impact;
