// system-tests/src/fixtures.rs
// ============================================================================
// Module: System Test Fixtures
// Description: A realistic decision-draft snapshot in API wire shape.
// Purpose: Exercise serde ingestion and every downstream computation from
//          one shared snapshot.
// Dependencies: decision-draft-core, serde_json
// ============================================================================

//! ## Overview
//! The sample draft models a four-step travel plan: route selection feeds
//! both accommodation and pacing, which jointly feed the activity shortlist.
//! The JSON mirrors what the external decision-draft API returns, so tests
//! deserialize it rather than constructing structs directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use decision_draft_core::DecisionDraft;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Returns the sample draft snapshot in API wire shape.
#[must_use]
pub fn sample_draft_json() -> Value {
    json!({
        "draft_id": "draft-kyoto-001",
        "plan_id": "plan-kyoto",
        "plan_version": 2,
        "steps": [
            {
                "id": "choose-route",
                "title": "Choose rail route",
                "description": "Select the intercity route for the trip.",
                "status": "approved",
                "is_key": true,
                "confidence": 0.92,
                "inputs": [
                    { "name": "origin", "value": "osaka", "source": "user-profile" }
                ],
                "outputs": [
                    { "name": "route", "value": "osaka-kyoto-express", "type": "route" }
                ],
                "evidence": [
                    {
                        "evidence_id": "ev-rail-schedule",
                        "source_title": "Rail schedule",
                        "source_url": "https://rail.example/schedule",
                        "excerpt": "Express departs every 15 minutes.",
                        "relevance": 0.95,
                        "confidence": 0.9
                    }
                ],
                "created_at": { "kind": "unix_millis", "value": 1_000 },
                "updated_at": { "kind": "unix_millis", "value": 1_500 }
            },
            {
                "id": "choose-hotel",
                "title": "Choose accommodation",
                "description": "Pick a hotel near the arrival station.",
                "status": "pending",
                "is_key": true,
                "confidence": 0.74,
                "inputs": [
                    { "name": "route", "value": "osaka-kyoto-express", "source": null }
                ],
                "outputs": [
                    { "name": "hotel", "value": "gion-stay", "type": "accommodation" }
                ],
                "evidence": [
                    {
                        "evidence_id": "ev-hotel-reviews",
                        "source_title": "Hotel reviews",
                        "source_url": null,
                        "excerpt": null,
                        "relevance": 0.8,
                        "confidence": 0.85
                    }
                ],
                "created_at": { "kind": "unix_millis", "value": 2_000 },
                "updated_at": { "kind": "unix_millis", "value": 2_000 }
            },
            {
                "id": "choose-pace",
                "title": "Choose daily pace",
                "description": "Set how packed each day should be.",
                "status": "pending",
                "is_key": false,
                "confidence": 0.66,
                "inputs": [
                    { "name": "route", "value": "osaka-kyoto-express", "source": null }
                ],
                "outputs": [
                    { "name": "pace", "value": "relaxed", "type": "pace" }
                ],
                "evidence": [],
                "created_at": { "kind": "unix_millis", "value": 3_000 },
                "updated_at": { "kind": "unix_millis", "value": 3_000 }
            },
            {
                "id": "shortlist-activities",
                "title": "Shortlist activities",
                "description": "Pick activities matching hotel area and pace.",
                "status": "pending",
                "is_key": false,
                "confidence": 0.58,
                "inputs": [
                    { "name": "hotel", "value": "gion-stay", "source": null },
                    { "name": "pace", "value": "relaxed", "source": null }
                ],
                "outputs": [
                    { "name": "activities", "value": ["temple-walk", "tea-house"], "type": "list" }
                ],
                "evidence": [
                    {
                        "evidence_id": "ev-activity-hours",
                        "source_title": "Opening hours",
                        "source_url": null,
                        "excerpt": null,
                        "relevance": 0.7,
                        "confidence": 0.8
                    }
                ],
                "created_at": { "kind": "unix_millis", "value": 4_000 },
                "updated_at": { "kind": "unix_millis", "value": 4_000 }
            }
        ],
        "metadata": {
            "decision_count": 4,
            "created_by": "planner-agent",
            "created_at": { "kind": "unix_millis", "value": 1_000 },
            "updated_at": { "kind": "unix_millis", "value": 4_000 }
        }
    })
}

/// Deserializes the sample snapshot the way a host ingests the API payload.
///
/// # Panics
///
/// Panics when the fixture JSON drifts out of sync with the data model;
/// system tests treat that as a fixture bug, not a runtime condition.
#[must_use]
#[allow(
    clippy::expect_used,
    reason = "Fixture deserialization failure is a test-suite bug worth a loud stop."
)]
pub fn sample_draft() -> DecisionDraft {
    serde_json::from_value(sample_draft_json()).expect("sample draft fixture must deserialize")
}
