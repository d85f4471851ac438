// crates/decision-draft-core/src/interfaces/mod.rs
// ============================================================================
// Module: Decision Draft Interfaces
// Description: Backend-agnostic version storage for draft snapshots.
// Purpose: Define the storage contract used for cross-version comparison.
// Dependencies: crate::core, crate::runtime, serde, thiserror
// ============================================================================

//! ## Overview
//! The core never persists anything itself; hosts supply a [`VersionStore`]
//! implementation. Stored versions carry a canonical content hash computed
//! at construction, so identical snapshots fingerprint identically across
//! backends. Lookups by an explicitly requested version identifier error on
//! a miss: comparing against a stale version is a caller bug that a silent
//! default would hide.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::draft::DecisionDraft;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::snapshot_hash;
use crate::core::identifiers::DraftId;
use crate::core::identifiers::VersionId;
use crate::core::step::DecisionStep;
use crate::core::time::Timestamp;
use crate::runtime::diff::VersionDiff;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Version storage errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionStoreError {
    /// The requested version is not present for the draft.
    #[error("version not found: draft {draft_id}, version {version_id}")]
    VersionNotFound {
        /// Draft the lookup was scoped to.
        draft_id: DraftId,
        /// Version identifier that was requested.
        version_id: VersionId,
    },
    /// Snapshot fingerprinting failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

// ============================================================================
// SECTION: Draft Versions
// ============================================================================

/// One stored draft version.
///
/// # Invariants
/// - `version_number` is 1-based and unique within a draft.
/// - `content_hash` is the canonical hash of `steps` at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftVersion {
    /// Version identifier.
    pub version_id: VersionId,
    /// Draft the version belongs to.
    pub draft_id: DraftId,
    /// 1-based version number within the draft.
    pub version_number: u64,
    /// Version creation timestamp.
    pub created_at: Timestamp,
    /// Optional author-supplied description.
    pub description: Option<String>,
    /// Step snapshot captured by this version.
    pub steps: Vec<DecisionStep>,
    /// Canonical content hash of the step snapshot.
    pub content_hash: HashDigest,
}

impl DraftVersion {
    /// Captures a version from a draft snapshot, fingerprinting its steps.
    ///
    /// # Errors
    ///
    /// Returns [`VersionStoreError::Hash`] when the snapshot cannot be
    /// canonicalized.
    pub fn capture(
        version_id: VersionId,
        version_number: u64,
        created_at: Timestamp,
        description: Option<String>,
        draft: &DecisionDraft,
    ) -> Result<Self, VersionStoreError> {
        let content_hash = snapshot_hash(&draft.steps)?;
        Ok(Self {
            version_id,
            draft_id: draft.draft_id.clone(),
            version_number,
            created_at,
            description,
            steps: draft.steps.clone(),
            content_hash,
        })
    }
}

// ============================================================================
// SECTION: Version Store
// ============================================================================

/// Backend-agnostic storage for draft versions.
pub trait VersionStore {
    /// Lists the stored versions for a draft, ordered by version number.
    fn list_versions(&self, draft_id: &DraftId) -> Vec<DraftVersion>;

    /// Fetches one stored version by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VersionStoreError::VersionNotFound`] when the draft has no
    /// version with that identifier.
    fn get_version(
        &self,
        draft_id: &DraftId,
        version_id: &VersionId,
    ) -> Result<DraftVersion, VersionStoreError>;

    /// Stores a version, replacing any prior version with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`VersionStoreError`] when the backend rejects the write.
    fn put_version(&mut self, version: DraftVersion) -> Result<(), VersionStoreError>;
}

/// In-memory version store for tests and single-process hosts.
///
/// # Invariants
/// - Versions are keyed by `(draft_id, version_id)`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVersionStore {
    /// Stored versions by draft and version identifier.
    versions: BTreeMap<DraftId, BTreeMap<VersionId, DraftVersion>>,
}

impl InMemoryVersionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VersionStore for InMemoryVersionStore {
    fn list_versions(&self, draft_id: &DraftId) -> Vec<DraftVersion> {
        let mut versions: Vec<DraftVersion> = self
            .versions
            .get(draft_id)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default();
        versions.sort_by_key(|version| version.version_number);
        versions
    }

    fn get_version(
        &self,
        draft_id: &DraftId,
        version_id: &VersionId,
    ) -> Result<DraftVersion, VersionStoreError> {
        self.versions
            .get(draft_id)
            .and_then(|entries| entries.get(version_id))
            .cloned()
            .ok_or_else(|| VersionStoreError::VersionNotFound {
                draft_id: draft_id.clone(),
                version_id: version_id.clone(),
            })
    }

    fn put_version(&mut self, version: DraftVersion) -> Result<(), VersionStoreError> {
        self.versions
            .entry(version.draft_id.clone())
            .or_default()
            .insert(version.version_id.clone(), version);
        Ok(())
    }
}

// ============================================================================
// SECTION: Version Comparison
// ============================================================================

/// Result of comparing two stored versions.
///
/// # Invariants
/// - `diff` is computed from `from.steps` to `to.steps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionComparison {
    /// Older side of the comparison.
    pub from: DraftVersion,
    /// Newer side of the comparison.
    pub to: DraftVersion,
    /// Id-matched step diff between the two snapshots.
    pub diff: VersionDiff,
}

/// Compares two stored versions of a draft.
///
/// Identical content hashes short-circuit to an empty diff without walking
/// the step lists.
///
/// # Errors
///
/// Returns [`VersionStoreError::VersionNotFound`] when either version is
/// absent from the store.
pub fn compare_versions(
    store: &dyn VersionStore,
    draft_id: &DraftId,
    from_id: &VersionId,
    to_id: &VersionId,
) -> Result<VersionComparison, VersionStoreError> {
    let from = store.get_version(draft_id, from_id)?;
    let to = store.get_version(draft_id, to_id)?;
    let diff = if from.content_hash == to.content_hash {
        VersionDiff::default()
    } else {
        VersionDiff::between(&from.steps, &to.steps)
    };
    Ok(VersionComparison {
        from,
        to,
        diff,
    })
}
