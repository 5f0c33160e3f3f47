//! Append-only draft-version snapshots of assessment records.
//!
//! Every recalculation or publish produces a full copy-on-write snapshot;
//! history entries are immutable once created.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::{AssessmentStatus, CarbonAssessmentResult, ProductAssessmentData};

/// One immutable snapshot of an assessment record, with the result that was
/// current when the snapshot was taken (if any).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftVersion {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub data: ProductAssessmentData,
    pub result: Option<CarbonAssessmentResult>,
}

/// Append-only version log for one assessment record.
///
/// Versions are numbered from 1. Earlier versions are never rewritten; a
/// change to the record means taking a new snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftHistory {
    versions: Vector<DraftVersion>,
}

impl DraftHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `data` (and the result computed from it, if
    /// any) and return the version number assigned to it.
    pub fn snapshot(
        &mut self,
        data: &ProductAssessmentData,
        result: Option<CarbonAssessmentResult>,
    ) -> u32 {
        let version = self.versions.len() as u32 + 1;
        let mut data = data.clone();
        data.version = version;
        self.versions.push_back(DraftVersion {
            version,
            created_at: Utc::now(),
            data,
            result,
        });
        version
    }

    /// Append a published snapshot of the latest version's state. Returns
    /// the new version number, or `None` when the history is empty.
    pub fn publish(&mut self) -> Option<u32> {
        let latest = self.latest()?;
        let mut data = latest.data.clone();
        let result = latest.result.clone();
        data.status = AssessmentStatus::Published;
        Some(self.snapshot(&data, result))
    }

    pub fn latest(&self) -> Option<&DraftVersion> {
        self.versions.last()
    }

    pub fn get(&self, version: u32) -> Option<&DraftVersion> {
        if version == 0 {
            return None;
        }
        self.versions.get(version as usize - 1)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// All snapshots in version order.
    pub fn iter(&self) -> impl Iterator<Item = &DraftVersion> {
        self.versions.iter()
    }
}
