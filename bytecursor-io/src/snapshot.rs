//! JSON snapshot representation of a region.
//!
//! A snapshot is a literal enumeration of the region's bytes behind a
//! kind tag: `{"kind": "region", "data": [1, 2, 3]}`. It exists for
//! debugging and test fixtures, not as a compact wire format.

use crate::error::{Error, Result};
use bytecursor_core::Region;
use serde::{Deserialize, Serialize};

/// Kind tag written into every snapshot.
pub const SNAPSHOT_KIND: &str = "region";

/// A serializable copy of a region's bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Always [`SNAPSHOT_KIND`] for snapshots this library writes.
    pub kind: String,
    /// The region's bytes, in order.
    pub data: Vec<u8>,
}

impl Snapshot {
    /// Captures a region's current bytes.
    #[must_use]
    pub fn capture(region: &Region) -> Self {
        Self {
            kind: SNAPSHOT_KIND.to_string(),
            data: region.to_vec(),
        }
    }

    /// Rebuilds a region from the snapshot.
    ///
    /// # Errors
    /// Returns [`Error::SnapshotKind`] if the kind tag is foreign.
    pub fn into_region(self) -> Result<Region> {
        if self.kind != SNAPSHOT_KIND {
            return Err(Error::SnapshotKind {
                expected: SNAPSHOT_KIND.to_string(),
                found: self.kind,
            });
        }
        Ok(Region::wrap(self.data))
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Region> for Snapshot {
    fn from(region: &Region) -> Self {
        Self::capture(region)
    }
}
