//! Signed size deltas against the previous snapshot

use super::snapshot::{ArtifactSize, Snapshot};

/// Signed difference between a measurement and its baseline.
///
/// Deltas are an explicit enumeration of the three size metrics in a
/// signed type; `new` records that the baseline was the zero-default
/// because no prior entry existed, which governs presentation downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeDelta {
    /// Artifact identifier
    pub name: String,
    /// Uncompressed delta in bytes
    pub original: i64,
    /// Gzip delta in bytes
    pub gzip: i64,
    /// Brotli delta in bytes
    pub brotli: i64,
    /// True when no prior measurement existed for this artifact
    pub new: bool,
}

/// Compute current − previous for one artifact.
///
/// The baseline is the entry sharing `current.name` inside `previous`; a
/// missing previous snapshot, or one without this artifact, falls back to
/// the zero baseline and marks the delta new. A found baseline is never
/// treated as new, whatever flag it was stored with.
pub fn diff(previous: Option<&Snapshot>, current: &ArtifactSize) -> SizeDelta {
    match previous.and_then(|snapshot| snapshot.get(&current.name)) {
        Some(baseline) => SizeDelta {
            name: current.name.clone(),
            original: current.original as i64 - baseline.original as i64,
            gzip: current.gzip as i64 - baseline.gzip as i64,
            brotli: current.brotli as i64 - baseline.brotli as i64,
            new: false,
        },
        None => SizeDelta {
            name: current.name.clone(),
            original: current.original as i64,
            gzip: current.gzip as i64,
            brotli: current.brotli as i64,
            new: true,
        },
    }
}
