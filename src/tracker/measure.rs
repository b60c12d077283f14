//! Artifact size measurement

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

use super::snapshot::ArtifactSize;

/// Measure one artifact's raw and compressed byte sizes.
///
/// Sizes are counted over the encoded bytes, so multi-byte characters
/// contribute their full encoded width. Both compressors run at their
/// default settings. Pure function of (name, content); the `new` flag is
/// left unset — it belongs to diff results, not measurements.
///
/// # Examples
///
/// ```
/// use sizewatch::tracker::measure;
///
/// let size = measure("bundle.js", b"console.log(42);").unwrap();
/// assert_eq!(size.original, 16);
/// assert!(size.gzip > 0);
/// assert!(size.brotli > 0);
/// ```
pub fn measure(name: &str, content: &[u8]) -> Result<ArtifactSize> {
    Ok(ArtifactSize {
        name: name.to_string(),
        original: content.len() as u64,
        gzip: gzip_len(content)?,
        brotli: brotli_len(content)?,
        new: None,
    })
}

fn gzip_len(content: &[u8]) -> Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(content)
        .context("Failed to gzip artifact content")?;
    let compressed = encoder
        .finish()
        .context("Failed to finalize gzip stream")?;
    Ok(compressed.len() as u64)
}

fn brotli_len(content: &[u8]) -> Result<u64> {
    let params = brotli::enc::BrotliEncoderParams::default();
    let mut input = content;
    let mut compressed = Vec::new();
    brotli::BrotliCompress(&mut input, &mut compressed, &params)
        .context("Failed to brotli-compress artifact content")?;
    Ok(compressed.len() as u64)
}
