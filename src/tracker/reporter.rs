//! Console formatting for per-artifact report lines

use console::style;

use super::diff::SizeDelta;
use super::snapshot::ArtifactSize;
use crate::fmt::{format_bytes, format_signed_bytes};

/// Formats one report line per measured artifact.
///
/// Carries no state beyond the label mode: a brand-new artifact renders
/// its deltas in an informational color whatever their sign, while known
/// artifacts render growth in red with an explicit `+` and anything else
/// in green.
pub struct SizeReporter {
    emoji: bool,
}

impl SizeReporter {
    /// Create a reporter; `emoji` selects pictographic or plain labels
    pub fn new(emoji: bool) -> Self {
        Self { emoji }
    }

    /// Format an artifact's sizes with colored deltas
    pub fn format_line(&self, size: &ArtifactSize, delta: &SizeDelta) -> String {
        let label = if self.emoji { "📦 " } else { "" };
        format!(
            "{}{} {} ({}) gzip: {} ({}) br: {} ({})",
            label,
            style(&size.name).bold(),
            format_bytes(size.original),
            self.format_delta(delta.original, delta.new),
            format_bytes(size.gzip),
            self.format_delta(delta.gzip, delta.new),
            format_bytes(size.brotli),
            self.format_delta(delta.brotli, delta.new),
        )
    }

    fn format_delta(&self, delta: i64, new: bool) -> String {
        let text = format_signed_bytes(delta);
        if new {
            style(text).cyan().to_string()
        } else if delta > 0 {
            style(text).red().to_string()
        } else {
            style(text).green().to_string()
        }
    }
}
