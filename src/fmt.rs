//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Package emoji for artifact report lines
pub const PACKAGE: Emoji = Emoji("📦", "*");

/// Chart emoji for history listings
pub const CHART: Emoji = Emoji("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use sizewatch::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a signed byte delta, with an explicit `+` on growth
///
/// # Examples
///
/// ```
/// use sizewatch::fmt::format_signed_bytes;
///
/// assert_eq!(format_signed_bytes(100), "+100 B");
/// assert_eq!(format_signed_bytes(-2048), "-2.00 KB");
/// assert_eq!(format_signed_bytes(0), "0 B");
/// ```
pub fn format_signed_bytes(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", format_bytes(delta as u64))
    } else if delta < 0 {
        format!("-{}", format_bytes(delta.unsigned_abs()))
    } else {
        "0 B".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_various_sizes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(2_621_440), "2.50 MB");
    }

    #[test]
    fn test_format_signed_bytes_marks_growth_explicitly() {
        assert_eq!(format_signed_bytes(1), "+1 B");
        assert_eq!(format_signed_bytes(1536), "+1.50 KB");
    }

    #[test]
    fn test_format_signed_bytes_negative_and_zero() {
        assert_eq!(format_signed_bytes(-1), "-1 B");
        assert_eq!(format_signed_bytes(-1_048_576), "-1.00 MB");
        assert_eq!(format_signed_bytes(0), "0 B");
    }

    #[test]
    fn test_format_signed_bytes_extremes_do_not_overflow() {
        assert_eq!(format_signed_bytes(i64::MIN), format!("-{}", format_bytes(i64::MIN.unsigned_abs())));
    }
}
