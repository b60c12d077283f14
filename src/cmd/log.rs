//! Log command implementation
//!
//! Handles the `sizewatch log` command which prints the recorded size
//! history, oldest revision first.

use anyhow::Result;
use console::style;

use crate::fmt::{format_bytes, CHART};
use crate::tracker::{SizeStore, DEFAULT_STORE_FILE};

/// Print the recorded size history.
///
/// # Errors
///
/// Returns an error when the store exists but does not parse as a size
/// history.
pub fn cmd_log(path: Option<&str>, emoji: bool) -> Result<()> {
    let store = SizeStore::new(path.unwrap_or(DEFAULT_STORE_FILE));
    let history = store.load()?;

    if history.is_empty() {
        println!("No snapshots recorded in {}", store.path().display());
        return Ok(());
    }

    if emoji {
        println!("{} Recorded size history", CHART);
    } else {
        println!("Recorded size history");
    }

    for snapshot in history.iter() {
        println!("\n{}", style(&snapshot.id).bold());
        for size in &snapshot.sizes {
            println!(
                "  {:<32} {:>10}  gzip {:>10}  br {:>10}",
                size.name,
                format_bytes(size.original),
                format_bytes(size.gzip),
                format_bytes(size.brotli),
            );
        }
    }

    Ok(())
}
