use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sizewatch::cmd;
use std::process;

/// Build artifact size tracker
///
/// sizewatch measures each build artifact three ways (raw, gzip and brotli
/// bytes), keeps a per-commit history in a JSON store, and reports the
/// delta against the previous recorded snapshot.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure artifacts and record them into the size store
    Track {
        /// Artifact files to measure
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Store file path (defaults to sizewatch.json in the working directory)
        #[arg(short, long)]
        path: Option<String>,

        /// Revision id to record under (defaults to the short commit hash)
        #[arg(long)]
        id: Option<String>,

        /// Replace measurements already recorded for this revision
        #[arg(long)]
        overwrite: bool,

        /// Persist the store even with uncommitted changes
        #[arg(long, conflicts_with = "no_write")]
        write: bool,

        /// Never persist the store
        #[arg(long)]
        no_write: bool,
    },

    /// Print the recorded size history
    Log {
        /// Store file path (defaults to sizewatch.json in the working directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();
    let emoji = !cli.no_emoji;

    let result = match &cli.command {
        Some(Commands::Track {
            files,
            path,
            id,
            overwrite,
            write,
            no_write,
        }) => {
            let write = match (*write, *no_write) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd::cmd_track(files, path.as_deref(), id.as_deref(), *overwrite, write, emoji)
        }
        Some(Commands::Log { path }) => cmd::cmd_log(path.as_deref(), emoji),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("sizewatch v{}", env!("CARGO_PKG_VERSION"));
            println!("Build artifact size tracker\n");
            println!("Usage: sizewatch <COMMAND>\n");
            println!("Commands:");
            println!("  track        Measure artifacts and record them into the size store");
            println!("  log          Print the recorded size history");
            println!("  completions  Generate shell completions");
            println!("\nRun 'sizewatch <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use sizewatch::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
