//! Completions command implementation
//!
//! Handles the `sizewatch completions` command which generates shell
//! completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// sizewatch completions bash > /etc/bash_completion.d/sizewatch
///
/// # Zsh
/// sizewatch completions zsh > ~/.zfunc/_sizewatch
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("sizewatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build artifact size tracker")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("track").about("Measure artifacts and record them into the size store"))
        .subcommand(Command::new("log").about("Print the recorded size history"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "sizewatch".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    #[test]
    fn test_cmd_completions_all_shells_supported() {
        // Verify all major shells are available
        let _bash = Shell::Bash;
        let _zsh = Shell::Zsh;
        let _fish = Shell::Fish;
        let _powershell = Shell::PowerShell;
    }
}
