//! Shell completion command implementation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::BreatheError;

/// Generate a completion script for `shell`.
///
/// # Errors
///
/// Returns `BreatheError::Config` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, BreatheError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "breathe", &mut buf);
    String::from_utf8(buf).map_err(|e| BreatheError::Config(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_name_binary() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("breathe"));
    }

    #[test]
    fn test_fish_completions_include_subcommands() {
        let script = completions(Shell::Fish).unwrap();
        assert!(script.contains("timings"));
        assert!(script.contains("session"));
    }
}
