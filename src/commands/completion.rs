//! Completion command - Print shell completion setup

use anyhow::Result;
use clap_complete::Shell;

/// Setup line for a shell's rc file
fn setup_snippet(shell: Shell) -> Option<(&'static str, &'static str)> {
    match shell {
        Shell::Bash => Some(("~/.bashrc", "source <(COMPLETE=bash tfcheck)")),
        Shell::Zsh => Some(("~/.zshrc", "source <(COMPLETE=zsh tfcheck)")),
        Shell::Fish => Some((
            "~/.config/fish/config.fish",
            "source (COMPLETE=fish tfcheck | psub)",
        )),
        _ => None,
    }
}

/// Print dynamic completion setup instructions
///
/// # Errors
/// Returns an error if the shell is unknown or unsupported
pub fn cmd_completion(shell: &str) -> Result<()> {
    let parsed = shell.parse::<Shell>().map_err(|_| {
        anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
    })?;

    let Some((rc_file, line)) = setup_snippet(parsed) else {
        anyhow::bail!("Unsupported shell: {shell}");
    };

    println!("# tfcheck shell completion setup for {parsed}");
    println!("# Add this to your {rc_file}:");
    println!("{line}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_snippet_supported_shells() {
        assert_eq!(
            setup_snippet(Shell::Bash),
            Some(("~/.bashrc", "source <(COMPLETE=bash tfcheck)"))
        );
        assert!(setup_snippet(Shell::Zsh).is_some());
        assert!(setup_snippet(Shell::Fish).is_some());
    }

    #[test]
    fn test_setup_snippet_unsupported_shell() {
        assert!(setup_snippet(Shell::PowerShell).is_none());
    }

    #[test]
    fn test_cmd_completion_invalid_shell() {
        let err = cmd_completion("tcsh").unwrap_err();
        assert!(err.to_string().contains("Invalid shell: tcsh"));
    }
}
