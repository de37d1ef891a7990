//! Deciding whether the checked-out branch is one the hook should act on.

use tracing::{debug, info};

use crate::config::ConfigReader;
use crate::error::Result;
use crate::shell::Shell;

/// Prints the short name of the checked-out branch. Fails on a detached HEAD.
pub const CURRENT_BRANCH_COMMAND: &str = "git symbolic-ref --short HEAD";

/// Short name of the branch HEAD points at.
pub fn current_branch<S: Shell>(shell: &S) -> Result<String> {
    let out = shell.run_text(CURRENT_BRANCH_COMMAND)?;
    Ok(out.strip_suffix('\n').unwrap_or(&out).to_string())
}

/// Result of checking the current branch against `pgb.branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCheck {
    pub branch: String,
    pub allowed: bool,
}

/// Compare the current branch against the configured prefixes.
pub fn check<S: Shell>(shell: &S) -> Result<BranchCheck> {
    let prefixes = ConfigReader::new(shell).branch_prefixes()?;
    let branch = current_branch(shell)?;
    let allowed = prefixes.allows(&branch);
    if allowed {
        info!(branch = %branch, "branch allowed");
    } else {
        debug!(branch = %branch, prefixes = ?prefixes.as_slice(), "branch not in allow-list");
    }
    Ok(BranchCheck { branch, allowed })
}

/// True iff the current branch starts with one of the configured prefixes.
pub fn is_allowed<S: Shell>(shell: &S) -> Result<bool> {
    check(shell).map(|c| c.allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BumpError;
    use crate::shell::scripted::ScriptedShell;

    #[test]
    fn current_branch_strips_newline() {
        let shell = ScriptedShell::git("release/1.0.0", "");
        assert_eq!(current_branch(&shell).unwrap(), "release/1.0.0");
    }

    #[test]
    fn allowed_when_prefix_matches() {
        let shell = ScriptedShell::git("release/1.0.0", "pgb.branch=master,release\n");
        assert!(is_allowed(&shell).unwrap());
    }

    #[test]
    fn not_allowed_on_other_branch() {
        let shell = ScriptedShell::git("develop", "pgb.branch=master\n");
        let check = check(&shell).unwrap();
        assert_eq!(
            check,
            BranchCheck {
                branch: "develop".into(),
                allowed: false
            }
        );
    }

    #[test]
    fn detached_head_is_command_error() {
        let shell = ScriptedShell::new().with("git config --list", "pgb.branch=master\n");
        let err = is_allowed(&shell).unwrap_err();
        assert!(
            matches!(err, BumpError::Command { ref command } if command == CURRENT_BRANCH_COMMAND)
        );
    }

    #[test]
    fn missing_branch_key_reported_before_branch_query() {
        let shell = ScriptedShell::git("master", "user.name=x\n");
        let err = is_allowed(&shell).unwrap_err();
        assert!(matches!(err, BumpError::MissingConfigKey { .. }));
        assert_eq!(*shell.calls.borrow(), ["git config --list"]);
    }
}
