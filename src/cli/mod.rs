pub mod hook;
pub mod install;
pub mod status;

use std::path::PathBuf;

use crate::error::{render, BumpError};

/// Explicit `--project-root`, or the current directory.
pub(crate) fn project_root(explicit: Option<PathBuf>) -> Result<PathBuf, BumpError> {
    match explicit {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

/// Print an error the way every subcommand reports it.
pub(crate) fn report(err: &BumpError) {
    println!("{}", render(err));
}
