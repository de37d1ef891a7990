pub mod branch;
pub mod config;
pub mod domain;
pub mod error;
pub mod locate;
pub mod prompt;
pub mod session;
pub mod shell;
pub mod writer;

pub(crate) mod bootstrap;
pub(crate) mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use error::{BumpError, Result};
pub use session::{Outcome, Session};

/// Run the version-bump hook for a hook invoked as `hook_path`.
///
/// This is the binary entry point; it always returns normally so the commit
/// is never blocked. Library callers should drive [`Session`] directly.
pub fn run_hook(hook_path: &Path, force_stdin: bool) {
    cli::hook::run(hook_path, force_stdin)
}

/// Install the `pre-commit` shim pointing at `binary`.
pub fn run_install(
    project_root: Option<PathBuf>,
    binary: &Path,
    branch: Option<&str>,
    version_path: Option<&str>,
) -> ExitCode {
    let result = cli::project_root(project_root)
        .and_then(|root| cli::install::install(&root, binary, branch, version_path));
    match result {
        Ok(hook) => {
            println!("{}", error::tagged(format!("Installed {}", hook.display())));
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Remove the `pre-commit` shim.
pub fn run_uninstall(project_root: Option<PathBuf>) -> ExitCode {
    match cli::project_root(project_root).and_then(|root| cli::install::uninstall(&root)) {
        Ok(true) => {
            println!("{}", error::tagged("Removed pre-commit hook"));
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("{}", error::tagged("No hook installed"));
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Print the JSON status report for a project.
pub fn run_status(project_root: Option<PathBuf>) -> ExitCode {
    match cli::project_root(project_root).and_then(|root| cli::status::run(&root)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(err: &BumpError) -> ExitCode {
    cli::report(err);
    ExitCode::FAILURE
}
