use std::io;
use std::path::Path;

use tracing::debug;

use crate::bootstrap;
use crate::cli::report;
use crate::prompt::Prompt;
use crate::session::Session;

/// Execute the hook: resolve the project from `hook_path`, gate on the
/// branch, and offer to bump the version.
///
/// Never fails: every error is printed with the tool's tag and the
/// process exits 0 so the commit goes ahead.
pub fn run(hook_path: &Path, force_stdin: bool) {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            report(&e.into());
            return;
        }
    };
    let session = Session::new(bootstrap::resolve_project_root(hook_path, &cwd));
    let mut prompt = Prompt::new(bootstrap::open_input(force_stdin), io::stdout());

    match session.run(&mut prompt) {
        Ok(outcome) => debug!(?outcome, "hook finished"),
        Err(e) => report(&e),
    }
}
