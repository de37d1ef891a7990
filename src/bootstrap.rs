//! Locating the project from the hook's own path and opening the terminal.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

/// Hooks live in `<root>/.git/hooks/`, so the root is two levels above the
/// hook's directory.
const LEVELS_ABOVE_HOOK_DIR: usize = 2;

/// Project root for a hook invoked as `invocation`, resolving a relative
/// invocation against `cwd`.
///
/// Purely lexical: `..` and `.` are collapsed without touching the
/// filesystem, so symlinked hook directories resolve through the path as
/// written.
pub fn resolve_project_root(invocation: &Path, cwd: &Path) -> PathBuf {
    let absolute = cwd.join(invocation);
    let mut root = normalize(&absolute);
    root.pop();
    for _ in 0..LEVELS_ABOVE_HOOK_DIR {
        root.pop();
    }
    debug!(invocation = %invocation.display(), root = %root.display(), "resolved project root");
    root
}

/// Collapse `.` and `..` components logically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Where interactive answers come from.
///
/// Git runs hooks with stdin redirected from `/dev/null`, so unless stdin is
/// already a terminal (or `force_stdin` is set) the controlling terminal is
/// opened directly. Falls back to stdin when there is none.
pub fn open_input(force_stdin: bool) -> Box<dyn BufRead> {
    let stdin = io::stdin();
    if force_stdin || stdin.is_terminal() {
        return Box::new(stdin.lock());
    }
    match File::open("/dev/tty") {
        Ok(tty) => Box::new(BufReader::new(tty)),
        Err(e) => {
            warn!(error = %e, "no controlling terminal, reading answers from stdin");
            Box::new(stdin.lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_hook_path() {
        assert_eq!(
            resolve_project_root(Path::new("/work/proj/.git/hooks/pre-commit"), Path::new("/x")),
            Path::new("/work/proj")
        );
    }

    #[test]
    fn relative_hook_path_uses_cwd() {
        assert_eq!(
            resolve_project_root(Path::new(".git/hooks/pre-commit"), Path::new("/work/proj")),
            Path::new("/work/proj")
        );
    }

    #[test]
    fn dot_segments_collapse() {
        assert_eq!(
            resolve_project_root(
                Path::new("./sub/../.git/./hooks/pre-commit"),
                Path::new("/work/proj")
            ),
            Path::new("/work/proj")
        );
    }

    #[test]
    fn invoked_from_inside_hooks_dir() {
        assert_eq!(
            resolve_project_root(Path::new("pre-commit"), Path::new("/work/proj/.git/hooks")),
            Path::new("/work/proj")
        );
    }

    #[test]
    fn normalize_never_climbs_above_root() {
        assert_eq!(normalize(Path::new("/a/../../b")), Path::new("/b"));
    }
}
