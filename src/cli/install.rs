//! Git hook installation and removal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ConfigKey;
use crate::domain::DottedPath;
use crate::error::Result;
use crate::shell::{quote, Shell, SystemShell};

/// Name of the hook the shim is installed as.
pub const HOOK_NAME: &str = "pre-commit";

/// Every line the installer writes carries this marker.
const MARKER: &str = "PyGit-Bump";

/// Shim body invoking `binary` as the hook; `$0` lets it find the project.
fn shim_lines(binary: &Path) -> String {
    format!(
        "# {MARKER}: interactive version bump (auto-installed)\n\
         {} hook --hook-path \"$0\" || true # {MARKER}\n",
        quote(&binary.to_string_lossy())
    )
}

/// Install the `pre-commit` shim into `<project_root>/.git/hooks`, keeping any
/// existing hook content, and optionally write `pgb.branch` / `pgb.path`.
///
/// Returns the hook's path. Running it twice leaves a single shim.
pub fn install(
    project_root: &Path,
    binary: &Path,
    branch: Option<&str>,
    version_path: Option<&str>,
) -> Result<PathBuf> {
    let git_dir = project_root.join(".git");
    if !git_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no .git directory in {}", project_root.display()),
        )
        .into());
    }

    let shell = SystemShell::new(project_root);
    if let Some(raw) = version_path {
        DottedPath::parse(raw)?;
        set_config(&shell, ConfigKey::Path, raw)?;
    }
    if let Some(raw) = branch {
        set_config(&shell, ConfigKey::Branch, raw)?;
    }

    let hooks_dir = git_dir.join("hooks");
    fs::create_dir_all(&hooks_dir)?;
    let hook_path = hooks_dir.join(HOOK_NAME);
    write_hook(&hook_path, &shim_lines(binary))?;
    info!(hook = %hook_path.display(), "installed hook");
    Ok(hook_path)
}

fn set_config<S: Shell>(shell: &S, key: ConfigKey, value: &str) -> Result<()> {
    shell.run(&format!("git config {} {}", key.qualified(), quote(value)))?;
    info!(key = %key.qualified(), value, "wrote config");
    Ok(())
}

fn write_hook(path: &Path, shim: &str) -> Result<()> {
    let content = if path.exists() {
        let existing = fs::read_to_string(path)?;
        if existing.contains(MARKER) {
            return Ok(());
        }
        format!("{}\n\n{shim}", existing.trim_end())
    } else {
        format!("#!/bin/sh\n{shim}")
    };
    fs::write(path, content)?;
    make_executable(path)?;
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Remove the shim from the `pre-commit` hook. The file is deleted when only
/// the shebang would remain. Returns whether anything was removed.
pub fn uninstall(project_root: &Path) -> Result<bool> {
    let hook_path = project_root.join(".git").join("hooks").join(HOOK_NAME);
    if !hook_path.exists() {
        return Ok(false);
    }
    let content = fs::read_to_string(&hook_path)?;
    if !content.contains(MARKER) {
        return Ok(false);
    }

    let cleaned = remove_shim(&content);
    if cleaned.trim().is_empty() || cleaned.trim() == "#!/bin/sh" {
        fs::remove_file(&hook_path)?;
    } else {
        fs::write(&hook_path, cleaned)?;
    }
    info!(hook = %hook_path.display(), "removed hook");
    Ok(true)
}

fn remove_shim(content: &str) -> String {
    let kept: Vec<&str> = content
        .lines()
        .filter(|line| !line.contains(MARKER))
        .collect();
    format!("{}\n", kept.join("\n").trim_end())
}
