// Shared helpers for the integration tests: throwaway git repositories and
// a runner for the compiled binary.
#![allow(dead_code)]

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_pygit-bump"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Point git away from the developer's own global and system config.
fn isolate(cmd: &mut Command) -> &mut Command {
    cmd.env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env_remove("PGB_LOG")
}

/// A git repository in a temp dir with HEAD on a chosen branch.
pub struct Repo {
    pub dir: TempDir,
}

impl Repo {
    pub fn new(branch: &str) -> Self {
        let repo = Repo {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        repo.git(&["init", "-q"]);
        repo.checkout(branch);
        repo
    }

    /// `pgb.branch` / `pgb.path` configured and `version.py` written.
    pub fn configured(branch: &str, allowed: &str, version_file: &str) -> Self {
        let repo = Repo::new(branch);
        repo.git(&["config", "pgb.branch", allowed]);
        repo.git(&["config", "pgb.path", "version.__version__"]);
        repo.write("version.py", version_file);
        repo
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn hook_path(&self) -> PathBuf {
        self.root().join(".git").join("hooks").join("pre-commit")
    }

    pub fn git(&self, args: &[&str]) {
        let status = isolate(Command::new("git").args(args).current_dir(self.root()))
            .stdout(Stdio::null())
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {args:?} failed");
    }

    pub fn checkout(&self, branch: &str) {
        self.git(&["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")]);
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.root().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.root().join(name)).unwrap()
    }
}

/// Runs the binary in `cwd` with the given args and stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run_in(cwd: &Path, args: &[&str], stdin_input: &str) -> (String, String, i32) {
    let output = isolate(Command::new(binary_path()).args(args).current_dir(cwd))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Runs the hook as git would for `repo`, answering from `stdin_input`.
pub fn run_hook(repo: &Repo, stdin_input: &str) -> (String, String, i32) {
    let hook = repo.hook_path();
    run_in(
        repo.root(),
        &["hook", "--no-tty", "--hook-path", hook.to_str().unwrap()],
        stdin_input,
    )
}

pub fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
