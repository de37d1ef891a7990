//! One hook invocation: gate on the branch, locate the version, ask, rewrite.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::branch::{self, BranchCheck};
use crate::config::ConfigReader;
use crate::domain::VersionLocation;
use crate::error::Result;
use crate::locate;
use crate::prompt::Prompt;
use crate::shell::{Shell, SystemShell};
use crate::writer;

/// What a run of the workflow ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current branch is not in the allow-list; nothing was asked.
    Skipped { branch: String },
    /// The user declined (or input ended) and the file was left alone.
    Declined,
    Bumped { from: String, to: String },
}

/// Read-only snapshot of what the hook would act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub project_root: PathBuf,
    pub branch: String,
    pub allowed: bool,
    pub location: Option<VersionLocation>,
}

/// State for one invocation, bound to an explicit project root.
pub struct Session<S: Shell> {
    project_root: PathBuf,
    shell: S,
}

impl Session<SystemShell> {
    /// A session whose git commands run inside `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let shell = SystemShell::new(project_root.clone());
        Session::with_shell(project_root, shell)
    }
}

impl<S: Shell> Session<S> {
    pub fn with_shell(project_root: impl Into<PathBuf>, shell: S) -> Self {
        Session {
            project_root: project_root.into(),
            shell,
        }
    }

    pub fn check_branch(&self) -> Result<BranchCheck> {
        branch::check(&self.shell)
    }

    /// Resolve `pgb.path` to the version line.
    pub fn locate(&self) -> Result<VersionLocation> {
        let path = ConfigReader::new(&self.shell).version_path()?;
        locate::locate(&self.project_root, &path)
    }

    /// The full workflow. Returns early and silently when the branch is not
    /// allowed; `pgb.path` is only read once the gate passes.
    pub fn run<R: BufRead, W: Write>(&self, prompt: &mut Prompt<R, W>) -> Result<Outcome> {
        let check = self.check_branch()?;
        if !check.allowed {
            return Ok(Outcome::Skipped {
                branch: check.branch,
            });
        }

        let location = self.locate()?;
        if !prompt.confirm(&location.current_value)? {
            info!("bump declined");
            return Ok(Outcome::Declined);
        }
        let Some(new_version) = prompt.new_version()? else {
            info!("input ended before a version was given");
            return Ok(Outcome::Declined);
        };

        writer::bump(&location, &new_version)?;
        prompt.say(&format!(
            "{}\n",
            writer::confirmation(&location.current_value, &new_version)
        ))?;
        Ok(Outcome::Bumped {
            from: location.current_value,
            to: new_version,
        })
    }

    /// Branch decision plus, when allowed, the located version.
    pub fn status(&self) -> Result<StatusReport> {
        let check = self.check_branch()?;
        let location = if check.allowed {
            Some(self.locate()?)
        } else {
            None
        };
        Ok(StatusReport {
            project_root: self.project_root.clone(),
            branch: check.branch,
            allowed: check.allowed,
            location,
        })
    }
}
