//! Reading the `pgb.*` settings out of git config.

use tracing::debug;

use crate::domain::{BranchPrefixes, DottedPath};
use crate::error::{BumpError, Result};
use crate::shell::Shell;

/// Namespace of every key the hook reads.
pub const SECTION: &str = "pgb";

/// Lists every config entry visible from the project, one `key=value` per line.
pub const LIST_COMMAND: &str = "git config --list";

/// The two settings the hook understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `pgb.branch`: comma-separated branch-name prefixes.
    Branch,
    /// `pgb.path`: dotted `module.VARIABLE` reference.
    Path,
}

impl ConfigKey {
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::Branch => "branch",
            ConfigKey::Path => "path",
        }
    }

    /// Fully qualified key, e.g. `pgb.branch`.
    pub fn qualified(self) -> String {
        format!("{SECTION}.{}", self.name())
    }
}

/// Reads settings through a [`Shell`] positioned in the project root.
pub struct ConfigReader<'a, S: Shell> {
    shell: &'a S,
}

impl<'a, S: Shell> ConfigReader<'a, S> {
    pub fn new(shell: &'a S) -> Self {
        ConfigReader { shell }
    }

    /// Raw value of `pgb.<key>`.
    ///
    /// Fails with [`BumpError::Command`] if git cannot list its config and
    /// with [`BumpError::MissingConfigKey`] if the key is not set.
    pub fn get(&self, key: ConfigKey) -> Result<String> {
        let listing = self.shell.run_text(LIST_COMMAND)?;
        let value = parse_value(&listing, key).ok_or_else(|| BumpError::MissingConfigKey {
            key: key.name().to_string(),
        })?;
        debug!(key = %key.qualified(), value = %value, "read config");
        Ok(value)
    }

    pub fn branch_prefixes(&self) -> Result<BranchPrefixes> {
        self.get(ConfigKey::Branch).map(|raw| BranchPrefixes::parse(&raw))
    }

    pub fn version_path(&self) -> Result<DottedPath> {
        DottedPath::parse(&self.get(ConfigKey::Path)?)
    }
}

/// Extract the value of `pgb.<key>` from `git config --list` output.
///
/// Strips exactly the `pgb.<key>=` prefix and the line terminator; the rest
/// is returned untouched. When the key is listed more than once (system,
/// global and local scopes) the last entry wins, as it does for git.
pub fn parse_value(listing: &str, key: ConfigKey) -> Option<String> {
    let prefix = format!("{}=", key.qualified());
    listing
        .split('\n')
        .filter_map(|line| line.strip_prefix(prefix.as_str()))
        .last()
        .map(str::to_string)
}
