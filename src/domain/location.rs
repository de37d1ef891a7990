use std::path::PathBuf;

use serde::Serialize;

/// Where the version variable lives and what it currently holds.
///
/// `line_number` is 1-based and addresses the line that begins with
/// `variable_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionLocation {
    pub file_path: PathBuf,
    pub line_number: usize,
    pub variable_name: String,
    pub current_value: String,
}

impl VersionLocation {
    /// The text the addressed line is rewritten to for `new_value`.
    pub fn assignment(&self, new_value: &str) -> String {
        format!("{} = '{}'", self.variable_name, new_value)
    }
}
