use std::path::PathBuf;

use crate::error::BumpError;

/// Extension of the source files a dotted module path points into.
pub const SOURCE_EXTENSION: &str = "py";

/// A `pgb.path` value split into its module path and variable name.
///
/// `pkg.version.__version__` → module `pkg.version`, variable `__version__`.
/// The split happens on the last `.`; every module segment and the variable
/// must be non-empty and free of path separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    raw: String,
    module: String,
    variable: String,
}

impl DottedPath {
    pub fn parse(raw: &str) -> Result<Self, BumpError> {
        let invalid = || BumpError::Path {
            path: raw.to_string(),
        };
        let (module, variable) = raw.rsplit_once('.').ok_or_else(invalid)?;
        let segment_ok = |s: &str| !s.is_empty() && !s.contains(['/', '\\']);
        if !segment_ok(variable) || !module.split('.').all(segment_ok) {
            return Err(invalid());
        }
        Ok(DottedPath {
            raw: raw.to_string(),
            module: module.to_string(),
            variable: variable.to_string(),
        })
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Path of the module's source file relative to the project root.
    /// `a.b.c` → `a/b/c.py`.
    pub fn module_file(&self) -> PathBuf {
        let mut path: PathBuf = self.module.split('.').collect();
        path.set_extension(SOURCE_EXTENSION);
        path
    }
}

impl std::fmt::Display for DottedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
