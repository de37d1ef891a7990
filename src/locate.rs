//! Resolving a dotted path to the line holding the version.
//!
//! The module file is never executed: the current value is read straight
//! from the assignment line.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::{DottedPath, VersionLocation};
use crate::error::{BumpError, Result};

/// Find the line assigning `path.variable()` inside the module `path` names,
/// resolved relative to `project_root`.
///
/// The target is the first line that starts with the variable name followed
/// by a non-identifier character and assigns it a literal; bare declarations
/// such as `__version__: str` are passed over. Fails with
/// [`BumpError::Path`] if the file cannot be read or no such line exists.
pub fn locate(project_root: &Path, path: &DottedPath) -> Result<VersionLocation> {
    let invalid = || BumpError::Path {
        path: path.to_string(),
    };
    let file_path = project_root.join(path.module_file());
    let content = std::fs::read_to_string(&file_path).map_err(|e| {
        debug!(file = %file_path.display(), error = %e, "cannot read version file");
        invalid()
    })?;

    let variable = path.variable();
    let (index, current_value) = content
        .lines()
        .enumerate()
        .find_map(|(i, line)| {
            assignment_rest(line, variable)
                .and_then(literal_value)
                .map(|value| (i, value))
        })
        .ok_or_else(|| {
            debug!(file = %file_path.display(), variable, "no line assigns variable");
            invalid()
        })?;

    info!(
        file = %file_path.display(),
        line = index + 1,
        current = %current_value,
        "located version"
    );
    Ok(VersionLocation {
        file_path,
        line_number: index + 1,
        variable_name: variable.to_string(),
        current_value,
    })
}

/// If `line` starts with `variable` as a whole identifier, the text after it.
pub(crate) fn assignment_rest<'l>(line: &'l str, variable: &str) -> Option<&'l str> {
    let rest = line.strip_prefix(variable)?;
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => Some(rest),
    }
}

/// The literal on the right of `= …`, after an optional `: <annotation>`.
///
/// Quoted literals yield their contents; bare literals yield the text up to
/// an inline `#` comment. In a chained assignment (`a = b = '1'`) the last
/// target's literal is taken.
fn literal_value(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    let rest = match rest.strip_prefix(':') {
        Some(annotated) => &annotated[annotated.find('=')?..],
        None => rest,
    };
    let mut rhs = assigned(rest)?.trim();
    while let Some(next) = chained_target(rhs) {
        rhs = next.trim();
    }
    let value = match rhs.chars().next()? {
        quote @ ('\'' | '"') => {
            let body = &rhs[1..];
            &body[..body.find(quote)?]
        }
        _ => rhs.split('#').next().unwrap_or_default().trim_end(),
    };
    (!value.is_empty()).then(|| value.to_string())
}

/// Text after a leading `=`, unless it is a `==` comparison.
fn assigned(text: &str) -> Option<&str> {
    let rhs = text.strip_prefix('=')?;
    (!rhs.starts_with('=')).then_some(rhs)
}

/// For `name = …`, the text after that `=`.
fn chained_target(rhs: &str) -> Option<&str> {
    let end = rhs
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rhs.len());
    let name = &rhs[..end];
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    assigned(rhs[end..].trim_start())
}
