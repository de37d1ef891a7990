//! Rewriting the version line in place.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::VersionLocation;
use crate::error::{tagged, BumpError, Result};
use crate::locate::assignment_rest;

/// Replace the line at `location` with `<variable> = '<new_value>'`.
///
/// Every other byte of the file, including the rewritten line's own line
/// terminator, is preserved. The new content goes to a temporary file next
/// to the original which is then renamed over it.
pub fn bump(location: &VersionLocation, new_value: &str) -> Result<()> {
    validate(new_value)?;
    let path = &location.file_path;
    let content = std::fs::read_to_string(path).map_err(|source| BumpError::Write {
        path: path.clone(),
        source,
    })?;
    let updated = replace_line(&content, location, new_value).ok_or_else(|| BumpError::Path {
        path: format!("{}:{}", path.display(), location.line_number),
    })?;
    write_atomic(path, &updated).map_err(|source| BumpError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        file = %path.display(),
        line = location.line_number,
        from = %location.current_value,
        to = new_value,
        "rewrote version line"
    );
    Ok(())
}

/// The message shown after a successful bump.
pub fn confirmation(old: &str, new: &str) -> String {
    tagged(format!("Version changed from {old} to {new}"))
}

/// A version must fit inside a single-quoted literal on one line.
fn validate(new_value: &str) -> Result<()> {
    if new_value.is_empty() || new_value.contains(['\'', '\n', '\r']) {
        return Err(BumpError::InvalidVersion {
            value: new_value.to_string(),
        });
    }
    Ok(())
}

/// `content` with the addressed line swapped, or `None` if that line no
/// longer starts with the variable.
fn replace_line(content: &str, location: &VersionLocation, new_value: &str) -> Option<String> {
    let index = location.line_number.checked_sub(1)?;
    let mut out = String::with_capacity(content.len() + new_value.len());
    let mut found = false;
    for (i, line) in content.split_inclusive('\n').enumerate() {
        if i != index {
            out.push_str(line);
            continue;
        }
        let body = line.trim_end_matches(['\n', '\r']);
        assignment_rest(body, &location.variable_name)?;
        out.push_str(&location.assignment(new_value));
        out.push_str(&line[body.len()..]);
        found = true;
    }
    found.then_some(out)
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let permissions = std::fs::metadata(path)?.permissions();
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
