//! Error type shared by every stage of the bump workflow.

use std::path::PathBuf;

use miette::Diagnostic;

/// Tag prepended to every message the tool shows the user.
pub const TAG: &str = "[PyGit-Bump]";

/// Prefix `text` with the tool's tag.
pub fn tagged(text: impl std::fmt::Display) -> String {
    format!("{TAG} {text}")
}

pub type Result<T, E = BumpError> = std::result::Result<T, E>;

/// Errors raised while gating, locating, prompting or rewriting.
///
/// The hook never propagates these as a failing exit status; they are
/// rendered with [`render`] and the commit goes ahead.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum BumpError {
    /// An external command exited non-zero or could not be spawned.
    #[error("Error while executing command [{command}]")]
    #[diagnostic(code(pgb::command))]
    Command { command: String },

    /// The configured dotted path does not resolve to a version line.
    #[error("Provided path is not valid [path:'{path}']")]
    #[diagnostic(
        code(pgb::path),
        help("point pgb.path at `module.VARIABLE`, e.g. `version.__version__`")
    )]
    Path { path: String },

    /// A required `pgb.*` key is absent from git config.
    #[error("Missing git config key [pgb.{key}]")]
    #[diagnostic(code(pgb::missing_key), help("set it with `git config pgb.{key} <value>`"))]
    MissingConfigKey { key: String },

    /// The version typed by the user cannot be written as a quoted literal.
    #[error("Version is not valid [version:'{value}']")]
    #[diagnostic(
        code(pgb::version),
        help("use a single non-empty line without quote characters")
    )]
    InvalidVersion { value: String },

    #[error("Could not rewrite version file [{}]", path.display())]
    #[diagnostic(code(pgb::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(pgb::json))]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(pgb::io))]
    Io(#[from] std::io::Error),
}

/// Render an error the way the hook prints it: a blank line, the tagged
/// message, an optional tagged hint, and a trailing blank line.
pub fn render(err: &BumpError) -> String {
    let mut out = format!("\n{}\n", tagged(err));
    if let Some(help) = err.help() {
        out.push_str(&tagged(format!("hint: {help}")));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_prefixes_message() {
        assert_eq!(tagged("Test"), "[PyGit-Bump] Test");
    }

    #[test]
    fn command_error_message() {
        let err = BumpError::Command {
            command: "Test".into(),
        };
        assert_eq!(
            render(&err),
            "\n[PyGit-Bump] Error while executing command [Test]\n"
        );
    }

    #[test]
    fn path_error_message_has_hint() {
        let err = BumpError::Path {
            path: "Test".into(),
        };
        let rendered = render(&err);
        assert!(rendered.starts_with("\n[PyGit-Bump] Provided path is not valid [path:'Test']\n"));
        assert!(rendered.contains("[PyGit-Bump] hint: point pgb.path at"));
    }

    #[test]
    fn missing_key_hint_names_key() {
        let err = BumpError::MissingConfigKey {
            key: "branch".into(),
        };
        assert_eq!(err.to_string(), "Missing git config key [pgb.branch]");
        assert_eq!(
            err.help().map(|h| h.to_string()).as_deref(),
            Some("set it with `git config pgb.branch <value>`")
        );
    }

    #[test]
    fn write_error_names_file() {
        let err = BumpError::Write {
            path: PathBuf::from("/tmp/version.py"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.to_string(),
            "Could not rewrite version file [/tmp/version.py]"
        );
    }
}
