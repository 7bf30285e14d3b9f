//! Probe error types.
//!
//! Every fallible operation in this crate returns a [`ProbeError`] instead of
//! terminating the process. Each error carries a [`ErrorKind`] so the
//! outermost caller can decide whether the condition is worth aborting for:
//! a missing header directory is fatal to a test run, while a missing
//! candidate command usually has a fallback.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Whether a caller can reasonably continue after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller may try an alternative (e.g. another candidate command).
    Recoverable,
    /// The surrounding test run cannot proceed; the outermost caller
    /// should terminate with a non-zero status.
    Unrecoverable,
}

/// Error produced by environment probing operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No directory in the search list contained a file matching the pattern.
    #[error("No '{pattern}' in {}{}", quoted_paths(.searched), hint_suffix(.hint))]
    NotFound {
        pattern: String,
        searched: Vec<PathBuf>,
        hint: Option<String>,
    },

    /// None of the candidate commands exist in the search path.
    #[error("No command from {} in path {path}", quoted_strings(.candidates))]
    CommandNotFound {
        candidates: Vec<String>,
        path: String,
    },

    /// An external tool could not be launched.
    ///
    /// The cause is part of the message rather than a source chain, so the
    /// line reaches stderr exactly once.
    #[error("Unable to run {}: {error}", .command.display())]
    Spawn { command: PathBuf, error: io::Error },

    /// A search pattern was not valid shell-glob syntax.
    #[error("invalid glob pattern '{pattern}': {error}")]
    BadPattern {
        pattern: String,
        error: glob::PatternError,
    },
}

impl ProbeError {
    /// Classify the error for termination policy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbeError::NotFound { .. } | ProbeError::Spawn { .. } => ErrorKind::Unrecoverable,
            ProbeError::CommandNotFound { .. } | ProbeError::BadPattern { .. } => {
                ErrorKind::Recoverable
            }
        }
    }
}

fn quoted_paths(paths: &[PathBuf]) -> String {
    let items: Vec<String> = paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect();
    format!("[{}]", items.join(", "))
}

fn quoted_strings(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
    format!("[{}]", items.join(", "))
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(h) if !h.is_empty() => format!("\n{}", h),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_format() {
        let err = ProbeError::NotFound {
            pattern: "stdio.h".to_string(),
            searched: vec![
                PathBuf::from("/usr/include"),
                PathBuf::from("/usr/local/include"),
            ],
            hint: None,
        };

        assert_eq!(
            err.to_string(),
            "No 'stdio.h' in ['/usr/include', '/usr/local/include']"
        );
        assert_eq!(err.kind(), ErrorKind::Unrecoverable);
    }

    #[test]
    fn test_not_found_message_with_hint() {
        let err = ProbeError::NotFound {
            pattern: "llvm/IR/*.h".to_string(),
            searched: vec![PathBuf::from("/opt/llvm/include")],
            hint: Some("install the LLVM development headers".to_string()),
        };

        let message = err.to_string();
        assert_eq!(
            message,
            "No 'llvm/IR/*.h' in ['/opt/llvm/include']\ninstall the LLVM development headers"
        );
    }

    #[test]
    fn test_empty_hint_is_omitted() {
        let err = ProbeError::NotFound {
            pattern: "a".to_string(),
            searched: vec![PathBuf::from("/x")],
            hint: Some(String::new()),
        };

        assert_eq!(err.to_string(), "No 'a' in ['/x']");
    }

    #[test]
    fn test_command_not_found_message() {
        let err = ProbeError::CommandNotFound {
            candidates: vec!["llvm-config33".to_string(), "llvm-config".to_string()],
            path: "/usr/bin:/usr/local/bin".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "No command from ['llvm-config33', 'llvm-config'] in path /usr/bin:/usr/local/bin"
        );
        assert_eq!(err.kind(), ErrorKind::Recoverable);
    }

    #[test]
    fn test_spawn_is_unrecoverable() {
        let err = ProbeError::Spawn {
            command: PathBuf::from("/no/such/tool"),
            error: io::Error::from(io::ErrorKind::NotFound),
        };

        assert!(err.to_string().starts_with("Unable to run /no/such/tool:"));
        assert_eq!(err.kind(), ErrorKind::Unrecoverable);
    }
}
