//! Configuration-reporting tool access.
//!
//! Tools in the `llvm-config` family report build and install settings when
//! invoked with `--<key>` style arguments. [`ToolConfig`] wraps one of those
//! tools behind a key lookup. The handle is constructed explicitly and
//! passed around, never stashed in a global.

use std::path::{Path, PathBuf};

use crate::error::ProbeError;
use crate::search;
use crate::util::ProcessBuilder;

/// Handle to a configuration-reporting executable.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    command: PathBuf,
}

impl ToolConfig {
    /// Wrap an already-resolved tool path.
    pub fn new(command: impl Into<PathBuf>) -> Self {
        ToolConfig {
            command: command.into(),
        }
    }

    /// Resolve the first available candidate in `path_list` and wrap it.
    ///
    /// A miss is recoverable: the caller may have another candidate set or
    /// an explicit tool path to fall back on.
    pub fn discover<S: AsRef<str>>(candidates: &[S], path_list: &str) -> Result<Self, ProbeError> {
        let command = search::which(candidates, path_list)?;
        tracing::debug!("using config tool {}", command.display());
        Ok(ToolConfig::new(command))
    }

    /// Path of the wrapped tool.
    pub fn command(&self) -> &Path {
        &self.command
    }

    /// Query one value: runs `<tool> --<key>` and returns trimmed stdout.
    ///
    /// Every call re-invokes the tool; results are not cached. The tool's
    /// exit status is not inspected, only its output.
    pub fn get(&self, key: &str) -> Result<String, ProbeError> {
        let output = ProcessBuilder::new(&self.command)
            .arg(format!("--{}", key))
            .capture_stdout()?;
        Ok(output.trim().to_string())
    }
}

/// How a preprocessor expects its output file on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFlagDialect {
    /// `cpp in -o out`
    Explicit,
    /// `cpp in out`
    Positional,
}

impl OutputFlagDialect {
    /// The token to splice before the output file name, if any.
    pub fn as_flag(self) -> &'static str {
        match self {
            OutputFlagDialect::Explicit => "-o",
            OutputFlagDialect::Positional => "",
        }
    }
}

/// Sniff which output-flag dialect a preprocessor speaks.
///
/// Clang 3.3's cpp driver rejects a bare positional output file, so its
/// version banner selects the explicit `-o` form. Everything else takes the
/// output file positionally.
pub fn detect_output_flag(cpp: &Path) -> Result<OutputFlagDialect, ProbeError> {
    let output = ProcessBuilder::new(cpp).arg("--version").capture_stdout()?;
    let banner = output.lines().next().unwrap_or("");

    let dialect = if banner.contains("clang version 3.3") {
        OutputFlagDialect::Explicit
    } else {
        OutputFlagDialect::Positional
    };

    tracing::debug!(
        "{} --version: '{}' -> output flag '{}'",
        cpp.display(),
        banner,
        dialect.as_flag()
    );
    Ok(dialect)
}
