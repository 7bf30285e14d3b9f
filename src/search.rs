//! Directory and executable searching.
//!
//! Search lists are ordered: the first directory with a match wins, and a
//! directory that does not exist simply contributes zero matches. Patterns
//! use shell-glob semantics (`*`, `?`, `[...]`).

use std::path::{Path, PathBuf};

use crate::error::ProbeError;
use crate::platform::Platform;

/// Find the first directory in `paths` containing a file that matches
/// `pattern`.
///
/// The `hint` is carried into the error so the caller can surface an
/// actionable message (e.g. which package to install).
pub fn find_containing_dir(
    pattern: &str,
    paths: &[PathBuf],
    hint: Option<&str>,
) -> Result<PathBuf, ProbeError> {
    for dir in paths {
        if dir_has_match(dir, pattern)? {
            tracing::debug!("found '{}' in {}", pattern, dir.display());
            return Ok(dir.clone());
        }
    }

    Err(ProbeError::NotFound {
        pattern: pattern.to_string(),
        searched: paths.to_vec(),
        hint: hint.map(String::from),
    })
}

/// Test whether `dir` contains at least one entry matching `pattern`.
fn dir_has_match(dir: &Path, pattern: &str) -> Result<bool, ProbeError> {
    let full_pattern = dir.join(pattern);
    let entries =
        glob::glob(&full_pattern.to_string_lossy()).map_err(|e| ProbeError::BadPattern {
            pattern: pattern.to_string(),
            error: e,
        })?;

    // Unreadable entries are skipped, same as a shell glob would.
    Ok(entries.filter_map(Result::ok).next().is_some())
}

/// Find the directory containing a header, searching the platform's
/// standard include directories before `extra_paths`.
pub fn find_include_dir(
    platform: Platform,
    pattern: &str,
    extra_paths: &[PathBuf],
    hint: Option<&str>,
) -> Result<PathBuf, ProbeError> {
    let paths = with_standard_dirs(platform.standard_include_dirs(), extra_paths);
    find_containing_dir(pattern, &paths, hint)
}

/// Find the directory containing a library file, searching the platform's
/// standard library directories before `extra_paths`.
pub fn find_lib_dir(
    platform: Platform,
    pattern: &str,
    extra_paths: &[PathBuf],
    hint: Option<&str>,
) -> Result<PathBuf, ProbeError> {
    let paths = with_standard_dirs(platform.standard_lib_dirs(), extra_paths);
    find_containing_dir(pattern, &paths, hint)
}

/// Like [`find_lib_dir`], but returns the full path to the library file
/// rather than just its directory.
pub fn find_library_file(
    platform: Platform,
    filename: &str,
    extra_paths: &[PathBuf],
    hint: Option<&str>,
) -> Result<PathBuf, ProbeError> {
    let dir = find_lib_dir(platform, filename, extra_paths, hint)?;
    Ok(dir.join(filename))
}

fn with_standard_dirs(standard: &[&str], extra: &[PathBuf]) -> Vec<PathBuf> {
    standard
        .iter()
        .map(PathBuf::from)
        .chain(extra.iter().cloned())
        .collect()
}

/// Translate a library name to its platform file name
/// (e.g. `foo` -> `libfoo.so`).
///
/// Loadable modules never get a `lib` prefix, on any platform.
pub fn library_file_name(platform: Platform, name: &str, loadable_module: bool) -> String {
    let prefixed = if platform != Platform::Windows && !loadable_module {
        format!("lib{}", name)
    } else {
        name.to_string()
    };

    let suffix = match platform {
        Platform::Darwin => ".dylib",
        Platform::Windows => ".dll",
        _ => ".so",
    };

    format!("{}{}", prefixed, suffix)
}

/// Find the full path of the first available command.
///
/// `path_list` is a path-separator-delimited string. The candidate list is
/// the outer loop: an earlier command wins even when a later command would
/// be found in an earlier directory. Existence is the only test.
pub fn which<S: AsRef<str>>(commands: &[S], path_list: &str) -> Result<PathBuf, ProbeError> {
    for command in commands {
        for dir in std::env::split_paths(path_list) {
            let full = dir.join(command.as_ref());
            if full.exists() {
                tracing::debug!("resolved {} to {}", command.as_ref(), full.display());
                return Ok(full);
            }
        }
    }

    Err(ProbeError::CommandNotFound {
        candidates: commands.iter().map(|c| c.as_ref().to_string()).collect(),
        path: path_list.to_string(),
    })
}

/// The default command search path: the directory containing the running
/// executable, then the inherited `PATH`.
pub fn default_search_path() -> String {
    let separator = if cfg!(windows) { ';' } else { ':' };

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    let inherited = std::env::var("PATH").unwrap_or_default();

    format!("{}{}{}", exe_dir.display(), separator, inherited)
}
