//! Environment probe report.
//!
//! Collects what the rest of the crate can discover about the toolchain
//! environment into one structure, for humans (`toolprobe probe`) or for
//! harness configuration scripts (`toolprobe probe --json`).

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{detect_output_flag, ToolConfig};
use crate::platform::Platform;
use crate::search;
use crate::util::ProcessBuilder;

/// Candidate names for the configuration-reporting tool, most specific
/// first.
pub const CONFIG_TOOL_CANDIDATES: &[&str] = &["llvm-config33", "llvm-config"];

/// One probed tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCheck {
    /// Tool name as searched for
    pub name: String,
    /// Resolved path, if found
    pub path: Option<PathBuf>,
    /// First line of `--version` output, if the tool runs
    pub version: Option<String>,
}

/// Everything the probe learned about the environment.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Platform the probe ran for
    pub platform: String,
    /// Standard header search directories
    pub include_dirs: Vec<String>,
    /// Standard library search directories
    pub lib_dirs: Vec<String>,
    /// Preprocessor output-file flag (`-o` or empty), if cpp was found
    pub cpp_output_flag: Option<String>,
    /// Probed tools
    pub tools: Vec<ToolCheck>,
}

/// Probe the environment for the given platform.
///
/// Missing tools are reported, not errors: the report exists to show what
/// is and is not available.
pub fn probe_environment(platform: Platform) -> ProbeReport {
    let mut tools = Vec::new();

    for name in ["cc", "cpp", "ar"] {
        tools.push(check_tool(name, which::which(name).ok()));
    }

    let config_tool =
        ToolConfig::discover(CONFIG_TOOL_CANDIDATES, &search::default_search_path()).ok();
    tools.push(check_tool(
        "llvm-config",
        config_tool.map(|t| t.command().to_path_buf()),
    ));

    let cpp_output_flag = tools
        .iter()
        .find(|t| t.name == "cpp")
        .and_then(|t| t.path.as_deref())
        .and_then(|cpp| detect_output_flag(cpp).ok())
        .map(|dialect| dialect.as_flag().to_string());

    ProbeReport {
        platform: platform.to_string(),
        include_dirs: platform
            .standard_include_dirs()
            .iter()
            .map(|d| d.to_string())
            .collect(),
        lib_dirs: platform
            .standard_lib_dirs()
            .iter()
            .map(|d| d.to_string())
            .collect(),
        cpp_output_flag,
        tools,
    }
}

fn check_tool(name: &str, path: Option<PathBuf>) -> ToolCheck {
    let version = path.as_deref().and_then(|p| {
        ProcessBuilder::new(p)
            .arg("--version")
            .capture_stdout()
            .ok()
            .and_then(|out| out.lines().next().map(str::to_string))
    });

    ToolCheck {
        name: name.to_string(),
        path,
        version,
    }
}

/// Format a report for terminal output.
pub fn format_report(report: &ProbeReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("platform: {}\n", report.platform));
    out.push_str(&format!(
        "include dirs: {}\n",
        report.include_dirs.join(" ")
    ));
    out.push_str(&format!("lib dirs: {}\n", report.lib_dirs.join(" ")));

    match &report.cpp_output_flag {
        Some(flag) if !flag.is_empty() => {
            out.push_str(&format!("cpp output flag: {}\n", flag));
        }
        Some(_) => out.push_str("cpp output flag: (positional)\n"),
        None => {}
    }

    out.push_str("tools:\n");
    for tool in &report.tools {
        match (&tool.path, &tool.version) {
            (Some(path), Some(version)) => {
                out.push_str(&format!("  {}: {} ({})\n", tool.name, path.display(), version));
            }
            (Some(path), None) => {
                out.push_str(&format!("  {}: {}\n", tool.name, path.display()));
            }
            _ => out.push_str(&format!("  {}: not found\n", tool.name)),
        }
    }

    out
}
