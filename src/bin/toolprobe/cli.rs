//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use toolprobe::Platform;

/// Toolprobe - toolchain environment probing for test harnesses
#[derive(Parser)]
#[command(name = "toolprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Probe for this platform instead of the host (freebsd, darwin,
    /// windows, linux)
    #[arg(long, global = true, value_name = "NAME")]
    pub platform: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The platform to probe for: the override if given, else the host.
    pub fn platform(&self) -> Platform {
        match &self.platform {
            // Platform parsing is infallible; unknown names probe as a
            // generic Unix.
            Some(name) => name.parse().unwrap_or(Platform::Other),
            None => Platform::host(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a compile flag string for directories, defines, and extras
    Cflags(CflagsArgs),

    /// Print a link flag string for directories, libraries, and extras
    Ldflags(LdflagsArgs),

    /// Find the directory containing a header file
    FindInclude(FindArgs),

    /// Find the directory containing a library file
    FindLibdir(FindArgs),

    /// Find the full path of a library file
    FindLibrary(FindArgs),

    /// Translate a library name to its platform file name
    Libname(LibnameArgs),

    /// Find the full path of the first available command
    Which(WhichArgs),

    /// Query a configuration-reporting tool for a value
    Config(ConfigArgs),

    /// Print the preprocessor's output-file flag, if it needs one
    CppOut(CppOutArgs),

    /// Report the probed toolchain environment
    Probe(ProbeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CflagsArgs {
    /// Include directory (repeatable)
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<String>,

    /// Preprocessor define (repeatable)
    #[arg(long = "define", value_name = "NAME")]
    pub defines: Vec<String>,

    /// Extra tokens appended verbatim, after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}

#[derive(Args)]
pub struct LdflagsArgs {
    /// Library directory (repeatable)
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<String>,

    /// Library to link (repeatable)
    #[arg(long = "lib", value_name = "NAME")]
    pub libs: Vec<String>,

    /// Extra tokens appended verbatim, after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}

#[derive(Args)]
pub struct FindArgs {
    /// File name or shell-glob pattern to look for
    pub pattern: String,

    /// Extra directory searched after the standard ones (repeatable)
    #[arg(long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Extra message printed when nothing matches
    #[arg(long)]
    pub hint: Option<String>,
}

#[derive(Args)]
pub struct LibnameArgs {
    /// Library name (e.g. `foo`)
    pub name: String,

    /// Name a loadable module instead of a shared library
    #[arg(long)]
    pub module: bool,
}

#[derive(Args)]
pub struct WhichArgs {
    /// Candidate command names, tried in order
    #[arg(required = true)]
    pub commands: Vec<String>,

    /// Path-separator-delimited search list (defaults to the running
    /// executable's directory followed by PATH)
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Key to query; the tool is invoked with `--<key>`
    pub key: String,

    /// Explicit path to the configuration-reporting tool
    #[arg(long, conflicts_with = "candidates")]
    pub tool: Option<PathBuf>,

    /// Candidate tool name to probe for, tried in order (repeatable;
    /// defaults to the llvm-config candidates)
    #[arg(long = "candidate", value_name = "NAME")]
    pub candidates: Vec<String>,
}

#[derive(Args)]
pub struct CppOutArgs {
    /// Preprocessor to sniff (defaults to `cpp` from PATH)
    #[arg(long)]
    pub cpp: Option<PathBuf>,
}

#[derive(Args)]
pub struct ProbeArgs {
    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
