//! Toolprobe - toolchain environment probing for C test harnesses
//!
//! This crate locates system headers and libraries, builds compiler/linker
//! flag strings that exclude implicitly-searched directories, resolves
//! executables from PATH-like lists, and queries configuration-reporting
//! tools such as llvm-config.
//!
//! Nothing here compiles, links, or caches: every operation is an
//! independent, synchronous probe of the filesystem or a blocking
//! subprocess call. Failures come back as [`ProbeError`] values; deciding
//! whether a failure ends the process is left to the outermost caller.

pub mod config;
pub mod error;
pub mod flags;
pub mod platform;
pub mod report;
pub mod search;
pub mod util;

pub use config::{detect_output_flag, OutputFlagDialect, ToolConfig};
pub use error::{ErrorKind, ProbeError};
pub use platform::Platform;
