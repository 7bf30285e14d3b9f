//! Platform identification and standard search directories.
//!
//! The compiler and linker search a handful of directories implicitly, so
//! flag construction must suppress them from explicit `-I`/`-L` output.
//! Which directories count as "standard" depends on the platform.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Platform family, as far as search directories and library naming care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    FreeBsd,
    Darwin,
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// Detect the platform the current process is running on.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "freebsd" => Platform::FreeBsd,
            "macos" | "ios" => Platform::Darwin,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }

    /// Directories the compiler searches for headers without being told.
    ///
    /// Order is search priority. FreeBSD ships without `/usr/local/include`
    /// in the default search path, so only `/usr/include` is standard there.
    pub fn standard_include_dirs(self) -> &'static [&'static str] {
        match self {
            Platform::FreeBsd => &["/usr/include"],
            _ => &["/usr/include", "/usr/local/include"],
        }
    }

    /// Directories the linker searches for libraries without being told.
    pub fn standard_lib_dirs(self) -> &'static [&'static str] {
        match self {
            Platform::FreeBsd => &["/lib", "/usr/lib"],
            _ => &["/lib", "/usr/lib", "/usr/local/lib"],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::FreeBsd => "freebsd",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Other => "other",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    /// Parse a platform name. Unrecognized names map to [`Platform::Other`],
    /// which uses the common Unix defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "freebsd" => Platform::FreeBsd,
            "darwin" | "macos" => Platform::Darwin,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freebsd_standard_dirs() {
        assert_eq!(
            Platform::FreeBsd.standard_include_dirs(),
            &["/usr/include"]
        );
        assert_eq!(Platform::FreeBsd.standard_lib_dirs(), &["/lib", "/usr/lib"]);
    }

    #[test]
    fn test_default_standard_dirs() {
        for platform in [Platform::Linux, Platform::Darwin, Platform::Other] {
            assert_eq!(
                platform.standard_include_dirs(),
                &["/usr/include", "/usr/local/include"]
            );
            assert_eq!(
                platform.standard_lib_dirs(),
                &["/lib", "/usr/lib", "/usr/local/lib"]
            );
        }
    }

    #[test]
    fn test_parse_platform_names() {
        assert_eq!("FreeBSD".parse::<Platform>().unwrap(), Platform::FreeBsd);
        assert_eq!("macos".parse::<Platform>().unwrap(), Platform::Darwin);
        assert_eq!("plan9".parse::<Platform>().unwrap(), Platform::Other);
    }
}
