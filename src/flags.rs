//! Compiler and linker flag-string construction.
//!
//! Existing harness scripts splice these strings into shell command lines
//! verbatim, so the output format is part of the contract: segments are
//! space-joined even when empty (double spaces are legal output), order is
//! preserved, and duplicates are not collapsed.

use crate::platform::Platform;

/// Always considered for `-I` emission, but suppressed when the platform
/// already searches it implicitly.
const LOCAL_INCLUDE: &str = "/usr/local/include";

/// Counterpart of [`LOCAL_INCLUDE`] for the linker.
const LOCAL_LIB: &str = "/usr/local/lib";

/// Build a compile flag string: `-I` for each non-standard directory,
/// `-D` for each define, then the extra tokens verbatim.
pub fn compile_flags(
    platform: Platform,
    dirs: &[String],
    defines: &[String],
    extra: &[String],
) -> String {
    let standard = platform.standard_include_dirs();

    let mut all_dirs: Vec<&str> = dirs.iter().map(String::as_str).collect();
    all_dirs.push(LOCAL_INCLUDE);

    let include_flags = all_dirs
        .iter()
        .filter(|d| !standard.contains(d))
        .map(|d| format!("-I {}", d))
        .collect::<Vec<_>>()
        .join(" ");

    let define_flags = defines
        .iter()
        .map(|d| format!("-D {}", d))
        .collect::<Vec<_>>()
        .join(" ");

    [include_flags, define_flags, extra.join(" ")].join(" ")
}

/// Build a link flag string: `-L` for each non-standard directory,
/// `-l` for each library, then the extra tokens appended as-is.
pub fn link_flags(
    platform: Platform,
    dirs: &[String],
    libs: &[String],
    extra: &[String],
) -> String {
    let standard = platform.standard_lib_dirs();

    let mut all_dirs: Vec<&str> = dirs.iter().map(String::as_str).collect();
    all_dirs.push(LOCAL_LIB);

    let dir_flags = all_dirs
        .iter()
        .filter(|d| !standard.contains(d))
        .map(|d| format!("-L {}", d))
        .collect::<Vec<_>>()
        .join(" ");

    let lib_flags = libs
        .iter()
        .map(|l| format!("-l {}", l))
        .collect::<Vec<_>>()
        .join(" ");

    // Extra tokens join the segment list directly, so an empty extra list
    // does not leave a trailing space.
    let mut segments = vec![dir_flags, lib_flags];
    segments.extend(extra.iter().cloned());
    segments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_compile_flags_emit_no_include_tokens() {
        // The implicitly appended /usr/local/include is itself standard on
        // non-FreeBSD platforms, so nothing survives the filter.
        let flags = compile_flags(Platform::Linux, &[], &[], &[]);
        assert!(!flags.contains("-I"));
        assert_eq!(flags, "  ");
    }

    #[test]
    fn test_local_include_emitted_on_freebsd() {
        // FreeBSD's compiler does not search /usr/local/include by itself.
        let flags = compile_flags(Platform::FreeBsd, &[], &[], &[]);
        assert!(flags.contains("-I /usr/local/include"));
    }

    #[test]
    fn test_compile_flags_with_dir_define_extra() {
        let flags = compile_flags(
            Platform::Linux,
            &strings(&["/opt/foo"]),
            &strings(&["DEBUG"]),
            &strings(&["-Wall"]),
        );

        assert!(flags.contains("-I /opt/foo"));
        assert!(flags.contains("-D DEBUG"));
        assert!(flags.contains("-Wall"));
        assert_eq!(flags.matches("-I /opt/foo").count(), 1);
    }

    #[test]
    fn test_standard_dirs_are_suppressed() {
        let flags = compile_flags(
            Platform::Linux,
            &strings(&["/usr/include", "/opt/foo", "/usr/local/include"]),
            &[],
            &[],
        );

        assert!(!flags.contains("-I /usr/include"));
        assert!(!flags.contains("-I /usr/local/include"));
        assert!(flags.contains("-I /opt/foo"));
    }

    #[test]
    fn test_duplicate_dirs_are_preserved() {
        let flags = compile_flags(
            Platform::Linux,
            &strings(&["/opt/foo", "/opt/foo"]),
            &[],
            &[],
        );

        assert_eq!(flags.matches("-I /opt/foo").count(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let flags = compile_flags(
            Platform::Linux,
            &strings(&["/opt/b", "/opt/a"]),
            &strings(&["FIRST", "SECOND"]),
            &[],
        );

        let b = flags.find("-I /opt/b").unwrap();
        let a = flags.find("-I /opt/a").unwrap();
        assert!(b < a);

        let first = flags.find("-D FIRST").unwrap();
        let second = flags.find("-D SECOND").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_link_flags() {
        let flags = link_flags(
            Platform::Linux,
            &strings(&["/opt/llvm/lib"]),
            &strings(&["m", "pthread"]),
            &strings(&["-rpath", "/opt/llvm/lib"]),
        );

        assert!(flags.contains("-L /opt/llvm/lib"));
        assert!(flags.contains("-l m -l pthread"));
        assert!(flags.ends_with("-rpath /opt/llvm/lib"));
    }

    #[test]
    fn test_link_flags_without_extra_has_no_trailing_space() {
        let flags = link_flags(Platform::Linux, &[], &strings(&["m"]), &[]);
        assert_eq!(flags, " -l m");
    }
}
