//! `toolprobe find-include`, `find-libdir`, and `find-library` commands

use anyhow::Result;

use crate::cli::FindArgs;
use toolprobe::search::{find_include_dir, find_lib_dir, find_library_file};
use toolprobe::Platform;

pub fn execute_include(platform: Platform, args: FindArgs) -> Result<()> {
    let dir = find_include_dir(platform, &args.pattern, &args.paths, args.hint.as_deref())?;
    println!("{}", dir.display());
    Ok(())
}

pub fn execute_libdir(platform: Platform, args: FindArgs) -> Result<()> {
    let dir = find_lib_dir(platform, &args.pattern, &args.paths, args.hint.as_deref())?;
    println!("{}", dir.display());
    Ok(())
}

pub fn execute_library(platform: Platform, args: FindArgs) -> Result<()> {
    let path = find_library_file(platform, &args.pattern, &args.paths, args.hint.as_deref())?;
    println!("{}", path.display());
    Ok(())
}
