//! `toolprobe ldflags` command

use anyhow::Result;

use crate::cli::LdflagsArgs;
use toolprobe::flags::link_flags;
use toolprobe::Platform;

pub fn execute(platform: Platform, args: LdflagsArgs) -> Result<()> {
    println!(
        "{}",
        link_flags(platform, &args.dirs, &args.libs, &args.extra)
    );
    Ok(())
}
