//! `toolprobe cflags` command

use anyhow::Result;

use crate::cli::CflagsArgs;
use toolprobe::flags::compile_flags;
use toolprobe::Platform;

pub fn execute(platform: Platform, args: CflagsArgs) -> Result<()> {
    println!(
        "{}",
        compile_flags(platform, &args.dirs, &args.defines, &args.extra)
    );
    Ok(())
}
