//! `toolprobe libname` command

use anyhow::Result;

use crate::cli::LibnameArgs;
use toolprobe::search::library_file_name;
use toolprobe::Platform;

pub fn execute(platform: Platform, args: LibnameArgs) -> Result<()> {
    println!("{}", library_file_name(platform, &args.name, args.module));
    Ok(())
}
