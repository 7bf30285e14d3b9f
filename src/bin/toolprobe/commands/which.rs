//! `toolprobe which` command

use anyhow::Result;

use crate::cli::WhichArgs;
use toolprobe::search;

pub fn execute(args: WhichArgs) -> Result<()> {
    let path_list = args
        .path
        .unwrap_or_else(search::default_search_path);

    let found = search::which(&args.commands, &path_list)?;
    println!("{}", found.display());
    Ok(())
}
