//! `toolprobe probe` command

use anyhow::Result;

use crate::cli::ProbeArgs;
use toolprobe::report::{format_report, probe_environment};
use toolprobe::Platform;

pub fn execute(platform: Platform, args: ProbeArgs) -> Result<()> {
    let report = probe_environment(platform);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }

    Ok(())
}
