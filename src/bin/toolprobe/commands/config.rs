//! `toolprobe config` command

use anyhow::Result;

use crate::cli::ConfigArgs;
use toolprobe::report::CONFIG_TOOL_CANDIDATES;
use toolprobe::search;
use toolprobe::ToolConfig;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = match args.tool {
        Some(tool) => ToolConfig::new(tool),
        None => {
            let candidates: Vec<&str> = if args.candidates.is_empty() {
                CONFIG_TOOL_CANDIDATES.to_vec()
            } else {
                args.candidates.iter().map(String::as_str).collect()
            };
            ToolConfig::discover(&candidates, &search::default_search_path())?
        }
    };

    println!("{}", config.get(&args.key)?);
    Ok(())
}
