//! `toolprobe cpp-out` command

use anyhow::{Context, Result};

use crate::cli::CppOutArgs;
use toolprobe::detect_output_flag;

pub fn execute(args: CppOutArgs) -> Result<()> {
    let cpp = match args.cpp {
        Some(path) => path,
        None => which::which("cpp").context("no `cpp` in PATH")?,
    };

    let dialect = detect_output_flag(&cpp)?;
    println!("{}", dialect.as_flag());
    Ok(())
}
