//! Toolprobe CLI - toolchain environment probing for test harnesses

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        // Harness scripts match on the message, so print it bare.
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("toolprobe=debug")
    } else {
        EnvFilter::new("toolprobe=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let platform = cli.platform();

    // Execute command
    match cli.command {
        Commands::Cflags(args) => commands::cflags::execute(platform, args),
        Commands::Ldflags(args) => commands::ldflags::execute(platform, args),
        Commands::FindInclude(args) => commands::find::execute_include(platform, args),
        Commands::FindLibdir(args) => commands::find::execute_libdir(platform, args),
        Commands::FindLibrary(args) => commands::find::execute_library(platform, args),
        Commands::Libname(args) => commands::libname::execute(platform, args),
        Commands::Which(args) => commands::which::execute(args),
        Commands::Config(args) => commands::config::execute(args),
        Commands::CppOut(args) => commands::cpp_out::execute(args),
        Commands::Probe(args) => commands::probe::execute(platform, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
