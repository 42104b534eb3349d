//! Command-line maze walker.
//!
//! Run: cargo run -- maze.txt --start 1,0 --end 7,6

use std::io;

use clap::Parser;
use mazewalk::Cli;
use tracing_subscriber::EnvFilter;

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    // Also routes `log` records from the library crates.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = mazewalk::run(&cli, &mut out) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
