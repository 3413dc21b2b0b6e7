//! finvault CLI
//!
//! Interactive record manager for deposits, loans and credit lines.

use std::io;

use clap::Parser;
use finvault::console::Console;
use finvault::store::DEFAULT_STORE_BUCKETS;
use finvault::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// finvault CLI
#[derive(Parser, Debug)]
#[command(name = "finvault-cli")]
#[command(about = "Manage deposits, loans and credit lines")]
#[command(version)]
struct Args {
    /// Directory holding the record files
    #[arg(short, long, default_value = "./data")]
    data_dir: String,

    /// Initial bucket count of every index
    #[arg(short, long, default_value_t = DEFAULT_STORE_BUCKETS)]
    buckets: usize,

    /// Do not write records back when leaving a menu
    #[arg(long)]
    no_save: bool,
}

fn main() {
    // Logs go to stderr so they never mix with the menus on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,finvault=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("finvault v{}", finvault::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .initial_bucket_count(args.buckets)
        .save_on_close(!args.no_save)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    if let Err(e) = console.run(&config) {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
