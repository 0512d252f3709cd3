//! Packing List - a packing list for your next trip, in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use pack_core::prelude::*;
use pack_core::SortKey;
use packing_list::RunOptions;

/// Packing List - a packing list for your next trip, in the terminal
#[derive(Parser, Debug)]
#[command(name = "pack")]
#[command(about = "A packing list for your next trip, in the terminal", long_about = None)]
struct Args {
    /// Start with a few sample items
    #[arg(long)]
    sample: bool,

    /// Initial sort order: input, description or packed
    #[arg(long, value_name = "KEY")]
    sort: Option<SortKey>,

    /// Directory that holds .packing/config.toml (default: current directory)
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Use ASCII icons instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Write a default .packing/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        pack_app::config::init_config_dir(&config_dir)?;
        eprintln!(
            "Config file: {}",
            pack_app::config::config_path(&config_dir).display()
        );
        return Ok(());
    }

    packing_list::run(RunOptions {
        config_dir,
        sample: args.sample,
        sort: args.sort,
        ascii: args.ascii,
    })
    .await
}
