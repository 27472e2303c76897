use clap::Parser;
use concentration::core::config::{self, CliOverrides};
use concentration::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "concentration", about = "Card-matching memory game for the terminal")]
struct Args {
    /// Number of pairs to deal
    #[arg(short, long)]
    pairs: Option<usize>,

    /// Cards per row
    #[arg(short, long)]
    columns: Option<usize>,

    /// Fixed shuffle seed (repeatable deals)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to concentration.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("concentration.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::ConcentrationConfig::default()
    });
    let overrides = CliOverrides {
        pairs: args.pairs,
        columns: args.columns,
        seed: args.seed,
    };
    let resolved = config::resolve(&file_config, &overrides)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("Concentration starting up: {:?}", resolved);

    tui::run(resolved)
}
