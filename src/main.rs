use clap::Parser;
use jokebox::core::config::{self, CliOverrides};
use jokebox::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "jokebox", about = "Random jokes and a list of favorites, in your terminal")]
struct Args {
    /// Joke category sent to the service (not validated locally)
    #[arg(short, long)]
    category: Option<String>,

    /// Base URL of the joke service
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to jokebox.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("jokebox.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::JokeboxConfig::default()
    });
    let cli = CliOverrides {
        category: args.category,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Jokebox starting up (category={}, base_url={})",
        resolved.category,
        resolved.base_url
    );

    tui::run(resolved)
}
