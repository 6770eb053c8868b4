mod cli;
mod headless;

use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // .env must be loaded before clap reads its env fallbacks
    dotenv().ok();

    let args = CliArgs::parse();
    init_logging(args.debug);

    headless::run(&args).await
}

fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) if !debug => {
            builder.parse_filters(&filters);
        }
        _ => {
            builder.filter_level(if debug {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            });
        }
    }
    builder.try_init().ok();
}
