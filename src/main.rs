use anyhow::Result;
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "indic-translator",
    version,
    about = "HTTP translation service for English and Indian languages"
)]
struct Cli {
    /// Bind address (overrides settings)
    #[arg(short = 'a', long = "addr")]
    addr: Option<String>,

    /// Read extra settings from a local TOML file
    #[arg(short = 'r', long = "read-settings")]
    read_settings: Option<String>,

    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    indic_translator::logging::init(cli.verbose)?;

    let settings_path = cli.read_settings.as_deref().map(Path::new);
    let mut settings = indic_translator::settings::load_settings(settings_path)?;
    if let Some(addr) = cli.addr {
        settings.addr = addr;
    }

    indic_translator::server::run_server(settings).await
}
