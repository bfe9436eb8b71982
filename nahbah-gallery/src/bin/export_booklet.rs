//! nahbah-booklet - export a design booklet without the web UI
//!
//! Requests the compiled PDF for the given design IDs and saves it as
//! `not_a_house_but_a_home.pdf` in the output directory.
//!
//! ```text
//! nahbah-booklet --ids 5,12,7 --out ~/Downloads
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nahbah_common::config::{config_file_path, CliOverrides, GalleryConfig, TomlConfig};
use nahbah_common::Message;
use nahbah_gallery::{
    build_identification, save_booklet, BackendClient, BookletError, BookletExporter,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "nahbah-booklet")]
#[command(about = "Download a booklet of selected designs")]
#[command(version)]
struct Args {
    /// Design IDs, comma separated (e.g. 5,12,7)
    #[arg(long, required = true, value_delimiter = ',')]
    ids: Vec<i64>,

    /// Directory to save the booklet into
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Backend base URL (e.g. http://localhost:8000/api)
    #[arg(long)]
    api_url: Option<String>,

    /// Message language (en, hu)
    #[arg(short, long)]
    locale: Option<String>,

    /// Backend request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Path to config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nahbah_gallery=info".into()),
        )
        .init();

    info!("Starting {}", build_identification("nahbah-booklet"));

    let args = Args::parse();

    let toml = TomlConfig::load_or_default(config_file_path(args.config.as_deref()).as_deref());
    let cli = CliOverrides {
        api_url: args.api_url,
        locale: args.locale,
        port: None,
        request_timeout_secs: args.timeout_secs,
        booklet_dir: args.out,
    };
    let config = GalleryConfig::resolve(&cli, &toml).context("Invalid configuration")?;

    let client = BackendClient::new(&config.api_url, config.request_timeout)
        .context("Failed to create backend client")?;
    let exporter = BookletExporter::new();

    info!("{}", config.locale.text(Message::GeneratingBooklet));

    let pdf = match exporter.request_booklet(&client, &args.ids).await {
        Ok(pdf) => pdf,
        Err(e @ BookletError::EmptySelection) => {
            error!("{}", config.locale.text(Message::BookletEmptySelection));
            return Err(e.into());
        }
        Err(e) => {
            error!("{}", config.locale.text(Message::BookletFailed));
            return Err(e.into());
        }
    };

    let path = save_booklet(&config.booklet_dir, &pdf).context("Failed to save booklet")?;

    info!("{} {}", config.locale.text(Message::BookletReady), path.display());
    Ok(())
}
