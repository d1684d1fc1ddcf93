use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use common::FetchState;
use console::{Emoji, style};
use csvplot::config::{AppConfig, CONFIG_FILE};
use csvplot::loader::load_and_report;
use csvplot::logging::{self, TracingConsole};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    println!("{}", style("csvplot loader").white());

    let config =
        AppConfig::load_or_default(Path::new(CONFIG_FILE)).wrap_err("Failed to load config")?;

    println!(
        "{} {}Loading {}...",
        style("[1/1]").bold().dim(),
        Emoji("📄 ", ""),
        config.data_path.to_string_lossy()
    );

    match load_and_report(&TracingConsole, &config.data_path).await {
        FetchState::Succeeded => Ok(()),
        state => Err(eyre!("Data load ended in state {:?}", state)),
    }
}
