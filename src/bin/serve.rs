use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::Context;
use console::style;
use csvplot::config::{AppConfig, CONFIG_FILE};
use csvplot::{logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    println!(
        "{}",
        style(concat!("csvplot server v", env!("CARGO_PKG_VERSION"))).white()
    );

    let config =
        AppConfig::load_or_default(Path::new(CONFIG_FILE)).wrap_err("Failed to load config")?;
    println!("Site directory: {}\n", config.site_dir.to_string_lossy());

    server::run(&config).await
}
