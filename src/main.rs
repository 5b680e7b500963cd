use anyhow::Context;
use clap::Parser;

use frmwk_widgets::args::Cli;
use frmwk_widgets::config::{Config, ConfigStore};
use frmwk_widgets::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_tracing(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
    }

    let path = cli.config_path();
    let config = Config::load_from(&path).context("Failed to load configuration")?;
    tracing::info!(path = %path.display(), "Configuration loaded");
    let store = ConfigStore::new(config, path);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build async runtime")?;
    runtime.block_on(ui::run(store, cli.overrides()))
}
