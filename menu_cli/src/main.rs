mod app;
mod command;
mod logger;
mod startup;
mod ui;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use app::{App, Screen};
use clap::Parser;
use menu_core::MenuStore;
use tracing::info;

#[derive(Parser)]
#[command(name = "menu")]
#[command(about = "Add, list and filter the dishes of a restaurant menu")]
struct Cli {
    /// JSON navigation payload (`{"menu_items": [...]}`) to start from
    #[arg(long, env = "MENU_SEED")]
    seed: Option<PathBuf>,

    /// JSON list of add-form entries to add before starting, all or nothing
    #[arg(long, env = "MENU_IMPORT")]
    import: Option<PathBuf>,

    /// Text printed in front of prices
    #[arg(long, env = "MENU_CURRENCY", default_value = "R")]
    currency: String,

    /// Screen to open first
    #[arg(long, value_enum, default_value_t = Screen::Home)]
    screen: Screen,

    /// Log debug output of the menu crates to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose)?;

    let mut store = match &cli.seed {
        Some(path) => load_seed(path)?,
        None => MenuStore::new(),
    };
    if let Some(path) = &cli.import {
        import_forms(&mut store, path)?;
    }

    info!(items = store.catalog().len(), screen = ?cli.screen, "starting menu");
    let mut app = App::new(store, cli.currency, cli.screen);
    app::run(&mut app, io::stdin().lock(), io::stdout().lock())
}

fn load_seed(path: &Path) -> anyhow::Result<MenuStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed payload {}", path.display()))?;
    startup::seed_store(&json).with_context(|| format!("cannot start from {}", path.display()))
}

fn import_forms(store: &mut MenuStore, path: &Path) -> anyhow::Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read import file {}", path.display()))?;
    startup::import_forms(store, &json)
        .with_context(|| format!("cannot import {}", path.display()))?;
    Ok(())
}
