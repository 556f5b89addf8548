use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sets up `tracing` output on stderr; stdout belongs to the screens.
///
/// `RUST_LOG` picks the filter (default: warnings only, or debug for the menu
/// crates with `verbose`). `LOG_FORMAT=json` switches to one JSON object per
/// line.
pub fn init_logger(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "warn,menu_core=debug,menu_cli=debug" } else { "warn" };
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_new(&log_level)?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr).with_target(false))
                .try_init()?;
        }
    }

    Ok(())
}
