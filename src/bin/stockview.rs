//! stockview - Interactive warehouse inventory viewer.
//!
//! Usage:
//!   stockview                                  # API at http://localhost:8080/
//!   stockview --base-url http://inv:9000/      # custom API location
//!   stockview --fixtures ./data                # offline, from JSON files
//!   stockview --log-file /tmp/stockview.log -v # debug log to a file

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use stockview::config::{CliArgs, Config};
use stockview::tui::App;

/// Redraw interval (clock in the header).
const TICK_RATE: Duration = Duration::from_millis(250);

fn main() {
    let args = CliArgs::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path, &args) {
            eprintln!("Error: cannot set up logging to '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let config = match Config::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let provider = match config.provider() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        source = %provider.describe(),
        page_size = config.page_size,
        tab = %config.initial_tab,
        "starting stockview"
    );

    let app = App::new(provider, config.page_size, config.initial_tab);
    if let Err(e) = app.run(TICK_RATE) {
        error!(error = %e, "terminal error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    info!("stockview exited");
}

/// Initializes logging into `path`. The terminal belongs to the UI, so
/// nothing is logged unless a log file is given.
fn init_logging(path: &Path, args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filter = args.log_filter()?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
