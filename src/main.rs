//! ecometer-sim entry point: CLI wiring and config-driven engine construction.

use std::process;

use clap::Parser;
use tracing::{error, info};

use ecometer_sim::Engine;
use ecometer_sim::cli::{Cli, render_view};
use ecometer_sim::io::export::export_readings_csv;
use ecometer_sim::logging::init_tracing;

fn main() {
    let cli = Cli::parse();

    // Config file or preset, then CLI overrides, then validation
    let config = match cli.load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("warning: logging not initialised: {e}");
    }

    let engine = Engine::new(config.engine_options());

    if let Some(ref path) = cli.readings_out {
        if let Err(e) = export_readings_csv(engine.readings(), path) {
            error!(path = %path.display(), "failed to write readings CSV");
            eprintln!("error: {e}");
            process::exit(1);
        }
        info!(path = %path.display(), rows = engine.readings().len(), "readings written");
    }

    match render_view(&engine, cli.view, cli.range, cli.summary) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;

        let state = ecometer_sim::api::AppState::new(engine);
        let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(ecometer_sim::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
