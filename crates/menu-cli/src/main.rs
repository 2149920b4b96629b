//! `menu` entry point: loads settings, seeds the store, and runs the shell on
//! standard input.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use menu_cli::{Session, ShellError, ShellSettings, load_store};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ShellError> {
    let settings = ShellSettings::load_from_iter(env::args_os()).map_err(|err| {
        ShellError::Config {
            message: err.to_string(),
        }
    })?;
    init_tracing(settings.log_json);

    let store = load_store(settings.seed_path())?;
    info!(dishes = store.len(), "session started");

    let mut session = Session::new(store);
    session.run(
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
        settings.prompt(),
    )?;
    info!(dishes = session.store().len(), "session ended");
    Ok(())
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
