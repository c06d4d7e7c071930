use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use twine_core::Model;

use pintle_models::{
    models::propulsion::pintle::PintleInjector,
    report::{DEFAULT_REPORT_FILE, Report},
    settings::{DEFAULT_SETTINGS_FILE, Settings},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Size a pintle injector from a settings file")]
struct Cli {
    /// Settings file describing the injector.
    #[arg(default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Where to write the report.
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load(&cli.settings)?;
    let design = settings.design();

    let metrics = PintleInjector
        .call(&design)
        .with_context(|| format!("cannot size injector {:?}", design.name))?;

    let report = Report::new(&design.name, &metrics);
    print!("{report}");

    report
        .write_to_file(&cli.output)
        .with_context(|| format!("failed to write report to {}", cli.output.display()))?;
    info!(path = %cli.output.display(), "wrote pintle report");

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
