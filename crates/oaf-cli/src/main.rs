use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use oaf_core::config::{self, CONFIG_FILE_NAME, OafConfig};
use oaf_core::document::{self, default_spec_path};

#[derive(Parser)]
#[command(
    name = "oaf",
    about = "Fill in the gaps of the Superset OpenAPI spec in place",
    version
)]
struct Cli {
    /// Path to openapi.json (defaults to <binary-dir>/../static/resources/openapi.json)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Run every pass and report, without writing the file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?.unwrap_or_default();
    let target = resolve_target(cli.input, &cfg)?;
    log::debug!("patching {}", target.display());

    let mut spec = document::load(&target)?;
    let report = oaf_core::run(&mut spec, &cfg)
        .with_context(|| format!("failed to patch {}", target.display()))?;

    for pass in report.applied() {
        println!("{}", pass.message());
    }

    if !report.changed() {
        println!("{} is up to date", target.display());
    } else if cli.dry_run {
        println!("dry run: {} not written", target.display());
    } else {
        document::store(&target, &spec)?;
        println!("wrote {}", target.display());
    }
    Ok(())
}

/// `--input` wins over the config file, which wins over the path beside the
/// executable.
fn resolve_target(input: Option<PathBuf>, cfg: &OafConfig) -> Result<PathBuf> {
    if let Some(path) = input.or_else(|| cfg.input.as_ref().map(PathBuf::from)) {
        return Ok(path);
    }
    let exe = env::current_exe().context("failed to locate the oaf executable")?;
    let driver_dir = exe.parent().unwrap_or(Path::new("."));
    Ok(default_spec_path(driver_dir))
}
