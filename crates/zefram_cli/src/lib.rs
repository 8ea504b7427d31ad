//! Command line front ends for the framework database.
//!
//! # Responsibility
//! - Parse `getcif` / `printframework` arguments.
//! - Normalize the framework code and hand off to `zefram_core`.
//!
//! # Invariants
//! - Codes are length-checked before upper-casing and before any lookup.
//! - Command output goes to the supplied writer; logs never go to stdout.

use anyhow::{anyhow, Result};
use clap::{Args, Parser};
use std::io::Write;
use std::path::{Path, PathBuf};
use zefram_core::{
    cif_file_name, default_log_level, format_summary, get_framework, init_logging, write_cif,
    Framework, FrameworkCode, ZeframConfig,
};

/// Options shared by every zefram command.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Framework database file (defaults to the bundled frameworks.db)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, value_name = "LEVEL", default_value_t = default_log_level().to_string())]
    pub log_level: String,

    /// Absolute directory for rolling log files (logs go to stderr otherwise)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,
}

impl CommonArgs {
    pub fn config(&self) -> ZeframConfig {
        match &self.db {
            Some(path) => ZeframConfig::with_db_path(path),
            None => ZeframConfig::default(),
        }
    }

    pub fn init_logging(&self) -> Result<()> {
        init_logging(&self.log_level, self.log_dir.as_deref()).map_err(|err| anyhow!(err))
    }
}

/// Write the CIF file of a zeolite framework to the current directory.
#[derive(Debug, Parser)]
#[command(name = "getcif", version)]
pub struct GetCifArgs {
    /// Three letter framework code
    pub code: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print information about a zeolite framework.
#[derive(Debug, Parser)]
#[command(name = "printframework", version)]
pub struct PrintFrameworkArgs {
    /// Three letter framework code
    pub code: String,

    /// Full information
    #[arg(short = 'f', value_name = "FULL")]
    pub full: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Writes `<CODE>.cif` into `out_dir` and reports the file name on `out`.
pub fn run_getcif(args: &GetCifArgs, out_dir: &Path, out: &mut impl Write) -> Result<PathBuf> {
    let framework = resolve(&args.code, &args.common.config())?;
    let path = write_cif(&framework, out_dir)?;
    writeln!(out, "Wrote to file: {}", cif_file_name(&framework.code))?;
    Ok(path)
}

/// Prints the framework summary on `out`.
pub fn run_printframework(args: &PrintFrameworkArgs, out: &mut impl Write) -> Result<()> {
    // `-f` is accepted for compatibility; the summary layout does not change.
    let framework = resolve(&args.code, &args.common.config())?;
    writeln!(out, "{}", format_summary(&framework)?)?;
    Ok(())
}

fn resolve(raw_code: &str, config: &ZeframConfig) -> Result<Framework> {
    let code = FrameworkCode::parse_normalized(raw_code)?;
    log::debug!(
        "event=cli_lookup module=cli status=start code={} db={}",
        code,
        config.db_path().display()
    );
    Ok(get_framework(config, code.as_str())?)
}
