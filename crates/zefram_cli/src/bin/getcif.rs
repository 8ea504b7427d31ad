use clap::Parser;
use zefram_cli::{run_getcif, GetCifArgs};

fn main() -> anyhow::Result<()> {
    let args = GetCifArgs::parse();
    args.common.init_logging()?;

    let cwd = std::env::current_dir()?;
    run_getcif(&args, &cwd, &mut std::io::stdout().lock())?;
    Ok(())
}
