use clap::Parser;
use zefram_cli::{run_printframework, PrintFrameworkArgs};

fn main() -> anyhow::Result<()> {
    let args = PrintFrameworkArgs::parse();
    args.common.init_logging()?;

    run_printframework(&args, &mut std::io::stdout().lock())?;
    Ok(())
}
