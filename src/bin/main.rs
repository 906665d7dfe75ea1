use std::io;
use std::path::PathBuf;

use docdir::action;
use docdir::base::{self, Result};
use docdir::domain::TargetDir;

use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "docdir", version, about)]
struct Opt {
    #[arg(value_name = "PATH", env = "DOCDIR_PATH", default_value = "docs")]
    /// Directory to create, along with any missing parents
    path: PathBuf,

    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    /// Specify the log level (off, error, warn, info, debug, trace)
    log_level: LevelFilter,

    #[arg(short, long)]
    /// Verbose mode, same as --log-level info
    verbose: bool,
}

fn run(opt: &Opt) -> Result<()> {
    let dir = TargetDir::new(&opt.path)?;

    action::ensure_directory(&dir)?;
    action::report(&dir, io::stdout().lock())?;

    Ok(())
}

fn main() {
    let opt = Opt::parse();

    let log_level = if opt.verbose {
        LevelFilter::INFO
    } else {
        opt.log_level
    };
    base::log::init(log_level);

    std::process::exit(match run(&opt) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("error: {}", e);
            1
        }
    });
}
