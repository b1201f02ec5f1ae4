use anyhow::Result;
use clap::Parser;
use tracing::error;

use corpus_filter::{filter_corpus, report, utils, Args, CorpusPaths, FilterConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let config = FilterConfig::from(&args);
    let paths = CorpusPaths::from(&args);

    match filter_corpus(&paths, &config) {
        Ok(stats) => {
            report::print_summary(&stats, config.max_ratio)?;
            Ok(())
        }
        Err(e) => {
            error!(action = "abort", component = "main", "Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
