use clap::Parser;
use std::path::PathBuf;

use crate::config::LengthRange;

#[derive(Parser, Debug)]
#[command(
    name = "filter-corpus",
    about = "Filters parallel corpus for word alignment",
    version,
    long_about = None
)]
pub struct Args {
    /// First side of the parallel corpus
    pub infile1: PathBuf,

    /// Second side of the parallel corpus
    pub infile2: PathBuf,

    /// Destination for retained lines of the first side
    pub outfile1: PathBuf,

    /// Destination for retained lines of the second side
    pub outfile2: PathBuf,

    /// Sentence length range in words (min-max)
    #[arg(short = 'L', long, default_value = "1-120")]
    pub length: LengthRange,

    /// Max sentence length ratio
    #[arg(short = 'r', long, default_value_t = 9)]
    pub max_ratio: u64,

    /// Show progress and enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Abort when the inputs have different line counts
    #[arg(long)]
    pub strict: bool,
}
