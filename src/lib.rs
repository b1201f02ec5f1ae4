pub mod args;
pub mod codec;
pub mod config;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use config::{FilterConfig, LengthRange};
pub use corpus::{filter_corpus, CorpusPaths};
pub use error::FilterError;
pub use stats::{RunStats, SideStats};
