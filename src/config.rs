use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 120;
pub const DEFAULT_MAX_RATIO: u64 = 9;

/// Inclusive word-count range, written as `<min>-<max>` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl FromStr for LengthRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidLength(s.to_string());

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min: usize = min.trim().parse().map_err(|_| invalid())?;
        let max: usize = max.trim().parse().map_err(|_| invalid())?;
        Ok(Self { min, max })
    }
}

impl LengthRange {
    /// A range with `min > max` parses, but no line can satisfy it.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Acceptance rules for one run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub length: LengthRange,
    pub max_ratio: u64,
    pub verbose: bool,
    /// Unequal input line counts abort the run instead of padding with empty lines.
    pub strict: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            length: LengthRange::default(),
            max_ratio: DEFAULT_MAX_RATIO,
            verbose: false,
            strict: false,
        }
    }
}

impl From<&crate::args::Args> for FilterConfig {
    fn from(args: &crate::args::Args) -> Self {
        Self {
            length: args.length,
            max_ratio: args.max_ratio,
            verbose: args.verbose,
            strict: args.strict,
        }
    }
}
