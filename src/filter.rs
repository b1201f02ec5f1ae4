//! Per-pair acceptance rules.

use crate::config::{FilterConfig, LengthRange};
use crate::stats::RunStats;

/// Pairs between ticks when progress is shown.
pub const PROGRESS_INTERVAL: u64 = 1_000;
/// Pairs between the count-in-thousands markers that end a progress row.
pub const PROGRESS_ROW: u64 = 50_000;

fn is_word_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Number of whitespace-separated tokens in a raw line.
pub fn word_count(line: &[u8]) -> u64 {
    line.split(|&b| is_word_separator(b))
        .filter(|token| !token.is_empty())
        .count() as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    TooShort,
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioViolation {
    Side1Dominant,
    Side2Dominant,
}

/// Outcome of every rule for one line pair. All rules are evaluated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub length1: Option<LengthViolation>,
    pub length2: Option<LengthViolation>,
    pub ratio: Option<RatioViolation>,
}

impl Verdict {
    pub fn violation_count(&self) -> usize {
        [
            self.length1.is_some(),
            self.length2.is_some(),
            self.ratio.is_some(),
        ]
        .into_iter()
        .filter(|&v| v)
        .count()
    }

    pub fn is_accepted(&self) -> bool {
        self.violation_count() == 0
    }
}

pub fn check_length(words: u64, range: &LengthRange) -> Option<LengthViolation> {
    if words < range.min as u64 {
        Some(LengthViolation::TooShort)
    } else if words > range.max as u64 {
        Some(LengthViolation::TooLong)
    } else {
        None
    }
}

pub fn check_ratio(slen1: u64, slen2: u64, max_ratio: u64) -> Option<RatioViolation> {
    if slen1 > max_ratio.saturating_mul(slen2) {
        Some(RatioViolation::Side1Dominant)
    } else if slen2 > max_ratio.saturating_mul(slen1) {
        Some(RatioViolation::Side2Dominant)
    } else {
        None
    }
}

pub fn evaluate(slen1: u64, slen2: u64, config: &FilterConfig) -> Verdict {
    Verdict {
        length1: check_length(slen1, &config.length),
        length2: check_length(slen2, &config.length),
        ratio: check_ratio(slen1, slen2, config.max_ratio),
    }
}

/// Applies the rules pair by pair and accumulates the run statistics.
#[derive(Debug)]
pub struct PairFilter<'a> {
    config: &'a FilterConfig,
    stats: RunStats,
}

impl<'a> PairFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            config,
            stats: RunStats::default(),
        }
    }

    /// Classify one pair. The caller writes the lines out iff the verdict accepts them.
    pub fn process(&mut self, line1: &[u8], line2: &[u8]) -> Verdict {
        let slen1 = word_count(line1);
        let slen2 = word_count(line2);

        let stats = &mut self.stats;
        stats.total_lines += 1;
        stats.side1.total_words += slen1;
        stats.side2.total_words += slen2;

        let verdict = evaluate(slen1, slen2, self.config);

        for (violation, side) in [
            (verdict.length1, &mut stats.side1),
            (verdict.length2, &mut stats.side2),
        ] {
            match violation {
                Some(LengthViolation::TooShort) => side.too_short += 1,
                Some(LengthViolation::TooLong) => side.too_long += 1,
                None => {}
            }
        }
        match verdict.ratio {
            Some(RatioViolation::Side1Dominant) => stats.side1.ratio_exceeded += 1,
            Some(RatioViolation::Side2Dominant) => stats.side2.ratio_exceeded += 1,
            None => {}
        }

        if verdict.is_accepted() {
            stats.good_lines += 1;
            stats.side1.good_words += slen1;
            stats.side2.good_words += slen2;
        }
        verdict
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn into_stats(self) -> RunStats {
        self.stats
    }
}

/// Progress output due after `total_lines` pairs, if any.
pub fn progress_marker(total_lines: u64) -> Option<String> {
    if total_lines == 0 || total_lines % PROGRESS_INTERVAL != 0 {
        None
    } else if total_lines % PROGRESS_ROW == 0 {
        Some(format!("{:>10}K\n", total_lines / 1000))
    } else {
        Some(".".to_string())
    }
}
