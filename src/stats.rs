/// Counters for one side of the corpus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SideStats {
    pub total_words: u64,
    pub good_words: u64,
    pub too_short: u64,
    pub too_long: u64,
    /// Pairs rejected because this side exceeded the ratio limit.
    pub ratio_exceeded: u64,
}

impl SideStats {
    pub fn bad_words(&self) -> u64 {
        self.total_words - self.good_words
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total_lines: u64,
    pub good_lines: u64,
    pub side1: SideStats,
    pub side2: SideStats,
}

impl RunStats {
    pub fn bad_lines(&self) -> u64 {
        self.total_lines - self.good_lines
    }
}
