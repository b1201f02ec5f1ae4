use std::io::{self, Write};

use crate::stats::RunStats;

/// Write the fixed-width summary table for a finished run.
pub fn write_summary<W: Write>(out: &mut W, stats: &RunStats, max_ratio: u64) -> io::Result<()> {
    let (s1, s2) = (&stats.side1, &stats.side2);

    writeln!(out, "{:>20} {:>10} {:>10} {:>10}", "", "sent. pairs", "words L1", "words L2")?;
    writeln!(
        out,
        "{:>20} {:>10} {:>10} {:>10}",
        "   processed:", stats.total_lines, s1.total_words, s2.total_words
    )?;
    writeln!(
        out,
        "{:>20} {:>10} {:>10} {:>10}",
        "    retained:", stats.good_lines, s1.good_words, s2.good_words
    )?;
    writeln!(
        out,
        "{:>20} {:>10} {:>10} {:>10}",
        "filtered out:",
        stats.bad_lines(),
        s1.bad_words(),
        s2.bad_words()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>20} {:>10} {:>10} {:>10}",
        "violations",
        "too short",
        "too long",
        format!("ratio > {max_ratio}")
    )?;
    for (label, side) in [("segment 1:", s1), ("segment 2:", s2)] {
        writeln!(
            out,
            "{:>20} {:>10} {:>10} {:>10}",
            label, side.too_short, side.too_long, side.ratio_exceeded
        )?;
    }
    Ok(())
}

pub fn print_summary(stats: &RunStats, max_ratio: u64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_summary(&mut lock, stats, max_ratio)?;
    lock.flush()
}
