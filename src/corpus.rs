use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::codec::{self, Codec};
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::filter::{progress_marker, PairFilter};
use crate::output::PendingOutput;
use crate::stats::RunStats;
use crate::Args;

#[derive(Debug, Clone)]
pub struct CorpusPaths {
    pub infile1: PathBuf,
    pub infile2: PathBuf,
    pub outfile1: PathBuf,
    pub outfile2: PathBuf,
}

impl From<&Args> for CorpusPaths {
    fn from(args: &Args) -> Self {
        Self {
            infile1: args.infile1.clone(),
            infile2: args.infile2.clone(),
            outfile1: args.outfile1.clone(),
            outfile2: args.outfile2.clone(),
        }
    }
}

/// Filter the two input files into the two output files.
///
/// Both outputs are renamed into place only after the whole corpus has been
/// processed and both streams are closed.
pub fn filter_corpus(paths: &CorpusPaths, config: &FilterConfig) -> Result<RunStats> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "corpus_filter",
        infile1 = ?paths.infile1,
        infile2 = ?paths.infile2,
        codec1 = %Codec::from_path(&paths.infile1),
        codec2 = %Codec::from_path(&paths.infile2),
        length = %config.length,
        max_ratio = config.max_ratio,
        "Starting corpus filtering"
    );
    if config.length.is_empty() {
        warn!(
            action = "configure",
            component = "corpus_filter",
            length = %config.length,
            "Minimum length exceeds maximum; every pair will be filtered out"
        );
    }

    let in1 = codec::open_reader(&paths.infile1)?;
    let in2 = codec::open_reader(&paths.infile2)?;
    let mut out1 = PendingOutput::create(&paths.outfile1)?;
    let mut out2 = PendingOutput::create(&paths.outfile2)?;

    let stats = {
        let stderr = io::stderr();
        let mut progress = stderr.lock();
        filter_streams(in1, in2, &mut out1, &mut out2, paths, config, &mut progress)?
    };

    commit_outputs(out1, out2)?;

    info!(
        action = "complete",
        component = "corpus_filter",
        total_lines = stats.total_lines,
        good_lines = stats.good_lines,
        duration_ms = start_time.elapsed().as_millis(),
        "Corpus filtering completed"
    );
    Ok(stats)
}

/// Close both outputs, then rename them into place.
///
/// Both streams are finished before either rename, so a write error leaves
/// neither target touched. Only a failure of the second rename can leave the
/// first output committed alone; that case names both paths.
fn commit_outputs(mut out1: PendingOutput, mut out2: PendingOutput) -> Result<()> {
    out1.close()?;
    out2.close()?;

    let (target1, target2) = (out1.target().to_path_buf(), out2.target().to_path_buf());
    out1.commit()
        .with_context(|| format!("Failed to commit {}", target1.display()))?;
    if let Err(e) = out2.commit() {
        warn!(
            action = "commit",
            component = "corpus_filter",
            committed = ?target1,
            failed = ?target2,
            error = %e,
            "Outputs only partially committed"
        );
        return Err(anyhow::Error::new(e).context(format!(
            "Failed to commit {}; {} was already committed",
            target2.display(),
            target1.display()
        )));
    }
    Ok(())
}

/// Stream line pairs from `in1`/`in2`, writing accepted pairs verbatim.
///
/// `in1` drives the iteration. When `in2` runs out first, the remaining lines
/// of `in1` are paired with empty lines; surplus lines of `in2` are ignored.
/// With `config.strict` either mismatch is an error instead.
pub fn filter_streams<R1, R2, W1, W2, P>(
    mut in1: R1,
    mut in2: R2,
    out1: &mut W1,
    out2: &mut W2,
    paths: &CorpusPaths,
    config: &FilterConfig,
    progress: &mut P,
) -> crate::error::Result<RunStats>
where
    R1: BufRead,
    R2: BufRead,
    W1: Write,
    W2: Write,
    P: Write,
{
    let mut filter = PairFilter::new(config);
    let mut line1 = Vec::new();
    let mut line2 = Vec::new();
    let mut padded_lines = 0u64;

    loop {
        line1.clear();
        line2.clear();

        let read1 = read_line(&mut in1, &mut line1, &paths.infile1)?;
        if read1 == 0 {
            break;
        }
        let read2 = read_line(&mut in2, &mut line2, &paths.infile2)?;
        if read2 == 0 {
            if config.strict {
                return Err(FilterError::Misaligned {
                    path: paths.infile2.clone(),
                    lines: filter.stats().total_lines,
                });
            }
            padded_lines += 1;
        }

        if filter.process(&line1, &line2).is_accepted() {
            out1.write_all(&line1).map_err(|source| FilterError::Write {
                path: paths.outfile1.clone(),
                source,
            })?;
            out2.write_all(&line2).map_err(|source| FilterError::Write {
                path: paths.outfile2.clone(),
                source,
            })?;
        }

        if config.verbose {
            if let Some(marker) = progress_marker(filter.stats().total_lines) {
                let _ = progress.write_all(marker.as_bytes());
                let _ = progress.flush();
            }
        }
    }

    if config.verbose {
        let _ = progress.write_all(b"\n");
    }

    let total_lines = filter.stats().total_lines;
    if padded_lines > 0 {
        warn!(
            action = "align",
            component = "corpus_filter",
            path = ?paths.infile2,
            lines = total_lines - padded_lines,
            padded_lines,
            "Second input ended early; remaining lines paired with empty lines"
        );
    }

    let mut surplus_lines = 0u64;
    while read_line(&mut in2, &mut line2, &paths.infile2)? > 0 {
        if config.strict {
            return Err(FilterError::Misaligned {
                path: paths.infile1.clone(),
                lines: total_lines,
            });
        }
        surplus_lines += 1;
        line2.clear();
    }
    if surplus_lines > 0 {
        warn!(
            action = "align",
            component = "corpus_filter",
            path = ?paths.infile1,
            lines = total_lines,
            surplus_lines,
            "First input ended early; surplus lines of the second input ignored"
        );
    }

    Ok(filter.into_stats())
}

fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    path: &std::path::Path,
) -> crate::error::Result<usize> {
    reader
        .read_until(b'\n', buf)
        .map_err(|source| FilterError::Read {
            path: path.to_path_buf(),
            source,
        })
}
