use time::macros::format_description;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

use crate::output::temp_path_for;

/// Log to stderr at `error`, or `info` when verbose. `RUST_LOG` wins if set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Reject output paths that would clobber an input or the other output,
/// either directly or through the `<target>_` file written during the run.
pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    let inputs = [&args.infile1, &args.infile2];
    let outputs = [
        (&args.outfile1, &args.outfile2),
        (&args.outfile2, &args.outfile1),
    ];

    for (output, other) in outputs {
        let temp = temp_path_for(output);
        for written in [output, &temp] {
            if inputs.contains(&written) {
                anyhow::bail!(
                    "Output {} would overwrite input {}",
                    output.display(),
                    written.display()
                );
            }
            if written == other {
                anyhow::bail!(
                    "Output {} would overwrite output {}",
                    output.display(),
                    other.display()
                );
            }
        }
    }

    Ok(())
}
