// tailplot - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration validation (before any I/O)
// 4. The select -> read -> normalize -> series -> trend -> render pipeline
// 5. Console reporting and exit codes
//
// Stdout carries the user-facing run report (files read, row counts, range,
// output path). Recoverable parse diagnostics and fatal error messages go to
// stderr, alongside the tracing output.

use clap::Parser;
use std::path::PathBuf;

use tailplot::chart::{self, ChartConfig};
use tailplot::core::{normalize, reader, select, series, trend};
use tailplot::util::constants;
use tailplot::util::error::{ConfigError, Result};
use tailplot::util::logging;

/// Chart rotated, comma-delimited time-series logs as multi-series line
/// graphs.
///
/// Each data row is `<YYYY-MM-DD HH:MM:SS>,<value>[,<value>...]`. The most
/// recent lines are collected across the matching files, newest file first,
/// and plotted oldest to newest.
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version, about)]
struct Cli {
    /// Input data files; supports glob patterns, e.g. /var/log/speed.log*
    #[arg(
        short = 'i',
        long = "in",
        value_name = "PATTERN",
        default_value = constants::DEFAULT_INPUT_PATTERN
    )]
    pattern: String,

    /// Output image; the extension selects the raster format (png, jpeg, ...).
    #[arg(
        short = 'o',
        long = "out",
        value_name = "PATH",
        default_value = constants::DEFAULT_OUTPUT_PATH
    )]
    output: PathBuf,

    /// Chart title.
    #[arg(long, default_value = constants::DEFAULT_TITLE)]
    title: String,

    /// Series label prefix; series are named "<prefix> 1", "<prefix> 2", ...
    #[arg(long, default_value = constants::DEFAULT_SERIES_LABEL)]
    label: String,

    /// X axis label.
    #[arg(long = "xlabel", default_value = constants::DEFAULT_X_LABEL)]
    x_label: String,

    /// Y axis label.
    #[arg(long = "ylabel", default_value = constants::DEFAULT_Y_LABEL)]
    y_label: String,

    /// Lines to read, counted from the end of the newest file backwards.
    /// 0 reads every line of every file.
    #[arg(short = 'n', long = "lines", default_value_t = constants::DEFAULT_LINE_BUDGET)]
    lines: usize,

    /// Image width in centimetres.
    #[arg(long, default_value_t = constants::DEFAULT_WIDTH_CM)]
    width: u32,

    /// Image height in centimetres.
    #[arg(long, default_value_t = constants::DEFAULT_HEIGHT_CM)]
    height: u32,

    /// Divide every data value by this before plotting (unit conversion).
    #[arg(short = 'x', long = "scale", default_value_t = constants::DEFAULT_SCALE_DIVISOR)]
    scale: f64,

    /// Draw the dashed running-average trend line for every series.
    #[arg(long = "avg")]
    avg: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// How a successful run ended. "No matching files" and "no plottable rows"
/// are terminal conditions, not failures: the process exits 0 with no image.
enum RunOutcome {
    Rendered,
    NoInputFiles,
    NoPlottableRows,
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "tailplot starting"
    );

    match run(&cli) {
        Ok(RunOutcome::Rendered) => {}
        Ok(RunOutcome::NoInputFiles) | Ok(RunOutcome::NoPlottableRows) => {
            // Reported inside run(); nothing was written.
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Validate the configuration, then drive the pipeline end to end.
fn run(cli: &Cli) -> Result<RunOutcome> {
    validate(cli)?;

    let files = select::select_files(&cli.pattern)?;
    if files.is_empty() {
        println!("No input files match '{}'", cli.pattern);
        return Ok(RunOutcome::NoInputFiles);
    }

    let rows = reader::read_recent_rows(&files, cli.lines, |path, taken| {
        println!("Reading {} ({taken} lines)", path.display());
    })?;

    let matrix = normalize::normalize(rows);
    println!(
        "Rows read: {}   max columns: {}",
        matrix.rows.len(),
        matrix.width
    );

    let built = series::build(&matrix, cli.scale);

    for diagnostic in &built.diagnostics {
        eprintln!("{diagnostic}");
    }
    let suppressed = built.summary.diagnostics_total - built.diagnostics.len();
    if suppressed > 0 {
        eprintln!("... {suppressed} further parse problems not shown");
    }

    println!("Valid rows: {}", built.summary.valid_rows);
    if let (Some(first), Some(last)) = (&built.summary.first_raw, &built.summary.last_raw) {
        println!("From {first} to {last}");
    }

    let mut plotted = built.series;
    if plotted.is_empty() {
        println!("No plottable rows; no chart written");
        return Ok(RunOutcome::NoPlottableRows);
    }

    trend::attach_trends(&mut plotted);

    let config = ChartConfig {
        title: cli.title.clone(),
        x_label: cli.x_label.clone(),
        y_label: cli.y_label.clone(),
        series_label: cli.label.clone(),
        width_cm: cli.width,
        height_cm: cli.height,
        with_trend: cli.avg,
    };
    chart::render(&plotted, &config, &cli.output)?;

    println!("Chart saved to {}", cli.output.display());

    Ok(RunOutcome::Rendered)
}

/// Reject caller misconfiguration before touching the filesystem.
fn validate(cli: &Cli) -> std::result::Result<(), ConfigError> {
    if cli.scale == 0.0 {
        return Err(ConfigError::ZeroScaleDivisor);
    }
    if cli.width == 0 {
        return Err(ConfigError::ValueOutOfRange {
            field: "width",
            value: cli.width.to_string(),
            expected: "a positive number of centimetres",
        });
    }
    if cli.height == 0 {
        return Err(ConfigError::ValueOutOfRange {
            field: "height",
            value: cli.height.to_string(),
            expected: "a positive number of centimetres",
        });
    }
    Ok(())
}
