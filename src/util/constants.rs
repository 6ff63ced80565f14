// tailplot - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "tailplot";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input format
// =============================================================================

/// Field delimiter for data rows. Fixed; no quoting or escaping is supported.
pub const FIELD_DELIMITER: char = ',';

/// Timestamp format of the first field of every data row (chrono syntax).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Value appended to short rows during normalization so every row reaches the
/// run's maximum observed field count.
pub const PAD_FIELD: &str = "0";

// =============================================================================
// Reader defaults
// =============================================================================

/// Default line budget: how many lines to collect across all files, counted
/// from the newest file backwards. 0 means "read every line of every file".
pub const DEFAULT_LINE_BUDGET: usize = 120;

/// Default input glob pattern.
pub const DEFAULT_INPUT_PATTERN: &str = "/var/log/speed.log*";

// =============================================================================
// Series builder limits
// =============================================================================

/// Maximum number of per-row/per-cell diagnostics retained for reporting.
/// Further malformed rows are still counted (and still default to 0 / get
/// skipped) but their diagnostics are not stored, so a pathological input
/// cannot grow the diagnostics list without bound.
pub const MAX_DIAGNOSTICS: usize = 1_000;

/// Default scale divisor applied to every numeric value before plotting.
pub const DEFAULT_SCALE_DIVISOR: f64 = 1.0;

// =============================================================================
// Chart defaults
// =============================================================================

/// Default output image path. The extension selects the raster format.
pub const DEFAULT_OUTPUT_PATH: &str = "speedtest.png";

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Speedtest Overview";

/// Default series label prefix; series are named "<prefix> 1", "<prefix> 2", ...
pub const DEFAULT_SERIES_LABEL: &str = "data-";

/// Default axis labels.
pub const DEFAULT_X_LABEL: &str = "Time";
pub const DEFAULT_Y_LABEL: &str = "Speed (Bps)";

/// Default image dimensions in centimetres.
pub const DEFAULT_WIDTH_CM: u32 = 42;
pub const DEFAULT_HEIGHT_CM: u32 = 16;

/// Raster density used to convert centimetres to backend pixels (96 dpi).
pub const PIXELS_PER_CM: f64 = 96.0 / 2.54;

/// Title and axis-label font sizes in points.
pub const TITLE_FONT_SIZE: u32 = 28;
pub const AXIS_FONT_SIZE: u32 = 18;

/// Dash segment and gap length (pixels) for trend lines.
pub const TREND_DASH_SIZE: u32 = 5;
pub const TREND_DASH_GAP: u32 = 5;

/// Legend padding in pixels.
pub const LEGEND_MARGIN: u32 = 8;

/// Fraction of the value range added above and below the plotted area so
/// extreme points do not sit on the frame.
pub const Y_RANGE_PADDING: f64 = 0.05;

/// Calendar format for time-axis tick labels.
pub const TICK_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";
