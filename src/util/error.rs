// tailplot - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain.
//
// Recoverable per-row / per-cell parse conditions are NOT errors: they are
// `core::model::Diagnostic` values collected alongside the series, because a
// malformed data row must never abort the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all tailplot operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TailplotError {
    /// Glob evaluation, stat, or file read failed.
    FileSystem(FileSystemError),

    /// Caller misconfiguration, detected before any I/O.
    Config(ConfigError),

    /// The chart backend failed to draw or encode the output image.
    Render(RenderError),
}

impl fmt::Display for TailplotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem(e) => write!(f, "File system error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Render(e) => write!(f, "Render error: {e}"),
        }
    }
}

impl std::error::Error for TailplotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// File system errors
// ---------------------------------------------------------------------------

/// Errors raised while selecting and reading input files. All fatal: the run
/// aborts with no partial chart.
#[derive(Debug)]
pub enum FileSystemError {
    /// The input glob pattern could not be compiled.
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A path matched by the pattern could not be examined during iteration.
    Glob { source: glob::GlobError },

    /// Reading metadata for a matched file failed.
    Stat { path: PathBuf, source: io::Error },

    /// Opening or reading a selected file failed.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Invalid glob pattern '{pattern}': {source}")
            }
            Self::Glob { source } => {
                write!(f, "Cannot examine '{}': {source}", source.path().display())
            }
            Self::Stat { path, source } => {
                write!(f, "Cannot stat '{}': {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FileSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::Glob { source } => Some(source),
            Self::Stat { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
        }
    }
}

impl From<FileSystemError> for TailplotError {
    fn from(e: FileSystemError) -> Self {
        Self::FileSystem(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Caller misconfiguration. Validated at startup, before any file I/O.
#[derive(Debug)]
pub enum ConfigError {
    /// The scale divisor is zero; every stored value would be a division by
    /// zero.
    ZeroScaleDivisor,

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScaleDivisor => {
                write!(f, "Scale divisor must be non-zero")
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "'{field}' = '{value}' is out of range. Expected: {expected}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for TailplotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors surfaced by the chart-rendering collaborator. The plotters error
/// types are generic over the drawing backend, so the message is captured as
/// a string at the conversion boundary while the output path context is kept.
#[derive(Debug)]
pub enum RenderError {
    /// Drawing or encoding the output image failed.
    Backend { path: PathBuf, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend { path, message } => {
                write!(f, "Cannot render '{}': {message}", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for TailplotError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

/// Convenience type alias for tailplot results.
pub type Result<T> = std::result::Result<T, TailplotError>;
