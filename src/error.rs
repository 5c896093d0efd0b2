use crate::encoding::Encoding;

/// Result type for segment limit configuration.
pub type LimitsResult<T> = std::result::Result<T, LimitsError>;

/// Rejected segment capacity configuration.
///
/// Message analysis itself never fails; only building a custom capacity table can.
#[derive(Debug, thiserror::Error)]
pub enum LimitsError {
    #[error("{encoding:?} capacity must be non-zero (single: {single}, multi: {multi})")]
    ZeroCapacity {
        encoding: Encoding,
        single: usize,
        multi: usize,
    },
    #[error(
        "{encoding:?} multi-segment capacity {multi} exceeds single-segment capacity {single}"
    )]
    MultiExceedsSingle {
        encoding: Encoding,
        single: usize,
        multi: usize,
    },
    #[error("extended {field} capacity {extended} exceeds standard capacity {standard}")]
    ExtendedExceedsStandard {
        field: &'static str,
        standard: usize,
        extended: usize,
    },
    #[error("failed to parse segment limits: {0}")]
    Parse(#[from] serde_json::Error),
}
