//! Segment capacity configuration.
//!
//! Callers that talk to a carrier with different limits build their own
//! [`SegmentLimits`]; everyone else uses [`SegmentLimits::default`]. A table is
//! validated once when it is built, so calculations never have to fail.

use serde::{Deserialize, Serialize};

use crate::constants::{
    EXTENDED_MULTI_SEGMENT, EXTENDED_SINGLE_SEGMENT, STANDARD_MULTI_SEGMENT,
    STANDARD_SINGLE_SEGMENT,
};
use crate::encoding::Encoding;
use crate::error::{LimitsError, LimitsResult};

/// Characters per segment for one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Capacity of a message that fits in one segment.
    pub single: usize,
    /// Capacity of each part once a message needs more than one segment.
    pub multi: usize,
}

impl Capacity {
    pub const STANDARD: Self = Self {
        single: STANDARD_SINGLE_SEGMENT,
        multi: STANDARD_MULTI_SEGMENT,
    };

    pub const EXTENDED: Self = Self {
        single: EXTENDED_SINGLE_SEGMENT,
        multi: EXTENDED_MULTI_SEGMENT,
    };

    fn validate(self, encoding: Encoding) -> LimitsResult<()> {
        if self.single == 0 || self.multi == 0 {
            return Err(LimitsError::ZeroCapacity {
                encoding,
                single: self.single,
                multi: self.multi,
            });
        }
        if self.multi > self.single {
            return Err(LimitsError::MultiExceedsSingle {
                encoding,
                single: self.single,
                multi: self.multi,
            });
        }
        Ok(())
    }
}

/// Capacity table for both encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentLimits {
    standard: Capacity,
    extended: Capacity,
}

impl Default for SegmentLimits {
    fn default() -> Self {
        Self {
            standard: Capacity::STANDARD,
            extended: Capacity::EXTENDED,
        }
    }
}

impl SegmentLimits {
    /// Build a validated capacity table.
    ///
    /// Capacities must be non-zero, a multi-part capacity may not exceed its
    /// single-segment capacity, and extended capacities may not exceed standard
    /// ones. Together these keep segment counts from ever dropping when a
    /// character is appended.
    pub fn new(standard: Capacity, extended: Capacity) -> LimitsResult<Self> {
        standard.validate(Encoding::Standard)?;
        extended.validate(Encoding::Extended)?;

        if extended.single > standard.single {
            return Err(LimitsError::ExtendedExceedsStandard {
                field: "single",
                standard: standard.single,
                extended: extended.single,
            });
        }
        if extended.multi > standard.multi {
            return Err(LimitsError::ExtendedExceedsStandard {
                field: "multi",
                standard: standard.multi,
                extended: extended.multi,
            });
        }

        Ok(Self { standard, extended })
    }

    /// Load a capacity table from JSON.
    ///
    /// Either encoding may be omitted and falls back to its default:
    ///
    /// ```json
    /// { "standard": { "single": 160, "multi": 153 } }
    /// ```
    pub fn from_json_str(json: &str) -> LimitsResult<Self> {
        let raw: RawSegmentLimits = serde_json::from_str(json)?;
        let limits = Self::new(raw.standard, raw.extended)?;
        log::debug!("loaded segment limits: {limits:?}");
        Ok(limits)
    }

    pub fn standard(&self) -> Capacity {
        self.standard
    }

    pub fn extended(&self) -> Capacity {
        self.extended
    }

    pub fn capacity(&self, encoding: Encoding) -> Capacity {
        match encoding {
            Encoding::Standard => self.standard,
            Encoding::Extended => self.extended,
        }
    }
}

/// Unvalidated mirror of [`SegmentLimits`] used for deserialization.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSegmentLimits {
    standard: Capacity,
    extended: Capacity,
}

impl Default for RawSegmentLimits {
    fn default() -> Self {
        let limits = SegmentLimits::default();
        Self {
            standard: limits.standard,
            extended: limits.extended,
        }
    }
}
