//! Segment counting.
//!
//! Lengths are counted in UTF-16 code units, the unit carriers use for the
//! extended encoding. Every character of the standard alphabet is one unit, so
//! for standard text this is the plain character count; characters outside the
//! Basic Multilingual Plane, such as most emoji, count as two.

use serde::Serialize;

use crate::encoding::{Encoding, detect_encoding};
use crate::limits::SegmentLimits;

/// How a message will be split for sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentInfo {
    /// Length in UTF-16 code units.
    pub char_count: usize,
    pub encoding: Encoding,
    /// Number of segments; an empty message still takes one.
    pub segments: usize,
    /// Capacity used for the calculation: the single-segment capacity when the
    /// message fits in one segment, the reduced multi-part capacity otherwise.
    pub chars_per_segment: usize,
}

impl SegmentInfo {
    /// Characters left before another segment is needed.
    pub fn remaining(&self) -> usize {
        self.segments
            .saturating_mul(self.chars_per_segment)
            .saturating_sub(self.char_count)
    }

    pub fn is_multipart(&self) -> bool {
        self.segments > 1
    }
}

/// Length of `text` in UTF-16 code units.
pub fn char_count(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Encoding and segment count of `text` with the default capacity table.
pub fn detect_encoding_and_segments(text: &str) -> SegmentInfo {
    SegmentLimits::default().calculate(text)
}

impl SegmentLimits {
    /// Encoding and segment count of `text` with this capacity table.
    pub fn calculate(&self, text: &str) -> SegmentInfo {
        let encoding = detect_encoding(text);
        let char_count = char_count(text);
        let capacity = self.capacity(encoding);

        let (segments, chars_per_segment) = if char_count <= capacity.single {
            (1, capacity.single)
        } else {
            (char_count.div_ceil(capacity.multi), capacity.multi)
        };

        SegmentInfo {
            char_count,
            encoding,
            segments,
            chars_per_segment,
        }
    }
}
