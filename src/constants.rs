//! Segment capacities and placeholder markers.
//!
//! The capacity table is a compatibility contract with carriers and with the
//! SMS console that produced the numbers. Override it through
//! [`SegmentLimits`](crate::SegmentLimits), not by editing these values.

// ============================================================================
// Segment Capacities
// ============================================================================

/// Characters that fit in a single standard (7-bit) message.
pub const STANDARD_SINGLE_SEGMENT: usize = 160;

/// Characters per part of a multi-part standard message.
///
/// Each part gives up room to the concatenation header.
pub const STANDARD_MULTI_SEGMENT: usize = 153;

/// Characters that fit in a single extended (16-bit) message.
pub const EXTENDED_SINGLE_SEGMENT: usize = 70;

/// Characters per part of a multi-part extended message.
pub const EXTENDED_MULTI_SEGMENT: usize = 67;

// ============================================================================
// Placeholder Markers
// ============================================================================

/// Opens a placeholder: `{{name}}`.
pub const PLACEHOLDER_OPEN: &str = "{{";

/// Closes a placeholder: `{{name}}`.
pub const PLACEHOLDER_CLOSE: &str = "}}";

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Extra bytes reserved when rendering, on top of the template length.
///
/// Values are usually a bit longer than their `{{name}}` token.
pub const RENDER_EXTRA_CAPACITY: usize = 32;
