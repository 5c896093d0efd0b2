//! SMS encoding detection, segment counting and placeholder substitution.
//!
//! # Architecture
//!
//! Every operation is a pure function of its input, cheap enough to run on every
//! keystroke of a message composer:
//! 1. **Encoding detection**: a message is standard (7-bit) when every character
//!    is in the standard alphabet, extended (16-bit) otherwise
//! 2. **Segmentation**: the length is checked against the single-segment capacity
//!    of the detected encoding, and divided by the reduced multi-part capacity
//!    when it does not fit
//! 3. **Substitution**: `{{name}}` placeholders are replaced from a map of values,
//!    leaving unknown or malformed ones untouched
//!
//! The implementation is organized into focused modules:
//! - `constants`: Capacity table and placeholder markers
//! - `encoding`: Standard alphabet and encoding detection
//! - `limits`: Validated, configurable capacity table
//! - `segments`: Segment calculator
//! - `template`: Placeholder parsing and substitution
//! - `preview`: Substitution and segmentation together, for composers
//!
//! # Counting
//!
//! Lengths are UTF-16 code units. Standard text has one unit per character;
//! emoji and other characters outside the Basic Multilingual Plane count two.
//! An empty message is standard and takes one segment.
//!
//! # Errors
//!
//! Analysis and substitution never fail. Only building a custom
//! [`SegmentLimits`] can, with a [`LimitsError`].

#![forbid(unsafe_code)]
#![allow(clippy::needless_return)]
#![doc = include_str!("../README.md")]

// Lets `sms_template!` expand to `::sms_segments::...` inside this crate too.
extern crate self as sms_segments;

// ============================================================================
// Module Organization
// ============================================================================

pub mod constants;
mod encoding;
mod error;
mod limits;
mod preview;
mod segments;
mod template;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use encoding::{Encoding, detect_encoding, is_standard_char, non_standard_chars};
pub use error::{LimitsError, LimitsResult};
pub use limits::{Capacity, SegmentLimits};
pub use preview::{MessagePreview, preview_message};
pub use segments::{SegmentInfo, char_count, detect_encoding_and_segments};
pub use template::{Template, TemplateToken, VariableSource, is_name_char, substitute_template};

/// Compile-time checked template literal.
///
/// Expands to [`Template::parse`] after rejecting unclosed placeholders and
/// invalid placeholder names at compile time.
pub use sms_segments_macro::sms_template;
