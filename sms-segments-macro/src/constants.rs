//! Limits and markers for compile-time template checking.
//!
//! These limits keep macro expansion cheap for any literal while allowing
//! every realistic SMS template.

// ============================================================================
// Placeholder Markers
// ============================================================================

/// Opens a placeholder: `{{name}}`.
pub const PLACEHOLDER_OPEN: &str = "{{";

/// Closes a placeholder: `{{name}}`.
pub const PLACEHOLDER_CLOSE: &str = "}}";

// ============================================================================
// Compile-Time Limits
// ============================================================================

/// Maximum length of a template literal in bytes.
///
/// Ten full multi-part standard messages fit comfortably below this.
pub const MAX_TEMPLATE_LEN: usize = 10_000;

/// Maximum number of placeholders in one template literal.
pub const MAX_PLACEHOLDERS: usize = 64;

/// Maximum length of a placeholder name in bytes.
pub const MAX_NAME_LEN: usize = 64;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Initial capacity hint for the part vector.
///
/// Most templates have one or two placeholders, so 4 parts avoid reallocations.
pub const PARTS_INITIAL_CAPACITY: usize = 4;
