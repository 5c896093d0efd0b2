//! Core types for compile-time template checking.

/// One piece of a template literal after tokenization.
///
/// Only used during macro expansion; the runtime crate re-parses the literal
/// into its own borrowed tokens.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TemplatePart {
    /// Literal text sent as-is.
    Text(Box<str>),

    /// A `{{name}}` placeholder. Holds the name without braces.
    Placeholder(Box<str>),
}

impl TemplatePart {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}
