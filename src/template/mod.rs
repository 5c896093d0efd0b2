//! `{{name}}` placeholder substitution.
//!
//! A placeholder is `{{`, one or more ASCII letters, digits or underscores, and
//! `}}`. Placeholders with a value are replaced, braces included. Everything
//! else, including placeholders without a value and malformed tokens such as
//! `{{ name }}` or an unclosed `{{name`, is kept verbatim so previews stay
//! readable when example data is incomplete.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, RENDER_EXTRA_CAPACITY};

mod parser;

pub use parser::{TemplateToken, is_name_char};

/// Where placeholder values come from.
pub trait VariableSource {
    /// Value for `name`, or `None` to keep the placeholder as written.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> VariableSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> VariableSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<T: VariableSource + ?Sized> VariableSource for &T {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

/// A parsed template borrowing from its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    tokens: Vec<TemplateToken<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Self {
        let tokens = parser::tokenize(source);
        return Self { source, tokens };
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &[TemplateToken<'a>] {
        &self.tokens
    }

    /// Number of placeholder tokens, repeats included.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholder_names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::new();
        for name in self.placeholders() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Distinct placeholder names that `values` has no value for.
    pub fn missing_names<V: VariableSource + ?Sized>(&self, values: &V) -> Vec<&'a str> {
        let mut names = self.placeholder_names();
        names.retain(|name| values.lookup(name).is_none());
        names
    }

    /// Replace every placeholder that has a value in `values`.
    ///
    /// Values are inserted as-is; a value that itself contains `{{x}}` is not
    /// expanded again.
    pub fn render<V: VariableSource + ?Sized>(&self, values: &V) -> String {
        let mut rendered = String::with_capacity(self.source.len() + RENDER_EXTRA_CAPACITY);
        for token in &self.tokens {
            match *token {
                TemplateToken::Text(text) => rendered.push_str(text),
                TemplateToken::Placeholder(name) => match values.lookup(name) {
                    Some(value) => rendered.push_str(value),
                    None => {
                        rendered.push_str(PLACEHOLDER_OPEN);
                        rendered.push_str(name);
                        rendered.push_str(PLACEHOLDER_CLOSE);
                    }
                },
            }
        }
        rendered
    }

    fn placeholders(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().filter_map(|token| match *token {
            TemplateToken::Placeholder(name) => Some(name),
            TemplateToken::Text(_) => None,
        })
    }
}

/// Replace every `{{name}}` in `text` that has a value in `values`.
///
/// Unknown names and malformed tokens are left exactly as written.
pub fn substitute_template<V: VariableSource + ?Sized>(text: &str, values: &V) -> String {
    Template::parse(text).render(values)
}
