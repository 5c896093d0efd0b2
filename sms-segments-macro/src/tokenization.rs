//! Template literal tokenization at compile-time.

use crate::constants::{
    MAX_NAME_LEN, MAX_PLACEHOLDERS, MAX_TEMPLATE_LEN, PARTS_INITIAL_CAPACITY, PLACEHOLDER_CLOSE,
    PLACEHOLDER_OPEN,
};
use crate::types::TemplatePart;
use crate::validation::is_valid_name;
use syn::LitStr;

/// Tokenize a template literal into text and `{{name}}` placeholders.
///
/// Stricter than the runtime parser: every `{{` must open a well-formed
/// placeholder. Enforces `MAX_TEMPLATE_LEN`, `MAX_PLACEHOLDERS`, `MAX_NAME_LEN`.
pub fn tokenize_template(source: &str, template_lit: &LitStr) -> syn::Result<Vec<TemplatePart>> {
    if source.len() > MAX_TEMPLATE_LEN {
        return Err(syn::Error::new(
            template_lit.span(),
            format!(
                "Template too long ({} bytes). Maximum allowed: {} bytes.",
                source.len(),
                MAX_TEMPLATE_LEN
            ),
        ));
    }

    let mut parts: Vec<TemplatePart> = Vec::with_capacity(PARTS_INITIAL_CAPACITY);
    let mut placeholder_count = 0usize;
    let mut remaining = source;

    while let Some(open) = remaining.find(PLACEHOLDER_OPEN) {
        if open > 0 {
            parts.push(TemplatePart::Text(remaining[..open].into()));
        }

        let after_open = &remaining[open + PLACEHOLDER_OPEN.len()..];
        let Some(close) = after_open.find(PLACEHOLDER_CLOSE) else {
            return Err(syn::Error::new(
                template_lit.span(),
                format!(
                    "Unclosed placeholder near '{}'. Close it with '{PLACEHOLDER_CLOSE}'.",
                    snippet(&remaining[open..])
                ),
            ));
        };

        let name = &after_open[..close];
        if name.len() > MAX_NAME_LEN {
            return Err(syn::Error::new(
                template_lit.span(),
                format!("Placeholder name too long (>{MAX_NAME_LEN} bytes)."),
            ));
        }
        if !is_valid_name(name) {
            return Err(syn::Error::new(
                template_lit.span(),
                format!(
                    "Invalid placeholder name '{name}'. \
                     Names must be non-empty and contain only ASCII letters, digits or underscores, \
                     with no spaces inside the braces."
                ),
            ));
        }

        placeholder_count += 1;
        if placeholder_count > MAX_PLACEHOLDERS {
            return Err(syn::Error::new(
                template_lit.span(),
                format!("Too many placeholders in template. Maximum allowed: {MAX_PLACEHOLDERS}."),
            ));
        }
        parts.push(TemplatePart::Placeholder(name.into()));

        remaining = &after_open[close + PLACEHOLDER_CLOSE.len()..];
    }

    if !remaining.is_empty() {
        parts.push(TemplatePart::Text(remaining.into()));
    }

    Ok(parts)
}

/// First few characters of `text`, for error messages.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(16) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::LitStr;

    fn lit() -> LitStr {
        syn::parse_quote!("template")
    }

    #[test]
    fn test_tokenization_basic() {
        let parts = tokenize_template("Hi {{name}}, see you {{date}}.", &lit()).unwrap();
        assert_eq!(
            parts,
            vec![
                TemplatePart::Text("Hi ".into()),
                TemplatePart::Placeholder("name".into()),
                TemplatePart::Text(", see you ".into()),
                TemplatePart::Placeholder("date".into()),
                TemplatePart::Text(".".into()),
            ]
        );
    }

    #[test]
    fn test_no_placeholders() {
        let parts = tokenize_template("Your appointment is confirmed", &lit()).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(!parts[0].is_placeholder());
    }

    #[test]
    fn test_empty_template() {
        let parts = tokenize_template("", &lit()).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_stray_closing_braces_are_text() {
        let parts = tokenize_template("{{a}}} }}", &lit()).unwrap();
        assert_eq!(
            parts,
            vec![
                TemplatePart::Placeholder("a".into()),
                TemplatePart::Text("} }}".into()),
            ]
        );
    }

    #[test]
    fn test_unclosed_placeholder_rejected() {
        assert!(tokenize_template("Hi {{name", &lit()).is_err());
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(tokenize_template("Hi {{ name }}", &lit()).is_err());
        assert!(tokenize_template("Hi {{first-name}}", &lit()).is_err());
        assert!(tokenize_template("Hi {{}}", &lit()).is_err());
        assert!(tokenize_template("Hi {{{name}}}", &lit()).is_err());
    }

    #[test]
    fn test_max_placeholders_at_boundary() {
        let mut template = String::new();
        for i in 0..MAX_PLACEHOLDERS {
            template.push_str(&format!("{{{{v{i}}}}} "));
        }
        let parts = tokenize_template(&template, &lit()).unwrap();
        let placeholder_count = parts.iter().filter(|p| p.is_placeholder()).count();
        assert_eq!(placeholder_count, MAX_PLACEHOLDERS);

        template.push_str("{{one_more}}");
        assert!(tokenize_template(&template, &lit()).is_err());
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = format!("{{{{{}}}}}", "n".repeat(MAX_NAME_LEN));
        assert!(tokenize_template(&at_limit, &lit()).is_ok());

        let over_limit = format!("{{{{{}}}}}", "n".repeat(MAX_NAME_LEN + 1));
        assert!(tokenize_template(&over_limit, &lit()).is_err());
    }

    #[test]
    fn test_template_length_limit() {
        let too_long = "a".repeat(MAX_TEMPLATE_LEN + 1);
        assert!(tokenize_template(&too_long, &lit()).is_err());
    }
}
