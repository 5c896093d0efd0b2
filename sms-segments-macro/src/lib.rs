//! Procedural macro for compile-time checked SMS template literals.
//!
//! This crate provides one macro, `sms_template!`, re-exported by `sms-segments`.
//!
//! # Architecture
//!
//! 1. **Tokenization**: the literal is split into text and `{{name}}`
//!    placeholders at compile time
//! 2. **Validation**: placeholder names and size limits are checked
//! 3. **Expansion**: the macro expands to `::sms_segments::Template::parse(literal)`,
//!    with a debug assertion that the runtime parser found the same placeholders
//!
//! The runtime parser in `sms-segments` is lenient: malformed or unknown tokens
//! are kept verbatim. This macro is the strict counterpart for templates written
//! in source code, where a typo such as `{{ name }}` or `{{name}` is a bug.
//!
//! # Limits
//!
//! - **Template literal**: Maximum 10,000 bytes
//! - **Placeholders**: Maximum 64 per template
//! - **Names**: Maximum 64 bytes

#![forbid(unsafe_code)]

mod constants;
mod tokenization;
mod types;
mod validation;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

use tokenization::tokenize_template;

/// Builds an `sms_segments::Template` from a string literal checked at compile time.
///
/// # Syntax
///
/// ```ignore
/// sms_template!("Hi {{name}}, your appointment is on {{date}}")
/// ```
///
/// # Compile errors
///
/// - `{{` without a matching `}}`
/// - empty names, or names with characters other than ASCII letters, digits and `_`
/// - literals over the size limits
///
/// # Examples
///
/// ```ignore
/// use sms_segments::sms_template;
///
/// let template = sms_template!("Hi {{name}}");
/// assert_eq!(template.placeholder_names(), vec!["name"]);
/// ```
#[proc_macro]
pub fn sms_template(input: TokenStream) -> TokenStream {
    let template_lit = parse_macro_input!(input as LitStr);
    let source = template_lit.value();

    let parts = match tokenize_template(&source, &template_lit) {
        Ok(parts) => parts,
        Err(err) => return err.to_compile_error().into(),
    };
    let placeholder_count = parts.iter().filter(|part| part.is_placeholder()).count();

    // The runtime parser must see the same placeholders the macro accepted.
    let expanded: proc_macro2::TokenStream = quote! {{
        let template = ::sms_segments::Template::parse(#template_lit);
        ::core::debug_assert_eq!(template.placeholder_count(), #placeholder_count);
        template
    }};

    TokenStream::from(expanded)
}
