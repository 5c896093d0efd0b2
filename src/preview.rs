//! Composer preview: render a template and measure the result.

use serde::Serialize;

use crate::limits::SegmentLimits;
use crate::segments::SegmentInfo;
use crate::template::{Template, VariableSource};

/// A rendered message and how it will be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePreview {
    pub text: String,
    pub info: SegmentInfo,
    /// Placeholders left in `text` because `values` had nothing for them.
    pub unresolved: Vec<String>,
}

/// Render `template` with `values` and measure it with the default capacity table.
pub fn preview_message<V: VariableSource + ?Sized>(template: &str, values: &V) -> MessagePreview {
    SegmentLimits::default().preview(template, values)
}

impl SegmentLimits {
    /// Render `template` with `values` and measure it with this capacity table.
    ///
    /// Unresolved placeholders stay in the text and are counted as written.
    pub fn preview<V: VariableSource + ?Sized>(&self, template: &str, values: &V) -> MessagePreview {
        let template = Template::parse(template);
        let text = template.render(values);
        let unresolved: Vec<String> = template
            .missing_names(values)
            .into_iter()
            .map(str::to_owned)
            .collect();
        if !unresolved.is_empty() {
            log::debug!("preview left placeholders unresolved: {unresolved:?}");
        }

        let info = self.calculate(&text);
        MessagePreview {
            text,
            info,
            unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use std::collections::HashMap;

    #[test]
    fn test_preview_measures_rendered_text() {
        let mut values = HashMap::new();
        values.insert("name", "Dr. Smith");
        let preview = preview_message("Hi {{name}}", &values);
        assert_eq!(preview.text, "Hi Dr. Smith");
        assert_eq!(preview.info.char_count, 12);
        assert_eq!(preview.info.segments, 1);
        assert!(preview.unresolved.is_empty());
    }

    #[test]
    fn test_value_can_switch_encoding() {
        let mut values = HashMap::new();
        values.insert("name", "Zoë 😀");
        let preview = preview_message("Hi {{name}}", &values);
        assert_eq!(preview.info.encoding, Encoding::Extended);
    }

    #[test]
    fn test_value_can_push_into_second_segment() {
        let mut values = HashMap::new();
        values.insert("note", "x".repeat(150));
        let template = "Reminder: {{note}}";
        assert_eq!(preview_message(template, &HashMap::<String, String>::new()).info.segments, 1);
        let preview = preview_message(template, &values);
        assert_eq!(preview.info.char_count, 160);
        assert_eq!(preview.info.segments, 1);

        values.insert("note", "x".repeat(151));
        assert_eq!(preview_message(template, &values).info.segments, 2);
    }

    #[test]
    fn test_unresolved_reported_and_counted() {
        let values: HashMap<String, String> = HashMap::new();
        let preview = preview_message("Due {{amount}} on {{date}}", &values);
        assert_eq!(preview.text, "Due {{amount}} on {{date}}");
        assert_eq!(preview.unresolved, vec!["amount", "date"]);
        assert_eq!(preview.info.char_count, preview.text.len());
    }
}
