use std::collections::{BTreeMap, HashMap};

use sms_segments::{
    Encoding, Template, TemplateToken, preview_message, sms_template, substitute_template,
};

fn example_values() -> HashMap<String, String> {
    let mut values = HashMap::new();
    values.insert("patient_name".to_string(), "Maria Lopez".to_string());
    values.insert("appointment_date".to_string(), "12/06".to_string());
    values.insert("appointment_time".to_string(), "10:30".to_string());
    values
}

#[test]
fn test_missing_key_left_verbatim() {
    let mut values = HashMap::new();
    values.insert("name", "Dr. Smith");
    assert_eq!(
        substitute_template("Hi {{name}}, due {{amount}}", &values),
        "Hi Dr. Smith, due {{amount}}"
    );
}

#[test]
fn test_no_placeholders_with_empty_map() {
    let values: HashMap<String, String> = HashMap::new();
    assert_eq!(
        substitute_template("no placeholders here", &values),
        "no placeholders here"
    );
}

#[test]
fn test_unclosed_token_not_partially_substituted() {
    let mut values = HashMap::new();
    values.insert("name", "Ana");
    assert_eq!(substitute_template("Hi {{name", &values), "Hi {{name");
    assert_eq!(substitute_template("Hi {{name}", &values), "Hi {{name}");
    assert_eq!(substitute_template("{{", &values), "{{");
    assert_eq!(substitute_template("}}", &values), "}}");
}

#[test]
fn test_reminder_template() {
    let text = substitute_template(
        "Hello {{patient_name}}, this is a reminder of your appointment on \
         {{appointment_date}} at {{appointment_time}}. Reply C to confirm.",
        &example_values(),
    );
    assert_eq!(
        text,
        "Hello Maria Lopez, this is a reminder of your appointment on 12/06 at 10:30. \
         Reply C to confirm."
    );
}

#[test]
fn test_only_placeholders() {
    let values = example_values();
    assert_eq!(
        substitute_template("{{appointment_date}}{{appointment_time}}", &values),
        "12/0610:30"
    );
}

#[test]
fn test_btreemap_source() {
    let mut values = BTreeMap::new();
    values.insert("clinic".to_string(), "Eastside".to_string());
    assert_eq!(substitute_template("{{clinic}} clinic", &values), "Eastside clinic");
}

#[test]
fn test_template_tokens() {
    let template = Template::parse("Dear {{name}},");
    assert_eq!(
        template.tokens(),
        &[
            TemplateToken::Text("Dear "),
            TemplateToken::Placeholder("name"),
            TemplateToken::Text(","),
        ]
    );
}

#[test]
fn test_macro_matches_runtime_parser() {
    let checked = sms_template!("Hi {{patient_name}}, your results from {{appointment_date}} are in");
    let parsed = Template::parse("Hi {{patient_name}}, your results from {{appointment_date}} are in");
    assert_eq!(checked, parsed);
    assert_eq!(
        checked.placeholder_names(),
        vec!["patient_name", "appointment_date"]
    );
}

#[test]
fn test_macro_template_renders() {
    let template = sms_template!("{{patient_name}}: {{appointment_time}} {{room}}");
    assert_eq!(template.render(&example_values()), "Maria Lopez: 10:30 {{room}}");
    assert_eq!(template.missing_names(&example_values()), vec!["room"]);
}

#[test]
fn test_preview_of_reminder() {
    let preview = preview_message(
        "Hi {{patient_name}}, see you {{appointment_date}} {{appointment_time}} 🙂",
        &example_values(),
    );
    assert_eq!(preview.text, "Hi Maria Lopez, see you 12/06 10:30 🙂");
    assert_eq!(preview.info.encoding, Encoding::Extended);
    assert_eq!(preview.info.char_count, 38);
    assert_eq!(preview.info.segments, 1);
    assert!(preview.unresolved.is_empty());
}

#[test]
fn test_preview_serializes_for_composer() {
    let values: HashMap<String, String> = HashMap::new();
    let json = serde_json::to_value(preview_message("Hi {{name}}", &values)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "text": "Hi {{name}}",
            "info": {
                "charCount": 11,
                "encoding": "Standard",
                "segments": 1,
                "charsPerSegment": 160,
            },
            "unresolved": ["name"],
        })
    );
}
