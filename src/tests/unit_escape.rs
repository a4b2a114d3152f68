use crate::composer::escape::{html, json_for_script};
use serde_json::json;

#[test]
fn test_html_escapes_markup_and_quotes() {
    assert_eq!(
        html(r#"<a href="x">Tom's & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom&#x27;s &amp; Jerry&#x27;s&lt;/a&gt;"
    );
    // slashes in urls are left readable
    assert_eq!(html("https://iloveplantcare.com/"), "https://iloveplantcare.com/");
    assert_eq!(html("🌱 plain text"), "🌱 plain text");
}

// a closing script tag inside a string must not survive serialization
#[test]
fn test_json_for_script_hides_closing_tags() {
    let value = json!({ "name": "</script><script>alert(1)</script>", "note": "a & b <!-- c -->" });
    let text = json_for_script(&value).unwrap();

    assert!(!text.contains('<'));
    assert!(!text.contains('>'));
    assert!(!text.contains('&'));
    assert!(text.contains(&format!("{}u003c/script{}u003e", '\\', '\\')));

    // and it still reads back as the same document
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn test_json_for_script_escapes_line_separators() {
    let value = json!({ "text": "one\u{2028}two\u{2029}three" });
    let text = json_for_script(&value).unwrap();

    assert!(!text.contains('\u{2028}'));
    assert!(!text.contains('\u{2029}'));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn test_json_for_script_leaves_plain_values_alone() {
    let value = json!({ "q": "?q={search_term_string}", "quote": "say \"hi\"" });
    assert_eq!(
        json_for_script(&value).unwrap(),
        serde_json::to_string(&value).unwrap()
    );
}
