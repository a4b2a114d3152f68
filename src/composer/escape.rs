use serde::Serialize;

/// HTML text and attribute escaping, installed as the template engine's escape function.
///
/// Unlike the engine default this leaves `/` alone so urls in `href` and `content` stay readable.
pub fn html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes `value` as JSON that is safe to place verbatim inside a `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes, so `</script>` and `<!--` can never appear in
/// the output. U+2028 and U+2029 are escaped too. The result still parses to the same value.
pub fn json_for_script<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let raw = serde_json::to_string(value)?;

    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        // these can only occur inside json strings, where a unicode escape is always valid
        let code = match c {
            '<' => "003c",
            '>' => "003e",
            '&' => "0026",
            '\u{2028}' => "2028",
            '\u{2029}' => "2029",
            _ => {
                out.push(c);
                continue;
            }
        };
        out.push('\\');
        out.push('u');
        out.push_str(code);
    }
    Ok(out)
}
