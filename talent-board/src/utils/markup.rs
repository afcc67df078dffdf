/// Elements whose text content is never shown
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Reduce a possibly-marked-up bio to plain text.
///
/// A `<` opens a tag only when followed by an ASCII letter, `/`, `!` or `?`;
/// any other `<` is ordinary text. Tags are dropped, the contents of
/// `<script>` and `<style>` are dropped with them, a handful of common
/// character entities are decoded and runs of whitespace collapse to a
/// single space. An unterminated tag drops the rest of the input.
pub fn strip_markup(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        text.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if !opens_tag(after) {
            text.push('<');
            rest = after;
            continue;
        }

        let Some(end) = after.find('>') else {
            rest = "";
            break;
        };
        let tag = &after[..end];
        rest = &after[end + 1..];
        // Tags such as <br> or </p> separate words
        text.push(' ');

        if let Some(name) = hidden_element(tag) {
            rest = skip_past_closing_tag(rest, name);
        }
    }
    text.push_str(rest);

    decode_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn opens_tag(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Name of the hidden element `tag` opens, if any
fn hidden_element(tag: &str) -> Option<&'static str> {
    let name: String = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    HIDDEN_ELEMENTS.into_iter().find(|hidden| *hidden == name)
}

/// Everything after `</name ...>`, or nothing when the element is never closed
fn skip_past_closing_tag<'a>(input: &'a str, name: &str) -> &'a str {
    let closing = format!("</{}", name);
    let lower = input.to_ascii_lowercase();

    lower
        .find(&closing)
        .and_then(|start| input[start..].find('>').map(|end| &input[start + end + 1..]))
        .unwrap_or("")
}

fn decode_entities(input: &str) -> String {
    const ENTITIES: [(&str, &str); 6] = [
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&nbsp;", " "),
        // Last so "&amp;lt;" decodes to "&lt;" rather than "<"
        ("&amp;", "&"),
    ];

    ENTITIES
        .iter()
        .fold(input.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}
