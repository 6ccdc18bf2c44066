fn markup_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"(?s)<!--.*?-->|<[A-Za-z/!?][^>]*>").unwrap())
}

fn reference_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z]+);?").unwrap())
}

fn named_reference(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "copy" => '\u{00A9}',
        "reg" => '\u{00AE}',
        "trade" => '\u{2122}',
        "deg" => '\u{00B0}',
        "euro" => '\u{20AC}',
        "shy" => '\u{00AD}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "auml" => 'ä',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "Auml" => 'Ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        _ => return None,
    };
    Some(ch)
}

fn decode_reference(reference: &str) -> Option<char> {
    match reference.strip_prefix('#') {
        Some(num) => {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
        None => named_reference(reference),
    }
}

/// Decode HTML character references. Unknown references are left as is.
pub fn decode_entities(text: &str) -> String {
    reference_regex()
        .replace_all(text, |caps: &regex::Captures| match decode_reference(&caps[1]) {
            Some(ch) => ch.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Return the displayed text of a string containing HTML.
///
/// Tags and comments are removed and character references decoded. Leading
/// whitespace is dropped the way an HTML parser drops it before body content;
/// trailing whitespace is kept.
///
/// # Examples
///
/// ```
/// use base_util::strings::strip_html_tags;
///
/// let html = r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap contributors</a> <br>"#;
/// assert_eq!(strip_html_tags(html), "© OpenStreetMap contributors ");
/// ```
pub fn strip_html_tags(html: &str) -> String {
    let html = html.trim_start_matches([' ', '\t', '\n', '\r', '\u{000C}']);
    let text = markup_regex().replace_all(html, "");
    decode_entities(&text)
}
