fn link_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"(https?://\S+)").unwrap())
}

/// Replace every link-like text (`http://…` or `https://…` up to the next
/// whitespace) with an `<a>` tag opening in a new tab.
///
/// # Examples
///
/// ```
/// use base_util::strings::urlify;
///
/// assert_eq!(
///     urlify("Visit https://www.bvb.de"),
///     r#"Visit <a href="https://www.bvb.de" target="_blank">https://www.bvb.de</a>"#
/// );
/// ```
pub fn urlify(text: &str) -> String {
    link_regex()
        .replace_all(text, r#"<a href="${1}" target="_blank">${1}</a>"#)
        .into_owned()
}
