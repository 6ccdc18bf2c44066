/// Whether a line may be broken at `ch` by dropping it.
///
/// Any Unicode whitespace counts, so a no-break space still breaks a line
/// when wrapping.
///
/// ```
/// use base_util::strings::is_whitespace;
///
/// assert!(is_whitespace('\u{00A0}'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('-'));
/// ```
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is the ASCII hyphen-minus.
pub fn is_hyphen(ch: char) -> bool {
    ch == '-'
}

/// Check if a line may be broken at this character (whitespace or hyphen).
///
/// # Examples
///
/// ```
/// use base_util::strings::is_break;
///
/// assert!(is_break(' '));
/// assert!(is_break('-'));
/// assert!(!is_break('_'));
/// ```
pub fn is_break(ch: char) -> bool {
    is_whitespace(ch) || is_hyphen(ch)
}
