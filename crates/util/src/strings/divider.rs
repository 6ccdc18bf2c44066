use super::util::{is_break, is_hyphen};
use super::StringError;

/// Options for [`wrap`].
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// Maximum width of each line, in characters. Default is 50.
    pub width: usize,
    /// Inserted at every break. Default is `"\n"`.
    pub replacer: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 50,
            replacer: "\n".to_string(),
        }
    }
}

/// Where a single overlong line gets split.
enum Split {
    /// Break at a hyphen, which stays on the left line.
    Hyphen(usize),
    /// Break at whitespace, which is dropped.
    Whitespace(usize),
    /// No break character in reach, cut after `width + 1` characters.
    Hard,
}

/// Index 0 is never a split point, so a break character that would leave an
/// empty line falls through to a hard break.
fn find_split(line: &[char], width: usize) -> Split {
    match (1..=width).rev().find(|&p| is_break(line[p])) {
        Some(p) if is_hyphen(line[p]) => Split::Hyphen(p),
        Some(p) => Split::Whitespace(p),
        None => Split::Hard,
    }
}

/// Wrap `text` so that every line is roughly `width` characters long.
///
/// Scanning backwards from position `width` down to position 1, the text is
/// broken at the nearest whitespace (dropped) or hyphen (kept at the end of
/// the line) and `replacer` is inserted. When no such character exists the
/// line is cut hard after `width + 1` characters and a hyphen is appended.
/// A break character at the very start of a line is never used, so no line
/// comes out empty. The remainder is processed the same way until it fits.
///
/// Widths are counted in `char`s.
///
/// # Errors
///
/// Returns [`StringError::InvalidWidth`] when `width` is zero.
///
/// # Examples
///
/// ```
/// use base_util::strings::string_divider;
///
/// let wrapped = string_divider("I should be splitted on whitespace", 11, "\n").unwrap();
/// assert_eq!(wrapped, "I should be\nsplitted on\nwhitespace");
///
/// let hard = string_divider("MyLengthIsGreaterAs20", 10, "\n").unwrap();
/// assert_eq!(hard, "MyLengthIsG-\nreaterAs20");
/// ```
pub fn string_divider(text: &str, width: usize, replacer: &str) -> Result<String, StringError> {
    if width == 0 {
        return Err(StringError::InvalidWidth);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;

    while chars.len() - start > width {
        let line = &chars[start..];
        match find_split(line, width) {
            Split::Hyphen(p) => {
                out.extend(&line[..=p]);
                start += p + 1;
            }
            Split::Whitespace(p) => {
                out.extend(&line[..p]);
                start += p + 1;
            }
            Split::Hard => {
                out.extend(&line[..=width]);
                out.push('-');
                start += width + 1;
            }
        }
        out.push_str(replacer);
    }

    out.extend(&chars[start..]);
    Ok(out)
}

/// Wrap text using [`WrapOptions`].
///
/// # Errors
///
/// See [`string_divider`].
pub fn wrap(text: &str, options: &WrapOptions) -> Result<String, StringError> {
    string_divider(text, options.width, &options.replacer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_input_unchanged() {
        assert_eq!(string_divider("MyLengthIs12", 13, "-").unwrap(), "MyLengthIs12");
    }

    #[test]
    fn test_exact_width_unchanged() {
        assert_eq!(string_divider("MyLengthIs12", 12, "-").unwrap(), "MyLengthIs12");
    }

    #[test]
    fn test_hard_break() {
        let out = string_divider("MyLengthIsGreaterAs20", 10, "\n").unwrap();
        assert_eq!(out, "MyLengthIsG-\nreaterAs20");
    }

    #[test]
    fn test_whitespace_break() {
        let out = string_divider("I should be splitted on whitespace", 11, "\n").unwrap();
        assert_eq!(out, "I should be\nsplitted on\nwhitespace");
    }

    #[test]
    fn test_hyphen_break() {
        let out = string_divider("abc-def-ghi-jkl-mno-pqr", 5, "\n").unwrap();
        assert_eq!(out, "abc-\ndef-\nghi-\njkl-\nmno-\npqr");
    }

    #[test]
    fn test_hard_break_leaves_trailing_replacer() {
        // Exactly width + 1 characters without a break: the whole text is the
        // left line and the remainder is empty.
        assert_eq!(string_divider("abcdef", 5, "|").unwrap(), "abcdef-|");
    }

    #[test]
    fn test_leading_break_character_is_not_a_split_point() {
        assert_eq!(string_divider(" abcde", 3, "|").unwrap(), " abc-|de");
        assert_eq!(string_divider("-abcde", 3, "|").unwrap(), "-abc-|de");
    }

    #[test]
    fn test_break_at_second_character() {
        assert_eq!(string_divider("a bcdef", 3, "|").unwrap(), "a|bcde-|f");
    }

    #[test]
    fn test_tab_is_whitespace() {
        assert_eq!(string_divider("ab\tcd", 3, "\n").unwrap(), "ab\ncd");
    }

    #[test]
    fn test_multibyte_characters_counted_as_chars() {
        assert_eq!(string_divider("äöü äöü", 4, "\n").unwrap(), "äöü\näöü");
        assert_eq!(string_divider("日本語です", 3, "\n").unwrap(), "日本語で-\nす");
    }

    #[test]
    fn test_multi_char_replacer() {
        let out = string_divider("one two three", 5, "<br>").unwrap();
        assert_eq!(out, "one<br>two<br>three");
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            string_divider("anything", 0, "\n"),
            Err(StringError::InvalidWidth)
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(string_divider("", 1, "\n").unwrap(), "");
    }

    #[test]
    fn test_wrap_default_options() {
        let opts = WrapOptions::default();
        assert_eq!(opts.width, 50);
        assert_eq!(wrap("hello", &opts).unwrap(), "hello");
    }

    #[test]
    fn test_wrap_custom_options() {
        let opts = WrapOptions {
            width: 5,
            replacer: "\n".to_string(),
        };
        assert_eq!(wrap("hello world", &opts).unwrap(), "hello\nworld");
    }

    proptest! {
        #[test]
        fn prop_fitting_text_is_identity(s in "\\PC{0,40}", extra in 0usize..10) {
            let width = s.chars().count().max(1) + extra;
            prop_assert_eq!(string_divider(&s, width, "\n").unwrap(), s);
        }

        #[test]
        fn prop_is_deterministic(s in "[a-z -]{0,80}", width in 1usize..20) {
            let a = string_divider(&s, width, "\n").unwrap();
            let b = string_divider(&s, width, "\n").unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_only_break_whitespace_is_dropped(s in "[a-z-]{0,80}", width in 1usize..20) {
            // Without whitespace nothing may be lost.
            let out = string_divider(&s, width, "|").unwrap();
            prop_assert!(out.chars().count() >= s.chars().count());
            let kept: String = out.chars().filter(|&c| c != '|').collect();
            let original_letters: String = s.chars().filter(|&c| c != '-').collect();
            let kept_letters: String = kept.chars().filter(|&c| c != '-').collect();
            prop_assert_eq!(kept_letters, original_letters);
        }
    }
}
