//! String escaping shared by the encoder and decoder.
//!
//! The escape table is deliberately not JSON's: control characters use the
//! C-style short forms and there is no `\u` form.
//!
//! | Character        | Escaped |
//! |------------------|---------|
//! | backslash        | `\\`    |
//! | double quote     | `\"`    |
//! | newline          | `\n`    |
//! | backspace        | `\b`    |
//! | NUL              | `\0`    |
//! | bell             | `\a`    |
//! | form feed        | `\f`    |
//! | carriage return  | `\r`    |
//! | tab              | `\t`    |
//! | vertical tab     | `\v`    |
//!
//! Every other character, including other control characters and non-ASCII
//! text, is written as is.
//!
//! ```rust
//! use serde_dynjson::escape::{escape, unescape};
//!
//! let raw = "line\tone\nsay \"hi\" \\ bye\u{7}";
//! let escaped = escape(raw);
//! assert_eq!(escaped, "line\\tone\\nsay \\\"hi\\\" \\\\ bye\\a");
//! assert_eq!(unescape(&escaped), raw);
//! ```

/// Maps a character to the letter that follows the backslash in its escape.
#[inline]
fn escape_letter(ch: char) -> Option<char> {
    match ch {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\n' => Some('n'),
        '\u{0008}' => Some('b'),
        '\0' => Some('0'),
        '\u{0007}' => Some('a'),
        '\u{000C}' => Some('f'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '\u{000B}' => Some('v'),
        _ => None,
    }
}

#[inline]
fn unescape_letter(letter: char) -> Option<char> {
    match letter {
        '\\' => Some('\\'),
        '"' => Some('"'),
        'n' => Some('\n'),
        'b' => Some('\u{0008}'),
        '0' => Some('\0'),
        'a' => Some('\u{0007}'),
        'f' => Some('\u{000C}'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{000B}'),
        _ => None,
    }
}

/// Returns `true` for the control characters that have a short escape.
///
/// These may appear raw inside string values but never inside object keys,
/// and they terminate bare scalar tokens.
#[inline]
#[must_use]
pub fn is_special_char(ch: char) -> bool {
    matches!(
        ch,
        '\0' | '\u{0007}' | '\u{0008}' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r'
    )
}

/// Appends the escaped form of `s` to `output`.
pub fn escape_into(output: &mut String, s: &str) {
    output.reserve(s.len());
    for ch in s.chars() {
        match escape_letter(ch) {
            Some(letter) => {
                output.push('\\');
                output.push(letter);
            }
            None => output.push(ch),
        }
    }
}

/// Returns the escaped form of `s`.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 8);
    escape_into(&mut output, s);
    output
}

/// Reverses [`escape`].
///
/// Runs as a single left-to-right pass, so the output of one replacement is
/// never rescanned. Unknown sequences such as `\q` are kept verbatim, and a
/// lone trailing backslash is kept as well.
#[must_use]
pub fn unescape(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    let mut output = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some(letter) => match unescape_letter(letter) {
                Some(decoded) => output.push(decoded),
                None => {
                    output.push('\\');
                    output.push(letter);
                }
            },
            None => output.push('\\'),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_table() {
        assert_eq!(escape("\\"), "\\\\");
        assert_eq!(escape("\""), "\\\"");
        assert_eq!(escape("\n"), "\\n");
        assert_eq!(escape("\u{8}"), "\\b");
        assert_eq!(escape("\0"), "\\0");
        assert_eq!(escape("\u{7}"), "\\a");
        assert_eq!(escape("\u{c}"), "\\f");
        assert_eq!(escape("\r"), "\\r");
        assert_eq!(escape("\t"), "\\t");
        assert_eq!(escape("\u{b}"), "\\v");
    }

    #[test]
    fn test_escape_leaves_other_characters() {
        assert_eq!(escape("plain text"), "plain text");
        assert_eq!(escape("héllo wörld ✓"), "héllo wörld ✓");
        assert_eq!(escape("\u{1b}"), "\u{1b}");
        assert_eq!(escape("/"), "/");
    }

    #[test]
    fn test_backslash_is_not_double_escaped() {
        // A literal backslash followed by 'n' must not turn into a newline.
        let raw = "C:\\new";
        let escaped = escape(raw);
        assert_eq!(escaped, "C:\\\\new");
        assert_eq!(unescape(&escaped), raw);
    }

    #[test]
    fn test_unescape_single_pass() {
        // "\\\\n" is an escaped backslash followed by a plain 'n'.
        assert_eq!(unescape("\\\\n"), "\\n");
        assert_eq!(unescape("a\\tb"), "a\tb");
    }

    #[test]
    fn test_unescape_unknown_and_trailing() {
        assert_eq!(unescape("\\q"), "\\q");
        assert_eq!(unescape("end\\"), "end\\");
        assert_eq!(unescape("\\u0041"), "\\u0041");
    }

    #[test]
    fn test_special_chars() {
        for ch in ['\0', '\u{7}', '\u{8}', '\t', '\n', '\u{b}', '\u{c}', '\r'] {
            assert!(is_special_char(ch), "{:?}", ch);
        }
        assert!(!is_special_char(' '));
        assert!(!is_special_char('\u{1b}'));
        assert!(!is_special_char('a'));
    }
}
