//! Splitting command lines into words.
//!
//! Words are separated by whitespace. Single quotes keep their contents
//! verbatim; double quotes allow `\"` and `\\` escapes and keep any other
//! backslash; outside quotes a backslash escapes the next character. `""`
//! yields an empty word.

use crate::error::WordsError;

/// Split `line` into shell-style words.
///
/// # Errors
///
/// Returns [`WordsError`] for unterminated quotes or a trailing backslash.
///
/// # Examples
///
/// ```
/// use menu_cli::words::split_words;
///
/// let words = split_words(r#"add --name 'Tomato Soup' --description "" --price 45"#)
///     .expect("balanced quotes");
/// assert_eq!(words, ["add", "--name", "Tomato Soup", "--description", "", "--price", "45"]);
/// ```
pub fn split_words(line: &str) -> Result<Vec<String>, WordsError> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(open), _) if c == open => quote = None,
            (Some('"'), '\\') => {
                let word = current.get_or_insert_with(String::new);
                match chars.next() {
                    Some(escaped @ ('"' | '\\')) => word.push(escaped),
                    Some(other) => {
                        word.push('\\');
                        word.push(other);
                    }
                    None => return Err(WordsError::UnterminatedQuote { quote: '"' }),
                }
            }
            (None, '\\') => {
                let escaped = chars.next().ok_or(WordsError::TrailingEscape)?;
                current.get_or_insert_with(String::new).push(escaped);
            }
            (Some(_), _) => current.get_or_insert_with(String::new).push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                current.get_or_insert_with(String::new);
            }
            (None, _) if c.is_whitespace() => words.extend(current.take()),
            (None, _) => current.get_or_insert_with(String::new).push(c),
        }
    }

    if let Some(open) = quote {
        return Err(WordsError::UnterminatedQuote { quote: open });
    }
    words.extend(current);
    Ok(words)
}
