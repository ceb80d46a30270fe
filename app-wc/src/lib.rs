use common::{run, App, Frequencies};

/// Word characters as matched by `\w`: ASCII letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace as matched by `\s`.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

/// Lowercases `text` and drops everything that is neither a word character
/// nor whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || is_space(c))
        .collect()
}

pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|w| w.to_owned())
        .collect()
}

#[derive(Debug, Default)]
pub struct WcApp;

impl App for WcApp {
    fn map(&self, contents: &str) -> Vec<String> {
        tokenize(contents)
    }
}

pub fn word_frequency(text: &str) -> Frequencies {
    run(&WcApp, text)
}
