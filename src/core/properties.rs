//! Properties file type.
//!
//! Reads and writes the `key=value` format used by `key.properties`
//! signing files.

use crate::core::fs;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A parsed properties file
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<(String, String)>,
    path: Option<PathBuf>,
}

impl Properties {
    /// Parse a properties file from disk
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut props = Self::parse(&contents);
        props.path = Some(path.to_path_buf());
        Ok(props)
    }

    /// Parse properties from a string
    ///
    /// Comment lines start with `#` or `!`. Keys are separated from values by
    /// `=`, `:` or whitespace. A trailing backslash continues the line.
    /// Lines end at `\n`, `\r` or `\r\n`.
    pub fn parse(contents: &str) -> Self {
        let mut props = Self::default();
        let mut pending: Option<String> = None;

        for raw in lines(contents) {
            let line = raw.trim_start_matches(is_blank);

            let mut logical = match pending.take() {
                Some(prefix) => prefix,
                None => {
                    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                        continue;
                    }
                    String::new()
                }
            };

            if continues(line) {
                logical.push_str(&line[..line.len() - 1]);
                pending = Some(logical);
                continue;
            }

            logical.push_str(line);
            props.push_line(&logical);
        }

        // File ended in the middle of a continuation
        if let Some(logical) = pending {
            props.push_line(&logical);
        }

        props
    }

    /// Create from raw key-value pairs
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut props = Self::default();
        for (key, value) in pairs {
            props.insert(key, value);
        }
        props
    }

    /// Set a value, replacing any existing entry with the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path, if loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the entries to `path` with owner-only permissions
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write_private(path.as_ref(), &self.to_string())
    }

    fn push_line(&mut self, line: &str) {
        let (key, value) = split_entry(line);
        self.insert(unescape(key), unescape(value));
    }
}

impl std::fmt::Display for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}={}", escape_key(key), escape_value(value))?;
        }
        Ok(())
    }
}

/// Split on `\n`, `\r` and `\r\n` alike.
fn lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let end = if rest[i..].starts_with("\r\n") { i + 2 } else { i + 1 };
                rest = &rest[end..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0c')
}

/// A line continues when it ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut value_start = line.len();

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                value_start = i + 1;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                let rest = line[i..].trim_start_matches(is_blank);
                let offset = line.len() - rest.len();
                value_start = if rest.starts_with('=') || rest.starts_with(':') {
                    offset + 1
                } else {
                    offset
                };
                break;
            }
            _ => {}
        }
    }

    let value = line[value_start..].trim_start_matches(is_blank);
    (&line[..key_end], value)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                let decoded = if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(c) => {
                        out.push(c);
                        chars.nth(3);
                    }
                    None => out.push_str("\\u"),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            ' ' | '=' | ':' | '#' | '!' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => push_escaped(&mut escaped, ch),
        }
    }
    escaped
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, ch) in value.chars().enumerate() {
        if i == 0 && ch == ' ' {
            escaped.push_str("\\ ");
        } else {
            push_escaped(&mut escaped, ch);
        }
    }
    escaped
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\x0c' => out.push_str("\\f"),
        c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
        c => out.push(c),
    }
}
