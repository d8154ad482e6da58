//! Line-oriented key/value extraction for small descriptor files.
//!
//! The same routine serves `/etc/os-release` (`KEY="value"`), `/proc/meminfo`
//! (`Label:    <int> kB`) and `/proc/cpuinfo` (`key\t: value`). Callers
//! describe the line they want with a [`FieldPattern`]; the first line that
//! matches wins.

use crate::error::{FetchError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lines longer than this are truncated before matching.
pub const MAX_LINE_LEN: usize = 256;

/// What kind of value follows the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Signed decimal integer; trailing content such as `kB` is ignored
    Integer,
    /// Everything up to the end of the line
    Text,
    /// A value optionally wrapped in quotes, ending at the closing quote
    Quoted,
}

/// A literal label anchored at the start of a line plus the capture that follows it.
///
/// Whitespace inside the label is loose: any whitespace run in the label
/// matches zero or more whitespace characters in the line, so
/// `"model name :"` matches `model name\t: Intel(R) ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPattern<'a> {
    label: &'a str,
    capture: Capture,
}

/// A captured field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Integer(_) => None,
        }
    }
}

impl<'a> FieldPattern<'a> {
    pub const fn integer(label: &'a str) -> Self {
        Self {
            label,
            capture: Capture::Integer,
        }
    }

    pub const fn text(label: &'a str) -> Self {
        Self {
            label,
            capture: Capture::Text,
        }
    }

    pub const fn quoted(label: &'a str) -> Self {
        Self {
            label,
            capture: Capture::Quoted,
        }
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn capture(&self) -> Capture {
        self.capture
    }

    /// Try to match a single line (without its trailing newline)
    pub fn match_line(&self, line: &str) -> Option<FieldValue> {
        let rest = strip_label(line, self.label)?.trim_start();

        match self.capture {
            Capture::Integer => parse_leading_int(rest).map(FieldValue::Integer),
            Capture::Text => non_empty(rest.trim_end()).map(FieldValue::Text),
            Capture::Quoted => non_empty(unquote(rest)).map(FieldValue::Text),
        }
    }
}

fn strip_label<'l>(line: &'l str, label: &str) -> Option<&'l str> {
    let mut rest = line;
    let mut chars = label.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            rest = rest.trim_start();
        } else {
            rest = rest.strip_prefix(c)?;
        }
    }

    Some(rest)
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    let sign_len = text.len() - unsigned.len();
    text[..sign_len + digits].parse().ok()
}

fn unquote(text: &str) -> &str {
    match text.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &text[1..];
            match inner.find(quote) {
                Some(end) => &inner[..end],
                None => inner.trim_end(),
            }
        }
        _ => match text.find('"') {
            Some(end) => text[..end].trim_end(),
            None => text.trim_end(),
        },
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Scan `reader` line by line and return the first value matching `pattern`.
///
/// `Ok(None)` means the input was exhausted without a match.
pub fn extract_from_reader<R: BufRead>(
    mut reader: R,
    pattern: &FieldPattern<'_>,
) -> io::Result<Option<FieldValue>> {
    let mut buf = Vec::with_capacity(MAX_LINE_LEN);

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        buf.truncate(MAX_LINE_LEN);

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(value) = pattern.match_line(line) {
            return Ok(Some(value));
        }
    }
}

/// Open `path` and return the first field matching `pattern`.
///
/// A missing or unreadable file yields [`FetchError::SourceUnavailable`];
/// a file without a matching line yields [`FetchError::FieldNotFound`].
pub fn extract_field(path: impl AsRef<Path>, pattern: &FieldPattern<'_>) -> Result<FieldValue> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FetchError::source_unavailable(path, e))?;

    extract_from_reader(BufReader::new(file), pattern)
        .map_err(|e| FetchError::source_unavailable(path, e))?
        .ok_or_else(|| FetchError::field_not_found(pattern.label(), path))
}

pub fn extract_int(path: impl AsRef<Path>, label: &str) -> Result<i64> {
    extract_field(path, &FieldPattern::integer(label))?
        .as_int()
        .ok_or_else(|| FetchError::parse(format!("{} is not an integer", label)))
}

pub fn extract_text(path: impl AsRef<Path>, label: &str) -> Result<String> {
    extract_field(path, &FieldPattern::text(label))?
        .into_text()
        .ok_or_else(|| FetchError::parse(format!("{} is not text", label)))
}

pub fn extract_quoted(path: impl AsRef<Path>, label: &str) -> Result<String> {
    extract_field(path, &FieldPattern::quoted(label))?
        .into_text()
        .ok_or_else(|| FetchError::parse(format!("{} is not text", label)))
}
