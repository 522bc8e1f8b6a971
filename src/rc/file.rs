//! Parsing of rc text
//!
//! rc text is line oriented:
//! ```text
//! # a comment
//! font.family: sans-serif
//! font.sans-serif: Arial, Helvetica   # trailing comment
//! axes.edgecolor: "#333333"
//! ```
//! `#` starts a comment, except within quotes. Unknown keys are skipped with a warning.
use std::fmt;

use super::{Key, Value};

/// Byte span into the source text
/// (first pos, one past last pos)
pub type Span = (usize, usize);

/// An error in rc text
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A non-empty line has no `key: value` separator
    MissingColon(Span),
    /// The value is not valid for its key
    InvalidValue {
        /// Span of the value text
        span: Span,
        /// The registry error
        source: super::Error,
    },
}

impl Error {
    /// The span of the source text in error
    pub fn span(&self) -> Span {
        match self {
            Error::MissingColon(span) => *span,
            Error::InvalidValue { span, .. } => *span,
        }
    }

    /// A hint on how to fix the error
    pub fn help(&self) -> Option<String> {
        match self {
            Error::MissingColon(..) => Some("Entries are written as `key: value`".to_string()),
            Error::InvalidValue {
                source: super::Error::NotPositive { .. },
                ..
            } => Some("Sizes and widths must be greater than zero".to_string()),
            Error::InvalidValue { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingColon(..) => write!(f, "Expected `:` after the key"),
            Error::InvalidValue { source, .. } => fmt::Display::fmt(source, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingColon(..) => None,
            Error::InvalidValue { source, .. } => Some(source),
        }
    }
}

/// A parsed `key: value` line
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The key
    pub key: Key,
    /// The parsed value, not yet checked against the key's constraints
    pub value: Value,
    /// Span of the key text
    pub key_span: Span,
    /// Span of the value text
    pub value_span: Span,
}

/// Parse rc text into entries, in source order.
///
/// A key given several times yields several entries. The last one wins when applied.
pub fn parse(src: &str) -> Result<Vec<Entry>, Error> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut offset = 0;

    for (lineno, line) in src.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += line.len();

        let content = strip_comment(line);
        let Some(content_span) = trimmed_span(content, line_start) else {
            continue;
        };

        let Some(colon) = content.find(':') else {
            return Err(Error::MissingColon(content_span));
        };

        let (key_text, value_text) = (&content[..colon], &content[colon + 1..]);
        let key_span = trimmed_span(key_text, line_start).unwrap_or((line_start, line_start));
        let value_start = line_start + colon + 1;
        let value_span = trimmed_span(value_text, value_start).unwrap_or((value_start, value_start));

        let key = match key_text.parse::<Key>() {
            Ok(key) => key,
            Err(_) => {
                log::warn!(
                    "line {}: unknown style key \"{}\", skipped",
                    lineno + 1,
                    key_text.trim()
                );
                continue;
            }
        };

        let value = Value::parse(key.kind(), value_text).map_err(|reason| Error::InvalidValue {
            span: value_span,
            source: super::Error::InvalidValue {
                key,
                text: value_text.trim().to_string(),
                reason,
            },
        })?;

        if entries.iter().any(|e| e.key == key) {
            log::warn!("line {}: duplicate style key \"{}\"", lineno + 1, key);
        }

        entries.push(Entry {
            key,
            value,
            key_span,
            value_span,
        });
    }

    Ok(entries)
}

/// Remove the comment of a line, if any, and the line terminator.
///
/// A quote only opens at the start of the value or of a list item,
/// so that apostrophes within names (`O'Neil Sans`) are plain text.
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    // last non-blank char
    let mut prev = None;
    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '#' => return &line[..i],
                '"' | '\'' if matches!(prev, None | Some(':' | ',')) => quote = Some(c),
                _ => {}
            },
        }
        if !c.is_whitespace() {
            prev = Some(c);
        }
    }
    line.trim_end_matches(['\n', '\r'])
}

/// Span of `s` without surrounding whitespace, `s` starting at `start`.
/// None if `s` is blank.
fn trimmed_span(s: &str, start: usize) -> Option<Span> {
    let trimmed = s.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let lead = s.len() - trimmed.len();
    let len = trimmed.trim_end().len();
    Some((start + lead, start + lead + len))
}

#[cfg(test)]
mod tests {
    use plotive_base::color;

    use super::*;
    use crate::style::font::SvgFontType;

    #[test]
    fn test_parse_entries() {
        let src = concat!(
            "# publication style\n",
            "\n",
            "font.family: sans-serif\n",
            "font.sans-serif: 'arial', Helvetica  # fallback\n",
            "axes.edgecolor : \"#000000\"\n",
            "svg.fonttype: none\r\n",
            "axes.linewidth: 0.7",
        );
        let entries = parse(src).unwrap();
        let kv: Vec<(Key, Value)> = entries.into_iter().map(|e| (e.key, e.value)).collect();
        assert_eq!(
            kv,
            vec![
                (Key::FontFamily, Value::families(["sans-serif"])),
                (Key::FontSansSerif, Value::families(["arial", "Helvetica"])),
                (Key::AxesEdgeColor, Value::Color(color::BLACK)),
                (Key::SvgFontType, Value::SvgFontType(SvgFontType::None)),
                (Key::AxesLineWidth, Value::Float(0.7)),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let src = "font.size:  7 \n  xtick.major.size :3\n";
        let entries = parse(src).unwrap();
        assert_eq!(entries[0].key_span, (0, 9));
        assert_eq!(entries[0].value_span, (12, 13));
        assert_eq!(&src[entries[1].key_span.0..entries[1].key_span.1], "xtick.major.size");
        assert_eq!(&src[entries[1].value_span.0..entries[1].value_span.1], "3");
    }

    #[test]
    fn test_unknown_key_is_skipped() {
        let entries = parse("lines.linewidth: 2\nfont.size: 7\n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, Key::FontSize);
    }

    #[test]
    fn test_missing_colon() {
        let src = "font.size: 7\n  axes.linewidth 0.7  \n";
        let err = parse(src).unwrap_err();
        assert_eq!(err, Error::MissingColon((15, 33)));
        assert_eq!(&src[15..33], "axes.linewidth 0.7");
        assert!(err.help().is_some());
    }

    #[test]
    fn test_invalid_value() {
        let src = "font.size: 7\nytick.color: blackish\n";
        let err = parse(src).unwrap_err();
        let (start, end) = err.span();
        assert_eq!(&src[start..end], "blackish");
        assert!(matches!(
            err,
            Error::InvalidValue {
                source: crate::rc::Error::InvalidValue { key: Key::YTickColor, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_hash_within_quotes() {
        assert_eq!(strip_comment("a: '#fff' # c\n"), "a: '#fff' ");
        assert_eq!(strip_comment("a: b, \"c #2\" # c\n"), "a: b, \"c #2\" ");
        assert_eq!(strip_comment("a: b\n"), "a: b");
    }

    #[test]
    fn test_apostrophe_in_name() {
        assert_eq!(
            strip_comment("a: O'Neil Sans  # fallback\n"),
            "a: O'Neil Sans  "
        );

        let entries = parse("font.sans-serif: O'Neil Sans, 'Fira Sans'  # fallback\n").unwrap();
        assert_eq!(
            entries[0].value,
            Value::families(["O'Neil Sans", "Fira Sans"])
        );
    }

    #[test]
    fn test_duplicate_keys_kept_in_order() {
        let entries = parse("font.size: 9\naxes.linewidth: 1.5\nfont.size: 7\n").unwrap();
        let sizes: Vec<&Value> = entries
            .iter()
            .filter(|e| e.key == Key::FontSize)
            .map(|e| &e.value)
            .collect();
        assert_eq!(sizes, vec![&Value::Float(9.0), &Value::Float(7.0)]);
    }
}
