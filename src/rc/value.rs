use std::borrow::Cow;
use std::fmt;

use plotive_base::ColorU8;

use super::Kind;
use crate::style::font::{FontSize, MathFontset, RelativeSize, SvgFontType};

/// A value stored in the registry
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number, used for sizes and widths in points
    Float(f32),
    /// An absolute or relative font size
    FontSize(FontSize),
    /// An ordered list of font families
    Families(Vec<String>),
    /// A color
    Color(ColorU8),
    /// SVG text handling
    SvgFontType(SvgFontType),
    /// Math text font set
    MathFontset(MathFontset),
    /// A font specification, e.g. `arial` or `sans:italic`
    FontSpec(String),
}

impl Value {
    /// Build a family list value
    pub fn families<I, S>(families: I) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Value::Families(
            families
                .into_iter()
                .map(|f| f.as_ref().to_string())
                .collect(),
        )
    }

    /// Build a font specification value
    pub fn font_spec<S: Into<String>>(spec: S) -> Value {
        Value::FontSpec(spec.into())
    }

    /// The kind of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Float(..) => Kind::PositiveFloat,
            Value::FontSize(..) => Kind::FontSize,
            Value::Families(..) => Kind::Families,
            Value::Color(..) => Kind::Color,
            Value::SvgFontType(..) => Kind::SvgFontType,
            Value::MathFontset(..) => Kind::MathFontset,
            Value::FontSpec(..) => Kind::FontSpec,
        }
    }

    #[allow(missing_docs)]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn as_font_size(&self) -> Option<FontSize> {
        match self {
            Value::FontSize(sz) => Some(*sz),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn as_families(&self) -> Option<&[String]> {
        match self {
            Value::Families(fams) => Some(fams.as_slice()),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn as_color(&self) -> Option<ColorU8> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn as_svg_font_type(&self) -> Option<SvgFontType> {
        match self {
            Value::SvgFontType(ft) => Some(*ft),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn as_math_fontset(&self) -> Option<MathFontset> {
        match self {
            Value::MathFontset(fs) => Some(*fs),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn as_font_spec(&self) -> Option<&str> {
        match self {
            Value::FontSpec(spec) => Some(spec.as_str()),
            _ => None,
        }
    }

    /// The value as written in rc text.
    /// Colors are quoted, so that their `#` is not read as a comment.
    /// Names are quoted when they hold a comment, separator or quote char.
    pub fn to_rc_text(&self) -> String {
        match self {
            Value::Color(c) => format!("\"{}\"", c.html()),
            Value::Families(fams) => fams
                .iter()
                .map(|f| quote_name(f))
                .collect::<Vec<_>>()
                .join(", "),
            Value::FontSpec(spec) => quote_name(spec).into_owned(),
            other => other.to_string(),
        }
    }

    /// Why this value cannot be stored, if it cannot.
    /// Only family lists and font specifications can be malformed.
    pub(crate) fn text_problem(&self) -> Option<&'static str> {
        match self {
            Value::Families(fams) if fams.is_empty() => Some("empty font family list"),
            Value::Families(fams) if fams.iter().any(|f| f.trim().is_empty()) => {
                Some("blank font family name")
            }
            Value::Families(fams) if fams.iter().any(|f| has_both_quotes(f)) => Some(BOTH_QUOTES),
            Value::FontSpec(spec) if spec.trim().is_empty() => Some("empty font specification"),
            Value::FontSpec(spec) if has_both_quotes(spec) => Some(BOTH_QUOTES),
            _ => None,
        }
    }

    /// Parse a value of the given kind from its rc text form.
    /// On failure, the returned string says why.
    pub(crate) fn parse(kind: Kind, text: &str) -> Result<Value, String> {
        let raw = text.trim();
        let text = unquote(raw);
        let value = match kind {
            Kind::PositiveFloat => text
                .parse::<f32>()
                .map(Value::Float)
                .map_err(|_| "not a number".to_string()),
            Kind::FontSize => text
                .parse::<FontSize>()
                .map(Value::FontSize)
                .map_err(|err| err.to_string()),
            Kind::Families => Ok(Value::Families(
                split_list(raw)
                    .into_iter()
                    .map(|f| unquote(f.trim()))
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            Kind::Color => parse_color(text).map(Value::Color),
            Kind::SvgFontType => text
                .parse::<SvgFontType>()
                .map(Value::SvgFontType)
                .map_err(|err| err.to_string()),
            Kind::MathFontset => text
                .parse::<MathFontset>()
                .map(Value::MathFontset)
                .map_err(|err| err.to_string()),
            Kind::FontSpec => Ok(Value::FontSpec(text.to_string())),
        }?;
        match value.text_problem() {
            Some(reason) => Err(reason.to_string()),
            None => Ok(value),
        }
    }
}

const BOTH_QUOTES: &str = "a name cannot hold both quote characters";

fn has_both_quotes(s: &str) -> bool {
    s.contains('"') && s.contains('\'')
}

fn quote_name(name: &str) -> Cow<'_, str> {
    let plain = name.trim() == name && !name.contains(['#', ',', '"', '\'']);
    if plain {
        Cow::Borrowed(name)
    } else if name.contains('"') {
        Cow::Owned(format!("'{}'", name))
    } else {
        Cow::Owned(format!("\"{}\"", name))
    }
}

/// Split a list on the commas outside quotes.
/// As in [`super::file`], a quote only opens at the start of an item.
fn split_list(raw: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut quote = None;
    let mut item_start = true;
    for (i, c) in raw.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                ',' => {
                    items.push(&raw[start..i]);
                    start = i + 1;
                    item_start = true;
                    continue;
                }
                '"' | '\'' if item_start => quote = Some(c),
                _ => {}
            },
        }
        if !c.is_whitespace() {
            item_start = false;
        }
    }
    items.push(&raw[start..]);
    items
}

fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|s| s.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// rc files commonly write hex colors without the leading '#'
fn parse_color(text: &str) -> Result<ColorU8, String> {
    let bare_hex = matches!(text.len(), 6 | 8) && text.bytes().all(|b| b.is_ascii_hexdigit());
    let parsed = if bare_hex {
        format!("#{}", text).parse::<ColorU8>()
    } else {
        text.parse::<ColorU8>()
    };
    parsed.map_err(|err| err.to_string())
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v as f32)
    }
}

impl From<FontSize> for Value {
    fn from(sz: FontSize) -> Self {
        Value::FontSize(sz)
    }
}

impl From<RelativeSize> for Value {
    fn from(sz: RelativeSize) -> Self {
        Value::FontSize(FontSize::Relative(sz))
    }
}

impl From<ColorU8> for Value {
    fn from(c: ColorU8) -> Self {
        Value::Color(c)
    }
}

impl From<SvgFontType> for Value {
    fn from(ft: SvgFontType) -> Self {
        Value::SvgFontType(ft)
    }
}

impl From<MathFontset> for Value {
    fn from(fs: MathFontset) -> Self {
        Value::MathFontset(fs)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(v) => write!(f, "{}", v),
            Value::FontSize(sz) => fmt::Display::fmt(sz, f),
            Value::Families(fams) => f.write_str(&fams.join(", ")),
            Value::Color(c) => f.write_str(&c.html()),
            Value::SvgFontType(ft) => fmt::Display::fmt(ft, f),
            Value::MathFontset(fs) => fmt::Display::fmt(fs, f),
            Value::FontSpec(spec) => f.write_str(spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use plotive_base::color;

    use super::*;

    #[test]
    fn test_parse_families() {
        assert_eq!(
            Value::parse(Kind::Families, "Arial, 'DejaVu Sans',sans-serif").unwrap(),
            Value::families(["Arial", "DejaVu Sans", "sans-serif"])
        );
        assert_eq!(
            Value::parse(Kind::Families, "'arial', \"helvetica\"").unwrap(),
            Value::families(["arial", "helvetica"])
        );
        assert!(Value::parse(Kind::Families, " , ").is_err());
    }

    #[test]
    fn test_parse_quoted_families() {
        assert_eq!(
            Value::parse(Kind::Families, "\"Arial, Bold\", O'Neil Sans, 'Say \"Hi\"'").unwrap(),
            Value::families(["Arial, Bold", "O'Neil Sans", "Say \"Hi\""])
        );
    }

    #[test]
    fn test_rc_text_quotes_names() {
        assert_eq!(
            Value::families(["Font #1", "Helvetica"]).to_rc_text(),
            "\"Font #1\", Helvetica"
        );
        assert_eq!(Value::families(["O'Neil Sans"]).to_rc_text(), "\"O'Neil Sans\"");
        assert_eq!(Value::families(["Say \"Hi\""]).to_rc_text(), "'Say \"Hi\"'");
        assert_eq!(Value::font_spec("sans:italic").to_rc_text(), "sans:italic");
        assert_eq!(Value::font_spec("Font #1:bold").to_rc_text(), "\"Font #1:bold\"");
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(
            Value::parse(Kind::Color, "black").unwrap(),
            Value::Color(color::BLACK)
        );
        assert_eq!(
            Value::parse(Kind::Color, "ff0000").unwrap(),
            Value::Color(color::RED)
        );
        assert_eq!(
            Value::parse(Kind::Color, "\"#ff0000\"").unwrap(),
            Value::Color(color::RED)
        );
        assert!(Value::parse(Kind::Color, "blackish").is_err());
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(
            Value::parse(Kind::PositiveFloat, "0.7").unwrap(),
            Value::Float(0.7)
        );
        assert_eq!(
            Value::parse(Kind::FontSize, "small").unwrap(),
            Value::FontSize(FontSize::Relative(RelativeSize::Small))
        );
        assert_eq!(
            Value::parse(Kind::SvgFontType, "'none'").unwrap(),
            Value::SvgFontType(SvgFontType::None)
        );
        assert_eq!(
            Value::parse(Kind::FontSpec, "sans:italic").unwrap(),
            Value::font_spec("sans:italic")
        );
        assert!(Value::parse(Kind::PositiveFloat, "thin").is_err());
        assert!(Value::parse(Kind::FontSpec, "''").is_err());
    }

    #[test]
    fn test_display_rc_syntax() {
        assert_eq!(Value::Float(0.7).to_string(), "0.7");
        assert_eq!(Value::families(["arial", "sans-serif"]).to_string(), "arial, sans-serif");
        assert_eq!(Value::Color(color::BLACK).to_string(), "#000000");
        assert_eq!(Value::from(RelativeSize::Medium).to_string(), "medium");
    }
}
