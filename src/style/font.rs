//! Font related style values
use std::fmt;
use std::str::FromStr;

/// Error returned when a font related token is not recognized
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidToken {
    /// What was being parsed (e.g. "font size")
    pub what: &'static str,
    /// The offending text
    pub text: String,
}

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: \"{}\"", self.what, self.text)
    }
}

impl std::error::Error for InvalidToken {}

/// Generic font family classes.
///
/// When one of these appears in `font.family`, it stands for the list of
/// concrete families registered under the matching `font.<class>` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// Serif fonts
    Serif,
    /// Sans-serif fonts
    SansSerif,
    /// Monospace fonts
    Monospace,
    /// Cursive fonts
    Cursive,
    /// Fantasy fonts
    Fantasy,
}

impl GenericFamily {
    /// All generic classes
    pub const ALL: [GenericFamily; 5] = [
        GenericFamily::Serif,
        GenericFamily::SansSerif,
        GenericFamily::Monospace,
        GenericFamily::Cursive,
        GenericFamily::Fantasy,
    ];

    /// The class name, as used in family lists
    pub const fn name(self) -> &'static str {
        match self {
            GenericFamily::Serif => "serif",
            GenericFamily::SansSerif => "sans-serif",
            GenericFamily::Monospace => "monospace",
            GenericFamily::Cursive => "cursive",
            GenericFamily::Fantasy => "fantasy",
        }
    }

    /// Match a family name against the generic classes, ignoring ASCII case.
    /// `sans` is accepted as an alias of `sans-serif`.
    pub fn from_family_name(name: &str) -> Option<GenericFamily> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("sans") {
            return Some(GenericFamily::SansSerif);
        }
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for GenericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Font sizes relative to `font.size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeSize {
    #[allow(missing_docs)]
    XxSmall,
    #[allow(missing_docs)]
    XSmall,
    #[allow(missing_docs)]
    Small,
    #[allow(missing_docs)]
    Medium,
    #[allow(missing_docs)]
    Large,
    #[allow(missing_docs)]
    XLarge,
    #[allow(missing_docs)]
    XxLarge,
    /// One step larger than the base size
    Larger,
    /// One step smaller than the base size
    Smaller,
}

impl RelativeSize {
    const TOKENS: [(&'static str, RelativeSize); 9] = [
        ("xx-small", RelativeSize::XxSmall),
        ("x-small", RelativeSize::XSmall),
        ("small", RelativeSize::Small),
        ("medium", RelativeSize::Medium),
        ("large", RelativeSize::Large),
        ("x-large", RelativeSize::XLarge),
        ("xx-large", RelativeSize::XxLarge),
        ("larger", RelativeSize::Larger),
        ("smaller", RelativeSize::Smaller),
    ];

    /// The factor applied to the base font size
    pub const fn scale(self) -> f32 {
        match self {
            RelativeSize::XxSmall => 0.579,
            RelativeSize::XSmall => 0.694,
            RelativeSize::Small | RelativeSize::Smaller => 0.833,
            RelativeSize::Medium => 1.0,
            RelativeSize::Large | RelativeSize::Larger => 1.2,
            RelativeSize::XLarge => 1.44,
            RelativeSize::XxLarge => 1.728,
        }
    }

    /// The token, as written in rc text
    pub fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(_, s)| *s == self)
            .map(|(t, _)| *t)
            .unwrap_or("medium")
    }
}

impl FromStr for RelativeSize {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::TOKENS
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(s))
            .map(|(_, size)| *size)
            .ok_or_else(|| InvalidToken {
                what: "relative font size",
                text: s.to_string(),
            })
    }
}

/// A font size, either in points or relative to the base `font.size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Size in points
    Absolute(f32),
    /// Size relative to `font.size`
    Relative(RelativeSize),
}

impl FontSize {
    /// Resolve to an absolute size in points, given the base size
    pub fn resolve(self, base: f32) -> f32 {
        match self {
            FontSize::Absolute(sz) => sz,
            FontSize::Relative(rel) => base * rel.scale(),
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Relative(RelativeSize::Medium)
    }
}

impl From<f32> for FontSize {
    fn from(size: f32) -> Self {
        FontSize::Absolute(size)
    }
}

impl From<RelativeSize> for FontSize {
    fn from(size: RelativeSize) -> Self {
        FontSize::Relative(size)
    }
}

impl FromStr for FontSize {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f32>() {
            Ok(sz) => Ok(FontSize::Absolute(sz)),
            Err(_) => s.parse::<RelativeSize>().map(FontSize::Relative).map_err(|_| InvalidToken {
                what: "font size",
                text: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Absolute(sz) => write!(f, "{}", sz),
            FontSize::Relative(rel) => f.write_str(rel.token()),
        }
    }
}

/// How text is written in SVG output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SvgFontType {
    /// Glyphs are converted to paths. The file renders identically everywhere.
    #[default]
    Path,
    /// Text stays as `<text>` elements and remains editable.
    /// The viewer must have the fonts installed.
    None,
}

impl FromStr for SvgFontType {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "path" => Ok(SvgFontType::Path),
            "none" => Ok(SvgFontType::None),
            other => Err(InvalidToken {
                what: "svg font type",
                text: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SvgFontType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgFontType::Path => f.write_str("path"),
            SvgFontType::None => f.write_str("none"),
        }
    }
}

/// Font set used to typeset math text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MathFontset {
    /// DejaVu Sans
    #[default]
    DejavuSans,
    /// DejaVu Serif
    DejavuSerif,
    /// Computer Modern, the TeX look
    Cm,
    /// STIX, a Times-like look
    Stix,
    /// STIX sans-serif
    StixSans,
    /// Faces taken from the `mathtext.*` keys
    Custom,
}

impl MathFontset {
    const TOKENS: [(&'static str, MathFontset); 6] = [
        ("dejavusans", MathFontset::DejavuSans),
        ("dejavuserif", MathFontset::DejavuSerif),
        ("cm", MathFontset::Cm),
        ("stix", MathFontset::Stix),
        ("stixsans", MathFontset::StixSans),
        ("custom", MathFontset::Custom),
    ];
}

impl FromStr for MathFontset {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::TOKENS
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(s))
            .map(|(_, fs)| *fs)
            .ok_or_else(|| InvalidToken {
                what: "math fontset",
                text: s.to_string(),
            })
    }
}

impl fmt::Display for MathFontset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = Self::TOKENS
            .iter()
            .find(|(_, fs)| fs == self)
            .map(|(t, _)| *t)
            .unwrap_or("custom");
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn test_generic_family_names() {
        assert_eq!(
            GenericFamily::from_family_name("sans-serif"),
            Some(GenericFamily::SansSerif)
        );
        assert_eq!(
            GenericFamily::from_family_name("Sans"),
            Some(GenericFamily::SansSerif)
        );
        assert_eq!(
            GenericFamily::from_family_name("monospace"),
            Some(GenericFamily::Monospace)
        );
        assert_eq!(GenericFamily::from_family_name("arial"), None);
    }

    #[test]
    fn test_font_size_parse() {
        assert_eq!("7".parse::<FontSize>().unwrap(), FontSize::Absolute(7.0));
        assert_eq!(
            " x-large ".parse::<FontSize>().unwrap(),
            FontSize::Relative(RelativeSize::XLarge)
        );
        assert!("huge".parse::<FontSize>().is_err());
    }

    #[test]
    fn test_font_size_resolve() {
        assert_near!(abs, FontSize::Absolute(7.0).resolve(10.0), 7.0f32);
        assert_near!(abs, FontSize::default().resolve(10.0), 10.0f32);
        assert_near!(
            abs,
            FontSize::Relative(RelativeSize::Large).resolve(10.0),
            12.0f32,
            1e-5
        );
    }

    #[test]
    fn test_tokens_display() {
        assert_eq!(FontSize::Relative(RelativeSize::XxSmall).to_string(), "xx-small");
        assert_eq!(FontSize::Absolute(3.5).to_string(), "3.5");
        assert_eq!(SvgFontType::None.to_string(), "none");
        assert_eq!(MathFontset::StixSans.to_string(), "stixsans");
        assert_eq!("custom".parse::<MathFontset>().unwrap(), MathFontset::Custom);
        assert!("embedded".parse::<SvgFontType>().is_err());
    }
}
