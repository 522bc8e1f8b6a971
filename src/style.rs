//! Style views resolved from the registry
//!
//! The registry stores options as they were written. Renderers rather need
//! concrete values: absolute font sizes, expanded family lists, etc.
//! The methods added here to [`Params`] compute them.
pub(crate) mod defaults;
pub mod font;

use plotive_base::ColorU8;

use crate::rc::{Key, Params};
use font::{GenericFamily, MathFontset, SvgFontType};

/// A plot axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis
    X,
    /// The vertical axis
    Y,
}

/// Font families and size for regular text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Concrete font families, in order of preference
    pub families: Vec<String>,
    /// Size in points
    pub size: f32,
}

/// Style of the axes frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesStyle {
    /// Frame color
    pub edge_color: ColorU8,
    /// Frame stroke width
    pub line_width: f32,
    /// Axis label font size in points
    pub label_size: f32,
}

/// A tick mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Length of the mark
    pub size: f32,
    /// Stroke width of the mark
    pub width: f32,
}

/// Style of the ticks of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStyle {
    /// Color of the marks and their labels
    pub color: ColorU8,
    /// Label font size in points
    pub label_size: f32,
    /// Major tick mark
    pub major: TickMark,
    /// Minor tick mark
    pub minor: TickMark,
}

/// A face used in math text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathFace {
    /// Font family, possibly a generic class name
    pub family: String,
    #[allow(missing_docs)]
    pub italic: bool,
    #[allow(missing_docs)]
    pub bold: bool,
    /// Letters and digits come from the Mathematical Sans-Serif block of the font
    pub sans_glyphs: bool,
}

impl MathFace {
    fn new(family: &str, italic: bool, bold: bool) -> Self {
        MathFace {
            family: family.to_string(),
            italic,
            bold,
            sans_glyphs: false,
        }
    }

    /// Parse a font specification such as `arial`, `sans:italic` or `serif:style=italic:weight=bold`
    pub fn from_spec(spec: &str) -> Self {
        let mut parts = spec.split(':').map(str::trim);
        let family = parts.next().unwrap_or_default();
        let family = match GenericFamily::from_family_name(family) {
            Some(generic) => generic.name(),
            None => family,
        };
        let mut face = MathFace::new(family, false, false);
        for prop in parts {
            match prop {
                "italic" | "oblique" | "style=italic" | "style=oblique" => face.italic = true,
                "bold" | "weight=bold" => face.bold = true,
                _ => log::warn!("ignoring font property \"{}\" in \"{}\"", prop, spec),
            }
        }
        face
    }
}

/// The faces used to typeset math text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathText {
    /// The font set the faces come from
    pub fontset: MathFontset,
    /// Roman
    pub rm: MathFace,
    /// Italic
    pub it: MathFace,
    /// Bold
    pub bf: MathFace,
    /// Sans-serif
    pub sf: MathFace,
    /// Typewriter
    pub tt: MathFace,
    /// Calligraphic
    pub cal: MathFace,
}

impl MathText {
    fn builtin(fontset: MathFontset, main: &str, sans: &str, mono: &str, cal: &str) -> Self {
        MathText {
            fontset,
            rm: MathFace::new(main, false, false),
            it: MathFace::new(main, true, false),
            bf: MathFace::new(main, false, true),
            sf: MathFace::new(sans, false, false),
            tt: MathFace::new(mono, false, false),
            cal: MathFace::new(cal, false, false),
        }
    }
}

impl Params {
    /// The concrete font families to try for regular text.
    ///
    /// Generic classes in `font.family` are replaced by the members of their
    /// `font.<class>` list. Duplicates are dropped, keeping the first occurrence.
    pub fn font_families(&self) -> Vec<String> {
        let mut families: Vec<String> = Vec::new();
        let mut push = |fam: &str| {
            if !families.iter().any(|f| f.eq_ignore_ascii_case(fam)) {
                families.push(fam.to_string());
            }
        };
        for fam in self.families(Key::FontFamily) {
            match GenericFamily::from_family_name(fam) {
                Some(generic) => {
                    for member in self.families(Key::font_class(generic)) {
                        push(member);
                    }
                }
                None => push(fam),
            }
        }
        families
    }

    /// The style of regular text
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            families: self.font_families(),
            size: self.float(Key::FontSize),
        }
    }

    /// The style of the axes frame
    pub fn axes_style(&self) -> AxesStyle {
        AxesStyle {
            edge_color: self.color(Key::AxesEdgeColor),
            line_width: self.float(Key::AxesLineWidth),
            label_size: self.resolve_font_size(Key::AxesLabelSize),
        }
    }

    /// The style of the ticks of an axis
    pub fn tick_style(&self, axis: Axis) -> TickStyle {
        let [color, label_size, major_size, major_width, minor_size, minor_width] = match axis {
            Axis::X => [
                Key::XTickColor,
                Key::XTickLabelSize,
                Key::XTickMajorSize,
                Key::XTickMajorWidth,
                Key::XTickMinorSize,
                Key::XTickMinorWidth,
            ],
            Axis::Y => [
                Key::YTickColor,
                Key::YTickLabelSize,
                Key::YTickMajorSize,
                Key::YTickMajorWidth,
                Key::YTickMinorSize,
                Key::YTickMinorWidth,
            ],
        };
        TickStyle {
            color: self.color(color),
            label_size: self.resolve_font_size(label_size),
            major: TickMark {
                size: self.float(major_size),
                width: self.float(major_width),
            },
            minor: TickMark {
                size: self.float(minor_size),
                width: self.float(minor_width),
            },
        }
    }

    /// The faces used for math text
    pub fn math_text(&self) -> MathText {
        let fontset = match self.get(Key::MathtextFontset).as_math_fontset() {
            Some(fs) => fs,
            None => unreachable!("mathtext.fontset holds a math fontset"),
        };
        match fontset {
            MathFontset::DejavuSans => MathText::builtin(
                fontset,
                "DejaVu Sans",
                "DejaVu Sans",
                "DejaVu Sans Mono",
                "DejaVu Sans",
            ),
            MathFontset::DejavuSerif => MathText::builtin(
                fontset,
                "DejaVu Serif",
                "DejaVu Sans",
                "DejaVu Sans Mono",
                "DejaVu Serif",
            ),
            MathFontset::Cm => MathText {
                fontset,
                rm: MathFace::new("cmr10", false, false),
                it: MathFace::new("cmmi10", true, false),
                bf: MathFace::new("cmb10", false, true),
                sf: MathFace::new("cmss10", false, false),
                tt: MathFace::new("cmtt10", false, false),
                cal: MathFace::new("cmsy10", false, false),
            },
            MathFontset::Stix => MathText::builtin(
                fontset,
                "STIXGeneral",
                "STIXGeneral",
                "DejaVu Sans Mono",
                "STIXGeneral",
            ),
            MathFontset::StixSans => {
                let mut math = MathText::builtin(
                    fontset,
                    "STIXGeneral",
                    "STIXGeneral",
                    "DejaVu Sans Mono",
                    "STIXGeneral",
                );
                for face in [&mut math.rm, &mut math.it, &mut math.bf] {
                    face.sans_glyphs = true;
                }
                math
            }
            MathFontset::Custom => MathText {
                fontset,
                rm: MathFace::from_spec(self.font_spec(Key::MathtextRm)),
                it: MathFace::from_spec(self.font_spec(Key::MathtextIt)),
                bf: MathFace::from_spec(self.font_spec(Key::MathtextBf)),
                sf: MathFace::from_spec(self.font_spec(Key::MathtextSf)),
                tt: MathFace::from_spec(self.font_spec(Key::MathtextTt)),
                cal: MathFace::from_spec(self.font_spec(Key::MathtextCal)),
            },
        }
    }

    /// How text is written in SVG output
    pub fn svg_text_mode(&self) -> SvgFontType {
        self.get(Key::SvgFontType)
            .as_svg_font_type()
            .unwrap_or_default()
    }

    fn resolve_font_size(&self, key: Key) -> f32 {
        self.font_size(key).resolve(self.float(Key::FontSize))
    }
}

#[cfg(test)]
mod tests {
    use plotive_base::color;

    use super::*;
    use crate::rc::Value;
    use crate::style::font::RelativeSize;
    use crate::tests::{Near, assert_near};

    #[test]
    fn test_default_families() {
        let families = Params::default().font_families();
        assert_eq!(families.first().map(String::as_str), Some("DejaVu Sans"));
        assert_eq!(families.last().map(String::as_str), Some("sans-serif"));
    }

    #[test]
    fn test_family_expansion() {
        let mut params = Params::new();
        params
            .set(Key::FontFamily, Value::families(["Fira Sans", "monospace", "sans-serif"]))
            .unwrap();
        params
            .set(Key::FontMonospace, Value::families(["Fira Mono", "fira sans"]))
            .unwrap();
        params
            .set(Key::FontSansSerif, Value::families(["arial", "Fira Mono"]))
            .unwrap();

        assert_eq!(params.font_families(), vec!["Fira Sans", "Fira Mono", "arial"]);
    }

    #[test]
    fn test_relative_label_sizes() {
        let mut params = Params::new();
        params.set(Key::FontSize, 12.0).unwrap();
        params.set(Key::AxesLabelSize, RelativeSize::Large).unwrap();
        params.set(Key::YTickLabelSize, 9.0).unwrap();

        assert_near!(abs, params.axes_style().label_size, 14.4f32, 1e-5);
        assert_near!(abs, params.tick_style(Axis::X).label_size, 12.0f32);
        assert_near!(abs, params.tick_style(Axis::Y).label_size, 9.0f32);
    }

    #[test]
    fn test_tick_style_per_axis() {
        let mut params = Params::new();
        params.set(Key::YTickColor, color::RED).unwrap();
        params.set(Key::XTickMajorSize, 3.0).unwrap();

        let x = params.tick_style(Axis::X);
        let y = params.tick_style(Axis::Y);
        assert_eq!(x.color, color::BLACK);
        assert_eq!(y.color, color::RED);
        assert_near!(abs, x.major.size, 3.0f32);
        assert_near!(abs, y.major.size, 3.5f32);
        assert_near!(abs, y.minor.width, 0.6f32);
    }

    #[test]
    fn test_math_face_spec() {
        assert_eq!(MathFace::from_spec("arial"), MathFace::new("arial", false, false));
        assert_eq!(
            MathFace::from_spec("sans:italic"),
            MathFace::new("sans-serif", true, false)
        );
        assert_eq!(
            MathFace::from_spec("serif:style=italic:weight=bold"),
            MathFace::new("serif", true, true)
        );
    }

    #[test]
    fn test_math_text_fontsets() {
        let mut params = Params::new();
        assert_eq!(params.math_text().rm.family, "DejaVu Sans");

        params.set(Key::MathtextFontset, MathFontset::Cm).unwrap();
        assert_eq!(params.math_text().cal.family, "cmsy10");

        params.set(Key::MathtextFontset, MathFontset::Stix).unwrap();
        let stix = params.math_text();
        params.set(Key::MathtextFontset, MathFontset::StixSans).unwrap();
        let stix_sans = params.math_text();
        assert!(!stix.rm.sans_glyphs);
        assert!(stix_sans.rm.sans_glyphs && stix_sans.it.sans_glyphs && stix_sans.bf.sans_glyphs);
        assert_ne!(stix.rm, stix_sans.rm);
        assert_eq!(stix.tt, stix_sans.tt);

        params.set(Key::MathtextFontset, MathFontset::Custom).unwrap();
        params.set(Key::MathtextCal, Value::font_spec("arial")).unwrap();
        let math = params.math_text();
        assert_eq!(math.cal, MathFace::new("arial", false, false));
        assert_eq!(math.it, MathFace::new("sans-serif", true, false));
        assert_eq!(math.bf, MathFace::new("sans-serif", false, true));
    }

    #[test]
    fn test_svg_text_mode() {
        let mut params = Params::new();
        assert_eq!(params.svg_text_mode(), SvgFontType::Path);
        params.set(Key::SvgFontType, SvgFontType::None).unwrap();
        assert_eq!(params.svg_text_mode(), SvgFontType::None);
    }
}
