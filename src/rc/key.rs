use std::fmt;
use std::str::FromStr;

use super::{Error, Value};
use crate::style::defaults;
use crate::style::font::{FontSize, GenericFamily, MathFontset, SvgFontType};

/// The kind of value a [`Key`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ordered list of font family names
    Families,
    /// Finite number strictly greater than zero
    PositiveFloat,
    /// Absolute or relative font size
    FontSize,
    /// SVG text handling
    SvgFontType,
    /// Math text font set
    MathFontset,
    /// Font specification such as `arial` or `sans:italic`
    FontSpec,
    /// RGBA color
    Color,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Families => "font family list",
            Kind::PositiveFloat => "positive number",
            Kind::FontSize => "font size",
            Kind::SvgFontType => "svg font type",
            Kind::MathFontset => "math fontset",
            Kind::FontSpec => "font specification",
            Kind::Color => "color",
        };
        f.write_str(name)
    }
}

macro_rules! keys {
    ($($(#[$doc:meta])* $variant:ident => $name:literal, $kind:ident;)*) => {
        /// A style option recognized by the registry
        ///
        /// Keys are ordered as declared, which is also the iteration order of [`super::Params`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($(#[$doc])* $variant,)*
        }

        impl Key {
            /// All the keys, in declaration order
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// The dotted option name (e.g. `font.size`)
            pub const fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)*
                }
            }

            /// The kind of value this key holds
            pub const fn kind(self) -> Kind {
                match self {
                    $(Key::$variant => Kind::$kind,)*
                }
            }
        }
    };
}

keys! {
    /// Family list tried in order. Generic classes expand to `font.<class>`.
    FontFamily => "font.family", Families;
    /// Members of the `serif` class
    FontSerif => "font.serif", Families;
    /// Members of the `sans-serif` class
    FontSansSerif => "font.sans-serif", Families;
    /// Members of the `monospace` class
    FontMonospace => "font.monospace", Families;
    /// Members of the `cursive` class
    FontCursive => "font.cursive", Families;
    /// Members of the `fantasy` class
    FontFantasy => "font.fantasy", Families;
    /// Base font size in points
    FontSize => "font.size", PositiveFloat;
    /// Axis label font size
    AxesLabelSize => "axes.labelsize", FontSize;
    /// X tick label font size
    XTickLabelSize => "xtick.labelsize", FontSize;
    /// Y tick label font size
    YTickLabelSize => "ytick.labelsize", FontSize;
    /// Text handling in SVG output
    SvgFontType => "svg.fonttype", SvgFontType;
    /// Math text font set
    MathtextFontset => "mathtext.fontset", MathFontset;
    /// Calligraphic math face, used with the custom fontset
    MathtextCal => "mathtext.cal", FontSpec;
    /// Roman math face, used with the custom fontset
    MathtextRm => "mathtext.rm", FontSpec;
    /// Italic math face, used with the custom fontset
    MathtextIt => "mathtext.it", FontSpec;
    /// Bold math face, used with the custom fontset
    MathtextBf => "mathtext.bf", FontSpec;
    /// Sans-serif math face, used with the custom fontset
    MathtextSf => "mathtext.sf", FontSpec;
    /// Typewriter math face, used with the custom fontset
    MathtextTt => "mathtext.tt", FontSpec;
    /// Color of the axes frame
    AxesEdgeColor => "axes.edgecolor", Color;
    /// Stroke width of the axes frame
    AxesLineWidth => "axes.linewidth", PositiveFloat;
    /// Color of the X ticks and their labels
    XTickColor => "xtick.color", Color;
    /// Color of the Y ticks and their labels
    YTickColor => "ytick.color", Color;
    /// Stroke width of the X major ticks
    XTickMajorWidth => "xtick.major.width", PositiveFloat;
    /// Stroke width of the Y major ticks
    YTickMajorWidth => "ytick.major.width", PositiveFloat;
    /// Length of the X major ticks
    XTickMajorSize => "xtick.major.size", PositiveFloat;
    /// Length of the Y major ticks
    YTickMajorSize => "ytick.major.size", PositiveFloat;
    /// Stroke width of the X minor ticks
    XTickMinorWidth => "xtick.minor.width", PositiveFloat;
    /// Stroke width of the Y minor ticks
    YTickMinorWidth => "ytick.minor.width", PositiveFloat;
    /// Length of the X minor ticks
    XTickMinorSize => "xtick.minor.size", PositiveFloat;
    /// Length of the Y minor ticks
    YTickMinorSize => "ytick.minor.size", PositiveFloat;
}

impl Key {
    /// The key listing the members of a generic font class
    pub const fn font_class(class: GenericFamily) -> Key {
        match class {
            GenericFamily::Serif => Key::FontSerif,
            GenericFamily::SansSerif => Key::FontSansSerif,
            GenericFamily::Monospace => Key::FontMonospace,
            GenericFamily::Cursive => Key::FontCursive,
            GenericFamily::Fantasy => Key::FontFantasy,
        }
    }

    /// The value this key holds until it is set
    pub fn default_value(self) -> Value {
        match self {
            Key::FontFamily => Value::families(defaults::FONT_FAMILY),
            Key::FontSerif => Value::families(defaults::FONT_SERIF),
            Key::FontSansSerif => Value::families(defaults::FONT_SANS_SERIF),
            Key::FontMonospace => Value::families(defaults::FONT_MONOSPACE),
            Key::FontCursive => Value::families(defaults::FONT_CURSIVE),
            Key::FontFantasy => Value::families(defaults::FONT_FANTASY),
            Key::FontSize => Value::Float(defaults::FONT_SIZE),
            Key::AxesLabelSize | Key::XTickLabelSize | Key::YTickLabelSize => {
                Value::FontSize(FontSize::default())
            }
            Key::SvgFontType => Value::SvgFontType(SvgFontType::default()),
            Key::MathtextFontset => Value::MathFontset(MathFontset::default()),
            Key::MathtextCal => Value::font_spec(defaults::MATHTEXT_CAL),
            Key::MathtextRm => Value::font_spec(defaults::MATHTEXT_RM),
            Key::MathtextIt => Value::font_spec(defaults::MATHTEXT_IT),
            Key::MathtextBf => Value::font_spec(defaults::MATHTEXT_BF),
            Key::MathtextSf => Value::font_spec(defaults::MATHTEXT_SF),
            Key::MathtextTt => Value::font_spec(defaults::MATHTEXT_TT),
            Key::AxesEdgeColor => Value::Color(defaults::AXES_EDGE_COLOR),
            Key::AxesLineWidth => Value::Float(defaults::AXES_LINE_WIDTH),
            Key::XTickColor | Key::YTickColor => Value::Color(defaults::TICK_COLOR),
            Key::XTickMajorWidth | Key::YTickMajorWidth => Value::Float(defaults::TICK_MAJOR_WIDTH),
            Key::XTickMajorSize | Key::YTickMajorSize => Value::Float(defaults::TICK_MAJOR_SIZE),
            Key::XTickMinorWidth | Key::YTickMinorWidth => Value::Float(defaults::TICK_MINOR_WIDTH),
            Key::XTickMinorSize | Key::YTickMinorSize => Value::Float(defaults::TICK_MINOR_SIZE),
        }
    }

    /// Check a value against this key and bring it to the key's kind.
    ///
    /// A plain number is accepted for font size keys and taken as points.
    /// Family lists and font specifications must be writable as rc text.
    pub(crate) fn validate(self, value: Value) -> Result<Value, Error> {
        let value = match (self.kind(), value) {
            (Kind::FontSize, Value::Float(sz)) => Value::FontSize(FontSize::Absolute(sz)),
            (kind, value) if value.kind() == kind => value,
            (expected, value) => {
                return Err(Error::KindMismatch {
                    key: self,
                    expected,
                    found: value.kind(),
                });
            }
        };

        let size = match &value {
            Value::Float(v) => Some(*v),
            Value::FontSize(FontSize::Absolute(v)) => Some(*v),
            _ => None,
        };
        if let Some(v) = size {
            if !(v.is_finite() && v > 0.0) {
                return Err(Error::NotPositive {
                    key: self,
                    value: v,
                });
            }
        }
        if let Some(reason) = value.text_problem() {
            return Err(Error::InvalidValue {
                key: self,
                text: value.to_string(),
                reason: reason.to_string(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for key in Key::ALL {
            assert_eq!(key.name().parse::<Key>().unwrap(), *key);
        }
        assert!(matches!(
            "font.weight".parse::<Key>(),
            Err(Error::UnknownKey(name)) if name == "font.weight"
        ));
    }

    #[test]
    fn test_defaults_match_kind() {
        for key in Key::ALL {
            let def = key.default_value();
            assert_eq!(def.kind(), key.kind(), "{}", key);
            assert!(key.validate(def).is_ok(), "{}", key);
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Key::AxesLabelSize.validate(Value::Float(7.0)).unwrap(),
            Value::FontSize(FontSize::Absolute(7.0))
        );
        assert!(matches!(
            Key::FontSize.validate(Value::Float(0.0)),
            Err(Error::NotPositive { key: Key::FontSize, .. })
        ));
        assert!(matches!(
            Key::AxesLineWidth.validate(Value::Float(f32::NAN)),
            Err(Error::NotPositive { .. })
        ));
        assert!(matches!(
            Key::XTickLabelSize.validate(Value::FontSize(FontSize::Absolute(-1.0))),
            Err(Error::NotPositive { .. })
        ));
        assert!(matches!(
            Key::FontFamily.validate(Value::Families(Vec::new())),
            Err(Error::InvalidValue { key: Key::FontFamily, reason, .. }) if reason == "empty font family list"
        ));
        assert!(matches!(
            Key::MathtextCal.validate(Value::font_spec("  ")),
            Err(Error::InvalidValue { key: Key::MathtextCal, .. })
        ));
        assert!(matches!(
            Key::AxesEdgeColor.validate(Value::Float(1.0)),
            Err(Error::KindMismatch {
                expected: Kind::Color,
                found: Kind::PositiveFloat,
                ..
            })
        ));
    }
}
