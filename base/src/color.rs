//! RGBA colors and their textual forms.
//!
//! Accepted strings are:
//!  - HTML hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//!  - CSS functions: `rgb(r, g, b)` and `rgba(r, g, b, a)`
//!  - CSS color names, case-insensitive (`black`, `AliceBlue`, ...)
//!  - single-letter shorthands (`k`, `w`, `r`, `g`, `b`, `c`, `m`, `y`)
//!  - gray levels as a float string between `0` (black) and `1` (white), e.g. `"0.75"`
use std::str::FromStr;
use std::{error, fmt};

mod named;

pub use named::*;

/// An 8-bit per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a gray color from a level between 0.0 (black) and 1.0 (white)
    pub const fn from_gray_f32(level: f32) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        ColorU8::from_rgb(v, v, v)
    }

    /// Build a color from an HTML hex literal.
    /// Panics if the literal is malformed, which makes it usable for constants.
    pub const fn from_html(hex: &[u8]) -> Self {
        match try_from_html(hex) {
            Some(c) => c,
            None => panic!("Invalid hex color"),
        }
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The `#rrggbb` form, or `#rrggbbaa` for translucent colors
    pub fn html(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }
}

impl fmt::Display for ColorU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

const fn try_from_html(hex: &[u8]) -> Option<ColorU8> {
    if hex.is_empty() || hex[0] != b'#' {
        return None;
    }
    // validate all digits first, so that the arithmetic below cannot fail
    let mut i = 1;
    while i < hex.len() {
        if hex_to_u8(hex[i]).is_none() {
            return None;
        }
        i += 1;
    }
    match hex.len() {
        4 => Some(ColorU8::from_rgb(short(hex, 1), short(hex, 2), short(hex, 3))),
        5 => Some(ColorU8::from_rgba(short(hex, 1), short(hex, 2), short(hex, 3), short(hex, 4))),
        7 => Some(ColorU8::from_rgb(long(hex, 1), long(hex, 3), long(hex, 5))),
        9 => Some(ColorU8::from_rgba(long(hex, 1), long(hex, 3), long(hex, 5), long(hex, 7))),
        _ => None,
    }
}

const fn digit(hex: &[u8], i: usize) -> u8 {
    match hex_to_u8(hex[i]) {
        Some(v) => v,
        None => 0,
    }
}

const fn short(hex: &[u8], i: usize) -> u8 {
    digit(hex, i) * 17
}

const fn long(hex: &[u8], i: usize) -> u8 {
    digit(hex, i) << 4 | digit(hex, i + 1)
}

const fn hex_to_u8(hex: u8) -> Option<u8> {
    match hex {
        b'0'..=b'9' => Some(hex - b'0'),
        b'a'..=b'f' => Some(hex - b'a' + 10),
        b'A'..=b'F' => Some(hex - b'A' + 10),
        _ => None,
    }
}

/// Parsing error for [`ColorU8`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidFormat,
    InvalidComponent,
    InvalidAlphaComponent,
    InvalidHex,
    InvalidGrayLevel,
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::InvalidGrayLevel => write!(f, "gray level must be between 0 and 1"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_percent(s: &str) -> Option<Result<f32, ()>> {
    let val = s.strip_suffix('%')?;
    Some(match val.trim().parse::<f32>() {
        Ok(v) if (0.0..=100.0).contains(&v) => Ok(v / 100.0),
        _ => Err(()),
    })
}

fn parse_component_0_255(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(frac) = parse_percent(s) {
        let frac = frac.map_err(|_| ParseError::InvalidComponent)?;
        return Ok((frac * 255.0).round() as u8);
    }
    let v: i32 = s.parse().map_err(|_| ParseError::InvalidComponent)?;
    u8::try_from(v).map_err(|_| ParseError::InvalidComponent)
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(frac) = parse_percent(s) {
        let frac = frac.map_err(|_| ParseError::InvalidAlphaComponent)?;
        return Ok((frac * 255.0).round() as u8);
    }
    // 0.0-1.0 is a fraction, otherwise an integer 0-255
    match s.parse::<f32>() {
        Ok(f) if (0.0..=1.0).contains(&f) => Ok((f * 255.0).round() as u8),
        _ => {
            let v: i32 = s.parse().map_err(|_| ParseError::InvalidAlphaComponent)?;
            u8::try_from(v).map_err(|_| ParseError::InvalidAlphaComponent)
        }
    }
}

fn parse_function<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let head = raw.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    raw[name.len()..].strip_prefix('(')?.strip_suffix(')')
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        if raw.starts_with('#') {
            try_from_html(raw.as_bytes()).ok_or(ParseError::InvalidHex)
        } else if let Some(inner) = parse_function(raw, "rgba") {
            let parts: Vec<&str> = inner.split(',').collect();
            let [r, g, b, a] = parts.as_slice() else {
                return Err(ParseError::InvalidFormat);
            };
            Ok(ColorU8::from_rgba(
                parse_component_0_255(r)?,
                parse_component_0_255(g)?,
                parse_component_0_255(b)?,
                parse_alpha(a)?,
            ))
        } else if let Some(inner) = parse_function(raw, "rgb") {
            let parts: Vec<&str> = inner.split(',').collect();
            let [r, g, b] = parts.as_slice() else {
                return Err(ParseError::InvalidFormat);
            };
            Ok(ColorU8::from_rgb(
                parse_component_0_255(r)?,
                parse_component_0_255(g)?,
                parse_component_0_255(b)?,
            ))
        } else if raw.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            match raw.parse::<f32>() {
                Ok(level) if (0.0..=1.0).contains(&level) => Ok(ColorU8::from_gray_f32(level)),
                Ok(_) => Err(ParseError::InvalidGrayLevel),
                Err(_) => Err(ParseError::InvalidFormat),
            }
        } else {
            named::lookup_name(raw).ok_or(ParseError::UnknownName)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        assert_eq!("#ff0000".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("#f00".parse::<ColorU8>().unwrap(), RED);

        let c = "#ff000080".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_css_rgb_rgba() {
        assert_eq!("rgb(255,0,0)".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("RGB(100%, 0%, 0%)".parse::<ColorU8>().unwrap(), RED);

        let c = "rgba(255, 0, 0, 0.5)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);

        let c = "rgba(255,0,0,50%)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_names_and_shorthands() {
        assert_eq!("black".parse::<ColorU8>().unwrap(), BLACK);
        assert_eq!("AliceBlue".parse::<ColorU8>().unwrap(), ALICEBLUE);
        assert_eq!("k".parse::<ColorU8>().unwrap(), BLACK);
        assert_eq!("w".parse::<ColorU8>().unwrap(), WHITE);
    }

    #[test]
    fn parse_gray_levels() {
        assert_eq!("0".parse::<ColorU8>().unwrap(), BLACK);
        assert_eq!("1.0".parse::<ColorU8>().unwrap(), WHITE);
        assert_eq!("0.5".parse::<ColorU8>().unwrap().rgb(), [128, 128, 128]);
        assert_eq!("1.5".parse::<ColorU8>(), Err(ParseError::InvalidGrayLevel));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
        assert_eq!("#12345".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!("#gg0000".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!(
            "rgb(300,0,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidComponent)
        );
        assert_eq!(
            "rgba(255,0,0,2.0)".parse::<ColorU8>(),
            Err(ParseError::InvalidAlphaComponent)
        );
        assert_eq!("notacolor".parse::<ColorU8>(), Err(ParseError::UnknownName));
    }

    #[test]
    fn html_output() {
        assert_eq!(BLACK.html(), "#000000");
        assert_eq!(RED.with_opacity(0.5).html(), "#ff00007f");
        assert_eq!(format!("{}", WHITE), "#ffffff");
    }
}
