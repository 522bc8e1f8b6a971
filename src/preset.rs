//! Fixed style presets
//!
//! A preset is a table of key/value pairs applied on top of the current registry.
//! Applying a preset is idempotent: the same keys always receive the same values.
use plotive_base::color;

use crate::rc::{self, Error, Key, Params, Value};
use crate::style::font::{MathFontset, SvgFontType};

/// Font size of all text in the publication preset, in points
pub const PUBLICATION_FONT_SIZE: f32 = 7.0;
/// Stroke width of the axes frame and major ticks in the publication preset
pub const PUBLICATION_LINE_WIDTH: f32 = 0.7;
/// Length of the major ticks in the publication preset
pub const PUBLICATION_TICK_SIZE: f32 = 3.0;

/// The publication preset: small Arial text, thin black frame and short ticks.
/// SVG output keeps text editable.
pub fn publication() -> Vec<(Key, Value)> {
    vec![
        (Key::FontFamily, Value::families(["sans-serif"])),
        (Key::FontSansSerif, Value::families(["arial"])),
        (Key::FontSize, PUBLICATION_FONT_SIZE.into()),
        (Key::AxesLabelSize, PUBLICATION_FONT_SIZE.into()),
        (Key::XTickLabelSize, PUBLICATION_FONT_SIZE.into()),
        (Key::YTickLabelSize, PUBLICATION_FONT_SIZE.into()),
        (Key::SvgFontType, SvgFontType::None.into()),
        (Key::MathtextFontset, MathFontset::Custom.into()),
        (Key::MathtextCal, Value::font_spec("arial")),
        (Key::MathtextRm, Value::font_spec("arial")),
        (Key::AxesEdgeColor, color::BLACK.into()),
        (Key::YTickColor, color::BLACK.into()),
        (Key::AxesLineWidth, PUBLICATION_LINE_WIDTH.into()),
        (Key::XTickMajorWidth, PUBLICATION_LINE_WIDTH.into()),
        (Key::YTickMajorWidth, PUBLICATION_LINE_WIDTH.into()),
        (Key::XTickMajorSize, PUBLICATION_TICK_SIZE.into()),
        (Key::YTickMajorSize, PUBLICATION_TICK_SIZE.into()),
    ]
}

/// Apply a preset table to a registry.
///
/// Either all entries are applied, or the registry is unchanged and the first
/// rejection is returned.
pub fn apply(params: &mut Params, preset: &[(Key, Value)]) -> Result<(), Error> {
    let mut updated = params.clone();
    for (key, value) in preset {
        updated.set(*key, value.clone())?;
    }
    *params = updated;
    Ok(())
}

/// Apply the publication preset to a registry
pub fn apply_publication(params: &mut Params) -> Result<(), Error> {
    log::debug!("applying publication style");
    apply(params, &publication())
}

/// Apply the publication preset to the process-wide registry.
///
/// Call this before any figure is rendered: the style is read at render time.
pub fn config_plot_params() -> Result<(), Error> {
    rc::rc_update(apply_publication)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::{rc_defaults, rc_get, rc_params};
    use crate::style::Axis;
    use crate::style::font::FontSize;
    use crate::tests::{Near, assert_near, lock_global};

    #[test]
    fn test_publication_reads_back() {
        let mut params = Params::new();
        apply_publication(&mut params).unwrap();

        for (key, value) in publication() {
            let expected = match (key.kind(), value) {
                (rc::Kind::FontSize, Value::Float(sz)) => Value::FontSize(FontSize::Absolute(sz)),
                (_, value) => value,
            };
            assert_eq!(params.get(key), &expected, "{}", key);
        }
    }

    #[test]
    fn test_publication_idempotent() {
        let mut once = Params::new();
        apply_publication(&mut once).unwrap();

        let mut many = Params::new();
        for _ in 0..10 {
            apply_publication(&mut many).unwrap();
        }
        assert_eq!(once, many);
    }

    #[test]
    fn test_publication_leaves_other_keys() {
        let mut params = Params::new();
        apply_publication(&mut params).unwrap();

        let changed = params.diff(&Params::default());
        assert!(!changed.contains(&Key::XTickColor));
        assert!(!changed.contains(&Key::MathtextIt));
        assert!(params.is_default(Key::XTickMinorSize));
    }

    #[test]
    fn test_rejected_preset_is_atomic() {
        let mut params = Params::new();
        let preset = [
            (Key::FontSize, Value::Float(7.0)),
            (Key::AxesLineWidth, Value::Float(0.0)),
        ];
        assert!(matches!(
            apply(&mut params, &preset),
            Err(Error::NotPositive { key: Key::AxesLineWidth, .. })
        ));
        assert_eq!(params, Params::default());
    }

    #[test]
    fn test_resolved_publication_style() {
        let mut params = Params::new();
        apply_publication(&mut params).unwrap();

        assert_eq!(params.font_families(), vec!["arial"]);
        assert_near!(abs, params.axes_style().label_size, 7.0f32);
        assert_near!(abs, params.axes_style().line_width, 0.7f32);
        let y = params.tick_style(Axis::Y);
        assert_eq!(y.color, color::BLACK);
        assert_near!(abs, y.major.size, 3.0f32);
        assert_near!(abs, y.major.width, 0.7f32);
        assert_eq!(params.math_text().rm.family, "arial");
        assert_eq!(params.svg_text_mode(), SvgFontType::None);
    }

    #[test]
    fn test_config_plot_params() {
        let _guard = lock_global();
        rc_defaults();

        config_plot_params().unwrap();
        assert_eq!(rc_get(Key::FontSize), Value::Float(7.0));
        assert_eq!(rc_get(Key::AxesLineWidth), Value::Float(0.7));
        assert_eq!(rc_get(Key::YTickColor), Value::Color(color::BLACK));
        assert_eq!(rc_get(Key::SvgFontType), Value::SvgFontType(SvgFontType::None));

        let once = rc_params();
        config_plot_params().unwrap();
        config_plot_params().unwrap();
        assert_eq!(rc_params(), once);

        rc_defaults();
    }

    #[test]
    fn test_config_plot_params_from_threads() {
        let _guard = lock_global();
        rc_defaults();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(config_plot_params))
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let mut expected = Params::new();
        apply_publication(&mut expected).unwrap();
        assert_eq!(rc_params(), expected);

        rc_defaults();
    }
}
