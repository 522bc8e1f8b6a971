#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # plotive-rc
 * _global style parameters_ for plotive figures
 *
 * The style of figures (fonts, text sizes, frame and tick strokes, colors)
 * is read from a registry of options keyed by dotted names such as `font.size`
 * or `xtick.major.width`. Setting options once, before any figure is rendered,
 * gives all figures the same typography and line styling.
 *
 * ## Get started
 *
 * Apply the publication preset to the process-wide registry:
 *
 * ```
 * use plotive_rc::{preset, rc};
 *
 * preset::config_plot_params().unwrap();
 *
 * assert_eq!(rc::rc_get(rc::Key::FontSize), rc::Value::Float(7.0));
 * ```
 *
 * Or configure a registry explicitly and hand it to the renderer:
 *
 * ```
 * use plotive_rc::rc::{Key, Params};
 * use plotive_rc::style::Axis;
 *
 * let mut params = Params::new();
 * plotive_rc::preset::apply_publication(&mut params).unwrap();
 * params.set_str("xtick.color", "0.3").unwrap();
 *
 * let ticks = params.tick_style(Axis::X);
 * assert_eq!(ticks.major.size, 3.0);
 * assert_eq!(ticks.color.rgb(), [77, 77, 77]);
 * ```
 *
 * Options can also be read from rc text:
 *
 * ```
 * use plotive_rc::rc::Params;
 *
 * let params = Params::from_rc_str(r##"
 *     ## thin frame, editable SVG text
 *     axes.linewidth: 0.5
 *     axes.edgecolor: "#333333"
 *     svg.fonttype: none
 * "##).unwrap();
 * assert_eq!(params.axes_style().line_width, 0.5);
 * ```
 *
 * ## Crate features
 *
 *  - `diag`: enables rendering rc text errors as [miette](https://docs.rs/miette) diagnostics
 *    (See [`rc::Diagnostic`])
 *
 * ## Logging
 *
 * This crate logs through the [`log`](https://docs.rs/log) facade.
 * Unknown and duplicate keys in rc text are reported as warnings.
 */
// Plotive is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

pub mod preset;
pub mod rc;
pub mod style;

pub use preset::config_plot_params;
pub use rc::Params;
pub use style::Axis;

/// Rexports of [`plotive_base::color`]` items
pub mod color {
    pub use plotive_base::color::*;
}
pub use color::ColorU8;

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
    }

    impl Near for f32 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() as f64 <= tol
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!($a.near_abs(&$b, $tol), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}", $a, $b, $tol);
        };
        (abs, $a:expr, $b:expr) => {
            assert_near!(abs, $a, $b, 1e-6);
        };
    }

    pub(crate) use assert_near;

    static GLOBAL_REGISTRY: Mutex<()> = Mutex::new(());

    /// Serializes the tests that touch the process-wide registry
    pub fn lock_global() -> MutexGuard<'static, ()> {
        GLOBAL_REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_near() {
        let a = 1.0f32;
        let b = 1.0f32 + 1e-7;
        assert_near!(abs, a, b);
        assert!(!a.near_abs(&1.1, 1e-3));
    }
}
