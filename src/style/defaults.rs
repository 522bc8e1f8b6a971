use plotive_base::color::{self, ColorU8};

pub const FONT_FAMILY: &[&str] = &["sans-serif"];

pub const FONT_SERIF: &[&str] = &[
    "DejaVu Serif",
    "Bitstream Vera Serif",
    "Computer Modern Roman",
    "New Century Schoolbook",
    "Century Schoolbook L",
    "Utopia",
    "ITC Bookman",
    "Bookman",
    "Nimbus Roman No9 L",
    "Times New Roman",
    "Times",
    "Palatino",
    "Charter",
    "serif",
];

pub const FONT_SANS_SERIF: &[&str] = &[
    "DejaVu Sans",
    "Bitstream Vera Sans",
    "Computer Modern Sans Serif",
    "Lucida Grande",
    "Verdana",
    "Geneva",
    "Lucid",
    "Arial",
    "Helvetica",
    "Avant Garde",
    "sans-serif",
];

pub const FONT_MONOSPACE: &[&str] = &[
    "DejaVu Sans Mono",
    "Bitstream Vera Sans Mono",
    "Computer Modern Typewriter",
    "Andale Mono",
    "Nimbus Mono L",
    "Courier New",
    "Courier",
    "Fixed",
    "Terminal",
    "monospace",
];

pub const FONT_CURSIVE: &[&str] = &[
    "Apple Chancery",
    "Textile",
    "Zapf Chancery",
    "Sand",
    "Script MT",
    "Felipa",
    "Comic Neue",
    "Comic Sans MS",
    "cursive",
];

pub const FONT_FANTASY: &[&str] = &[
    "Chicago",
    "Charcoal",
    "Impact",
    "Western",
    "xkcd script",
    "fantasy",
];

pub const FONT_SIZE: f32 = 10.0;

pub const MATHTEXT_CAL: &str = "cursive";
pub const MATHTEXT_RM: &str = "sans";
pub const MATHTEXT_IT: &str = "sans:italic";
pub const MATHTEXT_BF: &str = "sans:bold";
pub const MATHTEXT_SF: &str = "sans";
pub const MATHTEXT_TT: &str = "monospace";

pub const AXES_EDGE_COLOR: ColorU8 = color::BLACK;
pub const AXES_LINE_WIDTH: f32 = 0.8;

pub const TICK_COLOR: ColorU8 = color::BLACK;
pub const TICK_MAJOR_WIDTH: f32 = 0.8;
pub const TICK_MAJOR_SIZE: f32 = 3.5;
pub const TICK_MINOR_WIDTH: f32 = 0.6;
pub const TICK_MINOR_SIZE: f32 = 2.0;
