//! CSS named colors and single-letter shorthands

use super::ColorU8;

pub const ALICEBLUE: ColorU8 = ColorU8::from_html(b"#f0f8ff");
pub const ANTIQUEWHITE: ColorU8 = ColorU8::from_html(b"#faebd7");
pub const AQUA: ColorU8 = ColorU8::from_html(b"#00ffff");
pub const AQUAMARINE: ColorU8 = ColorU8::from_html(b"#7fffd4");
pub const AZURE: ColorU8 = ColorU8::from_html(b"#f0ffff");
pub const BEIGE: ColorU8 = ColorU8::from_html(b"#f5f5dc");
pub const BISQUE: ColorU8 = ColorU8::from_html(b"#ffe4c4");
pub const BLACK: ColorU8 = ColorU8::from_html(b"#000000");
pub const BLANCHEDALMOND: ColorU8 = ColorU8::from_html(b"#ffebcd");
pub const BLUE: ColorU8 = ColorU8::from_html(b"#0000ff");
pub const BLUEVIOLET: ColorU8 = ColorU8::from_html(b"#8a2be2");
pub const BROWN: ColorU8 = ColorU8::from_html(b"#a52a2a");
pub const BURLYWOOD: ColorU8 = ColorU8::from_html(b"#deb887");
pub const CADETBLUE: ColorU8 = ColorU8::from_html(b"#5f9ea0");
pub const CHARTREUSE: ColorU8 = ColorU8::from_html(b"#7fff00");
pub const CHOCOLATE: ColorU8 = ColorU8::from_html(b"#d2691e");
pub const CORAL: ColorU8 = ColorU8::from_html(b"#ff7f50");
pub const CORNFLOWERBLUE: ColorU8 = ColorU8::from_html(b"#6495ed");
pub const CORNSILK: ColorU8 = ColorU8::from_html(b"#fff8dc");
pub const CRIMSON: ColorU8 = ColorU8::from_html(b"#dc143c");
pub const CYAN: ColorU8 = ColorU8::from_html(b"#00ffff");
pub const DARKBLUE: ColorU8 = ColorU8::from_html(b"#00008b");
pub const DARKCYAN: ColorU8 = ColorU8::from_html(b"#008b8b");
pub const DARKGOLDENROD: ColorU8 = ColorU8::from_html(b"#b8860b");
pub const DARKGRAY: ColorU8 = ColorU8::from_html(b"#a9a9a9");
pub const DARKGREEN: ColorU8 = ColorU8::from_html(b"#006400");
pub const DARKGREY: ColorU8 = ColorU8::from_html(b"#a9a9a9");
pub const DARKKHAKI: ColorU8 = ColorU8::from_html(b"#bdb76b");
pub const DARKMAGENTA: ColorU8 = ColorU8::from_html(b"#8b008b");
pub const DARKOLIVEGREEN: ColorU8 = ColorU8::from_html(b"#556b2f");
pub const DARKORANGE: ColorU8 = ColorU8::from_html(b"#ff8c00");
pub const DARKORCHID: ColorU8 = ColorU8::from_html(b"#9932cc");
pub const DARKRED: ColorU8 = ColorU8::from_html(b"#8b0000");
pub const DARKSALMON: ColorU8 = ColorU8::from_html(b"#e9967a");
pub const DARKSEAGREEN: ColorU8 = ColorU8::from_html(b"#8fbc8f");
pub const DARKSLATEBLUE: ColorU8 = ColorU8::from_html(b"#483d8b");
pub const DARKSLATEGRAY: ColorU8 = ColorU8::from_html(b"#2f4f4f");
pub const DARKSLATEGREY: ColorU8 = ColorU8::from_html(b"#2f4f4f");
pub const DARKTURQUOISE: ColorU8 = ColorU8::from_html(b"#00ced1");
pub const DARKVIOLET: ColorU8 = ColorU8::from_html(b"#9400d3");
pub const DEEPPINK: ColorU8 = ColorU8::from_html(b"#ff1493");
pub const DEEPSKYBLUE: ColorU8 = ColorU8::from_html(b"#00bfff");
pub const DIMGRAY: ColorU8 = ColorU8::from_html(b"#696969");
pub const DIMGREY: ColorU8 = ColorU8::from_html(b"#696969");
pub const DODGERBLUE: ColorU8 = ColorU8::from_html(b"#1e90ff");
pub const FIREBRICK: ColorU8 = ColorU8::from_html(b"#b22222");
pub const FLORALWHITE: ColorU8 = ColorU8::from_html(b"#fffaf0");
pub const FORESTGREEN: ColorU8 = ColorU8::from_html(b"#228b22");
pub const FUCHSIA: ColorU8 = ColorU8::from_html(b"#ff00ff");
pub const GAINSBORO: ColorU8 = ColorU8::from_html(b"#dcdcdc");
pub const GHOSTWHITE: ColorU8 = ColorU8::from_html(b"#f8f8ff");
pub const GOLD: ColorU8 = ColorU8::from_html(b"#ffd700");
pub const GOLDENROD: ColorU8 = ColorU8::from_html(b"#daa520");
pub const GRAY: ColorU8 = ColorU8::from_html(b"#808080");
pub const GREEN: ColorU8 = ColorU8::from_html(b"#008000");
pub const GREENYELLOW: ColorU8 = ColorU8::from_html(b"#adff2f");
pub const GREY: ColorU8 = ColorU8::from_html(b"#808080");
pub const HONEYDEW: ColorU8 = ColorU8::from_html(b"#f0fff0");
pub const HOTPINK: ColorU8 = ColorU8::from_html(b"#ff69b4");
pub const INDIANRED: ColorU8 = ColorU8::from_html(b"#cd5c5c");
pub const INDIGO: ColorU8 = ColorU8::from_html(b"#4b0082");
pub const IVORY: ColorU8 = ColorU8::from_html(b"#fffff0");
pub const KHAKI: ColorU8 = ColorU8::from_html(b"#f0e68c");
pub const LAVENDER: ColorU8 = ColorU8::from_html(b"#e6e6fa");
pub const LAVENDERBLUSH: ColorU8 = ColorU8::from_html(b"#fff0f5");
pub const LAWNGREEN: ColorU8 = ColorU8::from_html(b"#7cfc00");
pub const LEMONCHIFFON: ColorU8 = ColorU8::from_html(b"#fffacd");
pub const LIGHTBLUE: ColorU8 = ColorU8::from_html(b"#add8e6");
pub const LIGHTCORAL: ColorU8 = ColorU8::from_html(b"#f08080");
pub const LIGHTCYAN: ColorU8 = ColorU8::from_html(b"#e0ffff");
pub const LIGHTGOLDENRODYELLOW: ColorU8 = ColorU8::from_html(b"#fafad2");
pub const LIGHTGRAY: ColorU8 = ColorU8::from_html(b"#d3d3d3");
pub const LIGHTGREEN: ColorU8 = ColorU8::from_html(b"#90ee90");
pub const LIGHTGREY: ColorU8 = ColorU8::from_html(b"#d3d3d3");
pub const LIGHTPINK: ColorU8 = ColorU8::from_html(b"#ffb6c1");
pub const LIGHTSALMON: ColorU8 = ColorU8::from_html(b"#ffa07a");
pub const LIGHTSEAGREEN: ColorU8 = ColorU8::from_html(b"#20b2aa");
pub const LIGHTSKYBLUE: ColorU8 = ColorU8::from_html(b"#87cefa");
pub const LIGHTSLATEGRAY: ColorU8 = ColorU8::from_html(b"#778899");
pub const LIGHTSLATEGREY: ColorU8 = ColorU8::from_html(b"#778899");
pub const LIGHTSTEELBLUE: ColorU8 = ColorU8::from_html(b"#b0c4de");
pub const LIGHTYELLOW: ColorU8 = ColorU8::from_html(b"#ffffe0");
pub const LIME: ColorU8 = ColorU8::from_html(b"#00ff00");
pub const LIMEGREEN: ColorU8 = ColorU8::from_html(b"#32cd32");
pub const LINEN: ColorU8 = ColorU8::from_html(b"#faf0e6");
pub const MAGENTA: ColorU8 = ColorU8::from_html(b"#ff00ff");
pub const MAROON: ColorU8 = ColorU8::from_html(b"#800000");
pub const MEDIUMAQUAMARINE: ColorU8 = ColorU8::from_html(b"#66cdaa");
pub const MEDIUMBLUE: ColorU8 = ColorU8::from_html(b"#0000cd");
pub const MEDIUMORCHID: ColorU8 = ColorU8::from_html(b"#ba55d3");
pub const MEDIUMPURPLE: ColorU8 = ColorU8::from_html(b"#9370db");
pub const MEDIUMSEAGREEN: ColorU8 = ColorU8::from_html(b"#3cb371");
pub const MEDIUMSLATEBLUE: ColorU8 = ColorU8::from_html(b"#7b68ee");
pub const MEDIUMSPRINGGREEN: ColorU8 = ColorU8::from_html(b"#00fa9a");
pub const MEDIUMTURQUOISE: ColorU8 = ColorU8::from_html(b"#48d1cc");
pub const MEDIUMVIOLETRED: ColorU8 = ColorU8::from_html(b"#c71585");
pub const MIDNIGHTBLUE: ColorU8 = ColorU8::from_html(b"#191970");
pub const MINTCREAM: ColorU8 = ColorU8::from_html(b"#f5fffa");
pub const MISTYROSE: ColorU8 = ColorU8::from_html(b"#ffe4e1");
pub const MOCCASIN: ColorU8 = ColorU8::from_html(b"#ffe4b5");
pub const NAVAJOWHITE: ColorU8 = ColorU8::from_html(b"#ffdead");
pub const NAVY: ColorU8 = ColorU8::from_html(b"#000080");
pub const OLDLACE: ColorU8 = ColorU8::from_html(b"#fdf5e6");
pub const OLIVE: ColorU8 = ColorU8::from_html(b"#808000");
pub const OLIVEDRAB: ColorU8 = ColorU8::from_html(b"#6b8e23");
pub const ORANGE: ColorU8 = ColorU8::from_html(b"#ffa500");
pub const ORANGERED: ColorU8 = ColorU8::from_html(b"#ff4500");
pub const ORCHID: ColorU8 = ColorU8::from_html(b"#da70d6");
pub const PALEGOLDENROD: ColorU8 = ColorU8::from_html(b"#eee8aa");
pub const PALEGREEN: ColorU8 = ColorU8::from_html(b"#98fb98");
pub const PALETURQUOISE: ColorU8 = ColorU8::from_html(b"#afeeee");
pub const PALEVIOLETRED: ColorU8 = ColorU8::from_html(b"#db7093");
pub const PAPAYAWHIP: ColorU8 = ColorU8::from_html(b"#ffefd5");
pub const PEACHPUFF: ColorU8 = ColorU8::from_html(b"#ffdab9");
pub const PERU: ColorU8 = ColorU8::from_html(b"#cd853f");
pub const PINK: ColorU8 = ColorU8::from_html(b"#ffc0cb");
pub const PLUM: ColorU8 = ColorU8::from_html(b"#dda0dd");
pub const POWDERBLUE: ColorU8 = ColorU8::from_html(b"#b0e0e6");
pub const PURPLE: ColorU8 = ColorU8::from_html(b"#800080");
pub const REBECCAPURPLE: ColorU8 = ColorU8::from_html(b"#663399");
pub const RED: ColorU8 = ColorU8::from_html(b"#ff0000");
pub const ROSYBROWN: ColorU8 = ColorU8::from_html(b"#bc8f8f");
pub const ROYALBLUE: ColorU8 = ColorU8::from_html(b"#4169e1");
pub const SADDLEBROWN: ColorU8 = ColorU8::from_html(b"#8b4513");
pub const SALMON: ColorU8 = ColorU8::from_html(b"#fa8072");
pub const SANDYBROWN: ColorU8 = ColorU8::from_html(b"#f4a460");
pub const SEAGREEN: ColorU8 = ColorU8::from_html(b"#2e8b57");
pub const SEASHELL: ColorU8 = ColorU8::from_html(b"#fff5ee");
pub const SIENNA: ColorU8 = ColorU8::from_html(b"#a0522d");
pub const SILVER: ColorU8 = ColorU8::from_html(b"#c0c0c0");
pub const SKYBLUE: ColorU8 = ColorU8::from_html(b"#87ceeb");
pub const SLATEBLUE: ColorU8 = ColorU8::from_html(b"#6a5acd");
pub const SLATEGRAY: ColorU8 = ColorU8::from_html(b"#708090");
pub const SLATEGREY: ColorU8 = ColorU8::from_html(b"#708090");
pub const SNOW: ColorU8 = ColorU8::from_html(b"#fffafa");
pub const SPRINGGREEN: ColorU8 = ColorU8::from_html(b"#00ff7f");
pub const STEELBLUE: ColorU8 = ColorU8::from_html(b"#4682b4");
pub const TAN: ColorU8 = ColorU8::from_html(b"#d2b48c");
pub const TEAL: ColorU8 = ColorU8::from_html(b"#008080");
pub const THISTLE: ColorU8 = ColorU8::from_html(b"#d8bfd8");
pub const TOMATO: ColorU8 = ColorU8::from_html(b"#ff6347");
pub const TURQUOISE: ColorU8 = ColorU8::from_html(b"#40e0d0");
pub const VIOLET: ColorU8 = ColorU8::from_html(b"#ee82ee");
pub const WHEAT: ColorU8 = ColorU8::from_html(b"#f5deb3");
pub const WHITE: ColorU8 = ColorU8::from_html(b"#ffffff");
pub const WHITESMOKE: ColorU8 = ColorU8::from_html(b"#f5f5f5");
pub const YELLOW: ColorU8 = ColorU8::from_html(b"#ffff00");
pub const YELLOWGREEN: ColorU8 = ColorU8::from_html(b"#9acd32");

const NAMES: &[(&str, ColorU8)] = &[
    ("aliceblue", ALICEBLUE),
    ("antiquewhite", ANTIQUEWHITE),
    ("aqua", AQUA),
    ("aquamarine", AQUAMARINE),
    ("azure", AZURE),
    ("beige", BEIGE),
    ("bisque", BISQUE),
    ("black", BLACK),
    ("blanchedalmond", BLANCHEDALMOND),
    ("blue", BLUE),
    ("blueviolet", BLUEVIOLET),
    ("brown", BROWN),
    ("burlywood", BURLYWOOD),
    ("cadetblue", CADETBLUE),
    ("chartreuse", CHARTREUSE),
    ("chocolate", CHOCOLATE),
    ("coral", CORAL),
    ("cornflowerblue", CORNFLOWERBLUE),
    ("cornsilk", CORNSILK),
    ("crimson", CRIMSON),
    ("cyan", CYAN),
    ("darkblue", DARKBLUE),
    ("darkcyan", DARKCYAN),
    ("darkgoldenrod", DARKGOLDENROD),
    ("darkgray", DARKGRAY),
    ("darkgreen", DARKGREEN),
    ("darkgrey", DARKGREY),
    ("darkkhaki", DARKKHAKI),
    ("darkmagenta", DARKMAGENTA),
    ("darkolivegreen", DARKOLIVEGREEN),
    ("darkorange", DARKORANGE),
    ("darkorchid", DARKORCHID),
    ("darkred", DARKRED),
    ("darksalmon", DARKSALMON),
    ("darkseagreen", DARKSEAGREEN),
    ("darkslateblue", DARKSLATEBLUE),
    ("darkslategray", DARKSLATEGRAY),
    ("darkslategrey", DARKSLATEGREY),
    ("darkturquoise", DARKTURQUOISE),
    ("darkviolet", DARKVIOLET),
    ("deeppink", DEEPPINK),
    ("deepskyblue", DEEPSKYBLUE),
    ("dimgray", DIMGRAY),
    ("dimgrey", DIMGREY),
    ("dodgerblue", DODGERBLUE),
    ("firebrick", FIREBRICK),
    ("floralwhite", FLORALWHITE),
    ("forestgreen", FORESTGREEN),
    ("fuchsia", FUCHSIA),
    ("gainsboro", GAINSBORO),
    ("ghostwhite", GHOSTWHITE),
    ("gold", GOLD),
    ("goldenrod", GOLDENROD),
    ("gray", GRAY),
    ("green", GREEN),
    ("greenyellow", GREENYELLOW),
    ("grey", GREY),
    ("honeydew", HONEYDEW),
    ("hotpink", HOTPINK),
    ("indianred", INDIANRED),
    ("indigo", INDIGO),
    ("ivory", IVORY),
    ("khaki", KHAKI),
    ("lavender", LAVENDER),
    ("lavenderblush", LAVENDERBLUSH),
    ("lawngreen", LAWNGREEN),
    ("lemonchiffon", LEMONCHIFFON),
    ("lightblue", LIGHTBLUE),
    ("lightcoral", LIGHTCORAL),
    ("lightcyan", LIGHTCYAN),
    ("lightgoldenrodyellow", LIGHTGOLDENRODYELLOW),
    ("lightgray", LIGHTGRAY),
    ("lightgreen", LIGHTGREEN),
    ("lightgrey", LIGHTGREY),
    ("lightpink", LIGHTPINK),
    ("lightsalmon", LIGHTSALMON),
    ("lightseagreen", LIGHTSEAGREEN),
    ("lightskyblue", LIGHTSKYBLUE),
    ("lightslategray", LIGHTSLATEGRAY),
    ("lightslategrey", LIGHTSLATEGREY),
    ("lightsteelblue", LIGHTSTEELBLUE),
    ("lightyellow", LIGHTYELLOW),
    ("lime", LIME),
    ("limegreen", LIMEGREEN),
    ("linen", LINEN),
    ("magenta", MAGENTA),
    ("maroon", MAROON),
    ("mediumaquamarine", MEDIUMAQUAMARINE),
    ("mediumblue", MEDIUMBLUE),
    ("mediumorchid", MEDIUMORCHID),
    ("mediumpurple", MEDIUMPURPLE),
    ("mediumseagreen", MEDIUMSEAGREEN),
    ("mediumslateblue", MEDIUMSLATEBLUE),
    ("mediumspringgreen", MEDIUMSPRINGGREEN),
    ("mediumturquoise", MEDIUMTURQUOISE),
    ("mediumvioletred", MEDIUMVIOLETRED),
    ("midnightblue", MIDNIGHTBLUE),
    ("mintcream", MINTCREAM),
    ("mistyrose", MISTYROSE),
    ("moccasin", MOCCASIN),
    ("navajowhite", NAVAJOWHITE),
    ("navy", NAVY),
    ("oldlace", OLDLACE),
    ("olive", OLIVE),
    ("olivedrab", OLIVEDRAB),
    ("orange", ORANGE),
    ("orangered", ORANGERED),
    ("orchid", ORCHID),
    ("palegoldenrod", PALEGOLDENROD),
    ("palegreen", PALEGREEN),
    ("paleturquoise", PALETURQUOISE),
    ("palevioletred", PALEVIOLETRED),
    ("papayawhip", PAPAYAWHIP),
    ("peachpuff", PEACHPUFF),
    ("peru", PERU),
    ("pink", PINK),
    ("plum", PLUM),
    ("powderblue", POWDERBLUE),
    ("purple", PURPLE),
    ("rebeccapurple", REBECCAPURPLE),
    ("red", RED),
    ("rosybrown", ROSYBROWN),
    ("royalblue", ROYALBLUE),
    ("saddlebrown", SADDLEBROWN),
    ("salmon", SALMON),
    ("sandybrown", SANDYBROWN),
    ("seagreen", SEAGREEN),
    ("seashell", SEASHELL),
    ("sienna", SIENNA),
    ("silver", SILVER),
    ("skyblue", SKYBLUE),
    ("slateblue", SLATEBLUE),
    ("slategray", SLATEGRAY),
    ("slategrey", SLATEGREY),
    ("snow", SNOW),
    ("springgreen", SPRINGGREEN),
    ("steelblue", STEELBLUE),
    ("tan", TAN),
    ("teal", TEAL),
    ("thistle", THISTLE),
    ("tomato", TOMATO),
    ("turquoise", TURQUOISE),
    ("violet", VIOLET),
    ("wheat", WHEAT),
    ("white", WHITE),
    ("whitesmoke", WHITESMOKE),
    ("yellow", YELLOW),
    ("yellowgreen", YELLOWGREEN),
];

/// Single-letter shorthands, as accepted by most plotting tools
const SHORTHANDS: &[(char, ColorU8)] = &[
    ('b', ColorU8::from_rgb(0, 0, 255)),
    ('g', ColorU8::from_rgb(0, 128, 0)),
    ('r', ColorU8::from_rgb(255, 0, 0)),
    ('c', ColorU8::from_rgb(0, 191, 191)),
    ('m', ColorU8::from_rgb(191, 0, 191)),
    ('y', ColorU8::from_rgb(191, 191, 0)),
    ('k', BLACK),
    ('w', WHITE),
];

/// Lookup a color by name, ignoring ASCII case.
/// Single-letter shorthands are case-sensitive.
pub(super) fn lookup_name(name: &str) -> Option<ColorU8> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return SHORTHANDS
            .iter()
            .find(|(sh, _)| *sh == c)
            .map(|(_, col)| *col);
    }
    NAMES
        .binary_search_by(|(n, _)| cmp_ignore_ascii_case(n, name))
        .ok()
        .map(|idx| NAMES[idx].1)
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> std::cmp::Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}
