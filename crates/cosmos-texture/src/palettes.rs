//! Static color tables, one list of numbered palettes per body type.
//!
//! Each palette is a list of `(category, candidates)` pairs; the palette id
//! is the 1-based position in the list.

use cosmos_raster::Color;

use crate::body::BodyType;

pub(crate) type Category = (&'static str, &'static [Color]);
pub(crate) type Palette = &'static [Category];

const fn c(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

const fn ca(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::rgba(r, g, b, a)
}

pub(crate) fn surface_palettes(body: BodyType) -> &'static [Palette] {
    match body {
        BodyType::Desert => DESERT,
        BodyType::Ocean => OCEAN,
        BodyType::Furnace => FURNACE,
        BodyType::Jovian => JOVIAN,
        BodyType::Vital => VITAL,
        BodyType::Toxic => TOXIC,
        BodyType::Ice => ICE,
        BodyType::Rocky => ROCKY,
        BodyType::Jungle => JUNGLE,
    }
}

/// Indexed in `BodyType::ALL` order.
const ATMOSPHERE: [&[Color]; 9] = [
    &[ca(255, 200, 150, 60), ca(255, 220, 180, 40)],
    &[ca(150, 200, 255, 70), ca(180, 230, 255, 50)],
    &[ca(255, 100, 0, 80), ca(255, 150, 50, 60)],
    &[ca(255, 220, 180, 70), ca(255, 240, 200, 50)],
    &[ca(150, 200, 255, 60), ca(200, 230, 255, 40)],
    &[ca(150, 255, 100, 70), ca(200, 255, 150, 50)],
    &[ca(200, 240, 255, 50), ca(220, 255, 255, 40)],
    &[ca(200, 200, 200, 40), ca(220, 220, 220, 30)],
    &[ca(150, 255, 150, 60), ca(200, 255, 200, 40)],
];

/// Indexed in `BodyType::ALL` order.
const RINGS: [&[Color]; 9] = [
    &[ca(210, 180, 140, 200), ca(244, 164, 96, 180), ca(222, 184, 135, 160)],
    &[ca(0, 128, 128, 200), ca(0, 139, 139, 180), ca(32, 178, 170, 160)],
    &[ca(139, 0, 0, 200), ca(178, 34, 34, 180), ca(165, 42, 42, 160)],
    &[ca(255, 222, 173, 200), ca(222, 184, 135, 180), ca(210, 180, 140, 160)],
    &[ca(0, 128, 128, 200), ca(46, 139, 87, 180), ca(60, 179, 113, 160)],
    &[ca(85, 107, 47, 200), ca(107, 142, 35, 180), ca(128, 128, 0, 160)],
    &[ca(240, 248, 255, 200), ca(240, 255, 255, 180), ca(230, 230, 250, 160)],
    &[ca(112, 128, 144, 200), ca(119, 136, 153, 180), ca(128, 128, 128, 160)],
    &[ca(34, 139, 34, 200), ca(0, 128, 0, 180), ca(0, 100, 0, 160)],
];

pub(crate) fn atmosphere_colors(body: BodyType) -> &'static [Color] {
    ATMOSPHERE[body as usize]
}

pub(crate) fn ring_colors(body: BodyType) -> &'static [Color] {
    RINGS[body as usize]
}

pub(crate) const CLOUD_COLORS: &[Color] = &[ca(255, 255, 255, 255)];

const DESERT: &[Palette] = &[
    // Sandstone
    &[
        ("base", &[c(210, 180, 140), c(222, 184, 135), c(215, 175, 130)]),
        ("highlight", &[c(255, 222, 173), c(245, 222, 179)]),
        ("shadow", &[c(139, 69, 19), c(160, 82, 45)]),
        ("special", &[c(205, 133, 63), c(188, 143, 95)]),
    ],
    // Red dunes
    &[
        ("base", &[c(205, 120, 70), c(196, 110, 64), c(214, 132, 80)]),
        ("highlight", &[c(240, 170, 110), c(236, 160, 100)]),
        ("shadow", &[c(120, 50, 25), c(110, 44, 20)]),
        ("special", &[c(178, 84, 44), c(165, 76, 40)]),
    ],
    // Pale salt flats
    &[
        ("base", &[c(230, 215, 185), c(225, 210, 178), c(235, 220, 190)]),
        ("highlight", &[c(250, 245, 230), c(248, 240, 222)]),
        ("shadow", &[c(170, 150, 120), c(160, 140, 110)]),
        ("special", &[c(200, 180, 150), c(190, 172, 140)]),
    ],
];

const OCEAN: &[Palette] = &[
    // Tropical
    &[
        ("base", &[c(0, 128, 128), c(0, 139, 139), c(32, 178, 170)]),
        ("highlight", &[c(64, 224, 208), c(127, 255, 212)]),
        ("shadow", &[c(0, 105, 148), c(25, 25, 112)]),
        ("land", &[c(240, 230, 140), c(189, 183, 107)]),
        ("foam", &[c(224, 255, 255), c(240, 255, 255)]),
    ],
    // Deep blue
    &[
        ("base", &[c(0, 70, 140), c(10, 80, 150), c(0, 90, 160)]),
        ("highlight", &[c(70, 150, 220), c(90, 170, 230)]),
        ("shadow", &[c(0, 30, 80), c(5, 20, 70)]),
        ("land", &[c(160, 150, 110), c(140, 130, 95)]),
        ("foam", &[c(210, 235, 255), c(225, 240, 255)]),
    ],
    // Emerald
    &[
        ("base", &[c(20, 120, 100), c(30, 130, 110), c(25, 110, 95)]),
        ("highlight", &[c(90, 200, 170), c(110, 210, 180)]),
        ("shadow", &[c(5, 60, 60), c(10, 50, 55)]),
        ("land", &[c(120, 150, 90), c(110, 140, 80)]),
        ("foam", &[c(220, 250, 240), c(230, 255, 245)]),
    ],
];

const FURNACE: &[Palette] = &[
    // Classic lava
    &[
        ("base", &[c(139, 0, 0), c(178, 34, 34), c(165, 42, 42)]),
        ("highlight", &[c(255, 69, 0), c(255, 140, 0), c(255, 165, 0)]),
        ("shadow", &[c(64, 0, 0), c(80, 10, 10)]),
        ("special", &[c(255, 215, 0), c(255, 255, 0)]),
    ],
    // Obsidian
    &[
        ("base", &[c(60, 30, 30), c(70, 35, 30), c(55, 28, 25)]),
        ("highlight", &[c(255, 90, 20), c(240, 80, 10)]),
        ("shadow", &[c(20, 10, 10), c(28, 14, 12)]),
        ("special", &[c(255, 190, 60), c(255, 200, 80)]),
    ],
    // Sulfur
    &[
        ("base", &[c(150, 70, 20), c(160, 80, 25), c(140, 65, 18)]),
        ("highlight", &[c(255, 200, 40), c(250, 190, 30)]),
        ("shadow", &[c(70, 30, 10), c(60, 25, 8)]),
        ("special", &[c(255, 250, 150), c(255, 245, 120)]),
    ],
];

const JOVIAN: &[Palette] = &[
    // Cream and rust
    &[
        ("base", &[c(255, 222, 173), c(222, 184, 135), c(210, 180, 140)]),
        ("highlight", &[c(255, 228, 181), c(255, 218, 185)]),
        ("shadow", &[c(160, 82, 45), c(139, 69, 19)]),
        ("midtone", &[c(255, 160, 122), c(250, 128, 114)]),
        ("storm", &[c(255, 255, 224), c(255, 250, 205)]),
    ],
    // Ice giant
    &[
        ("base", &[c(135, 190, 220), c(125, 180, 215), c(145, 200, 225)]),
        ("highlight", &[c(200, 235, 250), c(190, 230, 245)]),
        ("shadow", &[c(40, 80, 140), c(35, 70, 130)]),
        ("midtone", &[c(100, 150, 200), c(95, 145, 195)]),
        ("storm", &[c(235, 250, 255), c(225, 245, 255)]),
    ],
    // Ochre
    &[
        ("base", &[c(200, 150, 80), c(190, 140, 75), c(210, 160, 90)]),
        ("highlight", &[c(240, 210, 150), c(235, 200, 140)]),
        ("shadow", &[c(110, 70, 30), c(100, 60, 25)]),
        ("midtone", &[c(170, 110, 60), c(160, 100, 55)]),
        ("storm", &[c(200, 80, 50), c(190, 70, 45)]),
    ],
    // Violet
    &[
        ("base", &[c(160, 130, 190), c(150, 120, 180), c(170, 140, 200)]),
        ("highlight", &[c(220, 200, 240), c(210, 190, 235)]),
        ("shadow", &[c(70, 45, 100), c(60, 40, 90)]),
        ("midtone", &[c(120, 90, 160), c(115, 85, 150)]),
        ("storm", &[c(240, 220, 255), c(235, 215, 250)]),
    ],
    // Verdigris
    &[
        ("base", &[c(140, 180, 150), c(130, 170, 140), c(150, 190, 160)]),
        ("highlight", &[c(210, 235, 215), c(200, 230, 205)]),
        ("shadow", &[c(50, 90, 70), c(45, 80, 60)]),
        ("midtone", &[c(100, 140, 110), c(95, 135, 105)]),
        ("storm", &[c(230, 250, 230), c(225, 245, 220)]),
    ],
];

const VITAL: &[Palette] = &[
    // Earthlike
    &[
        ("water", &[c(0, 60, 140), c(10, 70, 150)]),
        ("shallow", &[c(0, 191, 255), c(30, 144, 255)]),
        ("land", &[c(210, 180, 140), c(222, 184, 135)]),
        ("base", &[c(46, 139, 87), c(60, 179, 113), c(34, 120, 70)]),
        ("highlight", &[c(152, 251, 152), c(144, 238, 144)]),
        ("shadow", &[c(0, 100, 0), c(85, 107, 47)]),
        ("mountain", &[c(120, 110, 100), c(130, 120, 105)]),
        ("ice", &[c(240, 248, 255), c(240, 255, 255)]),
    ],
    // Autumn
    &[
        ("water", &[c(20, 50, 110), c(25, 60, 120)]),
        ("shallow", &[c(60, 130, 190), c(70, 140, 200)]),
        ("land", &[c(200, 170, 120), c(190, 160, 110)]),
        ("base", &[c(160, 110, 50), c(150, 100, 45), c(170, 120, 55)]),
        ("highlight", &[c(220, 170, 90), c(210, 160, 80)]),
        ("shadow", &[c(90, 60, 25), c(80, 55, 20)]),
        ("mountain", &[c(110, 95, 85), c(120, 105, 90)]),
        ("ice", &[c(245, 245, 250), c(235, 240, 250)]),
    ],
    // Savanna
    &[
        ("water", &[c(10, 80, 120), c(15, 90, 130)]),
        ("shallow", &[c(50, 170, 190), c(60, 180, 200)]),
        ("land", &[c(230, 200, 130), c(225, 195, 125)]),
        ("base", &[c(150, 160, 70), c(140, 150, 60), c(160, 170, 80)]),
        ("highlight", &[c(200, 210, 120), c(190, 200, 110)]),
        ("shadow", &[c(70, 80, 30), c(65, 75, 25)]),
        ("mountain", &[c(140, 120, 100), c(150, 130, 105)]),
        ("ice", &[c(250, 250, 255), c(240, 245, 255)]),
    ],
];

const TOXIC: &[Palette] = &[
    // Acid green
    &[
        ("base", &[c(85, 107, 47), c(107, 142, 35), c(128, 128, 0)]),
        ("highlight", &[c(154, 205, 50), c(173, 255, 47)]),
        ("shadow", &[c(30, 45, 15), c(40, 55, 20)]),
        ("vein", &[c(148, 0, 211), c(138, 43, 226)]),
        ("glow", &[c(200, 255, 80), c(220, 255, 100)]),
        ("acid", &[c(127, 255, 0), c(124, 252, 0)]),
    ],
    // Bruise
    &[
        ("base", &[c(80, 60, 90), c(90, 65, 100), c(75, 55, 85)]),
        ("highlight", &[c(150, 110, 170), c(140, 100, 160)]),
        ("shadow", &[c(30, 20, 35), c(35, 25, 40)]),
        ("vein", &[c(0, 200, 120), c(10, 210, 130)]),
        ("glow", &[c(120, 255, 180), c(140, 255, 190)]),
        ("acid", &[c(60, 230, 140), c(70, 240, 150)]),
    ],
    // Rust sludge
    &[
        ("base", &[c(120, 90, 40), c(110, 85, 35), c(130, 95, 45)]),
        ("highlight", &[c(190, 160, 60), c(180, 150, 55)]),
        ("shadow", &[c(50, 35, 15), c(45, 30, 12)]),
        ("vein", &[c(210, 80, 20), c(200, 70, 15)]),
        ("glow", &[c(255, 200, 60), c(250, 190, 50)]),
        ("acid", &[c(230, 220, 40), c(220, 210, 30)]),
    ],
];

const ICE: &[Palette] = &[
    // White glacier
    &[
        ("base", &[c(240, 248, 255), c(240, 255, 255), c(230, 230, 250)]),
        ("highlight", &[c(255, 255, 255), c(245, 255, 250)]),
        ("shadow", &[c(176, 196, 222), c(176, 224, 230)]),
        ("deep", &[c(135, 206, 235), c(135, 206, 250)]),
        ("rock", &[c(130, 140, 150), c(120, 130, 140)]),
        ("water", &[c(40, 90, 140), c(30, 80, 130)]),
    ],
    // Blue ice
    &[
        ("base", &[c(190, 225, 245), c(180, 220, 240), c(200, 230, 250)]),
        ("highlight", &[c(235, 250, 255), c(230, 248, 255)]),
        ("shadow", &[c(110, 160, 200), c(100, 150, 195)]),
        ("deep", &[c(60, 130, 190), c(50, 120, 180)]),
        ("rock", &[c(100, 110, 125), c(95, 105, 120)]),
        ("water", &[c(20, 60, 110), c(15, 55, 100)]),
    ],
    // Methane frost
    &[
        ("base", &[c(225, 235, 225), c(215, 230, 220), c(230, 240, 230)]),
        ("highlight", &[c(250, 255, 250), c(245, 255, 245)]),
        ("shadow", &[c(160, 180, 170), c(150, 175, 165)]),
        ("deep", &[c(120, 170, 160), c(110, 160, 150)]),
        ("rock", &[c(120, 115, 110), c(110, 105, 100)]),
        ("water", &[c(40, 80, 90), c(35, 75, 85)]),
    ],
];

const ROCKY: &[Palette] = &[
    // Slate
    &[
        ("base", &[c(112, 128, 144), c(119, 136, 153), c(128, 128, 128)]),
        ("highlight", &[c(192, 192, 192), c(211, 211, 211)]),
        ("shadow", &[c(47, 79, 79), c(70, 70, 70)]),
        ("crater", &[c(80, 85, 90), c(75, 80, 85)]),
        ("fracture", &[c(40, 40, 45), c(35, 35, 40)]),
        ("peak", &[c(230, 230, 235), c(225, 225, 230)]),
    ],
    // Basalt
    &[
        ("base", &[c(90, 80, 75), c(85, 75, 70), c(95, 85, 80)]),
        ("highlight", &[c(160, 150, 140), c(150, 140, 130)]),
        ("shadow", &[c(35, 30, 28), c(40, 35, 32)]),
        ("crater", &[c(60, 55, 50), c(55, 50, 45)]),
        ("fracture", &[c(25, 20, 18), c(30, 25, 22)]),
        ("peak", &[c(200, 195, 190), c(190, 185, 180)]),
    ],
    // Iron oxide
    &[
        ("base", &[c(150, 95, 70), c(140, 90, 65), c(160, 100, 75)]),
        ("highlight", &[c(210, 160, 130), c(200, 150, 120)]),
        ("shadow", &[c(70, 40, 30), c(65, 35, 25)]),
        ("crater", &[c(110, 70, 50), c(105, 65, 45)]),
        ("fracture", &[c(50, 28, 20), c(45, 25, 18)]),
        ("peak", &[c(235, 210, 195), c(230, 205, 190)]),
    ],
];

const JUNGLE: &[Palette] = &[
    // Rainforest
    &[
        ("base", &[c(34, 139, 34), c(0, 128, 0), c(0, 110, 0)]),
        ("highlight", &[c(144, 238, 144), c(152, 251, 152)]),
        ("shadow", &[c(0, 60, 0), c(20, 70, 20)]),
        ("undergrowth", &[c(85, 107, 47), c(60, 90, 40)]),
        ("vine", &[c(107, 142, 35), c(124, 160, 50)]),
        ("glow", &[c(127, 255, 212), c(64, 224, 208)]),
    ],
    // Teal canopy
    &[
        ("base", &[c(20, 120, 90), c(15, 110, 85), c(25, 130, 95)]),
        ("highlight", &[c(100, 210, 170), c(90, 200, 160)]),
        ("shadow", &[c(5, 50, 40), c(8, 45, 35)]),
        ("undergrowth", &[c(40, 90, 60), c(35, 85, 55)]),
        ("vine", &[c(70, 160, 110), c(65, 150, 100)]),
        ("glow", &[c(180, 255, 240), c(160, 255, 230)]),
    ],
    // Olive swamp
    &[
        ("base", &[c(95, 115, 40), c(90, 110, 35), c(100, 120, 45)]),
        ("highlight", &[c(170, 190, 90), c(160, 180, 80)]),
        ("shadow", &[c(35, 45, 15), c(40, 50, 18)]),
        ("undergrowth", &[c(70, 80, 30), c(65, 75, 28)]),
        ("vine", &[c(130, 150, 60), c(125, 145, 55)]),
        ("glow", &[c(220, 255, 120), c(210, 250, 110)]),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_counts() {
        for body in BodyType::ALL {
            let expected = if body == BodyType::Jovian { 5 } else { 3 };
            assert_eq!(surface_palettes(body).len(), expected, "{body}");
        }
    }

    #[test]
    fn test_every_palette_has_core_categories() {
        for body in BodyType::ALL {
            for (i, palette) in surface_palettes(body).iter().enumerate() {
                for core in ["base", "highlight", "shadow"] {
                    assert!(
                        palette.iter().any(|(name, colors)| *name == core && !colors.is_empty()),
                        "{body} palette {} lacks '{core}'",
                        i + 1
                    );
                }
            }
        }
    }

    #[test]
    fn test_atmosphere_and_ring_alpha_ranges() {
        for body in BodyType::ALL {
            for color in atmosphere_colors(body) {
                assert!((30..=80).contains(&color.alpha()), "{body} atmosphere {color:?}");
            }
            for color in ring_colors(body) {
                assert!((160..=200).contains(&color.alpha()), "{body} ring {color:?}");
            }
        }
    }
}
