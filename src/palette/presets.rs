use crate::color::hex::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: &'static [Color],
}

const fn hex(rgb: u32) -> Color {
    Color::from_u24(rgb)
}

pub static PRESETS: [PresetPalette; 7] = [
    PresetPalette {
        id: "macos-waves",
        name: "macOS Waves",
        colors: &[
            hex(0xe8f1fb),
            hex(0xd35400),
            hex(0xe67e22),
            hex(0xf5b041),
            hex(0x1a5276),
            hex(0x2874a6),
            hex(0x5dade2),
            hex(0x85c1e9),
        ],
    },
    PresetPalette {
        id: "retro-sunset",
        name: "Retro Sunset",
        colors: &[
            hex(0x003340),
            hex(0x004e5a),
            hex(0x00706c),
            hex(0xeddb9d),
            hex(0xf58d49),
            hex(0xf06e3e),
            hex(0xde4c39),
            hex(0xc83641),
        ],
    },
    PresetPalette {
        id: "molten",
        name: "Molten Lava",
        colors: &[
            hex(0x780000),
            hex(0xc1121f),
            hex(0xfdf0d5),
            hex(0x003049),
            hex(0x669bbc),
        ],
    },
    PresetPalette {
        id: "forest",
        name: "Forest",
        colors: &[
            hex(0x606c38),
            hex(0x283618),
            hex(0xfefae0),
            hex(0xdda15e),
            hex(0xbc6c25),
        ],
    },
    PresetPalette {
        id: "ocean",
        name: "Ocean Breeze",
        colors: &[
            hex(0x8ecae6),
            hex(0x219ebc),
            hex(0x023047),
            hex(0xffb703),
            hex(0xfb8500),
        ],
    },
    PresetPalette {
        id: "twilight",
        name: "Deep Twilight",
        colors: &[
            hex(0x03045e),
            hex(0x023e8a),
            hex(0x0077b6),
            hex(0x0096c7),
            hex(0x00b4d8),
            hex(0x48cae4),
            hex(0x90e0ef),
            hex(0xade8f4),
            hex(0xcaf0f8),
        ],
    },
    PresetPalette {
        id: "slate",
        name: "Slate & Teal",
        colors: &[
            hex(0xcad2c5),
            hex(0x84a98c),
            hex(0x52796f),
            hex(0x354f52),
            hex(0x2f3e46),
        ],
    },
];

pub fn preset(id: &str) -> Option<&'static PresetPalette> {
    PRESETS.iter().find(|p| p.id == id)
}
