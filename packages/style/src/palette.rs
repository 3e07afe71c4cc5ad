//! Light and dark color palettes

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Shade keys shared by every color scale
pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

static LIGHT_SCALES: &[(&str, [&str; 10])] = &[
    ("gray", ["#F7FAFC", "#EDF2F7", "#E2E8F0", "#CBD5E0", "#A0AEC0", "#718096", "#4A5568", "#2D3748", "#1A202C", "#171923"]),
    ("red", ["#FFF5F5", "#FED7D7", "#FEB2B2", "#FC8181", "#F56565", "#E53E3E", "#C53030", "#9B2C2C", "#822727", "#63171B"]),
    ("orange", ["#FFFAF0", "#FEEBC8", "#FBD38D", "#F6AD55", "#ED8936", "#DD6B20", "#C05621", "#9C4221", "#7B341E", "#652B19"]),
    ("yellow", ["#FFFFF0", "#FEFCBF", "#FAF089", "#F6E05E", "#ECC94B", "#D69E2E", "#B7791F", "#975A16", "#744210", "#5F370E"]),
    ("green", ["#F0FFF4", "#C6F6D5", "#9AE6B4", "#68D391", "#48BB78", "#38A169", "#2F855A", "#276749", "#22543D", "#1C4532"]),
    ("teal", ["#E6FFFA", "#B2F5EA", "#81E6D9", "#4FD1C5", "#38B2AC", "#319795", "#2C7A7B", "#285E61", "#234E52", "#1D4044"]),
    ("blue", ["#EBF8FF", "#BEE3F8", "#90CDF4", "#63B3ED", "#4299E1", "#3182CE", "#2B6CB0", "#2C5282", "#2A4365", "#1A365D"]),
    ("cyan", ["#EDFDFD", "#C4F1F9", "#9DECF9", "#76E4F7", "#0BC5EA", "#00B5D8", "#00A3C4", "#0987A0", "#086F83", "#065666"]),
    ("purple", ["#FAF5FF", "#E9D8FD", "#D6BCFA", "#B794F4", "#9F7AEA", "#805AD5", "#6B46C1", "#553C9A", "#44337A", "#322659"]),
    ("pink", ["#FFF5F7", "#FED7E2", "#FBB6CE", "#F687B3", "#ED64A6", "#D53F8C", "#B83280", "#97266D", "#702459", "#521B41"]),
];

/// Palette name -> shade -> color
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    scales: IndexMap<&'static str, BTreeMap<u16, &'static str>>,
}

impl Palette {
    fn from_scales(invert: bool) -> Self {
        let scales = LIGHT_SCALES
            .iter()
            .map(|(name, colors)| {
                let mut scale = BTreeMap::new();
                for (index, shade) in SHADES.iter().enumerate() {
                    let source = if invert { SHADES.len() - 1 - index } else { index };
                    scale.insert(*shade, colors[source]);
                }
                (*name, scale)
            })
            .collect();

        Self { scales }
    }

    pub fn color(&self, name: &str, shade: u16) -> Option<&'static str> {
        self.scales.get(name)?.get(&shade).copied()
    }

    pub fn scale(&self, name: &str) -> Option<&BTreeMap<u16, &'static str>> {
        self.scales.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scales.keys().copied()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

static LIGHT: Lazy<Palette> = Lazy::new(|| Palette::from_scales(false));

// Dark shades mirror the light scale: dark 50 is light 900
static DARK: Lazy<Palette> = Lazy::new(|| Palette::from_scales(true));

pub fn light() -> &'static Palette {
    &LIGHT
}

pub fn dark() -> &'static Palette {
    &DARK
}
