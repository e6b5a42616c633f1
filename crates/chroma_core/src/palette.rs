//! The fixed logo-colour palette and its risk mapping.
//!
//! The portfolio only ever uses these ten colours, in this declared
//! order. Each entry carries the display hex plus the deterministic risk
//! parameters the generator draws from: a base score and a variance that
//! bounds the per-company jitter. Aggregation produces exactly one
//! summary per entry, so the palette order is also the display order.

use crate::types::LogoColor;

/// One palette entry: display identity plus risk parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteEntry {
    /// Display name, the grouping key for aggregation.
    pub name: &'static str,
    /// Display hex value.
    pub hex: &'static str,
    /// Centre of the colour's score distribution.
    pub base_score: f64,
    /// Half-width multiplier for the per-company jitter.
    pub variance: f64,
}

impl PaletteEntry {
    /// Returns this entry's colour as an owned [`LogoColor`].
    pub fn logo_color(&self) -> LogoColor {
        LogoColor::new(self.name, self.hex)
    }
}

/// The ten palette colours in declared (display) order.
pub const PALETTE: [PaletteEntry; 10] = [
    PaletteEntry {
        name: "Navy",
        hex: "#0B1F3B",
        base_score: 35.0,
        variance: 15.0,
    },
    PaletteEntry {
        name: "Forest Green",
        hex: "#2D5016",
        base_score: 40.0,
        variance: 12.0,
    },
    PaletteEntry {
        name: "Burgundy",
        hex: "#800020",
        base_score: 58.0,
        variance: 18.0,
    },
    PaletteEntry {
        name: "Slate",
        hex: "#3E4349",
        base_score: 45.0,
        variance: 14.0,
    },
    PaletteEntry {
        name: "Gold",
        hex: "#D4A574",
        base_score: 52.0,
        variance: 16.0,
    },
    PaletteEntry {
        name: "Teal",
        hex: "#008080",
        base_score: 38.0,
        variance: 13.0,
    },
    PaletteEntry {
        name: "Crimson",
        hex: "#DC143C",
        base_score: 65.0,
        variance: 20.0,
    },
    PaletteEntry {
        name: "Charcoal",
        hex: "#36454F",
        base_score: 48.0,
        variance: 15.0,
    },
    PaletteEntry {
        name: "Indigo",
        hex: "#4B0082",
        base_score: 42.0,
        variance: 13.0,
    },
    PaletteEntry {
        name: "Sage",
        hex: "#9CAF88",
        base_score: 41.0,
        variance: 12.0,
    },
];

/// Looks up a palette entry by exact colour name.
///
/// # Examples
///
/// ```
/// use chroma_core::palette;
///
/// assert_eq!(palette::find("Crimson").unwrap().base_score, 65.0);
/// assert!(palette::find("NotAColour").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_ten_entries() {
        assert_eq!(PALETTE.len(), 10);
    }

    #[test]
    fn test_palette_names_are_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_palette_order_is_declared_order() {
        assert_eq!(PALETTE[0].name, "Navy");
        assert_eq!(PALETTE[6].name, "Crimson");
        assert_eq!(PALETTE[9].name, "Sage");
    }

    #[test]
    fn test_find_known_and_unknown() {
        let navy = find("Navy").unwrap();
        assert_eq!(navy.hex, "#0B1F3B");
        assert_eq!(navy.variance, 15.0);
        assert!(find("navy").is_none()); // Match is exact, not case-folded.
        assert!(find("Vermilion").is_none());
    }

    #[test]
    fn test_logo_color_conversion() {
        let color = find("Teal").unwrap().logo_color();
        assert_eq!(color.name, "Teal");
        assert_eq!(color.hex, "#008080");
    }

    #[test]
    fn test_risk_parameters_are_plausible_scores() {
        for entry in &PALETTE {
            assert!(entry.base_score >= 0.0 && entry.base_score <= 100.0);
            assert!(entry.variance > 0.0);
        }
    }
}
