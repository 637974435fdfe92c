// src/palette.rs

//! The palette catalog: named ten-character ramps ordered light to dark.
//!
//! Catalog order is load-bearing: the option selector indexes into it, so
//! entries must not be reordered or removed.

use log::debug;
use once_cell::sync::Lazy;

/// Fallback palette used when a requested name is unknown.
pub const DEFAULT: &str = "earth";

/// Catalog of palettes in declaration order.
pub const PALETTES: &[(&str, &str)] = &[
    ("mondrian", "   ..::|##"),
    ("neon", "  .*+=#%@&"),
    ("earth", "  .,:;oO#@"),
    ("ocean", "  ~-=+*#%@"),
    ("vapor", "  ._-~=+*#"),
    ("midnight", "  .'`-~=*#"),
    ("ember", "  .,-~:;*#"),
    ("candy", "  .,oO0@#&"),
    ("arctic", "  ._-=+*#@"),
    ("forest", "  .,;:!|#@"),
    ("glitch", "  _/|\\-=+#"),
    ("binary", "     01#@@"),
    ("static", "  .:-=+*#%"),
    // interior spaces are part of the ramp
    ("zen", "  . , - ~ "),
    ("brutalist", "  .|#@@@@#"),
];

/// Palette names in declaration order.
pub static NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| PALETTES.iter().map(|(name, _)| *name).collect());

/// Looks up a palette ramp, falling back to [`DEFAULT`] for unknown names.
pub fn resolve(name: &str) -> &'static str {
    if let Some((_, ramp)) = PALETTES.iter().find(|(n, _)| *n == name) {
        ramp
    } else {
        debug!("unknown palette {:?}, using {:?}", name, DEFAULT);
        resolve(DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn every_ramp_has_ten_characters() {
        for (name, ramp) in PALETTES {
            assert_eq!(ramp.chars().count(), 10, "palette {}", name);
        }
    }

    #[test]
    fn names_follow_declaration_order() {
        assert_eq!(NAMES.len(), 15);
        assert_eq!(NAMES[0], "mondrian");
        assert_eq!(NAMES[2], "earth");
        assert_eq!(NAMES[9], "forest");
        assert_eq!(NAMES[14], "brutalist");
    }

    #[test]
    fn resolve_falls_back_to_earth() {
        assert_eq!(resolve("not-a-real-palette"), resolve("earth"));
        assert_eq!(resolve("earth"), "  .,:;oO#@");
    }

    #[test]
    fn zen_keeps_its_interior_spaces() {
        assert_eq!(resolve("zen"), "  . , - ~ ");
    }
}
