// src/size.rs

//! The size catalog: named (rows, cols) grid bounds.

use log::debug;
use once_cell::sync::Lazy;

/// Fallback size used when a requested name is unknown.
pub const DEFAULT: &str = "medium";

/// Catalog of sizes in declaration order.
pub const SIZES: &[(&str, (usize, usize))] = &[
    ("tiny", (10, 20)),
    ("small", (14, 30)),
    ("medium", (18, 40)),
    ("large", (22, 50)),
    ("huge", (26, 60)),
];

/// Size names in declaration order.
pub static NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| SIZES.iter().map(|(name, _)| *name).collect());

/// Looks up grid bounds, falling back to [`DEFAULT`] for unknown names.
pub fn resolve(name: &str) -> (usize, usize) {
    if let Some((_, bounds)) = SIZES.iter().find(|(n, _)| *n == name) {
        *bounds
    } else {
        debug!("unknown size {:?}, using {:?}", name, DEFAULT);
        resolve(DEFAULT)
    }
}
