// src/flow.rs

//! The flow-function catalog.
//!
//! Each entry is a pure scalar field over grid coordinates: the same
//! `(x, y, seed)` triple always produces the same value. Entries aim for
//! [0, 1] but none is trusted to be self-normalizing; the renderer clamps.
//!
//! Catalog order is load-bearing: the option selector indexes into it, so
//! entries must not be reordered or removed.

use std::f64::consts::PI;

use log::debug;
use once_cell::sync::Lazy;

use crate::seed;

/// A flow function: (column, row, seed value) -> raw intensity.
pub type FlowFn = fn(f64, f64, f64) -> f64;

/// Fallback flow used when a requested name is unknown.
pub const DEFAULT: &str = "perlin";

/// Catalog of flows in declaration order.
pub const FLOWS: &[(&str, FlowFn)] = &[
    ("perlin", perlin),
    ("vortex", vortex),
    ("radial", radial),
    ("spiral", spiral),
    ("turbulent", turbulent),
    ("ridge", ridge),
    ("cellular", cellular),
    ("wave", wave),
    ("diamond", diamond),
    ("stripe", stripe),
    ("mosaic", mosaic),
    ("fractal", fractal),
];

/// Flow names in declaration order.
pub static NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| FLOWS.iter().map(|(name, _)| *name).collect());

/// Looks up a flow function, falling back to [`DEFAULT`] for unknown names.
pub fn resolve(name: &str) -> FlowFn {
    if let Some((_, f)) = FLOWS.iter().find(|(n, _)| *n == name) {
        *f
    } else {
        debug!("unknown flow {:?}, using {:?}", name, DEFAULT);
        resolve(DEFAULT)
    }
}

/// Euclidean distance from `(x, y)` to `(cx, cy)`.
fn dist_to(x: f64, y: f64, cx: f64, cy: f64) -> f64 {
    let dx = x - cx;
    let dy = y - cy;
    (dx * dx + dy * dy).sqrt()
}

/// Smooth organic drift from layered sine waves.
fn perlin(x: f64, y: f64, s: f64) -> f64 {
    let v = (x * 0.3 + s).sin() * (y * 0.2 + s * 0.7).cos()
        + (x * 0.1 - y * 0.15 + s * 1.3).sin() * 0.5
        + (x * 0.05 + y * 0.08 + s * 0.3).cos() * 0.3;
    (v + 2.0) / 4.0
}

/// Spiral field winding around a seed-dependent center.
fn vortex(x: f64, y: f64, s: f64) -> f64 {
    let cx = 20.0 + s.sin() * 8.0;
    let cy = 10.0 + s.cos() * 5.0;
    let dx = x - cx;
    let dy = y - cy;
    let dist = (dx * dx + dy * dy).sqrt() + 0.1;
    let angle = dy.atan2(dx) + dist * 0.3 + s;
    ((angle * 2.0 + dist * 0.5).sin() + 1.0) / 2.0
}

/// Rings radiating from a seed-dependent center.
fn radial(x: f64, y: f64, s: f64) -> f64 {
    let cx = 20.0 + (s * 1.7).sin() * 10.0;
    let cy = 10.0 + (s * 2.3).cos() * 5.0;
    let dist = dist_to(x, y, cx, cy);
    ((dist * 0.4 + s).sin() + 1.0) / 2.0
}

/// Logarithmic spiral around the fixed center (20, 10).
fn spiral(x: f64, y: f64, s: f64) -> f64 {
    let dx = x - 20.0;
    let dy = y - 10.0;
    let angle = dy.atan2(dx);
    let dist = (dx * dx + dy * dy).sqrt();
    ((angle * 3.0 + (dist + 1.0).ln() * 4.0 + s).sin() + 1.0) / 2.0
}

/// Multi-frequency interference over four harmonics.
fn turbulent(x: f64, y: f64, s: f64) -> f64 {
    let mut v = 0.0;
    for i in 1..5 {
        let i = f64::from(i);
        let freq = 0.1 * i + s * 0.01;
        let phase = s * i * 0.7;
        v += (x * freq + phase).sin() * (y * freq * 0.8 + phase).cos() / i;
    }
    (v + 2.0) / 4.0
}

/// The perlin field folded about its midpoint, leaving sharp ridge lines.
fn ridge(x: f64, y: f64, s: f64) -> f64 {
    (perlin(x, y, s) * 2.0 - 1.0).abs()
}

/// Distance to the nearest of six hashed cell centers.
fn cellular(x: f64, y: f64, s: f64) -> f64 {
    let key = seed::float_key(s);
    let mut min_dist = f64::MAX;
    for i in 0..6 {
        let d = seed::digest(&format!("{}-{}", key, i));
        let cx = f64::from(seed::be_u16(&d, 0) % 40);
        let cy = f64::from(seed::be_u16(&d, 2) % 20);
        min_dist = min_dist.min(dist_to(x, y, cx, cy));
    }
    (min_dist / 12.0).min(1.0)
}

/// Interference from three hashed wave sources.
fn wave(x: f64, y: f64, s: f64) -> f64 {
    let key = seed::float_key(s);
    let mut v = 0.0;
    for i in 0..3 {
        let d = seed::digest(&format!("{}-wave-{}", key, i));
        let cx = f64::from(seed::be_u16(&d, 0) % 40);
        let cy = f64::from(seed::be_u16(&d, 2) % 20);
        v += (dist_to(x, y, cx, cy) * 0.8 + s * 0.5).sin();
    }
    (v / 3.0 + 1.0) / 2.0
}

/// Concentric diamonds by Manhattan distance.
fn diamond(x: f64, y: f64, s: f64) -> f64 {
    let cx = 20.0 + s.sin() * 8.0;
    let cy = 10.0 + s.cos() * 5.0;
    let dist = (x - cx).abs() + (y - cy).abs();
    ((dist * 0.3 + s).sin() + 1.0) / 2.0
}

/// Angled stripes with seed-dependent direction and width.
fn stripe(x: f64, y: f64, s: f64) -> f64 {
    let angle = s * 0.7;
    let proj = x * angle.cos() + y * angle.sin();
    let width = 3.0 + (s * 1.3).sin() * 2.0;
    ((proj / width * PI).sin() + 1.0) / 2.0
}

/// Blocky tiles, each shaded by a hash of its tile coordinates.
fn mosaic(x: f64, y: f64, s: f64) -> f64 {
    let tile = 3 + (s as i64) % 4;
    let tx = x as i64 / tile;
    let ty = y as i64 / tile;
    let d = seed::digest(&format!("{}-{}-{}", seed::float_key(s), tx, ty));
    f64::from(d[0]) / 255.0
}

/// Five octaves of drifting sine/cosine products.
fn fractal(x: f64, y: f64, s: f64) -> f64 {
    let mut v = 0.0;
    let mut scale = 1.0;
    let mut px = x + s;
    let mut py = y + s * 0.7;
    for _ in 0..5 {
        v += (px * scale).sin() * (py * scale).cos() / scale;
        scale *= 2.1;
        px += s * 0.3;
        py += s * 0.5;
    }
    (v + 2.0) / 4.0
}
