// src/renderer.rs

//! The grid renderer.
//!
//! Resolves the requested palette, flow, and size against their catalogs,
//! then walks the grid row-major, quantizing each clamped sample into a
//! palette character. Pure: identical inputs always produce an identical
//! output string.

use log::debug;

use crate::flow::{self, FlowFn};
use crate::palette;
use crate::seed;
use crate::size;

/// Renders the flow field for `token` as a newline-joined text block.
///
/// Unknown palette, flow, or size names silently resolve to the catalog
/// defaults rather than failing; callers that want strict validation do it
/// before this point.
///
/// # Arguments
/// * `token` - the raw seed token.
/// * `palette_name` - a palette catalog key, or any string for the default.
/// * `flow_name` - a flow catalog key, or any string for the default.
/// * `size_name` - a size catalog key, or any string for the default.
pub fn render(token: &str, palette_name: &str, flow_name: &str, size_name: &str) -> String {
    let seed_val = seed::derive(token);
    let ramp: Vec<char> = palette::resolve(palette_name).chars().collect();
    let flow_fn = flow::resolve(flow_name);
    let (rows, cols) = size::resolve(size_name);
    debug!(
        "rendering {}x{} grid, seed value {}",
        rows, cols, seed_val
    );
    render_grid(seed_val, &ramp, flow_fn, rows, cols)
}

/// Evaluates `flow_fn` over a rows x cols grid and quantizes each sample
/// against `ramp`.
///
/// Samples are clamped to [0, 1] first; a clamped sample maps to
/// `trunc(sample * (ramp_len - 1))`, so 0.0 is the first ramp character
/// and exactly 1.0 the last. Rows are joined with a single newline and
/// there is no trailing newline.
fn render_grid(seed_val: f64, ramp: &[char], flow_fn: FlowFn, rows: usize, cols: usize) -> String {
    let mut out = String::with_capacity(rows * (cols + 1));
    for y in 0..rows {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..cols {
            let v = flow_fn(x as f64, y as f64, seed_val).clamp(0.0, 1.0);
            let idx = (v * (ramp.len() - 1) as f64) as usize;
            out.push(ramp[idx]);
        }
    }
    out
}
