// src/main.rs

//! Deterministic ASCII flow-field art from a seed token.
//!
//! The binary is a thin shell around the pure core: parse arguments, fill
//! any unspecified palette/flow from the seed, render, print. All art goes
//! to stdout; logs go to stderr.

// Declare modules
pub mod flow;
pub mod palette;
pub mod renderer;
pub mod seed;
pub mod select;
pub mod size;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::debug;

/// Command-line surface for the flow-field renderer.
#[derive(Parser, Debug)]
#[command(name = "flowfield", about = "Deterministic ASCII flow-field art from a seed")]
struct Cli {
    /// Seed (number or text)
    seed: String,

    /// Palette name (default: derived from seed)
    #[arg(
        short,
        long,
        value_parser = clap::builder::PossibleValuesParser::new(crate::palette::NAMES.iter().copied())
    )]
    palette: Option<String>,

    /// Flow type (default: derived from seed)
    #[arg(
        short,
        long,
        value_parser = clap::builder::PossibleValuesParser::new(crate::flow::NAMES.iter().copied())
    )]
    flow: Option<String>,

    /// Output size
    #[arg(
        short,
        long,
        default_value = "medium",
        value_parser = clap::builder::PossibleValuesParser::new(crate::size::NAMES.iter().copied())
    )]
    size: String,

    /// List all palettes, flows and sizes
    #[arg(short, long)]
    list: bool,

    /// Show resolved params alongside the art
    #[arg(short, long)]
    info: bool,
}

/// Three listing lines, one per catalog, names in declaration order.
fn catalog_listing() -> String {
    format!(
        "PALETTES: {}\nFLOWS: {}\nSIZES: {}",
        palette::NAMES.join(", "),
        flow::NAMES.join(", "),
        size::NAMES.join(", ")
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut out = io::stdout().lock();

    if cli.list {
        writeln!(out, "{}", catalog_listing()).context("failed to write catalog listing")?;
        return Ok(());
    }

    let (palette_name, flow_name) = match (cli.palette.as_deref(), cli.flow.as_deref()) {
        (Some(p), Some(f)) => (p, f),
        (p, f) => {
            let (auto_palette, auto_flow) = select::pick_defaults(&cli.seed);
            (p.unwrap_or(auto_palette), f.unwrap_or(auto_flow))
        }
    };
    debug!(
        "seed {:?} -> palette {}, flow {}, size {}",
        cli.seed, palette_name, flow_name, cli.size
    );

    if cli.info {
        writeln!(
            out,
            "Seed: {} | Palette: {} | Flow: {} | Size: {}",
            cli.seed, palette_name, flow_name, cli.size
        )
        .context("failed to write info header")?;
        writeln!(out, "---").context("failed to write info header")?;
    }

    let art = renderer::render(&cli.seed, palette_name, flow_name, &cli.size);
    writeln!(out, "{}", art).context("failed to write art to stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn listing_enumerates_catalogs_in_order() {
        let listing = catalog_listing();
        let lines: Vec<&str> = listing.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PALETTES: mondrian, neon, earth"));
        assert!(lines[1].starts_with("FLOWS: perlin, vortex, radial"));
        assert_eq!(lines[2], "SIZES: tiny, small, medium, large, huge");
    }

    #[test]
    fn cli_accepts_the_documented_argument_shapes() {
        Cli::try_parse_from(["flowfield", "42"]).expect("bare seed");
        Cli::try_parse_from(["flowfield", "42", "-p", "neon", "-f", "vortex", "-s", "tiny"])
            .expect("short options");
        Cli::try_parse_from(["flowfield", "42", "--palette", "zen", "--info"])
            .expect("long options");
        Cli::try_parse_from(["flowfield", "42", "--list"]).expect("listing mode");
    }

    #[test]
    fn cli_rejects_names_outside_the_catalogs() {
        assert!(Cli::try_parse_from(["flowfield", "42", "-p", "nope"]).is_err());
        assert!(Cli::try_parse_from(["flowfield", "42", "-f", "nope"]).is_err());
        assert!(Cli::try_parse_from(["flowfield", "42", "-s", "nope"]).is_err());
    }

    #[test]
    fn size_defaults_to_medium() {
        let cli = Cli::try_parse_from(["flowfield", "42"]).expect("bare seed");
        assert_eq!(cli.size, "medium");
    }
}
