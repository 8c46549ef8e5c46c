//! # Ring Layout Demo
//!
//! Prints a placement table for the given parameters.
//!
//! ```bash
//! cargo run --example ring_layout -- <count> <radius> [radius_jitter] [angle_jitter] [height] [seed]
//! cargo run --example ring_layout -- 6 10 0.5 0.1 2
//! ```

use anyhow::{Context, Result};
use crateyard::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut arg = args.iter();

    let request = PlacementRequest {
        count: parse_or(arg.next(), 6u32, "count")?,
        base_radius: parse_or(arg.next(), 6.0f32, "radius")?,
        radius_jitter: parse_or(arg.next(), 0.5f32, "radius_jitter")?,
        angle_jitter: parse_or(arg.next(), 0.1f32, "angle_jitter")?,
        height: parse_or(arg.next(), 1.0f32, "height")?,
    };

    let placement = match arg.next() {
        Some(seed) => {
            let seed: u64 = seed.parse().context("seed must be an integer")?;
            generate_with(&request, &mut StdRng::seed_from_u64(seed))?
        }
        None => generate(&request)?,
    };

    println!("{:?}", request);
    println!("{:>5}  {:>9}  {:>9}  {:>9}  {:>8}  {:>8}", "index", "x", "y", "z", "radius", "angle");
    for (index, position) in placement.iter().enumerate() {
        let radius = (position.x * position.x + position.z * position.z).sqrt();
        let angle = position.z.atan2(position.x);
        println!(
            "{:>5}  {:>9.4}  {:>9.4}  {:>9.4}  {:>8.4}  {:>8.4}",
            index, position.x, position.y, position.z, radius, angle
        );
    }

    Ok(())
}

fn parse_or<T: std::str::FromStr>(value: Option<&String>, default: T, name: &str) -> Result<T> {
    match value {
        Some(raw) => raw
            .parse()
            .ok()
            .with_context(|| format!("could not parse {}: {:?}", name, raw)),
        None => Ok(default),
    }
}
