use crate::cli::DistancesArgs;
use crate::error::Result;
use helicoil::core::io::coords::read_point_pairs;
use helicoil::workflows::distance::distance_profile;
use std::io::Write;
use tracing::info;

/// The impossible distance emitted for a line whose pair could not be
/// parsed.
const UNAVAILABLE: f64 = -1.0;

pub fn run(args: DistancesArgs) -> Result<()> {
    let mut reader = super::open_input(&args.input)?;
    let pairs = read_point_pairs(&mut reader)?;
    info!("Read {} coordinate pairs from input.", pairs.len());

    let profile = distance_profile(&pairs);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_distances(&mut out, &profile)?;

    Ok(())
}

/// Writes one distance per line, mirroring the input line-for-line.
fn write_distances(out: &mut impl Write, profile: &[Option<f64>]) -> std::io::Result<()> {
    for dist in profile {
        writeln!(out, "{}", dist.unwrap_or(UNAVAILABLE))?;
    }
    Ok(())
}
