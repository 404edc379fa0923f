use crate::cli::OmegaArgs;
use crate::config::resolve_omega_params;
use crate::error::Result;
use helicoil::core::io::coords::read_points;
use helicoil::workflows::helix::omega_profile;
use std::io::Write;
use tracing::{debug, info};

/// The impossible angle emitted for a window whose rotation angle could
/// not be computed, so downstream consumers can spot and skip it. Kept in
/// the degree domain even under `--radians`: it is out of range either way.
const UNAVAILABLE: f64 = -720.0;

pub fn run(args: OmegaArgs) -> Result<()> {
    let params = resolve_omega_params(&args)?;
    debug!("Effective analysis parameters: {:?}", params);

    let mut reader = super::open_input(&args.input)?;
    let points = read_points(&mut reader)?;
    info!("Read {} positions from input.", points.len());

    let profile = omega_profile(&points, &params)?;
    let unavailable = profile.iter().filter(|omega| omega.is_none()).count();
    if unavailable > 0 {
        info!(
            "{} of {} windows had no computable angle.",
            unavailable,
            profile.len()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_profile_line(&mut out, &profile, args.radians)?;

    Ok(())
}

/// Writes one chain's omega profile: space-separated values on a single
/// line, degrees unless `radians` is set.
fn write_profile_line(
    out: &mut impl Write,
    profile: &[Option<f64>],
    radians: bool,
) -> std::io::Result<()> {
    for (i, omega) in profile.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        match omega {
            Some(omega) => {
                let value = if radians { *omega } else { omega.to_degrees() };
                write!(out, "{}", value)?;
            }
            None => write!(out, "{}", UNAVAILABLE)?,
        }
    }
    writeln!(out)?;
    Ok(())
}
