use crate::cli::OmegaArgs;
use crate::error::Result;
use helicoil::workflows::helix::OmegaParams;
use tracing::debug;

/// Resolves the effective analysis parameters for the `omega` command:
/// defaults, overlaid by the TOML config file (when given), overlaid by
/// command-line flags.
pub fn resolve_omega_params(args: &OmegaArgs) -> Result<OmegaParams> {
    let mut params = match &args.config {
        Some(path) => {
            debug!("Loading analysis parameters from {:?}", path);
            OmegaParams::from_toml_path(path)?
        }
        None => OmegaParams::default(),
    };

    if let Some(tolerance) = args.tolerance {
        params.tolerance = tolerance;
    }
    if let Some(both) = args.truncate {
        params.truncate_start = both;
        params.truncate_end = both;
    }
    if let Some(start) = args.truncate_start {
        params.truncate_start = start;
    }
    if let Some(end) = args.truncate_end {
        params.truncate_end = end;
    }

    Ok(params)
}
