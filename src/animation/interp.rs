use crate::foundation::error::{DemoreelError, DemoreelResult};

/// Extrapolation policy applied outside a curve's breakpoint range,
/// independently selectable per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the slope of the boundary segment.
    Extend,
}

/// Clamped piecewise-linear interpolation over `(input, output)` stops.
///
/// Stops must be non-empty, finite, and non-decreasing in input; violating
/// that is a caller programming error and fails fast. Two stops sharing an
/// input behave as a unit step: at the shared input the later output wins.
///
/// Vector-valued quantities (positions, colors) are interpolated by running
/// one curve per channel and recombining; see [`crate::Rgb8::mix`] and the
/// cursor waypoint curves in [`crate::cursor_state`].
pub fn interpolate(
    input: f64,
    stops: &[(f64, f64)],
    left: Extrapolate,
    right: Extrapolate,
) -> DemoreelResult<f64> {
    validate_stops(stops)?;
    if !input.is_finite() {
        return Err(DemoreelError::animation("interpolation input must be finite"));
    }

    let idx = stops.partition_point(|s| s.0 <= input);

    if idx == 0 {
        // Strictly before the first stop.
        return Ok(match left {
            Extrapolate::Clamp => stops[0].1,
            Extrapolate::Extend => extend_from(stops[0], stops.get(1).copied(), input),
        });
    }
    if idx >= stops.len() {
        // At or after the last stop.
        let last = stops[stops.len() - 1];
        return Ok(match right {
            Extrapolate::Clamp => last.1,
            Extrapolate::Extend => {
                let prev = if stops.len() >= 2 {
                    Some(stops[stops.len() - 2])
                } else {
                    None
                };
                extend_from(last, prev, input)
            }
        });
    }

    let (a_in, a_out) = stops[idx - 1];
    let (b_in, b_out) = stops[idx];
    let denom = b_in - a_in;
    if denom == 0.0 {
        return Ok(b_out);
    }
    let t = (input - a_in) / denom;
    Ok(a_out + (b_out - a_out) * t)
}

/// [`interpolate`] with both sides clamped, the common case for phase-window
/// ramps.
pub fn interpolate_clamped(input: f64, stops: &[(f64, f64)]) -> DemoreelResult<f64> {
    interpolate(input, stops, Extrapolate::Clamp, Extrapolate::Clamp)
}

fn validate_stops(stops: &[(f64, f64)]) -> DemoreelResult<()> {
    if stops.is_empty() {
        return Err(DemoreelError::animation(
            "interpolation stops must be non-empty",
        ));
    }
    for &(input, output) in stops {
        if !input.is_finite() || !output.is_finite() {
            return Err(DemoreelError::animation(
                "interpolation stops must be finite",
            ));
        }
    }
    if !stops.windows(2).all(|w| w[0].0 <= w[1].0) {
        return Err(DemoreelError::animation(
            "interpolation stop inputs must be non-decreasing",
        ));
    }
    Ok(())
}

fn extend_from(boundary: (f64, f64), neighbor: Option<(f64, f64)>, input: f64) -> f64 {
    let Some((n_in, n_out)) = neighbor else {
        return boundary.1;
    };
    let run = boundary.0 - n_in;
    if run == 0.0 {
        // Degenerate boundary segment has no slope to continue.
        return boundary.1;
    }
    let slope = (boundary.1 - n_out) / run;
    boundary.1 + slope * (input - boundary.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
