//! Mouse-cursor overlay state.
//!
//! The cursor travels between named waypoints via one clamped piecewise
//! curve per axis, and clicking plays a ripple on a fixed 16-frame cycle.

use crate::animation::interp::interpolate_clamped;
use crate::foundation::core::Point;
use crate::foundation::error::DemoreelResult;

/// Ripple cycle length in frames.
const RIPPLE_CYCLE: u64 = 16;

/// Ripple radius at the end of the expansion, in pixels.
const RIPPLE_MAX_RADIUS: f64 = 20.0;

/// Ripple opacity at the start of the expansion.
const RIPPLE_START_OPACITY: f64 = 0.5;

/// Complete cursor snapshot for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CursorState {
    pub pos: Point,
    pub visible: bool,
    pub clicking: bool,
    /// Click-ripple radius in pixels; 0 when not clicking.
    pub ripple_radius: f64,
    /// Click-ripple opacity; 0 when not clicking.
    pub ripple_opacity: f64,
}

impl CursorState {
    /// A parked, invisible cursor.
    pub fn hidden() -> Self {
        Self {
            pos: Point::ZERO,
            visible: false,
            clicking: false,
            ripple_radius: 0.0,
            ripple_opacity: 0.0,
        }
    }
}

/// Build the cursor snapshot for `frame` from per-axis waypoint curves.
///
/// `x_waypoints` / `y_waypoints` are `(frame, coordinate)` stops in
/// non-decreasing frame order; the position clamps to the first/last
/// waypoint outside the authored range.
pub fn cursor_state(
    frame: u64,
    x_waypoints: &[(f64, f64)],
    y_waypoints: &[(f64, f64)],
    visible: bool,
    clicking: bool,
) -> DemoreelResult<CursorState> {
    let f = frame as f64;
    let x = interpolate_clamped(f, x_waypoints)?;
    let y = interpolate_clamped(f, y_waypoints)?;

    let (ripple_radius, ripple_opacity) = if clicking {
        let p = (frame % RIPPLE_CYCLE) as f64;
        (
            interpolate_clamped(p, &[(0.0, 0.0), (8.0, RIPPLE_MAX_RADIUS)])?,
            interpolate_clamped(p, &[(0.0, RIPPLE_START_OPACITY), (8.0, 0.0)])?,
        )
    } else {
        (0.0, 0.0)
    };

    Ok(CursorState {
        pos: Point::new(x, y),
        visible,
        clicking,
        ripple_radius,
        ripple_opacity,
    })
}
