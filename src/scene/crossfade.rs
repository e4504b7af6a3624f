//! Paired cross-fade between two sub-views of one scene, with the
//! interactivity handoff rule.

use crate::animation::interp::interpolate_clamped;
use crate::foundation::error::DemoreelResult;

/// Opacity above which a view receives pointer/interaction priority.
///
/// At most one of two cross-fading views can exceed it at a time under a
/// linear blend, which avoids flicker at the exact crossover frame. The
/// value is load-bearing in the authored scenes; change it and the handoff
/// frames move.
pub const INTERACTIVE_OPACITY_THRESHOLD: f64 = 0.1;

/// Opacities of the two views of a cross-fade. `outgoing + incoming == 1`
/// at every frame (exactly, including in floating point).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CrossfadePair {
    /// View ramping 1 → 0 over the window; composited underneath.
    pub outgoing: f64,
    /// View ramping 0 → 1 over the window; composited on top.
    pub incoming: f64,
}

/// Linear cross-fade over the inclusive frame window `[start, end]`.
///
/// Before the window the outgoing view is fully opaque; after it the
/// incoming view is.
pub fn crossfade(frame: u64, start: u64, end: u64) -> DemoreelResult<CrossfadePair> {
    let t = interpolate_clamped(frame as f64, &[(start as f64, 0.0), (end as f64, 1.0)])?;
    Ok(CrossfadePair {
        outgoing: 1.0 - t,
        incoming: t,
    })
}

/// Whether a view at `opacity` currently receives pointer priority.
pub fn interactive(opacity: f64) -> bool {
    opacity > INTERACTIVE_OPACITY_THRESHOLD
}
