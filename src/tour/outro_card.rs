//! Outro card: closing CTA on black.
//!
//! Timeline (60 frames @ 30 fps):
//!   0-12   diamond logo and tagline fade in
//!   15-25  URL fades up
//!   25-35  footer line fades in
//!   35-60  hold
//!
//! Every ramp clamps, so the card is pixel-static through the hold and the
//! sampler's duplicate elision collapses those frames to one state.

use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;
use crate::scene::entrance::{FadeDir, FadeSlide, fade_in};

pub const DURATION_FRAMES: u64 = 60;

const LOGO_FADE: u64 = 0;
const TAGLINE_FADE: u64 = 0;
const URL_FADE: u64 = 15;
const FOOTER_FADE: u64 = 25;

/// Outro-card state vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OutroCardState {
    pub logo_opacity: f64,
    pub tagline: FadeSlide,
    pub url_line: FadeSlide,
    pub footer_opacity: f64,
}

pub fn state(ctx: SampleCtx) -> DemoreelResult<OutroCardState> {
    let f = ctx.frame.0;
    Ok(OutroCardState {
        logo_opacity: fade_in(f, LOGO_FADE, 12, FadeDir::None)?.opacity,
        tagline: fade_in(f, TAGLINE_FADE, 12, FadeDir::Up)?,
        url_line: fade_in(f, URL_FADE, 10, FadeDir::Up)?,
        footer_opacity: fade_in(f, FOOTER_FADE, 10, FadeDir::None)?.opacity,
    })
}
