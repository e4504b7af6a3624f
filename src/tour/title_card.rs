//! Title card: dramatic DeadDrop reveal on the cream background.
//!
//! Timeline (60 frames @ 30 fps):
//!   0-10   diamond logo scales in with a bounce
//!   8-18   wordmark fades up
//!   18-28  subtitle fades up
//!   25-35  decorative red rule appears
//!   35-60  hold on the complete state

use crate::animation::spring::SpringConfig;
use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;
use crate::scene::entrance::{FadeDir, FadeSlide, ScalePop, fade_in, scale_in};

pub const DURATION_FRAMES: u64 = 60;

const LOGO_POP: u64 = 0;
const WORDMARK_FADE: u64 = 8;
const SUBTITLE_FADE: u64 = 18;
const RULE_FADE: u64 = 25;
const FADE_FRAMES: u64 = 10;

/// Title-card state vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TitleCardState {
    /// Diamond logo pop (bouncy spring from frame 0).
    pub logo: ScalePop,
    /// "DEADDROP" wordmark entrance.
    pub wordmark: FadeSlide,
    /// Subtitle line entrance.
    pub subtitle: FadeSlide,
    /// Decorative rule opacity.
    pub rule_opacity: f64,
}

pub fn state(ctx: SampleCtx) -> DemoreelResult<TitleCardState> {
    let f = ctx.frame.0;
    Ok(TitleCardState {
        logo: scale_in(ctx, LOGO_POP, SpringConfig::bouncy())?,
        wordmark: fade_in(f, WORDMARK_FADE, FADE_FRAMES, FadeDir::Up)?,
        subtitle: fade_in(f, SUBTITLE_FADE, FADE_FRAMES, FadeDir::Up)?,
        rule_opacity: fade_in(f, RULE_FADE, FADE_FRAMES, FadeDir::None)?.opacity,
    })
}
