//! Entrance helpers: the three reusable ways scene elements arrive.
//!
//! Each helper is a pure state producer: it returns the opacity/offset/scale
//! snapshot for one frame, and the rasterizer applies it however it likes.

use crate::animation::interp::{Extrapolate, interpolate, interpolate_clamped};
use crate::animation::spring::SpringConfig;
use crate::foundation::core::Vec2;
use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;

/// Vertical drift accompanying a fade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FadeDir {
    /// Drift up into place from 8 px below.
    #[default]
    Up,
    /// Drift down into place from 8 px above.
    Down,
    /// Opacity only.
    None,
}

/// Slide-in axis and side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SlideDir {
    Left,
    Right,
    Up,
    Down,
}

/// Fade entrance snapshot: opacity plus remaining vertical drift.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FadeSlide {
    pub opacity: f64,
    pub translate_y: f64,
}

/// Spring pop snapshot: scale (may overshoot 1) plus opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScalePop {
    pub scale: f64,
    pub opacity: f64,
}

/// Spring slide snapshot: remaining offset from rest plus opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlideOffset {
    pub translate: Vec2,
    pub opacity: f64,
}

/// Drift distance of [`fade_in`] in pixels.
const FADE_DRIFT_PX: f64 = 8.0;

/// Offset distance of [`slide_in`] in pixels.
const SLIDE_OFFSET_PX: f64 = 40.0;

/// Linear fade from transparent over `[start, start + duration]`, with an
/// optional 8 px drift into place.
pub fn fade_in(frame: u64, start: u64, duration: u64, dir: FadeDir) -> DemoreelResult<FadeSlide> {
    let f = frame as f64;
    let window = [(start as f64, 0.0), ((start + duration) as f64, 1.0)];
    let opacity = interpolate_clamped(f, &window)?;

    let translate_y = match dir {
        FadeDir::Up => interpolate_clamped(
            f,
            &[(start as f64, FADE_DRIFT_PX), ((start + duration) as f64, 0.0)],
        )?,
        FadeDir::Down => interpolate_clamped(
            f,
            &[(start as f64, -FADE_DRIFT_PX), ((start + duration) as f64, 0.0)],
        )?,
        FadeDir::None => 0.0,
    };

    Ok(FadeSlide {
        opacity,
        translate_y,
    })
}

/// Spring pop from 50% scale while fading in, starting at `start`.
pub fn scale_in(ctx: SampleCtx, start: u64, config: SpringConfig) -> DemoreelResult<ScalePop> {
    let progress = config.sample(ctx.frame.0, ctx.fps, start)?;
    let scale = interpolate(
        progress,
        &[(0.0, 0.5), (1.0, 1.0)],
        Extrapolate::Extend,
        Extrapolate::Extend,
    )?;
    Ok(ScalePop {
        scale,
        opacity: progress.clamp(0.0, 1.0),
    })
}

/// Spring slide from 40 px off-axis while fading in, using the smooth
/// preset for a clean deceleration.
pub fn slide_in(ctx: SampleCtx, start: u64, dir: SlideDir) -> DemoreelResult<SlideOffset> {
    let progress = SpringConfig::smooth().sample(ctx.frame.0, ctx.fps, start)?;

    let from = match dir {
        SlideDir::Left => Vec2::new(-SLIDE_OFFSET_PX, 0.0),
        SlideDir::Right => Vec2::new(SLIDE_OFFSET_PX, 0.0),
        SlideDir::Up => Vec2::new(0.0, -SLIDE_OFFSET_PX),
        SlideDir::Down => Vec2::new(0.0, SLIDE_OFFSET_PX),
    };
    let remaining = 1.0 - progress;
    Ok(SlideOffset {
        translate: Vec2::new(from.x * remaining, from.y * remaining),
        opacity: progress.clamp(0.0, 1.0),
    })
}
