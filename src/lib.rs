//! Demoreel is a deterministic scene-state and timeline engine for scripted
//! product-demo videos.
//!
//! Every visual property of every frame (opacities, cursor positions, color
//! channels, revealed-text lengths, visibility and interactivity flags) is a
//! pure function of an integer frame number. There is no wall clock, no
//! randomness, and no state carried between samples, so frames can be
//! evaluated in any order (or in parallel) and always agree.
//!
//! # Pipeline overview
//!
//! 1. **Primitives**: clamped piecewise-linear interpolation
//!    ([`interpolate`]) and a closed-form damped-spring step response
//!    ([`SpringConfig::sample`])
//! 2. **Scene state**: per-scene pure functions `SampleCtx -> state` built
//!    from the primitives against named phase-boundary constants (see the
//!    authored scenes in [`tour`])
//! 3. **Compose**: [`Timeline`] stitches scenes end-to-end with overlapping
//!    cross-fade transitions and exposes one `(frame) -> ComposedFrame`
//! 4. **Sample**: [`sample_range`] / [`sample_range_parallel`] /
//!    [`sample_unique`] batch-evaluate frames for a downstream rasterizer
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same `(frame, fps, configuration)`
//!   always yields the same state.
//! - **Validate early**: configuration errors surface when a timeline is
//!   built, never in the middle of a render.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod scene;
mod timeline;

/// The authored DeadDrop product tour: theme constants, the six scenes, and
/// the full composed timeline.
pub mod tour;

pub use animation::ease::Ease;
pub use animation::interp::{Extrapolate, interpolate, interpolate_clamped};
pub use animation::spring::SpringConfig;
pub use animation::text::{
    caret_opacity, caret_visible, revealed_chars, type_on_frames, typed_slice,
};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Rgb8, Vec2};
pub use foundation::error::{DemoreelError, DemoreelResult};
pub use scene::SampleCtx;
pub use scene::crossfade::{CrossfadePair, INTERACTIVE_OPACITY_THRESHOLD, crossfade, interactive};
pub use scene::cursor::{CursorState, cursor_state};
pub use scene::entrance::{
    FadeDir, FadeSlide, ScalePop, SlideDir, SlideOffset, fade_in, scale_in, slide_in,
};
pub use timeline::fingerprint::{StateFingerprint, fingerprint_state};
pub use timeline::sampler::{
    SampleStats, SampleThreading, UniqueSamples, sample_range, sample_range_parallel, sample_unique,
};
pub use timeline::series::{ComposedFrame, Timeline, TimelineBuilder, Transition};
