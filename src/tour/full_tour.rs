//! The complete product tour: every scene joined by linear cross-fades.
//!
//! Length accounting:
//!   60 + 135 + 165 + 150 + 150 + 60 = 720 summed segment frames
//!   5 transitions x 15 frames each  =  75 overlapping frames
//!   720 - 75 = 645 composed frames (21.5 s @ 30 fps)

use crate::animation::ease::Ease;
use crate::foundation::error::DemoreelResult;
use crate::timeline::series::{Timeline, TimelineBuilder};
use crate::tour::{
    SceneState, dashboard, dns_verification, embed_widget, outro_card, register_domain, theme,
    title_card,
};

/// Cross-fade length between adjacent scenes.
pub const FADE_FRAMES: u64 = 15;

/// Build the composed tour timeline.
pub fn full_tour() -> DemoreelResult<Timeline<SceneState>> {
    TimelineBuilder::new(theme::VIDEO_FPS)
        .segment(title_card::DURATION_FRAMES, |ctx| {
            title_card::state(ctx).map(SceneState::Title)
        })
        .transition(FADE_FRAMES, Ease::Linear)?
        .segment(register_domain::DURATION_FRAMES, |ctx| {
            register_domain::state(ctx).map(SceneState::RegisterDomain)
        })
        .transition(FADE_FRAMES, Ease::Linear)?
        .segment(dns_verification::DURATION_FRAMES, |ctx| {
            dns_verification::state(ctx).map(SceneState::DnsVerification)
        })
        .transition(FADE_FRAMES, Ease::Linear)?
        .segment(embed_widget::DURATION_FRAMES, |ctx| {
            embed_widget::state(ctx).map(SceneState::EmbedWidget)
        })
        .transition(FADE_FRAMES, Ease::Linear)?
        .segment(dashboard::DURATION_FRAMES, |ctx| {
            dashboard::state(ctx).map(SceneState::Dashboard)
        })
        .transition(FADE_FRAMES, Ease::Linear)?
        .segment(outro_card::DURATION_FRAMES, |ctx| {
            outro_card::state(ctx).map(SceneState::Outro)
        })
        .build()
}
