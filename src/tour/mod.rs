//! The authored DeadDrop product tour.
//!
//! Six scenes (a title card, four product walkthrough scenes, and an outro
//! card), each a pure state function over its own local frame clock, plus
//! [`full_tour`] which joins them with 15-frame linear cross-fades.
//!
//! Scene modules follow one shape: a block of named phase-boundary
//! constants (monotonically non-decreasing within the scene), a state
//! struct, and a `state` function deriving every field from the frame.

pub mod dashboard;
pub mod dns_verification;
pub mod embed_widget;
pub mod full_tour;
pub mod outro_card;
pub mod register_domain;
pub mod theme;
pub mod title_card;

pub use full_tour::{FADE_FRAMES, full_tour};

/// Closed union of per-scene state vectors, the payload type of the
/// composed tour timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SceneState {
    Title(title_card::TitleCardState),
    RegisterDomain(register_domain::RegisterDomainState),
    DnsVerification(dns_verification::DnsVerificationState),
    EmbedWidget(embed_widget::EmbedWidgetState),
    Dashboard(dashboard::DashboardState),
    Outro(outro_card::OutroCardState),
}
