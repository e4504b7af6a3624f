//! Scene 1: registering a domain.
//!
//! Timeline (135 frames @ 30 fps):
//!   0-14    form appears
//!   15-56   cursor arrives, the domain name is typed
//!   57-74   cursor moves to the button, hovers, clicks
//!   75-89   form fades out, URL changes, detail page fades in
//!   90-119  domain detail with flash + verification panel
//!   120-134 static hold

use crate::animation::interp::{Extrapolate, interpolate, interpolate_clamped};
use crate::animation::spring::SpringConfig;
use crate::animation::text::typed_slice;
use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;
use crate::scene::cursor::{CursorState, cursor_state};
use crate::scene::entrance::{FadeDir, FadeSlide, fade_in};

pub const DURATION_FRAMES: u64 = 135;

pub const DOMAIN: &str = "mycoolproject.com";

const FORM_FADE_START: u64 = 0;
const FORM_FADE_FRAMES: u64 = 14;
const CURSOR_APPEAR: u64 = 15;
const TYPING_START: u64 = 17;
const FRAMES_PER_CHAR: u64 = 2;
const CURSOR_MOVE_TO_BTN: u64 = 57;
const BTN_HOVER_START: u64 = 62;
const BTN_CLICK_START: u64 = 68;
const BTN_CLICK_END: u64 = 72;
const PAGE_TRANSITION_START: u64 = 75;
const PAGE_TRANSITION_END: u64 = 82;
const DETAIL_FADE_START: u64 = 90;

const URL_FORM: &str = "deaddrop.io/domains/new";
const URL_DETAIL: &str = "deaddrop.io/domains/mycoolproject.com";

/// Scene 1 state vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RegisterDomainState {
    /// Browser chrome address bar content.
    pub url: &'static str,
    /// Form page entrance.
    pub form: FadeSlide,
    /// Form page opacity during the page transition.
    pub form_opacity: f64,
    pub form_interactive: bool,
    /// Revealed prefix of [`DOMAIN`] in the input field.
    pub domain_typed: &'static str,
    pub input_focused: bool,
    pub button_hovered: bool,
    /// Detail page opacity during the page transition.
    pub detail_opacity: f64,
    /// Remaining detail-page entrance offset in pixels.
    pub detail_translate_y: f64,
    pub detail_interactive: bool,
    pub cursor: CursorState,
}

pub fn state(ctx: SampleCtx) -> DemoreelResult<RegisterDomainState> {
    let f = ctx.frame.0;

    let form_opacity = interpolate_clamped(
        f as f64,
        &[(PAGE_TRANSITION_START as f64, 1.0), (PAGE_TRANSITION_END as f64, 0.0)],
    )?;
    let detail_opacity = interpolate_clamped(
        f as f64,
        &[
            ((DETAIL_FADE_START - 8) as f64, 0.0),
            (DETAIL_FADE_START as f64, 1.0),
        ],
    )?;

    // Detail page slides up its last 12 px on a smooth spring.
    let detail_slide = SpringConfig::smooth().sample(f, ctx.fps, DETAIL_FADE_START)?;
    let detail_translate_y = interpolate(
        detail_slide,
        &[(0.0, 12.0), (1.0, 0.0)],
        Extrapolate::Extend,
        Extrapolate::Extend,
    )?;

    let cursor = cursor_state(
        f,
        &[
            (CURSOR_APPEAR as f64, 420.0),
            (CURSOR_MOVE_TO_BTN as f64, 420.0),
            ((CURSOR_MOVE_TO_BTN + 6) as f64, 450.0),
        ],
        &[
            (CURSOR_APPEAR as f64, 380.0),
            (CURSOR_MOVE_TO_BTN as f64, 380.0),
            ((CURSOR_MOVE_TO_BTN + 6) as f64, 478.0),
        ],
        (CURSOR_APPEAR..PAGE_TRANSITION_START).contains(&f),
        (BTN_CLICK_START..=BTN_CLICK_END).contains(&f),
    )?;

    Ok(RegisterDomainState {
        url: if f < PAGE_TRANSITION_END { URL_FORM } else { URL_DETAIL },
        form: fade_in(f, FORM_FADE_START, FORM_FADE_FRAMES, FadeDir::Up)?,
        form_opacity,
        form_interactive: f < PAGE_TRANSITION_END,
        domain_typed: typed_slice(DOMAIN, f, TYPING_START, FRAMES_PER_CHAR)?,
        input_focused: (CURSOR_APPEAR..PAGE_TRANSITION_START).contains(&f),
        button_hovered: (BTN_HOVER_START..PAGE_TRANSITION_START).contains(&f),
        detail_opacity,
        detail_translate_y,
        detail_interactive: f >= DETAIL_FADE_START,
        cursor,
    })
}
