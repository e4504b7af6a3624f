//! Scene 3: embedding the widget on a user site.
//!
//! Timeline (150 frames @ 30 fps):
//!   0-29    embed-code panel on the domain detail page, code copied
//!   30-59   cross-fade to the user's mock website, script-tag toast
//!   60-74   widget button pops in on the mock site
//!   75-124  widget panel opens, the contact form types itself
//!   125-149 success state

use crate::animation::interp::interpolate_clamped;
use crate::animation::spring::SpringConfig;
use crate::animation::text::typed_slice;
use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;
use crate::scene::cursor::{CursorState, cursor_state};
use crate::scene::entrance::{ScalePop, SlideDir, SlideOffset, scale_in, slide_in};

pub const DURATION_FRAMES: u64 = 150;

pub const NAME_TEXT: &str = "Jane Smith";
pub const EMAIL_TEXT: &str = "jane@example.com";
pub const MESSAGE_TEXT: &str = "Love the project! How can I contribute?";

const CURSOR_APPEAR: u64 = 8;
const CURSOR_CLICK: u64 = 16;
const CURSOR_CLICK_END: u64 = 20;
const COPIED_APPEAR: u64 = 22;
const CROSSFADE_START: u64 = 30;
const CROSSFADE_END: u64 = 38;
const SITE_FADE_IN_START: u64 = 34;
const SITE_FADE_IN_END: u64 = 44;
const SCRIPT_OVERLAY_APPEAR: u64 = 48;
const SCRIPT_OVERLAY_GONE: u64 = 58;
const WIDGET_BTN_APPEAR: u64 = 60;
const WIDGET_CLICK: u64 = 75;
const PANEL_OPEN: u64 = 78;
const NAME_TYPE_START: u64 = 82;
const EMAIL_TYPE_START: u64 = 92;
const MSG_TYPE_START: u64 = 104;
const SEND_CURSOR_MOVE: u64 = 122;
const SEND_CLICK: u64 = 124;
const SUCCESS_TRANSITION_START: u64 = 125;
const SUCCESS_TRANSITION_END: u64 = 130;
const FIELD_FPC: u64 = 2;

const URL_APP: &str = "deaddrop.io/domains/mycoolproject.com";
const URL_SITE: &str = "mycoolproject.com";

/// Panel counts as open once its spring clears this much progress.
const PANEL_OPEN_PROGRESS: f64 = 0.1;

/// Scene 3 state vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EmbedWidgetState {
    pub url: &'static str,
    /// Domain detail page is still mounted.
    pub app_visible: bool,
    pub app_opacity: f64,
    /// Mock website is mounted.
    pub site_visible: bool,
    pub site_opacity: f64,
    /// "COPIED!" pop while on screen.
    pub copied: Option<ScalePop>,
    /// Script-tag toast near the bottom of the mock site.
    pub script_toast_visible: bool,
    pub script_toast_opacity: f64,
    pub script_toast: SlideOffset,
    /// Floating widget button.
    pub widget_button_visible: bool,
    pub widget_button_scale: f64,
    /// Contact panel.
    pub panel_mounted: bool,
    pub panel_open: bool,
    pub panel_progress: f64,
    pub panel_opacity: f64,
    /// Type-on form fields.
    pub name_typed: &'static str,
    pub email_typed: &'static str,
    pub message_typed: &'static str,
    /// Success card.
    pub success_visible: bool,
    pub success_opacity: f64,
    pub cursor: CursorState,
}

pub fn state(ctx: SampleCtx) -> DemoreelResult<EmbedWidgetState> {
    let f = ctx.frame.0;

    let app_opacity = interpolate_clamped(
        f as f64,
        &[(CROSSFADE_START as f64, 1.0), (CROSSFADE_END as f64, 0.0)],
    )?;
    let site_opacity = interpolate_clamped(
        f as f64,
        &[(SITE_FADE_IN_START as f64, 0.0), (SITE_FADE_IN_END as f64, 1.0)],
    )?;

    // The toast pulses in and out over its ten-frame life.
    let script_toast_opacity = interpolate_clamped(
        f as f64,
        &[
            (SCRIPT_OVERLAY_APPEAR as f64, 0.0),
            ((SCRIPT_OVERLAY_APPEAR + 4) as f64, 1.0),
            ((SCRIPT_OVERLAY_GONE - 4) as f64, 1.0),
            (SCRIPT_OVERLAY_GONE as f64, 0.0),
        ],
    )?;

    // The button pops from nothing on the raw spring progress, overshoot
    // included.
    let widget_button_scale = SpringConfig::snappy().sample(f, ctx.fps, WIDGET_BTN_APPEAR)?;
    let panel_progress = SpringConfig::smooth().sample(f, ctx.fps, PANEL_OPEN)?;
    let panel_mounted = (PANEL_OPEN..SUCCESS_TRANSITION_START).contains(&f);
    let panel_opacity = interpolate_clamped(
        f as f64,
        &[
            (SUCCESS_TRANSITION_START as f64, 1.0),
            (SUCCESS_TRANSITION_END as f64, 0.0),
        ],
    )?;
    let success_opacity = interpolate_clamped(
        f as f64,
        &[
            (SUCCESS_TRANSITION_START as f64, 0.0),
            (SUCCESS_TRANSITION_END as f64, 1.0),
        ],
    )?;

    // Two cursor passes: over the embed code early, then through the widget
    // interaction. Whichever is on screen drives the overlay.
    let phase1_visible = (CURSOR_APPEAR..CROSSFADE_START).contains(&f);
    let phase34_visible = f >= WIDGET_BTN_APPEAR && f <= SEND_CLICK;
    let cursor = if phase1_visible {
        cursor_state(
            f,
            &[(CURSOR_APPEAR as f64, 600.0), (CURSOR_CLICK as f64, 480.0)],
            &[(CURSOR_APPEAR as f64, 300.0), (CURSOR_CLICK as f64, 440.0)],
            true,
            (CURSOR_CLICK..CURSOR_CLICK_END).contains(&f),
        )?
    } else {
        cursor_state(
            f,
            &[
                (WIDGET_BTN_APPEAR as f64, 700.0),   // drifting in
                ((WIDGET_CLICK - 2) as f64, 830.0),  // approaching the button
                (WIDGET_CLICK as f64, 830.0),
                ((PANEL_OPEN + 2) as f64, 830.0),    // hold near the button
                (SEND_CURSOR_MOVE as f64, 790.0),    // over to send
                (SEND_CLICK as f64, 790.0),
            ],
            &[
                (WIDGET_BTN_APPEAR as f64, 500.0),
                ((WIDGET_CLICK - 2) as f64, 720.0),
                (WIDGET_CLICK as f64, 720.0),
                ((PANEL_OPEN + 2) as f64, 720.0),
                (SEND_CURSOR_MOVE as f64, 620.0),
                (SEND_CLICK as f64, 620.0),
            ],
            phase34_visible,
            (WIDGET_CLICK..WIDGET_CLICK + 4).contains(&f)
                || (SEND_CLICK..=SEND_CLICK + 3).contains(&f),
        )?
    };

    Ok(EmbedWidgetState {
        url: if f < CROSSFADE_END { URL_APP } else { URL_SITE },
        app_visible: f < CROSSFADE_END,
        app_opacity,
        site_visible: f >= SITE_FADE_IN_START,
        site_opacity,
        copied: if (COPIED_APPEAR..CROSSFADE_START).contains(&f) {
            Some(scale_in(ctx, COPIED_APPEAR, SpringConfig::snappy())?)
        } else {
            None
        },
        script_toast_visible: (SCRIPT_OVERLAY_APPEAR..=SCRIPT_OVERLAY_GONE).contains(&f),
        script_toast_opacity,
        script_toast: slide_in(ctx, SCRIPT_OVERLAY_APPEAR, SlideDir::Down)?,
        widget_button_visible: f >= WIDGET_BTN_APPEAR,
        widget_button_scale,
        panel_mounted,
        panel_open: panel_mounted && panel_progress > PANEL_OPEN_PROGRESS,
        panel_progress,
        panel_opacity,
        name_typed: typed_slice(NAME_TEXT, f, NAME_TYPE_START, FIELD_FPC)?,
        email_typed: typed_slice(EMAIL_TEXT, f, EMAIL_TYPE_START, FIELD_FPC)?,
        message_typed: typed_slice(MESSAGE_TEXT, f, MSG_TYPE_START, FIELD_FPC)?,
        success_visible: f >= SUCCESS_TRANSITION_START,
        success_opacity,
        cursor,
    })
}
