//! Scene 4: the dashboard.
//!
//! Timeline (150 frames @ 30 fps):
//!   0-29    dashboard with the domain list, unread count ticks up
//!   30-54   cursor hovers and clicks the first domain row
//!   55-89   cross-fade to the domain detail, messages stagger in
//!   90-114  cursor moves to Mark Read on the first message
//!   115-149 the first message settles from unread to read

use crate::animation::interp::{Extrapolate, interpolate, interpolate_clamped};
use crate::animation::spring::SpringConfig;
use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;
use crate::scene::cursor::{CursorState, cursor_state};
use crate::scene::entrance::{FadeDir, FadeSlide, fade_in};

pub const DURATION_FRAMES: u64 = 150;

const BADGE_BOUNCE_FRAME: u64 = 12;
const BADGE_BOUNCE_FRAMES: u64 = 20;
const UNREAD_INCREMENT_FRAME: u64 = 15;
const CURSOR_APPEAR: u64 = 30;
const ROW_HOVER_START: u64 = 35;
const ROW_CLICK: u64 = 45;
const ROW_CLICK_END: u64 = 49;
const DASHBOARD_FADE_START: u64 = 55;
const DASHBOARD_FADE_END: u64 = 62;
const DETAIL_FADE_START: u64 = 63;
const DETAIL_FADE_END: u64 = 70;
const MSG_FADES: [u64; 3] = [65, 70, 75];
const MSG_FADE_FRAMES: u64 = 8;
const MARK_CURSOR_APPEAR: u64 = 90;
const MARK_CURSOR_HOVER: u64 = 96;
const MARK_CURSOR_CLICK: u64 = 100;
const MARK_CURSOR_CLICK_END: u64 = 104;
const STATE_CHANGE_START: u64 = 115;
const STATE_CHANGE_END: u64 = 125;

const URL_DASHBOARD: &str = "deaddrop.io";
const URL_DETAIL: &str = "deaddrop.io/domains/mycoolproject.com";

/// Scene 4 state vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DashboardState {
    pub url: &'static str,
    /// Unread count on the first domain row; ticks 2 -> 3 as a message lands.
    pub unread_count: u32,
    /// Unread badge bounce scale, 1.0 outside the bounce window.
    pub badge_scale: f64,
    pub row_hovered: bool,
    /// Dashboard page entrance.
    pub dashboard: FadeSlide,
    /// Dashboard opacity during the page swap.
    pub dashboard_opacity: f64,
    pub dashboard_interactive: bool,
    /// Detail page opacity during the page swap.
    pub detail_opacity: f64,
    pub detail_interactive: bool,
    /// Staggered message-row entrances.
    pub messages: [FadeSlide; 3],
    /// First message has fully settled to read.
    pub msg1_read: bool,
    /// Unread affordances (left border, dot) fading away.
    pub msg1_unread_opacity: f64,
    pub msg1_show_mark_read: bool,
    pub cursor: CursorState,
}

pub fn state(ctx: SampleCtx) -> DemoreelResult<DashboardState> {
    let f = ctx.frame.0;

    // Badge scale rides the snappy spring's overshoot through a 1 -> 1.15
    // -> 1 arc, gated to the bounce window.
    let badge_scale = if (BADGE_BOUNCE_FRAME..BADGE_BOUNCE_FRAME + BADGE_BOUNCE_FRAMES).contains(&f)
    {
        let bounce = SpringConfig::snappy().sample(f, ctx.fps, BADGE_BOUNCE_FRAME)?;
        interpolate(
            bounce,
            &[(0.0, 1.0), (0.5, 1.15), (1.0, 1.0)],
            Extrapolate::Extend,
            Extrapolate::Extend,
        )?
    } else {
        1.0
    };

    let dashboard_opacity = interpolate_clamped(
        f as f64,
        &[
            (DASHBOARD_FADE_START as f64, 1.0),
            (DASHBOARD_FADE_END as f64, 0.0),
        ],
    )?;
    let detail_opacity = interpolate_clamped(
        f as f64,
        &[(DETAIL_FADE_START as f64, 0.0), (DETAIL_FADE_END as f64, 1.0)],
    )?;

    let mut messages = [FadeSlide {
        opacity: 0.0,
        translate_y: 0.0,
    }; 3];
    for (slot, &start) in messages.iter_mut().zip(MSG_FADES.iter()) {
        *slot = fade_in(f, start, MSG_FADE_FRAMES, FadeDir::Up)?;
    }

    let msg1_unread_opacity = interpolate_clamped(
        f as f64,
        &[
            (STATE_CHANGE_START as f64, 1.0),
            (STATE_CHANGE_END as f64, 0.0),
        ],
    )?;

    // Two cursor passes: the row click on the dashboard, then Mark Read on
    // the detail page.
    let phase2_visible = (CURSOR_APPEAR..DASHBOARD_FADE_START).contains(&f);
    let phase4_visible = (MARK_CURSOR_APPEAR..=MARK_CURSOR_CLICK_END).contains(&f);
    let cursor = if phase2_visible {
        cursor_state(
            f,
            &[
                (CURSOR_APPEAR as f64, 700.0),
                (ROW_HOVER_START as f64, 500.0),
                (ROW_CLICK as f64, 500.0),
            ],
            &[
                (CURSOR_APPEAR as f64, 250.0),
                (ROW_HOVER_START as f64, 290.0),
                (ROW_CLICK as f64, 290.0),
            ],
            true,
            (ROW_CLICK..ROW_CLICK_END).contains(&f),
        )?
    } else {
        cursor_state(
            f,
            &[
                (MARK_CURSOR_APPEAR as f64, 600.0),
                (MARK_CURSOR_HOVER as f64, 330.0),
                (MARK_CURSOR_CLICK as f64, 330.0),
            ],
            &[
                (MARK_CURSOR_APPEAR as f64, 250.0),
                (MARK_CURSOR_HOVER as f64, 390.0),
                (MARK_CURSOR_CLICK as f64, 390.0),
            ],
            phase4_visible,
            (MARK_CURSOR_CLICK..MARK_CURSOR_CLICK_END).contains(&f),
        )?
    };

    Ok(DashboardState {
        url: if f < DASHBOARD_FADE_END {
            URL_DASHBOARD
        } else {
            URL_DETAIL
        },
        unread_count: if f < UNREAD_INCREMENT_FRAME { 2 } else { 3 },
        badge_scale,
        row_hovered: (ROW_HOVER_START..DASHBOARD_FADE_START).contains(&f),
        dashboard: fade_in(f, 0, 12, FadeDir::Up)?,
        dashboard_opacity,
        dashboard_interactive: f < DASHBOARD_FADE_END,
        detail_opacity,
        detail_interactive: f >= DETAIL_FADE_START,
        messages,
        msg1_read: f >= STATE_CHANGE_END,
        msg1_unread_opacity,
        msg1_show_mark_read: f < STATE_CHANGE_START,
        cursor,
    })
}
