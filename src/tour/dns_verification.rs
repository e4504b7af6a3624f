//! Scene 2: DNS verification.
//!
//! Timeline (165 frames @ 30 fps):
//!   0-29    domain detail page, cursor copies the TXT record
//!   30-44   cross-fade to the DNS provider panel
//!   45-104  new TXT row appears, the record value is typed
//!   105-114 cursor clicks Save
//!   115-139 cross-fade back to DeadDrop, cursor clicks the check button
//!   140-164 verification success: badge pops, panel turns green

use crate::animation::interp::interpolate_clamped;
use crate::animation::spring::SpringConfig;
use crate::animation::text::typed_slice;
use crate::foundation::core::Rgb8;
use crate::foundation::error::DemoreelResult;
use crate::scene::SampleCtx;
use crate::scene::crossfade::{crossfade, interactive};
use crate::scene::cursor::{CursorState, cursor_state};
use crate::scene::entrance::{ScalePop, scale_in};
use crate::tour::theme;

pub const DURATION_FRAMES: u64 = 165;

pub const TXT_VALUE: &str = "deaddrop-verify=a9c55678-1234-5678-abcd-ef0123456789";

const CURSOR_APPEAR: u64 = 10;
const COPIED_APPEAR: u64 = 20;
const CROSSFADE_TO_DNS_START: u64 = 30;
const CROSSFADE_TO_DNS_END: u64 = 44;
const NEW_ROW_APPEAR: u64 = 48;
const DNS_TYPING_START: u64 = 52;
const DNS_TYPING_FPC: u64 = 1;
const SAVE_MOVE_START: u64 = 105;
const SAVE_CLICK_START: u64 = 108;
const SAVE_CLICK_END: u64 = 112;
const CROSSFADE_BACK_START: u64 = 115;
const CROSSFADE_BACK_END: u64 = 124;
const CHECK_MOVE_START: u64 = 125;
const CHECK_CLICK_START: u64 = 130;
const CHECK_CLICK_END: u64 = 134;
const VERIFY_SUCCESS_START: u64 = 140;
const BORDER_BLEND_FRAMES: u64 = 10;

const URL_APP: &str = "deaddrop.io/domains/mycoolproject.com";
const URL_DNS: &str = "dash.cloudflare.com/dns/mycoolproject.com";

/// Frame at which the TXT record finishes typing.
const DNS_TYPING_END: u64 = DNS_TYPING_START + TXT_VALUE.len() as u64 * DNS_TYPING_FPC;

/// Scene 2 state vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DnsVerificationState {
    pub url: &'static str,
    /// DeadDrop page opacity across both cross-fades.
    pub app_opacity: f64,
    pub app_interactive: bool,
    /// DNS provider panel opacity.
    pub dns_opacity: f64,
    pub dns_interactive: bool,
    /// "COPIED!" tooltip pop while it is on screen.
    pub copied: Option<ScalePop>,
    /// The new TXT row exists in the DNS table.
    pub new_row_visible: bool,
    /// Revealed prefix of [`TXT_VALUE`] in the new row.
    pub txt_typed: &'static str,
    /// Verification has landed.
    pub verified: bool,
    /// Verification panel border, blending yellow to green on success.
    pub panel_border: Rgb8,
    /// Badge bounce once verified.
    pub badge_pop: Option<ScalePop>,
    pub check_hovered: bool,
    pub cursor: CursorState,
}

pub fn state(ctx: SampleCtx) -> DemoreelResult<DnsVerificationState> {
    let f = ctx.frame.0;

    let to_dns = crossfade(f, CROSSFADE_TO_DNS_START, CROSSFADE_TO_DNS_END)?;
    let back = crossfade(f, CROSSFADE_BACK_START, CROSSFADE_BACK_END)?;

    // The DeadDrop page is gone only while the DNS panel owns the screen.
    let dns_owns_screen = (CROSSFADE_TO_DNS_START..CROSSFADE_BACK_END).contains(&f);
    let app_opacity = if dns_owns_screen {
        if f < CROSSFADE_TO_DNS_END {
            to_dns.outgoing
        } else if f >= CROSSFADE_BACK_START {
            back.incoming
        } else {
            0.0
        }
    } else {
        1.0
    };
    let dns_opacity = if f < CROSSFADE_TO_DNS_START {
        0.0
    } else if f < CROSSFADE_BACK_START {
        to_dns.incoming
    } else {
        back.outgoing
    };

    let verified = f >= VERIFY_SUCCESS_START;
    let border_t = interpolate_clamped(
        f as f64,
        &[
            (VERIFY_SUCCESS_START as f64, 0.0),
            ((VERIFY_SUCCESS_START + BORDER_BLEND_FRAMES) as f64, 1.0),
        ],
    )?;

    let copied = if (COPIED_APPEAR..CROSSFADE_TO_DNS_START).contains(&f) {
        Some(scale_in(ctx, COPIED_APPEAR, SpringConfig::snappy())?)
    } else {
        None
    };
    let badge_pop = if verified {
        Some(scale_in(ctx, VERIFY_SUCCESS_START, SpringConfig::bouncy())?)
    } else {
        None
    };

    let cursor = cursor_state(
        f,
        &[
            (CURSOR_APPEAR as f64, 500.0),          // entering from the right
            (COPIED_APPEAR as f64, 460.0),          // at the code block
            (CROSSFADE_TO_DNS_END as f64, 580.0),   // DNS content field
            (DNS_TYPING_END as f64, 580.0),         // holds while typing
            (SAVE_MOVE_START as f64, 780.0),        // over to Save
            ((SAVE_CLICK_START) as f64, 780.0),     // at Save
            (CROSSFADE_BACK_END as f64, 340.0),     // back on DeadDrop
            (CHECK_MOVE_START as f64, 340.0),
            ((CHECK_MOVE_START + 4) as f64, 340.0), // at the check button
        ],
        &[
            (CURSOR_APPEAR as f64, 350.0),
            (COPIED_APPEAR as f64, 420.0),
            (CROSSFADE_TO_DNS_END as f64, 340.0),
            (DNS_TYPING_END as f64, 340.0),
            (SAVE_MOVE_START as f64, 560.0),
            ((SAVE_CLICK_START) as f64, 560.0),
            (CROSSFADE_BACK_END as f64, 530.0),
            (CHECK_MOVE_START as f64, 530.0),
            ((CHECK_MOVE_START + 4) as f64, 530.0),
        ],
        (CURSOR_APPEAR..VERIFY_SUCCESS_START).contains(&f),
        (SAVE_CLICK_START..=SAVE_CLICK_END).contains(&f)
            || (CHECK_CLICK_START..=CHECK_CLICK_END).contains(&f),
    )?;

    Ok(DnsVerificationState {
        url: if dns_owns_screen { URL_DNS } else { URL_APP },
        app_opacity,
        app_interactive: interactive(app_opacity),
        dns_opacity,
        dns_interactive: interactive(dns_opacity),
        copied,
        new_row_visible: f >= NEW_ROW_APPEAR,
        txt_typed: typed_slice(TXT_VALUE, f, DNS_TYPING_START, DNS_TYPING_FPC)?,
        verified,
        panel_border: Rgb8::mix(theme::YELLOW, theme::GREEN, border_t),
        badge_pop,
        check_hovered: (CHECK_MOVE_START..VERIFY_SUCCESS_START).contains(&f),
        cursor,
    })
}
