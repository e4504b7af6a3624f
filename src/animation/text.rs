//! Type-on text reveal.
//!
//! Character reveal is a pure function of the frame: before `start` nothing
//! is visible, then one character appears every `frames_per_char` frames
//! until the text saturates. The caret blinks on a fixed 16-frame cycle and
//! retires shortly after typing completes.

use crate::foundation::error::{DemoreelError, DemoreelResult};

/// Caret blink cycle length in frames.
const CARET_CYCLE: u64 = 16;

/// Frames the caret stays around after the last character appears.
const CARET_HOLD: u64 = 10;

/// Number of characters revealed at `frame`, saturating at `char_count`.
pub fn revealed_chars(
    frame: u64,
    start: u64,
    frames_per_char: u64,
    char_count: usize,
) -> DemoreelResult<usize> {
    if frames_per_char == 0 {
        return Err(DemoreelError::animation("frames_per_char must be > 0"));
    }
    if frame < start {
        return Ok(0);
    }
    let revealed = (frame - start) / frames_per_char;
    Ok(usize::try_from(revealed).unwrap_or(usize::MAX).min(char_count))
}

/// The revealed prefix of `text` at `frame` (char-boundary safe).
pub fn typed_slice<'a>(
    text: &'a str,
    frame: u64,
    start: u64,
    frames_per_char: u64,
) -> DemoreelResult<&'a str> {
    let n = revealed_chars(frame, start, frames_per_char, text.chars().count())?;
    match text.char_indices().nth(n) {
        Some((byte, _)) => Ok(&text[..byte]),
        None => Ok(text),
    }
}

/// Total frames needed to reveal all of `text`.
pub fn type_on_frames(text: &str, frames_per_char: u64) -> u64 {
    text.chars().count() as u64 * frames_per_char
}

/// Caret opacity on the 16-frame blink cycle: solid for the first quarter,
/// fading out over the second, dark for the third, fading back over the last.
pub fn caret_opacity(frame: u64) -> f64 {
    let p = (frame % CARET_CYCLE) as f64;
    if p < 4.0 {
        1.0
    } else if p < 8.0 {
        1.0 - (p - 4.0) / 4.0
    } else if p < 12.0 {
        0.0
    } else {
        (p - 12.0) / 4.0
    }
}

/// Whether the caret is still shown: it survives typing and a short hold
/// afterwards, then disappears for good.
pub fn caret_visible(
    text: &str,
    frame: u64,
    start: u64,
    frames_per_char: u64,
) -> DemoreelResult<bool> {
    if frames_per_char == 0 {
        return Err(DemoreelError::animation("frames_per_char must be > 0"));
    }
    let finish = start + type_on_frames(text, frames_per_char);
    Ok(frame <= finish + CARET_HOLD)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/text.rs"]
mod tests;
