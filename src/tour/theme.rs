//! Shared visual constants of the tour: palette, canvas, and frame rate.

use crate::foundation::core::{Canvas, Fps, Rgb8};

pub const BG: Rgb8 = Rgb8::new(0xf5, 0xf0, 0xe8);
pub const INK: Rgb8 = Rgb8::new(0x0a, 0x0a, 0x0a);
pub const RED: Rgb8 = Rgb8::new(0xff, 0x22, 0x00);
pub const GREEN: Rgb8 = Rgb8::new(0x22, 0xc5, 0x5e);
pub const YELLOW: Rgb8 = Rgb8::new(0xea, 0xb3, 0x08);
pub const GRAY: Rgb8 = Rgb8::new(0x88, 0x88, 0x88);
pub const CODE_GOLD: Rgb8 = Rgb8::new(0xff, 0xd7, 0x00);

/// Output rate of the whole tour.
pub const VIDEO_FPS: Fps = Fps { num: 30, den: 1 };

/// Output canvas of the whole tour.
pub const VIDEO_CANVAS: Canvas = Canvas {
    width: 1920,
    height: 1080,
};
