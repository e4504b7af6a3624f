pub mod crossfade;
pub mod cursor;
pub mod entrance;

use crate::foundation::core::{Fps, FrameIndex};

/// Explicit per-sample context threaded through every scene state function.
///
/// `frame` is scene-local: segment 0 of every scene starts at frame 0
/// regardless of where the timeline places it. Replacing an ambient
/// "current frame" with this parameter is what keeps scene functions pure
/// and independently testable.
#[derive(Clone, Copy, Debug)]
pub struct SampleCtx {
    pub frame: FrameIndex,
    pub fps: Fps,
}

impl SampleCtx {
    pub fn new(frame: FrameIndex, fps: Fps) -> Self {
        Self { frame, fps }
    }
}
