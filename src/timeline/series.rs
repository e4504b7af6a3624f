//! Segment/transition timeline composition.
//!
//! A timeline is an ordered run of fixed-duration segments, each owning a
//! pure scene state function, optionally joined by cross-fade transitions.
//! A transition of `d` frames overlaps the final `d` frames of the segment
//! before it with the first `d` frames of the segment after it, so the
//! composed length is `sum(segments) - sum(transitions)`.

use crate::animation::ease::Ease;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{DemoreelError, DemoreelResult};
use crate::scene::SampleCtx;

/// Scene state function: local frame context in, state vector out.
pub type StateFn<S> = dyn Fn(SampleCtx) -> DemoreelResult<S> + Send + Sync;

/// Overlap window between two adjacent segments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Window length in frames, consumed from both neighbors.
    pub duration: u64,
    /// Blend curve shaping the incoming weight across the window.
    pub curve: Ease,
}

struct Segment<S> {
    duration: u64,
    /// Global frame at which this segment's local clock starts.
    start: FrameIndex,
    state_fn: Box<StateFn<S>>,
}

/// One sampled frame of a composed timeline.
///
/// During a transition window both neighbors are evaluated (each on its own
/// local clock) and handed to the consumer with their blend weights;
/// compositing order is outgoing-under, incoming-over. Everywhere else
/// exactly one segment is active.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ComposedFrame<S> {
    /// A single segment is active.
    Active {
        /// Segment index in authoring order.
        index: usize,
        state: S,
    },
    /// Two segments blend inside a transition window.
    Blend {
        /// Index of the outgoing (earlier) segment.
        from: usize,
        /// Index of the incoming (later) segment.
        to: usize,
        /// Curve-shaped progress through the window: 0 at its first frame,
        /// exactly 1 at its last.
        progress: f64,
        /// Opacity of the outgoing state; `1 - incoming_opacity`.
        outgoing_opacity: f64,
        /// Opacity of the incoming state.
        incoming_opacity: f64,
        outgoing: S,
        incoming: S,
    },
}

/// A validated, immutable composition of segments and transitions.
///
/// Sampling is stateless and O(number of segments): seeking to an arbitrary
/// frame never replays earlier frames.
pub struct Timeline<S> {
    fps: Fps,
    segments: Vec<Segment<S>>,
    /// Join after segment `i`; `None` is a hard cut.
    joins: Vec<Option<Transition>>,
    total: FrameIndex,
}

impl<S> Timeline<S> {
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Composed length: `sum(segment durations) - sum(transition durations)`.
    pub fn total_duration(&self) -> FrameIndex {
        self.total
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Authored duration of segment `index`, before transition overlap.
    pub fn segment_duration(&self, index: usize) -> Option<u64> {
        self.segments.get(index).map(|s| s.duration)
    }

    /// Global frame at which segment `index`'s local clock starts.
    pub fn segment_start(&self, index: usize) -> Option<FrameIndex> {
        self.segments.get(index).map(|s| s.start)
    }

    /// Evaluate the composed state at a global frame.
    ///
    /// Frames outside `[0, total_duration)` are rejected with an evaluation
    /// error; the engine never clamps a query to a different frame.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn sample(&self, frame: FrameIndex) -> DemoreelResult<ComposedFrame<S>> {
        if frame.0 >= self.total.0 {
            return Err(DemoreelError::evaluation(format!(
                "frame {} is out of bounds (composed duration {})",
                frame.0, self.total.0
            )));
        }

        // Last segment whose global start is at or before the frame. Inside
        // a transition window that is always the incoming segment.
        let idx = self
            .segments
            .iter()
            .rposition(|seg| seg.start.0 <= frame.0)
            .unwrap_or(0);
        let seg = &self.segments[idx];
        let local = frame.0 - seg.start.0;

        if idx > 0
            && let Some(join) = self.joins[idx - 1]
            && local < join.duration
        {
            let prev = &self.segments[idx - 1];
            let outgoing = (prev.state_fn)(self.ctx(frame.0 - prev.start.0))?;
            let incoming = (seg.state_fn)(self.ctx(local))?;

            let denom = join.duration.saturating_sub(1);
            let t = if denom == 0 {
                1.0
            } else {
                (local as f64) / (denom as f64)
            };
            let progress = join.curve.apply(t);

            return Ok(ComposedFrame::Blend {
                from: idx - 1,
                to: idx,
                progress,
                outgoing_opacity: 1.0 - progress,
                incoming_opacity: progress,
                outgoing,
                incoming,
            });
        }

        let state = (seg.state_fn)(self.ctx(local))?;
        Ok(ComposedFrame::Active { index: idx, state })
    }

    fn ctx(&self, local: u64) -> SampleCtx {
        SampleCtx::new(FrameIndex(local), self.fps)
    }
}

/// Builder for [`Timeline`]: alternate [`segment`](Self::segment) and
/// [`transition`](Self::transition) calls, then [`build`](Self::build).
pub struct TimelineBuilder<S> {
    fps: Fps,
    segments: Vec<(u64, Box<StateFn<S>>)>,
    joins: Vec<Option<Transition>>,
    pending: Option<Transition>,
}

impl<S> TimelineBuilder<S> {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            segments: Vec::new(),
            joins: Vec::new(),
            pending: None,
        }
    }

    /// Append a segment of `duration` frames driven by `state_fn`.
    pub fn segment(
        mut self,
        duration: u64,
        state_fn: impl Fn(SampleCtx) -> DemoreelResult<S> + Send + Sync + 'static,
    ) -> Self {
        if !self.segments.is_empty() {
            self.joins.push(self.pending.take());
        }
        self.segments.push((duration, Box::new(state_fn)));
        self
    }

    /// Insert a transition between the previous segment and the next one.
    pub fn transition(mut self, duration: u64, curve: Ease) -> DemoreelResult<Self> {
        if self.segments.is_empty() {
            return Err(DemoreelError::validation(
                "a transition requires a preceding segment",
            ));
        }
        if self.pending.is_some() {
            return Err(DemoreelError::validation(
                "consecutive transitions are not allowed",
            ));
        }
        if duration == 0 {
            return Err(DemoreelError::validation("transition duration must be > 0"));
        }
        self.pending = Some(Transition { duration, curve });
        Ok(self)
    }

    /// Validate and build the immutable timeline.
    pub fn build(self) -> DemoreelResult<Timeline<S>> {
        if self.segments.is_empty() {
            return Err(DemoreelError::validation(
                "a timeline requires at least one segment",
            ));
        }
        if self.pending.is_some() {
            return Err(DemoreelError::validation("a timeline must end with a segment"));
        }

        let durations: Vec<u64> = self.segments.iter().map(|(d, _)| *d).collect();
        for (i, &d) in durations.iter().enumerate() {
            if d == 0 {
                return Err(DemoreelError::validation(format!(
                    "segment {i} duration must be > 0"
                )));
            }
        }
        for (i, join) in self.joins.iter().enumerate() {
            let Some(tr) = join else { continue };
            if tr.duration > durations[i] || tr.duration > durations[i + 1] {
                return Err(DemoreelError::validation(format!(
                    "transition after segment {i} ({} frames) exceeds a neighboring segment",
                    tr.duration
                )));
            }
        }
        // A segment flanked by two transitions must be long enough that the
        // windows do not meet; otherwise three scenes would be live at once.
        for i in 1..durations.len().saturating_sub(1) {
            let t_in = self.joins[i - 1].map_or(0, |t| t.duration);
            let t_out = self.joins[i].map_or(0, |t| t.duration);
            if t_in + t_out > durations[i] {
                return Err(DemoreelError::validation(format!(
                    "segment {i} is shorter than its combined transition windows"
                )));
            }
        }

        let mut segments = Vec::with_capacity(self.segments.len());
        let mut start = 0u64;
        let mut total = 0u64;
        for (i, (duration, state_fn)) in self.segments.into_iter().enumerate() {
            if i > 0 {
                let overlap = self.joins[i - 1].map_or(0, |t| t.duration);
                start = start + durations[i - 1] - overlap;
            }
            total = start + duration;
            segments.push(Segment {
                duration,
                start: FrameIndex(start),
                state_fn,
            });
        }

        Ok(Timeline {
            fps: self.fps,
            segments,
            joins: self.joins,
            total: FrameIndex(total),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/series.rs"]
mod tests;
