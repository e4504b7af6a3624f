//! Batch frame sampling for render consumers.
//!
//! Every frame of a [`Timeline`] is independent, so a range can be sampled
//! sequentially, fanned out across a thread pool, or deduplicated by state
//! fingerprint so hold frames are computed (and later rasterized) once.

use rayon::prelude::*;
use std::collections::HashMap;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{DemoreelError, DemoreelResult};
use crate::timeline::fingerprint::{StateFingerprint, fingerprint_state};
use crate::timeline::series::{ComposedFrame, Timeline};

/// Thread-pool sizing for [`sample_range_parallel`].
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SampleThreading {
    /// Worker count; `None` lets the pool pick.
    pub threads: Option<usize>,
}

/// Bookkeeping from a deduplicating sample pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SampleStats {
    pub frames_total: u64,
    pub frames_sampled: u64,
    pub frames_elided: u64,
}

/// Result of [`sample_unique`]: unique states plus the frame mapping.
pub struct UniqueSamples<S> {
    /// Distinct states in first-appearance order.
    pub states: Vec<ComposedFrame<S>>,
    /// For each frame of the range, the index into `states`.
    pub frame_to_unique: Vec<usize>,
    pub stats: SampleStats,
}

/// Sample every frame of `range` in order.
#[tracing::instrument(skip(timeline))]
pub fn sample_range<S>(
    timeline: &Timeline<S>,
    range: FrameRange,
) -> DemoreelResult<Vec<ComposedFrame<S>>> {
    check_range(timeline, range)?;
    (range.start.0..range.end.0)
        .map(|f| timeline.sample(FrameIndex(f)))
        .collect()
}

/// Sample every frame of `range` across a rayon thread pool.
///
/// Frames are pure and independent, so the output is bit-identical to
/// [`sample_range`] regardless of worker count or scheduling.
#[tracing::instrument(skip(timeline))]
pub fn sample_range_parallel<S: Send>(
    timeline: &Timeline<S>,
    range: FrameRange,
    threading: &SampleThreading,
) -> DemoreelResult<Vec<ComposedFrame<S>>> {
    check_range(timeline, range)?;
    let pool = build_thread_pool(threading.threads)?;
    let sampled: Vec<DemoreelResult<ComposedFrame<S>>> = pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| timeline.sample(FrameIndex(f)))
            .collect()
    });
    sampled.into_iter().collect()
}

/// Sample `range` and collapse frames whose states are identical.
///
/// Hold phases produce long runs of equal states; a render consumer can
/// rasterize `states` once each and replay them via `frame_to_unique`.
#[tracing::instrument(skip(timeline))]
pub fn sample_unique<S: serde::Serialize>(
    timeline: &Timeline<S>,
    range: FrameRange,
) -> DemoreelResult<UniqueSamples<S>> {
    check_range(timeline, range)?;

    let mut states = Vec::new();
    let mut frame_to_unique = Vec::with_capacity(range.len_frames() as usize);
    let mut first_seen: HashMap<StateFingerprint, usize> = HashMap::new();

    for f in range.start.0..range.end.0 {
        let state = timeline.sample(FrameIndex(f))?;
        let fp = fingerprint_state(&state)?;
        if let Some(&slot) = first_seen.get(&fp) {
            frame_to_unique.push(slot);
        } else {
            let slot = states.len();
            states.push(state);
            first_seen.insert(fp, slot);
            frame_to_unique.push(slot);
        }
    }

    let total = frame_to_unique.len() as u64;
    let sampled = states.len() as u64;
    Ok(UniqueSamples {
        states,
        frame_to_unique,
        stats: SampleStats {
            frames_total: total,
            frames_sampled: sampled,
            frames_elided: total.saturating_sub(sampled),
        },
    })
}

fn check_range<S>(timeline: &Timeline<S>, range: FrameRange) -> DemoreelResult<()> {
    if range.end.0 > timeline.total_duration().0 {
        return Err(DemoreelError::evaluation(format!(
            "sample range end {} exceeds composed duration {}",
            range.end.0,
            timeline.total_duration().0
        )));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> DemoreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DemoreelError::validation(
            "sample threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DemoreelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}
