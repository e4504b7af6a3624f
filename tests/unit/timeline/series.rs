use super::*;
use crate::foundation::core::Fps;

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

/// State fn that records which segment ran and at which local frame.
fn tagged(tag: u64) -> impl Fn(SampleCtx) -> DemoreelResult<(u64, u64)> + Send + Sync {
    move |ctx| Ok((tag, ctx.frame.0))
}

#[test]
fn total_duration_subtracts_transition_overlap() {
    let durations = [60u64, 135, 165, 150, 150, 60];
    let mut builder = TimelineBuilder::new(fps()).segment(durations[0], tagged(0));
    for (i, &d) in durations.iter().enumerate().skip(1) {
        builder = builder
            .transition(15, Ease::Linear)
            .unwrap()
            .segment(d, tagged(i as u64));
    }
    let tl = builder.build().unwrap();
    assert_eq!(tl.total_duration().0, 645); // 720 - 75
    assert_eq!(tl.segment_count(), 6);
    assert_eq!(tl.segment_start(1).unwrap().0, 45);
    assert_eq!(tl.segment_start(5).unwrap().0, 585);
}

#[test]
fn segments_run_on_local_clocks() {
    let tl = TimelineBuilder::new(fps())
        .segment(30, tagged(0))
        .transition(10, Ease::Linear)
        .unwrap()
        .segment(40, tagged(1))
        .build()
        .unwrap();
    assert_eq!(tl.total_duration().0, 60);

    // Before the window: segment 0 alone, local == global.
    match tl.sample(FrameIndex(5)).unwrap() {
        ComposedFrame::Active { index, state } => {
            assert_eq!(index, 0);
            assert_eq!(state, (0, 5));
        }
        other => panic!("expected Active, got {other:?}"),
    }

    // After the window: segment 1 alone, local restarts at its global start.
    match tl.sample(FrameIndex(30)).unwrap() {
        ComposedFrame::Active { index, state } => {
            assert_eq!(index, 1);
            assert_eq!(state, (1, 10));
        }
        other => panic!("expected Active, got {other:?}"),
    }
}

#[test]
fn transition_window_blends_both_neighbors() {
    let tl = TimelineBuilder::new(fps())
        .segment(30, tagged(0))
        .transition(10, Ease::Linear)
        .unwrap()
        .segment(40, tagged(1))
        .build()
        .unwrap();

    // Window spans global frames 20..30.
    for frame in 20..30 {
        match tl.sample(FrameIndex(frame)).unwrap() {
            ComposedFrame::Blend {
                from,
                to,
                outgoing,
                incoming,
                outgoing_opacity,
                incoming_opacity,
                progress,
            } => {
                assert_eq!((from, to), (0, 1));
                assert_eq!(outgoing, (0, frame));
                assert_eq!(incoming, (1, frame - 20));
                assert_eq!(outgoing_opacity + incoming_opacity, 1.0);
                assert!((0.0..=1.0).contains(&progress));
            }
            other => panic!("expected Blend at {frame}, got {other:?}"),
        }
    }

    // Progress covers the full window: 0 at its first frame, 1 at its last.
    let first = tl.sample(FrameIndex(20)).unwrap();
    let last = tl.sample(FrameIndex(29)).unwrap();
    match (first, last) {
        (
            ComposedFrame::Blend { progress: p0, .. },
            ComposedFrame::Blend { progress: p1, .. },
        ) => {
            assert_eq!(p0, 0.0);
            assert_eq!(p1, 1.0);
        }
        other => panic!("expected blends, got {other:?}"),
    }

    // Frame 19 and frame 30 sit just outside the window.
    assert!(matches!(
        tl.sample(FrameIndex(19)).unwrap(),
        ComposedFrame::Active { index: 0, .. }
    ));
    assert!(matches!(
        tl.sample(FrameIndex(30)).unwrap(),
        ComposedFrame::Active { index: 1, .. }
    ));
}

#[test]
fn hard_cut_without_transition() {
    let tl = TimelineBuilder::new(fps())
        .segment(10, tagged(0))
        .segment(10, tagged(1))
        .build()
        .unwrap();
    assert_eq!(tl.total_duration().0, 20);
    assert!(matches!(
        tl.sample(FrameIndex(9)).unwrap(),
        ComposedFrame::Active { index: 0, .. }
    ));
    assert!(matches!(
        tl.sample(FrameIndex(10)).unwrap(),
        ComposedFrame::Active { index: 1, .. }
    ));
}

#[test]
fn out_of_range_frames_are_rejected_not_clamped() {
    let tl = TimelineBuilder::new(fps()).segment(10, tagged(0)).build().unwrap();
    assert!(tl.sample(FrameIndex(9)).is_ok());
    let err = tl.sample(FrameIndex(10)).unwrap_err();
    assert!(matches!(err, DemoreelError::Evaluation(_)));
}

#[test]
fn oversized_transitions_are_rejected() {
    // Longer than the following segment.
    let result = TimelineBuilder::new(fps())
        .segment(30, tagged(0))
        .transition(20, Ease::Linear)
        .unwrap()
        .segment(10, tagged(1))
        .build();
    assert!(result.is_err());

    // Longer than the preceding segment.
    let result = TimelineBuilder::new(fps())
        .segment(10, tagged(0))
        .transition(20, Ease::Linear)
        .unwrap()
        .segment(30, tagged(1))
        .build();
    assert!(result.is_err());

    // A middle segment must outlast both its windows combined.
    let result = TimelineBuilder::new(fps())
        .segment(30, tagged(0))
        .transition(8, Ease::Linear)
        .unwrap()
        .segment(10, tagged(1))
        .transition(8, Ease::Linear)
        .unwrap()
        .segment(30, tagged(2))
        .build();
    assert!(result.is_err());
}

#[test]
fn malformed_builder_sequences_are_rejected() {
    // Leading transition.
    assert!(
        TimelineBuilder::<(u64, u64)>::new(fps())
            .transition(5, Ease::Linear)
            .is_err()
    );

    // Doubled transition.
    assert!(
        TimelineBuilder::new(fps())
            .segment(10, tagged(0))
            .transition(5, Ease::Linear)
            .unwrap()
            .transition(5, Ease::Linear)
            .is_err()
    );

    // Trailing transition.
    assert!(
        TimelineBuilder::new(fps())
            .segment(10, tagged(0))
            .transition(5, Ease::Linear)
            .unwrap()
            .build()
            .is_err()
    );

    // Zero-length pieces.
    assert!(TimelineBuilder::<(u64, u64)>::new(fps()).build().is_err());
    assert!(TimelineBuilder::new(fps()).segment(0, tagged(0)).build().is_err());
    assert!(
        TimelineBuilder::new(fps())
            .segment(10, tagged(0))
            .transition(0, Ease::Linear)
            .is_err()
    );
}

#[test]
fn eased_blends_still_conserve_opacity() {
    let tl = TimelineBuilder::new(fps())
        .segment(20, tagged(0))
        .transition(10, Ease::InOutCubic)
        .unwrap()
        .segment(20, tagged(1))
        .build()
        .unwrap();
    for frame in 10..20 {
        if let ComposedFrame::Blend {
            outgoing_opacity,
            incoming_opacity,
            ..
        } = tl.sample(FrameIndex(frame)).unwrap()
        {
            assert_eq!(outgoing_opacity + incoming_opacity, 1.0);
        } else {
            panic!("expected blend at {frame}");
        }
    }
}
