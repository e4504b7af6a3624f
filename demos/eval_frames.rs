use demoreel::FrameIndex;
use demoreel::tour::full_tour;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let tour = full_tour()?;
    println!(
        "full tour: {} frames over {} segments at {} fps ({}x{})",
        tour.total_duration().0,
        tour.segment_count(),
        tour.fps().as_f64(),
        demoreel::tour::theme::VIDEO_CANVAS.width,
        demoreel::tour::theme::VIDEO_CANVAS.height,
    );

    for f in [0u64, 30, 50, 100, 250, 400, 600, 644] {
        let state = tour.sample(FrameIndex(f))?;
        println!("frame {f}: {}", serde_json::to_string(&state)?);
    }

    Ok(())
}
