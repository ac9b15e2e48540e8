use log::info;
use photomerge::config::{load_config, MergeConfig, MergeMode};
use photomerge::image::io::{load_rgb8, save_rgb8};
use photomerge::image::RgbImage;
use photomerge::merge::{
    extreme_brightness, focus_stack, nearest_or_farthest, nearest_to_reference, stack_average,
    Extreme,
};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: merge_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let load_start = Instant::now();
    let frames = config
        .inputs
        .iter()
        .map(|path| load_rgb8(path))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "loaded {} frame(s) in {:.1} ms",
        frames.len(),
        load_start.elapsed().as_secs_f64() * 1000.0
    );

    let merge_start = Instant::now();
    let merged = run_mode(&config, &frames).map_err(|e| format!("Merge failed: {e}"))?;
    info!(
        "{:?} merge took {:.1} ms",
        config.mode,
        merge_start.elapsed().as_secs_f64() * 1000.0
    );

    let (out_width, out_height) = (merged.width(), merged.height());
    save_rgb8(merged, &config.output)?;
    println!(
        "{out_width}x{out_height} result written to {}",
        config.output.display()
    );
    Ok(())
}

fn run_mode(
    config: &MergeConfig,
    frames: &[RgbImage<u8>],
) -> Result<RgbImage<u8>, photomerge::MergeError> {
    let stack: Vec<_> = frames.iter().map(|f| f.as_view()).collect();
    match config.mode {
        MergeMode::Average => stack_average(&stack),
        MergeMode::Nearest => {
            let reference = stack_average(&stack)?;
            nearest_to_reference(&stack, &reference.as_view(), config.metric)
        }
        MergeMode::NearestFarthest => {
            let reference = stack_average(&stack)?;
            nearest_or_farthest(&stack, &reference.as_view(), config.farthest_threshold)
        }
        MergeMode::Lightest => extreme_brightness(&stack, Extreme::Light),
        MergeMode::Darkest => extreme_brightness(&stack, Extreme::Dark),
        MergeMode::Focus => focus_stack(&stack),
    }
}
