use log::info;
use photomerge::image::io::{load_rgb8, save_sharpness_png};
use photomerge::sharpness::sharpness_map;
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
    let mut args = env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(i), Some(o)) => (i, o),
        _ => return Err("usage: sharpness_demo <input-image> <output.png>".to_string()),
    };

    let frame = load_rgb8(Path::new(&input))?;
    let start = Instant::now();
    let map = sharpness_map(&frame.as_view());
    info!(
        "sharpness map of {}x{} in {:.1} ms",
        frame.width(),
        frame.height(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    save_sharpness_png(&map, Path::new(&output))?;
    let peak = map.data().iter().copied().max().unwrap_or(0);
    println!("map written to {output} (peak response {peak})");
    Ok(())
}
