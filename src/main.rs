use photomerge::image::RgbImage;
use photomerge::merge::{extreme_brightness, nearest_to_reference, stack_average, Extreme};
use photomerge::metrics::DistanceMetric;
use photomerge::MergeError;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), MergeError> {
    // Demo stub: a synthetic three-frame burst, two exposures of a static
    // scene and one with a bright streak across it.
    let w = 320usize;
    let h = 240usize;
    let mut still = RgbImage::<u8>::new(w, h)?;
    let mut streaked = RgbImage::<u8>::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let base = [(x / 2) as u8, (y / 2) as u8, 96];
            still.put_pixel(x, y, base);
            let on_streak = x >= 40 && x < 280 && (y as i32 - (x / 2) as i32).abs() < 4;
            streaked.put_pixel(x, y, if on_streak { [255, 240, 200] } else { base });
        }
    }
    let stack = [still.as_view(), still.as_view(), streaked.as_view()];

    let light = extreme_brightness(&stack, Extreme::Light)?;
    let reference = stack_average(&stack)?;
    let calm = nearest_to_reference(&stack, &reference.as_view(), DistanceMetric::ChannelDelta)?;

    println!(
        "light merge keeps the streak:   {:?} -> {:?}",
        still.pixel(120, 60),
        light.pixel(120, 60)
    );
    println!(
        "nearest-to-mean suppresses it:  {:?} -> {:?}",
        streaked.pixel(120, 60),
        calm.pixel(120, 60)
    );
    Ok(())
}
