use color_plane::config::demo::{parse_cli, OpSpec};
use color_plane::diagnostics::BufferSummary;
use color_plane::image::io::{load_rgb_image, save_grayscale_f32, save_rgb_f32, write_json_file};
use color_plane::{color, ops, PixelBuffer};
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "color_demo".to_string());
    let config = parse_cli(&program)?;

    let mut buffer = load_rgb_image(&config.input_path)?;
    for op in &config.ops {
        buffer = apply_op(buffer, op)?;
    }

    let summary = BufferSummary::collect(&buffer);
    print_text_summary(&summary);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &summary)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(path) = &config.output.image_out {
        if buffer.channels() == 1 {
            save_grayscale_f32(&buffer, path)?;
        } else {
            save_rgb_f32(&buffer, path)?;
        }
        println!("Image written to {}", path.display());
    }

    Ok(())
}

fn apply_op(mut buffer: PixelBuffer, op: &OpSpec) -> Result<PixelBuffer, String> {
    match op {
        OpSpec::Shift { channel, delta } => ops::shift_channel(&mut buffer, *channel, *delta),
        OpSpec::Scale { channel, factor } => ops::scale_channel(&mut buffer, *channel, *factor),
        OpSpec::Clamp => ops::clamp(&mut buffer),
        OpSpec::Grayscale => return ops::to_grayscale(&buffer).map_err(|e| e.to_string()),
        OpSpec::RgbToHsv => color::rgb_to_hsv(&mut buffer),
        OpSpec::HsvToRgb => color::hsv_to_rgb(&mut buffer),
        OpSpec::RgbToHcl => color::rgb_to_hcl(&mut buffer),
    }
    Ok(buffer)
}

fn print_text_summary(summary: &BufferSummary) {
    println!("Buffer summary");
    println!(
        "  size: {}x{} planes: {}",
        summary.width, summary.height, summary.channels
    );
    for stats in &summary.planes {
        println!(
            "  plane {}: min={:.4} max={:.4} mean={:.4}",
            stats.plane, stats.min, stats.max, stats.mean
        );
    }
}
