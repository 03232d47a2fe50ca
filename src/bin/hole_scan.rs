use mag_hole_detector::config::load_config;
use mag_hole_detector::io::{load_signal_json, write_json_file};
use mag_hole_detector::{detect_parallel, DetectionReport, HoleDetector};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let buffer = load_signal_json(&config.input_path)?;
    let signal = buffer.as_view();

    let report = match config.output.chunk_seconds {
        Some(chunk_seconds) => {
            let (holes, stats) = detect_parallel(signal, &config.detection, chunk_seconds)
                .map_err(|e| e.to_string())?;
            DetectionReport {
                holes,
                stats,
                ..Default::default()
            }
        }
        None => HoleDetector::new(config.detection.clone())
            .process_with_diagnostics(signal)
            .map_err(|e| e.to_string())?,
    };

    println!(
        "Scanned {} samples: {} holes from {} candidates",
        signal.len(),
        report.holes.len(),
        report.stats.candidates
    );
    for hole in &report.holes {
        println!(
            "  {:>10.3}s .. {:>10.3}s  min={:.3} depth={:.1}%  W={}",
            hole.start_time,
            hole.end_time,
            hole.min_value,
            hole.depth_percent,
            hole.w_angle_deg
                .map(|w| format!("{w:.1}°"))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: hole_scan <config.json>".to_string()
}
