use mag_hole_detector::{DetectionConfig, HoleDetector, Signal};
use nalgebra::Vector3;

fn main() {
    // Demo stub: a 10 Hz flat field with one 2 s magnetic hole
    let n = 600usize;
    let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
    let magnitude: Vec<f64> = (0..n)
        .map(|i| {
            let k = i as f64 - 300.0;
            if k.abs() <= 10.0 {
                10.0 - 2.5 * (1.0 + (std::f64::consts::PI * k / 10.0).cos())
            } else {
                10.0
            }
        })
        .collect();
    let vector: Vec<Vector3<f64>> = magnitude
        .iter()
        .map(|&b| Vector3::new(0.0, 0.0, b))
        .collect();

    let det = HoleDetector::new(DetectionConfig::default());
    match det.process(Signal::new(&times, &magnitude, &vector)) {
        Ok((holes, stats)) => println!(
            "holes={} candidates={} aborted={}",
            holes.len(),
            stats.candidates,
            stats.aborted()
        ),
        Err(err) => eprintln!("detection failed: {err}"),
    }
}
