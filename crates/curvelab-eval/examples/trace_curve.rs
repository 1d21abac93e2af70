//! Grow a curve from the default two points and print every family's polyline
//! summary as JSON.
//!
//! Usage: `RUST_LOG=debug cargo run -p curvelab-eval --example trace_curve -- [points] [seed]`

use curvelab_core::Result;
use curvelab_eval::{CurveEvaluator, CurveFamily, EvaluatorConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let extra: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(6);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let config = EvaluatorConfig::new(24, CurveFamily::Hermite);
    let mut evaluator = CurveEvaluator::with_initial_points(config, &mut rng)?;
    for _ in 0..extra {
        evaluator.generate_next_segment(&mut rng)?;
    }

    let mut report = Vec::new();
    for family in CurveFamily::ALL {
        let line = evaluator.select_family(family)?;
        let bounds = line.bounds();
        report.push(json!({
            "family": family,
            "samples": line.len(),
            "first": line.first().map(|p| p.to_array()),
            "last": line.last().map(|p| p.to_array()),
            "bounds": bounds,
        }));
    }

    let control_points: Vec<_> = evaluator
        .points()
        .positions()
        .iter()
        .map(|p| p.to_array())
        .collect();
    let out = json!({ "control_points": control_points, "curves": report });
    match serde_json::to_string_pretty(&out) {
        Ok(text) => println!("{}", text),
        Err(e) => log::error!("Failed to serialize report: {}", e),
    }
    Ok(())
}
