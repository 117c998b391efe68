//! Step throughput for both rules under serial and parallel passes

use std::time::Instant;

use conway_machine::domain::{Field, Fill, RuleConfig, RuleEngine, RuleKind, Strategy};

fn benchmark_step(kind: RuleKind, strategy: Strategy, size: u32, iterations: u32) -> Option<f64> {
    let config = RuleConfig::default().with_rule_kind(kind);
    let engine = RuleEngine::new(strategy);
    let mut field = match Field::new(kind, size, size, Fill::Random) {
        Ok(field) => field,
        Err(err) => {
            eprintln!("{}x{}: {}", size, size, err);
            return None;
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(err) = engine.step(&mut field, &config) {
            eprintln!("{} step failed: {}", kind.name(), err);
            return None;
        }
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn cell(ms: Option<f64>) -> String {
    ms.map_or_else(|| format!("{:>12}", "-"), |ms| format!("{:>12.3}", ms))
}

fn main() {
    println!("=== Step Benchmark (ms per generation) ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    for kind in RuleKind::all() {
        println!("--- {} ---", kind.name());
        println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
        println!("{:-<48}", "");

        for size in sizes {
            let serial = benchmark_step(kind, Strategy::Serial, size, iterations);
            let parallel = benchmark_step(kind, Strategy::Parallel, size, iterations);
            let speedup = match (serial, parallel) {
                (Some(s), Some(p)) if p > 0.0 => format!("{:>9.1}x", s / p),
                _ => format!("{:>10}", "-"),
            };
            println!(
                "{:>10} {} {} {}",
                format!("{}x{}", size, size),
                cell(serial),
                cell(parallel),
                speedup
            );
        }
        println!();
    }

    let size = 2048u32;
    let cells = size as f64 * size as f64;
    if let Some(ms) = benchmark_step(RuleKind::LifeAging, Strategy::Auto, size, iterations) {
        println!(
            "Auto at {}x{}: {:.2} ms/gen, {:.1}M cells/sec",
            size,
            size,
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
