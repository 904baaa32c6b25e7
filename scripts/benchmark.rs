// scripts/benchmark.rs
use fast_ode::comparison::{solve_schemes, SchemeSet};
use fast_ode::math_utils::Timer;
use fast_ode::models::linear_relaxation::LinearRelaxation;
use fast_ode::models::model::ExactSolution;
use fast_ode::solvers::{solve, IntegratorConfig, Scheme};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    nsteps: usize,
    time_ms: f64,
    steps_per_sec: f64,
    value: f64,
    exact_value: f64,
}

impl BenchmarkResult {
    fn abs_error(&self) -> f64 {
        (self.value - self.exact_value).abs()
    }
}

fn run_scheme_benchmarks(problem: &LinearRelaxation) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let step_counts = [1_000, 100_000, 1_000_000];

    for &nsteps in &step_counts {
        println!("Running benchmarks with {} steps...", nsteps);
        let cfg = IntegratorConfig {
            nsteps,
            ..IntegratorConfig::default()
        };

        for scheme in Scheme::ALL {
            let mut timer = Timer::new();
            timer.start();
            let seq = solve(problem, scheme, &cfg).expect("Valid configuration");
            let time_ms = timer.elapsed_ms();
            let (x, y) = seq.last().expect("Non-empty sequence");

            results.push(BenchmarkResult {
                name: scheme.label().to_string(),
                nsteps,
                time_ms,
                steps_per_sec: nsteps as f64 / (time_ms / 1000.0),
                value: y,
                exact_value: problem.exact(x),
            });
        }

        let mut timer = Timer::new();
        timer.start();
        let comparison = solve_schemes(problem, &cfg, SchemeSet::ALL).expect("Valid configuration");
        let time_ms = timer.elapsed_ms();
        let (x, y) = comparison
            .get(Scheme::Rk4)
            .and_then(|s| s.last())
            .expect("RK4 sequence");

        results.push(BenchmarkResult {
            name: "All schemes (parallel)".to_string(),
            nsteps,
            time_ms,
            steps_per_sec: (3 * nsteps) as f64 / (time_ms / 1000.0),
            value: y,
            exact_value: problem.exact(x),
        });
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Steps,Time_ms,Steps_per_sec,Value,Exact_Value,Abs_Error")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.3},{:.0},{:.10},{:.10},{:.3e}",
            result.name,
            result.nsteps,
            result.time_ms,
            result.steps_per_sec,
            result.value,
            result.exact_value,
            result.abs_error()
        )?;
    }

    println!("Results written to {}", filename);
    Ok(())
}

fn main() {
    println!("fast-ode Benchmark Suite");
    println!("========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let problem = LinearRelaxation::default();
    let results = run_scheme_benchmarks(&problem);

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<24} {:>9} {:>11} {:>14} {:>12} {:>10}",
        "Benchmark", "Steps", "Time (ms)", "Steps/sec", "y(xmax)", "Abs Error"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<24} {:>9} {:>11.3} {:>14.0} {:>12.8} {:>10.2e}",
            result.name,
            result.nsteps,
            result.time_ms,
            result.steps_per_sec,
            result.value,
            result.abs_error()
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    if let Err(e) = write_results_to_csv(&results, &system_info, &filename) {
        eprintln!("Could not write {}: {}", filename, e);
        std::process::exit(1);
    }

    println!("\nBenchmark complete!");
    println!("To reproduce: cargo run --bin benchmark --release");
}
