// scripts/rkdemo.rs
//! Solve dy/dx = x - y, y(x0) = y0 with RK1, RK2 and RK4 and write the
//! comparison table.
//!
//! ```text
//! cargo run --bin rkdemo -- [--nsteps N] [--x0 X] [--xmax X] [--y0 Y] [--out FILE]
//!                           [--csv-dir DIR] [--log-file FILE] [-v|-vv] [--quiet]
//! ```

use fast_ode::comparison::{solve_schemes, SchemeSet};
use fast_ode::logging;
use fast_ode::math_utils::Timer;
use fast_ode::models::linear_relaxation::LinearRelaxation;
use fast_ode::output;
use fast_ode::solvers::IntegratorConfig;
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rkdemo",
    about = "Compare RK1, RK2 and RK4 on dy/dx = x - y against the exact solution"
)]
struct CommandlineArgs {
    #[structopt(long, default_value = "60", help = "Number of steps")]
    nsteps: usize,
    #[structopt(
        long,
        default_value = "0",
        allow_hyphen_values = true,
        help = "Start of the interval"
    )]
    x0: f64,
    #[structopt(
        long,
        default_value = "3",
        allow_hyphen_values = true,
        help = "End of the interval"
    )]
    xmax: f64,
    #[structopt(
        long,
        default_value = "1",
        allow_hyphen_values = true,
        help = "Initial value y(x0)"
    )]
    y0: f64,
    #[structopt(
        long,
        default_value = "RKdemo.dat",
        parse(from_os_str),
        help = "Fixed-width comparison table to write"
    )]
    out: PathBuf,
    #[structopt(
        long,
        parse(from_os_str),
        help = "Directory for one index,x,y CSV per scheme"
    )]
    csv_dir: Option<PathBuf>,
    #[structopt(long, parse(from_os_str), help = "Also write the log to this file")]
    log_file: Option<PathBuf>,
    #[structopt(
        short = "v",
        long = "verbose",
        parse(from_occurrences),
        help = "Increase log verbosity (-v debug, -vv trace)"
    )]
    verbose: u8,
    #[structopt(long, help = "Only log errors")]
    quiet: bool,
}

impl CommandlineArgs {
    fn integrator(&self) -> IntegratorConfig {
        IntegratorConfig::new(self.y0, self.nsteps, self.x0, self.xmax)
    }

    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else {
            // info by default
            logging::level_from_verbosity(self.verbose.saturating_add(1))
        }
    }
}

fn run(args: &CommandlineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let problem = LinearRelaxation::new(args.x0, args.y0)?;

    let timer = Timer::new();
    let comparison = solve_schemes(&problem, &args.integrator(), SchemeSet::ALL)?;
    let cfg = comparison.config();
    info!(
        "Solved {} steps of h = {} on [{}, {}] in {:.3} ms",
        cfg.nsteps,
        cfg.step_size(),
        cfg.x0,
        cfg.xmax,
        timer.elapsed_ms()
    );

    for seq in comparison.sequences() {
        if let Err(e) = seq.check_finite() {
            warn!("{}", e);
        }
        let (x, y) = seq.last().unwrap_or((cfg.x0, cfg.y0));
        info!(
            "{:<15} y({:.4}) = {:.6}, max |error| = {:.3e}",
            seq.scheme().label(),
            x,
            y,
            seq.max_abs_error(&problem)
        );
    }

    let table = comparison.table(&problem)?;
    output::write_comparison_to_file(&args.out, &table)?;
    println!("Wrote data to {}", args.out.display());

    if let Some(dir) = &args.csv_dir {
        fs::create_dir_all(dir)?;
        for seq in comparison.sequences() {
            let path = dir.join(format!("{}.csv", seq.scheme().column_name()));
            output::write_sequence_to_csv(&path, seq)?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn main() {
    let args = CommandlineArgs::from_args();

    if let Err(e) = logging::init_logging(args.log_level(), args.log_file.as_deref()) {
        eprintln!("rkdemo: unable to initialise logging ({})", e);
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CommandlineArgs::from_iter(&["rkdemo"]);
        assert_eq!(args.integrator(), IntegratorConfig::default());
        assert_eq!(args.out, PathBuf::from("RKdemo.dat"));
        assert_eq!(args.csv_dir, None);
        assert_eq!(args.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_flags_and_negative_values() {
        let args = CommandlineArgs::from_iter(&[
            "rkdemo", "--nsteps", "30", "--x0", "-1", "--xmax", "2", "--y0", "-0.5", "--out",
            "a.dat", "--csv-dir", "csv", "-vv",
        ]);
        assert_eq!(args.integrator(), IntegratorConfig::new(-0.5, 30, -1.0, 2.0));
        assert_eq!(args.out, PathBuf::from("a.dat"));
        assert_eq!(args.csv_dir, Some(PathBuf::from("csv")));
        assert_eq!(args.log_level(), log::LevelFilter::Trace);

        let quiet = CommandlineArgs::from_iter(&["rkdemo", "-v", "--quiet"]);
        assert_eq!(quiet.log_level(), log::LevelFilter::Error);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(CommandlineArgs::from_iter_safe(&["rkdemo", "--nsteps", "-3"]).is_err());
        assert!(CommandlineArgs::from_iter_safe(&["rkdemo", "--xmax", "abc"]).is_err());
        assert!(CommandlineArgs::from_iter_safe(&["rkdemo", "--bogus"]).is_err());
    }
}
