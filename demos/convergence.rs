// demos/convergence.rs
use fast_ode::analytics::convergence::convergence_study;
use fast_ode::models::exponential_decay::ExponentialDecay;
use fast_ode::models::inverse_square::InverseSquare;
use fast_ode::models::linear_relaxation::LinearRelaxation;
use fast_ode::models::model::{ExactSolution, OdeModel};
use fast_ode::solvers::{IntegratorConfig, Scheme};
use fast_ode::OdeResult;

fn report<P: OdeModel + ExactSolution>(
    title: &str,
    problem: &P,
    base: IntegratorConfig,
) -> OdeResult<()> {
    println!("\n{}", title);
    println!("{:-<64}", "");
    println!(
        "{:<16} {:>8} {:>12} {:>14} {:>10}",
        "Scheme", "Steps", "h", "Max |error|", "Ratio"
    );

    for scheme in Scheme::ALL {
        let study = convergence_study(problem, problem, scheme, &base, 4)?;
        let ratios = study.ratios();
        for (i, point) in study.points.iter().enumerate() {
            let ratio = if i == 0 {
                "-".to_string()
            } else {
                format!("{:.2}", ratios[i - 1])
            };
            println!(
                "{:<16} {:>8} {:>12.6} {:>14.4e} {:>10}",
                scheme.label(),
                point.nsteps,
                point.step_size,
                point.max_abs_error,
                ratio
            );
        }
        println!(
            "{:<16} observed order {:.3} (expected {})",
            "",
            study.mean_observed_order(),
            scheme.order()
        );
    }
    Ok(())
}

fn main() -> OdeResult<()> {
    println!("Empirical order of convergence");
    println!("==============================");

    report(
        "dy/dx = x - y, y(0) = 1 on [0, 3]",
        &LinearRelaxation::default(),
        IntegratorConfig::new(1.0, 15, 0.0, 3.0),
    )?;
    report(
        "dy/dx = -2y, y(0) = 1 on [0, 1]",
        &ExponentialDecay::new(2.0, 0.0, 1.0)?,
        IntegratorConfig::new(1.0, 10, 0.0, 1.0),
    )?;
    report(
        "dy/dx = -y/x - 2/x^2, y(1) = 1 on [1, 2]",
        &InverseSquare::new(1.0, 1.0)?,
        IntegratorConfig::new(1.0, 10, 1.0, 2.0),
    )?;
    Ok(())
}
