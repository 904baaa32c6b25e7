// demos/error_handling_demo.rs
use fast_ode::comparison::{solve_schemes, ComparisonTable, SchemeSet};
use fast_ode::models::inverse_square::InverseSquare;
use fast_ode::models::linear_relaxation::LinearRelaxation;
use fast_ode::solvers::{rk1_solve, rk4_solve, solve, IntegratorConfig, Scheme};
use fast_ode::OdeError;

fn main() {
    println!("Error Handling Demo for fast-ode");
    println!("================================\n");

    let relax = |x: f64, y: f64| x - y;

    // Test 1: zero steps
    println!("1. Testing nsteps = 0...");
    match rk4_solve(relax, 1.0, 0, 0.0, 3.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: reversed interval
    println!("\n2. Testing xmax <= x0...");
    match solve(&relax, Scheme::Midpoint, &IntegratorConfig::new(1.0, 60, 3.0, 0.0)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: problem defined only for x > 0
    println!("\n3. Testing singular starting point for -y/x - 2/x^2...");
    match InverseSquare::new(0.0, 1.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: empty scheme selection
    println!("\n4. Testing empty scheme selection...");
    match solve_schemes(&relax, &IntegratorConfig::default(), SchemeSet::NONE) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: sequences on different grids cannot share a table
    println!("\n5. Testing table from mismatched grids...");
    let coarse = rk1_solve(relax, 1.0, 30, 0.0, 3.0);
    let fine = rk1_solve(relax, 1.0, 60, 0.0, 3.0);
    if let (Ok(coarse), Ok(fine)) = (coarse, fine) {
        match ComparisonTable::from_sequences(&[coarse, fine], &LinearRelaxation::default()) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }

    // Test 6: a right-hand side that blows up is not an error by itself
    println!("\n6. Testing non-finite right-hand side...");
    let singular = |_x: f64, y: f64| -1.0 / y;
    match rk1_solve(singular, 1.0, 4, 0.0, 4.0) {
        Ok(seq) => {
            println!("   ✓ Produced {} samples: {:?}", seq.len(), seq.ys());
            match seq.check_finite() {
                Err(OdeError::NumericalInstability { index, .. }) => {
                    println!("   ✓ First non-finite sample at index {}", index)
                }
                Err(e) => println!("   Unexpected error: {}", e),
                Ok(()) => println!("   Unexpected: all samples finite"),
            }
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\nError handling demo complete!");
}
