// src/comparison.rs
//! Running several schemes on one problem and lining the results up.
//!
//! Every scheme uses the same step size and step count, so the produced
//! sequences share one x grid. A [`ComparisonTable`] pairs each grid point
//! with the value of every scheme and of the exact solution; this is what the
//! output writers and any plotting code consume.

use crate::error::{OdeError, OdeResult};
use crate::models::model::{ExactSolution, OdeModel};
use crate::sequence::SampleSequence;
use crate::solvers::{solve, IntegratorConfig, Scheme};
use bitflags::bitflags;
use log::{debug, info};
use rayon::prelude::*;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SchemeSet: u32 {
        const NONE     = 0;
        const EULER    = 1 << 0;
        const MIDPOINT = 1 << 1;
        const RK4      = 1 << 2;
        const ALL      = Self::EULER.bits() | Self::MIDPOINT.bits() | Self::RK4.bits();
    }
}

impl SchemeSet {
    fn flag(scheme: Scheme) -> SchemeSet {
        match scheme {
            Scheme::Euler => SchemeSet::EULER,
            Scheme::Midpoint => SchemeSet::MIDPOINT,
            Scheme::Rk4 => SchemeSet::RK4,
        }
    }

    pub fn includes(self, scheme: Scheme) -> bool {
        self.contains(Self::flag(scheme))
    }

    /// Selected schemes in increasing order
    pub fn schemes(self) -> Vec<Scheme> {
        Scheme::ALL
            .iter()
            .copied()
            .filter(|&s| self.includes(s))
            .collect()
    }
}

impl From<Scheme> for SchemeSet {
    fn from(scheme: Scheme) -> Self {
        SchemeSet::flag(scheme)
    }
}

/// Output of [`solve_schemes`]: one sequence per selected scheme
#[derive(Clone, Debug)]
pub struct SchemeComparison {
    config: IntegratorConfig,
    sequences: Vec<SampleSequence>,
}

impl SchemeComparison {
    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    pub fn sequences(&self) -> &[SampleSequence] {
        &self.sequences
    }

    pub fn get(&self, scheme: Scheme) -> Option<&SampleSequence> {
        self.sequences.iter().find(|s| s.scheme() == scheme)
    }

    /// The shared x grid
    pub fn xs(&self) -> &[f64] {
        self.sequences.first().map(|s| s.xs()).unwrap_or(&[])
    }

    pub fn table<E: ExactSolution + ?Sized>(&self, exact: &E) -> OdeResult<ComparisonTable> {
        ComparisonTable::from_sequences(&self.sequences, exact)
    }
}

/// Run the selected schemes over the same configuration
///
/// The runs are independent and execute on the rayon pool; results are
/// returned in increasing order of accuracy whatever the completion order.
///
/// # Errors
///
/// `InvalidArgument` for an invalid configuration or an empty scheme set.
pub fn solve_schemes<M>(
    model: &M,
    cfg: &IntegratorConfig,
    set: SchemeSet,
) -> OdeResult<SchemeComparison>
where
    M: OdeModel + Sync + ?Sized,
{
    cfg.validate()?;
    let schemes = set.schemes();
    if schemes.is_empty() {
        return Err(OdeError::InvalidArgument {
            parameter: "schemes".to_string(),
            value: set.bits() as f64,
            constraint: "at least one scheme must be selected".to_string(),
        });
    }

    info!(
        "Solving with {} scheme(s), {} steps of h = {}",
        schemes.len(),
        cfg.nsteps,
        cfg.step_size()
    );
    let sequences = schemes
        .par_iter()
        .map(|&scheme| solve(model, scheme, cfg))
        .collect::<OdeResult<Vec<_>>>()?;

    Ok(SchemeComparison {
        config: *cfg,
        sequences,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub x: f64,
    /// One value per column of the owning table
    pub values: Vec<f64>,
    pub exact: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonTable {
    pub columns: Vec<Scheme>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Align sequences on their common x grid and evaluate `exact` there
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if no sequences are given or their x coordinates are
    /// not identical.
    pub fn from_sequences<E: ExactSolution + ?Sized>(
        sequences: &[SampleSequence],
        exact: &E,
    ) -> OdeResult<Self> {
        let reference = sequences.first().ok_or_else(|| OdeError::InvalidArgument {
            parameter: "sequences".to_string(),
            value: 0.0,
            constraint: "at least one sample sequence is required".to_string(),
        })?;
        let grid = reference.xs();

        for seq in &sequences[1..] {
            if seq.len() != grid.len() {
                return Err(OdeError::InvalidArgument {
                    parameter: "x grid".to_string(),
                    value: seq.len() as f64,
                    constraint: format!(
                        "{} has {} samples, expected {}",
                        seq.scheme(),
                        seq.len(),
                        grid.len()
                    ),
                });
            }
            if let Some((i, &x)) = seq.xs().iter().enumerate().find(|&(i, x)| *x != grid[i]) {
                return Err(OdeError::InvalidArgument {
                    parameter: "x grid".to_string(),
                    value: x,
                    constraint: format!(
                        "{} sample {} does not match x = {}",
                        seq.scheme(),
                        i,
                        grid[i]
                    ),
                });
            }
        }

        let rows = grid
            .iter()
            .enumerate()
            .map(|(i, &x)| ComparisonRow {
                x,
                values: sequences.iter().map(|s| s.ys()[i]).collect(),
                exact: exact.exact(x),
            })
            .collect::<Vec<_>>();
        debug!("Comparison table with {} rows", rows.len());

        Ok(ComparisonTable {
            columns: sequences.iter().map(|s| s.scheme()).collect(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::linear_relaxation::LinearRelaxation;

    #[test]
    fn test_scheme_set_selection() {
        assert_eq!(SchemeSet::ALL.schemes(), Scheme::ALL.to_vec());
        assert_eq!(
            (SchemeSet::EULER | SchemeSet::RK4).schemes(),
            vec![Scheme::Euler, Scheme::Rk4]
        );
        assert!(SchemeSet::from(Scheme::Midpoint).includes(Scheme::Midpoint));
        assert!(SchemeSet::NONE.schemes().is_empty());
    }

    #[test]
    fn test_parallel_runs_match_sequential() {
        let problem = LinearRelaxation::default();
        let cfg = IntegratorConfig::default();
        let comparison = solve_schemes(&problem, &cfg, SchemeSet::ALL).unwrap();

        assert_eq!(comparison.sequences().len(), 3);
        assert_eq!(comparison.config(), &cfg);
        for scheme in Scheme::ALL {
            let sequential = solve(&problem, scheme, &cfg).unwrap();
            assert_eq!(comparison.get(scheme), Some(&sequential));
        }
        assert_eq!(comparison.xs().len(), cfg.nsteps + 1);
    }

    #[test]
    fn test_empty_scheme_set_is_rejected() {
        let problem = LinearRelaxation::default();
        let cfg = IntegratorConfig::default();
        assert!(solve_schemes(&problem, &cfg, SchemeSet::NONE).is_err());
    }

    #[test]
    fn test_table_rows() {
        let problem = LinearRelaxation::default();
        let cfg = IntegratorConfig::new(1.0, 4, 0.0, 1.0);
        let table = solve_schemes(&problem, &cfg, SchemeSet::ALL)
            .unwrap()
            .table(&problem)
            .unwrap();

        assert_eq!(table.columns, Scheme::ALL.to_vec());
        assert_eq!(table.len(), 5);
        let first = &table.rows[0];
        assert_eq!(first.x, 0.0);
        assert_eq!(first.values, vec![1.0, 1.0, 1.0]);
        assert!((first.exact - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_mismatched_grids_are_rejected() {
        let f = |x: f64, y: f64| x - y;
        let coarse = solve(&f, Scheme::Euler, &IntegratorConfig::new(1.0, 4, 0.0, 1.0)).unwrap();
        let fine = solve(&f, Scheme::Rk4, &IntegratorConfig::new(1.0, 8, 0.0, 1.0)).unwrap();
        let shifted = solve(&f, Scheme::Rk4, &IntegratorConfig::new(1.0, 4, 0.5, 1.5)).unwrap();
        let exact = LinearRelaxation::default();

        assert!(ComparisonTable::from_sequences(&[coarse.clone(), fine], &exact).is_err());
        assert!(ComparisonTable::from_sequences(&[coarse, shifted], &exact).is_err());
        assert!(ComparisonTable::from_sequences(&[], &exact).is_err());
    }
}
