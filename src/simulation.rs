//! Sweep loops and final-energy evaluation.

use crate::error::Result;
use crate::model::SpinModel;
use crate::sweep::{sweep, SweepInfo};
use rand::Rng;

/// Energy and flip count observed after one sweep of a traced run.
#[derive(Debug, Clone, Copy)]
pub struct TracePoint {
    pub sweep: usize,
    pub energy: i64,
    pub flips: usize,
}

/// Outcome of a traced run: per-sweep records plus final totals.
#[derive(Debug, Clone, Default)]
pub struct RunTrace {
    pub points: Vec<TracePoint>,
    pub energy: i64,
    pub total_flips: usize,
}

/// Run `iterations` sweeps in sequence, each observing the spins the
/// previous one left, then read the Hamiltonian of the settled state.
pub fn run(model: &mut SpinModel, iterations: usize, t: f64, rng: &mut impl Rng) -> Result<i64> {
    for _ in 0..iterations {
        sweep(model, t, rng)?;
    }
    Ok(model.total_energy())
}

/// As [`run`], but record the Hamiltonian after every sweep. Recording
/// is a read-only observation between sweeps; it feeds nothing back
/// into the update rule.
pub fn run_traced(
    model: &mut SpinModel,
    iterations: usize,
    t: f64,
    rng: &mut impl Rng,
) -> Result<RunTrace> {
    let mut trace = RunTrace::default();
    for i in 1..=iterations {
        let SweepInfo { flips, .. } = sweep(model, t, rng)?;
        trace.total_flips += flips;
        trace.points.push(TracePoint {
            sweep: i,
            energy: model.total_energy(),
            flips,
        });
    }
    trace.energy = model.total_energy();
    Ok(trace)
}
