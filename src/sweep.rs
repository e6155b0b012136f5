//! Stochastic single-node update sweeps.

use crate::error::{Error, Result};
use crate::model::SpinModel;
use rand::Rng;

/// Returned by [`sweep`], lets the driver track acceptance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepInfo {
    pub trials: usize,
    pub flips: usize,
}

/// One sweep: `node_qty` single-node trials, each on a node drawn
/// uniformly with replacement (a node may be revisited or skipped).
///
/// A trial flips unconditionally when the node's local energy is
/// positive, otherwise with probability exp(2E/T). This one-sided rule
/// looks at the current local energy only, never at a proposed state.
///
/// `t` must be strictly positive; anything else (zero, negative, NaN)
/// fails before the first trial.
pub fn sweep(model: &mut SpinModel, t: f64, rng: &mut impl Rng) -> Result<SweepInfo> {
    if !(t > 0.0) {
        return Err(Error::NonPositiveTemperature(t));
    }

    let node_qty = model.node_qty();
    let mut info = SweepInfo::default();

    for _ in 0..node_qty {
        let n = rng.gen_range(0..node_qty);
        let e = model.nodes()[n].local_energy(model.nodes());
        info.trials += 1;

        if e > 0 {
            model.flip(n);
            info.flips += 1;
        } else if rng.gen::<f64>() < (2.0 * e as f64 / t).exp() {
            model.flip(n);
            info.flips += 1;
        }
    }

    Ok(info)
}
