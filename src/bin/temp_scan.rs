//! Temperature scan with independent replicas and error bars.
//!
//! Every (temperature, replica) pair owns its model and RNG; replicas
//! stay serial within one temperature so a fixed master seed reproduces
//! the whole scan.
//
//  Compile & run:  `cargo run --bin temp_scan -- instance.txt`

use clap::Parser;
use csv::WriterBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_pcg::Pcg64;
use rayon::prelude::*;
use spinglass::instance::Instance;
use spinglass::model::SpinModel;
use spinglass::simulation;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Mutex;

// -----------------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------------
#[derive(Parser)]
struct Cli {
    /// Problem instance file
    instance: PathBuf,

    /// Lowest temperature on the grid
    #[arg(long, default_value = "0.5")]
    t_min: f64,

    /// Highest temperature on the grid
    #[arg(long, default_value = "3.0")]
    t_max: f64,

    /// Number of grid points
    #[arg(long, default_value = "26")]
    t_steps: usize,

    /// Independent replicas per temperature
    #[arg(long, default_value = "5")]
    replicas: usize,

    /// Update sweeps per replica
    #[arg(long, default_value = "100")]
    sweeps: usize,

    /// Master seed for the whole scan; drawn from the OS when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(long, default_value = "temp_scan.csv")]
    output: PathBuf,
}

// -----------------------------------------------------------------------------
// Online mean / variance (Welford)
// -----------------------------------------------------------------------------
#[derive(Default, Clone)]
struct OnlineStats {
    n: u64,
    mean: f64,
    m2: f64,
}
impl OnlineStats {
    fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }
    fn mean(&self) -> f64 {
        self.mean
    }
    fn var(&self) -> f64 {
        if self.n > 1 {
            self.m2 / (self.n - 1) as f64
        } else {
            0.0
        }
    }
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// Row to be written to CSV.
#[derive(Debug)]
struct Row {
    temperature: f64,
    mean_energy: f64,
    std_energy: f64,
    mean_flips: f64,
    replicas: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let instance = Instance::from_path(&args.instance)?;
    println!(
        "Instance: {} nodes, {} weight triples",
        instance.node_qty,
        instance.weights.len()
    );

    let temperatures: Vec<f64> = (0..args.t_steps)
        .map(|i| {
            if args.t_steps < 2 {
                args.t_min
            } else {
                args.t_min + (args.t_max - args.t_min) * i as f64 / (args.t_steps - 1) as f64
            }
        })
        .collect();

    let master_seed = args
        .seed
        .unwrap_or_else(|| ChaCha20Rng::from_entropy().next_u64());

    let bar = ProgressBar::new(temperatures.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(" {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]")
            .unwrap(),
    );

    let results: Mutex<Vec<Row>> = Mutex::new(Vec::new());

    // Parallel over grid points; the replica loop stays serial so each
    // (t_idx, rep) seed lands on the same simulation every run.
    temperatures.par_iter().enumerate().try_for_each(
        |(t_idx, &t)| -> Result<(), spinglass::error::Error> {
            let mut stats = OnlineStats::default();
            let mut flips = 0usize;

            for rep in 0..args.replicas {
                // Derive a unique u64 seed from (grid index, replica).
                let seed = ((t_idx as u64) << 32) | rep as u64;
                let mut rng = Pcg64::seed_from_u64(seed ^ master_seed);

                let mut model = SpinModel::from_instance_with(&mut rng, &instance)?;
                let trace = simulation::run_traced(&mut model, args.sweeps, t, &mut rng)?;

                stats.push(trace.energy as f64);
                flips += trace.total_flips;
            }

            results.lock().unwrap().push(Row {
                temperature: t,
                mean_energy: stats.mean(),
                std_energy: stats.std(),
                mean_flips: flips as f64 / args.replicas as f64,
                replicas: args.replicas,
            });

            bar.inc(1);
            Ok(())
        },
    )?;
    bar.finish();

    // Sort for deterministic CSV order.
    let mut rows = results.into_inner().unwrap();
    rows.sort_by(|a, b| a.temperature.partial_cmp(&b.temperature).unwrap());

    let mut wtr = WriterBuilder::new().from_path(&args.output)?;
    wtr.write_record([
        "temperature",
        "mean_energy",
        "std_energy",
        "mean_flips",
        "replicas",
    ])?;
    for r in &rows {
        wtr.write_record([
            r.temperature.to_string(),
            r.mean_energy.to_string(),
            r.std_energy.to_string(),
            r.mean_flips.to_string(),
            r.replicas.to_string(),
        ])?;
    }
    wtr.flush()?;
    println!("Scan complete → {}", args.output.display());

    Ok(())
}
