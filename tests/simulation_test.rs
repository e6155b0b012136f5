use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use spinglass::instance::Instance;
use spinglass::model::SpinModel;
use spinglass::{report, simulation};

fn instance(node_qty: usize, weights: &[(usize, usize, i64)]) -> Instance {
    Instance {
        node_qty,
        weights: weights.to_vec(),
    }
}

fn triangle_instance() -> Instance {
    instance(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (2, 2, -1)])
}

#[test]
fn fixed_seed_reproduces_energy_and_spins() {
    let run_once = || {
        let mut rng = ChaCha20Rng::seed_from_u64(0xDEADBEEF);
        let mut model = SpinModel::from_instance_with(&mut rng, &triangle_instance()).unwrap();
        let energy = simulation::run(&mut model, 25, 1.0, &mut rng).unwrap();
        (energy, report::render(&model))
    };

    let (e1, s1) = run_once();
    let (e2, s2) = run_once();
    assert_eq!(e1, e2, "same seed must give the same energy");
    assert_eq!(s1, s2, "same seed must give the same spin readout");
}

#[test]
fn zero_weight_model_energy_is_zero_for_any_parameters() {
    for (iterations, t) in [(0, 0.5), (1, 1.0), (25, 10.0)] {
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let mut model = SpinModel::from_instance_with(&mut rng, &instance(5, &[])).unwrap();
        let energy = simulation::run(&mut model, iterations, t, &mut rng).unwrap();
        assert_eq!(energy, 0, "iterations={iterations} t={t}");
    }
}

#[test]
fn zero_iterations_settles_immediately() {
    let mut rng = ChaCha20Rng::seed_from_u64(18);
    let mut model = SpinModel::from_instance_with(&mut rng, &triangle_instance()).unwrap();
    let before_spins = report::render(&model);
    let before_energy = model.total_energy();

    let energy = simulation::run(&mut model, 0, 1.0, &mut rng).unwrap();

    assert_eq!(energy, before_energy);
    assert_eq!(report::render(&model), before_spins, "no sweep may run");
}

#[test]
fn invalid_temperature_surfaces_on_first_sweep() {
    let mut rng = ChaCha20Rng::seed_from_u64(19);
    let mut model = SpinModel::from_instance_with(&mut rng, &triangle_instance()).unwrap();
    assert!(simulation::run(&mut model, 3, 0.0, &mut rng).is_err());
    assert!(simulation::run_traced(&mut model, 3, -2.5, &mut rng).is_err());
}

#[test]
fn traced_run_records_one_point_per_sweep() {
    let mut rng = ChaCha20Rng::seed_from_u64(20);
    let mut model = SpinModel::from_instance_with(&mut rng, &triangle_instance()).unwrap();
    let trace = simulation::run_traced(&mut model, 7, 1.0, &mut rng).unwrap();

    assert_eq!(trace.points.len(), 7);
    for (i, p) in trace.points.iter().enumerate() {
        assert_eq!(p.sweep, i + 1, "sweeps are numbered from one");
    }
    assert_eq!(trace.points.last().unwrap().energy, trace.energy);
    assert_eq!(
        trace.total_flips,
        trace.points.iter().map(|p| p.flips).sum::<usize>()
    );
    assert_eq!(trace.energy, model.total_energy(), "trace ends on the settled state");
}
