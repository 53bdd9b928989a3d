use nano_neuron::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn train_default(model: &mut Neuron) -> CostHistory {
    let config = TrainingConfig::default();
    let set = generate(config.train_start, config.batch_size);
    Trainer::new(config).unwrap().fit(model, &set).unwrap()
}

#[test]
fn converges_from_corners_of_init_range() {
    for (w, b) in [(0., 0.), (0.999, 0.999), (0., 0.999), (0.999, 0.)] {
        let mut model = neuron!(w, b);
        let history = train_default(&mut model);

        assert_eq!(history.len(), 70_000);
        assert!(history[0] > 1000., "initial cost {} from ({w}, {b})", history[0]);
        assert!(history[69_999] < 1e-4, "final cost {} from ({w}, {b})", history[69_999]);
    }
}

#[test]
fn recovers_target_parameters() {
    let mut model = Neuron::random(&mut StdRng::seed_from_u64(2024));
    train_default(&mut model);

    assert!((model.w() - TARGET_W).abs() < 0.01, "w = {}", model.w());
    assert!((model.b() - TARGET_B).abs() < 0.1, "b = {}", model.b());
}

#[test]
fn generalises_to_held_out_set() {
    let report = run(&TrainingConfig::default(), &mut StdRng::seed_from_u64(9)).unwrap();

    assert!(report.eval_cost < 1e-4, "eval cost {}", report.eval_cost);
    assert!((report.sample_prediction - report.sample_target).abs() < 0.01);
}

#[test]
fn same_seed_same_run() {
    let config = TrainingConfig {
        epochs: 500,
        ..Default::default()
    };
    let a = run(&config, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = run(&config, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn config_file_drives_run() {
    let path = std::env::temp_dir().join(format!("nano-neuron-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"epochs": 10, "batchSize": 20, "evalStart": 0.25}"#).unwrap();
    let config = TrainingConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.epochs, 10);
    assert_eq!(config.batch_size, 20);
    assert_eq!(config.eval_start, 0.25);
    assert_eq!(config.alpha, 0.0005);

    let report = run(&config, &mut StdRng::seed_from_u64(0)).unwrap();
    assert!(report.cost_after.is_finite());
}
