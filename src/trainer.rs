use std::ops::Index;

use log::{debug, trace, warn};

use crate::error::check_len;
use crate::prelude::*;

/// Mean batch cost recorded at the start of every epoch.
///
/// Entry `0` is the cost of the untrained model, entry `epochs - 1` the cost
/// seen by the last epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostHistory(Vec<f64>);

impl CostHistory {
    fn with_capacity(epochs: usize) -> Self {
        Self(Vec::with_capacity(epochs))
    }

    fn record(&mut self, cost: f64) {
        self.0.push(cost);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Index<usize> for CostHistory {
    type Output = f64;

    fn index(&self, epoch: usize) -> &f64 {
        &self.0[epoch]
    }
}

/// Runs exactly `epochs` forward/backward/update cycles of plain gradient
/// descent over one batch.
pub fn train(
    model: &mut Neuron,
    epochs: usize,
    alpha: f64,
    inputs: ArrayView1<f64>,
    labels: ArrayView1<f64>,
) -> Result<CostHistory> {
    train_with(model, epochs, &GradientDescent::new(alpha), inputs, labels)
}

/// Same as [`train`] with an arbitrary update rule.
///
/// There is no early stopping: a diverging run keeps going and its
/// non-finite costs end up in the history.
pub fn train_with<O: ModelOptimize>(
    model: &mut Neuron,
    epochs: usize,
    optimizer: &O,
    inputs: ArrayView1<f64>,
    labels: ArrayView1<f64>,
) -> Result<CostHistory> {
    check_len("labels", labels.len(), inputs.len())?;

    let mut history = CostHistory::with_capacity(epochs);
    let log_every = (epochs / 10).max(1);
    let mut diverged = false;

    for epoch in 0..epochs {
        let (predictions, cost) = forward(model, inputs, labels)?;
        history.record(cost);

        let grad = backward(predictions.view(), inputs, labels)?;
        optimizer.optimize(model, grad);

        trace!("epoch {epoch}: cost={cost} grad={grad:?}");
        if epoch % log_every == 0 {
            debug!("epoch {epoch}/{epochs}: cost={cost} model={model}");
        }
        if !cost.is_finite() && !diverged {
            warn!("cost became {cost} at epoch {epoch}, alpha is likely too large");
            diverged = true;
        }
    }

    Ok(history)
}

/// Mean cost of `model` on a held-out set.
pub fn evaluate(model: &Neuron, set: &Dataset) -> Result<f64> {
    let (_, cost) = forward(model, set.inputs().view(), set.labels().view())?;
    Ok(cost)
}

/// Binds a validated [`TrainingConfig`] to the gradient descent update rule.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
    optimizer: GradientDescent,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        let optimizer = GradientDescent::new(config.alpha);
        Ok(Self { config, optimizer })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Trains `model` on `set`, which must hold exactly `batchSize` points.
    pub fn fit(&self, model: &mut Neuron, set: &Dataset) -> Result<CostHistory> {
        check_len("batch", set.len(), self.config.batch_size)?;
        debug!(
            "training {model} for {} epochs, alpha={}, batch={}",
            self.config.epochs,
            self.config.alpha,
            set.len()
        );
        train_with(
            model,
            self.config.epochs,
            &self.optimizer,
            set.inputs().view(),
            set.labels().view(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_epoch_on_single_point() {
        let mut model = neuron!(0., 0.);
        let history = train(&mut model, 1, 0.0005, array![0.].view(), array![32.].view()).unwrap();

        assert_eq!(history.as_slice(), &[512.]);
        assert_eq!(model.w(), 0.);
        assert_eq!(model.b(), 0.016);
    }

    #[test]
    fn history_has_one_entry_per_epoch() {
        let set = generate(0., 10);
        let mut model = neuron!(0.5, 0.5);
        let history = train(&mut model, 25, 0.0005, set.inputs().view(), set.labels().view()).unwrap();
        assert_eq!(history.len(), 25);
    }

    #[test]
    fn first_entry_is_cost_of_initial_model() {
        let set = generate(0., 10);
        let initial = neuron!(0.3, 0.7);
        let expected = evaluate(&initial, &set).unwrap();

        let mut model = initial;
        let history = train(&mut model, 5, 0.0005, set.inputs().view(), set.labels().view()).unwrap();
        assert_eq!(history[0], expected);
        assert_ne!(model, initial);
    }

    #[test]
    fn zero_epochs_leaves_model_untouched() {
        let set = generate(0., 10);
        let mut model = neuron!(0.3, 0.7);
        let history = train(&mut model, 0, 0.0005, set.inputs().view(), set.labels().view()).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.first(), None);
        assert_eq!(model, neuron!(0.3, 0.7));
    }

    #[test]
    fn exact_model_stays_put() {
        let set = generate(0., 100);
        let mut model = neuron!(TARGET_W, TARGET_B);
        let history = train(&mut model, 10, 0.0005, set.inputs().view(), set.labels().view()).unwrap();
        assert!(history.as_slice().iter().all(|&c| c == 0.));
        assert_eq!(model, neuron!(TARGET_W, TARGET_B));
    }

    #[test]
    fn large_alpha_diverges_without_error() {
        let set = generate(0., 100);
        let mut model = neuron!(0., 0.);
        let history = train(&mut model, 200, 1., set.inputs().view(), set.labels().view()).unwrap();
        assert_eq!(history.len(), 200);
        assert!(history.last().unwrap() > history.first().unwrap() || history.last().unwrap().is_nan());
    }

    #[test]
    fn mismatched_batch_fails_before_any_update() {
        let mut model = neuron!(0.1, 0.2);
        let err = train(&mut model, 3, 0.0005, array![1., 2.].view(), array![1.].view()).unwrap_err();
        assert!(matches!(err, TrainError::ShapeMismatch { .. }));
        assert_eq!(model, neuron!(0.1, 0.2));
    }

    #[test]
    fn mismatched_batch_fails_even_without_epochs() {
        let mut model = neuron!(0.1, 0.2);
        let err = train(&mut model, 0, 0.0005, array![1., 2.].view(), array![1.].view()).unwrap_err();
        assert!(matches!(
            err,
            TrainError::ShapeMismatch {
                what: "labels",
                got: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn trainer_checks_batch_size() {
        let trainer = Trainer::new(TrainingConfig {
            epochs: 1,
            batch_size: 100,
            ..Default::default()
        })
        .unwrap();
        let err = trainer.fit(&mut neuron!(0., 0.), &generate(0., 50)).unwrap_err();
        assert!(matches!(
            err,
            TrainError::ShapeMismatch {
                what: "batch",
                got: 50,
                expected: 100
            }
        ));
    }

    #[test]
    fn trainer_rejects_invalid_config() {
        let config = TrainingConfig {
            epochs: 0,
            ..Default::default()
        };
        assert!(matches!(Trainer::new(config), Err(TrainError::InvalidConfig(_))));
    }

    #[test]
    fn trainer_matches_free_function() {
        let config = TrainingConfig {
            epochs: 50,
            batch_size: 20,
            ..Default::default()
        };
        let set = generate(config.train_start, config.batch_size);

        let mut a = neuron!(0.25, 0.75);
        let mut b = a;
        let from_trainer = Trainer::new(config.clone()).unwrap().fit(&mut a, &set).unwrap();
        let from_fn = train(&mut b, config.epochs, config.alpha, set.inputs().view(), set.labels().view()).unwrap();

        assert_eq!(from_trainer, from_fn);
        assert_eq!(a, b);
    }
}
