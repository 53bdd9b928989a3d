//! Forward and backward passes over a whole batch.

use crate::error::check_len;
use crate::prelude::*;
use crate::utils::mean;

/// Negative gradient of the batch cost with respect to `w` and `b`.
///
/// Adding `alpha * gradient` to the parameters moves them downhill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub dw: f64,
    pub db: f64,
}

fn check_batch(inputs: usize, labels: usize) -> Result<()> {
    check_len("labels", labels, inputs)?;
    if inputs == 0 {
        return Err(TrainError::EmptyBatch);
    }
    Ok(())
}

/// Predicts every input in order and returns the predictions together with
/// the mean [`cost`] over the batch.
pub fn forward(
    model: &Neuron,
    inputs: ArrayView1<f64>,
    labels: ArrayView1<f64>,
) -> Result<(Array1<f64>, f64)> {
    check_batch(inputs.len(), labels.len())?;

    let mut predictions = Array1::zeros(inputs.len());
    let mut total = 0.;
    for ((prediction, &x), &y) in predictions.iter_mut().zip(inputs).zip(labels) {
        *prediction = model.predict(x);
        total += cost(y, *prediction);
    }

    Ok((predictions, mean(total, inputs.len())))
}

/// Averages `(y - prediction) * x` and `(y - prediction)` over the batch.
pub fn backward(
    predictions: ArrayView1<f64>,
    inputs: ArrayView1<f64>,
    labels: ArrayView1<f64>,
) -> Result<Gradient> {
    check_batch(inputs.len(), labels.len())?;
    check_len("predictions", predictions.len(), inputs.len())?;

    let (mut dw, mut db) = (0., 0.);
    for ((&prediction, &x), &y) in predictions.iter().zip(inputs).zip(labels) {
        let error = y - prediction;
        dw += error * x;
        db += error;
    }

    let n = inputs.len();
    Ok(Gradient {
        dw: mean(dw, n),
        db: mean(db, n),
    })
}
