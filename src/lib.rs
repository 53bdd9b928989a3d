pub mod prelude;

pub mod config;
pub mod cost;
pub mod data;
pub mod error;
pub mod model;
pub mod optimizers;
pub mod propagation;
pub mod report;
pub mod target;
pub mod trainer;
mod utils;

#[allow(unused_imports)]
use crate::prelude::*;

#[test]
fn test1() {
    let inputs = array![0.];
    let labels = array![32.];
    let mut model = neuron!(0., 0.);

    // forward propagation
    let (predictions, cost) = forward(&model, inputs.view(), labels.view()).unwrap();
    assert_eq!(predictions, array![0.]);
    assert_eq!(cost, 512.);

    // back propagation
    let grad = backward(predictions.view(), inputs.view(), labels.view()).unwrap();
    assert_eq!(grad, Gradient { dw: 0., db: 32. });

    // optimization
    GradientDescent::new(0.0005).optimize(&mut model, grad);
    assert_eq!(model, neuron!(0., 0.016));
}

#[test]
fn test2() {
    let train_set = generate(0., 100);
    let eval_set = generate(0.5, 100);
    let model = neuron!(TARGET_W, TARGET_B);

    assert_eq!(evaluate(&model, &train_set).unwrap(), 0.);
    assert_eq!(evaluate(&model, &eval_set).unwrap(), 0.);
    assert_eq!(model.predict(SAMPLE_INPUT), target(SAMPLE_INPUT));
}
