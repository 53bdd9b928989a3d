use crate::prelude::*;

/// Applies one epoch's gradient to the model in place.
pub trait ModelOptimize {
    fn optimize(&self, model: &mut Neuron, grad: Gradient);
}

/// Plain gradient step: `w += alpha * dW`, `b += alpha * dB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    pub alpha: f64,
}

impl GradientDescent {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl ModelOptimize for GradientDescent {
    fn optimize(&self, model: &mut Neuron, grad: Gradient) {
        model.w += self.alpha * grad.dw;
        model.b += self.alpha * grad.db;
    }
}
