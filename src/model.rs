use crate::prelude::*;

/// Single-input linear model `y = w * x + b`.
///
/// The trainer borrows it mutably for the duration of training; afterwards
/// the caller owns it again and can use it for inference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub(crate) w: f64,
    pub(crate) b: f64,
}

impl Neuron {
    pub fn new(w: f64, b: f64) -> Self {
        Self { w, b }
    }

    /// Draws both parameters uniformly from `[0, 1)` using the given source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let params = Array1::random_using(2, Uniform::new(0., 1.), rng);
        Self::new(params[0], params[1])
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn predict(&self, x: f64) -> f64 {
        x * self.w + self.b
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{w: {}, b: {}}}", self.w, self.b)
    }
}
