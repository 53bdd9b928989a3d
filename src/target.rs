//! Reference mapping the neuron is taught to imitate.

pub const TARGET_W: f64 = 1.8;
pub const TARGET_B: f64 = 32.;

/// Celsius to Fahrenheit. Only used to label synthetic data, never learned.
pub fn target(x: f64) -> f64 {
    x * TARGET_W + TARGET_B
}
