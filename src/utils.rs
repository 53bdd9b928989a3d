#[macro_export]
macro_rules! neuron {
    ($w:expr, $b:expr) => {
        $crate::model::Neuron::new($w, $b)
    };
}

/// Arithmetic mean of an already accumulated sum over `n` points.
pub(crate) fn mean(sum: f64, n: usize) -> f64 {
    sum / n as f64
}
