/// Halved squared error of a single prediction.
///
/// The `/ 2` cancels the factor produced when differentiating the square, so
/// the gradients in [`backward`](crate::propagation::backward) carry no
/// constant.
pub fn cost(label: f64, prediction: f64) -> f64 {
    (label - prediction).powi(2) / 2.
}
