/// Arithmetic mean of exactly the last `window` elements of `values`.
///
/// Returns `f64::NAN` when `window` is zero or larger than `values.len()`;
/// the mean is never silently taken over fewer elements than requested.
pub fn trailing_mean(values: &[u8], window: usize) -> f64 {
    if window == 0 || window > values.len() {
        return f64::NAN;
    }
    let sum: f64 = values[values.len() - window..]
        .iter()
        .map(|&v| f64::from(v))
        .sum();
    sum / window as f64
}
