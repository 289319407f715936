use ndarray::{Array1, ArrayView1};

use crate::error::{LseError, Result};

/// Numerically stable `ln(Σ exp(x_i))` over log-space values.
///
/// The maximum is pulled out before exponentiating so no term exceeds 1.
/// A `+inf` anywhere gives `+inf`; a sequence of only `-inf` gives `-inf`.
/// Empty input and NaNs are rejected with [`LseError::InvalidArgument`].
pub fn log_sum_exp(values: &[f64]) -> Result<f64> {
    let max = checked_max(values)?;
    if max.is_infinite() {
        return Ok(max);
    }
    let sum_exp: f64 = values.iter().map(|&x| (x - max).exp()).sum();
    Ok(max + sum_exp.ln())
}

/// [`log_sum_exp`] over a 1-D array view.
pub fn log_sum_exp_array(values: ArrayView1<f64>) -> Result<f64> {
    match values.as_slice() {
        Some(slice) => log_sum_exp(slice),
        // strided views are copied out once
        None => log_sum_exp(&values.to_vec()),
    }
}

/// `ln(exp(a) + exp(b))`, the two-element case of [`log_sum_exp`].
pub fn log_add_exp(a: f64, b: f64) -> Result<f64> {
    if a.is_nan() || b.is_nan() {
        return Err(LseError::invalid("log_add_exp operand is NaN"));
    }
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if hi.is_infinite() {
        return Ok(hi);
    }
    Ok(hi + (lo - hi).exp().ln_1p())
}

/// Turn log-space weights into probabilities that sum to one.
pub fn normalize_log_probs(log_probs: ArrayView1<f64>) -> Result<Array1<f64>> {
    let total = log_sum_exp_array(log_probs)?;
    if !total.is_finite() {
        return Err(LseError::invalid(format!(
            "cannot normalize log weights with total mass exp({})",
            total
        )));
    }
    Ok(log_probs.mapv(|x| (x - total).exp()))
}

fn checked_max(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(LseError::invalid("log_sum_exp of an empty sequence"));
    }
    if let Some(index) = values.iter().position(|x| x.is_nan()) {
        return Err(LseError::invalid(format!("value at index {} is NaN", index)));
    }
    Ok(values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)))
}
