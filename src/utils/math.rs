/// Standard normal CDF.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

/// Two-sided p-value for `H0: effect = 0` under a normal approximation.
///
/// A zero standard error yields `0.0` for a non-zero estimate and `1.0`
/// otherwise.
pub fn two_sided_p_value(estimate: f64, std_error: f64) -> f64 {
    if std_error == 0.0 {
        return if estimate == 0.0 { 1.0 } else { 0.0 };
    }
    let z = (estimate / std_error).abs();
    (2.0 * (1.0 - normal_probability(z))).clamp(0.0, 1.0)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (`n - 1` denominator). `NaN` below two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Quantile of already sorted data, linear interpolation between order
/// statistics.
pub fn quantile_linear_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let i = pos.floor() as usize;
    let j = pos.ceil() as usize;
    if i == j {
        return sorted[i];
    }
    let t = pos - i as f64;
    (1.0 - t) * sorted[i] + t * sorted[j]
}

#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
