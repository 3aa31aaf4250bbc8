//! Number formatting for script literals.

/// Format a number the way gnuplot literals read best: shortest round-trip
/// decimal, switching to exponent notation for very large or very small
/// magnitudes (`1.7976931348623157e308`, `1e-5`). Non-finite values print
/// as `inf`, `-inf` and `NaN` unchanged.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if a.is_finite() && !(1e-4..1e21).contains(&a) {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}
