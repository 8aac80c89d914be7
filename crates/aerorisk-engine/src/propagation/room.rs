//! Single-zone transport and dose formulas.

/// Below this `L·t` the build-up bracket is evaluated by its Taylor series.
const SERIES_THRESHOLD: f64 = 1e-2;

/// Time-averaged concentration per unit emission rate (h/m³).
///
/// `removal_rate` is `L` in 1/h, `duration_hours` is `t`.
pub fn concentration_factor(
    removal_rate: f64,
    room_volume_m3: f64,
    duration_hours: f64,
    exhalation_efficiency: f64,
) -> f64 {
    let build_up = build_up(removal_rate * duration_hours);
    (1.0 - exhalation_efficiency) / (removal_rate * room_volume_m3) * build_up
}

/// `1 − (1 − e^(−x)) / x`, the mean fraction of steady-state concentration
/// reached over a session of length `x` time constants.
///
/// The closed form cancels catastrophically as `x → 0`, so small `x` uses
/// `x/2 − x²/6 + x³/24 − x⁴/120 + x⁵/720`, whose truncation error is below
/// `x⁶/5040`.
pub fn build_up(x: f64) -> f64 {
    if x < SERIES_THRESHOLD {
        x * (1.0 / 2.0 - x * (1.0 / 6.0 - x * (1.0 / 24.0 - x * (1.0 / 120.0 - x / 720.0))))
    } else {
        1.0 + (-x).exp_m1() / x
    }
}

/// Quanta inhaled over one session.
pub fn inhaled_dose(
    concentration: f64,
    breathing_rate: f64,
    duration_hours: f64,
    inhalation_efficiency: f64,
) -> f64 {
    concentration * breathing_rate * duration_hours * (1.0 - inhalation_efficiency)
}

/// Exponential dose-response: `1 − e^(−dose)`.
pub fn dose_response(dose: f64) -> f64 {
    -(-dose).exp_m1()
}
