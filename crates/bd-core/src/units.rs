// bd-core/src/units.rs

/// Calendar convention used for every day/year conversion.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Universal gas constant [J/(mol·K)]
pub const R_GAS: f64 = 8.314_462_618;

#[inline]
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

#[inline]
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + KELVIN_OFFSET
}

/// Equivalent full cycles accumulated after `days` at a fixed daily cycling rate.
#[inline]
pub fn equivalent_cycles(days: f64, cycles_per_day: f64) -> f64 {
    days * cycles_per_day
}
