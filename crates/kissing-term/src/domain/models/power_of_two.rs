#[cfg(test)]
#[path = "power_of_two_test.rs"]
mod tests;

use std::fmt;

/// A positive real stored as its base-2 exponent, so `2^n` stays
/// representable long after `f64` itself would overflow.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PowerOfTwo {
    exponent: f64,
}

impl PowerOfTwo {
    pub fn new(exponent: f64) -> PowerOfTwo {
        PowerOfTwo { exponent }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Plain value; infinite once the exponent passes 1024.
    pub fn value(&self) -> f64 {
        2f64.powf(self.exponent)
    }
}

/// Scientific notation with three fraction digits and a signed, at least two
/// digit exponent, e.g. `1.413e+04` or `2.083e+312`.
impl fmt::Display for PowerOfTwo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = self.exponent * std::f64::consts::LOG10_2;
        let mut exponent = decimal.floor();
        let mut mantissa = format!("{:.3}", 10f64.powf(decimal - exponent));

        // Rounding may carry the mantissa up to 10.000.
        if mantissa.starts_with("10") {
            mantissa = "1.000".to_string();
            exponent += 1.0;
        }

        let sign = if exponent < 0.0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs() as i64)
    }
}
