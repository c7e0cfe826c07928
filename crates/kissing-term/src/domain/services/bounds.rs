use crate::domain::models::PowerOfTwo;

/// Kabatiansky–Levenshtein lower exponent: `2^(0.2075 n) <= K(n)`.
pub const LOWER_EXPONENT: f64 = 0.2075;
/// Kabatiansky–Levenshtein upper exponent: `K(n) <= 2^(0.401 n)`.
pub const UPPER_EXPONENT: f64 = 0.401;

pub struct BoundEstimator {}

impl BoundEstimator {
    /// Returns `(lower, upper)` as powers of two, finite for every dimension.
    pub fn estimate(dimension: u64) -> (PowerOfTwo, PowerOfTwo) {
        let n = dimension as f64;

        (
            PowerOfTwo::new(LOWER_EXPONENT * n),
            PowerOfTwo::new(UPPER_EXPONENT * n),
        )
    }
}
