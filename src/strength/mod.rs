//! Entropy-based strength estimation
//!
//! Scores arbitrary text by the character classes it actually contains, so
//! user-edited passwords are scored meaningfully, not just generated ones.

mod color;
mod pool;

pub use color::{SeverityColor, color_for};

use secrecy::{ExposeSecret, SecretString};

/// Score at which severity saturates, in bits.
const SEVERITY_CEILING: f64 = 100.0;

/// Estimates the strength of `text` in bits of entropy, rounded to the
/// nearest integer.
///
/// The estimate treats the text as drawn uniformly from the pool of every
/// character class it contains (plus distinct characters outside all
/// classes): `length * log2(pool)`. The empty string scores 0.
///
/// # Returns
/// A non-negative integer-valued bit count.
pub fn score(text: &SecretString) -> f64 {
    let text = text.expose_secret();
    let length = text.chars().count();
    if length == 0 {
        return 0.0;
    }
    let pool = pool::estimate(text);
    (length as f64 * (pool as f64).log2()).round()
}

/// Maps a strength score to a display severity fraction in `[0, 1]`.
///
/// Clamps into `[0, 100]` then normalizes; scores at or above the ceiling
/// saturate at 1.0, negative inputs at 0.0.
///
/// # Returns
/// A fraction in `[0, 1]`, monotonically non-decreasing in `score`.
pub fn severity(score: f64) -> f64 {
    score.clamp(0.0, SEVERITY_CEILING) / SEVERITY_CEILING
}
