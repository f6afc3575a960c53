//! Password generation from a usable alphabet.
//!
//! Each character is an independent uniform draw from the alphabet using the
//! operating system's secure random source. A draw whose secure read fails
//! falls back to a non-cryptographic PRNG seeded from process state, and the
//! whole password is marked [`Outcome::Degraded`]. Generation always
//! completes; there is no retry policy.

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng};
use rand_core::RngCore;
use secrecy::{ExposeSecret, SecretString};

use crate::alphabet::UsableAlphabet;

/// Trust level of a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every draw used the secure source.
    Secure,
    /// One or more draws fell back to the seeded PRNG.
    Degraded,
}

/// A generated password and the trust level of the draws that produced it.
///
/// The text is zeroized on drop. Ephemeral: callers replace it wholesale on
/// regeneration or user edit.
#[derive(Debug)]
pub struct GeneratedPassword {
    text: SecretString,
    outcome: Outcome,
}

impl GeneratedPassword {
    /// The password text.
    pub fn expose(&self) -> &str {
        self.text.expose_secret()
    }

    /// Consumes the password, handing over the wrapped secret.
    pub fn into_secret(self) -> SecretString {
        self.text
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_degraded(&self) -> bool {
        self.outcome == Outcome::Degraded
    }
}

/// Generates a password of `length` characters drawn from `alphabet`.
///
/// `length == 0` yields the empty password with [`Outcome::Secure`]. The
/// degenerate sentinel alphabet yields `length` empty-string draws, i.e. the
/// empty password, also [`Outcome::Secure`].
///
/// Reads only its arguments and writes only its own accumulator, so
/// concurrent calls with distinct inputs are safe.
///
/// # Returns
/// The password text and the trust level of the draws that produced it:
/// [`Outcome::Secure`] when every draw used the secure source,
/// [`Outcome::Degraded`] when one or more draws fell back.
pub fn generate(length: usize, alphabet: &UsableAlphabet) -> GeneratedPassword {
    generate_with(length, alphabet, secure_index)
}

/// Generation loop with an injectable secure draw, so the fallback path can
/// be exercised without taking the OS random source down.
fn generate_with(
    length: usize,
    alphabet: &UsableAlphabet,
    mut secure: impl FnMut(usize) -> Result<usize, rand_core::Error>,
) -> GeneratedPassword {
    let chars = alphabet.chars();
    let mut text = String::with_capacity(length);
    let mut outcome = Outcome::Secure;
    let mut fallback: Option<SmallRng> = None;

    for _ in 0..length {
        let index = match secure(chars.len()) {
            Ok(index) => index,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Secure random source unavailable: {}; using seeded PRNG", _err);
                outcome = Outcome::Degraded;
                fallback
                    .get_or_insert_with(|| SmallRng::seed_from_u64(process_seed()))
                    .gen_range(0..chars.len())
            }
        };
        text.push_str(chars[index]);
    }

    GeneratedPassword {
        text: SecretString::from(text),
        outcome,
    }
}

/// Uniform index in `[0, bound)` from the OS random source.
///
/// Rejection sampling keeps the modulo unbiased. `bound` is at least 1 since
/// the alphabet is never empty.
fn secure_index(bound: usize) -> Result<usize, rand_core::Error> {
    let bound = bound as u64;
    let zone = u64::MAX - u64::MAX % bound;
    loop {
        let mut buf = [0u8; 8];
        OsRng.try_fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// Seed for the fallback PRNG, mixed from wall clock and pid.
fn process_seed() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ (u64::from(std::process::id()) << 32)
}
