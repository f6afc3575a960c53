//! Password generation and strength estimation
//!
//! This library is the core behind a password-generator frontend: it derives
//! a usable alphabet from a set of enabled character classes, draws uniform
//! random passwords from it, and scores arbitrary text with an entropy
//! heuristic mapped to a display severity and color. It holds no state of
//! its own; the frontend owns the selection and length and passes them in.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use passgen_core::{ClassSelection, UsableAlphabet, color_for, generate, score, severity};
//! use secrecy::SecretString;
//!
//! let selection = ClassSelection::default(); // all four classes enabled
//! let alphabet = UsableAlphabet::build(&selection);
//!
//! let password = generate(16, &alphabet);
//! assert_eq!(password.expose().chars().count(), 16);
//!
//! let bits = score(&SecretString::from(password.expose().to_string()));
//! let color = color_for(severity(bits));
//! assert_eq!(color.a, 255);
//! ```

// Internal modules
mod alphabet;
mod generator;
mod strength;

// Public API
pub use alphabet::{AlphabetError, CharacterClass, ClassSelection, UsableAlphabet};
pub use generator::{GeneratedPassword, Outcome, generate};
pub use strength::{SeverityColor, color_for, score, severity};
