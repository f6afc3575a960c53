//! Character classes and the usable alphabet derived from them.
//!
//! The usable alphabet is the ordered concatenation of every enabled class's
//! member set, recomputed whenever the selection changes.

use thiserror::Error;

/// Lowercase letters, in declaration order.
const LOWERCASE: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

/// Uppercase letters, in declaration order.
const UPPERCASE: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// Decimal digits.
const NUMBERS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// Punctuation accepted in generated passwords.
const SYMBOLS: &[&str] = &[
    "!", "#", "$", "%", "&", "+", "-", ".", "<", "=", ">", "?", "@",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("No character class enabled")]
    NoClassEnabled,
}

/// A named category of password characters with a fixed member set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order their members are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// The fixed, ordered member set of this class.
    pub fn members(self) -> &'static [&'static str] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Classifies an arbitrary character, `None` if it belongs to no class.
    pub fn of(c: char) -> Option<CharacterClass> {
        match c {
            'a'..='z' => Some(CharacterClass::Lowercase),
            'A'..='Z' => Some(CharacterClass::Uppercase),
            '0'..='9' => Some(CharacterClass::Numbers),
            '!' | '#' | '$' | '%' | '&' | '+' | '-' | '.' | '<' | '=' | '>' | '?' | '@' => {
                Some(CharacterClass::Symbols)
            }
            _ => None,
        }
    }
}

/// Which character classes the alphabet draws from.
///
/// All-false is a valid state; no class is privileged. `Default` enables
/// every class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for ClassSelection {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl ClassSelection {
    /// A selection with no class enabled.
    pub fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.lowercase || self.uppercase || self.numbers || self.symbols
    }
}

/// The ordered character sequence the generator samples from.
///
/// Built by concatenating the member sets of all enabled classes in
/// declaration order. An all-disabled selection yields the single-entry
/// empty-string sentinel rather than an empty sequence, so index sampling
/// stays total; [`is_degenerate`](Self::is_degenerate) reports that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsableAlphabet {
    chars: Vec<&'static str>,
}

impl UsableAlphabet {
    /// Builds the alphabet for a selection. Total: never fails, never empty.
    pub fn build(selection: &ClassSelection) -> Self {
        let mut chars = Vec::new();
        for class in CharacterClass::ALL {
            if selection.enabled(class) {
                chars.extend_from_slice(class.members());
            }
        }
        if chars.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("No character class enabled, using degenerate sentinel alphabet");
            chars.push("");
        }
        Self { chars }
    }

    /// Strict variant of [`build`](Self::build) for callers that prefer an
    /// explicit error over the degenerate sentinel.
    ///
    /// # Returns
    /// - `Ok(alphabet)` if at least one class is enabled
    /// - `Err(AlphabetError::NoClassEnabled)` for an all-disabled selection
    pub fn try_build(selection: &ClassSelection) -> Result<Self, AlphabetError> {
        if !selection.any_enabled() {
            return Err(AlphabetError::NoClassEnabled);
        }
        Ok(Self::build(selection))
    }

    /// The characters in sampling order.
    pub fn chars(&self) -> &[&'static str] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: the sentinel keeps at least one entry even with every
    /// class disabled.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when this is the all-disabled sentinel.
    pub fn is_degenerate(&self) -> bool {
        self.chars.len() == 1 && self.chars[0].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharacterClass::Lowercase.members().len(), 26);
        assert_eq!(CharacterClass::Uppercase.members().len(), 26);
        assert_eq!(CharacterClass::Numbers.members().len(), 10);
        assert_eq!(CharacterClass::Symbols.members().len(), 13);
    }

    #[test]
    fn test_classify_agrees_with_members() {
        for class in CharacterClass::ALL {
            for member in class.members() {
                let c = member.chars().next().unwrap();
                assert_eq!(CharacterClass::of(c), Some(class), "misclassified {:?}", c);
            }
        }
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('^'), None);
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn test_build_full_selection() {
        let alphabet = UsableAlphabet::build(&ClassSelection::default());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 13);
        assert!(!alphabet.is_degenerate());
    }

    #[test]
    fn test_build_size_matches_enabled_classes() {
        let selection = ClassSelection {
            lowercase: true,
            uppercase: false,
            numbers: true,
            symbols: false,
        };
        let alphabet = UsableAlphabet::build(&selection);
        assert_eq!(alphabet.len(), 26 + 10);
        for c in alphabet.chars() {
            let class = CharacterClass::of(c.chars().next().unwrap()).unwrap();
            assert!(selection.enabled(class), "{:?} from disabled class", c);
        }
    }

    #[test]
    fn test_build_preserves_declaration_order() {
        let selection = ClassSelection {
            lowercase: true,
            uppercase: false,
            numbers: true,
            symbols: false,
        };
        let alphabet = UsableAlphabet::build(&selection);
        assert_eq!(alphabet.chars()[0], "a");
        assert_eq!(alphabet.chars()[25], "z");
        assert_eq!(alphabet.chars()[26], "1");
        assert_eq!(alphabet.chars()[35], "0");
    }

    #[test]
    fn test_build_all_disabled_yields_sentinel() {
        let alphabet = UsableAlphabet::build(&ClassSelection::none());
        assert_eq!(alphabet.chars(), [""]);
        assert_eq!(alphabet.len(), 1);
        assert!(!alphabet.is_empty());
        assert!(alphabet.is_degenerate());
    }

    #[test]
    fn test_try_build_rejects_all_disabled() {
        let result = UsableAlphabet::try_build(&ClassSelection::none());
        assert_eq!(result, Err(AlphabetError::NoClassEnabled));
    }

    #[test]
    fn test_try_build_accepts_single_class() {
        let selection = ClassSelection {
            symbols: true,
            ..ClassSelection::none()
        };
        let alphabet = UsableAlphabet::try_build(&selection).unwrap();
        assert_eq!(alphabet.len(), 13);
    }
}
