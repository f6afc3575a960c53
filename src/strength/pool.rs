//! Character-pool estimation for the entropy heuristic.

use std::collections::HashSet;

use crate::alphabet::CharacterClass;

/// Size of the guessing pool implied by the characters of `text`.
///
/// Each character class with at least one member present contributes its
/// full set size; characters outside every class each contribute 1, counted
/// once per distinct character.
pub(super) fn estimate(text: &str) -> usize {
    let mut present = [false; CharacterClass::ALL.len()];
    let mut unclassified = HashSet::new();

    for c in text.chars() {
        match CharacterClass::of(c) {
            Some(class) => present[class as usize] = true,
            None => {
                unclassified.insert(c);
            }
        }
    }

    let classified: usize = CharacterClass::ALL
        .iter()
        .filter(|class| present[**class as usize])
        .map(|class| class.members().len())
        .sum();
    classified + unclassified.len()
}
