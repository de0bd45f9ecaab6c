//! Hidden three-step mini-hunt: find the heart, unscramble the name, pick the
//! special date. Not reachable from the default scene cycle; it exists for
//! visitors who poke around, and its completion marker is the only consumer
//! of the persisted puzzle-progress record.

use crate::storage::{self, KeyValue, PUZZLE_STEP_MAX};

pub const SCRAMBLED_LETTERS: &[char] = &['A', 'N', 'H', 'E', 'S'];
pub const SECRET_WORD: &str = "SNEHA";
pub const BALLOON_NUMBERS: &[u8] = &[12, 15, 17, 19, 21, 24];
pub const SPECIAL_DATE: u8 = 17;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretStep {
    FindHeart,
    UnscrambleWord,
    PickDate,
    Done,
}

/// Hunt state. A profile that already persisted the final step starts in
/// `Done` and skips straight to the completed view.
#[derive(Debug)]
pub struct SecretPuzzle<S: KeyValue> {
    store: S,
    step: SecretStep,
}

impl<S: KeyValue> SecretPuzzle<S> {
    pub fn new(store: S) -> Self {
        let step = if storage::puzzle_progress(&store) >= PUZZLE_STEP_MAX {
            SecretStep::Done
        } else {
            SecretStep::FindHeart
        };
        Self { store, step }
    }

    pub fn step(&self) -> SecretStep {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step == SecretStep::Done
    }

    /// Step 1: clicking the hidden heart always advances.
    pub fn find_heart(&mut self) {
        if self.step == SecretStep::FindHeart {
            self.step = SecretStep::UnscrambleWord;
        }
    }

    /// Step 2: unscramble attempt, case-insensitive.
    pub fn check_word(&mut self, input: &str) -> bool {
        if self.step != SecretStep::UnscrambleWord {
            return false;
        }
        if input.eq_ignore_ascii_case(SECRET_WORD) {
            self.step = SecretStep::PickDate;
            return true;
        }
        false
    }

    /// Step 3: the special date finishes the hunt and persists the marker.
    pub fn pick_date(&mut self, date: u8) -> bool {
        if self.step != SecretStep::PickDate {
            return false;
        }
        if date == SPECIAL_DATE {
            self.step = SecretStep::Done;
            storage::save_puzzle_progress(&self.store, PUZZLE_STEP_MAX);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeys;

    #[test]
    fn full_hunt_completes_and_persists() {
        let store = MemoryKeys::new();
        let mut puzzle = SecretPuzzle::new(&store);
        assert_eq!(puzzle.step(), SecretStep::FindHeart);

        puzzle.find_heart();
        assert_eq!(puzzle.step(), SecretStep::UnscrambleWord);

        assert!(!puzzle.check_word("hansa"));
        assert!(puzzle.check_word("sneha"));
        assert_eq!(puzzle.step(), SecretStep::PickDate);

        assert!(!puzzle.pick_date(21));
        assert!(puzzle.pick_date(SPECIAL_DATE));
        assert!(puzzle.is_complete());
        assert_eq!(storage::puzzle_progress(&store), PUZZLE_STEP_MAX);
    }

    #[test]
    fn persisted_completion_short_circuits() {
        let store = MemoryKeys::new();
        storage::save_puzzle_progress(&store, PUZZLE_STEP_MAX);
        let puzzle = SecretPuzzle::new(&store);
        assert!(puzzle.is_complete());
    }

    #[test]
    fn steps_reject_out_of_order_input() {
        let store = MemoryKeys::new();
        let mut puzzle = SecretPuzzle::new(&store);
        // Word and date do nothing before their step is reached.
        assert!(!puzzle.check_word(SECRET_WORD));
        assert!(!puzzle.pick_date(SPECIAL_DATE));
        assert_eq!(puzzle.step(), SecretStep::FindHeart);
        assert_eq!(storage::puzzle_progress(&store), 0);
    }

    #[test]
    fn scrambled_letters_spell_the_word() {
        let mut letters: Vec<char> = SCRAMBLED_LETTERS.to_vec();
        letters.sort_unstable();
        let mut word: Vec<char> = SECRET_WORD.chars().collect();
        word.sort_unstable();
        assert_eq!(letters, word);
        assert!(BALLOON_NUMBERS.contains(&SPECIAL_DATE));
    }
}
