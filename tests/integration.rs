// Integration tests (native) for the `birthday-bloom` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use birthday_bloom::riddle::RiddleGate;
use birthday_bloom::scene::{Director, Scene};
use birthday_bloom::secret::{SPECIAL_DATE, SecretPuzzle, SecretStep};
use birthday_bloom::storage::{self, MemoryKeys};
use birthday_bloom::wishes::WishCollector;

#[test]
fn advance_lands_on_the_target_scene_from_anywhere() {
    for &from in Scene::ALL.iter() {
        for &to in Scene::ALL.iter() {
            let mut director = Director::new();
            director.advance(from);
            director.advance(to);
            assert_eq!(director.current(), to);
        }
    }
}

#[test]
fn riddle_gate_accepts_loose_matches() {
    for guess in ["candles", "Candles ", "the candles are lit"] {
        let mut gate = RiddleGate::birthday();
        assert!(gate.submit_guess(guess), "{guess:?} should solve the riddle");
    }
    let mut gate = RiddleGate::birthday();
    assert!(!gate.submit_guess("cake"));
}

#[test]
fn hints_wait_for_the_second_wrong_guess() {
    let mut gate = RiddleGate::birthday();
    assert!(!gate.submit_guess("balloons"));
    assert_eq!(gate.hint(), None);
    assert!(!gate.submit_guess("cake"));
    assert!(gate.hint().is_some());
}

#[test]
fn wish_submission_end_to_end() {
    let store = MemoryKeys::new();
    let mut collector = WishCollector::new(&store);
    assert_eq!(collector.submit(""), None);
    assert_eq!(collector.submit("   "), None);
    assert_eq!(collector.count(), 0);

    assert_eq!(collector.submit("Have fun!"), Some("Have fun!"));
    assert_eq!(collector.count(), 1);
    assert_eq!(
        storage::wishes(&store).last().map(String::as_str),
        Some("Have fun!")
    );
}

#[test]
fn secret_hunt_runs_start_to_finish() {
    let store = MemoryKeys::new();
    let mut puzzle = SecretPuzzle::new(&store);
    puzzle.find_heart();
    assert_eq!(puzzle.step(), SecretStep::UnscrambleWord);
    assert!(puzzle.check_word("Sneha"));
    assert!(puzzle.pick_date(SPECIAL_DATE));
    assert!(puzzle.is_complete());
}

// Basic dataset sanity checks: the card never renders empty content.
#[test]
fn card_datasets_are_nonempty() {
    assert!(!birthday_bloom::MEMORIES.is_empty());
    assert!(!birthday_bloom::LETTER_TEXT.is_empty());
    assert!(!birthday_bloom::BIRTHDAY_NAME.is_empty());
    for (emoji, caption) in birthday_bloom::MEMORIES {
        assert!(!emoji.is_empty());
        assert!(!caption.is_empty());
    }
}
