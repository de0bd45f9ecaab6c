// Persisted-record behavior across fresh adapter instances.
// Everything goes through MemoryKeys so the round trips run natively.

use birthday_bloom::audio::SoundCues;
use birthday_bloom::secret::SecretPuzzle;
use birthday_bloom::storage::{self, KeyValue, MemoryKeys};
use birthday_bloom::wishes::WishCollector;

#[test]
fn wish_list_survives_a_fresh_collector() {
    let store = MemoryKeys::new();
    {
        let mut first = WishCollector::new(&store);
        first.submit("a");
        first.submit("b");
    }
    let second = WishCollector::new(&store);
    assert_eq!(second.wishes(), ["a".to_owned(), "b".to_owned()]);
}

#[test]
fn fresh_store_yields_an_empty_list() {
    let store = MemoryKeys::new();
    assert_eq!(WishCollector::new(&store).count(), 0);
}

#[test]
fn mute_flag_round_trips_through_sound_cues() {
    let store = MemoryKeys::new();
    {
        let mut cues = SoundCues::new(&store);
        assert!(cues.is_muted());
        cues.toggle_mute();
    }
    let rehydrated = SoundCues::new(&store);
    assert!(!rehydrated.is_muted());
}

#[test]
fn secret_completion_short_circuits_new_instances() {
    let store = MemoryKeys::new();
    {
        let mut puzzle = SecretPuzzle::new(&store);
        puzzle.find_heart();
        puzzle.check_word("sneha");
        puzzle.pick_date(birthday_bloom::secret::SPECIAL_DATE);
    }
    assert!(SecretPuzzle::new(&store).is_complete());
}

#[test]
fn corrupt_records_fall_back_to_defaults() {
    let store = MemoryKeys::new();
    store.write(storage::WISHES_KEY, "{broken");
    store.write(storage::MUTED_KEY, "definitely");
    store.write(storage::PUZZLE_PROGRESS_KEY, "42");
    store.write(storage::VISITED_KEY, "yes");

    assert!(storage::wishes(&store).is_empty());
    assert!(storage::muted(&store));
    assert_eq!(storage::puzzle_progress(&store), 0);
    assert!(!storage::visited(&store));
}
