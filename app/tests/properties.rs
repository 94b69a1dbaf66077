//! Property-based tests for the to-do list state.

use proptest::prelude::*;
use taskdeck::TodoState;

fn ts() -> String {
    "2025-01-01 00:00:00".to_owned()
}

proptest! {
    /// Every id returned by `add` is strictly greater than all
    /// previously returned ids, regardless of the add sequence.
    #[test]
    fn ids_strictly_increase(contents in proptest::collection::vec("[a-z]{1,12}", 1..50)) {
        let mut state = TodoState::new();
        let mut last = 0;

        for content in contents {
            let id = state.add(&content, ts());
            prop_assert!(id > last);
            last = id;
        }
    }

    /// Ids stay unique within the list even when entries are removed
    /// in between adds; removed ids are never reissued.
    #[test]
    fn ids_stay_unique_across_removals(
        contents in proptest::collection::vec("[a-z]{1,12}", 1..30),
        remove_every in 2usize..5,
    ) {
        let mut state = TodoState::new();
        let mut issued = Vec::new();

        for (i, content) in contents.iter().enumerate() {
            let id = state.add(content, ts());
            prop_assert!(!issued.contains(&id));
            issued.push(id);

            if i % remove_every == 0 {
                state.remove(id);
            }
        }

        let mut ids: Vec<u64> = state.entries.iter().map(|e| e.id).collect();
        let len_before = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), len_before);
    }

    /// Toggling any entry twice restores the whole list to its
    /// previous completion state.
    #[test]
    fn double_toggle_is_identity(
        contents in proptest::collection::vec("[a-z]{1,12}", 1..20),
        target_index in 0usize..20,
    ) {
        let mut state = TodoState::new();
        for content in &contents {
            state.add(content, ts());
        }
        let target = state.entries[target_index % state.entries.len()].id;

        let before: Vec<bool> = state.entries.iter().map(|e| e.completed).collect();
        state.toggle_complete(target);
        state.toggle_complete(target);
        let after: Vec<bool> = state.entries.iter().map(|e| e.completed).collect();

        prop_assert_eq!(before, after);
    }
}
