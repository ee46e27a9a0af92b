use std::sync::{Arc, Mutex};

use fauxdict_engine::{Coordinator, PreferenceStore, Result};
use fauxdict_types::{Preference, SourceList, SourceOrigin};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// In-memory store that records every write
#[derive(Clone, Default)]
struct RecordingStore {
    initial: Preference,
    writes: Arc<Mutex<Vec<Preference>>>,
}

impl PreferenceStore for RecordingStore {
    fn load(&self) -> Preference {
        self.initial
    }

    fn save(&mut self, preference: Preference) -> Result<()> {
        self.writes.lock().unwrap().push(preference);
        Ok(())
    }
}

fn loaded_coordinator(store: RecordingStore) -> Coordinator {
    let mut coordinator = Coordinator::new(Box::new(store));
    let ticket = coordinator
        .attach_source(SourceList::fallback("test"))
        .unwrap();
    coordinator.complete_batch(ticket);
    coordinator
}

#[test]
fn test_double_toggle_restores_and_writes_twice() {
    let store = RecordingStore::default();
    let writes = store.writes.clone();
    let mut coordinator = Coordinator::new(Box::new(store));
    let original = coordinator.preference();

    coordinator.toggle_theme();
    coordinator.toggle_theme();

    assert_eq!(coordinator.preference(), original);
    let writes = writes.lock().unwrap();
    assert_eq!(writes.len(), 2);
    assert_ne!(writes[0], original);
    assert_eq!(writes[1], original);
}

#[test]
fn test_sentinel_ignored_while_loading() {
    let mut coordinator = Coordinator::new(Box::new(RecordingStore::default()));
    let ticket = coordinator
        .attach_source(SourceList::fallback("test"))
        .unwrap();

    assert!(coordinator.is_loading());
    assert!(coordinator.on_sentinel_visible().is_none());

    coordinator.complete_batch(ticket);
    assert!(coordinator.on_sentinel_visible().is_some());
}

#[test]
fn test_random_pick_stays_within_filter() {
    let mut coordinator = loaded_coordinator(RecordingStore::default());
    coordinator.set_search_term("QUANTUM");
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let id = coordinator.pick_random_visible(&mut rng).unwrap();
        assert_eq!(id.get(), 2);
        assert_eq!(coordinator.take_focus_request(), Some(id));
    }
}

#[test]
fn test_random_pick_on_empty_view_is_noop() {
    let mut coordinator = loaded_coordinator(RecordingStore::default());
    coordinator.set_search_term("no such word anywhere");
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(coordinator.visible_count(), 0);
    assert!(coordinator.pick_random_visible(&mut rng).is_none());
    assert!(coordinator.take_focus_request().is_none());
}

#[test]
fn test_visible_entries_preserve_order() {
    let mut coordinator = Coordinator::new(Box::new(RecordingStore::default()));
    let origin = SourceOrigin::Payload {
        location: "test".to_string(),
    };
    let list = SourceList::new(vec!["apple".into(), "banana".into()], origin).unwrap();
    let ticket = coordinator.attach_source(list).unwrap();
    coordinator.complete_batch(ticket);

    coordinator.set_search_term("an");
    let ids: Vec<u64> = coordinator
        .visible_entries()
        .iter()
        .map(|e| e.id.get())
        .collect();
    assert_eq!(ids, vec![1, 3, 5, 7, 9]);
}
