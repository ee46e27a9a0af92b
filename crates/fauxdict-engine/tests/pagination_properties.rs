use fauxdict_engine::{Paginator, Phase, filter_entries};
use fauxdict_types::{BATCH_SIZE, CYCLE_CAP, SourceList, SourceOrigin};

fn source(len: usize) -> SourceList {
    let items = (0..len).map(|i| format!("word-{}", i)).collect();
    let origin = SourceOrigin::Payload {
        location: "test".to_string(),
    };
    SourceList::new(items, origin).expect("non-empty source")
}

/// Drive the paginator until it stops issuing tickets; returns batches completed.
fn drain(paginator: &mut Paginator) -> usize {
    let mut batches = 0;
    while let Some(ticket) = paginator.request_more() {
        paginator.complete_batch(ticket);
        batches += 1;
    }
    batches
}

#[test]
fn test_entries_follow_cyclic_mapping() {
    let list = source(7);
    let mut paginator = Paginator::new();
    let first = paginator.attach_source(list.clone()).unwrap();
    paginator.complete_batch(first);
    drain(&mut paginator);

    for (n, entry) in paginator.entries().iter().enumerate() {
        assert_eq!(entry.id.get(), n as u64);
        assert_eq!(entry.text, list.cyclic(n as u64));
    }
}

#[test]
fn test_back_to_back_requests_produce_one_batch() {
    let mut paginator = Paginator::new();
    let first = paginator.attach_source(source(3)).unwrap();

    assert!(paginator.request_more().is_none());
    assert!(paginator.request_more().is_none());

    let appended = paginator.complete_batch(first);
    assert_eq!(appended.len(), BATCH_SIZE);
    assert_eq!(paginator.entries().len(), BATCH_SIZE);
    assert_eq!(paginator.state().page_count, 1);
    assert_eq!(paginator.phase(), Phase::Idle);
}

#[test]
fn test_continuation_ends_exactly_at_cap() {
    let list = source(4);
    let cap = CYCLE_CAP * list.len();
    let mut paginator = Paginator::new();
    let first = paginator.attach_source(list).unwrap();
    paginator.complete_batch(first);

    while paginator.entries().len() < cap {
        assert!(paginator.state().continuation);
        let ticket = paginator.request_more().expect("more pages before cap");
        paginator.complete_batch(ticket);
    }

    assert_eq!(paginator.entries().len(), cap);
    assert!(!paginator.state().continuation);
    assert_eq!(paginator.phase(), Phase::Exhausted);
    assert!(paginator.request_more().is_none());
    assert_eq!(paginator.entries().len(), cap);
}

#[test]
fn test_fallback_search_finds_single_quantum_entry() {
    let mut paginator = Paginator::new();
    let first = paginator
        .attach_source(SourceList::fallback("test"))
        .unwrap();
    paginator.complete_batch(first);

    let view = filter_entries(paginator.entries(), "quantum");
    assert_eq!(view.len(), 1);
    assert!(view[0].text.to_lowercase().contains("quantum squirrel"));

    let everything = filter_entries(paginator.entries(), "");
    assert_eq!(everything.as_ref(), paginator.entries());
}

#[test]
fn test_state_snapshot_shape() {
    let mut paginator = Paginator::new();
    let first = paginator.attach_source(source(2)).unwrap();
    paginator.complete_batch(first);

    insta::assert_json_snapshot!(paginator.state(), @r#"
    {
      "page_count": 1,
      "continuation": true,
      "loading": false
    }
    "#);
}
