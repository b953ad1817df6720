use item_collection::{CollectionConfig, ItemCollection, ItemId, LookupMode, SampleItem};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<F: FnOnce()>(directive: &str, f: F) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .without_time()
                .with_target(false),
        );

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn test_trace_level_emits_collection_events() {
    let logs = capture_logs("item_collection=trace", || {
        let config = CollectionConfig::new("traced").lookup_mode(LookupMode::Coercive);
        let mut collection = ItemCollection::with_config(config);
        collection.add_item(SampleItem::new(1, "one"));
        collection.add_items(vec![SampleItem::new("two", "two")]);

        assert!(collection.get_item_by_id(&ItemId::from("1")).is_some());
        assert!(collection.get_item_by_id(&ItemId::from("three")).is_none());
        assert_eq!(collection.count(), 2);
    });

    assert!(logs.contains("item collection created"), "{}", logs);
    assert!(logs.contains("lookup_mode=coercive"), "{}", logs);
    assert_eq!(logs.matches("item added").count(), 2, "{}", logs);
    assert_eq!(logs.matches("item lookup missed").count(), 1, "{}", logs);
    assert!(logs.contains("collection=traced"), "{}", logs);
}

#[test]
fn test_debug_level_hides_per_item_events() {
    let logs = capture_logs("item_collection=debug", || {
        let mut collection = ItemCollection::from_items(vec![SampleItem::new(1, "one")]);
        collection.add_item(SampleItem::new(2, "two"));
        assert!(collection.get_item_by_id(&ItemId::from(3)).is_none());
    });

    assert!(logs.contains("item collection created"), "{}", logs);
    assert!(logs.contains("count=1"), "{}", logs);
    assert!(!logs.contains("item added"), "{}", logs);
    assert!(!logs.contains("item lookup missed"), "{}", logs);
}
