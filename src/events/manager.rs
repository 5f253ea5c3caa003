use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::types::{Event, EventType};

/// Callback invoked for each event of a subscribed kind.
///
/// Handlers own their failure policy; nothing is reported back to the
/// emitter.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &Event);

    /// Name used in dispatch logs
    fn name(&self) -> &str;
}

/// Registry mapping event kinds to subscribed handlers
#[derive(Default)]
pub struct EventManager {
    handlers: HashMap<EventType, Vec<Arc<dyn EventHandler>>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one event kind
    pub fn subscribe(&mut self, event_type: EventType, handler: Arc<dyn EventHandler>) -> &mut Self {
        tracing::debug!(event = %event_type, handler = handler.name(), "Handler subscribed");
        self.handlers.entry(event_type).or_default().push(handler);
        self
    }

    /// Number of handlers subscribed to `event_type`
    pub fn subscriber_count(&self, event_type: EventType) -> usize {
        self.handlers.get(&event_type).map_or(0, Vec::len)
    }

    /// Dispatch an event to its subscribers in registration order.
    ///
    /// Returns the number of handlers invoked.
    pub async fn emit(&self, event: &Event) -> usize {
        let Some(handlers) = self.handlers.get(&event.event_type) else {
            tracing::trace!(event = %event.event_type, "No subscribers for event");
            return 0;
        };

        for handler in handlers {
            tracing::trace!(event = %event.event_type, handler = handler.name(), "Dispatching event");
            handler.handle(event).await;
        }

        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        name: String,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl EventHandler for Recorder {
        async fn handle(&self, event: &Event) {
            self.seen
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, event.event_type));
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn recorder(name: &str, seen: &Arc<Mutex<Vec<String>>>) -> Arc<dyn EventHandler> {
        Arc::new(Recorder {
            name: name.to_string(),
            seen: Arc::clone(seen),
        })
    }

    #[tokio::test]
    async fn test_emit_reaches_only_matching_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut manager = EventManager::new();
        manager
            .subscribe(EventType::TransferComplete, recorder("a", &seen))
            .subscribe(EventType::DownloadAdded, recorder("b", &seen));

        let invoked = manager
            .emit(&Event::new(EventType::TransferComplete, None))
            .await;

        assert_eq!(invoked, 1);
        assert_eq!(*seen.lock().unwrap(), vec!["a:transfer.complete".to_string()]);
    }

    #[tokio::test]
    async fn test_emit_preserves_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut manager = EventManager::new();
        manager
            .subscribe(EventType::TransferComplete, recorder("first", &seen))
            .subscribe(EventType::TransferComplete, recorder("second", &seen));

        assert_eq!(manager.subscriber_count(EventType::TransferComplete), 2);
        manager
            .emit(&Event::new(EventType::TransferComplete, None))
            .await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], "first:transfer.complete");
        assert_eq!(seen[1], "second:transfer.complete");
    }

    #[tokio::test]
    async fn test_emit_without_subscribers() {
        let manager = EventManager::new();
        assert_eq!(manager.subscriber_count(EventType::PluginReload), 0);
        assert_eq!(
            manager.emit(&Event::new(EventType::PluginReload, None)).await,
            0
        );
    }
}
