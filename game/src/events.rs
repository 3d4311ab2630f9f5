use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use types::QuizEvent;

/// Fan-out of quiz events. Subscribers that hang up are dropped on the next
/// emit.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<UnboundedSender<QuizEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<QuizEvent> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, event: QuizEvent) {
        log::trace!(
            "Emitting event to {} subscribers: {:?}",
            self.subscribers.len(),
            event
        );
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_gets_the_event() {
        let mut bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.emit(QuizEvent::Loading(true));

        assert_eq!(first.try_recv().unwrap(), QuizEvent::Loading(true));
        assert_eq!(second.try_recv().unwrap(), QuizEvent::Loading(true));
    }

    #[test]
    fn test_closed_subscribers_are_dropped() {
        let mut bus = EventBus::new();
        let mut kept = bus.subscribe();
        drop(bus.subscribe());

        bus.emit(QuizEvent::AnswerChecked { is_correct: true });
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(
            kept.try_recv().unwrap(),
            QuizEvent::AnswerChecked { is_correct: true }
        );
    }
}
