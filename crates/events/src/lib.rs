#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for zprune
//!
//! The retention crates never print. Everything a user sees about a pruning
//! pass travels as an [`AppEvent`] through an [`EventSender`]; the CLI drains
//! the receiver and decides how to render and log each event.

pub mod events;
pub use events::{AppEvent, GeneralEvent, ScanEvent};

use std::sync::mpsc::{Receiver, Sender};

/// Type alias for the event sender
pub type EventSender = Sender<AppEvent>;

/// Type alias for the event receiver
pub type EventReceiver = Receiver<AppEvent>;

/// Create a new event channel
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    std::sync::mpsc::channel()
}

/// The unified trait for emitting events
///
/// Implemented for a raw `EventSender` and for any struct that carries one.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            // Ignore send errors - if receiver is dropped, we just continue
            let _ = sender.send(event);
        }
    }

    /// Emit a warning event with context
    fn emit_warning_with_context(&self, message: impl Into<String>, context: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning_with_context(
            message, context,
        )));
    }
}

impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}

impl EventEmitter for Option<EventSender> {
    fn event_sender(&self) -> Option<&EventSender> {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_emits_in_order() {
        let (tx, rx) = channel();
        tx.emit_warning_with_context("first", "World");
        tx.emit_warning_with_context("second", "World_player");

        let events: Vec<AppEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            AppEvent::General(GeneralEvent::Warning { message, .. }) if message == "first"
        ));
        assert!(matches!(
            &events[1],
            AppEvent::General(GeneralEvent::Warning { context, .. }) if context == "World_player"
        ));
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        let (tx, rx) = channel();
        drop(rx);
        tx.emit_warning_with_context("nobody listening", "World");
    }

    #[test]
    fn absent_sender_is_silent() {
        let none: Option<EventSender> = None;
        none.emit_warning_with_context("ignored", "World");
    }
}
