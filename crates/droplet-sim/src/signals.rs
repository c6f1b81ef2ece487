//! Typed publish/subscribe for signals and effect requests.
//!
//! Systems push into a per-tick `TickEvents` buffer; at the end of each tick
//! the engine publishes the buffer, in emission order, to every subscriber
//! and embeds it in the snapshot.

use std::sync::mpsc::{channel, Receiver, Sender};

use droplet_core::events::{EffectRequest, Signal};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A live subscription. Dropping the receiver also ends it; the bus prunes
/// disconnected subscribers on the next publish.
#[derive(Debug)]
pub struct Subscription<T> {
    pub id: SubscriptionId,
    pub receiver: Receiver<T>,
}

/// Ordered fan-out to channel subscribers.
#[derive(Debug)]
pub struct SignalBus<T> {
    subscribers: Vec<(SubscriptionId, Sender<T>)>,
    next_id: u64,
}

impl<T> Default for SignalBus<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: Clone> SignalBus<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription<T> {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (tx, rx) = channel();
        self.subscribers.push((id, tx));
        Subscription { id, receiver: rx }
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver `item` to every subscriber in subscription order.
    pub fn publish(&mut self, item: &T) {
        self.subscribers
            .retain(|(_, tx)| tx.send(item.clone()).is_ok());
    }

    pub fn publish_all<'a>(&mut self, items: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for item in items {
            self.publish(item);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Signals and effect requests raised during one tick.
#[derive(Debug, Default)]
pub struct TickEvents {
    pub signals: Vec<Signal>,
    pub effects: Vec<EffectRequest>,
}

impl TickEvents {
    pub fn signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub fn effect(&mut self, effect: EffectRequest) {
        self.effects.push(effect);
    }
}
