//! Typed synchronous publish/subscribe bus.
//!
//! Channels form a closed enumeration; publishing fans out to every
//! registered subscriber in subscription order on the calling thread.
//! Unsubscribing tombstones the subscriber's slot in O(1) without
//! disturbing the fan-out order of the remaining subscribers, and frees the
//! channel entry once its last subscriber is gone.

use std::collections::HashMap;

use crate::state::view::ViewOptions;
use crate::stereo::Feature;

/// The closed set of bus channels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Channel {
    FeatureAdded,
    ViewChanged,
}

/// Payload delivered to subscribers.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Event {
    FeatureAdded(Feature),
    ViewChanged(ViewOptions),
}

impl Event {
    /// The channel this event publishes on.
    pub fn channel(&self) -> Channel {
        match self {
            Event::FeatureAdded(_) => Channel::FeatureAdded,
            Event::ViewChanged(_) => Channel::ViewChanged,
        }
    }
}

type Callback = Box<dyn FnMut(&Event)>;

/// Handle returned by [`EventBus::subscribe`]; pass it back to
/// [`EventBus::unsubscribe`] to remove exactly that subscription.
#[derive(Debug)]
pub struct Subscription {
    channel: Channel,
    slot: usize,
    id: u64,
}

struct Slot {
    id: u64,
    callback: Option<Callback>,
}

struct ChannelEntry {
    /// Slots in subscription order; unsubscribed slots are tombstoned so
    /// later subscribers keep their position.
    slots: Vec<Slot>,
    live: usize,
}

/// Synchronous event bus keyed by [`Channel`].
#[derive(Default)]
pub struct EventBus {
    channels: HashMap<Channel, ChannelEntry>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> EventBus {
        EventBus::default()
    }

    /// Registers a callback on a channel and returns its handle.
    pub fn subscribe(
        &mut self,
        channel: Channel,
        callback: impl FnMut(&Event) + 'static,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;

        let entry = self.channels.entry(channel).or_insert_with(|| ChannelEntry {
            slots: Vec::new(),
            live: 0,
        });
        entry.slots.push(Slot {
            id,
            callback: Some(Box::new(callback)),
        });
        entry.live += 1;

        Subscription {
            channel,
            slot: entry.slots.len() - 1,
            id,
        }
    }

    /// Removes exactly the given subscription. Frees the channel entry when
    /// it was the last one.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        let Some(entry) = self.channels.get_mut(&subscription.channel) else {
            return;
        };

        let valid = entry
            .slots
            .get(subscription.slot)
            .is_some_and(|slot| slot.id == subscription.id && slot.callback.is_some());
        if !valid {
            return;
        }

        entry.slots[subscription.slot].callback = None;
        entry.live -= 1;
        if entry.live == 0 {
            self.channels.remove(&subscription.channel);
        }
    }

    /// Delivers the event to every subscriber of its channel, in
    /// subscription order.
    pub fn publish(&mut self, event: &Event) {
        let Some(entry) = self.channels.get_mut(&event.channel()) else {
            return;
        };

        for slot in &mut entry.slots {
            if let Some(callback) = slot.callback.as_mut() {
                callback(event);
            }
        }
    }

    /// Number of live subscribers on a channel.
    #[allow(dead_code)] // Used by tests and diagnostics
    pub fn subscriber_count(&self, channel: Channel) -> usize {
        self.channels.get(&channel).map_or(0, |entry| entry.live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn feature_event() -> Event {
        Event::FeatureAdded(Feature::normalize("plane", "20", "83").unwrap())
    }

    #[test]
    fn test_fan_out_in_subscription_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            bus.subscribe(Channel::FeatureAdded, move |_| {
                order.borrow_mut().push(tag);
            });
        }

        bus.publish(&feature_event());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_preserves_remaining_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut handles = Vec::new();
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            handles.push(bus.subscribe(Channel::FeatureAdded, move |_| {
                order.borrow_mut().push(tag);
            }));
        }

        // Drop the middle subscriber
        bus.unsubscribe(handles.remove(1));
        bus.publish(&feature_event());

        assert_eq!(*order.borrow(), vec!["first", "third"]);
        assert_eq!(bus.subscriber_count(Channel::FeatureAdded), 2);
    }

    #[test]
    fn test_last_unsubscribe_frees_channel() {
        let mut bus = EventBus::new();
        let handle = bus.subscribe(Channel::ViewChanged, |_| {});
        assert_eq!(bus.subscriber_count(Channel::ViewChanged), 1);

        bus.unsubscribe(handle);
        assert_eq!(bus.subscriber_count(Channel::ViewChanged), 0);
        assert!(!bus.channels.contains_key(&Channel::ViewChanged));
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut bus = EventBus::new();
        let first = bus.subscribe(Channel::FeatureAdded, |_| {});
        bus.unsubscribe(first);

        // A new subscription on the rebuilt channel gets slot 0 again; a
        // second unsubscribe with a stale handle must not remove it.
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        let _live = bus.subscribe(Channel::FeatureAdded, move |_| {
            *count_clone.borrow_mut() += 1;
        });

        bus.unsubscribe(Subscription {
            channel: Channel::FeatureAdded,
            slot: 0,
            id: 0,
        });

        bus.publish(&feature_event());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_publish_without_subscribers_is_a_no_op() {
        let mut bus = EventBus::new();
        bus.publish(&feature_event());
    }

    #[test]
    fn test_events_route_to_their_own_channel() {
        let mut bus = EventBus::new();
        let feature_count = Rc::new(RefCell::new(0));
        let view_count = Rc::new(RefCell::new(0));

        let fc = feature_count.clone();
        bus.subscribe(Channel::FeatureAdded, move |_| *fc.borrow_mut() += 1);
        let vc = view_count.clone();
        bus.subscribe(Channel::ViewChanged, move |_| *vc.borrow_mut() += 1);

        bus.publish(&feature_event());
        bus.publish(&Event::ViewChanged(ViewOptions::default()));
        bus.publish(&feature_event());

        assert_eq!(*feature_count.borrow(), 2);
        assert_eq!(*view_count.borrow(), 1);
    }
}
