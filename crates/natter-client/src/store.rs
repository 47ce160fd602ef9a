//! Canonical in-process snapshot of chat state.
//!
//! [`ChatStateStore`] holds the client's view of channels, the active
//! channel's messages, and the unread set. It is a pure synchronous data
//! holder: no network access, no failure modes. All causality and ordering
//! policy lives in the engine; the store only applies mutations.
//!
//! Channels and messages are kept as keyed maps plus an explicit
//! display-order sequence, so every insert is an O(1) idempotent upsert and
//! duplicate broadcast delivery cannot produce duplicate entries.

use std::collections::{HashMap, HashSet};

use natter_proto::{Channel, ChannelId, Message, MessageId};

/// In-memory authoritative client-side model of channels, messages, and
/// unread markers.
///
/// The store keeps messages for a single channel at a time (the active one);
/// switching channels replaces the message view via [`Self::set_messages`].
#[derive(Debug, Clone, Default)]
pub struct ChatStateStore {
    channels: HashMap<ChannelId, Channel>,
    channel_order: Vec<ChannelId>,
    messages: HashMap<MessageId, Message>,
    message_order: Vec<MessageId>,
    unread: HashSet<ChannelId>,
}

impl ChatStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full channel list, preserving server order.
    ///
    /// Unread markers for channels that no longer exist are pruned.
    pub fn set_channels(&mut self, channels: Vec<Channel>) {
        self.channels.clear();
        self.channel_order.clear();
        for channel in channels {
            if self.channels.insert(channel.id.clone(), channel.clone()).is_none() {
                self.channel_order.push(channel.id);
            }
        }
        self.unread.retain(|id| self.channels.contains_key(id));
    }

    /// Insert or update one channel, keyed by id.
    ///
    /// A repeated broadcast for the same id updates in place and keeps the
    /// original display position.
    pub fn upsert_channel(&mut self, channel: Channel) {
        if self.channels.insert(channel.id.clone(), channel.clone()).is_none() {
            self.channel_order.push(channel.id);
        }
    }

    /// Remove a channel and its unread marker, if present.
    pub fn remove_channel(&mut self, id: &ChannelId) -> Option<Channel> {
        let removed = self.channels.remove(id);
        if removed.is_some() {
            self.channel_order.retain(|existing| existing != id);
            self.unread.remove(id);
        }
        removed
    }

    /// Channels in display (server) order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channel_order.iter().filter_map(|id| self.channels.get(id))
    }

    /// Look up one channel.
    pub fn channel(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.get(id)
    }

    /// True if the channel is known to the store.
    pub fn contains_channel(&self, id: &ChannelId) -> bool {
        self.channels.contains_key(id)
    }

    /// First channel in display order, the default selection target.
    pub fn first_channel(&self) -> Option<&Channel> {
        self.channel_order.first().and_then(|id| self.channels.get(id))
    }

    /// Number of known channels.
    pub fn channel_count(&self) -> usize {
        self.channel_order.len()
    }

    /// Replace the message view with `channel`'s authoritative list.
    ///
    /// Messages whose `channel_id` does not match are orphans from a
    /// concurrent channel deletion and are dropped.
    pub fn set_messages(&mut self, channel: &ChannelId, messages: Vec<Message>) {
        self.messages.clear();
        self.message_order.clear();
        for message in messages {
            if message.channel_id != *channel {
                continue;
            }
            if self.messages.insert(message.id.clone(), message.clone()).is_none() {
                self.message_order.push(message.id);
            }
        }
    }

    /// Append one message to the active view, idempotent by id.
    ///
    /// Returns `false` if a message with the same id was already present.
    pub fn append_message(&mut self, message: Message) -> bool {
        if self.messages.contains_key(&message.id) {
            return false;
        }
        self.messages.insert(message.id.clone(), message.clone());
        self.message_order.push(message.id);
        true
    }

    /// Messages of the active channel in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.message_order.iter().filter_map(|id| self.messages.get(id))
    }

    /// Number of messages in the active view.
    pub fn message_count(&self) -> usize {
        self.message_order.len()
    }

    /// Mark a channel as read. Idempotent removal.
    ///
    /// Returns `true` if the channel had been unread.
    pub fn mark_read(&mut self, id: &ChannelId) -> bool {
        self.unread.remove(id)
    }

    /// Mark a channel as unread. Idempotent insertion.
    ///
    /// Returns `true` if the marker was newly added.
    pub fn mark_unread(&mut self, id: ChannelId) -> bool {
        self.unread.insert(id)
    }

    /// True if the channel carries an unread marker.
    pub fn is_unread(&self, id: &ChannelId) -> bool {
        self.unread.contains(id)
    }

    /// Channels with unseen messages.
    pub fn unread(&self) -> &HashSet<ChannelId> {
        &self.unread
    }
}
