//! Ephemeral who-is-typing-where state and its banner projection.
//!
//! The registry is replaced wholesale by every `userTypingUpdate` broadcast
//! and relies on explicit stop-typing signals only; there is no TTL, so a
//! client that disconnects mid-keystroke stays in the registry until the
//! server notices (known gap, kept intentionally).

use natter_proto::{ChannelId, TypingMap};

/// Mapping from typing user's display name to the channel they type in.
#[derive(Debug, Clone, Default)]
pub struct TypingRegistry {
    typing: TypingMap,
}

impl TypingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry with a fresh server snapshot.
    pub fn replace(&mut self, snapshot: TypingMap) {
        self.typing = snapshot;
    }

    /// Project the registry into the banner shown above the input box.
    ///
    /// Filters to users other than `viewer` typing in `selected`. Zero
    /// matches yield the empty string; one yields
    /// `"<name> is typing a message..."`; several join the names with
    /// `", "` and use `are`. Names appear in sorted order, which keeps the
    /// projection deterministic.
    pub fn banner(&self, viewer: &str, selected: Option<&ChannelId>) -> String {
        let Some(selected) = selected else {
            return String::new();
        };

        let names: Vec<&str> = self
            .typing
            .iter()
            .filter(|(name, channel)| name.as_str() != viewer && *channel == selected)
            .map(|(name, _)| name.as_str())
            .collect();

        match names.len() {
            0 => String::new(),
            1 => format!("{} is typing a message...", names[0]),
            _ => format!("{} are typing a message...", names.join(", ")),
        }
    }
}
