//! Side effects produced by the sync engine.
//!
//! The engine never performs I/O itself; it returns [`SyncAction`]s for the
//! runtime to execute against the event bus and the request/response
//! channel. Fetches carry the selection [`Epoch`] captured at issue time so
//! their completions can be discarded when the user has moved on.

use natter_proto::{ChannelId, MessageId, MessageUpdate, OutboundEvent, UserId};

use crate::selection::Epoch;

/// Instructions for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Emit an event over the bus.
    Emit(OutboundEvent),

    /// Reconciling fetch of the full channel list.
    FetchChannels {
        /// Selection epoch at issue time.
        epoch: Epoch,
    },

    /// Reconciling fetch of one channel's full message list.
    FetchMessages {
        /// Channel to reload.
        channel_id: ChannelId,
        /// Selection epoch at issue time.
        epoch: Epoch,
    },

    /// Fetch every message authored by a user (profile re-attribution).
    FetchUserMessages {
        /// Author to look up.
        user_id: UserId,
    },

    /// Apply a channel edit over the request/response channel.
    ///
    /// The server applies the change and broadcasts; all clients converge
    /// via the resulting reconciling refetch.
    UpdateChannel {
        /// Channel to edit.
        channel_id: ChannelId,
        /// New camel-cased name.
        name: String,
        /// New description.
        description: String,
    },

    /// Delete a channel over the request/response channel.
    DeleteChannel {
        /// Channel to delete.
        channel_id: ChannelId,
    },

    /// Apply a message edit over the request/response channel.
    UpdateMessage {
        /// Message to edit.
        message_id: MessageId,
        /// New body and author fields.
        update: MessageUpdate,
    },

    /// Delete a message over the request/response channel.
    DeleteMessage {
        /// Message to delete.
        message_id: MessageId,
    },

    /// Re-render the UI from engine state.
    Render,
}
