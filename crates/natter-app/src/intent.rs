//! User intents fed into the runtime.

use natter_proto::{ChannelId, Message, MessageId, UserProfile};

/// Commands a frontend sends to the runtime over its intent channel.
///
/// Each intent maps onto one [`SyncEngine`](natter_client::SyncEngine)
/// method; the runtime executes the resulting actions before taking the
/// next intent or broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Create a channel with a free-form name (camel-cased before emit).
    CreateChannel {
        /// Display name as typed by the user.
        name: String,
        /// Channel description.
        description: String,
    },

    /// Edit an existing channel's name and description.
    EditChannel {
        /// Channel to edit.
        channel_id: ChannelId,
        /// New display name as typed.
        name: String,
        /// New description.
        description: String,
    },

    /// Delete a channel.
    DeleteChannel {
        /// Channel to delete.
        channel_id: ChannelId,
    },

    /// Send a message to the selected channel.
    SendMessage {
        /// Message body.
        body: String,
    },

    /// Edit a message's body.
    EditMessage {
        /// Message being edited, as currently displayed.
        message: Message,
        /// New body.
        body: String,
    },

    /// Delete a message.
    DeleteMessage {
        /// Message to delete.
        message_id: MessageId,
    },

    /// The viewer started typing in the selected channel.
    StartTyping,

    /// The viewer stopped typing.
    StopTyping,

    /// Switch the active channel.
    SelectChannel {
        /// Channel to activate.
        channel_id: ChannelId,
    },

    /// Adopt a new viewer profile and re-attribute authored messages.
    UpdateProfile {
        /// The new profile.
        profile: UserProfile,
    },

    /// Shut the runtime down.
    Quit,
}
