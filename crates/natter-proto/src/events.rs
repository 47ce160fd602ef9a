//! Push-event vocabulary for the bidirectional event channel.
//!
//! Outbound events are client intents (the server assigns ids and timestamps
//! and echoes a broadcast to every connected client, the originator
//! included). Inbound events are server broadcasts triggered by some client's
//! mutation. Each event has a fixed wire name and a JSON payload.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::types::{Channel, ChannelId, Message, MessageId, UserProfile};

/// Wire names for every event crossing the bus.
pub mod wire {
    /// Outbound channel-creation intent.
    pub const NEW_CHANNEL: &str = "newChannel";
    /// Outbound message-creation intent.
    pub const NEW_MESSAGE: &str = "newMessage";
    /// Outbound typing-started signal.
    pub const START_TYPE: &str = "startType";
    /// Outbound typing-stopped signal.
    pub const STOP_TYPE: &str = "stopType";

    /// Inbound broadcast: a channel was created.
    pub const CHANNEL_CREATED: &str = "channelCreated";
    /// Inbound broadcast: a channel was updated.
    pub const USER_UPDATED_CHANNEL: &str = "userUpdatedChannel";
    /// Inbound broadcast: a channel was deleted.
    pub const USER_DELETED_CHANNEL: &str = "userDeletedChannel";
    /// Inbound broadcast: a message was created.
    pub const MESSAGE_CREATED: &str = "messageCreated";
    /// Inbound broadcast: a message was updated.
    pub const USER_UPDATED_MESSAGE: &str = "userUpdatedMessage";
    /// Inbound broadcast: a message was deleted.
    pub const USER_DELETED_MESSAGE: &str = "userDeletedMessage";
    /// Inbound broadcast: the who-is-typing-where registry changed.
    pub const USER_TYPING_UPDATE: &str = "userTypingUpdate";
}

/// Events the client emits over the bus.
///
/// Creation intents carry no id or timestamp; those are server-assigned.
/// Edits and deletes do not appear here: they travel over the REST channel,
/// and the server broadcasts after applying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// Create a channel.
    NewChannel {
        /// Camel-cased channel name.
        name: String,
        /// Channel description.
        description: String,
    },

    /// Send a message with the author's profile flattened in.
    NewMessage {
        /// Message text.
        body: String,
        /// Target channel.
        channel_id: ChannelId,
        /// Author profile providing the flattened user fields.
        user: UserProfile,
    },

    /// The viewer started typing in a channel.
    StartType {
        /// Typing user's display name.
        user_name: String,
        /// Channel being typed in.
        channel_id: ChannelId,
    },

    /// The viewer stopped typing.
    StopType {
        /// User's display name.
        user_name: String,
    },
}

impl OutboundEvent {
    /// Wire name the event is emitted under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewChannel { .. } => wire::NEW_CHANNEL,
            Self::NewMessage { .. } => wire::NEW_MESSAGE,
            Self::StartType { .. } => wire::START_TYPE,
            Self::StopType { .. } => wire::STOP_TYPE,
        }
    }

    /// JSON payload in the backend's camelCase field convention.
    pub fn payload(&self) -> Value {
        match self {
            Self::NewChannel { name, description } => json!({
                "name": name,
                "description": description,
            }),
            Self::NewMessage { body, channel_id, user } => json!({
                "messageBody": body,
                "userId": user.id,
                "channelId": channel_id,
                "userName": user.name,
                "userAvatar": user.avatar,
                "userAvatarColor": user.avatar_color,
            }),
            Self::StartType { user_name, channel_id } => json!({
                "userName": user_name,
                "channelId": channel_id,
            }),
            Self::StopType { user_name } => json!({
                "userName": user_name,
            }),
        }
    }
}

/// Snapshot mapping a typing user's display name to the channel they are
/// typing in.
pub type TypingMap = BTreeMap<String, ChannelId>;

/// Broadcasts the server pushes to every connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A channel was created (echoed to the originator too).
    ChannelCreated(Channel),

    /// A channel was updated. Carries the full new state so no client needs
    /// to remember the parameters of an edit it did not make.
    ChannelUpdated(Channel),

    /// A channel was deleted.
    ChannelDeleted {
        /// Deleted channel.
        channel_id: ChannelId,
    },

    /// A message was created, with server-assigned id and timestamp.
    MessageCreated(Message),

    /// A message was edited; carries only the affected channel.
    MessageUpdated {
        /// Channel whose message list is now stale.
        channel_id: ChannelId,
    },

    /// A message was deleted; carries only the message id.
    MessageDeleted {
        /// Deleted message.
        message_id: MessageId,
    },

    /// Replacement snapshot of who is typing where.
    TypingUpdate(TypingMap),
}

/// Wire decode failures for inbound events.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Event name not part of the protocol.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// Payload did not match the event's schema.
    #[error("malformed {event} payload")]
    MalformedPayload {
        /// Wire name of the offending event.
        event: &'static str,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelIdPayload {
    channel_id: ChannelId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageIdPayload {
    message_id: MessageId,
}

impl InboundEvent {
    /// Wire name the event arrives under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChannelCreated(_) => wire::CHANNEL_CREATED,
            Self::ChannelUpdated(_) => wire::USER_UPDATED_CHANNEL,
            Self::ChannelDeleted { .. } => wire::USER_DELETED_CHANNEL,
            Self::MessageCreated(_) => wire::MESSAGE_CREATED,
            Self::MessageUpdated { .. } => wire::USER_UPDATED_MESSAGE,
            Self::MessageDeleted { .. } => wire::USER_DELETED_MESSAGE,
            Self::TypingUpdate(_) => wire::USER_TYPING_UPDATE,
        }
    }

    /// Decode an event from its wire name and JSON payload.
    pub fn from_wire(name: &str, payload: Value) -> Result<Self, ProtocolError> {
        fn decode<T: serde::de::DeserializeOwned>(
            event: &'static str,
            payload: Value,
        ) -> Result<T, ProtocolError> {
            serde_json::from_value(payload)
                .map_err(|source| ProtocolError::MalformedPayload { event, source })
        }

        match name {
            wire::CHANNEL_CREATED => decode(wire::CHANNEL_CREATED, payload).map(Self::ChannelCreated),
            wire::USER_UPDATED_CHANNEL => {
                decode(wire::USER_UPDATED_CHANNEL, payload).map(Self::ChannelUpdated)
            },
            wire::USER_DELETED_CHANNEL => decode::<ChannelIdPayload>(wire::USER_DELETED_CHANNEL, payload)
                .map(|p| Self::ChannelDeleted { channel_id: p.channel_id }),
            wire::MESSAGE_CREATED => decode(wire::MESSAGE_CREATED, payload).map(Self::MessageCreated),
            wire::USER_UPDATED_MESSAGE => decode::<ChannelIdPayload>(wire::USER_UPDATED_MESSAGE, payload)
                .map(|p| Self::MessageUpdated { channel_id: p.channel_id }),
            wire::USER_DELETED_MESSAGE => decode::<MessageIdPayload>(wire::USER_DELETED_MESSAGE, payload)
                .map(|p| Self::MessageDeleted { message_id: p.message_id }),
            wire::USER_TYPING_UPDATE => {
                decode(wire::USER_TYPING_UPDATE, payload).map(Self::TypingUpdate)
            },
            other => Err(ProtocolError::UnknownEvent(other.to_owned())),
        }
    }
}
