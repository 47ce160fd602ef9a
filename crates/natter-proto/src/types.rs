//! Entity types shared between the sync core and its collaborators.
//!
//! All identifiers are opaque strings assigned by the server; the client
//! never parses or orders them. Field names on the wire follow the backend's
//! camelCase convention via serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque server-assigned channel identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

/// Opaque server-assigned message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

/// Opaque server-assigned user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! opaque_id {
    ($name:ident) => {
        impl $name {
            /// Wrap a raw identifier string.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True if the identifier is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }
    };
}

opaque_id!(ChannelId);
opaque_id!(MessageId);
opaque_id!(UserId);

/// A named topic containing an ordered list of messages.
///
/// Owned exclusively by the client's state store; the UI holds read-only
/// copies. Channel names are unique camel-cased identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Server-assigned identifier.
    pub id: ChannelId,
    /// Unique camel-cased channel name.
    pub name: String,
    /// Free-form channel description.
    pub description: String,
}

/// A chat message belonging to exactly one channel.
///
/// The id and timestamp are assigned by the server on creation; the author's
/// profile is flattened into the message, so edits to a profile require
/// rewriting that user's messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned identifier.
    pub id: MessageId,
    /// Channel this message belongs to.
    pub channel_id: ChannelId,
    /// Author's user id.
    pub user_id: UserId,
    /// Author's display name at send time.
    pub user_name: String,
    /// Author's avatar image name at send time.
    pub user_avatar: String,
    /// Author's avatar background color at send time.
    pub user_avatar_color: String,
    /// Message text.
    #[serde(rename = "messageBody")]
    pub body: String,
    /// Server-assigned creation instant.
    pub time_stamp: DateTime<Utc>,
}

/// The viewer's identity as flattened into outgoing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Avatar image name.
    pub avatar: String,
    /// Avatar background color.
    pub avatar_color: String,
}

/// Body of a message update request.
///
/// Mirrors the backend's PUT body: the new text plus the (possibly rewritten)
/// flattened author fields. The message keeps its server-assigned timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpdate {
    /// New message text.
    #[serde(rename = "messageBody")]
    pub body: String,
    /// Author's user id.
    pub user_id: UserId,
    /// Channel the message belongs to.
    pub channel_id: ChannelId,
    /// Author's display name.
    pub user_name: String,
    /// Author's avatar image name.
    pub user_avatar: String,
    /// Author's avatar background color.
    pub user_avatar_color: String,
}

impl MessageUpdate {
    /// Build an update that rewrites a message's author fields to `profile`,
    /// keeping the text unchanged.
    pub fn reattribute(message: &Message, profile: &UserProfile) -> Self {
        Self {
            body: message.body.clone(),
            user_id: profile.id.clone(),
            channel_id: message.channel_id.clone(),
            user_name: profile.name.clone(),
            user_avatar: profile.avatar.clone(),
            user_avatar_color: profile.avatar_color.clone(),
        }
    }
}
