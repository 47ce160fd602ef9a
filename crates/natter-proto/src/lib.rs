//! Wire vocabulary for the Natter chat synchronization core.
//!
//! Defines the entity types (channels, messages, profiles), the push-event
//! vocabulary crossing the bidirectional event bus, and the opaque bearer
//! credential carried by request/response implementations. Transport
//! mechanics (sockets, HTTP) live behind the collaborator traits in
//! `natter-app`; this crate only fixes names and shapes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod auth;
mod events;
mod types;

pub use auth::BearerToken;
pub use events::{InboundEvent, OutboundEvent, ProtocolError, TypingMap, wire};
pub use types::{Channel, ChannelId, Message, MessageId, MessageUpdate, UserId, UserProfile};
