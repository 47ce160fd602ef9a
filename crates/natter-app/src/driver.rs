//! Collaborator traits abstracting the runtime's I/O seams.
//!
//! The [`Runtime`](crate::Runtime) is generic over three collaborators, so
//! the same orchestration code runs against a production socket and HTTP
//! stack or against scripted in-memory doubles.
//!
//! # Implementations
//!
//! - **Production**: a socket client for the bus, an HTTP client carrying
//!   the [`natter_proto::BearerToken`] credential for the request channel,
//!   and whatever frontend renders the engine state
//! - **Tests**: scripted bus and in-memory server model
//!
//! # Associated Types
//!
//! Each trait carries its own `Error` type; the runtime wraps them in
//! [`RuntimeError`](crate::RuntimeError) without inspecting them.

use std::future::Future;

use natter_client::SyncEngine;
use natter_proto::{
    Channel, ChannelId, InboundEvent, Message, MessageId, MessageUpdate, OutboundEvent, UserId,
};

/// Push-side collaborator: the server's broadcast fan-out.
///
/// The runtime connects once, holds a single subscription for the whole
/// session, and treats a `None` from [`EventBus::next_event`] as the end of
/// the session.
pub trait EventBus: Send {
    /// Transport-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Establish the bus connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    fn connect(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Tear the connection down.
    fn disconnect(&mut self) -> impl Future<Output = ()> + Send;

    /// Emit one event to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is closed or the emit fails.
    fn emit(&mut self, event: OutboundEvent)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Await the next broadcast, or `None` once the stream has ended.
    fn next_event(&mut self) -> impl Future<Output = Option<InboundEvent>> + Send;
}

/// Request/response collaborator for fetches and authoritative mutations.
///
/// Edits and deletes go through here exclusively; the server applies them,
/// broadcasts, and every client converges via a reconciling fetch.
pub trait RemoteChannel: Send {
    /// Transport-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Fetch the full channel list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the runtime does not retry.
    fn fetch_channels(&mut self) -> impl Future<Output = Result<Vec<Channel>, Self::Error>> + Send;

    /// Fetch one channel's full message list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn fetch_messages(
        &mut self,
        channel_id: &ChannelId,
    ) -> impl Future<Output = Result<Vec<Message>, Self::Error>> + Send;

    /// Fetch every message authored by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn fetch_user_messages(
        &mut self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<Message>, Self::Error>> + Send;

    /// Update a channel's name and description.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn update_channel(
        &mut self,
        channel_id: &ChannelId,
        name: &str,
        description: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Delete a channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn delete_channel(
        &mut self,
        channel_id: &ChannelId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Rewrite a message's body and flattened author fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn update_message(
        &mut self,
        message_id: &MessageId,
        update: &MessageUpdate,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Delete a message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn delete_message(
        &mut self,
        message_id: &MessageId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Render seam, invoked on every observable state change.
pub trait View: Send {
    /// Frontend-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Render the engine's current state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, engine: &SyncEngine) -> Result<(), Self::Error>;
}
