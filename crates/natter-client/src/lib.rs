//! Client
//!
//! Action-based cache synchronizer for the Natter chat backend. Manages the
//! channel list, the active channel's message view, unread flags, typing
//! state, and channel selection.
//!
//! # Architecture
//!
//! The crate follows a Sans-IO, action-based pattern. [`SyncEngine`] receives
//! user intents, server broadcasts ([`natter_proto::InboundEvent`]), and
//! fetch completions, processes them through pure state machine logic, and
//! returns [`SyncAction`]s for the caller to execute.
//!
//! # Components
//!
//! - [`SyncEngine`]: Top-level state machine coordinating cache and selection
//! - [`ChatStateStore`]: Keyed channel, message, and unread collections
//! - [`SelectionController`]: Active channel and selection [`Epoch`]s
//! - [`TypingRegistry`]: Who-is-typing state and its banner projection
//! - [`SyncAction`]: Actions produced by the engine

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod camel;
mod engine;
mod selection;
mod store;
mod typing;

pub use action::SyncAction;
pub use camel::to_camel_case;
pub use engine::SyncEngine;
pub use selection::{Epoch, SelectionController};
pub use store::ChatStateStore;
pub use typing::TypingRegistry;
